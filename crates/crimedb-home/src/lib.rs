pub mod config;
pub mod error;
pub mod home;
pub mod stats;
pub mod telemetry;
