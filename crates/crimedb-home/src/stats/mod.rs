//! Backend statistics document: wire model and HTTP client.

mod client;
mod model;

pub use client::{HttpStatsClient, StatsError, StatsSource};
pub use model::{Applicant, StatItem, StatValue, StatsResponse, RECENT_APPLICANTS_LABEL};
