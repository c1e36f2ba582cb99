//! Landing page view state.
//!
//! A [`HomePage`] is mounted per page view: it starts in the loading phase with
//! placeholder counters, performs a single stats read, and is then rendered.

pub mod features;
pub mod render;
pub mod time;

use serde::Serialize;
use tracing::{debug, error};

use crate::stats::{Applicant, StatItem, StatValue, StatsError, StatsResponse, StatsSource};

pub use features::{FeatureCard, FeatureIcon, FEATURES};
pub use render::{render_html, render_text};
pub use time::{format_created_at, format_created_at_in};

/// Labels shown before the backend has answered (or when it never does).
pub const DEFAULT_STAT_LABELS: [&str; 4] = [
    "Total Records",
    "Active Cases",
    "Records Added Today",
    "Recent Updates",
];

pub fn default_stats() -> Vec<StatItem> {
    DEFAULT_STAT_LABELS
        .iter()
        .map(|label| StatItem::count(*label, 0))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HomePhase {
    Loading,
    Loaded,
    Defaults,
}

#[derive(Debug, Clone)]
pub struct HomePage {
    stats: Vec<StatItem>,
    recent_applicants: Vec<Applicant>,
    loading: bool,
    loaded: bool,
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            stats: default_stats(),
            recent_applicants: Vec::new(),
            loading: true,
            loaded: false,
        }
    }

    pub fn stats(&self) -> &[StatItem] {
        &self.stats
    }

    pub fn recent_applicants(&self) -> &[Applicant] {
        &self.recent_applicants
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> HomePhase {
        if self.loading {
            HomePhase::Loading
        } else if self.loaded {
            HomePhase::Loaded
        } else {
            HomePhase::Defaults
        }
    }

    /// Performs the page's single stats read. Never retries and never fails:
    /// errors are logged and the current state is kept.
    pub async fn load<S>(&mut self, source: &S)
    where
        S: StatsSource + ?Sized,
    {
        let outcome = match source.fetch_stats().await {
            Ok(response) => self.apply(response),
            Err(err) => Err(err),
        };
        if let Err(err) = outcome {
            error!(error = %err, "failed to fetch stats");
        }
        self.loading = false;
    }

    /// Splits a stats response into counters and the recent complaint list.
    pub fn apply(&mut self, response: StatsResponse) -> Result<(), StatsError> {
        if !response.success {
            debug!("stats endpoint reported failure; keeping current stats");
            return Ok(());
        }
        let data = response.data.ok_or(StatsError::MissingData)?;

        let (mut recent, stats): (Vec<StatItem>, Vec<StatItem>) =
            data.into_iter().partition(StatItem::is_recent_applicants);

        self.stats = stats;
        self.loaded = true;

        if recent.is_empty() {
            return Ok(());
        }
        match recent.swap_remove(0).value {
            StatValue::Records(applicants) => self.recent_applicants = applicants,
            other => debug!(value = %other, "recent applicants entry is not a list"),
        }
        Ok(())
    }
}
