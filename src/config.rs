//! Environment-driven settings
//!
//! - `TWIG_COMMIT_DATE`: fixed timestamp for new commits, as RFC 2822 or
//!   `%Y-%m-%d %H:%M:%S %z`. The local clock is used when unset or unparsable.
//! - `NO_PAGER`: never page long output.
//! - `TWIG_LOG`: log filter, read by [`crate::telemetry`].

use chrono::{DateTime, FixedOffset, Local};
use is_terminal::IsTerminal;

pub const COMMIT_DATE_ENV: &str = "TWIG_COMMIT_DATE";
pub const NO_PAGER_ENV: &str = "NO_PAGER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    commit_date: Option<DateTime<FixedOffset>>,
    pager: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            commit_date: None,
            pager: true,
        }
    }
}

impl Config {
    pub fn load_from_env() -> Self {
        let commit_date = std::env::var(COMMIT_DATE_ENV)
            .ok()
            .and_then(|date_str| match Self::parse_date(&date_str) {
                Some(date) => Some(date),
                None => {
                    tracing::warn!(value = %date_str, "ignoring unparsable {COMMIT_DATE_ENV}");
                    None
                }
            });
        let pager = std::env::var_os(NO_PAGER_ENV).is_none();

        Config { commit_date, pager }
    }

    pub fn with_commit_date(mut self, commit_date: DateTime<FixedOffset>) -> Self {
        self.commit_date = Some(commit_date);
        self
    }

    pub fn without_pager(mut self) -> Self {
        self.pager = false;
        self
    }

    pub fn parse_date(date_str: &str) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc2822(date_str)
            .or_else(|_| DateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S %z"))
            .ok()
    }

    /// Timestamp for a commit created now
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.commit_date
            .unwrap_or_else(|| Local::now().fixed_offset())
    }

    /// Page long output only when enabled and stdout is a terminal
    pub fn use_pager(&self) -> bool {
        self.pager && std::io::stdout().is_terminal()
    }
}
