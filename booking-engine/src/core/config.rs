use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::allocation::AllocationStrategy;

/// Booking engine configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | SLOT_INTERVAL_MINUTES | 15 | Slot and booking length granularity |
/// | CLOSING_BUFFER_MINUTES | 60 | No slots offered in this block before closing |
/// | MAX_BOOKING_MINUTES | 120 | Longest allowed booking |
/// | ALLOCATION_STRATEGY | pair | `pair` or `subset` |
/// | MAX_COMBINED_TABLES | 3 | Table limit for the `subset` strategy |
/// | LOG_LEVEL | info | Tracing level |
/// | LOG_DIR | (unset) | Daily rolling log directory |
///
/// # Example
///
/// ```ignore
/// ALLOCATION_STRATEGY=subset MAX_COMBINED_TABLES=4 cargo test
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub slot_interval_minutes: u32,
    pub closing_buffer_minutes: u32,
    pub max_booking_minutes: u32,
    pub allocation_strategy: AllocationStrategy,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl EngineConfig {
    /// Load the configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let max_tables = env_parse("MAX_COMBINED_TABLES").unwrap_or(3);
        let allocation_strategy = match std::env::var("ALLOCATION_STRATEGY") {
            Ok(name) => AllocationStrategy::from_name(&name, max_tables).unwrap_or_else(|| {
                tracing::warn!(
                    strategy = %name,
                    "Unknown ALLOCATION_STRATEGY, falling back to pair"
                );
                AllocationStrategy::PairOnly
            }),
            Err(_) => defaults.allocation_strategy,
        };

        Self {
            slot_interval_minutes: env_parse("SLOT_INTERVAL_MINUTES")
                .filter(|m| *m > 0)
                .unwrap_or(defaults.slot_interval_minutes),
            closing_buffer_minutes: env_parse("CLOSING_BUFFER_MINUTES")
                .unwrap_or(defaults.closing_buffer_minutes),
            max_booking_minutes: env_parse("MAX_BOOKING_MINUTES")
                .filter(|m| *m > 0)
                .unwrap_or(defaults.max_booking_minutes),
            allocation_strategy,
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok().or(defaults.log_dir),
        }
    }

    pub fn slot_interval(&self) -> Duration {
        Duration::minutes(i64::from(self.slot_interval_minutes))
    }

    pub fn closing_buffer(&self) -> Duration {
        Duration::minutes(i64::from(self.closing_buffer_minutes))
    }

    pub fn max_booking_length(&self) -> Duration {
        Duration::minutes(i64::from(self.max_booking_minutes))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            slot_interval_minutes: 15,
            closing_buffer_minutes: 60,
            max_booking_minutes: 120,
            allocation_strategy: AllocationStrategy::PairOnly,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
