use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Tunables for the compatibility scorer.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Clamp the compatibility percentage into `0..=100`.
    pub clamp_percentage: bool,
    /// Drop overlapping-date entries identical to one already reported.
    pub dedupe_overlapping_dates: bool,
    /// Maximum age difference (years) that still counts as "similar age".
    pub age_tolerance_years: f64,
    /// chrono format string for overlap range labels.
    pub date_label_format: String,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            clamp_percentage: true,
            dedupe_overlapping_dates: false,
            age_tolerance_years: 2.0,
            date_label_format: "%-m/%-d/%Y".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `WAYFARER_SCORING__CLAMP_PERCENTAGE=false`
            .add_source(config::Environment::with_prefix("WAYFARER").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
