//! # Bar Configuration
//!
//! Loads the bar's menu, capacity ceiling, serving delay and status labels from JSON.
//!
//! ```json
//! {
//!   "drink": [{ "name": "beer", "value": 1 }, { "name": "cocktail", "value": 2 }],
//!   "capacity": 3,
//!   "timeServing": 5,
//!   "servingState": "serving",
//!   "completedState": "completed"
//! }
//! ```
//!
//! Everything is validated once at load; the running system never sees a bad value.

use crate::model::{Catalog, CatalogError, DrinkDefinition, StatusLabels};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the path of the configuration file.
pub const CONFIG_ENV: &str = "BAR_CONFIG";

/// Path used when [`CONFIG_ENV`] is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Errors raised while loading a [`BarConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Invalid drink menu: {0}")]
    Catalog(#[from] CatalogError),
}

/// Startup configuration of the bar.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarConfig {
    #[serde(rename = "drink")]
    pub drinks: Vec<DrinkDefinition>,
    /// Capacity ceiling shared by every drink being served.
    pub capacity: u32,
    /// Seconds between admission and completion.
    pub time_serving: f64,
    pub serving_state: String,
    pub completed_state: String,
}

impl BarConfig {
    /// Reads and validates the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Loads the file named by `BAR_CONFIG`, or `config.json` when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(path)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: BarConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks a configuration that was built without [`from_json`](Self::from_json).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::Invalid("capacity must be greater than zero".into()));
        }
        if Duration::try_from_secs_f64(self.time_serving).is_err() {
            return Err(ConfigError::Invalid(format!(
                "timeServing must be a non-negative number of seconds, got {}",
                self.time_serving
            )));
        }
        if self.serving_state.trim().is_empty() || self.completed_state.trim().is_empty() {
            return Err(ConfigError::Invalid("status labels must not be empty".into()));
        }
        if self.serving_state == self.completed_state {
            return Err(ConfigError::Invalid(format!(
                "servingState and completedState are both {:?}",
                self.serving_state
            )));
        }
        if self.drinks.is_empty() {
            return Err(ConfigError::Invalid("at least one drink is required".into()));
        }
        self.catalog()?;
        Ok(())
    }

    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        Catalog::new(self.drinks.iter().cloned())
    }

    /// Delay between admission and completion. Zero if `timeServing` fails [`validate`](Self::validate).
    pub fn serving_time(&self) -> Duration {
        Duration::try_from_secs_f64(self.time_serving).unwrap_or_default()
    }

    pub fn labels(&self) -> StatusLabels {
        StatusLabels {
            serving: self.serving_state.clone(),
            completed: self.completed_state.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "drink": [{ "name": "beer", "value": 1 }, { "name": "cocktail", "capacityCost": 2 }],
        "capacity": 3,
        "timeServing": 2.5,
        "servingState": "serving",
        "completedState": "completed"
    }"#;

    fn with(field: &str, value: &str) -> String {
        let mut json: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
        json[field] = serde_json::from_str(value).unwrap();
        json.to_string()
    }

    #[test]
    fn test_parses_original_shape() {
        let config = BarConfig::from_json(SAMPLE).unwrap();
        assert_eq!(config.capacity, 3);
        assert_eq!(config.serving_time(), Duration::from_millis(2500));
        assert_eq!(config.labels().completed, "completed");

        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup("COCKTAIL").unwrap().capacity_cost, 2);
    }

    #[test]
    fn test_rejects_invalid_values() {
        for (field, value) in [
            ("capacity", "0"),
            ("timeServing", "-1"),
            ("timeServing", "1e300"),
            ("servingState", "\"\""),
            ("completedState", "\"serving\""),
            ("drink", "[]"),
        ] {
            let err = BarConfig::from_json(&with(field, value)).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{field}: {err}");
        }
    }

    #[test]
    fn test_rejects_bad_menu() {
        let err = BarConfig::from_json(&with(
            "drink",
            r#"[{ "name": "Beer", "value": 1 }, { "name": "beer", "value": 2 }]"#,
        ))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Catalog(CatalogError::DuplicateName(_))));

        let err = BarConfig::from_json(&with("drink", r#"[{ "name": "beer", "value": 0 }]"#))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Catalog(CatalogError::ZeroCost(_))));
    }

    #[test]
    fn test_parse_and_io_errors() {
        assert!(matches!(
            BarConfig::from_json("{ \"capacity\": 3 }"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            BarConfig::load("/nonexistent/bar/config.json"),
            Err(ConfigError::Io { .. })
        ));
    }
}
