//! Configuration module for opsdash.
//!
//! Only presentation and reproducibility are configurable. The shape of the
//! synthetic data is fixed in code.

mod window_config;

pub use window_config::WindowEnvConfig;

use crate::domain::errors::DashboardError;
use std::env;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub window: WindowEnvConfig,
    /// Unset means every run draws fresh values
    pub seed: Option<u64>,
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, DashboardError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, DashboardError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup("DASHBOARD_SEED") {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                DashboardError::InvalidConfig {
                    key: "DASHBOARD_SEED".to_string(),
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            window: WindowEnvConfig::from_lookup(&lookup)?,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = DashboardConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.window.width, 1200.0);
        assert_eq!(config.window.height, 800.0);
    }

    #[test]
    fn test_config_overrides() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            ("DASHBOARD_SEED", "1234"),
            ("DASHBOARD_TITLE", "Staging"),
            ("DASHBOARD_WIDTH", "1600"),
        ]))
        .unwrap();

        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.window.title, "Staging");
        assert_eq!(config.window.width, 1600.0);
        assert_eq!(config.window.height, 800.0);
    }

    #[test]
    fn test_invalid_seed_is_rejected() {
        let err = DashboardConfig::from_lookup(lookup_from(&[("DASHBOARD_SEED", "abc")]))
            .unwrap_err();
        assert!(matches!(
            err,
            DashboardError::InvalidConfig { ref key, .. } if key == "DASHBOARD_SEED"
        ));
    }
}
