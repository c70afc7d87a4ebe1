//! Window configuration parsing from environment variables.

use crate::domain::errors::DashboardError;

pub const DEFAULT_TITLE: &str = "Observability Dashboard";
pub const DEFAULT_WIDTH: f32 = 1200.0;
pub const DEFAULT_HEIGHT: f32 = 800.0;

/// Window environment configuration
#[derive(Debug, Clone, PartialEq)]
pub struct WindowEnvConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowEnvConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl WindowEnvConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DashboardError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let title = lookup("DASHBOARD_TITLE")
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        Ok(Self {
            title,
            width: parse_extent(&lookup, "DASHBOARD_WIDTH", DEFAULT_WIDTH)?,
            height: parse_extent(&lookup, "DASHBOARD_HEIGHT", DEFAULT_HEIGHT)?,
        })
    }
}

fn parse_extent<F>(lookup: &F, key: &str, default: f32) -> Result<f32, DashboardError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(DashboardError::InvalidConfig {
            key: key.to_string(),
            value: raw,
            reason: "expected a positive number".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_config_defaults() {
        let config = WindowEnvConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, WindowEnvConfig::default());
        assert_eq!(config.title, "Observability Dashboard");
    }

    #[test]
    fn test_blank_title_falls_back() {
        let config = WindowEnvConfig::from_lookup(|k| {
            (k == "DASHBOARD_TITLE").then(|| "   ".to_string())
        })
        .unwrap();
        assert_eq!(config.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_negative_width_is_rejected() {
        let err = WindowEnvConfig::from_lookup(|k| {
            (k == "DASHBOARD_WIDTH").then(|| "-5".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains("DASHBOARD_WIDTH"));
    }
}
