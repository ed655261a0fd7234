use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Published CSV export of the production matches dataset.
pub const DEFAULT_MATCHES_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQG9rp1Zzv4WcMBI1M9tAE_qJWKz2MCfH8UPTni2WMTjJqC7ew1gHnDjoBPHsuV9eF-9ECOZRR3lPFA/pub?gid=1361615103&single=true&output=csv";

/// Published CSV export of the per-batter run totals dataset.
pub const DEFAULT_BATTER_RUNS_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRwgITbG6BjnxnNvxkj8YKJem6EIJjaejYK4KHMRbI5eHaYDVDP5RSv5OLd0rN1wWRrTE4EqYuUqb3a/pub?gid=655438454&single=true&output=csv";

/// Published CSV export of the ball-by-ball deliveries dataset.
pub const DEFAULT_DELIVERIES_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQEJnmI-E6FluLo5khJ8JNuO9gYS0d3gZ0F1mY7zNca3ozajy26OTKAsoHjvyVdyI1CJHKGdrVidtrI/pub?gid=586204712&single=true&output=csv";

/// Where the three datasets are loaded from. Each location is either an
/// HTTP(S) URL or a filesystem path.
///
/// Fields fall back to the built-in defaults individually, so a config file
/// may name only the locations it wants to override.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SourceConfig {
    pub matches: String,
    pub batter_runs: String,
    pub deliveries: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            matches: DEFAULT_MATCHES_URL.to_owned(),
            batter_runs: DEFAULT_BATTER_RUNS_URL.to_owned(),
            deliveries: DEFAULT_DELIVERIES_URL.to_owned(),
        }
    }
}

impl SourceConfig {
    /// Apply per-dataset location overrides (CLI flags or env), highest
    /// precedence last.
    pub fn with_overrides(
        mut self,
        matches: Option<String>,
        batter_runs: Option<String>,
        deliveries: Option<String>,
    ) -> Self {
        if let Some(location) = matches {
            self.matches = location;
        }
        if let Some(location) = batter_runs {
            self.batter_runs = location;
        }
        if let Some(location) = deliveries {
            self.deliveries = location;
        }
        self
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scorebook").join("sources.json"))
}

/// Load source locations. An explicitly given path must exist and parse;
/// the default-location file is optional and silently falls back to the
/// built-in defaults when absent.
///
/// # Errors
///
/// Returns error if the config file cannot be read or is not valid JSON
pub fn load_source_config(path: Option<&Path>) -> Result<SourceConfig> {
    if let Some(path) = path {
        return read_config_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    match default_config_path() {
        Some(path) if path.exists() => read_config_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        _ => Ok(SourceConfig::default()),
    }
}

fn read_config_file(path: &Path) -> Result<SourceConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used)]

    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_defaults_point_at_published_exports() {
        let config = SourceConfig::default();
        assert_eq!(config.matches, DEFAULT_MATCHES_URL);
        assert_eq!(config.batter_runs, DEFAULT_BATTER_RUNS_URL);
        assert_eq!(config.deliveries, DEFAULT_DELIVERIES_URL);
    }

    #[test]
    fn test_partial_config_file_keeps_defaults_for_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"matches": "local/matches.csv"}}"#).unwrap();

        let config = load_source_config(Some(file.path())).unwrap();
        assert_eq!(config.matches, "local/matches.csv");
        assert_eq!(config.batter_runs, DEFAULT_BATTER_RUNS_URL);
        assert_eq!(config.deliveries, DEFAULT_DELIVERIES_URL);
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let result = load_source_config(Some(Path::new("/nonexistent/sources.json")));
        assert!(result.is_err(), "explicit config path must exist");
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = SourceConfig::default().with_overrides(
            Some("m.csv".to_owned()),
            None,
            Some("d.csv".to_owned()),
        );
        assert_eq!(config.matches, "m.csv");
        assert_eq!(config.batter_runs, DEFAULT_BATTER_RUNS_URL);
        assert_eq!(config.deliveries, "d.csv");
    }
}
