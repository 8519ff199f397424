//! Startup configuration.
//!
//! The API credential is never compiled in: it comes from the
//! `NEWSDECK_API_KEY` environment variable, or from an optional
//! `newsdeck.ron` file in the working directory. The file can also select
//! the fetch policy knobs.

use std::path::Path;

use anyhow::{bail, Context};
use deck_logging::deck_warn;
use newsdeck_core::{EmptyResults, FailureMode, FallbackSize, FetchPolicy};
use serde::Deserialize;

const API_KEY_ENV: &str = "NEWSDECK_API_KEY";
const CONFIG_FILENAME: &str = "newsdeck.ron";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub policy: FetchPolicy,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    api_key: Option<String>,
    /// Show failure messages instead of substituting fallback content.
    strict_errors: bool,
    /// Accept an "ok" response with zero articles instead of treating it
    /// as a failure.
    accept_empty_results: bool,
    /// Truncate the built-in fallback datasets to three entries.
    minimal_fallback: bool,
}

pub fn load(dir: &Path) -> anyhow::Result<AppConfig> {
    let file = read_config_file(dir)?;
    let api_key = match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.is_empty() => key,
        _ => match file.api_key.clone().filter(|key| !key.is_empty()) {
            Some(key) => key,
            None => bail!(
                "no API key configured; set {API_KEY_ENV} or add api_key to {CONFIG_FILENAME}"
            ),
        },
    };

    Ok(AppConfig {
        api_key,
        policy: policy_from(&file),
    })
}

fn read_config_file(dir: &Path) -> anyhow::Result<ConfigFile> {
    let path = dir.join(CONFIG_FILENAME);
    let content = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigFile::default());
        }
        Err(err) => {
            deck_warn!("Failed to read config from {:?}: {}", path, err);
            return Ok(ConfigFile::default());
        }
    };
    ron::from_str(&content).with_context(|| format!("invalid config file {path:?}"))
}

fn policy_from(file: &ConfigFile) -> FetchPolicy {
    FetchPolicy {
        failure_mode: if file.strict_errors {
            FailureMode::Strict
        } else {
            FailureMode::Graceful
        },
        empty_results: if file.accept_empty_results {
            EmptyResults::Accept
        } else {
            EmptyResults::TreatAsFailure
        },
        fallback_size: if file.minimal_fallback {
            FallbackSize::Minimal
        } else {
            FallbackSize::Full
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = read_config_file(dir.path()).expect("defaults");
        assert_eq!(policy_from(&file), FetchPolicy::default());
    }

    #[test]
    fn config_file_selects_policy() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "(strict_errors: true, minimal_fallback: true)",
        )
        .unwrap();

        let file = read_config_file(dir.path()).expect("parsed");
        let policy = policy_from(&file);
        assert_eq!(policy.failure_mode, FailureMode::Strict);
        assert_eq!(policy.empty_results, EmptyResults::TreatAsFailure);
        assert_eq!(policy.fallback_size, FallbackSize::Minimal);
    }

    #[test]
    fn config_file_may_carry_api_key() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "(api_key: Some(\"from-file\"))",
        )
        .unwrap();

        let file = read_config_file(dir.path()).expect("parsed");
        assert_eq!(file.api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(CONFIG_FILENAME), "not ron at all (").unwrap();

        assert!(read_config_file(dir.path()).is_err());
    }
}
