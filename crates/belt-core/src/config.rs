//! Shared runtime configuration (secrets) for utilities
//!
//! Secrets come from an optional TOML file plus `BELT_*` environment
//! variable overrides. A missing file is not an error; every field is
//! optional and utilities that need one complain at run time.

use crate::error::{BeltError, BeltResult};
use serde::Deserialize;
use std::path::Path;

/// Shared secrets injected into a utility via `configure()` before `run()`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Secrets {
    /// Discord webhook URL used by the webhook sender
    pub discord_webhook: Option<String>,
}

impl Secrets {
    /// Load secrets from an optional TOML file, then apply environment
    /// variable overrides (`BELT_DISCORD_WEBHOOK`).
    pub fn load(path: Option<&Path>) -> BeltResult<Self> {
        let mut secrets = match path {
            Some(p) if p.exists() => {
                let raw = std::fs::read_to_string(p)?;
                toml::from_str(&raw)
                    .map_err(|e| BeltError::config(format!("{}: {e}", p.display())))?
            }
            Some(p) => {
                tracing::debug!(path = %p.display(), "secrets file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };
        secrets.apply_env();
        Ok(secrets)
    }

    fn apply_env(&mut self) {
        if let Ok(v) = std::env::var("BELT_DISCORD_WEBHOOK") {
            self.discord_webhook = Some(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let secrets = Secrets::load(Some(Path::new("/nonexistent/belt.toml"))).unwrap();
        assert_eq!(secrets, Secrets::default());
    }

    #[test]
    fn no_path_yields_defaults() {
        let secrets = Secrets::load(None).unwrap();
        assert!(secrets.discord_webhook.is_none());
    }

    #[test]
    fn file_values_are_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "discord_webhook = \"https://discord.test/hook\"").unwrap();

        let secrets = Secrets::load(Some(file.path())).unwrap();
        assert_eq!(
            secrets.discord_webhook.as_deref(),
            Some("https://discord.test/hook")
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "discord_webhook = \"https://discord.test/hook\"").unwrap();
        writeln!(file, "legacy_setting = \"ignored\"").unwrap();

        let secrets = Secrets::load(Some(file.path())).unwrap();
        assert!(secrets.discord_webhook.is_some());
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "discord_webhook = [not toml").unwrap();

        let err = Secrets::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, BeltError::Config(_)));
    }
}
