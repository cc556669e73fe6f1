//! Console configuration
//!
//! Layering, lowest to highest precedence: built-in defaults, an optional
//! JSON config file, then `GAUNTLET_*` environment variables. The env lookup
//! is injected so the layering is testable without touching the process
//! environment.

use crate::error::{GauntletError, GauntletResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "gauntlet_config.json";

/// Console configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the agent service
    pub agent_api: String,
    /// Base URL of the judge service
    pub judge_api: String,
    /// Path to the challenge catalog
    pub challenges_file: PathBuf,
    /// Turn budget passed to the agent per run
    pub max_turns: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agent_api: "http://localhost:4000".to_string(),
            judge_api: "http://localhost:8080".to_string(),
            challenges_file: PathBuf::from("challenges.json"),
            max_turns: 50,
        }
    }
}

impl Config {
    /// Load configuration: defaults, then file (if it exists), then env
    pub fn load(config_file: &Path) -> GauntletResult<Self> {
        let mut config = if config_file.exists() {
            let raw = std::fs::read_to_string(config_file).map_err(|e| {
                GauntletError::config(format!(
                    "cannot read config file {}: {e}",
                    config_file.display()
                ))
            })?;
            serde_json::from_str(&raw).map_err(|e| {
                GauntletError::config(format!(
                    "invalid config file {}: {e}",
                    config_file.display()
                ))
            })?
        } else {
            Self::default()
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply `GAUNTLET_*` overrides from the given lookup
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("GAUNTLET_AGENT_API") {
            self.agent_api = value;
        }
        if let Some(value) = lookup("GAUNTLET_JUDGE_API") {
            self.judge_api = value;
        }
        if let Some(value) = lookup("GAUNTLET_CHALLENGES_FILE") {
            self.challenges_file = PathBuf::from(value);
        }
        if let Some(value) = lookup("GAUNTLET_MAX_TURNS") {
            match value.parse() {
                Ok(turns) => self.max_turns = turns,
                Err(_) => tracing::warn!("ignoring non-numeric GAUNTLET_MAX_TURNS={value:?}"),
            }
        }
    }

    fn validate(&self) -> GauntletResult<()> {
        for (name, url) in [("agent_api", &self.agent_api), ("judge_api", &self.judge_api)] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(GauntletError::config(format!(
                    "{name} must be an http(s) URL, got {url:?}"
                )));
            }
        }
        if self.max_turns == 0 {
            return Err(GauntletError::config("max_turns must be at least 1"));
        }
        Ok(())
    }

    /// Write a default config file, refusing to overwrite unless forced
    pub fn init_file(path: &Path, force: bool) -> GauntletResult<()> {
        if path.exists() && !force {
            return Err(GauntletError::invalid_input(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
        let body = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(path, body + "\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.agent_api, "http://localhost:4000");
        assert_eq!(config.judge_api, "http://localhost:8080");
        assert_eq!(config.max_turns, 50);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"agent_api": "http://agent.test:9000"}"#)
            .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.agent_api, "http://agent.test:9000");
        // Unset fields keep their defaults
        assert_eq!(config.judge_api, "http://localhost:8080");
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = Config::default();
        let env: HashMap<&str, &str> = [
            ("GAUNTLET_JUDGE_API", "http://judge.test:7000"),
            ("GAUNTLET_MAX_TURNS", "5"),
        ]
        .into_iter()
        .collect();

        config.apply_env(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.judge_api, "http://judge.test:7000");
        assert_eq!(config.max_turns, 5);
        assert_eq!(config.agent_api, "http://localhost:4000");
    }

    #[test]
    fn test_bad_max_turns_env_ignored() {
        let mut config = Config::default();
        config.apply_env(|key| (key == "GAUNTLET_MAX_TURNS").then(|| "lots".to_string()));
        assert_eq!(config.max_turns, 50);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load(Path::new("/nonexistent/gauntlet_config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_url_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"agent_api": "not-a-url"}"#).unwrap();
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_init_file_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        Config::init_file(&path, false).unwrap();
        assert!(Config::init_file(&path, false).is_err());
        Config::init_file(&path, true).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());
    }
}
