//! Configuration loading and management for signalflow.
//!
//! Loads settings from `signalflow.toml` with environment variable overrides for sensitive data.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

const DEFAULT_INSTRUCTION: &str = r#"Analyze the following inbound signal content and provide:
1. A succinct summary.
2. A list of action items for the user.
3. The overall sentiment/urgency.
4. A "suggested task" that you can perform on behalf of the user. This should be the most impactful next step (e.g., drafting a reply, creating a calendar invite, or updating a document). Provide a title for the task, a brief description, and a full "preview" of the content (e.g., the full text of a draft email)."#;

/// Summary agent configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Model identifier (e.g., "gemini-2.5-flash")
    pub model: String,
    /// System persona for the agent
    pub persona: String,
    /// Analysis instruction appended after the persona
    pub prompt: String,
}

/// API keys configuration (loaded from environment)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    #[serde(default)]
    pub gemini_key: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub agent: AgentConfig,
    pub api: ApiConfig,
}

impl Config {
    /// Load configuration from the default location (signalflow.toml in
    /// cwd or home). Falls back to built-in defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                let mut config = Config::default();
                config.apply_env();
                Ok(config)
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.apply_env();
        Ok(config)
    }

    /// Override API keys from environment variables
    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            self.api.gemini_key = Some(key);
        }
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from("signalflow.toml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Check home directory
        if let Some(home) = dirs::home_dir() {
            let home_config = home
                .join(".config")
                .join("signalflow")
                .join("signalflow.toml");
            if home_config.exists() {
                return Some(home_config);
            }
        }

        None
    }

    /// API key for the generation service. A blank key counts as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.api
            .gemini_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            persona: "You are an intelligent executive assistant.".to_string(),
            prompt: DEFAULT_INSTRUCTION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::tempdir;

    // load_from reads GEMINI_API_KEY, so tests touching the environment
    // serialize through this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_guard() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[test]
    fn parses_full_config() {
        let _env = env_guard();
        std::env::remove_var("GEMINI_API_KEY");

        let dir = tempdir().unwrap();
        let path = dir.path().join("signalflow.toml");
        fs::write(
            &path,
            r#"
[agent]
model = "gemini-2.5-pro"
persona = "You are a triage bot."
prompt = "Summarize the signal."

[api]
gemini_key = "from-file"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.agent.model, "gemini-2.5-pro");
        assert_eq!(config.agent.persona, "You are a triage bot.");
        assert_eq!(config.agent.prompt, "Summarize the signal.");
        assert_eq!(config.api_key(), Some("from-file"));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let _env = env_guard();
        std::env::remove_var("GEMINI_API_KEY");

        let dir = tempdir().unwrap();
        let path = dir.path().join("signalflow.toml");
        fs::write(&path, "[agent]\nmodel = \"gemini-2.0-flash\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.agent.model, "gemini-2.0-flash");
        assert_eq!(
            config.agent.persona,
            "You are an intelligent executive assistant."
        );
        assert!(config.agent.prompt.contains("suggested task"));
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn malformed_config_is_a_parse_error() {
        let _env = env_guard();

        let dir = tempdir().unwrap();
        let path = dir.path().join("signalflow.toml");
        fs::write(&path, "agent = ][").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let _env = env_guard();

        let dir = tempdir().unwrap();
        let path = dir.path().join("does-not-exist.toml");

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ReadError(_))
        ));
    }

    #[test]
    fn env_var_overrides_file_key() {
        let _env = env_guard();

        let dir = tempdir().unwrap();
        let path = dir.path().join("signalflow.toml");
        fs::write(&path, "[api]\ngemini_key = \"from-file\"\n").unwrap();

        std::env::set_var("GEMINI_API_KEY", "from-env");
        let config = Config::load_from(&path);
        std::env::remove_var("GEMINI_API_KEY");

        assert_eq!(config.unwrap().api_key(), Some("from-env"));
    }

    #[test]
    fn blank_key_counts_as_absent() {
        let mut config = Config::default();
        assert_eq!(config.api_key(), None);

        config.api.gemini_key = Some(String::new());
        assert_eq!(config.api_key(), None);

        config.api.gemini_key = Some("   ".to_string());
        assert_eq!(config.api_key(), None);

        config.api.gemini_key = Some("real-key".to_string());
        assert_eq!(config.api_key(), Some("real-key"));
    }
}
