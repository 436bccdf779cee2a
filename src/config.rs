use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Configuration structure for the proxy.
/// Handles loading and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base domain of the upstream server listing API. Should include the
    /// https:// prefix.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// Port the HTTP proxy listens on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// HTTP timeout in seconds for upstream requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Path to the log file. If not specified, logs are written to stdout
    /// only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_api_domain() -> String {
    constants::DEFAULT_API_DOMAIN.to_string()
}

fn default_port() -> u16 {
    constants::DEFAULT_PORT
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: default_api_domain(),
            port: default_port(),
            http_timeout_seconds: default_http_timeout(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file is not an error; defaults are used instead.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `SERVER_BROWSER_API_DOMAIN` - Override API domain
    /// - `PORT` - Override listening port
    /// - `SERVER_BROWSER_LOG_FILE` - Override log file path
    /// - `SERVER_BROWSER_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    pub async fn load() -> Result<Self, AppError> {
        Self::load_from_path(&Self::get_config_path()).await
    }

    /// Loads configuration from an explicit path, falling back to defaults
    /// when the file does not exist.
    pub async fn load_from_path(config_path: &Path) -> Result<Self, AppError> {
        let mut config = if config_path.exists() {
            debug!("Loading config from {}", config_path.display());
            let content = fs::read_to_string(config_path).await?;
            toml::from_str(&content)?
        } else {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Applies environment variable overrides on top of whatever the config
    /// file (or defaults) provided.
    fn apply_env_overrides(&mut self) {
        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN)
            && !api_domain.is_empty()
        {
            self.api_domain = api_domain;
        }
        if let Ok(port) = std::env::var(env_vars::PORT) {
            match port.parse::<u16>() {
                Ok(port) => self.port = port,
                Err(_) => warn!("Ignoring unparseable {} value: {port}", env_vars::PORT),
            }
        }
        if let Ok(log_file) = std::env::var(env_vars::LOG_FILE)
            && !log_file.is_empty()
        {
            self.log_file_path = Some(log_file);
        }
        if let Ok(timeout) = std::env::var(env_vars::HTTP_TIMEOUT) {
            match timeout.parse::<u64>() {
                Ok(timeout) => self.http_timeout_seconds = timeout,
                Err(_) => warn!(
                    "Ignoring unparseable {} value: {timeout}",
                    env_vars::HTTP_TIMEOUT
                ),
            }
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.api_domain.is_empty() {
            return Err(AppError::config_error("api_domain must not be empty"));
        }
        if !self.api_domain.starts_with("http://") && !self.api_domain.starts_with("https://") {
            return Err(AppError::config_error(format!(
                "api_domain must include an http:// or https:// prefix, got: {}",
                self.api_domain
            )));
        }
        if self.http_timeout_seconds == 0 {
            return Err(AppError::config_error(
                "http_timeout_seconds must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Platform-specific path of the config file.
    pub fn get_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("server_browser")
            .join("config.toml")
    }

    /// Platform-specific directory for log files.
    pub fn get_log_dir_path() -> String {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("server_browser")
            .join("logs")
            .to_string_lossy()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        // set_var/remove_var are racy across threads; callers hold #[serial]
        unsafe {
            std::env::remove_var(env_vars::API_DOMAIN);
            std::env::remove_var(env_vars::PORT);
            std::env::remove_var(env_vars::LOG_FILE);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_config_file_uses_defaults() {
        clear_env();
        let dir = tempdir().unwrap();
        let config = Config::load_from_path(&dir.path().join("config.toml"))
            .await
            .unwrap();

        assert_eq!(config.api_domain, constants::DEFAULT_API_DOMAIN);
        assert_eq!(config.port, constants::DEFAULT_PORT);
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
        assert_eq!(config.log_file_path, None);
    }

    #[tokio::test]
    #[serial]
    async fn test_config_file_round_trip() {
        clear_env();
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(
            &path,
            r#"
api_domain = "https://api.example.com"
port = 8080
http_timeout_seconds = 5
"#,
        )
        .await
        .unwrap();

        let config = Config::load_from_path(&path).await.unwrap();
        assert_eq!(config.api_domain, "https://api.example.com");
        assert_eq!(config.port, 8080);
        assert_eq!(config.http_timeout_seconds, 5);
    }

    #[tokio::test]
    #[serial]
    async fn test_env_overrides_take_precedence() {
        clear_env();
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, r#"api_domain = "https://file.example.com""#)
            .await
            .unwrap();

        unsafe {
            std::env::set_var(env_vars::API_DOMAIN, "https://env.example.com");
            std::env::set_var(env_vars::PORT, "4000");
        }

        let config = Config::load_from_path(&path).await.unwrap();
        assert_eq!(config.api_domain, "https://env.example.com");
        assert_eq!(config.port, 4000);

        clear_env();
    }

    #[tokio::test]
    #[serial]
    async fn test_unparseable_port_is_ignored() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::PORT, "not-a-port");
        }

        let dir = tempdir().unwrap();
        let config = Config::load_from_path(&dir.path().join("config.toml"))
            .await
            .unwrap();
        assert_eq!(config.port, constants::DEFAULT_PORT);

        clear_env();
    }

    #[tokio::test]
    #[serial]
    async fn test_invalid_api_domain_rejected() {
        clear_env();
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, r#"api_domain = "api.example.com""#)
            .await
            .unwrap();

        let result = Config::load_from_path(&path).await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
