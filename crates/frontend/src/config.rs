//! Application configuration.
//!
//! The defaults are embedded as TOML; `WIZZZEY_API_BASE_URL` set at build
//! time overrides the backend address.

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub grid: GridConfig,
    pub notifications: NotificationConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Empty means "same host as the page, port 3000"
    #[serde(default)]
    pub base_url: String,
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GridConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationConfig {
    pub timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UploadConfig {
    pub max_bytes: u64,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
prefix = "/api/admin"

[grid]
default_page_size = 10
page_size_options = [10, 20, 50, 100]

[notifications]
timeout_ms = 4000

[upload]
max_bytes = 5242880
"#;

impl AppConfig {
    /// Load the embedded configuration and apply the build-time override.
    pub fn load() -> Result<Self, toml::de::Error> {
        let mut config = Self::parse(DEFAULT_CONFIG)?;
        if let Some(base_url) = option_env!("WIZZZEY_API_BASE_URL") {
            config.api.base_url = base_url.trim_end_matches('/').to_string();
        }
        Ok(config)
    }

    pub fn parse(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Base URL of the backend, falling back to the page's host on port 3000.
    pub fn api_base(&self) -> String {
        if !self.api.base_url.is_empty() {
            return self.api.base_url.clone();
        }
        let window = match web_sys::window() {
            Some(w) => w,
            None => return String::new(),
        };
        let location = window.location();
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        let hostname = location
            .hostname()
            .unwrap_or_else(|_| "127.0.0.1".to_string());
        format!("{}//{}:3000", protocol, hostname)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                log::error!("embedded configuration is invalid: {}", e);
                Self {
                    api: ApiConfig {
                        base_url: String::new(),
                        prefix: "/api/admin".to_string(),
                    },
                    grid: GridConfig {
                        default_page_size: 10,
                        page_size_options: vec![10, 20, 50, 100],
                    },
                    notifications: NotificationConfig { timeout_ms: 4000 },
                    upload: UploadConfig {
                        max_bytes: 5 * 1024 * 1024,
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::parse(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.prefix, "/api/admin");
        assert_eq!(config.grid.default_page_size, 10);
        assert_eq!(config.upload.max_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_explicit_base_url_wins() {
        let mut config = AppConfig::parse(DEFAULT_CONFIG).unwrap();
        config.api.base_url = "https://api.wizzzey.test".to_string();
        assert_eq!(config.api_base(), "https://api.wizzzey.test");
    }

    #[test]
    fn test_missing_section_is_rejected() {
        assert!(AppConfig::parse("[api]\nprefix = \"/x\"\n").is_err());
    }
}
