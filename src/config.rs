use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for gitfolio
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// GitHub account and fetch settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// Certifications data file settings
    #[serde(default)]
    pub certifications: CertificationsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// GitHub account and fetch settings
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GitHubConfig {
    /// Account whose public repositories feed the portfolio
    #[serde(default = "default_username")]
    pub username: String,

    /// API base URL (overridable for tests)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Listing page size for the featured widget
    #[serde(default = "default_featured_per_page")]
    pub featured_per_page: u32,

    /// Listing page size for the catalog page
    #[serde(default = "default_catalog_per_page")]
    pub catalog_per_page: u32,

    /// Post-filter candidate cap for the featured widget, bounding request
    /// volume while leaving headroom over the 4 displayed slots
    #[serde(default = "default_featured_candidates")]
    pub featured_candidates: usize,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

/// Certifications data file settings
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CertificationsConfig {
    /// Path to the certifications JSON document
    #[serde(default = "default_certifications_path")]
    pub path: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String, // "info"
}

// Default value functions
fn default_username() -> String {
    "Chandru-Ganesh".to_string()
}
fn default_api_url() -> String {
    "https://api.github.com".to_string()
}
fn default_featured_per_page() -> u32 {
    50
}
fn default_catalog_per_page() -> u32 {
    100
}
fn default_featured_candidates() -> usize {
    8
}
fn default_request_timeout() -> u64 {
    10
}
fn default_certifications_path() -> String {
    "certifications.json".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            api_url: default_api_url(),
            featured_per_page: default_featured_per_page(),
            catalog_per_page: default_catalog_per_page(),
            featured_candidates: default_featured_candidates(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Default for CertificationsConfig {
    fn default() -> Self {
        Self {
            path: default_certifications_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github: GitHubConfig::default(),
            certifications: CertificationsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location or create a default config
    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::default_config_path()?;

        if config_path.exists() {
            Self::load(&config_path)
        } else {
            let config = Self::default();

            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
            }

            config.save(&config_path)?;

            tracing::info!("Created default configuration at: {:?}", config_path);
            Ok(config)
        }
    }

    /// Load configuration from a specific file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let mut config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        config.expand_paths()?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    /// Get the default configuration file path (XDG compliant)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = config_dir().context("Failed to get user config directory")?;

        Ok(config_dir.join("gitfolio").join("config.yml"))
    }

    /// Expand environment variables in configuration paths
    pub fn expand_paths(&mut self) -> Result<()> {
        self.certifications.path = shellexpand::full(&self.certifications.path)
            .context("Failed to expand certifications path")?
            .into_owned();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_default_values() {
        let config = Config::default();

        assert_eq!(config.github.username, "Chandru-Ganesh");
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.github.featured_per_page, 50);
        assert_eq!(config.github.catalog_per_page, 100);
        assert_eq!(config.github.featured_candidates, 8);
        assert_eq!(config.github.request_timeout, 10);
        assert_eq!(config.certifications.path, "certifications.json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_expand_paths() {
        env::set_var("TEST_GITFOLIO_DATA", "/test/data");

        let mut config = Config::default();
        config.certifications.path = "${TEST_GITFOLIO_DATA}/certifications.json".to_string();

        config.expand_paths().expect("Failed to expand paths");

        assert_eq!(config.certifications.path, "/test/data/certifications.json");

        env::remove_var("TEST_GITFOLIO_DATA");
    }

    #[test]
    fn test_config_load_nonexistent_file() {
        let nonexistent_path = Path::new("/nonexistent/path/config.yml");
        let result = Config::load(nonexistent_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.yml");

        let mut config = Config::default();
        config.github.username = "someone-else".to_string();
        config.github.featured_candidates = 12;
        config.certifications.path = "/custom/certifications.json".to_string();

        config.save(&config_path).expect("Failed to save config");

        let loaded_config = Config::load(&config_path).expect("Failed to load config");

        assert_eq!(loaded_config.github.username, "someone-else");
        assert_eq!(loaded_config.github.featured_candidates, 12);
        assert_eq!(
            loaded_config.certifications.path,
            "/custom/certifications.json"
        );
    }

    #[test]
    fn test_config_default_path_xdg() {
        let default_path = Config::default_config_path().expect("Failed to get default path");
        assert!(default_path.to_string_lossy().contains("gitfolio"));
        assert!(default_path.to_string_lossy().ends_with("config.yml"));
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml_content = r#"
github:
  username: "testuser"
  api_url: "http://localhost:9999"
  featured_per_page: 20
  catalog_per_page: 40
  featured_candidates: 6
  request_timeout: 5
certifications:
  path: "/data/certs.json"
logging:
  level: "debug"
"#;

        let config: Config = serde_yaml::from_str(yaml_content).expect("Failed to parse YAML");

        assert_eq!(config.github.username, "testuser");
        assert_eq!(config.github.api_url, "http://localhost:9999");
        assert_eq!(config.github.featured_per_page, 20);
        assert_eq!(config.github.catalog_per_page, 40);
        assert_eq!(config.github.featured_candidates, 6);
        assert_eq!(config.github.request_timeout, 5);
        assert_eq!(config.certifications.path, "/data/certs.json");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("github:\n  username: \"solo\"\n").unwrap();

        assert_eq!(config.github.username, "solo");
        assert_eq!(config.github.featured_per_page, 50);
        assert_eq!(config.certifications.path, "certifications.json");
    }
}
