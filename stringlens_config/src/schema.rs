use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_host")]
    pub host: String,
    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl ServerConfig {
    fn default_host() -> String {
        "127.0.0.1".to_string()
    }

    const fn default_port() -> u16 {
        8000
    }

    /// `host:port`, as accepted by a TCP listener.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Database,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "StorageConfig::default_url")]
    pub url: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            url: Self::default_url(),
        }
    }
}

impl StorageConfig {
    fn default_url() -> String {
        "sqlite://stringlens.db?mode=rwc".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_string()
    }
}

const CONFIG_TEMPLATE: &str = r#"{
  "server": {
    "host": "127.0.0.1",
    "port": 8000
  },
  "storage": {
    "backend": "database",
    "url": "sqlite://stringlens.db?mode=rwc"
  },
  "logging": {
    "level": "info"
  }
}"#;

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("stringlens"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load the config file if present, otherwise fall back to defaults.
    ///
    /// The flag is false when no file was found.
    pub fn load_or_default() -> anyhow::Result<(Self, bool)> {
        Self::load_or_default_from(&Self::config_path()?)
    }

    pub fn load_or_default_from(path: &Path) -> anyhow::Result<(Self, bool)> {
        if path.exists() {
            Ok((Self::load_from(path)?, true))
        } else {
            Ok((Self::default(), false))
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");
        Self::write_template(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - server.host / server.port: address the HTTP API listens on");
        println!("   - storage.backend: \"memory\" (lost on exit) or \"database\"");
        println!("   - storage.url: sqlite or postgres connection string");
        println!("   - logging.level: default log filter (RUST_LOG overrides it)");
        println!();
        Ok(config_path)
    }

    /// Write the default template to `path`, refusing to overwrite.
    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }
        std::fs::write(path, CONFIG_TEMPLATE)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config.server.bind_address(), "127.0.0.1:8000");
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn template_parses() {
        let config = Config::from_json(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Database);
        assert!(config.storage.url.starts_with("sqlite://"));
    }

    #[test]
    fn partial_sections() {
        let config =
            Config::from_json(r#"{"server": {"port": 9000}, "storage": {"backend": "memory"}}"#)
                .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.storage.url, "sqlite://stringlens.db?mode=rwc");
    }

    #[test]
    fn unknown_backend_rejected() {
        assert!(Config::from_json(r#"{"storage": {"backend": "redis"}}"#).is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "stringlens-missing-config-{}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let (config, from_file) = Config::load_or_default_from(&path).unwrap();
        assert!(!from_file);
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn existing_file_is_loaded() {
        let path = std::env::temp_dir().join(format!(
            "stringlens-existing-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"server": {"port": 9100}}"#).unwrap();

        let (config, from_file) = Config::load_or_default_from(&path).unwrap();
        assert!(from_file);
        assert_eq!(config.server.port, 9100);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn write_template_refuses_overwrite() {
        let path = std::env::temp_dir().join(format!(
            "stringlens-config-test-{}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        Config::write_template(&path).unwrap();
        assert!(Config::write_template(&path).is_err());
        assert!(Config::load_from(&path).is_ok());

        std::fs::remove_file(&path).unwrap();
    }
}
