// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_session_ttl_hours() -> i64 {
    24
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub port: u16,
    pub jwt_secret: String,
    #[serde(default = "default_session_ttl_hours")]
    pub session_ttl_hours: i64,
    #[serde(default)]
    pub seed_demo_data: bool,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: AppConfig,
    production: AppConfig,
}

impl AppConfig {
    /// Load `config.yaml` (or `$CAREERFORGE_CONFIG`) for the current
    /// environment and apply environment variable overrides.
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        let config_path = std::env::var("CAREERFORGE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.yaml"));

        let config = Self::load_from_file(&config_path, &environment)?;
        let config = config.with_overrides(
            std::env::var("ROCKET_PORT").ok().as_deref(),
            std::env::var("CAREERFORGE_JWT_SECRET").ok().as_deref(),
        )?;

        Ok(Self {
            database_path: Self::resolve_path(&config.database_path)?,
            log_file: config
                .log_file
                .as_ref()
                .map(|p| Self::resolve_path(p))
                .transpose()?,
            ..config
        })
    }

    pub fn get_environment() -> String {
        std::env::var("CAREERFORGE_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(config_path: &Path, environment: &str) -> Result<Self> {
        if !config_path.exists() {
            anyhow::bail!(
                "{} not found. Server cannot start without configuration.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        app_log!(
            info,
            "Loading configuration for environment: {}",
            environment
        );
        Self::from_yaml(&content, environment)
    }

    /// Pick the `production` section for "production", `local` otherwise.
    pub fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let config_file: ConfigFile =
            serde_yaml::from_str(content).context("Failed to parse configuration")?;

        Ok(match environment {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }

    pub fn with_overrides(mut self, port: Option<&str>, jwt_secret: Option<&str>) -> Result<Self> {
        if let Some(port) = port {
            self.port = port
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("ROCKET_PORT must be a valid port number"))?;
        }
        if let Some(secret) = jwt_secret.filter(|s| !s.is_empty()) {
            self.jwt_secret = secret.to_string();
        }
        Ok(self)
    }

    fn resolve_path(path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            let current_dir =
                std::env::current_dir().context("Failed to get current directory")?;
            Ok(current_dir.join(path))
        }
    }

    pub async fn ensure_directories(&self) -> Result<()> {
        if let Some(db_parent) = self.database_path.parent() {
            tokio::fs::create_dir_all(db_parent)
                .await
                .with_context(|| {
                    format!(
                        "Failed to create database directory: {}",
                        db_parent.display()
                    )
                })?;
        }
        Ok(())
    }
}
