use std::path::PathBuf;
use std::{env, fs};

use anyhow::Context;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct SSLConfig {
    pub private_key_file: PathBuf,
    pub certificate_chain_file: PathBuf,
}

#[derive(Deserialize)]
pub struct Config {
    pub database_url: String,
    pub signups_enabled: bool,
    pub allowed_origin: Option<String>,
    pub ssl: Option<SSLConfig>,
}

impl Config {
    pub fn from_file(path: PathBuf) -> Result<Config, anyhow::Error> {
        let config = fs::read_to_string(path).context("Unable to read config file")?;
        let config: Config = toml::from_str(config.as_str()).context("Unable to parse config")?;
        Ok(config)
    }

    /// Builds config from `DATABASE_URL`, `SIGNUPS_ENABLED` and optionally `ALLOWED_ORIGIN`. SSL
    /// is not configurable through the environment.
    pub fn from_env() -> Result<Config, anyhow::Error> {
        let signups_enabled = read_env("SIGNUPS_ENABLED")?;
        let signups_enabled = signups_enabled
            .parse()
            .context("Unable to parse SIGNUPS_ENABLED value")?;
        let database_url = read_env("DATABASE_URL")?;
        let allowed_origin = env::var("ALLOWED_ORIGIN").ok();

        let config = Config {
            database_url,
            signups_enabled,
            allowed_origin,
            ssl: None,
        };
        Ok(config)
    }
}

fn read_env(key: &str) -> Result<String, anyhow::Error> {
    env::var(key).with_context(|| format!("Unable to read env var: {}", key))
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn parse_minimal_config() {
        let config: Config = toml::from_str(
            r#"
            database_url = "sqlite://data/centime.db"
            signups_enabled = true
            "#,
        )
        .unwrap();

        assert_eq!(config.database_url, "sqlite://data/centime.db");
        assert!(config.signups_enabled);
        assert!(config.allowed_origin.is_none());
        assert!(config.ssl.is_none());
    }

    #[test]
    fn parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            database_url = "sqlite://data/centime.db"
            signups_enabled = false
            allowed_origin = "https://centime.example.com"

            [ssl]
            private_key_file = "key.pem"
            certificate_chain_file = "certs.pem"
            "#,
        )
        .unwrap();

        assert!(!config.signups_enabled);
        assert_eq!(
            config.allowed_origin.as_deref(),
            Some("https://centime.example.com")
        );
        let ssl = config.ssl.unwrap();
        assert_eq!(ssl.private_key_file.to_str(), Some("key.pem"));
        assert_eq!(ssl.certificate_chain_file.to_str(), Some("certs.pem"));
    }
}
