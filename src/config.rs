use dotenvy::dotenv;
use log::{error, LevelFilter};
use serde::Deserialize;
use std::env;

use crate::payment::{DepositPolicy, LabelStyle};

const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub db_path: String,
    #[serde(default)]
    pub deposit_policy: DepositPolicy,
    #[serde(default = "default_verbose_labels")]
    pub verbose_labels: bool,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    pub log_level: Option<String>,
}

fn default_verbose_labels() -> bool {
    true
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Config {
    pub fn from_toml_str(raw: &str) -> Result<Config, String> {
        toml::from_str(raw).map_err(|e| e.to_string())
    }

    pub fn label_style(&self) -> LabelStyle {
        if self.verbose_labels {
            LabelStyle::Verbose
        } else {
            LabelStyle::Plain
        }
    }

    /// Unknown or missing levels fall back to `info`.
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(LevelFilter::Info)
    }
}

pub fn create_test_config() -> Config {
    Config {
        db_path: "postgres://xxx".to_string(),
        deposit_policy: DepositPolicy::Phase,
        verbose_labels: true,
        currency_symbol: "$".to_string(),
        log_level: None,
    }
}

pub fn read_config() -> Config {
    dotenv().ok();
    env::var(CONFIG_PATH_ENV)
        .map_err(|_| format!("{CONFIG_PATH_ENV} .env not set"))
        .and_then(|config_path| std::fs::read_to_string(config_path).map_err(|e| e.to_string()))
        .and_then(|raw| Config::from_toml_str(&raw))
        .unwrap_or_else(|err| {
            error!("failed to read config: {err}");
            std::process::exit(1);
        })
}
