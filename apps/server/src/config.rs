use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;
use equitytrack_core::constants::DEFAULT_CURRENCY_SYMBOL;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub data_dir: PathBuf,
    pub currency_symbol: String,
    pub cors_allow: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("ET_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid ET_LISTEN_ADDR")?;
        let data_dir = std::env::var("ET_DATA_DIR").unwrap_or_else(|_| "./data".into());
        let currency_symbol = std::env::var("ET_CURRENCY_SYMBOL")
            .unwrap_or_else(|_| DEFAULT_CURRENCY_SYMBOL.to_string());
        let cors_allow = parse_origins(
            &std::env::var("ET_CORS_ALLOW_ORIGINS").unwrap_or_else(|_| "*".into()),
        );
        Ok(Self {
            listen_addr,
            data_dir: PathBuf::from(data_dir),
            currency_symbol,
            cors_allow,
        })
    }

    /// Config rooted at `data_dir` with every other value at its default.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            data_dir: data_dir.into(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            cors_allow: vec!["*".to_string()],
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
