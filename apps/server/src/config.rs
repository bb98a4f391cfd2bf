use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;

use crate::auth::{decode_secret_key, generate_secret_key};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub export_dir: PathBuf,
    /// Append each newly created row to the standing CSV files.
    pub export_append: bool,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// HS256 signing key for session tokens, exactly 32 bytes.
    pub secret_key: Vec<u8>,
    pub token_ttl: Duration,
}

impl Config {
    /// Reads `DC_*` variables, loading `.env` first when present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let listen_addr: SocketAddr = var("DC_LISTEN_ADDR", "0.0.0.0:5000")
            .parse()
            .context("Invalid DC_LISTEN_ADDR")?;
        let db_path = var("DC_DB_PATH", "./db/diet_consultant.db");
        let export_dir = PathBuf::from(var("DC_EXPORT_DIR", "./exports"));
        let export_append = parse_bool(&var("DC_EXPORT_APPEND", "true"))
            .context("Invalid DC_EXPORT_APPEND")?;
        let cors_allow = var("DC_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = var("DC_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .context("Invalid DC_REQUEST_TIMEOUT_MS")?;
        let secret_key = match lookup("DC_SECRET_KEY") {
            Some(raw) => decode_secret_key(&raw).context("Invalid DC_SECRET_KEY")?,
            None => {
                tracing::warn!("DC_SECRET_KEY not set; sessions will not survive a restart");
                generate_secret_key()
            }
        };
        let ttl_secs: u64 = var("DC_TOKEN_TTL_SECS", "86400")
            .parse()
            .context("Invalid DC_TOKEN_TTL_SECS")?;

        Ok(Self {
            listen_addr,
            db_path,
            export_dir,
            export_append,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            secret_key,
            token_ttl: Duration::from_secs(ttl_secs),
        })
    }
}

fn parse_bool(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got '{other}'"),
    }
}
