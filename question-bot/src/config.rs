//! Application config loaded from env: Telegram connection, admin destination, liveness endpoint, logging.

use anyhow::{Context, Result};
use dbot_telegram::TelegramConfig;
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HEALTH_HOST: &str = "0.0.0.0";

/// Liveness endpoint settings. `enabled = false` runs the bot with polling only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthConfig {
    /// HEALTH_ENABLED (default true)
    pub enabled: bool,
    /// HEALTH_HOST (default 0.0.0.0)
    pub host: String,
    /// PORT (default 5000)
    pub port: u16,
}

impl HealthConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid liveness bind address {}:{}", self.host, self.port))
    }
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            host: DEFAULT_HEALTH_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    /// ADMIN_ID: chat receiving relayed questions
    pub admin_chat_id: i64,
    pub health: HealthConfig,
    /// LOG_FILE; stdout only when unset
    pub log_file: Option<String>,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = match token {
            Some(token) => TelegramConfig::with_token(token),
            None => TelegramConfig::from_env()?,
        };

        let admin_raw = env::var("ADMIN_ID").map_err(|_| anyhow::anyhow!("ADMIN_ID not set"))?;
        let admin_chat_id = parse_admin_id(&admin_raw)?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {}", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let enabled = match env::var("HEALTH_ENABLED") {
            Ok(raw) => parse_bool(&raw)
                .with_context(|| format!("HEALTH_ENABLED is not a boolean: {}", raw))?,
            Err(_) => true,
        };

        let host = env::var("HEALTH_HOST").unwrap_or_else(|_| DEFAULT_HEALTH_HOST.to_string());
        let log_file = env::var("LOG_FILE").ok().filter(|s| !s.trim().is_empty());

        Ok(Self {
            telegram,
            admin_chat_id,
            health: HealthConfig {
                enabled,
                host,
                port,
            },
            log_file,
        })
    }

    /// Validate config: Telegram settings and the liveness bind address (when enabled).
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if self.health.enabled {
            self.health.socket_addr()?;
        }
        Ok(())
    }
}

fn parse_admin_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .with_context(|| format!("ADMIN_ID must be a numeric chat id, got: {}", raw))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
