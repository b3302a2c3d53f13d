use anyhow::anyhow;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/labour_dashboard";
const DEFAULT_TIME_ZONE: &str = "Asia/Kolkata";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    /// Zone used to pick the default month when a request omits `month`.
    pub time_zone: Tz,
    pub port: u16,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let time_zone_name =
            lookup("APP_TIMEZONE").unwrap_or_else(|| DEFAULT_TIME_ZONE.to_string());
        let time_zone: Tz = time_zone_name
            .parse()
            .map_err(|_| anyhow!("Invalid APP_TIMEZONE value: {}", time_zone_name))?;

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| anyhow!("Invalid PORT value: {}", value))?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            database_url,
            time_zone,
            port,
        })
    }
}
