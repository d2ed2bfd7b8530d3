use std::{net::SocketAddr, str::FromStr};
use url::Url;

use crate::server::{
    error::{config::ConfigError, AppError},
    service::cache::DEFAULT_CACHE_TTL_SECONDS,
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Credentials for the super admin created on first start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedAdmin {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_address: SocketAddr,
    pub token_ttl_hours: i64,
    pub cache_ttl_seconds: u64,

    /// Realtime database mirror; changes are not mirrored when unset.
    pub realtime_url: Option<Url>,
    pub realtime_auth: Option<String>,

    pub seed_admin: Option<SeedAdmin>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source. Empty values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &str| {
            var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let realtime_url = var("REALTIME_URL")
            .map(|raw| parse_base_url("REALTIME_URL", &raw))
            .transpose()?;

        let seed_admin = match (var("SEED_ADMIN_EMAIL"), var("SEED_ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(SeedAdmin {
                email: email.trim().to_lowercase(),
                password,
            }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::MissingEnvVar("SEED_ADMIN_PASSWORD".to_string()).into()),
            (None, Some(_)) => return Err(ConfigError::MissingEnvVar("SEED_ADMIN_EMAIL".to_string()).into()),
        };

        let token_ttl_hours = parse_or("TOKEN_TTL_HOURS", var("TOKEN_TTL_HOURS"), DEFAULT_TOKEN_TTL_HOURS)?;
        if token_ttl_hours < 1 {
            return Err(ConfigError::InvalidEnvVar {
                name: "TOKEN_TTL_HOURS".to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            bind_address: parse_or(
                "BIND_ADDRESS",
                var("BIND_ADDRESS"),
                DEFAULT_BIND_ADDRESS.parse::<SocketAddr>().map_err(|_| ConfigError::InvalidEnvVar {
                    name: "BIND_ADDRESS".to_string(),
                    reason: "invalid default".to_string(),
                })?,
            )?,
            token_ttl_hours,
            cache_ttl_seconds: parse_or(
                "CACHE_TTL_SECONDS",
                var("CACHE_TTL_SECONDS"),
                DEFAULT_CACHE_TTL_SECONDS,
            )?,
            realtime_url,
            realtime_auth: var("REALTIME_AUTH"),
            seed_admin,
        })
    }
}

fn parse_or<T>(name: &str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

/// Parses a base URL and makes sure its path ends with `/` so relative
/// paths join beneath it.
fn parse_base_url(name: &str, raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })?;

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
