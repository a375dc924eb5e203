use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_BCRYPT_COST: u32 = 12;

pub struct Config {
    pub database_url: String,
    /// HMAC secret used to sign HS256 access tokens.
    pub jwt_secret: String,

    pub port: u16,
    pub bcrypt_cost: u32,
    /// Echo OTPs and password reset tokens in responses. For local testing only.
    pub expose_secrets: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            port: optional("PORT", DEFAULT_PORT)?,
            bcrypt_cost: optional("BCRYPT_COST", DEFAULT_BCRYPT_COST)?,
            expose_secrets: optional("EXPOSE_SECRETS", false)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
