//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone: the database handle is a pool, the
//! token keys and activation lock sit behind `Arc`s.

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    service::{
        auth::{password::PasswordHasher, token::TokenKeys},
        session::ActivationLock,
    },
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Signing and verification keys for bearer tokens.
    pub tokens: TokenKeys,

    /// bcrypt hasher configured with the deployment's work factor.
    pub passwords: PasswordHasher,

    /// Process-wide lock serializing every change to the active session.
    pub activation: ActivationLock,

    /// Whether OTPs and reset tokens are echoed back in responses.
    pub expose_secrets: bool,
}

impl AppState {
    /// Creates the application state from a connected database and loaded configuration.
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            tokens: TokenKeys::new(config.jwt_secret.as_bytes()),
            passwords: PasswordHasher::new(config.bcrypt_cost),
            activation: ActivationLock::default(),
            expose_secrets: config.expose_secrets,
        }
    }
}
