use axum_extra::extract::cookie::Key;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

use crate::error::SiteError;

/// Runtime configuration.
///
/// Layered as: built-in defaults, then `NOTICEBOARD_*` environment variables,
/// then a bare `PORT` variable so the usual hosting convention still works.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub upload_dir: PathBuf,
    pub loglevel: String,
    /// Cookie encryption key material, at least 64 bytes.
    pub secret_key: Option<String>,
    /// Send the session cookie without `Secure`. On by default since the
    /// server itself speaks plain HTTP; turn off when behind TLS.
    pub insecure_cookie: bool,
    pub admin_username: String,
    pub admin_password: String,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            database_url: "sqlite:instance/database.db".to_string(),
            upload_dir: PathBuf::from("static/uploads"),
            loglevel: "info".to_string(),
            secret_key: None,
            insecure_cookie: true,
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
            max_upload_bytes: 16 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("NOTICEBOARD_"))
            .merge(Env::raw().only(&["PORT"]))
    }

    pub fn load() -> Result<Self, SiteError> {
        Ok(Self::figment().extract()?)
    }

    /// Key used to encrypt the session cookie.
    ///
    /// Without a configured `secret_key` a fresh random key is generated, so
    /// sessions only live as long as the process.
    pub fn cookie_key(&self) -> Result<Key, SiteError> {
        match self.secret_key.as_deref() {
            Some(secret) => Key::try_from(secret.as_bytes()).map_err(|_| {
                SiteError::Config("secret_key must be at least 64 bytes long".to_string())
            }),
            None => {
                warn!("no secret_key configured; generated an ephemeral cookie key");
                Ok(Key::generate())
            }
        }
    }
}
