use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ApiError;

/// Production endpoint for the RCC-FICO-Score-PLD product.
pub const DEFAULT_BASE_URL: &str =
    "https://services.circulodecredito.com.mx/v1/rcc-ficoscore-pld";

/// Everything the client needs for a session with the bureau: the
/// credential set issued during enrollment and the location of the key
/// material on disk. Immutable once constructed.
#[derive(Clone, Deserialize)]
pub struct Config {
    pub username: String,
    pub password: String,
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub public_cert_path: PathBuf,
    pub pkcs12_path: PathBuf,
    pub pkcs12_password: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Config {
    /// Reads a TOML config file.
    ///
    /// `base_url` may be omitted; it falls back to [`DEFAULT_BASE_URL`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ApiError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&raw).map_err(|source| ApiError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    /// Per-user config location, `<config dir>/rcc-ficoscore-pld/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rcc-ficoscore-pld").join("config.toml"))
    }
}
