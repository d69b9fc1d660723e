use std::path::PathBuf;

use thiserror::Error;

pub use ecdsa_lib::KeystoreError;

/// Everything that can go wrong while configuring the client or calling
/// the bureau.
///
/// Callers get the failure as a value; nothing in this crate swallows an
/// error and presses on with a null signature.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Keystore(#[from] KeystoreError),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to serialize request payload: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("credential for header {header} is not a valid header value")]
    InvalidHeader { header: &'static str },
}
