//! RCC-FICO-Score-PLD client library
//!
//! Signed access to the Círculo de Crédito credit-report API:
//! - `RccClient` issues the initial POST query plus the six folio-scoped
//!   follow-up GETs, each carrying an ECDSA-SHA256 `x-signature` header
//! - `catalog` holds the bureau's closed code sets, `model` a typed
//!   request payload built from them
//! - key material comes from `ecdsa_lib`, which loads the PEM certificate
//!   and PKCS12 keystore issued during enrollment

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::{RccClient, ReportSection};
pub use config::Config;
pub use error::ApiError;

pub use ecdsa_lib;
