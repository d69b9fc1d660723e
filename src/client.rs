use ecdsa_lib::KeyPair;
use p256::ecdsa::Signature;
use reqwest::blocking::{Client, Response};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::error::ApiError;

pub const HEADER_USERNAME: &str = "username";
pub const HEADER_PASSWORD: &str = "password";
pub const HEADER_X_API_KEY: &str = "x-api-key";
pub const HEADER_X_SIGNATURE: &str = "x-signature";

/// Follow-up sections of an open report, addressed as
/// `{base}/{folio}/{segment}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportSection {
    Credits,
    Addresses,
    Jobs,
    Queries,
    Scores,
    Messages,
}

impl ReportSection {
    pub const ALL: [ReportSection; 6] = [
        ReportSection::Credits,
        ReportSection::Addresses,
        ReportSection::Jobs,
        ReportSection::Queries,
        ReportSection::Scores,
        ReportSection::Messages,
    ];

    /// URL path segment the bureau publishes for this section.
    pub fn path_segment(&self) -> &'static str {
        match self {
            ReportSection::Credits => "creditos",
            ReportSection::Addresses => "domicilios",
            ReportSection::Jobs => "empleos",
            ReportSection::Queries => "consultas",
            ReportSection::Scores => "scores",
            ReportSection::Messages => "mensajes",
        }
    }
}

/// Client for the RCC-FICO-Score-PLD API.
///
/// Holds the credential set and the signing key for the process lifetime.
/// Every call is an independent, stateless request/response exchange; the
/// response comes back exactly as the bureau sent it, with no status
/// branching, retries, or body parsing.
pub struct RccClient {
    config: Config,
    keys: KeyPair,
    http: Client,
}

impl RccClient {
    /// Builds a client from an already-loaded key pair.
    pub fn new(config: Config, keys: KeyPair) -> Self {
        Self {
            config,
            keys,
            http: Client::new(),
        }
    }

    /// Builds a client by loading the private key from the PKCS12 keystore
    /// named in the config.
    pub fn from_config(config: Config) -> Result<Self, ApiError> {
        let keys = KeyPair::load_from_pkcs12(&config.pkcs12_path, &config.pkcs12_password)?;
        Ok(Self::new(config, keys))
    }

    /// Opens an RCC report: POSTs the applicant payload to the base URL.
    ///
    /// The x-signature covers the exact JSON serialization of `payload`,
    /// and that same serialization is sent as the request body.
    ///
    /// # Example
    /// ```no_run
    /// # use rcc_ficoscore_pld::{Config, RccClient};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config::from_file("config.toml")?;
    /// let client = RccClient::from_config(config)?;
    /// let payload = serde_json::json!({ "apellidoPaterno": "PATERNO" });
    /// let response = client.retrieve_rcc(&payload)?;
    /// println!("{} {}", response.status(), response.text()?);
    /// # Ok(()) }
    /// ```
    pub fn retrieve_rcc<T: Serialize>(&self, payload: &T) -> Result<Response, ApiError> {
        let body = serde_json::to_string(payload)?;
        let headers = self.signed_headers(body.as_bytes())?;

        info!("Calling RCC-FICO-Score-PLD API - Query RCC");

        let response = self
            .http
            .post(&self.config.base_url)
            .headers(headers)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;
        log_status(&response);
        Ok(response)
    }

    /// Fetches one follow-up section of a previously opened report.
    ///
    /// The x-signature covers the bare folio string, and the request is a
    /// GET against `{base}/{folio}/{segment}` with no body.
    ///
    /// # Example
    /// ```no_run
    /// # use rcc_ficoscore_pld::{Config, RccClient, ReportSection};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config::from_file("config.toml")?;
    /// let client = RccClient::from_config(config)?;
    /// let response = client.retrieve_section("12AB3456", ReportSection::Scores)?;
    /// println!("{} {}", response.status(), response.text()?);
    /// # Ok(()) }
    /// ```
    pub fn retrieve_section(
        &self,
        folio: &str,
        section: ReportSection,
    ) -> Result<Response, ApiError> {
        let headers = self.signed_headers(folio.as_bytes())?;
        let url = format!(
            "{}/{}/{}",
            self.config.base_url,
            folio,
            section.path_segment()
        );

        info!("Calling RCC-FICO-Score-PLD API - Query RCC");

        let response = self.http.get(&url).headers(headers).send()?;
        log_status(&response);
        Ok(response)
    }

    /// GET `{base}/{folio}/creditos`.
    pub fn retrieve_credits(&self, folio: &str) -> Result<Response, ApiError> {
        self.retrieve_section(folio, ReportSection::Credits)
    }

    /// GET `{base}/{folio}/domicilios`.
    pub fn retrieve_addresses(&self, folio: &str) -> Result<Response, ApiError> {
        self.retrieve_section(folio, ReportSection::Addresses)
    }

    /// GET `{base}/{folio}/empleos`.
    pub fn retrieve_jobs(&self, folio: &str) -> Result<Response, ApiError> {
        self.retrieve_section(folio, ReportSection::Jobs)
    }

    /// GET `{base}/{folio}/consultas`.
    pub fn retrieve_queries(&self, folio: &str) -> Result<Response, ApiError> {
        self.retrieve_section(folio, ReportSection::Queries)
    }

    /// GET `{base}/{folio}/scores`.
    pub fn retrieve_scores(&self, folio: &str) -> Result<Response, ApiError> {
        self.retrieve_section(folio, ReportSection::Scores)
    }

    /// GET `{base}/{folio}/mensajes`.
    pub fn retrieve_messages(&self, folio: &str) -> Result<Response, ApiError> {
        self.retrieve_section(folio, ReportSection::Messages)
    }

    /// Credential and signature headers for one request.
    ///
    /// The signature covers exactly `content` and travels as lowercase hex
    /// of the DER encoding.
    fn signed_headers(&self, content: &[u8]) -> Result<HeaderMap, ApiError> {
        info!("Starting x-signature generation");

        let signature: Signature = self.keys.sign(content);
        let signature_hex = hex::encode(signature.to_der().as_bytes());

        info!("x-signature: {}", signature_hex);

        let mut headers = HeaderMap::new();
        headers.insert(
            HEADER_USERNAME,
            header_value(&self.config.username, HEADER_USERNAME)?,
        );
        headers.insert(
            HEADER_PASSWORD,
            header_value(&self.config.password, HEADER_PASSWORD)?,
        );
        headers.insert(
            HEADER_X_API_KEY,
            header_value(&self.config.api_key, HEADER_X_API_KEY)?,
        );
        headers.insert(
            HEADER_X_SIGNATURE,
            header_value(&signature_hex, HEADER_X_SIGNATURE)?,
        );
        Ok(headers)
    }
}

fn header_value(value: &str, header: &'static str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(value).map_err(|_| ApiError::InvalidHeader { header })
}

fn log_status(response: &Response) {
    let status = response.status();
    info!(
        "RCC-FICO-Score-PLD API Response Status: {} {}",
        status.canonical_reason().unwrap_or("unknown"),
        status.as_u16()
    );
}

// ----------------------------------------------
//
// Unit tests
//
