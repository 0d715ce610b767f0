use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::config::FmpConfig;
use super::error::{FmpError, Result};

#[derive(Debug, Clone)]
pub struct Fmp {
    /// HTTP client for making requests
    pub(crate) client: reqwest::Client,

    /// API credential appended to every request
    pub(crate) api_key: String,

    /// Base URL for the FMP stable API
    pub(crate) base_url: String,
}

/// HTTP client for accessing the Financial Modeling Prep API.
///
/// The `Fmp` client is the main entry point for interacting with FMP's REST
/// endpoints: company fundamentals, financial statements, market data, ETF
/// data, institutional filings, and news feeds. Every operation follows the
/// same shape: one HTTP GET against a constructed URL with the `apikey`
/// credential attached as a query parameter, and a JSON response decoded into
/// a typed record or list of records.
///
/// The client is deliberately thin: there is no retry logic, no rate limiting,
/// no caching, and no shared mutable state across calls. Each call is a single
/// independent round trip; connection pooling is delegated to the underlying
/// `reqwest::Client`. Callers that need throttling or retries should layer
/// them on top.
///
/// # Error Handling
///
/// Outcomes are classified into the flat [`FmpError`] enum: a missing
/// credential fails before any network activity, HTTP 403 maps to
/// [`FmpError::InvalidSubscription`], any other non-200 status maps to
/// [`FmpError::UnexpectedStatus`], and an HTTP 200 carrying an explicit
/// `"Error Message"` payload maps to [`FmpError::UpstreamError`]. Failures are
/// surfaced to the caller unchanged; nothing is retried or substituted.
///
/// # Examples
///
/// Basic client initialization:
///
/// ```rust
/// # use fmpkit::Fmp;
/// let fmp = Fmp::new("demo")?;
/// # Ok::<(), fmpkit::FmpError>(())
/// ```
///
/// From the `FMP_API_KEY` environment variable (also reads a `.env` file):
///
/// ```rust,no_run
/// # use fmpkit::Fmp;
/// let fmp = Fmp::from_env()?;
/// # Ok::<(), fmpkit::FmpError>(())
/// ```
impl Fmp {
    /// Creates a new Fmp client with sensible defaults for most use cases.
    ///
    /// This constructor initializes the client with a 30-second HTTP timeout
    /// and the standard FMP base URL. The API key you provide is attached to
    /// every request as the `apikey` query parameter.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Your FMP API key. An empty key is accepted here so that
    ///   clients can be constructed eagerly, but every request made with an
    ///   empty key fails with [`FmpError::CredentialNotSet`] before any
    ///   network activity.
    ///
    /// # Errors
    ///
    /// Returns `FmpError::ConfigError` if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(FmpConfig {
            api_key: api_key.into(),
            ..FmpConfig::default()
        })
    }

    /// Creates an Fmp client from the `FMP_API_KEY` environment variable.
    ///
    /// A `.env` file in the working directory is loaded first if present, so
    /// local development setups work without exporting the variable.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::CredentialNotSet`] if the variable is not set.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        let api_key = std::env::var("FMP_API_KEY").map_err(|_| FmpError::CredentialNotSet)?;
        Self::new(api_key)
    }

    /// Creates an Fmp client with custom configuration settings.
    ///
    /// Use this constructor when you need to customize the timeout or base
    /// URL. Overriding the base URL is useful for testing against a mock
    /// server or targeting a different API revision.
    ///
    /// # Errors
    ///
    /// Returns `FmpError::ConfigError` if the HTTP client cannot be built
    /// with the provided configuration.
    pub fn with_config(config: FmpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FmpError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Fmp {
            client,
            api_key: config.api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Assembles the request URL from the resource path, the query parameters
    /// and the credential.
    ///
    /// Parameters are percent-encoded. The `apikey` parameter is appended
    /// last, using `&` when the URL already carries a query string and `?`
    /// otherwise.
    pub(crate) fn build_url(&self, path: &str, params: &[(String, String)]) -> Result<String> {
        let mut url = format!("{}/{}", self.base_url, path);

        if !params.is_empty() {
            let query = serde_urlencoded::to_string(params)
                .map_err(|e| FmpError::ConfigError(format!("Invalid query parameters: {}", e)))?;
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&query);
        }

        let credential = serde_urlencoded::to_string([("apikey", self.api_key.as_str())])
            .map_err(|e| FmpError::ConfigError(format!("Invalid API key: {}", e)))?;
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(&credential);

        Ok(url)
    }

    /// Fetches the raw response body for a resource path.
    ///
    /// This is the single network primitive every operation funnels through.
    /// It verifies the credential, assembles the URL, issues exactly one GET
    /// and classifies the HTTP status.
    ///
    /// # Errors
    ///
    /// * [`FmpError::CredentialNotSet`] - API key empty; no request is made
    /// * [`FmpError::InvalidSubscription`] - HTTP 403, entitlement rejection
    /// * [`FmpError::UnexpectedStatus`] - any other non-200 status
    /// * [`FmpError::RequestError`] - network-level failure
    pub(crate) async fn get_text(&self, path: &str, params: &[(String, String)]) -> Result<String> {
        if self.api_key.trim().is_empty() {
            return Err(FmpError::CredentialNotSet);
        }

        let url = self.build_url(path, params)?;
        tracing::debug!("GET {}", path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FmpError::RequestError)?;

        match response.status() {
            StatusCode::OK => response.text().await.map_err(FmpError::RequestError),
            StatusCode::FORBIDDEN => Err(FmpError::InvalidSubscription),
            status => Err(FmpError::UnexpectedStatus(status.as_u16())),
        }
    }

    /// Fetches a resource and decodes the JSON payload into `T`.
    ///
    /// On top of [`get_text`](Self::get_text) this applies the payload
    /// classification shared by every endpoint: an explicit upstream error
    /// object becomes [`FmpError::UpstreamError`], an empty array becomes
    /// [`FmpError::NotFound`], and anything else is decoded into the target
    /// type.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T> {
        let body = self.get_text(path, params).await?;
        decode_payload(&body)
    }

    /// Decodes a singular resource: a one-element list representing a single
    /// logical entity.
    ///
    /// FMP models these endpoints as arrays that carry at most one meaningful
    /// record. An empty array yields [`FmpError::NotFound`]; any elements
    /// beyond the first are discarded per the upstream contract.
    pub(crate) async fn fetch_one<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T> {
        let rows: Vec<T> = self.get_json(path, params).await?;
        first_row(rows)
    }

    /// Decodes a plural resource: zero-to-many records in upstream order.
    ///
    /// An empty upstream array means an empty collection, which is success
    /// for these endpoints, so the transport-level [`FmpError::NotFound`] is
    /// normalized back to `Ok(vec![])` here.
    pub(crate) async fn fetch_rows<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<Vec<T>> {
        match self.get_json(path, params).await {
            Ok(rows) => Ok(rows),
            Err(FmpError::NotFound) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }
}

/// Extracts the single meaningful record from a one-element-list response.
///
/// Elements beyond the first are discarded per the upstream contract for
/// singular endpoints. An empty list is reported as `NotFound`, never as an
/// index panic.
pub(crate) fn first_row<T>(rows: Vec<T>) -> Result<T> {
    rows.into_iter().next().ok_or(FmpError::NotFound)
}

/// Upstream application-level error payload, delivered with HTTP 200.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(rename = "Error Message")]
    message: String,
}

/// Classifies an HTTP 200 body and decodes it into the target type.
///
/// FMP signals two non-success conditions inside successful responses: an
/// object carrying an `"Error Message"` key, and an empty array meaning "no
/// data". Both are turned into explicit failures before the typed decode
/// runs, so no endpoint ever sees them as a partially-decoded value.
pub(crate) fn decode_payload<T: DeserializeOwned>(body: &str) -> Result<T> {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return Err(FmpError::UpstreamError(envelope.message));
    }

    let trimmed = body.trim();
    if trimmed.len() >= 2
        && trimmed.starts_with('[')
        && trimmed.ends_with(']')
        && trimmed[1..trimmed.len() - 1].trim().is_empty()
    {
        return Err(FmpError::NotFound);
    }

    serde_json::from_str(trimmed).map_err(Into::into)
}
