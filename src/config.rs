use std::time::Duration;

/// Configuration for the Fmp client
#[derive(Debug, Clone)]
pub struct FmpConfig {
    /// API key sent with every request as the `apikey` query parameter
    pub api_key: String,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Base URL for the FMP stable API
    pub base_url: String,
}

impl Default for FmpConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            timeout: Duration::from_secs(30),
            base_url: "https://financialmodelingprep.com/stable".to_string(),
        }
    }
}

impl FmpConfig {
    /// Creates a new FmpConfig with custom settings
    ///
    /// # Basic usage
    ///
    /// ```rust
    /// use fmpkit::{Fmp, FmpConfig};
    /// use std::time::Duration;
    /// let config = FmpConfig {
    ///     api_key: "demo".to_string(),
    ///     timeout: Duration::from_secs(30),
    ///     base_url: "https://financialmodelingprep.com/stable".to_string(),
    /// };
    /// let fmp = Fmp::with_config(config)?;
    /// # Ok::<(), fmpkit::FmpError>(())
    /// ```
    pub fn new(api_key: impl Into<String>, timeout: Duration, base_url: Option<String>) -> Self {
        Self {
            api_key: api_key.into(),
            timeout,
            base_url: base_url.unwrap_or_else(|| Self::default().base_url),
        }
    }
}
