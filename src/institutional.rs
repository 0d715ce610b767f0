//! Institutional ownership endpoints: 13F filings and holder summaries.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use super::Fmp;
use super::error::Result;
use super::traits::InstitutionalOperations;

/// Aggregate position of one institution in a symbol.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionalHolder {
    #[serde(default)]
    pub holder: Option<String>,
    #[serde(default)]
    pub shares: Option<f64>,
    #[serde(default)]
    pub date_reported: Option<NaiveDate>,
    #[serde(default)]
    pub change: Option<f64>,
}

/// One line item of an institution's 13F filing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThirteenFHolding {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub filing_date: Option<NaiveDate>,
    /// Acceptance timestamp as reported (`YYYY-MM-DD HH:MM:SS`)
    #[serde(default)]
    pub accepted_date: Option<String>,
    /// Central Index Key of the filing institution
    #[serde(default)]
    pub cik: Option<String>,
    #[serde(default)]
    pub cusip: Option<String>,
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub name_of_issuer: Option<String>,
    #[serde(default)]
    pub title_of_class: Option<String>,
    #[serde(default)]
    pub shares: Option<f64>,
    #[serde(default)]
    pub value: Option<f64>,
}

/// Operations for institutional ownership data
///
/// # Examples
///
/// ```rust,no_run
/// use fmpkit::{Fmp, InstitutionalOperations};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fmp = Fmp::from_env()?;
///
/// // Berkshire Hathaway's 13F for Q4 2023
/// let holdings = fmp.form_thirteen("0001067983", "2023-12-31").await?;
/// println!("{} positions", holdings.len());
/// # Ok(())
/// # }
/// ```
#[async_trait]
impl InstitutionalOperations for Fmp {
    /// Retrieves the institutions holding a symbol.
    async fn institutional_holders(&self, symbol: &str) -> Result<Vec<InstitutionalHolder>> {
        self.fetch_rows(
            "institutional-holder",
            &[("symbol".to_string(), symbol.to_uppercase())],
        )
        .await
    }

    /// Retrieves the 13F filing of an institution for a quarter end date.
    ///
    /// The date must be a quarter end in `YYYY-MM-DD` form; the upstream API
    /// returns an empty result for any other date.
    async fn form_thirteen(&self, cik: &str, date: &str) -> Result<Vec<ThirteenFHolding>> {
        self.fetch_rows(
            "form-thirteen",
            &[
                ("cik".to_string(), cik.to_string()),
                ("date".to_string(), date.to_string()),
            ],
        )
        .await
    }
}
