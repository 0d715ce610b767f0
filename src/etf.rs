//! ETF endpoints: fund descriptor and holdings.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use super::Fmp;
use super::error::Result;
use super::traits::EtfOperations;

/// ETF descriptor with embedded sector exposure.
///
/// A singular resource: the upstream API returns a one-element array for each
/// fund. The sector breakdown is embedded as a nested list and decodes with
/// the same discipline as any top-level collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtfInfo {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub isin: Option<String>,
    #[serde(default)]
    pub asset_class: Option<String>,
    #[serde(default)]
    pub expense_ratio: Option<f64>,
    #[serde(default)]
    pub assets_under_management: Option<f64>,
    #[serde(default)]
    pub avg_volume: Option<f64>,
    #[serde(default)]
    pub nav: Option<f64>,
    #[serde(default)]
    pub nav_currency: Option<String>,
    #[serde(default)]
    pub inception_date: Option<NaiveDate>,
    #[serde(default)]
    pub domicile: Option<String>,
    #[serde(default)]
    pub etf_company: Option<String>,
    #[serde(default)]
    pub holdings_count: Option<i64>,
    /// Sector exposure pairs, in provider order
    #[serde(default)]
    pub sectors_list: Vec<SectorWeight>,
}

/// Exposure of a fund to one sector, as a percentage weight.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorWeight {
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub exposure: Option<f64>,
}

/// One position inside an ETF portfolio.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtfHolding {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub asset: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub isin: Option<String>,
    #[serde(default)]
    pub security_cusip: Option<String>,
    #[serde(default)]
    pub shares_number: Option<f64>,
    #[serde(default)]
    pub weight_percentage: Option<f64>,
    #[serde(default)]
    pub market_value: Option<f64>,
    #[serde(default)]
    pub updated_at: Option<NaiveDate>,
}

/// Operations for exchange-traded funds
///
/// # Examples
///
/// ```rust,no_run
/// use fmpkit::{EtfOperations, Fmp};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fmp = Fmp::from_env()?;
///
/// let info = fmp.etf_info("SPY").await?;
/// for sector in &info.sectors_list {
///     println!("{:?}: {:?}", sector.industry, sector.exposure);
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
impl EtfOperations for Fmp {
    /// Retrieves the descriptor for a fund, including its sector exposure.
    async fn etf_info(&self, symbol: &str) -> Result<EtfInfo> {
        self.fetch_one("etf/info", &[("symbol".to_string(), symbol.to_uppercase())])
            .await
    }

    /// Retrieves the portfolio holdings of a fund.
    async fn etf_holdings(&self, symbol: &str) -> Result<Vec<EtfHolding>> {
        self.fetch_rows("etf/holdings", &[("symbol".to_string(), symbol.to_uppercase())])
            .await
    }
}
