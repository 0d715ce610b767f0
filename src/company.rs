//! Company-level endpoints: profile, executives, peers, valuation snapshots.
//!
//! Most endpoints in this module are "singular" resources: the upstream API
//! returns a one-element array carrying a single logical record, and the
//! decode takes the first element or reports [`FmpError::NotFound`] when the
//! array is empty. `key_executives` is the exception: a company has many
//! executives, so it decodes as a plain collection.
//!
//! [`FmpError::NotFound`]: super::error::FmpError::NotFound

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use super::Fmp;
use super::error::Result;
use super::traits::CompanyOperations;

/// Company profile: identity, listing and descriptive data for one symbol.
///
/// This is the broadest single-record endpoint the API offers and the usual
/// starting point for resolving what a symbol is. Fields the upstream payload
/// omits decode to `None`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub beta: Option<f64>,
    #[serde(default)]
    pub last_dividend: Option<f64>,
    /// 52-week trading range as reported, e.g. "124.17-199.62"
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub change: Option<f64>,
    #[serde(default)]
    pub change_percentage: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    /// SEC Central Index Key
    #[serde(default)]
    pub cik: Option<String>,
    #[serde(default)]
    pub isin: Option<String>,
    #[serde(default)]
    pub cusip: Option<String>,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub exchange_full_name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ceo: Option<String>,
    #[serde(default)]
    pub full_time_employees: Option<String>,
    #[serde(default)]
    pub ipo_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_etf: Option<bool>,
    #[serde(default)]
    pub is_actively_trading: Option<bool>,
}

/// One company executive with compensation data where disclosed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyExecutive {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub pay: Option<f64>,
    #[serde(default)]
    pub currency_pay: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub year_born: Option<i32>,
    #[serde(default)]
    pub title_since: Option<NaiveDate>,
}

/// Peer group for a symbol, as curated by the data provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPeers {
    #[serde(default)]
    pub symbol: String,
    /// Tickers the provider considers comparable, in provider order
    #[serde(default)]
    pub peers_list: Vec<String>,
}

/// Market capitalization snapshot for one symbol.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketCap {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub market_cap: Option<f64>,
}

/// Composite financial health scores (Altman Z, Piotroski).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialScore {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub altman_z_score: Option<f64>,
    #[serde(default)]
    pub piotroski_score: Option<f64>,
    #[serde(default)]
    pub working_capital: Option<f64>,
    #[serde(default)]
    pub total_assets: Option<f64>,
    #[serde(default)]
    pub retained_earnings: Option<f64>,
    #[serde(default)]
    pub ebit: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub total_liabilities: Option<f64>,
    #[serde(default)]
    pub revenue: Option<f64>,
}

/// Analyst-style rating snapshot derived from fundamental ratios.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub overall_score: Option<i32>,
    #[serde(default)]
    pub discounted_cash_flow_score: Option<i32>,
    #[serde(default)]
    pub return_on_equity_score: Option<i32>,
    #[serde(default)]
    pub return_on_assets_score: Option<i32>,
    #[serde(default)]
    pub debt_to_equity_score: Option<i32>,
    #[serde(default)]
    pub price_to_earnings_score: Option<i32>,
    #[serde(default)]
    pub price_to_book_score: Option<i32>,
}

/// Discounted cash flow point estimate against the current price.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountedCashFlow {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub dcf: Option<f64>,
    #[serde(default)]
    pub stock_price: Option<f64>,
}

/// Aggregated analyst price targets for one symbol.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTargetConsensus {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub target_high: Option<f64>,
    #[serde(default)]
    pub target_low: Option<f64>,
    #[serde(default)]
    pub target_consensus: Option<f64>,
    #[serde(default)]
    pub target_median: Option<f64>,
}

/// Rolling price-target averages over recent publication windows.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTargetSummary {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub last_month_count: Option<i64>,
    #[serde(default)]
    pub last_month_avg_price_target: Option<f64>,
    #[serde(default)]
    pub last_quarter_count: Option<i64>,
    #[serde(default)]
    pub last_quarter_avg_price_target: Option<f64>,
    #[serde(default)]
    pub last_year_count: Option<i64>,
    #[serde(default)]
    pub last_year_avg_price_target: Option<f64>,
    #[serde(default)]
    pub all_time_count: Option<i64>,
    #[serde(default)]
    pub all_time_avg_price_target: Option<f64>,
}

/// Enterprise value computed for one reporting date.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseValue {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub stock_price: Option<f64>,
    #[serde(default)]
    pub number_of_shares: Option<f64>,
    #[serde(default)]
    pub market_capitalization: Option<f64>,
    #[serde(default)]
    pub minus_cash_and_cash_equivalents: Option<f64>,
    #[serde(default)]
    pub add_total_debt: Option<f64>,
    #[serde(default)]
    pub enterprise_value: Option<f64>,
}

fn symbol_params(symbol: &str) -> Vec<(String, String)> {
    vec![("symbol".to_string(), symbol.to_uppercase())]
}

/// Operations for company identity, valuation and analyst data
///
/// # Examples
///
/// ```rust,no_run
/// use fmpkit::{CompanyOperations, Fmp};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fmp = Fmp::from_env()?;
///
/// let profile = fmp.profile("AAPL").await?;
/// println!(
///     "{}: {:?} ({:?})",
///     profile.symbol, profile.company_name, profile.sector
/// );
/// # Ok(())
/// # }
/// ```
#[async_trait]
impl CompanyOperations for Fmp {
    /// Retrieves the company profile for a symbol.
    async fn profile(&self, symbol: &str) -> Result<CompanyProfile> {
        self.fetch_one("profile", &symbol_params(symbol)).await
    }

    /// Retrieves the executives of a company with disclosed compensation.
    async fn key_executives(&self, symbol: &str) -> Result<Vec<KeyExecutive>> {
        self.fetch_rows("key-executives", &symbol_params(symbol))
            .await
    }

    /// Retrieves the provider-curated peer group for a symbol.
    async fn peers(&self, symbol: &str) -> Result<StockPeers> {
        self.fetch_one("stock-peers", &symbol_params(symbol)).await
    }

    /// Retrieves the current market capitalization snapshot for a symbol.
    async fn market_cap(&self, symbol: &str) -> Result<MarketCap> {
        self.fetch_one("market-capitalization", &symbol_params(symbol))
            .await
    }

    /// Retrieves composite financial health scores for a symbol.
    async fn financial_score(&self, symbol: &str) -> Result<FinancialScore> {
        self.fetch_one("financial-scores", &symbol_params(symbol))
            .await
    }

    /// Retrieves the current rating snapshot for a symbol.
    async fn rating(&self, symbol: &str) -> Result<Rating> {
        self.fetch_one("ratings-snapshot", &symbol_params(symbol))
            .await
    }

    /// Retrieves the discounted cash flow estimate for a symbol.
    async fn discounted_cash_flow(&self, symbol: &str) -> Result<DiscountedCashFlow> {
        self.fetch_one("discounted-cash-flow", &symbol_params(symbol))
            .await
    }

    /// Retrieves the analyst price target consensus for a symbol.
    async fn price_target_consensus(&self, symbol: &str) -> Result<PriceTargetConsensus> {
        self.fetch_one("price-target-consensus", &symbol_params(symbol))
            .await
    }

    /// Retrieves rolling price-target averages for a symbol.
    async fn price_target_summary(&self, symbol: &str) -> Result<PriceTargetSummary> {
        self.fetch_one("price-target-summary", &symbol_params(symbol))
            .await
    }

    /// Retrieves the most recent enterprise value computed for a symbol.
    async fn enterprise_value(&self, symbol: &str) -> Result<EnterpriseValue> {
        let mut params = symbol_params(symbol);
        params.push(("limit".to_string(), "1".to_string()));
        self.fetch_one("enterprise-values", &params).await
    }
}
