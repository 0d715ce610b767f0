//! Market data endpoints: quotes, price history, symbol directory and search.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use super::Fmp;
use super::error::Result;
use super::options::{HistoryOptions, SearchOptions};
use super::traits::MarketOperations;

/// Real-time quote for one symbol.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub change: Option<f64>,
    #[serde(default)]
    pub change_percentage: Option<f64>,
    #[serde(default)]
    pub day_low: Option<f64>,
    #[serde(default)]
    pub day_high: Option<f64>,
    #[serde(default)]
    pub year_low: Option<f64>,
    #[serde(default)]
    pub year_high: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub average_volume: Option<f64>,
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub previous_close: Option<f64>,
    #[serde(default)]
    pub exchange: Option<String>,
}

/// One end-of-day price bar.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPrice {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub close: Option<f64>,
    #[serde(default)]
    pub adj_close: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub change: Option<f64>,
    #[serde(default)]
    pub change_percent: Option<f64>,
    #[serde(default)]
    pub vwap: Option<f64>,
}

/// One entry of the traded-symbol directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradedSymbol {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub company_name: Option<String>,
}

/// One match from the symbol search endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolSearchResult {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub exchange_full_name: Option<String>,
    #[serde(default)]
    pub exchange: Option<String>,
}

/// Operations for quotes, price history and the symbol directory
///
/// # Examples
///
/// ```rust,no_run
/// use fmpkit::{Fmp, HistoryOptions, MarketOperations};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fmp = Fmp::from_env()?;
///
/// let quote = fmp.quote("AAPL").await?;
/// println!("{}: {:?}", quote.symbol, quote.price);
///
/// let options = HistoryOptions::new().with_date_range("2024-01-01", "2024-03-31");
/// let bars = fmp.historical_prices("AAPL", Some(options)).await?;
/// println!("{} bars", bars.len());
/// # Ok(())
/// # }
/// ```
#[async_trait]
impl MarketOperations for Fmp {
    /// Retrieves the real-time quote for a single symbol.
    async fn quote(&self, symbol: &str) -> Result<Quote> {
        self.fetch_one("quote", &[("symbol".to_string(), symbol.to_uppercase())])
            .await
    }

    /// Retrieves real-time quotes for multiple symbols in one call.
    async fn quotes(&self, symbols: &[&str]) -> Result<Vec<Quote>> {
        let joined = symbols
            .iter()
            .map(|s| s.to_uppercase())
            .collect::<Vec<_>>()
            .join(",");
        self.fetch_rows("quote", &[("symbol".to_string(), joined)])
            .await
    }

    /// Retrieves end-of-day price bars for a symbol, optionally bounded by a
    /// date range.
    async fn historical_prices(
        &self,
        symbol: &str,
        opts: Option<HistoryOptions>,
    ) -> Result<Vec<HistoricalPrice>> {
        let mut params = vec![("symbol".to_string(), symbol.to_uppercase())];
        params.extend(opts.unwrap_or_default().to_query_params());
        self.fetch_rows("historical-price-eod/full", &params).await
    }

    /// Retrieves the full directory of traded symbols.
    async fn stock_list(&self) -> Result<Vec<TradedSymbol>> {
        self.fetch_rows("stock-list", &[]).await
    }

    /// Searches the symbol directory by ticker fragment or company name.
    async fn search_symbol(
        &self,
        query: &str,
        opts: Option<SearchOptions>,
    ) -> Result<Vec<SymbolSearchResult>> {
        let mut params = vec![("query".to_string(), query.to_string())];
        params.extend(opts.unwrap_or_default().to_query_params());
        self.fetch_rows("search-symbol", &params).await
    }
}
