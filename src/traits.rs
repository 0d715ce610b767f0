//! Trait definitions organizing FMP operations by feature area.
//!
//! fmpkit uses traits to logically group related functionality into domains:
//! company data, financial statements, market data, ETFs, institutional
//! ownership and news. Each feature has a corresponding trait that the `Fmp`
//! client implements when that feature is enabled.
//!
//! This design allows for:
//! - Clear separation of concerns
//! - Feature-gated compilation (only include what you need)
//! - Easy mocking and testing
//! - Discoverable API through trait methods
//!
//! Users typically interact with the `Fmp` struct directly rather than
//! through trait objects, but the traits are useful for understanding the API
//! surface and for testing scenarios where you want to provide alternative
//! implementations.

#[cfg(feature = "company")]
use super::company::{
    CompanyProfile, DiscountedCashFlow, EnterpriseValue, FinancialScore, KeyExecutive, MarketCap,
    PriceTargetConsensus, PriceTargetSummary, Rating, StockPeers,
};
use super::error::Result;
#[cfg(feature = "etf")]
use super::etf::{EtfHolding, EtfInfo};
#[cfg(feature = "institutional")]
use super::institutional::{InstitutionalHolder, ThirteenFHolding};
#[cfg(feature = "market")]
use super::market::{HistoricalPrice, Quote, SymbolSearchResult, TradedSymbol};
#[cfg(feature = "news")]
use super::news::NewsArticle;
#[cfg(feature = "market")]
use super::options::{HistoryOptions, SearchOptions};
#[cfg(feature = "news")]
use super::options::NewsOptions;
#[cfg(feature = "statements")]
use super::options::StatementOptions;
#[cfg(feature = "statements")]
use super::statements::{BalanceSheet, CashFlowStatement, IncomeStatement, RevenueSegment};
use async_trait::async_trait;

/// Operations for company identity, valuation and analyst data.
///
/// Nearly every method in this trait is a singular resource: the upstream API
/// models these endpoints as one-element arrays carrying a single logical
/// record, and an empty array maps to `FmpError::NotFound` rather than an
/// empty collection.
#[cfg(feature = "company")]
#[async_trait]
pub trait CompanyOperations {
    /// Retrieves the company profile for a symbol.
    async fn profile(&self, symbol: &str) -> Result<CompanyProfile>;
    /// Retrieves the executives of a company with disclosed compensation.
    async fn key_executives(&self, symbol: &str) -> Result<Vec<KeyExecutive>>;
    /// Retrieves the provider-curated peer group for a symbol.
    async fn peers(&self, symbol: &str) -> Result<StockPeers>;
    /// Retrieves the current market capitalization snapshot for a symbol.
    async fn market_cap(&self, symbol: &str) -> Result<MarketCap>;
    /// Retrieves composite financial health scores for a symbol.
    async fn financial_score(&self, symbol: &str) -> Result<FinancialScore>;
    /// Retrieves the current rating snapshot for a symbol.
    async fn rating(&self, symbol: &str) -> Result<Rating>;
    /// Retrieves the discounted cash flow estimate for a symbol.
    async fn discounted_cash_flow(&self, symbol: &str) -> Result<DiscountedCashFlow>;
    /// Retrieves the analyst price target consensus for a symbol.
    async fn price_target_consensus(&self, symbol: &str) -> Result<PriceTargetConsensus>;
    /// Retrieves rolling price-target averages for a symbol.
    async fn price_target_summary(&self, symbol: &str) -> Result<PriceTargetSummary>;
    /// Retrieves the most recent enterprise value computed for a symbol.
    async fn enterprise_value(&self, symbol: &str) -> Result<EnterpriseValue>;
}

/// Operations for financial statements and revenue segmentation.
///
/// Statements are plural resources returned most recent first; an empty
/// result set is an empty vector, not an error. The segmentation methods
/// reshape the upstream dynamic-key payload into stable records during
/// decode.
#[cfg(feature = "statements")]
#[async_trait]
pub trait StatementOperations {
    /// Retrieves income statements for a symbol.
    async fn income_statements(
        &self,
        symbol: &str,
        opts: Option<StatementOptions>,
    ) -> Result<Vec<IncomeStatement>>;
    /// Retrieves balance sheet statements for a symbol.
    async fn balance_sheets(
        &self,
        symbol: &str,
        opts: Option<StatementOptions>,
    ) -> Result<Vec<BalanceSheet>>;
    /// Retrieves cash flow statements for a symbol.
    async fn cash_flow_statements(
        &self,
        symbol: &str,
        opts: Option<StatementOptions>,
    ) -> Result<Vec<CashFlowStatement>>;
    /// Retrieves revenue broken down by product line.
    async fn revenue_product_segmentation(
        &self,
        symbol: &str,
        opts: Option<StatementOptions>,
    ) -> Result<Vec<RevenueSegment>>;
    /// Retrieves revenue broken down by geography.
    async fn revenue_geographic_segmentation(
        &self,
        symbol: &str,
        opts: Option<StatementOptions>,
    ) -> Result<Vec<RevenueSegment>>;
}

/// Operations for quotes, price history and the symbol directory.
#[cfg(feature = "market")]
#[async_trait]
pub trait MarketOperations {
    /// Retrieves the real-time quote for a single symbol.
    async fn quote(&self, symbol: &str) -> Result<Quote>;
    /// Retrieves real-time quotes for multiple symbols in one call.
    async fn quotes(&self, symbols: &[&str]) -> Result<Vec<Quote>>;
    /// Retrieves end-of-day price bars for a symbol.
    async fn historical_prices(
        &self,
        symbol: &str,
        opts: Option<HistoryOptions>,
    ) -> Result<Vec<HistoricalPrice>>;
    /// Retrieves the full directory of traded symbols.
    async fn stock_list(&self) -> Result<Vec<TradedSymbol>>;
    /// Searches the symbol directory by ticker fragment or company name.
    async fn search_symbol(
        &self,
        query: &str,
        opts: Option<SearchOptions>,
    ) -> Result<Vec<SymbolSearchResult>>;
}

/// Operations for exchange-traded funds.
#[cfg(feature = "etf")]
#[async_trait]
pub trait EtfOperations {
    /// Retrieves the descriptor for a fund, including its sector exposure.
    async fn etf_info(&self, symbol: &str) -> Result<EtfInfo>;
    /// Retrieves the portfolio holdings of a fund.
    async fn etf_holdings(&self, symbol: &str) -> Result<Vec<EtfHolding>>;
}

/// Operations for institutional ownership data.
#[cfg(feature = "institutional")]
#[async_trait]
pub trait InstitutionalOperations {
    /// Retrieves the institutions holding a symbol.
    async fn institutional_holders(&self, symbol: &str) -> Result<Vec<InstitutionalHolder>>;
    /// Retrieves the 13F filing of an institution for a quarter end date.
    async fn form_thirteen(&self, cik: &str, date: &str) -> Result<Vec<ThirteenFHolding>>;
}

/// Operations for news feeds.
#[cfg(feature = "news")]
#[async_trait]
pub trait NewsOperations {
    /// Retrieves news articles for one or more symbols.
    async fn stock_news(
        &self,
        symbols: &[&str],
        opts: Option<NewsOptions>,
    ) -> Result<Vec<NewsArticle>>;
    /// Retrieves general market news.
    async fn general_news(&self, opts: Option<NewsOptions>) -> Result<Vec<NewsArticle>>;
}
