//! # fmpkit - A Rust client for the Financial Modeling Prep API
//!
//! fmpkit provides a typed, async API for the Financial Modeling Prep (FMP)
//! REST endpoints: company fundamentals, financial statements, market data,
//! ETF data, institutional filings and news feeds.
//!
//! ## Features
//!
//! - **Uniform request layer** - one GET per operation, credential attached
//!   as a query parameter, responses normalized into a flat error enum
//! - **Company operations** - profiles, executives, peers, valuation and
//!   analyst snapshots
//! - **Statement operations** - income statements, balance sheets, cash
//!   flows, and revenue segmentation reshaped into stable records
//! - **Market operations** - quotes, end-of-day history, symbol directory
//!   and search
//! - **ETF operations** - fund descriptors with sector exposure, holdings
//! - **Institutional operations** - 13F filings and holder summaries
//! - **News operations** - per-symbol and general market news
//!
//! There is deliberately no retry logic, rate limiting, caching or
//! pagination iteration in this crate; callers that need those policies
//! layer them on top.
//!
//! ## Requirements
//!
//! fmpkit is an async-first library and requires an async runtime. We
//! recommend [tokio](https://tokio.rs), which is the most widely used async
//! runtime in the Rust ecosystem. All requests require an FMP API key.
//!
//! ## Basic Usage
//!
//! ```ignore
//! use fmpkit::{Fmp, Period, StatementOperations, StatementOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads FMP_API_KEY from the environment (or a .env file)
//!     let fmp = Fmp::from_env()?;
//!
//!     let options = StatementOptions::new()
//!         .with_period(Period::Annual)
//!         .with_limit(5);
//!
//!     let statements = fmp.income_statements("AAPL", Some(options)).await?;
//!
//!     for statement in statements {
//!         println!("{:?}: revenue {:?}", statement.date, statement.revenue);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod config;
mod core;
mod error;

// Conditionally include modules
#[cfg(any(feature = "statements", feature = "market", feature = "news"))]
mod options;

#[cfg(any(
    feature = "company",
    feature = "statements",
    feature = "market",
    feature = "etf",
    feature = "institutional",
    feature = "news"
))]
mod traits;

// Public modules
#[cfg(feature = "company")]
mod company;
#[cfg(feature = "etf")]
mod etf;
#[cfg(feature = "institutional")]
mod institutional;
#[cfg(feature = "market")]
mod market;
#[cfg(feature = "news")]
mod news;
#[cfg(feature = "statements")]
mod statements;

// Core Fmp functionality (always available)
pub use config::FmpConfig;
pub use core::Fmp;
pub use error::{FmpError, Result};

// Conditionally export options
#[cfg(feature = "market")]
pub use options::{HistoryOptions, SearchOptions};
#[cfg(feature = "news")]
pub use options::NewsOptions;
#[cfg(any(feature = "statements", feature = "market", feature = "news"))]
pub use options::Period;
#[cfg(feature = "statements")]
pub use options::StatementOptions;

// Re-export core types and traits for a clean API
#[cfg(feature = "company")]
pub use company::{
    CompanyProfile, DiscountedCashFlow, EnterpriseValue, FinancialScore, KeyExecutive, MarketCap,
    PriceTargetConsensus, PriceTargetSummary, Rating, StockPeers,
};
#[cfg(feature = "etf")]
pub use etf::{EtfHolding, EtfInfo, SectorWeight};
#[cfg(feature = "institutional")]
pub use institutional::{InstitutionalHolder, ThirteenFHolding};
#[cfg(feature = "market")]
pub use market::{HistoricalPrice, Quote, SymbolSearchResult, TradedSymbol};
#[cfg(feature = "news")]
pub use news::NewsArticle;
#[cfg(feature = "statements")]
pub use statements::{
    BalanceSheet, CashFlowStatement, IncomeStatement, RevenueSegment, SegmentItem,
};

// Conditionally export traits
#[cfg(feature = "company")]
pub use traits::CompanyOperations;
#[cfg(feature = "etf")]
pub use traits::EtfOperations;
#[cfg(feature = "institutional")]
pub use traits::InstitutionalOperations;
#[cfg(feature = "market")]
pub use traits::MarketOperations;
#[cfg(feature = "news")]
pub use traits::NewsOperations;
#[cfg(feature = "statements")]
pub use traits::StatementOperations;

/// Current crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
