//! News feed endpoints.
//!
//! Articles are returned newest first, as upstream orders them. The
//! `published_date` carries a date-time (`YYYY-MM-DD HH:MM:SS`) rather than a
//! bare calendar date, so it is kept as a string instead of being forced into
//! a date type.

use async_trait::async_trait;
use serde::Deserialize;

use super::Fmp;
use super::error::Result;
use super::options::NewsOptions;
use super::traits::NewsOperations;

/// One news article, optionally tied to a symbol.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Operations for news feeds
///
/// # Examples
///
/// ```rust,no_run
/// use fmpkit::{Fmp, NewsOperations, NewsOptions};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fmp = Fmp::from_env()?;
///
/// let options = NewsOptions::new().with_limit(10);
/// let articles = fmp.stock_news(&["AAPL", "MSFT"], Some(options)).await?;
/// for article in articles {
///     println!("{:?}: {:?}", article.published_date, article.title);
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
impl NewsOperations for Fmp {
    /// Retrieves news articles for one or more symbols.
    async fn stock_news(
        &self,
        symbols: &[&str],
        opts: Option<NewsOptions>,
    ) -> Result<Vec<NewsArticle>> {
        let joined = symbols
            .iter()
            .map(|s| s.to_uppercase())
            .collect::<Vec<_>>()
            .join(",");
        let mut params = vec![("symbols".to_string(), joined)];
        params.extend(opts.unwrap_or_default().to_query_params());
        self.fetch_rows("news/stock", &params).await
    }

    /// Retrieves general market news.
    async fn general_news(&self, opts: Option<NewsOptions>) -> Result<Vec<NewsArticle>> {
        let params = opts.unwrap_or_default().to_query_params();
        self.fetch_rows("news/general", &params).await
    }
}
