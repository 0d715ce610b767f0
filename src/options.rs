/// Reporting period for financial statements and segmentation data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    /// Annual reports (10-K filings). This is the upstream default.
    #[default]
    Annual,
    /// Quarterly reports (10-Q filings).
    Quarter,
}

impl Period {
    /// Returns the query-parameter value for this period.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarter => "quarter",
        }
    }
}

/// Options for statement and segmentation requests
#[cfg(feature = "statements")]
#[derive(Debug, Clone, Default)]
pub struct StatementOptions {
    pub period: Option<Period>,
    pub limit: Option<u32>,
}

#[cfg(feature = "statements")]
impl StatementOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reporting period (annual or quarterly)
    pub fn with_period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    /// Sets the maximum number of periods to return, most recent first
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(period) = self.period {
            params.push(("period".to_string(), period.as_str().to_string()));
        }

        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        params
    }
}

/// Options for historical price requests
#[cfg(feature = "market")]
#[derive(Debug, Clone, Default)]
pub struct HistoryOptions {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[cfg(feature = "market")]
impl HistoryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the date range as `YYYY-MM-DD` strings
    pub fn with_date_range(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self.to = Some(to.into());
        self
    }

    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(ref from) = self.from {
            params.push(("from".to_string(), from.clone()));
        }

        if let Some(ref to) = self.to {
            params.push(("to".to_string(), to.clone()));
        }

        params
    }
}

/// Options for symbol search requests
#[cfg(feature = "market")]
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub limit: Option<u32>,
    pub exchange: Option<String>,
}

#[cfg(feature = "market")]
impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of matches to return
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Restricts matches to a single exchange (e.g. "NASDAQ")
    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        if let Some(ref exchange) = self.exchange {
            params.push(("exchange".to_string(), exchange.clone()));
        }

        params
    }
}

/// Options for news feed requests
#[cfg(feature = "news")]
#[derive(Debug, Clone, Default)]
pub struct NewsOptions {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[cfg(feature = "news")]
impl NewsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the result page, starting at 0
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the maximum number of articles per page
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the publication date range as `YYYY-MM-DD` strings
    pub fn with_date_range(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self.to = Some(to.into());
        self
    }

    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(page) = self.page {
            params.push(("page".to_string(), page.to_string()));
        }

        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        if let Some(ref from) = self.from {
            params.push(("from".to_string(), from.clone()));
        }

        if let Some(ref to) = self.to {
            params.push(("to".to_string(), to.clone()));
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_query_values() {
        assert_eq!(Period::Annual.as_str(), "annual");
        assert_eq!(Period::Quarter.as_str(), "quarter");
        assert_eq!(Period::default(), Period::Annual);
    }

    #[cfg(feature = "statements")]
    #[test]
    fn statement_options_to_query_params() {
        let params = StatementOptions::new()
            .with_period(Period::Quarter)
            .with_limit(4)
            .to_query_params();

        assert_eq!(
            params,
            vec![
                ("period".to_string(), "quarter".to_string()),
                ("limit".to_string(), "4".to_string()),
            ]
        );
    }

    #[cfg(feature = "statements")]
    #[test]
    fn empty_options_serialize_to_no_params() {
        assert!(StatementOptions::new().to_query_params().is_empty());
    }
}
