//! Financial statement and revenue segmentation endpoints.
//!
//! This module covers the three statement families (income statement, balance
//! sheet, cash flow statement) plus the two revenue segmentation endpoints.
//! Statements arrive as plain JSON arrays of objects and decode directly into
//! records. Segmentation data arrives in a dynamic-key shape, a list of
//! `{ "<date>": { "<category>": <number> } }` objects, and is reshaped into
//! stable [`RevenueSegment`] records during decode.

use std::fmt;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use super::Fmp;
use super::error::Result;
use super::options::StatementOptions;
use super::traits::StatementOperations;

/// Income statement for one reporting period.
///
/// Monetary amounts are reported in the currency named by
/// `reported_currency`. Fields the upstream payload omits decode to `None`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    /// Period end date
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub reported_currency: Option<String>,
    /// Fiscal year the period belongs to
    #[serde(default)]
    pub fiscal_year: Option<String>,
    /// Reporting period label ("FY", "Q1", ...)
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub revenue: Option<f64>,
    #[serde(default)]
    pub cost_of_revenue: Option<f64>,
    #[serde(default)]
    pub gross_profit: Option<f64>,
    #[serde(default)]
    pub operating_expenses: Option<f64>,
    #[serde(default)]
    pub operating_income: Option<f64>,
    #[serde(default)]
    pub income_before_tax: Option<f64>,
    #[serde(default)]
    pub income_tax_expense: Option<f64>,
    #[serde(default)]
    pub net_income: Option<f64>,
    #[serde(default)]
    pub eps: Option<f64>,
    #[serde(default)]
    pub eps_diluted: Option<f64>,
    #[serde(default)]
    pub ebitda: Option<f64>,
    #[serde(default)]
    pub weighted_average_shs_out: Option<f64>,
}

/// Balance sheet for one reporting period.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub reported_currency: Option<String>,
    #[serde(default)]
    pub fiscal_year: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub cash_and_cash_equivalents: Option<f64>,
    #[serde(default)]
    pub total_current_assets: Option<f64>,
    #[serde(default)]
    pub total_assets: Option<f64>,
    #[serde(default)]
    pub total_current_liabilities: Option<f64>,
    #[serde(default)]
    pub total_debt: Option<f64>,
    #[serde(default)]
    pub total_liabilities: Option<f64>,
    #[serde(default)]
    pub retained_earnings: Option<f64>,
    #[serde(default)]
    pub total_stockholders_equity: Option<f64>,
    #[serde(default)]
    pub goodwill: Option<f64>,
    #[serde(default)]
    pub intangible_assets: Option<f64>,
}

/// Cash flow statement for one reporting period.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowStatement {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub reported_currency: Option<String>,
    #[serde(default)]
    pub fiscal_year: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub net_income: Option<f64>,
    #[serde(default)]
    pub operating_cash_flow: Option<f64>,
    #[serde(default)]
    pub capital_expenditure: Option<f64>,
    #[serde(default)]
    pub free_cash_flow: Option<f64>,
    #[serde(default)]
    pub dividends_paid: Option<f64>,
    #[serde(default)]
    pub common_stock_repurchased: Option<f64>,
}

/// Revenue for one reporting date, broken down by product or geography.
///
/// Upstream delivers segmentation data as a list of single-key objects where
/// the key is the period end date and the value maps category names to
/// revenue figures. Decoding inverts that into this stable shape, preserving
/// the category order of the source object.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueSegment {
    /// Period end date (the dynamic key of the source object)
    pub date: NaiveDate,
    /// Revenue per category, in source order
    pub items: Vec<SegmentItem>,
}

/// One category line within a [`RevenueSegment`].
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentItem {
    /// Product or country name
    pub name: String,
    /// Revenue attributed to the category
    pub value: f64,
}

/// Ordered category lines decoded from a dynamic-key map.
///
/// A plain map type would lose insertion order, so the inner map is visited
/// entry by entry and collected into a vector.
struct SegmentItems(Vec<SegmentItem>);

impl<'de> Deserialize<'de> for SegmentItems {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ItemsVisitor;

        impl<'de> Visitor<'de> for ItemsVisitor {
            type Value = SegmentItems;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map from category name to revenue")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut items = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, value)) = map.next_entry::<String, f64>()? {
                    items.push(SegmentItem { name, value });
                }
                Ok(SegmentItems(items))
            }
        }

        deserializer.deserialize_map(ItemsVisitor)
    }
}

impl<'de> Deserialize<'de> for RevenueSegment {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SegmentVisitor;

        impl<'de> Visitor<'de> for SegmentVisitor {
            type Value = RevenueSegment;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an object with a single YYYY-MM-DD key")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let Some((raw_date, SegmentItems(items))) =
                    map.next_entry::<String, SegmentItems>()?
                else {
                    return Err(de::Error::custom(
                        "expected a dated segmentation entry, found an empty object",
                    ));
                };

                // Upstream never sends more than one date per entry; a second
                // key means the payload shape changed and decoding must stop.
                if map.next_key::<String>()?.is_some() {
                    return Err(de::Error::custom(
                        "expected exactly one date key per segmentation entry",
                    ));
                }

                let date = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d").map_err(|e| {
                    de::Error::custom(format!("invalid segmentation date {:?}: {}", raw_date, e))
                })?;

                Ok(RevenueSegment { date, items })
            }
        }

        deserializer.deserialize_map(SegmentVisitor)
    }
}

fn statement_params(symbol: &str, opts: Option<StatementOptions>) -> Vec<(String, String)> {
    let mut params = vec![("symbol".to_string(), symbol.to_uppercase())];
    params.extend(opts.unwrap_or_default().to_query_params());
    params
}

/// Operations for financial statements and revenue segmentation
///
/// Statements are returned most recent first, exactly as the upstream API
/// orders them. An empty result set decodes to an empty vector.
///
/// # Examples
///
/// ```rust,no_run
/// use fmpkit::{Fmp, Period, StatementOperations, StatementOptions};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fmp = Fmp::from_env()?;
///
/// let options = StatementOptions::new()
///     .with_period(Period::Quarter)
///     .with_limit(4);
///
/// let statements = fmp.income_statements("AAPL", Some(options)).await?;
/// for statement in statements {
///     println!("{:?}: {:?}", statement.date, statement.revenue);
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
impl StatementOperations for Fmp {
    /// Retrieves income statements for a symbol.
    async fn income_statements(
        &self,
        symbol: &str,
        opts: Option<StatementOptions>,
    ) -> Result<Vec<IncomeStatement>> {
        self.fetch_rows("income-statement", &statement_params(symbol, opts))
            .await
    }

    /// Retrieves balance sheet statements for a symbol.
    async fn balance_sheets(
        &self,
        symbol: &str,
        opts: Option<StatementOptions>,
    ) -> Result<Vec<BalanceSheet>> {
        self.fetch_rows("balance-sheet-statement", &statement_params(symbol, opts))
            .await
    }

    /// Retrieves cash flow statements for a symbol.
    async fn cash_flow_statements(
        &self,
        symbol: &str,
        opts: Option<StatementOptions>,
    ) -> Result<Vec<CashFlowStatement>> {
        self.fetch_rows("cash-flow-statement", &statement_params(symbol, opts))
            .await
    }

    /// Retrieves revenue broken down by product line.
    ///
    /// The upstream dynamic-key payload is reshaped into [`RevenueSegment`]
    /// records during decode; list order and per-date category order are
    /// preserved.
    async fn revenue_product_segmentation(
        &self,
        symbol: &str,
        opts: Option<StatementOptions>,
    ) -> Result<Vec<RevenueSegment>> {
        self.fetch_rows(
            "revenue-product-segmentation",
            &statement_params(symbol, opts),
        )
        .await
    }

    /// Retrieves revenue broken down by geography.
    async fn revenue_geographic_segmentation(
        &self,
        symbol: &str,
        opts: Option<StatementOptions>,
    ) -> Result<Vec<RevenueSegment>> {
        self.fetch_rows(
            "revenue-geographic-segmentation",
            &statement_params(symbol, opts),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reshape_preserves_date_and_category_order() {
        let content = r#"[
            {"2022-09-24": {"Mac": 40177000000, "iPhone": 205489000000}},
            {"2021-09-25": {"Mac": 35190000000, "iPhone": 191973000000}}
        ]"#;

        let segments: Vec<RevenueSegment> = serde_json::from_str(content).unwrap();

        assert_eq!(segments.len(), 2);
        assert_eq!(
            segments[0].date,
            NaiveDate::from_ymd_opt(2022, 9, 24).unwrap()
        );
        assert_eq!(
            segments[0].items,
            vec![
                SegmentItem {
                    name: "Mac".to_string(),
                    value: 40177000000.0,
                },
                SegmentItem {
                    name: "iPhone".to_string(),
                    value: 205489000000.0,
                },
            ]
        );
        assert_eq!(
            segments[1].date,
            NaiveDate::from_ymd_opt(2021, 9, 25).unwrap()
        );
    }

    #[test]
    fn reshape_empty_list_produces_empty_list() {
        let segments: Vec<RevenueSegment> = serde_json::from_str("[]").unwrap();
        assert!(segments.is_empty());
    }

    #[test]
    fn reshape_accepts_empty_category_map() {
        let segments: Vec<RevenueSegment> =
            serde_json::from_str(r#"[{"2022-09-24": {}}]"#).unwrap();
        assert_eq!(segments.len(), 1);
        assert!(segments[0].items.is_empty());
    }

    #[test]
    fn reshape_rejects_multiple_date_keys() {
        let content = r#"[{"2022-09-24": {"Mac": 1.0}, "2021-09-25": {"Mac": 2.0}}]"#;
        let result: std::result::Result<Vec<RevenueSegment>, _> = serde_json::from_str(content);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("exactly one date key"), "{}", err);
    }

    #[test]
    fn reshape_rejects_invalid_date_key() {
        let result: std::result::Result<Vec<RevenueSegment>, _> =
            serde_json::from_str(r#"[{"not-a-date": {"Mac": 1.0}}]"#);
        assert!(result.is_err());

        let result: std::result::Result<Vec<RevenueSegment>, _> =
            serde_json::from_str(r#"[{"2022-13-40": {"Mac": 1.0}}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn reshape_rejects_empty_object_entry() {
        let result: std::result::Result<Vec<RevenueSegment>, _> =
            serde_json::from_str(r#"[{}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn statement_date_must_be_a_calendar_date() {
        let valid: Vec<IncomeStatement> =
            serde_json::from_str(r#"[{"date": "2022-09-24", "symbol": "AAPL"}]"#).unwrap();
        assert_eq!(
            valid[0].date,
            Some(NaiveDate::from_ymd_opt(2022, 9, 24).unwrap())
        );

        let invalid: std::result::Result<Vec<IncomeStatement>, _> =
            serde_json::from_str(r#"[{"date": "2022-13-40", "symbol": "AAPL"}]"#);
        assert!(invalid.is_err());
    }
}
