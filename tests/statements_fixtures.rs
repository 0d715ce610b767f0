mod common;

use chrono::NaiveDate;
use common::read_fixture;
use fmpkit::{BalanceSheet, CashFlowStatement, IncomeStatement, RevenueSegment, SegmentItem};

#[test]
fn parse_income_statements() {
    let content = read_fixture("statements/income_statement.json");
    let statements: Vec<IncomeStatement> = serde_json::from_str(&content).unwrap();

    assert_eq!(statements.len(), 2);

    let fy2024 = &statements[0];
    assert_eq!(
        fy2024.date,
        Some(NaiveDate::from_ymd_opt(2024, 9, 28).unwrap())
    );
    assert_eq!(fy2024.symbol, "AAPL");
    assert_eq!(fy2024.reported_currency, Some("USD".to_string()));
    assert_eq!(fy2024.fiscal_year, Some("2024".to_string()));
    assert_eq!(fy2024.period, Some("FY".to_string()));
    assert_eq!(fy2024.revenue, Some(391035000000.0));
    assert_eq!(fy2024.gross_profit, Some(180683000000.0));
    assert_eq!(fy2024.net_income, Some(93736000000.0));
    assert_eq!(fy2024.eps_diluted, Some(6.08));
    assert_eq!(fy2024.ebitda, Some(134661000000.0));

    // The second row omits several fields; they decode as absent, in order
    let fy2023 = &statements[1];
    assert_eq!(
        fy2023.date,
        Some(NaiveDate::from_ymd_opt(2023, 9, 30).unwrap())
    );
    assert_eq!(fy2023.revenue, Some(383285000000.0));
    assert_eq!(fy2023.operating_expenses, None);
    assert_eq!(fy2023.ebitda, None);
    assert_eq!(fy2023.weighted_average_shs_out, None);
}

#[test]
fn empty_statement_response_is_an_empty_list() {
    let statements: Vec<IncomeStatement> = serde_json::from_str("[]").unwrap();
    assert!(statements.is_empty());
}

#[test]
fn parse_balance_sheet() {
    let content = read_fixture("statements/balance_sheet_statement.json");
    let sheets: Vec<BalanceSheet> = serde_json::from_str(&content).unwrap();

    assert_eq!(sheets.len(), 1);
    let sheet = &sheets[0];
    assert_eq!(sheet.symbol, "AAPL");
    assert_eq!(sheet.total_assets, Some(364980000000.0));
    assert_eq!(sheet.total_liabilities, Some(308030000000.0));
    assert_eq!(sheet.retained_earnings, Some(-19154000000.0));
    assert_eq!(sheet.total_stockholders_equity, Some(56950000000.0));
    assert_eq!(sheet.goodwill, Some(0.0));
}

#[test]
fn parse_cash_flow_statement() {
    let content = read_fixture("statements/cash_flow_statement.json");
    let statements: Vec<CashFlowStatement> = serde_json::from_str(&content).unwrap();

    let statement = &statements[0];
    assert_eq!(statement.symbol, "AAPL");
    assert_eq!(statement.operating_cash_flow, Some(118254000000.0));
    assert_eq!(statement.capital_expenditure, Some(-9447000000.0));
    assert_eq!(statement.free_cash_flow, Some(108807000000.0));
    assert_eq!(statement.common_stock_repurchased, Some(-94949000000.0));
}

#[test]
fn parse_product_segmentation() {
    let content = read_fixture("statements/revenue_product_segmentation.json");
    let segments: Vec<RevenueSegment> = serde_json::from_str(&content).unwrap();

    assert_eq!(segments.len(), 2);

    let fy2022 = &segments[0];
    assert_eq!(fy2022.date, NaiveDate::from_ymd_opt(2022, 9, 24).unwrap());
    assert_eq!(fy2022.items.len(), 5);
    assert_eq!(
        fy2022.items[0],
        SegmentItem {
            name: "Mac".to_string(),
            value: 40177000000.0,
        }
    );
    assert_eq!(
        fy2022.items[1],
        SegmentItem {
            name: "iPhone".to_string(),
            value: 205489000000.0,
        }
    );
    assert_eq!(fy2022.items[4].name, "Service");

    let fy2021 = &segments[1];
    assert_eq!(fy2021.date, NaiveDate::from_ymd_opt(2021, 9, 25).unwrap());
    assert_eq!(fy2021.items[1].value, 191973000000.0);
}

#[test]
fn parse_geographic_segmentation() {
    let content = read_fixture("statements/revenue_geographic_segmentation.json");
    let segments: Vec<RevenueSegment> = serde_json::from_str(&content).unwrap();

    assert_eq!(segments.len(), 1);
    assert_eq!(
        segments[0].date,
        NaiveDate::from_ymd_opt(2022, 9, 24).unwrap()
    );
    assert_eq!(segments[0].items[0].name, "Americas Segment");
    assert_eq!(segments[0].items[0].value, 169658000000.0);
    assert_eq!(segments[0].items[4].name, "Rest of Asia Pacific Segment");
}
