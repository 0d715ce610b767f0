mod common;

use chrono::NaiveDate;
use common::read_fixture;
use fmpkit::{HistoricalPrice, Quote, SymbolSearchResult, TradedSymbol};

#[test]
fn parse_quote() {
    let content = read_fixture("market/quote.json");
    let quotes: Vec<Quote> = serde_json::from_str(&content).unwrap();

    assert_eq!(quotes.len(), 1);
    let quote = &quotes[0];
    assert_eq!(quote.symbol, "AAPL");
    assert_eq!(quote.name, Some("Apple Inc.".to_string()));
    assert_eq!(quote.price, Some(232.8));
    assert_eq!(quote.change_percentage, Some(2.1008));
    assert_eq!(quote.day_low, Some(226.65));
    assert_eq!(quote.year_high, Some(260.1));
    assert_eq!(quote.previous_close, Some(228.01));
}

#[test]
fn parse_historical_prices_in_upstream_order() {
    let content = read_fixture("market/historical_price_eod.json");
    let bars: Vec<HistoricalPrice> = serde_json::from_str(&content).unwrap();

    assert_eq!(bars.len(), 2);
    assert_eq!(
        bars[0].date,
        Some(NaiveDate::from_ymd_opt(2025, 2, 4).unwrap())
    );
    assert_eq!(bars[0].close, Some(232.8));
    assert_eq!(bars[0].vwap, Some(230.86));
    assert_eq!(
        bars[1].date,
        Some(NaiveDate::from_ymd_opt(2025, 2, 3).unwrap())
    );
    assert_eq!(bars[1].change_percent, Some(-0.86091));
}

#[test]
fn parse_stock_list() {
    let content = read_fixture("market/stock_list.json");
    let symbols: Vec<TradedSymbol> = serde_json::from_str(&content).unwrap();

    assert_eq!(symbols.len(), 3);
    assert_eq!(symbols[0].symbol, "AAPL");
    assert_eq!(
        symbols[2].company_name,
        Some("Berkshire Hathaway Inc.".to_string())
    );
}

#[test]
fn parse_search_results() {
    let content = read_fixture("market/search_symbol.json");
    let matches: Vec<SymbolSearchResult> = serde_json::from_str(&content).unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].symbol, "AAPL");
    assert_eq!(matches[0].exchange, Some("NASDAQ".to_string()));
    assert_eq!(matches[1].symbol, "APC.DE");
    assert_eq!(matches[1].currency, Some("EUR".to_string()));
}
