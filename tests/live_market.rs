use fmpkit::{Fmp, MarketOperations, SearchOptions};

#[tokio::test]
#[ignore]
async fn quote() {
    let fmp = Fmp::from_env().unwrap();
    let quote = fmp.quote("AAPL").await.unwrap();
    assert_eq!(quote.symbol, "AAPL");
    assert!(quote.price.is_some());
}

#[tokio::test]
#[ignore]
async fn quotes() {
    let fmp = Fmp::from_env().unwrap();
    let quotes = fmp.quotes(&["AAPL", "MSFT"]).await.unwrap();
    assert_eq!(quotes.len(), 2);
}

#[tokio::test]
#[ignore]
async fn search_symbol() {
    let fmp = Fmp::from_env().unwrap();
    let options = SearchOptions::new().with_limit(5);
    let matches = fmp.search_symbol("Apple", Some(options)).await.unwrap();
    assert!(!matches.is_empty());
    assert!(matches.iter().any(|m| m.symbol == "AAPL"));
}
