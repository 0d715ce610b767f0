use fmpkit::{Fmp, Period, StatementOperations, StatementOptions};

#[tokio::test]
#[ignore]
async fn income_statements() {
    let fmp = Fmp::from_env().unwrap();
    let options = StatementOptions::new()
        .with_period(Period::Annual)
        .with_limit(2);
    let statements = fmp.income_statements("AAPL", Some(options)).await.unwrap();
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0].symbol, "AAPL");
    assert!(statements[0].revenue.is_some());
}

#[tokio::test]
#[ignore]
async fn product_segmentation() {
    let fmp = Fmp::from_env().unwrap();
    let segments = fmp
        .revenue_product_segmentation("AAPL", None)
        .await
        .unwrap();
    assert!(!segments.is_empty());
    assert!(!segments[0].items.is_empty());
}

#[tokio::test]
#[ignore]
async fn segmentation_for_unknown_symbol_is_empty() {
    let fmp = Fmp::from_env().unwrap();
    let segments = fmp
        .revenue_product_segmentation("THISISNOTASYMBOL", None)
        .await
        .unwrap();
    assert!(segments.is_empty());
}
