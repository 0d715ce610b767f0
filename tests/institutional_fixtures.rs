mod common;

use chrono::NaiveDate;
use common::read_fixture;
use fmpkit::{InstitutionalHolder, ThirteenFHolding};

#[test]
fn parse_institutional_holders() {
    let content = read_fixture("institutional/institutional_holder.json");
    let holders: Vec<InstitutionalHolder> = serde_json::from_str(&content).unwrap();

    assert_eq!(holders.len(), 2);
    assert_eq!(holders[0].holder, Some("VANGUARD GROUP INC".to_string()));
    assert_eq!(holders[0].shares, Some(1335880042.0));
    assert_eq!(
        holders[0].date_reported,
        Some(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
    );
    assert_eq!(holders[1].change, Some(-12425210.0));
}

#[test]
fn parse_form_thirteen() {
    let content = read_fixture("institutional/form_thirteen.json");
    let holdings: Vec<ThirteenFHolding> = serde_json::from_str(&content).unwrap();

    assert_eq!(holdings.len(), 2);

    let apple = &holdings[0];
    assert_eq!(apple.date, Some(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()));
    assert_eq!(
        apple.filing_date,
        Some(NaiveDate::from_ymd_opt(2024, 2, 14).unwrap())
    );
    assert_eq!(
        apple.accepted_date,
        Some("2024-02-14 16:05:44".to_string())
    );
    assert_eq!(apple.cik, Some("0001067983".to_string()));
    assert_eq!(apple.ticker, Some("AAPL".to_string()));
    assert_eq!(apple.name_of_issuer, Some("APPLE INC".to_string()));
    assert_eq!(apple.shares, Some(905560000.0));
    assert_eq!(apple.value, Some(174347467000.0));

    assert_eq!(holdings[1].ticker, Some("BAC".to_string()));
}
