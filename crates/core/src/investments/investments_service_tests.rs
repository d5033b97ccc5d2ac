use rust_decimal_macros::dec;
use std::sync::Arc;

use super::*;
use crate::test_support::{date, InMemoryStore, OTHER_USER, USER};

fn service(store: &Arc<InMemoryStore>) -> HoldingService {
    HoldingService::new(store.clone())
}

fn apple() -> NewHolding {
    NewHolding {
        name: "Apple Inc.".to_string(),
        ticker: " aapl ".to_string(),
        quantity: dec!(10),
        purchase_price: dec!(150),
        current_price: dec!(175.50),
        purchase_date: date("2023-02-10"),
    }
}

#[tokio::test]
async fn test_create_uppercases_ticker() {
    let store = InMemoryStore::new();
    let holding = service(&store).create_holding(USER, apple()).await.unwrap();
    assert_eq!(holding.ticker, "AAPL");
    assert_eq!(holding.market_value().unwrap(), dec!(1755));
}

#[tokio::test]
async fn test_create_validates_amounts() {
    let store = InMemoryStore::new();
    let service = service(&store);
    assert!(service
        .create_holding(
            USER,
            NewHolding {
                quantity: dec!(0),
                ..apple()
            },
        )
        .await
        .is_err());
    assert!(service
        .create_holding(
            USER,
            NewHolding {
                ticker: "".to_string(),
                ..apple()
            },
        )
        .await
        .is_err());
}

#[tokio::test]
async fn test_summary_totals() {
    let store = InMemoryStore::new();
    let service = service(&store);
    service.create_holding(USER, apple()).await.unwrap();
    service
        .create_holding(
            USER,
            NewHolding {
                name: "Vanguard S&P 500".to_string(),
                ticker: "VOO".to_string(),
                quantity: dec!(5),
                purchase_price: dec!(400),
                current_price: dec!(380),
                purchase_date: date("2023-03-01"),
            },
        )
        .await
        .unwrap();

    let summary = service.get_summary(USER).unwrap();
    assert_eq!(summary.total_value, dec!(3655));
    assert_eq!(summary.total_cost_basis, dec!(3500));
    assert_eq!(summary.total_gain_loss, dec!(155));
    assert_eq!(summary.total_gain_loss_percent, dec!(4.43));
    assert_eq!(summary.holdings.len(), 2);
}

#[tokio::test]
async fn test_summary_without_holdings_is_zero() {
    let store = InMemoryStore::new();
    let summary = service(&store).get_summary(USER).unwrap();
    assert_eq!(summary.total_value, dec!(0));
    assert_eq!(summary.total_gain_loss_percent, dec!(0));
}

#[tokio::test]
async fn test_update_and_delete_are_user_scoped() {
    let store = InMemoryStore::new();
    let service = service(&store);
    let theirs = service.create_holding(OTHER_USER, apple()).await.unwrap();

    assert!(service
        .update_holding(USER, &theirs.id, apple())
        .await
        .unwrap_err()
        .is_not_found());
    assert!(service
        .delete_holding(USER, &theirs.id)
        .await
        .unwrap_err()
        .is_not_found());

    let updated = service
        .update_holding(
            OTHER_USER,
            &theirs.id,
            NewHolding {
                quantity: dec!(12),
                ..apple()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.quantity, dec!(12));
    assert_eq!(
        service.delete_holding(OTHER_USER, &theirs.id).await.unwrap(),
        theirs.id
    );
}
