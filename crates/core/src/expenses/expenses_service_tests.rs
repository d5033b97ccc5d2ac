use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use super::*;
use crate::constants::ALL_CATEGORIES;
use crate::errors::Error;
use crate::test_support::{date, expense_service, InMemoryStore, OTHER_USER, USER};

fn new_expense(day: &str, description: &str, category: &str, amount: Decimal) -> NewExpense {
    NewExpense {
        date: date(day),
        description: description.to_string(),
        category: category.to_string(),
        amount,
    }
}

async fn seeded() -> (Arc<InMemoryStore>, Arc<ExpenseService>) {
    let store = InMemoryStore::new();
    store.seed_category(USER, "Groceries");
    store.seed_category(USER, "Transport");
    store.seed_category(OTHER_USER, "Groceries");
    let service = expense_service(&store);
    for (day, description, category, amount) in [
        ("2024-05-01", "Weekly shop", "Groceries", dec!(82.10)),
        ("2024-05-03", "Bus pass", "Transport", dec!(45)),
        ("2024-05-03", "100% juice_box", "Groceries", dec!(3.50)),
        ("2024-04-28", "Farmers market", "Groceries", dec!(20)),
    ] {
        service
            .create_expense(USER, new_expense(day, description, category, amount))
            .await
            .unwrap();
    }
    service
        .create_expense(OTHER_USER, new_expense("2024-05-02", "Other shop", "Groceries", dec!(9)))
        .await
        .unwrap();
    (store, service)
}

#[tokio::test]
async fn test_list_orders_newest_first_and_scopes_user() {
    let (_store, service) = seeded().await;
    let expenses = service.get_expenses(USER, ExpenseFilter::default()).unwrap();
    let descriptions: Vec<&str> = expenses.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(
        descriptions,
        vec!["100% juice_box", "Bus pass", "Weekly shop", "Farmers market"]
    );
}

#[tokio::test]
async fn test_filters_combine() {
    let (_store, service) = seeded().await;

    let in_may = service
        .get_expenses(
            USER,
            ExpenseFilter {
                start_date: Some(date("2024-05-01")),
                end_date: Some(date("2024-05-03")),
                category: Some("Groceries".to_string()),
                search: None,
            },
        )
        .unwrap();
    assert_eq!(in_may.len(), 2);

    let all = service
        .get_expenses(
            USER,
            ExpenseFilter {
                category: Some(ALL_CATEGORIES.to_string()),
                search: Some("SHOP".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].description, "Weekly shop");
}

#[tokio::test]
async fn test_create_with_unknown_category_fails() {
    let (_store, service) = seeded().await;
    let err = service
        .create_expense(USER, new_expense("2024-05-04", "Movie", "Entertainment", dec!(12)))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidCategory(_)));
}

#[tokio::test]
async fn test_create_validates_amount_and_description() {
    let (_store, service) = seeded().await;
    assert!(service
        .create_expense(USER, new_expense("2024-05-04", "Refund", "Groceries", dec!(-5)))
        .await
        .is_err());
    assert!(service
        .create_expense(USER, new_expense("2024-05-04", "  ", "Groceries", dec!(5)))
        .await
        .is_err());
}

#[tokio::test]
async fn test_update_and_delete_unknown_expense() {
    let (_store, service) = seeded().await;
    let theirs = service
        .get_expenses(OTHER_USER, ExpenseFilter::default())
        .unwrap()
        .remove(0);

    let err = service
        .update_expense(
            USER,
            &theirs.id,
            new_expense("2024-05-02", "Mine now", "Groceries", dec!(1)),
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(service.delete_expense(USER, &theirs.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_update_moves_expense_to_other_category() {
    let (_store, service) = seeded().await;
    let shop = service
        .get_expenses(
            USER,
            ExpenseFilter {
                search: Some("weekly".to_string()),
                ..Default::default()
            },
        )
        .unwrap()
        .remove(0);

    let updated = service
        .update_expense(
            USER,
            &shop.id,
            new_expense("2024-05-01", "Taxi", "Transport", dec!(30)),
        )
        .await
        .unwrap();
    assert_eq!(updated.category, "Transport");
    assert_eq!(updated.id, shop.id);

    assert_eq!(service.delete_expense(USER, &shop.id).await.unwrap(), shop.id);
}

#[tokio::test]
async fn test_spending_by_category_and_recent() {
    let (_store, service) = seeded().await;
    let totals = service
        .get_spending_by_category(USER, date("2024-05-01"), date("2024-05-31"))
        .unwrap();
    assert_eq!(totals.get("Groceries"), Some(&dec!(85.60)));
    assert_eq!(totals.get("Transport"), Some(&dec!(45)));

    let recent = service.get_recent_expenses(USER, 2).unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].date, date("2024-05-03"));
}
