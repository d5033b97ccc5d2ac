mod common;

use axum::http::StatusCode;
use common::{delete, get, number, post, put, test_app, today, USER};
use serde_json::json;

#[tokio::test]
async fn overview_combines_budgets_spending_and_income() {
    let (app, _tmp) = test_app().await;

    let (status, budget) = post(
        &app,
        "/api/v1/budgets",
        json!({ "userId": USER, "name": "Groceries", "budgeted": 500 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", budget);
    assert_eq!(budget["name"], "Groceries");

    // the budget created the category, so expenses can use it
    for (date, amount) in [("2025-04-03", 120.5), ("2025-04-20", 80.0), ("2025-05-02", 999.0)] {
        let (status, body) = post(
            &app,
            "/api/v1/expenses",
            json!({
                "userId": USER,
                "date": date,
                "description": "Grocery Store",
                "category": "Groceries",
                "amount": amount,
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{}", body);
    }

    let (status, income) = put(
        &app,
        "/api/v1/budgets/income",
        json!({ "userId": USER, "totalIncome": 3000 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", income);
    assert_eq!(number(&income["totalIncome"]), 3000.0);

    let (status, overview) = get(
        &app,
        &format!("/api/v1/budgets?userId={}&month=2025-04", USER),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", overview);
    assert_eq!(overview["month"], "2025-04");
    assert_eq!(number(&overview["totalIncome"]), 3000.0);
    assert_eq!(number(&overview["totalBudgeted"]), 500.0);
    assert_eq!(number(&overview["totalSpent"]), 200.5);
    assert_eq!(number(&overview["remainingToBudget"]), 2500.0);
    let line = &overview["categories"][0];
    assert_eq!(line["percentUsed"], 40);
    assert_eq!(line["isOverBudget"], false);

    let (_, may) = get(
        &app,
        &format!("/api/v1/budgets?userId={}&month=2025-05", USER),
    )
    .await;
    assert_eq!(may["categories"][0]["isOverBudget"], true);

    let (status, _) = get(
        &app,
        &format!("/api/v1/budgets?userId={}&month=April", USER),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn budget_lines_are_unique_per_category() {
    let (app, _tmp) = test_app().await;
    let body = json!({ "userId": USER, "name": "Travel", "budgeted": 200 });

    let (status, budget) = post(&app, "/api/v1/budgets", body.clone()).await;
    assert_eq!(status, StatusCode::OK);
    let (status, err) = post(&app, "/api/v1/budgets", body).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(err["code"], 409);

    let id = budget["id"].as_str().unwrap();
    let (status, renamed) = put(
        &app,
        &format!("/api/v1/budgets/{}", id),
        json!({ "userId": USER, "name": "Holidays", "budgeted": 250 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", renamed);
    assert_eq!(renamed["name"], "Holidays");
    assert_eq!(number(&renamed["budgeted"]), 250.0);

    let (status, _) = delete(&app, &format!("/api/v1/budgets/{}?userId={}", id, USER)).await;
    assert_eq!(status, StatusCode::OK);

    // the categories outlive the budget line
    let (_, names) = get(&app, &format!("/api/v1/categories?userId={}", USER)).await;
    assert_eq!(names, json!(["All Categories", "Holidays", "Travel"]));
}

#[tokio::test]
async fn dashboard_collects_every_section() {
    let (app, _tmp) = test_app().await;
    post(
        &app,
        "/api/v1/categories",
        json!({ "userId": USER, "name": "Dining Out" }),
    )
    .await;
    for day in 1..=6 {
        post(
            &app,
            "/api/v1/expenses",
            json!({
                "userId": USER,
                "date": format!("2025-03-{:02}", day),
                "description": format!("Meal {}", day),
                "category": "Dining Out",
                "amount": 10,
            }),
        )
        .await;
    }
    post(
        &app,
        "/api/v1/goals",
        json!({ "userId": USER, "name": "Car", "targetAmount": 200, "currentAmount": 50 }),
    )
    .await;
    post(
        &app,
        "/api/v1/investments",
        json!({
            "userId": USER,
            "name": "Index Fund",
            "ticker": "IDX",
            "quantity": 2,
            "purchasePrice": 50,
            "currentPrice": 60,
            "purchaseDate": "2024-06-01",
        }),
    )
    .await;

    let (status, dashboard) = get(&app, &format!("/api/v1/dashboard?userId={}", USER)).await;
    assert_eq!(status, StatusCode::OK, "{}", dashboard);

    let recent = dashboard["recentExpenses"].as_array().unwrap();
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0]["description"], "Meal 6");

    assert_eq!(dashboard["budget"]["month"], &today()[..7]);
    assert_eq!(number(&dashboard["investments"]["totalValue"]), 120.0);
    assert_eq!(number(&dashboard["investments"]["totalGainLoss"]), 20.0);
    assert_eq!(dashboard["goals"][0]["progressPercent"], 25);
}

#[tokio::test]
async fn updating_an_unknown_budget_creates_no_category() {
    let (app, _tmp) = test_app().await;

    let (status, body) = put(
        &app,
        "/api/v1/budgets/missing",
        json!({ "userId": USER, "name": "Ghost", "budgeted": 10 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Budget not found");

    let (_, names) = get(&app, &format!("/api/v1/categories?userId={}", USER)).await;
    assert_eq!(names, json!(["All Categories"]));
}
