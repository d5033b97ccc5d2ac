use std::sync::Arc;

use super::*;
use crate::categories::CategoryServiceTrait;
use crate::constants::DEFAULT_CATEGORIES;
use crate::errors::Error;
use crate::settings::{SettingsServiceTrait, SettingsUpdate};
use crate::test_support::{category_service, demo_account, settings_service, InMemoryStore};

fn service(store: &Arc<InMemoryStore>) -> AuthService {
    AuthService::new(demo_account(), settings_service(store), category_service(store))
}

fn login(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn signup(email: &str, password: &str, confirm: &str) -> SignupRequest {
    SignupRequest {
        full_name: "Sam Lee".to_string(),
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: confirm.to_string(),
    }
}

#[test]
fn test_login_with_demo_credentials() {
    let store = InMemoryStore::new();
    let user = service(&store)
        .login(login(" Test@Example.com ", "password"))
        .unwrap();
    assert_eq!(user.user_id, "demo-user");
    assert_eq!(user.email, "test@example.com");
    assert_eq!(user.full_name, "Alex Jordan");
}

#[tokio::test]
async fn test_login_prefers_stored_profile_name() {
    let store = InMemoryStore::new();
    settings_service(&store)
        .update_settings(
            "demo-user",
            SettingsUpdate {
                full_name: Some("Alexandra Jordan".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let user = service(&store).login(login("test@example.com", "password")).unwrap();
    assert_eq!(user.full_name, "Alexandra Jordan");
}

#[test]
fn test_login_errors() {
    let store = InMemoryStore::new();
    let service = service(&store);

    let missing = service.login(login("", "password")).unwrap_err();
    assert!(matches!(missing, Error::Validation(_)));

    let wrong = service.login(login("test@example.com", "hunter2")).unwrap_err();
    assert!(matches!(wrong, Error::Unauthorized(_)));
    assert_eq!(wrong.to_string(), "Invalid email or password");
}

#[tokio::test]
async fn test_signup_seeds_profile_and_categories() {
    let store = InMemoryStore::new();
    let user = service(&store)
        .signup(signup("sam@example.com", "secret1", "secret1"))
        .await
        .unwrap();
    assert_eq!(user.full_name, "Sam Lee");
    assert!(!user.user_id.is_empty());

    let settings = settings_service(&store).get_settings(&user.user_id).unwrap();
    assert_eq!(settings.email, "sam@example.com");
    assert_eq!(
        category_service(&store)
            .get_categories(&user.user_id)
            .unwrap()
            .len(),
        DEFAULT_CATEGORIES.len()
    );
}

#[tokio::test]
async fn test_signup_validation() {
    let store = InMemoryStore::new();
    let service = service(&store);

    let cases = [
        signup("sam@example.com", "secret1", "secret2"),
        signup("sam@example.com", "abc", "abc"),
        signup("not-an-email", "secret1", "secret1"),
        signup("", "secret1", "secret1"),
    ];
    for request in cases {
        let err = service.signup(request).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)), "{:?}", err);
    }

    let taken = service
        .signup(signup("test@example.com", "secret1", "secret1"))
        .await
        .unwrap_err();
    assert!(matches!(taken, Error::ConstraintViolation(_)));
}

#[test]
fn test_change_password_rules() {
    let store = InMemoryStore::new();
    let service = service(&store);
    let request = |current: &str, new: &str, confirm: &str| ChangePasswordRequest {
        current_password: current.to_string(),
        new_password: new.to_string(),
        confirm_password: confirm.to_string(),
    };

    assert!(service
        .change_password("demo-user", request("password", "longenough", "longenough"))
        .is_ok());
    assert!(matches!(
        service
            .change_password("demo-user", request("password", "short", "short"))
            .unwrap_err(),
        Error::Validation(_)
    ));
    assert!(matches!(
        service
            .change_password("demo-user", request("password", "longenough", "different"))
            .unwrap_err(),
        Error::Validation(_)
    ));
    assert!(matches!(
        service
            .change_password("demo-user", request("wrong", "longenough", "longenough"))
            .unwrap_err(),
        Error::Unauthorized(_)
    ));
}
