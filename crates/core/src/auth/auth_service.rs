use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;
use uuid::Uuid;

use super::auth_model::{AuthUser, ChangePasswordRequest, DemoAccount, LoginRequest, SignupRequest};
use crate::categories::CategoryServiceTrait;
use crate::errors::{Error, Result};
use crate::settings::{SettingsServiceTrait, SettingsUpdate};
use crate::utils::validation::is_valid_email;

const MIN_SIGNUP_PASSWORD_LEN: usize = 6;
const MIN_NEW_PASSWORD_LEN: usize = 8;

#[async_trait]
pub trait AuthServiceTrait: Send + Sync {
    fn login(&self, request: LoginRequest) -> Result<AuthUser>;
    /// Allocates a user id, stores the profile and seeds default categories.
    async fn signup(&self, request: SignupRequest) -> Result<AuthUser>;
    /// Checks a password change request. Nothing is persisted.
    fn change_password(&self, user_id: &str, request: ChangePasswordRequest) -> Result<()>;
}

pub struct AuthService {
    demo: DemoAccount,
    settings_service: Arc<dyn SettingsServiceTrait>,
    category_service: Arc<dyn CategoryServiceTrait>,
}

impl AuthService {
    pub fn new(
        demo: DemoAccount,
        settings_service: Arc<dyn SettingsServiceTrait>,
        category_service: Arc<dyn CategoryServiceTrait>,
    ) -> Self {
        AuthService {
            demo,
            settings_service,
            category_service,
        }
    }

    fn is_demo_email(&self, email: &str) -> bool {
        email.eq_ignore_ascii_case(&self.demo.email)
    }
}

fn all_present(values: &[&str]) -> bool {
    values.iter().all(|v| !v.trim().is_empty())
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    fn login(&self, request: LoginRequest) -> Result<AuthUser> {
        let email = request.email.trim();
        if !all_present(&[email, &request.password]) {
            return Err(Error::invalid_input("Please enter both email and password"));
        }
        if !self.is_demo_email(email) || request.password != self.demo.password {
            warn!("Rejected login for {}", email);
            return Err(Error::Unauthorized("Invalid email or password".to_string()));
        }

        let stored = self.settings_service.get_settings(&self.demo.user_id)?;
        let full_name = if stored.full_name.is_empty() {
            self.demo.full_name.clone()
        } else {
            stored.full_name
        };
        Ok(AuthUser {
            user_id: self.demo.user_id.clone(),
            email: self.demo.email.clone(),
            full_name,
        })
    }

    async fn signup(&self, request: SignupRequest) -> Result<AuthUser> {
        let full_name = request.full_name.trim().to_string();
        let email = request.email.trim().to_string();
        if !all_present(&[
            &full_name,
            &email,
            &request.password,
            &request.confirm_password,
        ]) {
            return Err(Error::invalid_input("Please fill in all fields"));
        }
        if request.password != request.confirm_password {
            return Err(Error::invalid_input("Passwords do not match"));
        }
        if request.password.chars().count() < MIN_SIGNUP_PASSWORD_LEN {
            return Err(Error::invalid_input(format!(
                "Password must be at least {} characters",
                MIN_SIGNUP_PASSWORD_LEN
            )));
        }
        if !is_valid_email(&email) {
            return Err(Error::invalid_input("Please enter a valid email address"));
        }
        if self.is_demo_email(&email) {
            return Err(Error::ConstraintViolation(
                "Email address is already in use".to_string(),
            ));
        }

        let user_id = Uuid::now_v7().to_string();
        self.settings_service
            .update_settings(
                &user_id,
                SettingsUpdate {
                    full_name: Some(full_name.clone()),
                    email: Some(email.clone()),
                    ..Default::default()
                },
            )
            .await?;
        self.category_service.seed_default_categories(&user_id).await?;
        info!("Signed up user {}", user_id);

        Ok(AuthUser {
            user_id,
            email,
            full_name,
        })
    }

    fn change_password(&self, user_id: &str, request: ChangePasswordRequest) -> Result<()> {
        if !all_present(&[
            &request.current_password,
            &request.new_password,
            &request.confirm_password,
        ]) {
            return Err(Error::invalid_input("Please fill in all password fields"));
        }
        if request.new_password != request.confirm_password {
            return Err(Error::invalid_input("New passwords do not match"));
        }
        if request.new_password.chars().count() < MIN_NEW_PASSWORD_LEN {
            return Err(Error::invalid_input(format!(
                "Password must be at least {} characters",
                MIN_NEW_PASSWORD_LEN
            )));
        }
        if request.current_password != self.demo.password {
            return Err(Error::Unauthorized(
                "Current password is incorrect".to_string(),
            ));
        }
        info!("Password change accepted for user {}", user_id);
        Ok(())
    }
}
