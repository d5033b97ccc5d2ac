//! Auth module - simulated sign-in against a single configured demo account.

mod auth_model;
mod auth_service;

#[cfg(test)]
mod auth_service_tests;

pub use auth_model::{AuthUser, ChangePasswordRequest, DemoAccount, LoginRequest, SignupRequest};
pub use auth_service::{AuthService, AuthServiceTrait};
