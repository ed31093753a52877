use std::time::Duration;
use thiserror::Error;
use validator::Validate;

use crate::models::{LoginRequest, Profile, ProfileRecord, SignupRequest};

/// Errors that can occur during mock authentication
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    AuthenticationFailed,

    #[error("User with this email already exists: {0}")]
    DuplicateAccount(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Credential check against the static dataset plus accounts created this session.
///
/// Each call waits for a fixed delay to mimic a round trip.
#[derive(Debug, Clone)]
pub struct Authenticator {
    accounts: Vec<ProfileRecord>,
    delay: Duration,
}

impl Authenticator {
    pub fn new(accounts: Vec<ProfileRecord>, delay: Duration) -> Self {
        Self { accounts, delay }
    }

    /// Find the account matching both email and password
    pub async fn login(&self, req: &LoginRequest) -> Result<ProfileRecord, AuthError> {
        self.simulate_latency().await;

        if req.validate().is_err() {
            return Err(AuthError::AuthenticationFailed);
        }

        let record = self
            .find_by_email(&req.email)
            .filter(|r| r.password.as_deref() == Some(req.password.as_str()))
            .cloned();

        match record {
            Some(record) => {
                tracing::info!("Login succeeded for {}", record.profile.id);
                Ok(record)
            }
            None => {
                tracing::info!("Login failed for {}", req.email);
                Err(AuthError::AuthenticationFailed)
            }
        }
    }

    /// Register a new account. Nothing is stored unless every check passes.
    pub async fn signup(&mut self, req: &SignupRequest, city: &str) -> Result<Profile, AuthError> {
        self.simulate_latency().await;

        req.validate()?;

        if self.find_by_email(&req.email).is_some() {
            tracing::info!("Signup rejected, {} already registered", req.email);
            return Err(AuthError::DuplicateAccount(req.email.clone()));
        }

        let mut profile = Profile::new(
            uuid::Uuid::new_v4().to_string(),
            req.name.clone(),
            req.email.clone(),
            req.role,
        );
        profile.city = Some(city.to_string());

        self.accounts.push(ProfileRecord {
            profile: profile.clone(),
            password: Some(req.password.clone()),
        });

        tracing::info!("Signed up {} as {}", profile.id, profile.role);
        Ok(profile)
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    fn find_by_email(&self, email: &str) -> Option<&ProfileRecord> {
        let email = email.trim();
        self.accounts
            .iter()
            .find(|r| r.profile.email.eq_ignore_ascii_case(email))
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
