//! Mock session: a single signed-in user persisted under one key.
//!
//! Credentials are not checked against anything. A few sentinel values
//! exercise the failure paths a real identity provider would have.

pub mod handlers;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::db::{KvStore, StoreError};
use crate::errors::AppError;
use crate::models::user::User;

const REJECTED_EMAIL: &str = "invalid@example.com";
const REJECTED_PASSWORD: &str = "wrongpassword";
const TAKEN_EMAIL: &str = "existing@example.com";
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone)]
pub struct SessionStore {
    kv: Arc<dyn KvStore>,
    key: String,
    latency: Duration,
}

impl SessionStore {
    pub fn new(kv: Arc<dyn KvStore>, key: impl Into<String>, latency: Duration) -> Self {
        Self {
            kv,
            key: key.into(),
            latency,
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        self.simulate_latency().await;

        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "Email and password are required".to_string(),
            ));
        }
        if email == REJECTED_EMAIL || password == REJECTED_PASSWORD {
            return Err(AppError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        let user = User {
            id: new_user_id(),
            email: email.to_string(),
            name: display_name(email),
            created_at: Utc::now(),
        };
        self.save(&user).await?;
        info!("User {} signed in", user.id);
        Ok(user)
    }

    pub async fn signup(&self, email: &str, password: &str, name: &str) -> Result<User, AppError> {
        self.simulate_latency().await;

        let (email, name) = (email.trim(), name.trim());
        if email.is_empty() || password.is_empty() || name.is_empty() {
            return Err(AppError::Validation("All fields are required".to_string()));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if email == TAKEN_EMAIL {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }

        let user = User {
            id: new_user_id(),
            email: email.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.save(&user).await?;
        info!("User {} signed up", user.id);
        Ok(user)
    }

    pub async fn logout(&self) -> Result<(), StoreError> {
        self.kv.delete(&self.key).await
    }

    /// The signed-in user, if any. Unreadable state counts as signed out.
    pub async fn current(&self) -> Option<User> {
        let raw = match self.kv.get(&self.key).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Session store unavailable: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Discarding unreadable session under '{}': {e}", self.key);
                None
            }
        }
    }

    async fn save(&self, user: &User) -> Result<(), AppError> {
        let json = serde_json::to_string(user).map_err(anyhow::Error::from)?;
        self.kv.set(&self.key, &json).await?;
        Ok(())
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

fn new_user_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Local part of the address, used as the name on login.
fn display_name(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}
