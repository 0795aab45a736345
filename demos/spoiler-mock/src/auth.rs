//! Accounts, issued tokens and the bearer guard of the story routes.

use std::collections::HashSet;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::ApiError;

/// An account allowed to log in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub password: String,
}

impl Account {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct SessionStore {
    accounts: Arc<Vec<Account>>,
    tokens: Arc<RwLock<HashSet<String>>>,
}

impl SessionStore {
    pub(crate) fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Arc::new(accounts),
            tokens: Arc::default(),
        }
    }

    async fn login(&self, username: &str, password: &str) -> Option<String> {
        let known = self
            .accounts
            .iter()
            .any(|it| it.username == username && it.password == password);
        if !known {
            return None;
        }

        let token = Uuid::new_v4().simple().to_string();
        self.tokens.write().await.insert(token.clone());
        Some(token)
    }

    async fn is_valid(&self, token: &str) -> bool {
        self.tokens.read().await.contains(token)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginResponse {
    username: String,
    access_token: String,
}

pub(crate) async fn login(
    State(sessions): State<SessionStore>,
    Json(LoginRequest { username, password }): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Some(access_token) = sessions.login(&username, &password).await else {
        info!(%username, "login refused");
        return Err(ApiError::InvalidCredentials);
    };

    info!(%username, "logged in");
    Ok(Json(LoginResponse {
        username,
        access_token,
    }))
}

pub(crate) async fn require_bearer(
    State(sessions): State<SessionStore>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_owned);

    let authorized = match &token {
        Some(token) => sessions.is_valid(token).await,
        None => false,
    };
    if !authorized {
        debug!(uri = %request.uri(), "missing or unknown bearer token");
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_issue_distinct_tokens() {
        let sessions = SessionStore::new(vec![Account::new("alice", "secret")]);

        let first = sessions.login("alice", "secret").await.expect("known account");
        let second = sessions.login("alice", "secret").await.expect("known account");

        assert_ne!(first, second);
        assert!(sessions.is_valid(&first).await);
        assert!(sessions.is_valid(&second).await);
    }

    #[tokio::test]
    async fn should_refuse_bad_password() {
        let sessions = SessionStore::new(vec![Account::new("alice", "secret")]);

        let token = sessions.login("alice", "wrong").await;

        assert_eq!(token, None);
        assert!(!sessions.is_valid("wrong").await);
    }
}
