use std::sync::Arc;

use chrono::Utc;
use log::debug;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use thiserror::Error;

use crate::{
    config::SpotifyConfig,
    info,
    management::{Store, StoreError},
    spotify::{self, ApiError, SpotifyClient},
    success,
    types::TokenRecord,
    warning,
};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authorization code exchange failed: {detail}")]
    ExchangeFailed { detail: String },
    #[error("token refresh failed: {detail}")]
    RefreshFailed { detail: String },
    #[error("no refresh token stored, authorize again")]
    MissingRefreshToken,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("cannot save token: {0}")]
    Store(#[from] StoreError),
}

pub struct TokenManager {
    config: SpotifyConfig,
    client: SpotifyClient,
    store: Arc<dyn Store<TokenRecord>>,
}

impl TokenManager {
    pub fn new(
        config: SpotifyConfig,
        client: SpotifyClient,
        store: Arc<dyn Store<TokenRecord>>,
    ) -> Self {
        TokenManager {
            config,
            client,
            store,
        }
    }

    pub fn authorization_url(&self) -> Url {
        spotify::auth::build_authorization_url(
            &self.config.auth_url,
            &self.config.client_id,
            &self.config.redirect_uri,
            &self.config.scope,
        )
    }

    pub async fn load(&self) -> Result<Option<TokenRecord>, StoreError> {
        self.store.load().await
    }

    /// Exchanges an authorization code and persists the resulting record.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenRecord, AuthError> {
        let body = spotify::auth::exchange_code(self.client.transport(), &self.config, code).await?;
        let mut record = token_from_response(&body).ok_or_else(|| AuthError::ExchangeFailed {
            detail: body.to_string(),
        })?;
        record.obtained_at = Some(Utc::now().timestamp());

        self.store.save(&record).await?;
        Ok(record)
    }

    /// Returns `current` with the refreshed access token. The refresh token is
    /// replaced only when the response carries a new one. Does not persist.
    pub async fn refresh(&self, current: &TokenRecord) -> Result<TokenRecord, AuthError> {
        let refresh_token = current
            .refresh_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingRefreshToken)?;

        let body =
            spotify::auth::refresh_token(self.client.transport(), &self.config, refresh_token)
                .await?;

        let access_token = non_empty_str(&body, "access_token").ok_or_else(|| {
            AuthError::RefreshFailed {
                detail: body.to_string(),
            }
        })?;

        let mut updated = current.clone();
        updated.access_token = access_token.to_string();
        if let Some(new_refresh) = non_empty_str(&body, "refresh_token") {
            updated.refresh_token = Some(new_refresh.to_string());
        }
        updated.obtained_at = Some(Utc::now().timestamp());
        Ok(updated)
    }

    /// Returns an access token that the API accepts, refreshing it once when
    /// the `/me` probe answers 401.
    ///
    /// Only 401 counts as expiry. Any other probe status, and a probe that
    /// fails before a status arrives, keeps the stored token.
    pub async fn get_valid_token(&self) -> Option<String> {
        let record = match self.store.load().await {
            Ok(Some(record)) => record,
            Ok(None) => {
                warning!("No saved token found. Please run the authorization step first (--auth).");
                return None;
            }
            Err(e) => {
                warning!("Cannot read saved token: {}", e);
                return None;
            }
        };

        if record.access_token.is_empty() {
            warning!("Invalid token data. Please run the authorization step again.");
            return None;
        }

        match self.client.current_user_status(&record.access_token).await {
            Ok(StatusCode::UNAUTHORIZED) => {}
            Ok(status) => {
                debug!("Token probe answered {}", status);
                return Some(record.access_token);
            }
            Err(e) => {
                debug!("Token probe failed, keeping stored token: {}", e);
                return Some(record.access_token);
            }
        }

        info!("Access token expired. Refreshing...");
        match self.refresh(&record).await {
            Ok(updated) => {
                if let Err(e) = self.store.save(&updated).await {
                    warning!("Token refreshed but could not be saved: {}", e);
                }
                success!("Token refreshed successfully!");
                Some(updated.access_token)
            }
            Err(e) => {
                warning!("Error refreshing token: {}", e);
                None
            }
        }
    }
}

fn non_empty_str<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

fn token_from_response(body: &Value) -> Option<TokenRecord> {
    non_empty_str(body, "access_token")?;
    serde_json::from_value(body.clone()).ok()
}
