use base64::{Engine, engine::general_purpose::STANDARD};
use log::debug;
use reqwest::Url;
use serde_json::Value;

use crate::{
    config::SpotifyConfig,
    spotify::{ApiError, Transport},
};

/// Builds the URL the user opens to authorize the application.
///
/// Appends the authorization-code parameters to `auth_url` in a fixed order so
/// the same inputs always produce the same URL:
///
/// - `client_id` - The application's client id
/// - `response_type=code` - Authorization code flow
/// - `redirect_uri` - Where Spotify sends the user (and the code) afterwards
/// - `scope` - Space separated permissions, form-encoded as `+`
/// - `show_dialog=true` - Always show the consent dialog, even when already granted
///
/// Values are form-encoded. Any query already present on `auth_url` is kept in
/// front of the added parameters.
///
/// # Example
///
/// ```
/// let base = Url::parse("https://accounts.spotify.com/authorize")?;
/// let url = build_authorization_url(&base, "abc", "http://127.0.0.1:8888/callback", "user-read-private");
/// // https://accounts.spotify.com/authorize?client_id=abc&response_type=code&redirect_uri=http%3A%2F%2F127.0.0.1%3A8888%2Fcallback&scope=user-read-private&show_dialog=true
/// ```
pub fn build_authorization_url(
    auth_url: &Url,
    client_id: &str,
    redirect_uri: &str,
    scope: &str,
) -> Url {
    let mut url = auth_url.clone();
    url.query_pairs_mut()
        .append_pair("client_id", client_id)
        .append_pair("response_type", "code")
        .append_pair("redirect_uri", redirect_uri)
        .append_pair("scope", scope)
        .append_pair("show_dialog", "true");
    url
}

/// Returns the `Authorization` header value for the token endpoint:
/// `Basic base64(client_id:client_secret)`.
pub fn basic_credentials(client_id: &str, client_secret: &str) -> String {
    let encoded = STANDARD.encode(format!("{client_id}:{client_secret}"));
    format!("Basic {encoded}")
}

/// Posts a grant to the token endpoint and returns the decoded response body.
///
/// The HTTP status is not inspected. Spotify reports failed grants
/// with a JSON body such as `{"error": "invalid_grant", ...}`, and callers
/// decide success by the presence of `access_token` in the body.
///
/// # Arguments
///
/// * `transport` - HTTP seam used for the request
/// * `config` - Supplies the token URL and the client credentials
/// * `form` - Grant parameters, e.g. `grant_type=refresh_token` and the token
///
/// # Errors
///
/// Only transport failures and malformed success bodies are errors here.
pub async fn request_token(
    transport: &dyn Transport,
    config: &SpotifyConfig,
    form: &[(&str, &str)],
) -> Result<Value, ApiError> {
    let authorization = basic_credentials(&config.client_id, &config.client_secret);
    let response = transport
        .post_form(&config.token_url, &authorization, form)
        .await?;
    debug!("POST {} -> {}", config.token_url, response.status);
    Ok(response.body)
}

/// Requests a token for an authorization code.
///
/// Form: `grant_type=authorization_code`, `code`, `redirect_uri`.
pub async fn exchange_code(
    transport: &dyn Transport,
    config: &SpotifyConfig,
    code: &str,
) -> Result<Value, ApiError> {
    request_token(
        transport,
        config,
        &[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
        ],
    )
    .await
}

/// Requests a fresh access token for a refresh token.
///
/// Form: `grant_type=refresh_token`, `refresh_token`. Spotify may or may not
/// rotate the refresh token in the response.
pub async fn refresh_token(
    transport: &dyn Transport,
    config: &SpotifyConfig,
    refresh_token: &str,
) -> Result<Value, ApiError> {
    request_token(
        transport,
        config,
        &[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ],
    )
    .await
}
