use base64::{Engine, engine::general_purpose::STANDARD};
use log::{debug, error};
use reqwest::{Client, header};
use serde_json::Value;

use crate::{
    config::{Config, DEFAULT_TOKEN_URL},
    error::{Error, Result},
    types::BearerToken,
};

const TOKEN_ERROR: &str = "Failed to get access token";

/// Exchanges client credentials for a bearer token at the public Spotify
/// accounts service.
///
/// Shorthand for [`request_access_token`] with the default token endpoint.
///
/// # Example
///
/// ```
/// let token = get_access_token("client-id", "client-secret").await?;
/// let api = SpotifyApi::new(token);
/// ```
pub async fn get_access_token(client_id: &str, client_secret: &str) -> Result<BearerToken> {
    exchange_client_credentials(DEFAULT_TOKEN_URL, client_id, client_secret).await
}

/// Exchanges the configured client credentials for a bearer token.
///
/// Performs a single OAuth 2.0 client-credentials POST to `config.token_url`
/// with `grant_type=client_credentials` as a form body and the credentials in
/// a `Basic` authorization header.
///
/// # Errors
///
/// - [`Error::Configuration`] if either credential is empty; no request is made.
/// - [`Error::Api`] ("Failed to get access token") on a transport failure, a
///   non-2xx status, or a response without a string `access_token`.
///
/// The request is never retried.
pub async fn request_access_token(config: &Config) -> Result<BearerToken> {
    exchange_client_credentials(&config.token_url, &config.client_id, &config.client_secret).await
}

async fn exchange_client_credentials(
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<BearerToken> {
    if client_id.is_empty() || client_secret.is_empty() {
        return Err(Error::Configuration(
            "client id and client secret must not be empty".to_string(),
        ));
    }

    let credentials = STANDARD.encode(format!("{}:{}", client_id, client_secret));

    debug!("requesting client-credentials token from {}", token_url);
    let client = Client::new();
    let response = client
        .post(token_url)
        .header(header::AUTHORIZATION, format!("Basic {}", credentials))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .and_then(|res| res.error_for_status())
        .map_err(|e| {
            error!("token request failed: {}", e);
            Error::api_from(TOKEN_ERROR, e)
        })?;

    let json: Value = response
        .json()
        .await
        .map_err(|e| Error::api_from(TOKEN_ERROR, e))?;

    match json["access_token"].as_str() {
        Some(token) if !token.is_empty() => Ok(BearerToken::new(token)),
        _ => {
            error!("token response carries no access_token");
            Err(Error::api(TOKEN_ERROR))
        }
    }
}
