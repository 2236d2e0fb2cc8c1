//! The second leg of the OAuth flow: trading the callback code for a token.

use serde::{Deserialize, Serialize};

use crate::clients::{Client, ClientError, HttpMethod, HttpRequest};
use crate::config::{ShopDomain, ShopifyConfig};

#[derive(Serialize)]
struct AccessTokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
}

#[derive(Deserialize)]
struct AccessTokenResponse {
    access_token: String,
}

/// Exchanges an authorization `code` for a permanent access token.
///
/// Posts `client_id`, `client_secret` and `code` to
/// `admin/oauth/access_token` through a client without a token.
///
/// # Errors
///
/// Returns [`ClientError`] if the client cannot be built, the request
/// fails, or the response lacks `access_token`.
pub async fn get_access_token(
    config: &ShopifyConfig,
    shop: &ShopDomain,
    code: &str,
) -> Result<String, ClientError> {
    let client = Client::new(config, shop, None)?;
    request_access_token(&client, config, code).await
}

/// As [`get_access_token`], sending through an existing client.
///
/// # Errors
///
/// Returns [`ClientError`] if the request fails or the response lacks
/// `access_token`.
pub async fn request_access_token(
    client: &Client,
    config: &ShopifyConfig,
    code: &str,
) -> Result<String, ClientError> {
    let body = AccessTokenRequest {
        client_id: config.api_key().as_ref(),
        client_secret: config.api_secret_key().as_ref(),
        code,
    };
    let builder =
        HttpRequest::builder(HttpMethod::Post, "admin/oauth/access_token").json_body(&body);
    let response: AccessTokenResponse = client.send(builder).await?.json()?;
    Ok(response.access_token)
}
