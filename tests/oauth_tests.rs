//! Integration tests for the OAuth token exchange and callback checks.

use serde_json::json;
use shopify_rest::auth::oauth::{authorize_url, get_access_token, verify_authorization_url};
use shopify_rest::{ApiKey, ApiSecretKey, ClientError, HostUrl, ShopDomain, ShopifyConfig};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ShopifyConfig {
    ShopifyConfig::builder()
        .api_key(ApiKey::new("apikey").unwrap())
        .api_secret_key(ApiSecretKey::new("hush").unwrap())
        .redirect_url("https://example.com/callback")
        .scope("read_products")
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_access_token_exchanges_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/oauth/access_token"))
        .and(body_json(json!({
            "client_id": "apikey",
            "client_secret": "hush",
            "code": "0907a61c0c8d55e99db179b68161bc00"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "f85632530bf277ec9ac6f649fc327f17",
            "scope": "read_products"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = get_access_token(
        &config_for(&server),
        &ShopDomain::new("fooshop").unwrap(),
        "0907a61c0c8d55e99db179b68161bc00",
    )
    .await
    .unwrap();
    assert_eq!(token, "f85632530bf277ec9ac6f649fc327f17");
}

#[tokio::test]
async fn test_get_access_token_rejected_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/oauth/access_token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_request",
            "error_description": "The authorization code was not found or was already used"
        })))
        .mount(&server)
        .await;

    let err = get_access_token(
        &config_for(&server),
        &ShopDomain::new("fooshop").unwrap(),
        "used",
    )
    .await
    .unwrap_err();
    match err {
        ClientError::Response(e) => {
            assert_eq!(e.status, 400);
            assert_eq!(e.message.as_deref(), Some("invalid_request"));
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_authorize_url_ignores_api_host() {
    let server = MockServer::start().await;
    let url = authorize_url(
        &config_for(&server),
        &ShopDomain::new("fooshop").unwrap(),
        "thenonce",
    );
    assert_eq!(
        url,
        "https://fooshop.myshopify.com/admin/oauth/authorize?client_id=apikey&redirect_uri=https%3A%2F%2Fexample.com%2Fcallback&scope=read_products&state=thenonce"
    );
}

#[test]
fn test_verify_authorization_url_known_callback() {
    let config = ShopifyConfig::builder()
        .api_key(ApiKey::new("apikey").unwrap())
        .api_secret_key(ApiSecretKey::new("hush").unwrap())
        .build()
        .unwrap();
    let url = "http://example.com/callback?code=0907a61c0c8d55e99db179b68161bc00&hmac=4712bf92ffc2917d15a2f5a273e39f0116667419aa4b6ac0b3baaf26fa3c4d20&shop=some-shop.myshopify.com&signature=11813d1e7bbf4629edcda0628a3f7a20&timestamp=1337178173";
    assert!(verify_authorization_url(&config, url));
}
