//! Integration tests for the shared transport.
//!
//! Each test points a client at a local mock server through the
//! `api_host` override and checks the request it sends or the error it
//! returns.

use serde_json::{json, Value};
use shopify_rest::{
    ApiKey, ApiSecretKey, AppPassword, Client, ClientError, DecodingErrorKind, HostUrl,
    ShopDomain, ShopifyConfig,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ShopifyConfig {
    ShopifyConfig::builder()
        .api_key(ApiKey::new("apikey").unwrap())
        .api_secret_key(ApiSecretKey::new("hush").unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

fn client_for(server: &MockServer) -> Client {
    Client::new(
        &config_for(server),
        &ShopDomain::new("fooshop").unwrap(),
        Some("abcd"),
    )
    .unwrap()
}

#[tokio::test]
async fn test_request_sends_standard_and_token_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/shop.json"))
        .and(header("X-Shopify-Access-Token", "abcd"))
        .and(header("Accept", "application/json"))
        .and(header("Host", "fooshop.myshopify.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"shop": {"id": 1}})))
        .expect(1)
        .mount(&server)
        .await;

    let shop = client_for(&server).shop().get(&()).await.unwrap();
    assert_eq!(shop.id, Some(1));
}

#[tokio::test]
async fn test_password_sent_as_basic_auth_without_token() {
    let server = MockServer::start().await;
    let config = ShopifyConfig::builder()
        .api_key(ApiKey::new("apikey").unwrap())
        .api_secret_key(ApiSecretKey::new("hush").unwrap())
        .password(AppPassword::new("privateapppassword").unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();

    // base64("apikey:privateapppassword")
    Mock::given(method("GET"))
        .and(path("/admin/shop.json"))
        .and(header(
            "Authorization",
            "Basic YXBpa2V5OnByaXZhdGVhcHBwYXNzd29yZA==",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"shop": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&config, &ShopDomain::new("fooshop").unwrap(), None).unwrap();
    client.shop().get(&()).await.unwrap();
}

#[tokio::test]
async fn test_path_query_merged_with_options() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/widgets.json"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"widgets": []})))
        .expect(1)
        .mount(&server)
        .await;

    let body: Value = client_for(&server)
        .get("admin/widgets.json?page=1", &json!({"limit": 10}))
        .await
        .unwrap();
    assert_eq!(body, json!({"widgets": []}));
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/widgets.json"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"widget": {"name": "sprocket"}})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"widget": {"id": 7, "name": "sprocket"}})),
        )
        .mount(&server)
        .await;

    let created: Value = client_for(&server)
        .post("admin/widgets.json", &json!({"widget": {"name": "sprocket"}}))
        .await
        .unwrap();
    assert_eq!(created["widget"]["id"], 7);
}

#[tokio::test]
async fn test_count_reads_count_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/products/count.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 3})))
        .mount(&server)
        .await;

    assert_eq!(client_for(&server).products().count(&()).await.unwrap(), 3);
}

#[tokio::test]
async fn test_count_without_count_field_is_shape_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/products/count.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 3})))
        .mount(&server)
        .await;

    let err = client_for(&server).products().count(&()).await.unwrap_err();
    match err {
        ClientError::Decoding(e) => assert_eq!(e.kind, DecodingErrorKind::Shape),
        other => panic!("expected decoding error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_flat_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/orders/1.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Not Found"})))
        .mount(&server)
        .await;

    let err = client_for(&server).orders().get(1, &()).await.unwrap_err();
    match err {
        ClientError::Response(e) => {
            assert_eq!(e.status, 404);
            assert_eq!(e.message.as_deref(), Some("Not Found"));
            assert!(e.errors.is_empty());
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_field_errors_become_sub_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/products.json"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"errors": {"title": ["wrong"]}})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .products()
        .create(&Default::default())
        .await
        .unwrap_err();
    match err {
        ClientError::Response(e) => {
            assert_eq!(e.status, 400);
            assert_eq!(e.message.as_deref(), Some("wrong"));
            assert_eq!(e.errors, vec!["title: wrong".to_string()]);
            assert_eq!(e.to_string(), "wrong");
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_list_joined_into_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/shop.json"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"errors": ["not", "very good"]})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).shop().get(&()).await.unwrap_err();
    match err {
        ClientError::Response(e) => {
            assert_eq!(e.status, 500);
            assert_eq!(e.message.as_deref(), Some("not, very good"));
            assert_eq!(e.errors, vec!["not".to_string(), "very good".to_string()]);
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_carries_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/products.json"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "2.0")
                .set_body_json(json!({"errors": "Exceeded 2 calls per second for api client."})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .products()
        .list(&())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(429));
    match err {
        ClientError::RateLimit(e) => {
            assert_eq!(e.retry_after, 2);
            assert_eq!(
                e.response.message.as_deref(),
                Some("Exceeded 2 calls per second for api client.")
            );
        }
        other => panic!("expected rate limit error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_not_acceptable_has_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/products.json"))
        .respond_with(ResponseTemplate::new(406).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .products()
        .list(&())
        .await
        .unwrap_err();
    match err {
        ClientError::Response(e) => {
            assert_eq!(e.status, 406);
            assert_eq!(e.message.as_deref(), Some("Not acceptable"));
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unparsable_success_body_keeps_status_and_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .products()
        .list(&())
        .await
        .unwrap_err();
    match err {
        ClientError::Decoding(e) => {
            assert_eq!(e.kind, DecodingErrorKind::Syntax);
            assert_eq!(e.status, 200);
            assert_eq!(e.body, b"<html>oops</html>".to_vec());
        }
        other => panic!("expected decoding error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_deprecated_call_still_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/shop.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Shopify-API-Deprecated-Reason", "https://shopify.dev/changelog")
                .set_body_json(json!({"shop": {"name": "Apple Computers"}})),
        )
        .mount(&server)
        .await;

    let shop = client_for(&server).shop().get(&()).await.unwrap();
    assert_eq!(shop.name.as_deref(), Some("Apple Computers"));
}

#[tokio::test]
async fn test_concurrent_calls_resolve_independently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/products/count.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 12})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/orders/count.json"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"error": "busy"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let products = client.products();
    let orders = client.orders();
    let (product_count, order_count) = tokio::join!(products.count(&()), orders.count(&()));

    assert_eq!(product_count.unwrap(), 12);
    assert_eq!(order_count.unwrap_err().status(), Some(503));
}

#[tokio::test]
async fn test_connection_failure_is_a_transport_error() {
    let config = ShopifyConfig::builder()
        .api_key(ApiKey::new("apikey").unwrap())
        .api_secret_key(ApiSecretKey::new("hush").unwrap())
        .api_host(HostUrl::new("http://127.0.0.1:1").unwrap())
        .build()
        .unwrap();
    let client = Client::new(&config, &ShopDomain::new("fooshop").unwrap(), Some("abcd")).unwrap();

    let err = client.shop().get(&()).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)), "got {err:?}");
    assert_eq!(err.status(), None);
}
