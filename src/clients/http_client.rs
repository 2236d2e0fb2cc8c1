//! The shared transport for the REST admin API.
//!
//! This module provides [`Client`], which resolves request paths against
//! the shop's base URL, attaches the standard and authentication headers,
//! sends requests, and turns responses into typed values or typed errors.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, HOST, RETRY_AFTER,
    USER_AGENT,
};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::clients::errors::{ClientError, ResponseDecodingError};
use crate::clients::http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
use crate::clients::http_response::RawResponse;
use crate::clients::normalize::normalize_error_response;
use crate::config::{ShopDomain, ShopifyConfig};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying a permanent access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

const JSON: &str = "application/json";

/// Client for one shop's REST admin API.
///
/// The client handles:
/// - Base URL derivation from the shop domain, or the configured `api_host`
/// - Standard headers (`Content-Type`, `Accept`, `User-Agent`)
/// - Authentication with an access token or a private app password
/// - Decoding successful bodies and normalizing error bodies
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`; share it between tasks by reference or clone
/// it cheaply.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::{ApiKey, ApiSecretKey, Client, ShopDomain, ShopifyConfig};
///
/// let config = ShopifyConfig::builder()
///     .api_key(ApiKey::new("apikey").unwrap())
///     .api_secret_key(ApiSecretKey::new("hush").unwrap())
///     .build()
///     .unwrap();
/// let shop = ShopDomain::new("my-store").unwrap();
/// let client = Client::new(&config, &shop, Some("access-token"))?;
///
/// let products = client.products().list(&()).await?;
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    shop: ShopDomain,
    base_url: Url,
    default_headers: HeaderMap,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

#[derive(Deserialize)]
struct CountResponse {
    count: u64,
}

impl Client {
    /// Creates a client for `shop`.
    ///
    /// A non-empty `token` is sent as `X-Shopify-Access-Token`. Without
    /// one, a configured app password is sent as HTTP Basic credentials
    /// with the API key as username.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if a credential cannot be sent as a
    /// header, or [`ClientError::Transport`] if the HTTP client cannot be
    /// initialized.
    pub fn new(
        config: &ShopifyConfig,
        shop: &ShopDomain,
        token: Option<&str>,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().use_rustls_tls().build()?;
        Self::with_http_client(config, shop, token, http)
    }

    /// Creates a client that sends requests through `http`.
    ///
    /// Timeouts, proxies and TLS settings are taken from `http`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if a credential cannot be sent as a
    /// header or the base URL cannot be formed.
    pub fn with_http_client(
        config: &ShopifyConfig,
        shop: &ShopDomain,
        token: Option<&str>,
        http: reqwest::Client,
    ) -> Result<Self, ClientError> {
        let base_url = match config.api_host() {
            Some(host) => with_trailing_slash(host.url().clone()),
            None => Url::parse(&shop.base_url()).map_err(|_| ConfigError::InvalidShopDomain {
                domain: shop.to_string(),
            })?,
        };

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
        default_headers.insert(ACCEPT, HeaderValue::from_static(JSON));
        default_headers.insert(
            USER_AGENT,
            header_value("User-Agent", &user_agent(config.user_agent_prefix()), false)?,
        );

        // Requests go to the proxy but must still name the shop
        if config.api_host().is_some() {
            default_headers.insert(HOST, header_value("Host", shop.as_ref(), false)?);
        }

        match (token.filter(|t| !t.is_empty()), config.password()) {
            (Some(token), _) => {
                default_headers.insert(
                    HeaderName::from_static("x-shopify-access-token"),
                    header_value(ACCESS_TOKEN_HEADER, token, true)?,
                );
            }
            (None, Some(password)) => {
                let credentials = STANDARD.encode(format!(
                    "{}:{}",
                    config.api_key().as_ref(),
                    password.as_ref()
                ));
                default_headers.insert(
                    AUTHORIZATION,
                    header_value("Authorization", &format!("Basic {credentials}"), true)?,
                );
            }
            (None, None) => {}
        }

        Ok(Self {
            http,
            shop: shop.clone(),
            base_url,
            default_headers,
        })
    }

    /// Returns the shop this client talks to.
    #[must_use]
    pub const fn shop_domain(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the base URL that relative paths resolve against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Resolves a request builder into a request ready to send.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRequest`] if the path, options or body
    /// were rejected.
    pub fn new_request(&self, builder: HttpRequestBuilder) -> Result<HttpRequest, ClientError> {
        Ok(builder.build(&self.base_url, self.default_headers.clone())?)
    }

    /// Sends a request and returns the successful response with its body.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Transport`] if the request could not be sent
    /// - [`ClientError::Decoding`] if a body could not be read, or an error
    ///   body could not be decoded
    /// - [`ClientError::Response`] or [`ClientError::RateLimit`] for a
    ///   non-2xx status
    pub async fn execute_raw(&self, request: HttpRequest) -> Result<RawResponse, ClientError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;
        let path = url.path().to_string();

        tracing::debug!(%method, %url, "Sending request to Shopify API");

        let mut builder = self.http.request(method.as_reqwest(), url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        let response = builder.send().await?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        tracing::debug!(status, %path, "Received response from Shopify API");

        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => return Err(ResponseDecodingError::body_read(&e, status).into()),
        };
        let raw = RawResponse {
            status,
            headers,
            body,
        };

        if let Some(reason) = raw.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Shopify API at {}, received reason: {}",
                path,
                reason
            );
        }

        if !(200..300).contains(&status) {
            let retry_after = raw.header(RETRY_AFTER.as_str());
            return Err(normalize_error_response(status, retry_after, &raw.body));
        }

        Ok(raw)
    }

    /// Sends a request and decodes the JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Same as [`execute_raw`](Self::execute_raw), plus
    /// [`ClientError::Decoding`] if a 2xx body does not decode into `T`.
    pub async fn execute<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ClientError> {
        self.execute_raw(request).await?.json()
    }

    /// Sends a request and discards the body.
    ///
    /// # Errors
    ///
    /// Same as [`execute_raw`](Self::execute_raw).
    pub async fn execute_and_discard(&self, request: HttpRequest) -> Result<(), ClientError> {
        self.execute_raw(request).await.map(drop)
    }

    /// Builds and sends a request, returning the raw response.
    ///
    /// # Errors
    ///
    /// Same as [`new_request`](Self::new_request) and
    /// [`execute_raw`](Self::execute_raw).
    pub async fn send(&self, builder: HttpRequestBuilder) -> Result<RawResponse, ClientError> {
        let request = self.new_request(builder)?;
        self.execute_raw(request).await
    }

    /// Sends a GET request with query options and decodes the response.
    ///
    /// Pass `&()` when there are no options.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn get<T, O>(&self, path: &str, options: &O) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        O: Serialize + ?Sized,
    {
        let builder = HttpRequest::builder(HttpMethod::Get, path).options(options);
        let request = self.new_request(builder)?;
        self.execute(request).await
    }

    /// Sends a POST request with a JSON body and decodes the response.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = HttpRequest::builder(HttpMethod::Post, path).json_body(body);
        let request = self.new_request(builder)?;
        self.execute(request).await
    }

    /// Sends a PUT request with a JSON body and decodes the response.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = HttpRequest::builder(HttpMethod::Put, path).json_body(body);
        let request = self.new_request(builder)?;
        self.execute(request).await
    }

    /// Sends a DELETE request and discards the response body.
    ///
    /// # Errors
    ///
    /// See [`execute_and_discard`](Self::execute_and_discard).
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let request = self.new_request(HttpRequest::builder(HttpMethod::Delete, path))?;
        self.execute_and_discard(request).await
    }

    /// Fetches a `{"count": N}` response.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute). A body without `count` is a
    /// [`ClientError::Decoding`] error.
    pub async fn count<O>(&self, path: &str, options: &O) -> Result<u64, ClientError>
    where
        O: Serialize + ?Sized,
    {
        let response: CountResponse = self.get(path, options).await?;
        Ok(response.count)
    }
}

fn user_agent(prefix: Option<&str>) -> String {
    let prefix = prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
    format!("{prefix}shopify-rest-client/{SDK_VERSION}")
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn header_value(
    header: &'static str,
    value: &str,
    sensitive: bool,
) -> Result<HeaderValue, ConfigError> {
    let mut value =
        HeaderValue::from_str(value).map_err(|_| ConfigError::InvalidHeaderValue { header })?;
    value.set_sensitive(sensitive);
    Ok(value)
}
