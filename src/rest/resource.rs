//! The generic CRUD service behind every resource.
//!
//! A resource type implements [`RestResource`] to name its JSON envelope
//! fields and expose its id. [`ResourceService`] then provides `list`,
//! `count`, `get`, `create`, `update` and `delete` against a path prefix.
//! Resource-specific operations are inherent impls on
//! `ResourceService<'_, ThatResource>`.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::{ListOptions, ResourceService};
//! use shopify_rest::rest::resources::Product;
//!
//! let products: ResourceService<'_, Product> = client.products();
//! let page = products
//!     .list(&ListOptions { limit: Some(50), ..Default::default() })
//!     .await?;
//! let total = products.count(&()).await?;
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{Client, ClientError, HttpMethod, HttpRequest, InvalidRequestError};
use crate::rest::{path, Envelope};

/// A resource exposed by the REST admin API.
///
/// # Associated Constants
///
/// - `NAME`: the singular envelope field (`"product"`)
/// - `PLURAL`: the plural envelope field (`"products"`)
pub trait RestResource: Serialize + DeserializeOwned + Send + Sync {
    /// The singular envelope field name.
    const NAME: &'static str;

    /// The plural envelope field name.
    const PLURAL: &'static str;

    /// Returns the resource's id, or `None` if it has not been created yet.
    fn id(&self) -> Option<u64>;
}

/// CRUD operations for `R` under one path prefix.
///
/// Services are cheap to create; get them from the accessors on
/// [`Client`] (`client.products()`, `client.fulfillments(order_id)`, ...).
pub struct ResourceService<'c, R> {
    client: &'c Client,
    prefix: String,
    _resource: PhantomData<fn() -> R>,
}

impl<R> fmt::Debug for ResourceService<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceService")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl<R> Clone for ResourceService<'_, R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client,
            prefix: self.prefix.clone(),
            _resource: PhantomData,
        }
    }
}

impl<'c, R: RestResource> ResourceService<'c, R> {
    /// Creates a service for `R` under `prefix` (e.g. `admin/products`).
    #[must_use]
    pub fn new(client: &'c Client, prefix: impl Into<String>) -> Self {
        Self {
            client,
            prefix: prefix.into(),
            _resource: PhantomData,
        }
    }

    /// Returns the path prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the client this service sends through.
    #[must_use]
    pub const fn client(&self) -> &'c Client {
        self.client
    }

    /// Lists resources. `GET {prefix}.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response lacks
    /// the plural envelope.
    pub async fn list<O: Serialize + ?Sized>(&self, options: &O) -> Result<Vec<R>, ClientError> {
        let builder =
            HttpRequest::builder(HttpMethod::Get, path::collection(&self.prefix)).options(options);
        self.client.send(builder).await?.json_field(R::PLURAL)
    }

    /// Counts resources. `GET {prefix}/count.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response lacks
    /// `count`.
    pub async fn count<O: Serialize + ?Sized>(&self, options: &O) -> Result<u64, ClientError> {
        self.client.count(&path::count(&self.prefix), options).await
    }

    /// Fetches one resource. `GET {prefix}/{id}.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response lacks
    /// the singular envelope.
    pub async fn get<O: Serialize + ?Sized>(&self, id: u64, options: &O) -> Result<R, ClientError> {
        let builder =
            HttpRequest::builder(HttpMethod::Get, path::member(&self.prefix, id)).options(options);
        self.client.send(builder).await?.json_field(R::NAME)
    }

    /// Creates a resource. `POST {prefix}.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response lacks
    /// the singular envelope.
    pub async fn create(&self, resource: &R) -> Result<R, ClientError> {
        let builder = HttpRequest::builder(HttpMethod::Post, path::collection(&self.prefix))
            .json_body(&Envelope::new(R::NAME, resource));
        self.client.send(builder).await?.json_field(R::NAME)
    }

    /// Updates a resource. `PUT {prefix}/{id}.json`, id taken from `resource`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::MissingId`] if `resource` has no id,
    /// otherwise as [`create`](Self::create).
    pub async fn update(&self, resource: &R) -> Result<R, ClientError> {
        let id = require_id(resource, "update")?;
        let builder = HttpRequest::builder(HttpMethod::Put, path::member(&self.prefix, id))
            .json_body(&Envelope::new(R::NAME, resource));
        self.client.send(builder).await?.json_field(R::NAME)
    }

    /// Deletes a resource. `DELETE {prefix}/{id}.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ClientError> {
        self.client.delete(&path::member(&self.prefix, id)).await
    }

    /// Posts `resource` to `{prefix}/{id}/{action}.json` and returns the
    /// updated resource.
    pub(crate) async fn post_action(
        &self,
        resource: &R,
        action: &'static str,
    ) -> Result<R, ClientError> {
        let id = require_id(resource, action)?;
        let builder =
            HttpRequest::builder(HttpMethod::Post, path::action(&self.prefix, id, action))
                .json_body(&Envelope::new(R::NAME, resource));
        self.client.send(builder).await?.json_field(R::NAME)
    }

    /// Sends a bodiless request to `{prefix}/{id}/{action}.json`.
    pub(crate) async fn bare_action<O: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        id: u64,
        action: &str,
        options: &O,
    ) -> Result<R, ClientError> {
        let builder =
            HttpRequest::builder(method, path::action(&self.prefix, id, action)).options(options);
        self.client.send(builder).await?.json_field(R::NAME)
    }

    /// Returns a service for another resource nested under one of these.
    pub(crate) fn nested<N: RestResource>(&self, id: u64, child: &str) -> ResourceService<'c, N> {
        ResourceService::new(self.client, format!("{}/{id}/{child}", self.prefix))
    }
}

fn require_id<R: RestResource>(resource: &R, operation: &'static str) -> Result<u64, ClientError> {
    resource.id().ok_or_else(|| {
        InvalidRequestError::MissingId {
            resource: R::NAME,
            operation,
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, ApiSecretKey, ShopDomain, ShopifyConfig};
    use serde::Deserialize;

    #[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
    struct Widget {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    }

    impl RestResource for Widget {
        const NAME: &'static str = "widget";
        const PLURAL: &'static str = "widgets";

        fn id(&self) -> Option<u64> {
            self.id
        }
    }

    fn client() -> Client {
        let config = ShopifyConfig::builder()
            .api_key(ApiKey::new("apikey").unwrap())
            .api_secret_key(ApiSecretKey::new("hush").unwrap())
            .build()
            .unwrap();
        Client::new(&config, &ShopDomain::new("fooshop").unwrap(), Some("abcd")).unwrap()
    }

    #[test]
    fn test_nested_service_prefix() {
        let client = client();
        let widgets: ResourceService<'_, Widget> = ResourceService::new(&client, "admin/widgets");
        let parts: ResourceService<'_, Widget> = widgets.nested(7, "parts");
        assert_eq!(parts.prefix(), "admin/widgets/7/parts");
    }

    #[tokio::test]
    async fn test_update_without_id_fails_before_sending() {
        let client = client();
        let widgets: ResourceService<'_, Widget> = ResourceService::new(&client, "admin/widgets");
        let result = widgets.update(&Widget::default()).await;

        assert!(matches!(
            result,
            Err(ClientError::InvalidRequest(InvalidRequestError::MissingId {
                resource: "widget",
                operation: "update"
            }))
        ));
    }

    #[test]
    fn test_debug_shows_prefix() {
        let client = client();
        let widgets: ResourceService<'_, Widget> = ResourceService::new(&client, "admin/widgets");
        assert!(format!("{widgets:?}").contains("admin/widgets"));
    }
}
