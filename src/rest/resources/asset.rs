//! Theme asset resource, `admin/themes/{theme_id}/assets.json`.
//!
//! Assets are keyed by their path within the theme (`templates/index.liquid`)
//! rather than a numeric id, so they do not go through the generic service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{Client, ClientError, HttpMethod, HttpRequest};
use crate::rest::{path, Envelope};

/// A file belonging to a theme.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Asset {
    /// Base64 content for binary assets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    #[serde(skip_serializing)]
    pub content_type: Option<String>,
    /// Path within the theme, e.g. `assets/bg-body.gif`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing)]
    pub public_url: Option<String>,
    #[serde(skip_serializing)]
    pub size: Option<u64>,
    /// Copy the content of another asset in the same theme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_key: Option<String>,
    /// Fetch the content from this URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<u64>,
    /// Text content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
struct AssetKey<'a> {
    #[serde(rename = "asset[key]")]
    key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    theme_id: Option<u64>,
}

/// Theme asset operations.
#[derive(Debug, Clone, Copy)]
pub struct AssetService<'c> {
    client: &'c Client,
}

impl<'c> AssetService<'c> {
    /// Creates an asset service.
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn assets_path(theme_id: u64) -> String {
        path::collection(&path::nested_prefix("themes", theme_id, "assets"))
    }

    /// Lists a theme's assets. Content fields are not included.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response lacks
    /// the `assets` envelope.
    pub async fn list<O: Serialize + ?Sized>(
        &self,
        theme_id: u64,
        options: &O,
    ) -> Result<Vec<Asset>, ClientError> {
        let builder =
            HttpRequest::builder(HttpMethod::Get, Self::assets_path(theme_id)).options(options);
        self.client.send(builder).await?.json_field("assets")
    }

    /// Fetches one asset with its content.
    /// `GET admin/themes/{theme_id}/assets.json?asset[key]={key}&theme_id={theme_id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response lacks
    /// the `asset` envelope.
    pub async fn get(&self, theme_id: u64, key: &str) -> Result<Asset, ClientError> {
        let options = AssetKey {
            key,
            theme_id: Some(theme_id),
        };
        let builder =
            HttpRequest::builder(HttpMethod::Get, Self::assets_path(theme_id)).options(&options);
        self.client.send(builder).await?.json_field("asset")
    }

    /// Creates or replaces an asset. `PUT admin/themes/{theme_id}/assets.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response lacks
    /// the `asset` envelope.
    pub async fn update(&self, theme_id: u64, asset: &Asset) -> Result<Asset, ClientError> {
        let builder = HttpRequest::builder(HttpMethod::Put, Self::assets_path(theme_id))
            .json_body(&Envelope::new("asset", asset));
        self.client.send(builder).await?.json_field("asset")
    }

    /// Deletes an asset.
    /// `DELETE admin/themes/{theme_id}/assets.json?asset[key]={key}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn delete(&self, theme_id: u64, key: &str) -> Result<(), ClientError> {
        let options = AssetKey {
            key,
            theme_id: None,
        };
        let builder =
            HttpRequest::builder(HttpMethod::Delete, Self::assets_path(theme_id)).options(&options);
        self.client.send(builder).await.map(|_| ())
    }
}
