//! The gif API seam and its HTTP implementation.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::config::{AuthMode, BackendConfig};
use crate::error::{GalleryError, Result};
use crate::graphql::{
    CREATE_GIF, DELETE_GIF, GifPage, GraphqlRequest, LIST_GIFS, UPDATE_GIF, parse_field,
};
use crate::record::{Gif, GifId, GifUpdate, NewGif};

/// The four operations the managed backend exposes for gifs.
///
/// Futures are not required to be `Send` so browser fetches qualify.
#[async_trait(?Send)]
pub trait GifApi {
    async fn create(&self, gif: NewGif) -> Result<Gif>;

    /// Every gif in the collection, following pagination to the end.
    async fn list(&self) -> Result<Vec<Gif>>;

    async fn update(&self, gif: GifUpdate) -> Result<Gif>;

    async fn delete(&self, id: GifId) -> Result<Gif>;
}

/// [`GifApi`] over GraphQL-on-HTTP.
#[derive(Clone, Debug)]
pub struct HttpGifApi {
    http: reqwest::Client,
    config: BackendConfig,
}

impl HttpGifApi {
    pub fn new(config: BackendConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: BackendConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Fetch a single page of `listGifs`.
    pub async fn list_page(&self, next_token: Option<&str>) -> Result<GifPage> {
        let variables = json!({
            "limit": self.config.page_size,
            "nextToken": next_token,
        });
        self.execute(LIST_GIFS, variables, "listGifs").await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
        field: &'static str,
    ) -> Result<T> {
        tracing::debug!(operation = field, %variables, "sending graphql request");

        let request = self
            .http
            .post(&self.config.endpoint)
            .json(&GraphqlRequest::new(query, variables));
        let request = match &self.config.auth {
            AuthMode::ApiKey(key) => request.header("x-api-key", key),
            AuthMode::Bearer(token) => request.header("Authorization", token),
        };

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GalleryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_field(&body, field)
    }
}

#[async_trait(?Send)]
impl GifApi for HttpGifApi {
    async fn create(&self, gif: NewGif) -> Result<Gif> {
        self.execute(CREATE_GIF, json!({ "input": gif }), "createGif")
            .await
    }

    async fn list(&self) -> Result<Vec<Gif>> {
        let mut gifs = Vec::new();
        let mut next_token: Option<String> = None;
        loop {
            let page = self.list_page(next_token.as_deref()).await?;
            gifs.extend(page.items);
            match page.next_token {
                Some(token) if next_token.as_deref() == Some(token.as_str()) => {
                    tracing::warn!(%token, "listGifs repeated its nextToken, stopping");
                    break;
                }
                Some(token) if !token.is_empty() => next_token = Some(token),
                _ => break,
            }
        }
        Ok(gifs)
    }

    async fn update(&self, gif: GifUpdate) -> Result<Gif> {
        self.execute(UPDATE_GIF, json!({ "input": gif }), "updateGif")
            .await
    }

    async fn delete(&self, id: GifId) -> Result<Gif> {
        self.execute(DELETE_GIF, json!({ "input": { "id": id } }), "deleteGif")
            .await
    }
}
