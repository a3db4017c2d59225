//! GraphQL documents and the request/response envelopes for the gif API.
//!
//! The documents match what the managed backend generates for a `Gif`
//! model with `altText` and `url` fields:
//!
//! ```text
//! mutation CreateGif($input: CreateGifInput!) { createGif(input: $input) { ... } }
//! query ListGifs($limit: Int, $nextToken: String) { listGifs(...) { items { ... } nextToken } }
//! mutation UpdateGif($input: UpdateGifInput!) { updateGif(input: $input) { ... } }
//! mutation DeleteGif($input: DeleteGifInput!) { deleteGif(input: $input) { ... } }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GalleryError, Result};
use crate::record::Gif;

pub const CREATE_GIF: &str = r#"mutation CreateGif($input: CreateGifInput!, $condition: ModelGifConditionInput) {
  createGif(input: $input, condition: $condition) {
    id
    altText
    url
    createdAt
    updatedAt
  }
}"#;

pub const LIST_GIFS: &str = r#"query ListGifs($filter: ModelGifFilterInput, $limit: Int, $nextToken: String) {
  listGifs(filter: $filter, limit: $limit, nextToken: $nextToken) {
    items {
      id
      altText
      url
      createdAt
      updatedAt
    }
    nextToken
  }
}"#;

pub const UPDATE_GIF: &str = r#"mutation UpdateGif($input: UpdateGifInput!, $condition: ModelGifConditionInput) {
  updateGif(input: $input, condition: $condition) {
    id
    altText
    url
    createdAt
    updatedAt
  }
}"#;

pub const DELETE_GIF: &str = r#"mutation DeleteGif($input: DeleteGifInput!, $condition: ModelGifConditionInput) {
  deleteGif(input: $input, condition: $condition) {
    id
    altText
    url
    createdAt
    updatedAt
  }
}"#;

/// A single GraphQL operation as POSTed to the endpoint.
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
    pub variables: Value,
}

impl<'a> GraphqlRequest<'a> {
    pub fn new(query: &'a str, variables: Value) -> Self {
        Self { query, variables }
    }
}

/// One entry of the `errors` array.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlError {
    pub message: String,
    #[serde(default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub path: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

/// One page of `listGifs`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GifPage {
    pub items: Vec<Gif>,
    #[serde(default)]
    pub next_token: Option<String>,
}

/// Extract the payload of `field` from a raw response body.
///
/// Any entry in `errors` fails the call, even if `data` is partly filled.
pub fn parse_field<T: DeserializeOwned>(body: &str, field: &'static str) -> Result<T> {
    let response: GraphqlResponse = serde_json::from_str(body)?;
    if !response.errors.is_empty() {
        return Err(GalleryError::Graphql(response.errors));
    }

    let value = response
        .data
        .and_then(|mut data| data.get_mut(field).map(Value::take))
        .filter(|v| !v.is_null())
        .ok_or(GalleryError::MissingData(field))?;

    Ok(serde_json::from_value(value)?)
}
