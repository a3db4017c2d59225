//! Gif records and the form data used to create or edit them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend-assigned identifier of a gif record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GifId(String);

impl GifId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GifId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted gif as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gif {
    pub id: GifId,
    pub alt_text: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Input for the create mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGif {
    pub alt_text: String,
    pub url: String,
}

/// Input for the update mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GifUpdate {
    pub id: GifId,
    pub alt_text: String,
    pub url: String,
}

/// The two editable fields shared by the create and edit forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GifForm {
    pub alt_text: String,
    pub url: String,
}

impl GifForm {
    /// Blank both fields.
    pub fn reset(&mut self) {
        self.alt_text.clear();
        self.url.clear();
    }

    pub fn to_new_gif(&self) -> NewGif {
        NewGif {
            alt_text: self.alt_text.clone(),
            url: self.url.clone(),
        }
    }

    pub fn to_update(&self, id: GifId) -> GifUpdate {
        GifUpdate {
            id,
            alt_text: self.alt_text.clone(),
            url: self.url.clone(),
        }
    }
}

impl From<&Gif> for GifForm {
    fn from(gif: &Gif) -> Self {
        Self {
            alt_text: gif.alt_text.clone(),
            url: gif.url.clone(),
        }
    }
}
