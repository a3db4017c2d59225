//! # gif-gallery
//!
//! Create, list, update and delete gif records held by a managed GraphQL
//! backend.
//!
//! ## Overview
//!
//! - **Records**: a gif is an opaque backend id, an alt text and a URL
//! - **Client**: [`GifApi`] is the four backend operations; [`HttpGifApi`]
//!   speaks GraphQL over HTTP, natively or from the browser
//! - **Handlers**: [`Gallery`] runs the page's create/refresh/update/delete
//!   flows and reports view changes as [`GalleryAction`]s
//! - **State**: [`GalleryState`] is what the page shows, including the
//!   currently selected gif
//!
//! ## Example
//!
//! ```
//! use gif_gallery::{GalleryAction, GalleryState, Gif, GifId};
//!
//! let clicked = Gif {
//!     id: GifId::new("a1"),
//!     alt_text: "dancing cat".to_string(),
//!     url: "https://media.example/cat.gif".to_string(),
//!     created_at: None,
//!     updated_at: None,
//! };
//!
//! let state = GalleryState::default().reduce(GalleryAction::Select(clicked));
//!
//! assert_eq!(state.selected, Some(GifId::new("a1")));
//! assert_eq!(state.edit_title, "Update dancing cat");
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod gallery;
pub mod graphql;
pub mod record;
pub mod state;

pub use client::{GifApi, HttpGifApi};
pub use config::{AuthMode, BackendConfig};
pub use error::{ConfigError, GalleryError, Result};
pub use gallery::{Dispatch, Gallery};
pub use graphql::{GifPage, GraphqlError};
pub use record::{Gif, GifForm, GifId, GifUpdate, NewGif};
pub use state::{GalleryAction, GalleryState};
