//! Web UI for gif-gallery
//!
//! A Yew-based page for adding, browsing, editing and deleting gifs held by
//! the GraphQL backend.

mod app;
mod components;
mod logging;

use std::rc::Rc;

use gif_gallery::{BackendConfig, Gallery, HttpGifApi};
use gloo::storage::{LocalStorage, Storage};
use wasm_bindgen::prelude::*;

/// Backend description embedded by `build.rs`.
const AWS_EXPORTS: &str = include_str!(concat!(env!("OUT_DIR"), "/aws-exports.json"));

/// Local storage key holding a signed-in user's token, for token auth modes.
const AUTH_TOKEN_KEY: &str = "gifs.authToken";

fn auth_token() -> Option<String> {
    LocalStorage::raw().get_item(AUTH_TOKEN_KEY).ok().flatten()
}

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();
    logging::init();

    let config = match BackendConfig::from_aws_exports(AWS_EXPORTS, auth_token()) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid backend configuration");
            return;
        }
    };
    tracing::info!(endpoint = %config.endpoint, "starting gif gallery");

    let gallery = Rc::new(Gallery::new(HttpGifApi::new(config)));
    yew::Renderer::<app::App>::with_props(app::AppProps { gallery }).render();
}
