pub mod app;
pub mod app_shell;
pub mod domain;
pub mod layout;
pub mod root_store;
pub mod routes;
pub mod shared;
pub mod system;
pub mod usecases;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::app::App;
use crate::shared::config::{load_config, CONFIG_STORAGE_KEY};

#[wasm_bindgen]
pub fn hydrate() {
    let loaded = load_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    _ = console_log::init_with_level(config.max_log_level());
    console_error_panic_hook::set_once();
    match &loaded {
        Ok(_) => log::info!("Wallet starting, API at {}", config.rest_base_url()),
        Err(e) => log::warn!("Ignoring invalid {}: {}", CONFIG_STORAGE_KEY, e),
    }

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
