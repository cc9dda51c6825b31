use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::window;

use super::app_route::AppRoute;

/// History operations used by pages and workflows
pub trait Navigator {
    fn push(&self, route: AppRoute);
    /// Replaces the current history entry so back-navigation skips it
    fn replace(&self, route: AppRoute);
    fn back(&self);
}

fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// History API plus a reactive current route
#[derive(Clone, Copy)]
pub struct BrowserNavigator {
    current: RwSignal<AppRoute>,
}

impl BrowserNavigator {
    pub fn new() -> Self {
        let current = RwSignal::new(AppRoute::parse(&current_path()));
        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            current.set(AppRoute::parse(&current_path()));
        });
        Self { current }
    }

    pub fn current(&self) -> AppRoute {
        self.current.get()
    }
}

impl Navigator for BrowserNavigator {
    fn push(&self, route: AppRoute) {
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&route.path()));
        }
        self.current.set(route);
    }

    fn replace(&self, route: AppRoute) {
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&route.path()));
        }
        self.current.set(route);
    }

    fn back(&self) {
        // popstate listener picks up the new location
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    }
}
