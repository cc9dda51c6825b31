use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use crate::app_shell::AppShell;
use crate::root_store::RootStore;
use crate::routes::navigator::{BrowserNavigator, Navigator};
use crate::shared::config::AppConfig;

/// Copyable handle to the root store and the navigator.
///
/// Components receive it as a prop instead of reading it from context.
#[derive(Clone, Copy)]
pub struct AppHandle {
    root: StoredValue<Rc<RootStore>, LocalStorage>,
    pub navigator: BrowserNavigator,
}

impl AppHandle {
    pub fn new(root: Rc<RootStore>, navigator: BrowserNavigator) -> Self {
        Self {
            root: StoredValue::new_local(root),
            navigator,
        }
    }

    pub fn root(&self) -> Rc<RootStore> {
        self.root.get_value()
    }

    /// Tracked in reactive closures
    pub fn is_authenticated(&self) -> bool {
        self.root.with_value(|root| root.auth().is_authenticated())
    }

    pub fn navigator(&self) -> Rc<dyn Navigator> {
        Rc::new(self.navigator)
    }

    /// Revokes the session and drops all client data
    pub fn logout(&self) {
        let root = self.root();
        spawn_local(async move {
            root.logout().await;
        });
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let root = Rc::new(RootStore::browser(config));
    let app = AppHandle::new(root, BrowserNavigator::new());

    view! {
        <AppShell app=app />
    }
}
