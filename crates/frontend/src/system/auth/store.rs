use contracts::system::auth::{LoginRequest, LogoutRequest};
use leptos::reactive::traits::{Notify, Track};
use leptos::reactive::signal::ArcTrigger;
use std::cell::Cell;
use std::rc::Rc;

use super::api::AuthApi;
use super::storage::TokenStorage;
use crate::shared::rest::ApiResponse;

/// Session of the signed-in client
pub struct AuthStore {
    api: AuthApi,
    tokens: Rc<dyn TokenStorage>,
    authenticated: Cell<bool>,
    changed: ArcTrigger,
}

impl AuthStore {
    /// Restores the session from stored tokens
    pub fn new(api: AuthApi, tokens: Rc<dyn TokenStorage>) -> Self {
        let authenticated = tokens.access_token().is_some();
        Self {
            api,
            tokens,
            authenticated: Cell::new(authenticated),
            changed: ArcTrigger::new(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.changed.track();
        self.authenticated.get()
    }

    pub async fn login(&self, username: String, password: String) -> ApiResponse<()> {
        let request = LoginRequest { username, password };
        let response = self.api.login(&request).await?;

        self.tokens
            .save(&response.access_token, &response.refresh_token);
        self.authenticated.set(true);
        log::info!("Signed in as {}", request.username);
        self.changed.notify();
        Ok(())
    }

    /// Revokes the refresh token server-side, best effort. The local session
    /// is left for [`AuthStore::reset`].
    pub async fn revoke(&self) {
        if let Some(refresh_token) = self.tokens.refresh_token() {
            if let Err(e) = self.api.logout(&LogoutRequest { refresh_token }).await {
                log::warn!("Logout request failed: {}", e);
            }
        }
    }

    pub fn reset(&self) {
        self.tokens.clear();
        self.authenticated.set(false);
        self.changed.notify();
    }
}
