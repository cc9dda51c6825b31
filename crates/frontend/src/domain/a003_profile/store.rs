use contracts::domain::a003_profile::{PersonalData, TfaStatus};
use leptos::reactive::traits::{Notify, Track};
use leptos::reactive::signal::ArcTrigger;
use std::cell::RefCell;

use super::api::ProfileApi;
use crate::shared::loadable::Loadable;
use crate::shared::rest::ApiResponse;

#[derive(Default)]
struct ProfileState {
    tfa: Loadable<TfaStatus>,
    personal_data: Loadable<PersonalData>,
}

pub struct ProfileStore {
    api: ProfileApi,
    state: RefCell<ProfileState>,
    changed: ArcTrigger,
}

impl ProfileStore {
    pub fn new(api: ProfileApi) -> Self {
        Self {
            api,
            state: RefCell::new(ProfileState::default()),
            changed: ArcTrigger::new(),
        }
    }

    /// False until a fresh status says otherwise
    pub fn is_2fa_enabled(&self) -> bool {
        self.changed.track();
        self.state
            .borrow()
            .tfa
            .ready()
            .map(|status| status.enabled)
            .unwrap_or(false)
    }

    pub fn is_2fa_known(&self) -> bool {
        self.changed.track();
        self.state.borrow().tfa.ready().is_some()
    }

    pub fn personal_data(&self) -> Option<PersonalData> {
        self.changed.track();
        self.state.borrow().personal_data.last_known().cloned()
    }

    pub async fn fetch_tfa_status(&self) -> ApiResponse<()> {
        self.state.borrow_mut().tfa.start();
        let result = self.api.fetch_tfa_status().await;
        let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
        if let Err(e) = &outcome {
            log::warn!("Failed to load 2FA status: {}", e);
        }
        self.state.borrow_mut().tfa.resolve(result);
        self.changed.notify();
        outcome
    }

    pub async fn fetch_personal_data(&self) -> ApiResponse<()> {
        self.state.borrow_mut().personal_data.start();
        let result = self.api.fetch_personal_data().await;
        let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
        self.state.borrow_mut().personal_data.resolve(result);
        self.changed.notify();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::rest::testing::{rest_api, MockTransport};
    use crate::shared::rest::HttpMethod;
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn store(mock: &Rc<MockTransport>) -> ProfileStore {
        ProfileStore::new(ProfileApi::new(rest_api(mock)))
    }

    #[test]
    fn test_tfa_flag_follows_server() {
        let mock = MockTransport::new();
        mock.respond(HttpMethod::Get, "/profile/2fa", 200, json!({"enabled": true}));
        let profile = store(&mock);
        assert!(!profile.is_2fa_enabled());

        block_on(profile.fetch_tfa_status()).unwrap();

        assert!(profile.is_2fa_enabled());
        assert!(profile.is_2fa_known());
    }

    #[test]
    fn test_tfa_closed_when_status_unavailable() {
        let mock = MockTransport::new();
        mock.respond(HttpMethod::Get, "/profile/2fa", 200, json!({"enabled": true}));
        mock.respond_raw(HttpMethod::Get, "/profile/2fa", 500, "");
        let profile = store(&mock);

        block_on(profile.fetch_tfa_status()).unwrap();
        assert!(block_on(profile.fetch_tfa_status()).is_err());

        assert!(!profile.is_2fa_enabled());
    }

    #[test]
    fn test_personal_data() {
        let mock = MockTransport::new();
        mock.respond(
            HttpMethod::Get,
            "/profile/personaldata",
            200,
            json!({"email": "alice@example.com", "fullName": "Alice"}),
        );
        let profile = store(&mock);

        block_on(profile.fetch_personal_data()).unwrap();

        assert_eq!(profile.personal_data().unwrap().email, "alice@example.com");
    }
}
