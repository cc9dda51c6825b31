use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const REFRESH_TOKEN_KEY: &str = "auth_refresh_token";

/// Where the session tokens live between page loads
pub trait TokenStorage {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    fn save(&self, access_token: &str, refresh_token: &str);
    fn clear(&self);
}

/// Browser localStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokens;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl TokenStorage for LocalStorageTokens {
    fn access_token(&self) -> Option<String> {
        get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
    }

    fn refresh_token(&self) -> Option<String> {
        get_local_storage()?.get_item(REFRESH_TOKEN_KEY).ok()?
    }

    fn save(&self, access_token: &str, refresh_token: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, access_token);
            let _ = storage.set_item(REFRESH_TOKEN_KEY, refresh_token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
}

/// In-memory tokens for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryTokens {
    access: std::cell::RefCell<Option<String>>,
    refresh: std::cell::RefCell<Option<String>>,
}

#[cfg(test)]
impl TokenStorage for MemoryTokens {
    fn access_token(&self) -> Option<String> {
        self.access.borrow().clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.refresh.borrow().clone()
    }

    fn save(&self, access_token: &str, refresh_token: &str) {
        *self.access.borrow_mut() = Some(access_token.to_string());
        *self.refresh.borrow_mut() = Some(refresh_token.to_string());
    }

    fn clear(&self) {
        self.access.borrow_mut().take();
        self.refresh.borrow_mut().take();
    }
}
