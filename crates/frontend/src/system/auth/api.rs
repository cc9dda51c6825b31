use contracts::system::auth::{LoginRequest, LoginResponse, LogoutRequest};

use crate::shared::rest::{ApiResponse, RestApi};

#[derive(Clone)]
pub struct AuthApi {
    rest: RestApi,
}

impl AuthApi {
    pub fn new(rest: RestApi) -> Self {
        Self { rest }
    }

    /// Login with username and password
    pub async fn login(&self, request: &LoginRequest) -> ApiResponse<LoginResponse> {
        self.rest.post("/auth/login", request).await
    }

    /// Logout (revoke refresh token)
    pub async fn logout(&self, request: &LogoutRequest) -> ApiResponse<()> {
        self.rest.post_no_content("/auth/logout", request).await
    }
}
