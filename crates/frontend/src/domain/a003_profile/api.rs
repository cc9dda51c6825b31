use contracts::domain::a003_profile::{PersonalData, TfaStatus};

use crate::shared::rest::{ApiResponse, RestApi};

#[derive(Clone)]
pub struct ProfileApi {
    rest: RestApi,
}

impl ProfileApi {
    pub fn new(rest: RestApi) -> Self {
        Self { rest }
    }

    pub async fn fetch_tfa_status(&self) -> ApiResponse<TfaStatus> {
        self.rest.get("/profile/2fa").await
    }

    pub async fn fetch_personal_data(&self) -> ApiResponse<PersonalData> {
        self.rest.get("/profile/personaldata").await
    }
}
