use contracts::domain::a002_wallet::Wallet;

use crate::shared::rest::{ApiResponse, RestApi};

#[derive(Clone)]
pub struct WalletApi {
    rest: RestApi,
}

impl WalletApi {
    pub fn new(rest: RestApi) -> Self {
        Self { rest }
    }

    pub async fn fetch_wallets(&self) -> ApiResponse<Vec<Wallet>> {
        self.rest.get("/wallets").await
    }
}
