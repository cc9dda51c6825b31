use contracts::domain::a004_withdraw::{
    ValidationResult, WithdrawCryptoInfo, WithdrawCryptoRequest, WithdrawFee, WithdrawOperation,
};

use crate::shared::rest::{ApiResponse, RestApi};

fn crypto_path(asset_id: &str, suffix: &str) -> String {
    format!(
        "/withdrawals/crypto/{}{}",
        urlencoding::encode(asset_id),
        suffix
    )
}

#[derive(Clone)]
pub struct WithdrawApi {
    rest: RestApi,
}

impl WithdrawApi {
    pub fn new(rest: RestApi) -> Self {
        Self { rest }
    }

    pub async fn fetch_fee(&self, asset_id: &str) -> ApiResponse<WithdrawFee> {
        self.rest.get(&crypto_path(asset_id, "/fee")).await
    }

    pub async fn fetch_withdraw_crypto_info(
        &self,
        asset_id: &str,
    ) -> ApiResponse<WithdrawCryptoInfo> {
        self.rest.get(&crypto_path(asset_id, "/info")).await
    }

    pub async fn validate_withdraw_crypto(
        &self,
        asset_id: &str,
        request: &WithdrawCryptoRequest,
    ) -> ApiResponse<ValidationResult> {
        self.rest
            .post(&crypto_path(asset_id, "/validate"), request)
            .await
    }

    pub async fn send_withdraw_crypto(
        &self,
        asset_id: &str,
        request: &WithdrawCryptoRequest,
    ) -> ApiResponse<WithdrawOperation> {
        self.rest.post(&crypto_path(asset_id, ""), request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crypto_path_encodes_asset_id() {
        assert_eq!(crypto_path("BTC", "/fee"), "/withdrawals/crypto/BTC/fee");
        assert_eq!(crypto_path("a b/c", ""), "/withdrawals/crypto/a%20b%2Fc");
    }
}
