use contracts::domain::a001_asset::{Asset, AssetCategory, AssetDescription, PaymentMethod};

use crate::shared::rest::{ApiResponse, RestApi};

#[derive(Clone)]
pub struct AssetApi {
    rest: RestApi,
}

impl AssetApi {
    pub fn new(rest: RestApi) -> Self {
        Self { rest }
    }

    pub async fn fetch_assets(&self) -> ApiResponse<Vec<Asset>> {
        self.rest.get("/assets").await
    }

    pub async fn fetch_categories(&self) -> ApiResponse<Vec<AssetCategory>> {
        self.rest.get("/assets/categories").await
    }

    pub async fn fetch_description(&self) -> ApiResponse<Vec<AssetDescription>> {
        self.rest.get("/assets/description").await
    }

    pub async fn fetch_payment_methods(&self) -> ApiResponse<Vec<PaymentMethod>> {
        self.rest.get("/paymentmethods").await
    }
}
