use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalletType {
    Trading,
    Api,
}

/// Balance of a single asset inside a wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub asset_id: String,
    pub balance: f64,
    #[serde(default)]
    pub reserved: f64,
}

impl Balance {
    pub fn available(&self) -> f64 {
        self.balance - self.reserved
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub wallet_type: WalletType,
    #[serde(default)]
    pub balances: Vec<Balance>,
}

impl Wallet {
    pub fn is_trading(&self) -> bool {
        self.wallet_type == WalletType::Trading
    }

    pub fn balance_of(&self, asset_id: &str) -> Option<&Balance> {
        self.balances.iter().find(|b| b.asset_id == asset_id)
    }
}
