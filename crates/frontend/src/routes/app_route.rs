/// Pages of the wallet, addressed by browser path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Assets,
    Wallets,
    WithdrawCrypto { asset_id: String },
    ConfirmOperation { operation_id: String },
    Security,
    NotFound(String),
}

pub const ROUTE_SECURITY: &str = "/profile/security";

fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn decoded(value: &str) -> String {
    urlencoding::decode(value)
        .map(|v| v.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

impl AppRoute {
    pub fn parse(path: &str) -> Self {
        let parts: Vec<&str> = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .split('/')
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [] | ["assets"] => AppRoute::Assets,
            ["wallets"] => AppRoute::Wallets,
            ["withdraw", asset_id] => AppRoute::WithdrawCrypto {
                asset_id: decoded(asset_id),
            },
            ["operations", operation_id, "confirm"] => AppRoute::ConfirmOperation {
                operation_id: decoded(operation_id),
            },
            ["profile", "security"] => AppRoute::Security,
            _ => AppRoute::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            AppRoute::Assets => "/".to_string(),
            AppRoute::Wallets => "/wallets".to_string(),
            AppRoute::WithdrawCrypto { asset_id } => format!("/withdraw/{}", segment(asset_id)),
            AppRoute::ConfirmOperation { operation_id } => {
                format!("/operations/{}/confirm", segment(operation_id))
            }
            AppRoute::Security => ROUTE_SECURITY.to_string(),
            AppRoute::NotFound(path) => path.clone(),
        }
    }
}
