use serde::{Deserialize, Serialize};

/// Two-factor authentication status of the signed-in client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TfaStatus {
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalData {
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
}
