use serde::{Deserialize, Serialize};

/// Default number of fractional digits when an asset does not declare one
pub const DEFAULT_ACCURACY: u32 = 8;

// ============================================================================
// Asset
// ============================================================================

/// Tradable asset from the catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_id: Option<String>,
    /// Fractional digits used for rounding and input masking
    #[serde(default = "default_accuracy")]
    pub accuracy: u32,
    #[serde(default)]
    pub category_id: Option<String>,
    /// Filled from `/assets/description`, absent on the catalog payload
    #[serde(default)]
    pub description: Option<String>,
}

fn default_accuracy() -> u32 {
    DEFAULT_ACCURACY
}

impl Asset {
    /// Short ticker shown next to amounts
    pub fn ticker(&self) -> &str {
        self.display_id.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDescription {
    /// Asset id this description belongs to
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub name: String,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub assets: Vec<String>,
}
