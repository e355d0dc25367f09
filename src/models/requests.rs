use crate::models::{CatalogItem, PreferenceProfile};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank catalog services for a couple
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankServicesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "couple_id", rename = "coupleId")]
    pub couple_id: String,
    #[serde(default)]
    pub preferences: PreferenceProfile,
    /// Inline catalog snapshot, the configured supplier is used when absent
    #[serde(default)]
    pub catalog: Option<Vec<CatalogItem>>,
    /// Falls back to the configured default limit
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to assemble packages for a couple
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AssemblePackagesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "couple_id", rename = "coupleId")]
    pub couple_id: String,
    #[serde(default)]
    pub preferences: PreferenceProfile,
    #[serde(default)]
    pub catalog: Option<Vec<CatalogItem>>,
}
