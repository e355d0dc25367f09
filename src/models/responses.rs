use crate::models::{Category, ComponentScores, MatchResult, Package};
use serde::{Deserialize, Serialize};

/// Ranked service as shown to a couple
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedServiceView {
    #[serde(rename = "serviceId")]
    pub service_id: String,
    pub category: Category,
    #[serde(rename = "totalScore")]
    pub total_score: f64,
    #[serde(rename = "componentScores")]
    pub component_scores: ComponentScores,
    #[serde(rename = "topReasons")]
    pub top_reasons: Vec<String>,
    #[serde(rename = "isRequiredCategory")]
    pub is_required_category: bool,
}

impl RankedServiceView {
    /// Keep only the first `reason_limit` reasons, they are already ordered
    pub fn from_result(result: MatchResult, reason_limit: usize) -> Self {
        let mut top_reasons = result.reasons;
        top_reasons.truncate(reason_limit);

        Self {
            service_id: result.service_id,
            category: result.category,
            total_score: result.total_score,
            component_scores: result.component_scores,
            top_reasons,
            is_required_category: result.is_required_category,
        }
    }
}

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankServicesResponse {
    #[serde(rename = "coupleId")]
    pub couple_id: String,
    pub results: Vec<RankedServiceView>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the packages endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackagesResponse {
    #[serde(rename = "coupleId")]
    pub couple_id: String,
    pub packages: Vec<Package>,
    #[serde(rename = "rankedServices")]
    pub ranked_services: usize,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Trim every selected service's reasons for display
pub fn truncate_package_reasons(packages: &mut [Package], reason_limit: usize) {
    for package in packages {
        for selected in &mut package.services {
            selected.result.reasons.truncate(reason_limit);
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_truncates_reasons() {
        let result = MatchResult {
            service_id: "svc".to_string(),
            category: Category::Venue,
            total_score: 42.0,
            component_scores: ComponentScores::default(),
            reasons: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            is_required_category: true,
        };

        let view = RankedServiceView::from_result(result, 3);

        assert_eq!(view.top_reasons, vec!["a", "b", "c"]);
        assert_eq!(view.total_score, 42.0);
    }
}
