use crate::core::{
    categories::CategoryGraph,
    packages::assemble_packages,
    priority::CategoryPriorityModel,
    ranker::rank_catalog,
};
use crate::models::{CatalogItem, MatchResult, Package, PreferenceProfile};

/// Result of one matching run
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub results: Vec<MatchResult>,
    pub packages: Vec<Package>,
    pub total_candidates: usize,
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Priority model from the required categories and the category graph
/// 2. Per-service scoring
/// 3. Ranking (required first, then score)
/// 4. Package assembly per tier
///
/// A `Matcher` holds no per-run state and is cheap to share between workers.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    graph: CategoryGraph,
}

impl Matcher {
    pub fn new(graph: CategoryGraph) -> Self {
        Self { graph }
    }

    pub fn with_default_graph() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &CategoryGraph {
        &self.graph
    }

    /// Category weights for a couple's required categories
    pub fn priorities(&self, profile: &PreferenceProfile) -> CategoryPriorityModel {
        CategoryPriorityModel::build(&profile.required_categories, &self.graph)
    }

    /// Score and rank a catalog snapshot
    pub fn rank(&self, profile: &PreferenceProfile, catalog: &[CatalogItem]) -> Vec<MatchResult> {
        let priorities = self.priorities(profile);
        rank_catalog(catalog, profile, &priorities)
            .into_iter()
            .map(|ranked| ranked.result)
            .collect()
    }

    /// Run the full pipeline: ranking plus package assembly
    ///
    /// # Arguments
    /// * `profile` - What the couple is looking for
    /// * `catalog` - Snapshot of vendor offerings, only borrowed for the call
    pub fn find_matches(&self, profile: &PreferenceProfile, catalog: &[CatalogItem]) -> MatchOutcome {
        let priorities = self.priorities(profile);
        let ranked = rank_catalog(catalog, profile, &priorities);
        let packages = assemble_packages(&ranked, profile, &priorities);

        tracing::debug!(
            "Matched {} of {} services across {} weighted categories, built {} packages",
            ranked.len(),
            catalog.len(),
            priorities.len(),
            packages.len()
        );

        MatchOutcome {
            results: ranked.into_iter().map(|r| r.result).collect(),
            packages,
            total_candidates: catalog.len(),
        }
    }
}
