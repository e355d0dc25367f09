use crate::core::{priority::CategoryPriorityModel, scoring::score_service};
use crate::models::{CatalogItem, MatchResult, PreferenceProfile};
use std::cmp::Ordering;
use std::collections::HashSet;

/// A scored catalog item that survived ranking
///
/// Borrows the item from the caller's catalog snapshot for the duration of a run.
#[derive(Debug, Clone)]
pub struct RankedService<'a> {
    pub item: &'a CatalogItem,
    pub result: MatchResult,
}

/// Score the catalog and order it for package assembly
///
/// Items scoring zero are dropped and only the first occurrence of a service
/// id is kept. Required-category items always come first, then higher totals.
/// The sort is stable, so equal candidates keep their catalog order.
pub fn rank_catalog<'a>(
    catalog: &'a [CatalogItem],
    profile: &PreferenceProfile,
    priorities: &CategoryPriorityModel,
) -> Vec<RankedService<'a>> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(catalog.len());
    let mut ranked = Vec::with_capacity(catalog.len());

    for item in catalog {
        if !seen.insert(item.id.as_str()) {
            continue;
        }

        let result = score_service(item, profile, priorities);
        if result.total_score > 0.0 {
            ranked.push(RankedService { item, result });
        }
    }

    ranked.sort_by(|a, b| compare_ranked(&a.result, &b.result));
    ranked
}

/// Ordering used by the ranker: required first, then score descending
#[inline]
pub fn compare_ranked(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.is_required_category
        .cmp(&a.is_required_category)
        .then_with(|| {
            b.total_score
                .partial_cmp(&a.total_score)
                .unwrap_or(Ordering::Equal)
        })
}
