use crate::core::{priority::CategoryPriorityModel, ranker::RankedService};
use crate::models::{Category, Package, PackageService, PackageTier, PreferenceProfile};
use std::collections::{BTreeMap, BTreeSet};

/// How a tier picks one service out of a category's candidates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionPolicy {
    /// Cheapest known price among candidates rated at least `min_rating`
    Budget { min_rating: f64 },
    /// Highest match score among candidates rated at least `min_rating`
    Balanced { min_rating: f64 },
    /// Highest `score + rating * 10` among candidates rated at least `min_rating`
    Quality { min_rating: f64 },
    /// Best-ranked candidate
    TopRanked,
}

impl From<PackageTier> for SelectionPolicy {
    fn from(tier: PackageTier) -> Self {
        match tier {
            PackageTier::Essential => SelectionPolicy::Budget { min_rating: 4.0 },
            PackageTier::Deluxe => SelectionPolicy::Balanced { min_rating: 4.2 },
            PackageTier::Premium => SelectionPolicy::Quality { min_rating: 4.5 },
            PackageTier::Custom => SelectionPolicy::TopRanked,
        }
    }
}

impl SelectionPolicy {
    /// Pick a candidate from a rank-ordered category group
    ///
    /// When nobody clears the rating gate the best-ranked candidate is used.
    /// Ties go to the better-ranked candidate.
    pub fn select<'r, 'a>(self, candidates: &[&'r RankedService<'a>]) -> Option<&'r RankedService<'a>> {
        let gated = |min_rating: f64| {
            candidates
                .iter()
                .copied()
                .filter(move |c| c.item.rating_or_zero() >= min_rating)
        };

        let picked = match self {
            SelectionPolicy::Budget { min_rating } => first_max_by(gated(min_rating), |c| {
                -c.item.known_price().unwrap_or(f64::INFINITY)
            }),
            SelectionPolicy::Balanced { min_rating } => {
                first_max_by(gated(min_rating), |c| c.result.total_score)
            }
            SelectionPolicy::Quality { min_rating } => first_max_by(gated(min_rating), |c| {
                c.result.total_score + c.item.rating_or_zero() * 10.0
            }),
            SelectionPolicy::TopRanked => None,
        };

        picked.or_else(|| candidates.first().copied())
    }
}

/// Largest key wins, the earliest element wins ties
fn first_max_by<T, I, F>(iter: I, key: F) -> Option<T>
where
    I: Iterator<Item = T>,
    F: Fn(&T) -> f64,
{
    let mut best: Option<(T, f64)> = None;
    for candidate in iter {
        let value = key(&candidate);
        match &best {
            Some((_, current)) if value <= *current => {}
            _ => best = Some((candidate, value)),
        }
    }
    best.map(|(candidate, _)| candidate)
}

/// Assemble one package per tier from ranked candidates
///
/// Tiers that end up without any service are left out. The result is ordered
/// by fulfillment, best first, with ties kept in tier order.
pub fn assemble_packages(
    ranked: &[RankedService<'_>],
    profile: &PreferenceProfile,
    priorities: &CategoryPriorityModel,
) -> Vec<Package> {
    let groups = group_by_category(ranked);

    let mut packages: Vec<Package> = PackageTier::ALL
        .iter()
        .filter_map(|tier| build_package(*tier, &groups, profile, priorities))
        .collect();

    packages.sort_by(|a, b| b.fulfillment_percentage.cmp(&a.fulfillment_percentage));
    packages
}

type CategoryGroups<'r, 'a> = BTreeMap<Category, Vec<&'r RankedService<'a>>>;

fn group_by_category<'r, 'a>(ranked: &'r [RankedService<'a>]) -> CategoryGroups<'r, 'a> {
    let mut groups: CategoryGroups<'r, 'a> = BTreeMap::new();
    for candidate in ranked {
        groups.entry(candidate.item.category.clone()).or_default().push(candidate);
    }
    groups
}

fn build_package(
    tier: PackageTier,
    groups: &CategoryGroups<'_, '_>,
    profile: &PreferenceProfile,
    priorities: &CategoryPriorityModel,
) -> Option<Package> {
    let policy = SelectionPolicy::from(tier);
    let mut selected: Vec<&RankedService<'_>> = Vec::new();
    let mut used = BTreeSet::new();
    let mut missing_categories = Vec::new();

    for category in &profile.required_categories {
        let choice = groups
            .get(category)
            .and_then(|candidates| policy.select(candidates));

        match choice {
            Some(candidate) => {
                selected.push(candidate);
                used.insert(category);
            }
            None => missing_categories.push(category.clone()),
        }
    }

    for (category, _) in priorities.by_priority() {
        if selected.len() >= tier.max_services() {
            break;
        }
        if used.contains(category) {
            continue;
        }
        if let Some(top) = groups.get(category).and_then(|c| c.first()) {
            selected.push(*top);
            used.insert(category);
        }
    }

    if selected.is_empty() {
        return None;
    }

    let list_price: f64 = selected
        .iter()
        .map(|c| c.item.known_price().unwrap_or(0.0))
        .sum();
    let discount_percent = tier.discount_percent();
    let discounted_price = list_price * f64::from(100 - discount_percent) / 100.0;

    let fulfilled: BTreeSet<&Category> = selected
        .iter()
        .map(|c| &c.item.category)
        .filter(|category| profile.requires(category))
        .collect();
    let total_required = profile.required_categories.len();

    let bonus_services = selected
        .iter()
        .filter(|c| !profile.requires(&c.item.category))
        .map(|c| c.item.name.clone())
        .collect();

    let services = selected
        .into_iter()
        .map(|c| PackageService {
            service: c.item.clone(),
            result: c.result.clone(),
        })
        .collect();

    Some(Package {
        tier,
        name: tier.name().to_string(),
        services,
        required_categories_fulfilled: fulfilled.len(),
        total_required_categories: total_required,
        fulfillment_percentage: fulfillment_percentage(fulfilled.len(), total_required),
        list_price,
        discount_percent,
        discounted_price,
        savings: list_price - discounted_price,
        missing_categories,
        bonus_services,
    })
}

/// Share of required categories covered, 100 when nothing was required
#[inline]
pub fn fulfillment_percentage(fulfilled: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    (100.0 * fulfilled.min(total) as f64 / total as f64).round() as u8
}
