use crate::core::priority::{CategoryPriorityModel, PriorityLevel};
use crate::models::{CatalogItem, ComponentScores, MatchResult, PreferenceProfile, PriceBand};

pub const CATEGORY_POINTS: f64 = 40.0;
pub const BUDGET_POINTS: f64 = 25.0;
pub const BUDGET_NEAR_POINTS: f64 = 20.0;
pub const BUDGET_FLEXIBLE_POINTS: f64 = 15.0;
pub const LOCATION_POINTS: f64 = 15.0;
pub const LOCATION_LISTED_POINTS: f64 = 5.0;
pub const STYLE_POINTS_PER_MATCH: f64 = 5.0;
pub const STYLE_CAP: f64 = 10.0;
pub const CULTURAL_POINTS: f64 = 5.0;
pub const AVAILABLE_ON_DATE_POINTS: f64 = 5.0;
pub const ACCEPTING_BOOKINGS_POINTS: f64 = 3.0;
pub const EXPERIENCE_CAP: f64 = 5.0;
pub const VERIFIED_POINTS: f64 = 5.0;
pub const MAX_SCORE: f64 = 100.0;

/// Deviation from the nearer band bound still worth near-budget credit
const NEAR_DEVIATION: f64 = 0.20;
/// Deviation accepted when the couple marked the budget as flexible
const FLEXIBLE_DEVIATION: f64 = 0.40;

/// Score one catalog item against a couple's preferences
///
/// Scoring formula (points, evaluated in this order):
/// ```text
/// category      40   required, else 40 * priority weight
/// budget        25   inside band; 20 within 20%; 15 within 40% if flexible
/// location      15   preferred location; 5 if a location is listed at all
/// style         10   5 per matching style token
/// cultural       5   any shared cultural specialty
/// availability   5   accepting bookings (3 when no date is set)
/// quality       20   rating 10/8/5, experience up to 5, verified 5
/// ```
/// The component caps add up to 120 and only the total is clamped to 100.
/// Each non-zero component contributes one reason, in the order above.
pub fn score_service(
    item: &CatalogItem,
    profile: &PreferenceProfile,
    priorities: &CategoryPriorityModel,
) -> MatchResult {
    let mut reasons = Vec::new();
    let mut push = |points: f64, reason: Option<String>| {
        if points > 0.0 {
            if let Some(reason) = reason {
                reasons.push(reason);
            }
        }
        points
    };

    let is_required_category = profile.requires(&item.category);

    let (points, reason) = category_score(item, is_required_category, priorities);
    let category = push(points, reason);

    let (points, reason) = budget_score(item, profile);
    let budget = push(points, reason);

    let (points, reason) = location_score(item, &profile.locations);
    let location = push(points, reason);

    let (points, reason) = style_score(item, &profile.styles);
    let style = push(points, reason);

    let (points, reason) = cultural_score(item, &profile.cultural_preferences);
    let cultural = push(points, reason);

    let (points, reason) = availability_score(item, profile);
    let availability = push(points, reason);

    let (points, reason) = quality_score(item);
    let quality = push(points, reason);

    let component_scores = ComponentScores {
        category,
        budget,
        location,
        style,
        cultural,
        availability,
        quality,
    };

    MatchResult {
        service_id: item.id.clone(),
        category: item.category.clone(),
        total_score: component_scores.sum().clamp(0.0, MAX_SCORE),
        component_scores,
        reasons,
        is_required_category,
    }
}

fn category_score(
    item: &CatalogItem,
    is_required: bool,
    priorities: &CategoryPriorityModel,
) -> (f64, Option<String>) {
    if is_required {
        return (
            CATEGORY_POINTS,
            Some(format!("Matches your required {} category", item.category.label())),
        );
    }

    let Some(level) = priorities.level(&item.category) else {
        return (0.0, None);
    };

    let reason = match level {
        PriorityLevel::Required | PriorityLevel::Related => {
            format!("{} is closely related to your must-have services", item.category.label())
        }
        PriorityLevel::Complementary => {
            format!("{} is often booked with your must-have services", item.category.label())
        }
    };
    (CATEGORY_POINTS * level.weight(), Some(reason))
}

fn budget_score(item: &CatalogItem, profile: &PreferenceProfile) -> (f64, Option<String>) {
    let Some(budget) = profile.budget.as_ref() else {
        return (0.0, None);
    };
    let (Some(price), Some(band)) = (item.known_price(), budget.band()) else {
        return (0.0, None);
    };

    let Some(deviation) = band_deviation(price, band) else {
        return (0.0, None);
    };

    if deviation == 0.0 {
        (BUDGET_POINTS, Some("Within your budget range".to_string()))
    } else if deviation <= NEAR_DEVIATION {
        (BUDGET_NEAR_POINTS, Some("Close to your budget range".to_string()))
    } else if deviation <= FLEXIBLE_DEVIATION && budget.flexible {
        (
            BUDGET_FLEXIBLE_POINTS,
            Some("Within reach of your flexible budget".to_string()),
        )
    } else {
        (0.0, None)
    }
}

/// Proportional distance from the nearer band bound, 0 inside the band
///
/// Returns `None` when the bound to compare against is not positive.
fn band_deviation(price: f64, band: PriceBand) -> Option<f64> {
    if price < band.min {
        return (band.min > 0.0).then(|| (band.min - price) / band.min);
    }

    match band.max {
        Some(max) if price > max => (max > 0.0).then(|| (price - max) / max),
        _ => Some(0.0),
    }
}

fn location_score(item: &CatalogItem, locations: &[String]) -> (f64, Option<String>) {
    let location = item.location.trim();
    if location.is_empty() {
        return (0.0, None);
    }

    let haystack = location.to_lowercase();
    let matched = locations
        .iter()
        .map(|token| token.trim().to_lowercase())
        .find(|token| !token.is_empty() && haystack.contains(token.as_str()));

    match matched {
        Some(_) => (LOCATION_POINTS, Some(format!("Serves your preferred area ({})", location))),
        None => (LOCATION_LISTED_POINTS, Some(format!("Based in {}", location))),
    }
}

fn style_score(item: &CatalogItem, styles: &[String]) -> (f64, Option<String>) {
    let offered: Vec<String> = item.wedding_styles.iter().map(|s| s.to_lowercase()).collect();
    let matched: Vec<&str> = styles
        .iter()
        .map(|s| s.trim())
        .filter(|token| !token.is_empty())
        .filter(|token| {
            let token = token.to_lowercase();
            offered.iter().any(|style| style.contains(&token))
        })
        .collect();

    if matched.is_empty() {
        return (0.0, None);
    }

    let points = (STYLE_POINTS_PER_MATCH * matched.len() as f64).min(STYLE_CAP);
    (points, Some(format!("Matches your style: {}", matched.join(", "))))
}

fn cultural_score(item: &CatalogItem, preferences: &[String]) -> (f64, Option<String>) {
    let specialties: Vec<String> = item
        .cultural_specialties
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    let matched = preferences.iter().map(|p| p.trim()).find(|token| {
        let token = token.to_lowercase();
        !token.is_empty() && specialties.iter().any(|s| s.contains(&token))
    });

    match matched {
        Some(token) => (CULTURAL_POINTS, Some(format!("Experienced with {} traditions", token))),
        None => (0.0, None),
    }
}

fn availability_score(item: &CatalogItem, profile: &PreferenceProfile) -> (f64, Option<String>) {
    if !item.accepting_bookings {
        return (0.0, None);
    }

    match profile.wedding_date {
        Some(date) => (
            AVAILABLE_ON_DATE_POINTS,
            Some(format!("Accepting bookings for {}", date.format("%B %-d, %Y"))),
        ),
        None => (ACCEPTING_BOOKINGS_POINTS, Some("Currently accepting bookings".to_string())),
    }
}

fn quality_score(item: &CatalogItem) -> (f64, Option<String>) {
    let mut points = 0.0;
    let mut parts = Vec::new();

    if let Some(rating) = item.valid_rating() {
        let rating_points = rating_points(rating);
        if rating_points > 0.0 {
            points += rating_points;
            parts.push(format!("rated {:.1}", rating));
        }
    }

    if let Some(years) = item.years_in_business.filter(|y| *y > 0) {
        points += f64::from(years).min(EXPERIENCE_CAP);
        parts.push(format!(
            "{} year{} in business",
            years,
            if years == 1 { "" } else { "s" }
        ));
    }

    if item.is_verified {
        points += VERIFIED_POINTS;
        parts.push("verified vendor".to_string());
    }

    if parts.is_empty() {
        return (0.0, None);
    }

    let mut reason = parts.join(", ");
    if let Some(first) = reason.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    (points, Some(reason))
}

#[inline]
fn rating_points(rating: f64) -> f64 {
    if rating >= 4.8 {
        10.0
    } else if rating >= 4.5 {
        8.0
    } else if rating >= 4.0 {
        5.0
    } else {
        0.0
    }
}
