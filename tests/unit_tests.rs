// Unit tests for Wedding Match

use std::collections::BTreeSet;
use wedding_match::core::{
    categories::CategoryGraph,
    packages::{fulfillment_percentage, SelectionPolicy},
    priority::{CategoryPriorityModel, PriorityLevel},
    ranker::rank_catalog,
    scoring::score_service,
};
use wedding_match::models::{
    Budget, BudgetTier, CatalogItem, Category, PackageTier, PreferenceProfile,
};

fn create_service(category: Category, price: f64) -> CatalogItem {
    CatalogItem {
        id: "svc".to_string(),
        name: "Service".to_string(),
        vendor_name: None,
        category,
        base_price: price,
        rating: None,
        is_verified: false,
        is_premium: false,
        years_in_business: None,
        location: String::new(),
        wedding_styles: vec![],
        cultural_specialties: vec![],
        accepting_bookings: false,
    }
}

fn required(categories: &[Category]) -> BTreeSet<Category> {
    categories.iter().cloned().collect()
}

#[test]
fn test_priority_weights_pinned() {
    assert_eq!(PriorityLevel::Required.weight(), 1.0);
    assert_eq!(PriorityLevel::Related.weight(), 0.8);
    assert_eq!(PriorityLevel::Complementary.weight(), 0.5);
}

#[test]
fn test_priority_monotonicity_for_every_category() {
    let graph = CategoryGraph::default();

    for category in Category::ALL {
        let model = CategoryPriorityModel::build(&required(&[category.clone()]), &graph);
        assert_eq!(model.level(&category), Some(PriorityLevel::Required));

        for related in graph.related_of(&category) {
            assert!(model.weight(related) >= PriorityLevel::Related.weight());
        }
        for complementary in graph.complementary_of(&category) {
            assert!(model.weight(complementary) >= PriorityLevel::Complementary.weight());
        }
    }
}

#[test]
fn test_priority_model_independent_of_required_order() {
    let graph = CategoryGraph::default();
    let a = CategoryPriorityModel::build(&required(&[Category::Attire, Category::Photography]), &graph);
    let b = CategoryPriorityModel::build(&required(&[Category::Photography, Category::Attire]), &graph);

    assert_eq!(a, b);
    assert_eq!(a.level(&Category::Attire), Some(PriorityLevel::Required));
}

#[test]
fn test_budget_bands_pinned() {
    let band = BudgetTier::Budget.band();
    assert_eq!((band.min, band.max), (0.0, Some(50_000.0)));
    let band = BudgetTier::Moderate.band();
    assert_eq!((band.min, band.max), (50_000.0, Some(150_000.0)));
    let band = BudgetTier::Upscale.band();
    assert_eq!((band.min, band.max), (150_000.0, Some(300_000.0)));
    let band = BudgetTier::Luxury.band();
    assert_eq!((band.min, band.max), (300_000.0, None));
}

#[test]
fn test_exact_amount_takes_precedence() {
    let budget = Budget {
        tier: Some(BudgetTier::Luxury),
        exact_amount: Some(80_000.0),
        flexible: false,
    };
    let band = budget.band().unwrap();
    assert_eq!((band.min, band.max), (80_000.0, Some(80_000.0)));

    let unusable = Budget {
        tier: Some(BudgetTier::Moderate),
        exact_amount: Some(0.0),
        flexible: false,
    };
    assert_eq!(unusable.band(), Some(BudgetTier::Moderate.band()));
}

#[test]
fn test_luxury_has_no_upper_bound() {
    let profile = PreferenceProfile {
        budget: Some(Budget::from_tier(BudgetTier::Luxury)),
        ..PreferenceProfile::default()
    };
    let model = CategoryPriorityModel::default();

    let result = score_service(&create_service(Category::Venue, 5_000_000.0), &profile, &model);

    assert_eq!(result.component_scores.budget, 25.0);
}

#[test]
fn test_category_match_is_alias_insensitive() {
    let profile = PreferenceProfile {
        required_categories: required(&[Category::parse("Hair & Makeup")]),
        ..PreferenceProfile::default()
    };
    let model = CategoryPriorityModel::build(&profile.required_categories, &CategoryGraph::default());

    let service = create_service(Category::parse("bridal_makeup"), 0.0);
    let result = score_service(&service, &profile, &model);

    assert!(result.is_required_category);
    assert_eq!(result.component_scores.category, 40.0);
}

#[test]
fn test_vendor_category_strings_resolve_by_whole_words() {
    let item: CatalogItem = serde_json::from_str(
        r#"{"id": "r1", "name": "Party Needs", "category": "Chairs and Tables", "basePrice": 8000}"#,
    )
    .unwrap();
    assert_eq!(item.category, Category::Rentals);

    assert_eq!(Category::parse("Honeymoon Suite"), Category::Accommodation);
    assert_ne!(Category::parse("Ghost Light Co"), Category::Host);
    assert_ne!(Category::parse("Mcgregor Events"), Category::Host);
}

#[test]
fn test_different_unknown_categories_do_not_match() {
    let profile: PreferenceProfile =
        serde_json::from_str(r#"{"requiredCategories": ["fireworks"]}"#).unwrap();
    let model = CategoryPriorityModel::build(&profile.required_categories, &CategoryGraph::default());

    let mut drone = create_service(Category::parse("drone"), 0.0);
    drone.rating = Some(4.9);
    let result = score_service(&drone, &profile, &model);

    assert!(!result.is_required_category);
    assert_eq!(result.component_scores.category, 0.0);
}

#[test]
fn test_missing_attributes_degrade_to_zero() {
    let profile = PreferenceProfile {
        locations: vec!["Davao".to_string()],
        styles: vec!["boho".to_string()],
        cultural_preferences: vec!["Muslim".to_string()],
        ..PreferenceProfile::default()
    };
    let model = CategoryPriorityModel::default();

    let result = score_service(&create_service(Category::Cake, 10_000.0), &profile, &model);

    assert_eq!(result.total_score, 0.0);
    assert!(result.reasons.is_empty());
    assert!(!result.is_required_category);
}

#[test]
fn test_policies_per_tier() {
    assert_eq!(
        SelectionPolicy::from(PackageTier::Essential),
        SelectionPolicy::Budget { min_rating: 4.0 }
    );
    assert_eq!(
        SelectionPolicy::from(PackageTier::Deluxe),
        SelectionPolicy::Balanced { min_rating: 4.2 }
    );
    assert_eq!(
        SelectionPolicy::from(PackageTier::Premium),
        SelectionPolicy::Quality { min_rating: 4.5 }
    );
    assert_eq!(SelectionPolicy::from(PackageTier::Custom), SelectionPolicy::TopRanked);
}

#[test]
fn test_tier_constants_pinned() {
    let discounts: Vec<u8> = PackageTier::ALL.iter().map(|t| t.discount_percent()).collect();
    let caps: Vec<usize> = PackageTier::ALL.iter().map(|t| t.max_services()).collect();

    assert_eq!(discounts, vec![10, 15, 20, 12]);
    assert_eq!(caps, vec![5, 8, 12, 10]);
}

#[test]
fn test_quality_policy_weighs_rating() {
    let profile = PreferenceProfile {
        required_categories: required(&[Category::Florist]),
        ..PreferenceProfile::default()
    };
    let model = CategoryPriorityModel::build(&profile.required_categories, &CategoryGraph::default());

    let mut steady = create_service(Category::Florist, 30_000.0);
    steady.id = "steady".to_string();
    steady.rating = Some(4.5);
    steady.is_verified = true;
    steady.years_in_business = Some(5);

    let mut star = create_service(Category::Florist, 30_000.0);
    star.id = "star".to_string();
    star.rating = Some(5.0);
    star.years_in_business = Some(4);

    // steady: 40 + 8 + 5 + 5 = 58, quality key 103; star: 40 + 10 + 4 = 54, quality key 104
    let catalog = vec![star, steady];
    let ranked = rank_catalog(&catalog, &profile, &model);
    let candidates: Vec<_> = ranked.iter().collect();

    assert_eq!(ranked[0].item.id, "steady");
    let quality = SelectionPolicy::Quality { min_rating: 4.5 }.select(&candidates).unwrap();
    assert_eq!(quality.item.id, "star");

    let balanced = SelectionPolicy::Balanced { min_rating: 4.2 }.select(&candidates).unwrap();
    assert_eq!(balanced.item.id, "steady");

    let budget = SelectionPolicy::Budget { min_rating: 4.0 }.select(&candidates).unwrap();
    assert_eq!(budget.item.id, "steady");
}

#[test]
fn test_fulfillment_rounding() {
    assert_eq!(fulfillment_percentage(0, 0), 100);
    assert_eq!(fulfillment_percentage(1, 6), 17);
    assert_eq!(fulfillment_percentage(5, 6), 83);
    assert_eq!(fulfillment_percentage(1, 8), 13);
}
