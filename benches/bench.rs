// Criterion benchmarks for Wedding Match

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use wedding_match::core::{CategoryPriorityModel, Matcher, score_service};
use wedding_match::models::{Budget, BudgetTier, CatalogItem, Category, PreferenceProfile};

fn create_service(id: usize) -> CatalogItem {
    let category = Category::ALL[id % Category::ALL.len()].clone();
    CatalogItem {
        id: id.to_string(),
        name: format!("Service {}", id),
        vendor_name: None,
        category,
        base_price: 20_000.0 + (id % 40) as f64 * 5_000.0,
        rating: Some(3.5 + (id % 16) as f64 * 0.1),
        is_verified: id % 3 == 0,
        is_premium: id % 7 == 0,
        years_in_business: Some((id % 12) as i32),
        location: if id % 2 == 0 { "Quezon City" } else { "Cebu City" }.to_string(),
        wedding_styles: vec!["rustic".to_string(), "modern".to_string()],
        cultural_specialties: vec!["Filipino".to_string()],
        accepting_bookings: id % 5 != 0,
    }
}

fn create_preferences() -> PreferenceProfile {
    PreferenceProfile {
        required_categories: [Category::Venue, Category::Catering, Category::Photography, Category::Florist]
            .into_iter()
            .collect(),
        budget: Some(Budget::from_tier(BudgetTier::Moderate).with_flexibility()),
        locations: vec!["Quezon City".to_string()],
        styles: vec!["rustic".to_string()],
        cultural_preferences: vec!["Filipino".to_string()],
        wedding_date: None,
    }
}

fn bench_score_service(c: &mut Criterion) {
    let matcher = Matcher::with_default_graph();
    let preferences = create_preferences();
    let priorities: CategoryPriorityModel = matcher.priorities(&preferences);
    let service = create_service(42);

    c.bench_function("score_service", |b| {
        b.iter(|| score_service(black_box(&service), black_box(&preferences), black_box(&priorities)));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::with_default_graph();
    let preferences = create_preferences();

    let mut group = c.benchmark_group("matching");

    for catalog_size in [10, 50, 100, 500, 1000].iter() {
        let catalog: Vec<CatalogItem> = (0..*catalog_size).map(create_service).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", catalog_size),
            catalog_size,
            |b, _| {
                b.iter(|| matcher.rank(black_box(&preferences), black_box(&catalog)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("find_matches", catalog_size),
            catalog_size,
            |b, _| {
                b.iter(|| matcher.find_matches(black_box(&preferences), black_box(&catalog)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_score_service, bench_matching);

criterion_main!(benches);
