use crate::models::Category;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What a couple is looking for, one per matching run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceProfile {
    #[serde(rename = "requiredCategories", default)]
    pub required_categories: BTreeSet<Category>,
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(rename = "culturalPreferences", default)]
    pub cultural_preferences: Vec<String>,
    #[serde(rename = "weddingDate", default)]
    pub wedding_date: Option<NaiveDate>,
}

impl PreferenceProfile {
    /// Whether the category was explicitly selected as a must-have
    pub fn requires(&self, category: &Category) -> bool {
        self.required_categories.contains(category)
    }
}

/// Budget preset for a single service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Budget,
    Moderate,
    Upscale,
    Luxury,
}

impl BudgetTier {
    /// Per-service price band in pesos, `max` is `None` when unbounded
    pub fn band(self) -> PriceBand {
        match self {
            BudgetTier::Budget => PriceBand { min: 0.0, max: Some(50_000.0) },
            BudgetTier::Moderate => PriceBand { min: 50_000.0, max: Some(150_000.0) },
            BudgetTier::Upscale => PriceBand { min: 150_000.0, max: Some(300_000.0) },
            BudgetTier::Luxury => PriceBand { min: 300_000.0, max: None },
        }
    }
}

/// Inclusive price range a service is expected to fall in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    pub min: f64,
    pub max: Option<f64>,
}

/// Couple's budget: either a tier or an exact amount
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default)]
    pub tier: Option<BudgetTier>,
    #[serde(rename = "exactAmount", default)]
    pub exact_amount: Option<f64>,
    #[serde(default)]
    pub flexible: bool,
}

impl Budget {
    pub fn from_tier(tier: BudgetTier) -> Self {
        Self { tier: Some(tier), exact_amount: None, flexible: false }
    }

    pub fn exact(amount: f64) -> Self {
        Self { tier: None, exact_amount: Some(amount), flexible: false }
    }

    pub fn with_flexibility(mut self) -> Self {
        self.flexible = true;
        self
    }

    /// Reference band for budget scoring
    ///
    /// A positive exact amount takes precedence over the tier and is used as
    /// both bounds. Returns `None` when there is nothing usable to compare against.
    pub fn band(&self) -> Option<PriceBand> {
        match (self.exact_amount, self.tier) {
            (Some(amount), _) if amount.is_finite() && amount > 0.0 => {
                Some(PriceBand { min: amount, max: Some(amount) })
            }
            (_, Some(tier)) => Some(tier.band()),
            _ => None,
        }
    }
}

/// One vendor offering from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "vendorName", default)]
    pub vendor_name: Option<String>,
    pub category: Category,
    #[serde(rename = "basePrice", default)]
    pub base_price: f64,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
    #[serde(rename = "isPremium", default)]
    pub is_premium: bool,
    #[serde(rename = "yearsInBusiness", default)]
    pub years_in_business: Option<i32>,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "weddingStyles", default)]
    pub wedding_styles: Vec<String>,
    #[serde(rename = "culturalSpecialties", default)]
    pub cultural_specialties: Vec<String>,
    #[serde(rename = "acceptingBookings", default = "default_true")]
    pub accepting_bookings: bool,
}

impl CatalogItem {
    /// Price if it is known, non-positive prices mean "ask the vendor"
    pub fn known_price(&self) -> Option<f64> {
        (self.base_price.is_finite() && self.base_price > 0.0).then_some(self.base_price)
    }

    /// Rating if it is inside the 0-5 scale
    pub fn valid_rating(&self) -> Option<f64> {
        self.rating.filter(|r| (0.0..=5.0).contains(r))
    }

    /// Rating used by tier gates, anything unusable counts as zero
    pub fn rating_or_zero(&self) -> f64 {
        self.valid_rating().unwrap_or(0.0)
    }
}

fn default_true() -> bool { true }

/// Points earned per scoring component
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub category: f64,
    pub budget: f64,
    pub location: f64,
    pub style: f64,
    pub cultural: f64,
    pub availability: f64,
    pub quality: f64,
}

impl ComponentScores {
    pub fn sum(&self) -> f64 {
        self.category
            + self.budget
            + self.location
            + self.style
            + self.cultural
            + self.availability
            + self.quality
    }
}

/// Scored catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "serviceId")]
    pub service_id: String,
    pub category: Category,
    #[serde(rename = "totalScore")]
    pub total_score: f64,
    #[serde(rename = "componentScores")]
    pub component_scores: ComponentScores,
    pub reasons: Vec<String>,
    #[serde(rename = "isRequiredCategory")]
    pub is_required_category: bool,
}

/// Fixed package presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageTier {
    Essential,
    Deluxe,
    Premium,
    Custom,
}

impl PackageTier {
    /// All tiers in presentation order
    pub const ALL: [PackageTier; 4] = [
        PackageTier::Essential,
        PackageTier::Deluxe,
        PackageTier::Premium,
        PackageTier::Custom,
    ];

    pub fn discount_percent(self) -> u8 {
        match self {
            PackageTier::Essential => 10,
            PackageTier::Deluxe => 15,
            PackageTier::Premium => 20,
            PackageTier::Custom => 12,
        }
    }

    pub fn max_services(self) -> usize {
        match self {
            PackageTier::Essential => 5,
            PackageTier::Deluxe => 8,
            PackageTier::Premium => 12,
            PackageTier::Custom => 10,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PackageTier::Essential => "Essential Package",
            PackageTier::Deluxe => "Deluxe Package",
            PackageTier::Premium => "Premium Package",
            PackageTier::Custom => "Custom Package",
        }
    }
}

/// A selected service together with its match result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageService {
    pub service: CatalogItem,
    #[serde(rename = "match")]
    pub result: MatchResult,
}

/// Discounted bundle of services for one tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub tier: PackageTier,
    pub name: String,
    pub services: Vec<PackageService>,
    #[serde(rename = "requiredCategoriesFulfilled")]
    pub required_categories_fulfilled: usize,
    #[serde(rename = "totalRequiredCategories")]
    pub total_required_categories: usize,
    #[serde(rename = "fulfillmentPercentage")]
    pub fulfillment_percentage: u8,
    #[serde(rename = "listPrice")]
    pub list_price: f64,
    #[serde(rename = "discountPercent")]
    pub discount_percent: u8,
    #[serde(rename = "discountedPrice")]
    pub discounted_price: f64,
    pub savings: f64,
    #[serde(rename = "missingCategories")]
    pub missing_categories: Vec<Category>,
    #[serde(rename = "bonusServices")]
    pub bonus_services: Vec<String>,
}
