// Model exports
pub mod category;
pub mod domain;
pub mod requests;
pub mod responses;

pub use category::Category;
pub use domain::{
    Budget, BudgetTier, CatalogItem, ComponentScores, MatchResult, Package, PackageService,
    PackageTier, PreferenceProfile, PriceBand,
};
pub use requests::{AssemblePackagesRequest, RankServicesRequest};
pub use responses::{
    truncate_package_reasons, ErrorResponse, HealthResponse, PackagesResponse,
    RankServicesResponse, RankedServiceView,
};
