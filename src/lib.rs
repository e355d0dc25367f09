//! Wedding Match - preference matching and package assembly for a wedding vendor marketplace
//!
//! The library scores vendor services against what a couple is looking for and
//! bundles the best fits into discounted package tiers. The matching engine in
//! [`core`] is pure: it borrows a catalog snapshot and a preference profile and
//! returns fresh results without touching any I/O.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{CategoryGraph, CategoryPriorityModel, MatchOutcome, Matcher};
pub use models::{
    Budget, BudgetTier, CatalogItem, Category, MatchResult, Package, PackageTier,
    PreferenceProfile,
};
