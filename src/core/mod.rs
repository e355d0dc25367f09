// Core algorithm exports
pub mod categories;
pub mod matcher;
pub mod packages;
pub mod priority;
pub mod ranker;
pub mod scoring;

pub use categories::{CategoryGraph, GraphOverrides};
pub use matcher::{MatchOutcome, Matcher};
pub use packages::{assemble_packages, fulfillment_percentage, SelectionPolicy};
pub use priority::{CategoryPriorityModel, PriorityLevel};
pub use ranker::{rank_catalog, RankedService};
pub use scoring::score_service;
