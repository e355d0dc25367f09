// Service exports
pub mod catalog;

pub use catalog::{CatalogError, CatalogSupplier, JsonFileCatalog, NoCatalog, StaticCatalog};
