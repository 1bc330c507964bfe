pub mod loader;
pub mod models;
mod store;

pub use store::{CatalogHandle, MarketCatalog};
