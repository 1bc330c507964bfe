//! Geographic market resolution and recommendation-capacity classification.
//!
//! Given a property coordinate, find the named market region that covers it
//! (nearest match within each region's radius), derive the market's size
//! tier, and judge whether an observed candidate-property count sits in the
//! tier's sweet spot for generating diverse recommendations. Locations no
//! region covers degrade to a count-based fallback tier instead of failing.

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod error;
pub mod resolver;
pub mod types;

pub use catalog::{CatalogHandle, MarketCatalog};
pub use classifier::{classify, Classification, TierThresholds};
pub use error::{AppError, Result};
pub use resolver::{rank_by_distance, resolve, RankedMarket, ResolvedMarket};
pub use types::{CapacityBand, CapacityStatus, MarketRecord, MarketTier};
