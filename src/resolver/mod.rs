mod distance;
mod nearest;

pub use distance::haversine_miles;
pub use nearest::{rank_by_distance, resolve, RankedMarket, ResolvedMarket};
