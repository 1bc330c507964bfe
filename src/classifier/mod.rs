mod capacity;
mod thresholds;

pub use capacity::{classify, Classification};
pub use thresholds::TierThresholds;
