use serde::Serialize;

use crate::classifier::thresholds::TierThresholds;
use crate::types::{CapacityBand, CapacityStatus, MarketTier};

/// Capacity assessment of an observed candidate-property count: the band it
/// falls in, the user-facing status, and the thresholds that drew the bands.
/// Consumed by the range indicator UI and by recommendation-pool sizing.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Classification {
    pub tier: MarketTier,
    pub band: CapacityBand,
    pub status: CapacityStatus,
    pub thresholds: TierThresholds,
    pub message: &'static str,
}

/// Classify an observed candidate-property count against the tier's capacity
/// bands. Pure — thresholds are recomputed from the tier on every call.
pub fn classify(tier: MarketTier, observed_count: u32) -> Classification {
    let thresholds = TierThresholds::for_tier(tier);
    let band = thresholds.band_for(observed_count);
    let status = band.status();
    Classification {
        tier,
        band,
        status,
        thresholds,
        message: status.guidance(),
    }
}
