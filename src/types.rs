use serde::{Deserialize, Serialize};

use crate::config::fallback_thresholds;
use crate::error::AppError;

// ---------------------------------------------------------------------------
// Market record
// ---------------------------------------------------------------------------

/// One named market region from the externally maintained rental dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketRecord {
    pub region_id: i64,
    /// Center of the market, decimal degrees.
    pub latitude: f64,
    pub longitude: f64,
    /// A coordinate within this distance of the center is "in" the market.
    pub radius_miles: f64,
    /// National size ranking; rank 1 is the largest metro.
    pub size_rank: u32,
    /// Always recomputed from size_rank at load time — a stored tier is only
    /// ever cross-checked, never trusted.
    pub tier: MarketTier,
    pub city_state: String,
    pub monthly_rental_average: Option<f64>,
    pub yoy_growth: Option<f64>,
}

// ---------------------------------------------------------------------------
// Market tier
// ---------------------------------------------------------------------------

/// Discrete market size classification, coarser than size_rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketTier {
    /// size_rank 1–25
    MajorMetro,
    /// size_rank 26–100
    LargeMetro,
    /// size_rank 101–300
    MidSizeCity,
    /// size_rank 301+
    SmallCity,
}

impl MarketTier {
    pub fn from_size_rank(size_rank: u32) -> Self {
        match size_rank {
            0..=25 => MarketTier::MajorMetro,
            26..=100 => MarketTier::LargeMetro,
            101..=300 => MarketTier::MidSizeCity,
            _ => MarketTier::SmallCity,
        }
    }

    /// Fallback tiering by raw property count, for target coordinates no
    /// catalog market covers (rural areas, dataset gaps).
    pub fn from_property_count(count: u32) -> Self {
        if count >= fallback_thresholds::TIER1_MIN {
            MarketTier::MajorMetro
        } else if count >= fallback_thresholds::TIER2_MIN {
            MarketTier::LargeMetro
        } else if count >= fallback_thresholds::TIER3_MIN {
            MarketTier::MidSizeCity
        } else {
            MarketTier::SmallCity
        }
    }

    pub fn as_number(self) -> u8 {
        match self {
            MarketTier::MajorMetro => 1,
            MarketTier::LargeMetro => 2,
            MarketTier::MidSizeCity => 3,
            MarketTier::SmallCity => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MarketTier::MajorMetro => "Major Metro",
            MarketTier::LargeMetro => "Large Metro",
            MarketTier::MidSizeCity => "Mid-Size City",
            MarketTier::SmallCity => "Small City",
        }
    }
}

impl TryFrom<i64> for MarketTier {
    type Error = AppError;

    /// Numeric tier as stored in the dataset. Anything outside 1–4 is a data
    /// error and must not be coerced to a default.
    fn try_from(value: i64) -> Result<Self, AppError> {
        match value {
            1 => Ok(MarketTier::MajorMetro),
            2 => Ok(MarketTier::LargeMetro),
            3 => Ok(MarketTier::MidSizeCity),
            4 => Ok(MarketTier::SmallCity),
            other => Err(AppError::InvalidTier(other)),
        }
    }
}

impl std::fmt::Display for MarketTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_number(), self.label())
    }
}

// ---------------------------------------------------------------------------
// Capacity classification
// ---------------------------------------------------------------------------

/// User-facing status of an observed candidate-pool size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapacityStatus {
    TooLow,
    Good,
    SweetSpot,
    TooHigh,
}

impl CapacityStatus {
    /// Fixed guidance per status — independent of tier and count.
    pub fn guidance(self) -> &'static str {
        match self {
            CapacityStatus::TooLow => {
                "Insufficient for quality recommendations - expand criteria"
            }
            CapacityStatus::Good => "Good pool for quality recommendations",
            CapacityStatus::SweetSpot => {
                "Excellent pool for diverse, high-quality recommendations!"
            }
            CapacityStatus::TooHigh => "Too broad - recommendations may lack focus",
        }
    }
}

impl std::fmt::Display for CapacityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CapacityStatus::TooLow => "too-low",
            CapacityStatus::Good => "good",
            CapacityStatus::SweetSpot => "sweet-spot",
            CapacityStatus::TooHigh => "too-high",
        };
        write!(f, "{s}")
    }
}

/// The five contiguous segments of the capacity scale. The two good bands
/// report the same status but are distinct segments on the indicator bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityBand {
    TooLow,
    GoodLeft,
    SweetSpot,
    GoodRight,
    TooHigh,
}

impl CapacityBand {
    pub fn status(self) -> CapacityStatus {
        match self {
            CapacityBand::TooLow => CapacityStatus::TooLow,
            CapacityBand::GoodLeft | CapacityBand::GoodRight => CapacityStatus::Good,
            CapacityBand::SweetSpot => CapacityStatus::SweetSpot,
            CapacityBand::TooHigh => CapacityStatus::TooHigh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_from_size_rank_boundaries() {
        assert_eq!(MarketTier::from_size_rank(1), MarketTier::MajorMetro);
        assert_eq!(MarketTier::from_size_rank(25), MarketTier::MajorMetro);
        assert_eq!(MarketTier::from_size_rank(26), MarketTier::LargeMetro);
        assert_eq!(MarketTier::from_size_rank(100), MarketTier::LargeMetro);
        assert_eq!(MarketTier::from_size_rank(101), MarketTier::MidSizeCity);
        assert_eq!(MarketTier::from_size_rank(300), MarketTier::MidSizeCity);
        assert_eq!(MarketTier::from_size_rank(301), MarketTier::SmallCity);
        assert_eq!(MarketTier::from_size_rank(915), MarketTier::SmallCity);
    }

    #[test]
    fn tier_from_size_rank_is_monotonic() {
        let mut prev = MarketTier::from_size_rank(1);
        for rank in 2..=1000 {
            let tier = MarketTier::from_size_rank(rank);
            assert!(tier >= prev, "tier regressed at rank {rank}");
            prev = tier;
        }
    }

    #[test]
    fn fallback_tiering_thresholds() {
        assert_eq!(MarketTier::from_property_count(8000), MarketTier::MajorMetro);
        assert_eq!(MarketTier::from_property_count(7999), MarketTier::LargeMetro);
        assert_eq!(MarketTier::from_property_count(1500), MarketTier::LargeMetro);
        assert_eq!(MarketTier::from_property_count(1000), MarketTier::LargeMetro);
        assert_eq!(MarketTier::from_property_count(999), MarketTier::MidSizeCity);
        assert_eq!(MarketTier::from_property_count(300), MarketTier::MidSizeCity);
        assert_eq!(MarketTier::from_property_count(299), MarketTier::SmallCity);
        assert_eq!(MarketTier::from_property_count(0), MarketTier::SmallCity);
    }

    #[test]
    fn stored_tier_outside_range_is_rejected() {
        assert!(MarketTier::try_from(0).is_err());
        assert!(MarketTier::try_from(5).is_err());
        assert!(MarketTier::try_from(-1).is_err());
        assert_eq!(MarketTier::try_from(3).unwrap(), MarketTier::MidSizeCity);
    }

    #[test]
    fn good_bands_collapse_to_one_status() {
        assert_eq!(CapacityBand::GoodLeft.status(), CapacityStatus::Good);
        assert_eq!(CapacityBand::GoodRight.status(), CapacityStatus::Good);
    }
}
