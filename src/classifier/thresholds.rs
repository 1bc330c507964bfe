use serde::Serialize;

use crate::config::pool_midpoints;
use crate::types::{CapacityBand, MarketTier};

/// Count thresholds partitioning the capacity scale for one tier. Derived
/// fresh from the tier's pool midpoint on every call — never cached, never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierThresholds {
    /// Lower edge of the left good band.
    pub blue_lower: u32,
    /// Inclusive sweet-spot range.
    pub green_lower: u32,
    pub green_upper: u32,
    /// Upper edge of the right good band, placed so both good bands span the
    /// same absolute count (not the same percentage).
    pub blue_right_max: u32,
    /// Display ceiling of the indicator scale. Counts above it still
    /// classify as too-high; they just render pinned at the right edge.
    pub max_scale: u32,
}

impl TierThresholds {
    pub fn for_tier(tier: MarketTier) -> Self {
        let midpoint = f64::from(pool_midpoint(tier));
        let green_lower = (midpoint * 0.6).round() as u32;
        let green_upper = (midpoint * 1.4).round() as u32;
        let blue_lower = (f64::from(green_lower) * 0.8).round() as u32;
        let blue_left_range = green_lower - blue_lower;
        let blue_right_max = green_upper + blue_left_range;
        let max_scale = (f64::from(blue_right_max) * 1.3).round() as u32;
        Self {
            blue_lower,
            green_lower,
            green_upper,
            blue_right_max,
            max_scale,
        }
    }

    /// Which segment of the scale a count lands in. Lower edges are
    /// inclusive; together the bands cover every non-negative count exactly
    /// once.
    pub fn band_for(&self, count: u32) -> CapacityBand {
        if count < self.blue_lower {
            CapacityBand::TooLow
        } else if count < self.green_lower {
            CapacityBand::GoodLeft
        } else if count <= self.green_upper {
            CapacityBand::SweetSpot
        } else if count <= self.blue_right_max {
            CapacityBand::GoodRight
        } else {
            CapacityBand::TooHigh
        }
    }

    /// Marker position on the 0..max_scale indicator bar as a percentage,
    /// clamped to [2, 98] so the marker never renders off either edge.
    pub fn scale_position(&self, count: u32) -> f64 {
        let raw = f64::from(count) / f64::from(self.max_scale) * 100.0;
        raw.clamp(2.0, 98.0)
    }
}

fn pool_midpoint(tier: MarketTier) -> u32 {
    match tier {
        MarketTier::MajorMetro => pool_midpoints::TIER1,
        MarketTier::LargeMetro => pool_midpoints::TIER2,
        MarketTier::MidSizeCity => pool_midpoints::TIER3,
        MarketTier::SmallCity => pool_midpoints::TIER4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TIERS: [MarketTier; 4] = [
        MarketTier::MajorMetro,
        MarketTier::LargeMetro,
        MarketTier::MidSizeCity,
        MarketTier::SmallCity,
    ];

    #[test]
    fn tier1_thresholds_match_known_values() {
        let t = TierThresholds::for_tier(MarketTier::MajorMetro);
        assert_eq!(t.green_lower, 420);
        assert_eq!(t.green_upper, 980);
        assert_eq!(t.blue_lower, 336);
        assert_eq!(t.blue_right_max, 1064);
        assert_eq!(t.max_scale, 1383);
    }

    #[test]
    fn tier4_thresholds_match_known_values() {
        let t = TierThresholds::for_tier(MarketTier::SmallCity);
        assert_eq!(t.green_lower, 45);
        assert_eq!(t.green_upper, 105);
        assert_eq!(t.blue_lower, 36);
        assert_eq!(t.blue_right_max, 114);
    }

    #[test]
    fn thresholds_are_ordered_for_every_tier() {
        for tier in ALL_TIERS {
            let t = TierThresholds::for_tier(tier);
            assert!(t.blue_lower < t.green_lower, "{tier:?}");
            assert!(t.green_lower < t.green_upper, "{tier:?}");
            assert!(t.green_upper < t.blue_right_max, "{tier:?}");
            assert!(t.blue_right_max < t.max_scale, "{tier:?}");
        }
    }

    #[test]
    fn good_bands_have_equal_absolute_width() {
        for tier in ALL_TIERS {
            let t = TierThresholds::for_tier(tier);
            assert_eq!(
                t.blue_right_max - t.green_upper,
                t.green_lower - t.blue_lower,
                "{tier:?}"
            );
        }
    }

    #[test]
    fn bands_partition_every_count() {
        // Walking counts upward must visit the five bands in order, each
        // exactly once — no gaps, no overlaps, no going back.
        use CapacityBand::*;
        for tier in ALL_TIERS {
            let t = TierThresholds::for_tier(tier);
            let expected = [TooLow, GoodLeft, SweetSpot, GoodRight, TooHigh];
            let mut seen = vec![t.band_for(0)];
            for count in 1..=t.max_scale + 100 {
                let band = t.band_for(count);
                if band != *seen.last().unwrap() {
                    seen.push(band);
                }
            }
            assert_eq!(seen, expected, "{tier:?}");
        }
    }

    #[test]
    fn scale_position_clamps_to_visible_range() {
        let t = TierThresholds::for_tier(MarketTier::SmallCity);
        assert_eq!(t.scale_position(0), 2.0);
        assert_eq!(t.scale_position(1), 2.0);
        assert_eq!(t.scale_position(100_000), 98.0);
        let mid = t.scale_position(t.max_scale / 2);
        assert!((49.0..51.0).contains(&mid), "mid={mid}");
    }
}
