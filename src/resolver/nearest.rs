use crate::catalog::MarketCatalog;
use crate::resolver::distance::haversine_miles;
use crate::types::MarketRecord;

/// A catalog record matched to a target coordinate.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedMarket<'a> {
    pub record: &'a MarketRecord,
    pub distance_miles: f64,
}

/// Nearest catalog market whose radius covers the target coordinate.
///
/// Full linear scan — the catalog is low thousands of rows, well under the
/// cost of anything worth indexing. Returns None when no market's radius
/// covers the target; callers then fall back to count-based tiering
/// ([`MarketTier::from_property_count`](crate::types::MarketTier::from_property_count)).
///
/// Strict `<` on the running minimum keeps the first record on an exact
/// distance tie, so the result is deterministic for a fixed catalog order.
pub fn resolve(
    target_lat: f64,
    target_lng: f64,
    catalog: &MarketCatalog,
) -> Option<ResolvedMarket<'_>> {
    let mut best: Option<ResolvedMarket<'_>> = None;
    for record in catalog.all_markets() {
        let distance_miles =
            haversine_miles(target_lat, target_lng, record.latitude, record.longitude);
        if distance_miles > record.radius_miles {
            continue;
        }
        let improves = match &best {
            Some(current) => distance_miles < current.distance_miles,
            None => true,
        };
        if improves {
            best = Some(ResolvedMarket {
                record,
                distance_miles,
            });
        }
    }
    best
}

/// A catalog record with its distance to a target, whether or not the radius
/// covers it.
#[derive(Debug, Clone, Copy)]
pub struct RankedMarket<'a> {
    pub record: &'a MarketRecord,
    pub distance_miles: f64,
    pub within_radius: bool,
}

/// Every catalog record ranked by distance to the target, nearest first.
/// Diagnostics only — shows near misses that `resolve` filters out.
pub fn rank_by_distance(
    target_lat: f64,
    target_lng: f64,
    catalog: &MarketCatalog,
) -> Vec<RankedMarket<'_>> {
    let mut ranked: Vec<RankedMarket<'_>> = catalog
        .all_markets()
        .iter()
        .map(|record| {
            let distance_miles =
                haversine_miles(target_lat, target_lng, record.latitude, record.longitude);
            RankedMarket {
                record,
                distance_miles,
                within_radius: distance_miles <= record.radius_miles,
            }
        })
        .collect();
    ranked.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
    ranked
}
