use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::catalog::models::{MarketRentalRow, RawMarketRecord};
use crate::catalog::store::MarketCatalog;
use crate::error::{AppError, Result};
use crate::types::{MarketRecord, MarketTier};

/// Load the full catalog from the market_rental_data table.
///
/// Rows without coordinates are skipped — the dataset has partial coverage
/// and those regions can never match a proximity search anyway. Rows that
/// parse but violate an invariant (bad coordinate range, non-positive
/// radius or rank, stored tier disagreeing with the derived one) abort the
/// load: a silently misclassified market would corrupt every downstream
/// pool-sizing decision.
pub async fn load_from_db(pool: &SqlitePool) -> Result<MarketCatalog> {
    let rows = sqlx::query_as::<_, MarketRentalRow>(
        r#"
        SELECT region_id, latitude, longitude, radius, size_rank, market_tier,
               city_state, monthly_rental_average, yoy_growth
        FROM market_rental_data
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut raw = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;
    for row in rows {
        let (Some(latitude), Some(longitude), Some(radius), Some(size_rank)) =
            (row.latitude, row.longitude, row.radius, row.size_rank)
        else {
            skipped += 1;
            continue;
        };
        let size_rank = u32::try_from(size_rank).map_err(|_| {
            AppError::Catalog(format!(
                "market {}: negative size_rank {size_rank}",
                row.region_id
            ))
        })?;
        raw.push(RawMarketRecord {
            region_id: row.region_id,
            latitude,
            longitude,
            radius,
            size_rank,
            market_tier: row.market_tier,
            city_state: row.city_state.unwrap_or_default(),
            monthly_rental_average: row.monthly_rental_average,
            yoy_growth: row.yoy_growth,
        });
    }
    if skipped > 0 {
        warn!("Catalog load skipped {skipped} rows without coordinates");
    }

    let catalog = build_catalog(raw)?;
    info!("Catalog loaded from database: {} market regions", catalog.len());
    Ok(catalog)
}

/// Load the catalog from a JSON snapshot file (an array of records).
pub fn load_from_json(path: &str) -> Result<MarketCatalog> {
    let data = std::fs::read_to_string(path)?;
    let raw: Vec<RawMarketRecord> = serde_json::from_str(&data)?;
    let catalog = build_catalog(raw)?;
    info!("Catalog loaded from {path}: {} market regions", catalog.len());
    Ok(catalog)
}

/// Validate raw records and assemble the immutable catalog, preserving input
/// order (resolution tie-breaking depends on it).
pub fn build_catalog(raw: Vec<RawMarketRecord>) -> Result<MarketCatalog> {
    let mut records = Vec::with_capacity(raw.len());
    for record in raw {
        records.push(validate_record(record)?);
    }
    Ok(MarketCatalog::new(records))
}

fn validate_record(raw: RawMarketRecord) -> Result<MarketRecord> {
    if !raw.latitude.is_finite()
        || !raw.longitude.is_finite()
        || !(-90.0..=90.0).contains(&raw.latitude)
        || !(-180.0..=180.0).contains(&raw.longitude)
    {
        return Err(AppError::InvalidCoordinate {
            region_id: raw.region_id,
            latitude: raw.latitude,
            longitude: raw.longitude,
        });
    }
    if !raw.radius.is_finite() || raw.radius <= 0.0 {
        return Err(AppError::Catalog(format!(
            "market {}: non-positive radius {}",
            raw.region_id, raw.radius
        )));
    }
    if raw.size_rank == 0 {
        return Err(AppError::Catalog(format!(
            "market {}: size_rank must be positive",
            raw.region_id
        )));
    }

    let tier = MarketTier::from_size_rank(raw.size_rank);
    if let Some(stored) = raw.market_tier {
        let stored_tier = MarketTier::try_from(stored)?;
        if stored_tier != tier {
            return Err(AppError::TierMismatch {
                region_id: raw.region_id,
                stored,
                derived: tier.as_number(),
                size_rank: raw.size_rank,
            });
        }
    }

    Ok(MarketRecord {
        region_id: raw.region_id,
        latitude: raw.latitude,
        longitude: raw.longitude,
        radius_miles: raw.radius,
        size_rank: raw.size_rank,
        tier,
        city_state: raw.city_state,
        monthly_rental_average: raw.monthly_rental_average,
        yoy_growth: raw.yoy_growth,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(region_id: i64, lat: f64, lng: f64, radius: f64, size_rank: u32) -> RawMarketRecord {
        RawMarketRecord {
            region_id,
            latitude: lat,
            longitude: lng,
            radius,
            size_rank,
            market_tier: None,
            city_state: String::new(),
            monthly_rental_average: None,
            yoy_growth: None,
        }
    }

    #[test]
    fn derives_tier_from_size_rank() {
        let catalog = build_catalog(vec![raw(1, 40.7, -74.0, 50.0, 1)]).unwrap();
        assert_eq!(catalog.all_markets()[0].tier, MarketTier::MajorMetro);
    }

    #[test]
    fn consistent_stored_tier_is_accepted() {
        let mut record = raw(1, 40.7, -74.0, 50.0, 150);
        record.market_tier = Some(3);
        let catalog = build_catalog(vec![record]).unwrap();
        assert_eq!(catalog.all_markets()[0].tier, MarketTier::MidSizeCity);
    }

    #[test]
    fn stale_stored_tier_aborts_load() {
        // rank 150 derives tier 3; a stored tier 2 is a data-integrity bug
        let mut record = raw(7, 40.7, -74.0, 50.0, 150);
        record.market_tier = Some(2);
        let err = build_catalog(vec![record]).unwrap_err();
        assert!(matches!(
            err,
            AppError::TierMismatch { region_id: 7, stored: 2, derived: 3, size_rank: 150 }
        ));
    }

    #[test]
    fn out_of_range_coordinate_is_rejected() {
        assert!(build_catalog(vec![raw(1, 91.0, 0.0, 25.0, 10)]).is_err());
        assert!(build_catalog(vec![raw(1, 0.0, -181.0, 25.0, 10)]).is_err());
        assert!(build_catalog(vec![raw(1, f64::NAN, 0.0, 25.0, 10)]).is_err());
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        assert!(build_catalog(vec![raw(1, 40.7, -74.0, 0.0, 10)]).is_err());
        assert!(build_catalog(vec![raw(1, 40.7, -74.0, -5.0, 10)]).is_err());
    }

    #[test]
    fn json_snapshot_parses() {
        let data = r#"[
            {"region_id": 394913, "latitude": 40.7128, "longitude": -74.006,
             "radius": 50.0, "size_rank": 1, "market_tier": 1,
             "city_state": "New York, NY", "monthly_rental_average": 3450.0}
        ]"#;
        let raw: Vec<RawMarketRecord> = serde_json::from_str(data).unwrap();
        let catalog = build_catalog(raw).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.all_markets()[0].city_state, "New York, NY");
    }
}
