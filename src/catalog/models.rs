//! Raw record shapes as they arrive from storage, before boundary validation
//! turns them into well-typed [`MarketRecord`](crate::types::MarketRecord)s.

use serde::Deserialize;

/// Database row matching the externally maintained market_rental_data table.
/// Used by sqlx for typed queries. Nullable columns stay Option here — the
/// loader decides what is skippable and what aborts the load.
#[derive(Debug, sqlx::FromRow)]
pub struct MarketRentalRow {
    pub region_id: i64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius: Option<f64>,
    pub size_rank: Option<i64>,
    pub market_tier: Option<i64>,
    pub city_state: Option<String>,
    pub monthly_rental_average: Option<f64>,
    pub yoy_growth: Option<f64>,
}

/// One record of a JSON catalog snapshot file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMarketRecord {
    pub region_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    /// Match radius in miles.
    pub radius: f64,
    pub size_rank: u32,
    /// Stored tier, cross-checked against the tier derived from size_rank.
    #[serde(default)]
    pub market_tier: Option<i64>,
    #[serde(default)]
    pub city_state: String,
    #[serde(default)]
    pub monthly_rental_average: Option<f64>,
    #[serde(default)]
    pub yoy_growth: Option<f64>,
}
