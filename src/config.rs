use crate::error::{AppError, Result};

/// Earth radius in miles, used by the Haversine distance calculation.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// The upstream property search caps result counts at this value, so any
/// observed count at the cap means "at least this many".
pub const PROPERTY_COUNT_CAP: u32 = 8000;

/// Property-count thresholds for tiering a location when no catalog market
/// covers the target coordinate. A count at or above TIERn_MIN classifies as
/// tier n; below TIER3_MIN falls through to tier 4.
pub mod fallback_thresholds {
    pub const TIER1_MIN: u32 = 8000;
    pub const TIER2_MIN: u32 = 1000;
    pub const TIER3_MIN: u32 = 300;
}

/// Ideal candidate-pool size per tier. Empirically chosen product constants —
/// the capacity bands are derived from these, never the other way around.
pub mod pool_midpoints {
    pub const TIER1: u32 = 700;
    pub const TIER2: u32 = 300;
    pub const TIER3: u32 = 175;
    pub const TIER4: u32 = 75;
}

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database holding the market_rental_data table (DB_PATH).
    pub db_path: String,
    /// Optional JSON catalog snapshot; takes precedence over the database
    /// when set (CATALOG_PATH).
    pub catalog_path: Option<String>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let catalog_path = match std::env::var("CATALOG_PATH") {
            Ok(p) if !p.trim().is_empty() => Some(p),
            Ok(_) => None,
            Err(std::env::VarError::NotPresent) => None,
            Err(e) => {
                return Err(AppError::Config(format!("CATALOG_PATH unreadable: {e}")));
            }
        };

        Ok(Self {
            db_path: std::env::var("DB_PATH").unwrap_or_else(|_| "markets.db".to_string()),
            catalog_path,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
