//! Trace market resolution and capacity classification for a coordinate.
//!
//! Usage: `diagnose <lat> <lng> <property_count>`
//!
//! Loads the catalog from CATALOG_PATH (JSON snapshot) when set, otherwise
//! from the market_rental_data table in DB_PATH, then reports the nearest
//! regions, the resolution outcome, and the capacity classification.

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use market_capacity::catalog::loader;
use market_capacity::classifier::classify;
use market_capacity::config::{Config, PROPERTY_COUNT_CAP};
use market_capacity::error::{AppError, Result};
use market_capacity::resolver::{rank_by_distance, resolve};
use market_capacity::types::MarketTier;

#[tokio::main]
async fn main() {
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .init();

    if let Err(e) = run(cfg).await {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run(cfg: Config) -> Result<()> {
    let (lat, lng, raw_count) = parse_args()?;

    let catalog = match &cfg.catalog_path {
        Some(path) => loader::load_from_json(path)?,
        None => {
            let pool = sqlx::SqlitePool::connect(&format!("sqlite:{}", cfg.db_path)).await?;
            loader::load_from_db(&pool).await?
        }
    };

    let observed = raw_count.min(PROPERTY_COUNT_CAP);
    if observed < raw_count {
        info!("Observed count capped at {PROPERTY_COUNT_CAP} (provider result limit)");
    }

    info!("Nearest market regions to ({lat}, {lng}):");
    for entry in rank_by_distance(lat, lng, &catalog).iter().take(15) {
        let coverage = if entry.within_radius { "within" } else { "outside" };
        info!(
            "  {} — {:.2} mi ({} {:.0} mi radius) | tier {} | rank {}",
            entry.record.city_state,
            entry.distance_miles,
            coverage,
            entry.record.radius_miles,
            entry.record.tier,
            entry.record.size_rank,
        );
    }

    let tier = match resolve(lat, lng, &catalog) {
        Some(m) => {
            info!(
                "Resolved to {} (region {}) at {:.2} mi — tier {}",
                m.record.city_state, m.record.region_id, m.distance_miles, m.record.tier,
            );
            m.record.tier
        }
        None => {
            let tier = MarketTier::from_property_count(observed);
            warn!(
                "No market region covers this coordinate — fallback tiering from \
                 count {observed} gives tier {tier}",
            );
            tier
        }
    };

    let result = classify(tier, observed);
    let t = result.thresholds;
    info!(
        "Capacity: count {} → {} | sweet spot {}-{} | good {}-{} and {}-{} | \
         scale 0-{} (marker at {:.1}%)",
        observed,
        result.status,
        t.green_lower,
        t.green_upper,
        t.blue_lower,
        t.green_lower - 1,
        t.green_upper + 1,
        t.blue_right_max,
        t.max_scale,
        t.scale_position(observed),
    );
    info!("{}", result.message);

    Ok(())
}

/// Coordinate validation happens here, before the resolver sees anything —
/// the core assumes pre-validated numeric input.
fn parse_args() -> Result<(f64, f64, u32)> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 3 {
        return Err(AppError::Config(
            "usage: diagnose <lat> <lng> <property_count>".to_string(),
        ));
    }

    let lat = args[0]
        .parse::<f64>()
        .map_err(|_| AppError::Config(format!("invalid latitude: {}", args[0])))?;
    let lng = args[1]
        .parse::<f64>()
        .map_err(|_| AppError::Config(format!("invalid longitude: {}", args[1])))?;
    let count = args[2]
        .parse::<u32>()
        .map_err(|_| AppError::Config(format!("invalid property count: {}", args[2])))?;

    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(AppError::Config(format!("latitude out of range: {lat}")));
    }
    if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
        return Err(AppError::Config(format!("longitude out of range: {lng}")));
    }

    Ok((lat, lng, count))
}
