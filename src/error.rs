use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("invalid market tier {0} (expected 1-4)")]
    InvalidTier(i64),

    #[error(
        "market {region_id}: stored tier {stored} disagrees with tier {derived} \
         derived from size rank {size_rank}"
    )]
    TierMismatch {
        region_id: i64,
        stored: i64,
        derived: u8,
        size_rank: u32,
    },

    #[error("market {region_id}: coordinate ({latitude}, {longitude}) out of range")]
    InvalidCoordinate {
        region_id: i64,
        latitude: f64,
        longitude: f64,
    },

    #[error("catalog error: {0}")]
    Catalog(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
