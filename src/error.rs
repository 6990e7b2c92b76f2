/// Errors surfaced by dungeon generation and config loading.
#[derive(thiserror::Error, Debug)]
pub enum DungeonError {
    /// Config values that would make room or split sampling impossible
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Map side below the leaf floor or above the supported maximum
    #[error("map {width}x{height} is out of range; each side must be within {min}..={max}")]
    InvalidMapSize { width: i32, height: i32, min: i32, max: i32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DungeonError>;
