pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown max rank tier {token:?}; expected a bare tier from the canonical list (F..UR)")]
    UnknownMaxRank { token: String },

    #[error("Invalid stat name {name:?}: {reason}")]
    InvalidStatName { name: String, reason: &'static str },

    #[error("Stat index {index} out of bounds (stat set has {len} records)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Invalid stat sheet JSON: {0}")]
    SheetJson(#[from] serde_json::Error),
}
