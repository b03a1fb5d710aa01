use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShortSparkError {
    #[error("Invalid brief: {reason}")]
    InvalidBrief { reason: String },

    #[error("Cannot schedule {beat_count} beats across {duration}s")]
    InvalidSchedule { duration: u32, beat_count: usize },

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShortSparkError>;
