use thiserror::Error;

/// Caller misuse rejected at the engine boundary
///
/// Missing or unknown profile data is never an error; it scores with the
/// documented fallbacks instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompatibilityError {
    #[error("Invalid limit: top matches requires n >= 1, got {0}")]
    InvalidLimit(usize),

    #[error("Score out of range: {field} = {value} is outside [0, 1]")]
    ScoreOutOfRange { field: &'static str, value: f64 },
}
