//! Error type shared by the matrix, engine, and loader.

use thiserror::Error as ThisError;

/// Everything that can stop a solve or a load.
///
/// Input-shape variants are raised before the recurrence starts.
/// [`Error::MissingState`], [`Error::DuplicateState`] and [`Error::Internal`]
/// signal a broken engine invariant and are never expected on valid input.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("need at least 2 cities, got {cities}")]
    TooFewCities { cities: usize },
    #[error("matrix is not square: {rows} rows but row {row} has {len} entries")]
    NotSquare { rows: usize, row: usize, len: usize },
    #[error("expected {size}x{size} = {} entries, got {len}", .size * .size)]
    InvalidDataLength { size: usize, len: usize },
    #[error("invalid distance {value} from {from} to {to}")]
    InvalidDistance { from: usize, to: usize, value: f64 },
    #[error("{cities} cities exceeds the limit of {max}")]
    TooManyCities { cities: usize, max: usize },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("cannot allocate a memo table of {slots} slots")]
    MemoAllocation { slots: usize },
    #[error("no memo entry for state (visited={visited:#b}, city={city})")]
    MissingState { visited: u32, city: usize },
    #[error("memo entry for state (visited={visited:#b}, city={city}) written twice")]
    DuplicateState { visited: u32, city: usize },
    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns `true` for the variants that indicate an engine bug rather
    /// than bad input.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::MissingState { .. } | Self::DuplicateState { .. } | Self::Internal(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = Error::TooFewCities { cities: 1 };
        assert_eq!(e.to_string(), "need at least 2 cities, got 1");

        let e = Error::InvalidDataLength { size: 3, len: 8 };
        assert_eq!(e.to_string(), "expected 3x3 = 9 entries, got 8");

        let e = Error::parse(4, "missing y coordinate");
        assert_eq!(e.to_string(), "line 4: missing y coordinate");
    }

    #[test]
    fn test_invariant_classification() {
        assert!(Error::MissingState { visited: 0b110, city: 2 }.is_invariant_violation());
        assert!(Error::DuplicateState { visited: 0b10, city: 1 }.is_invariant_violation());
        assert!(Error::internal("bad walk").is_invariant_violation());
        assert!(!Error::TooManyCities { cities: 40, max: 20 }.is_invariant_violation());
        assert!(!Error::MemoAllocation { slots: 1 << 29 }.is_invariant_violation());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e: Error = io.into();
        assert!(matches!(e, Error::Io(_)));
    }
}
