// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum PrimeRangeError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<PrimeRangeError>,
    },

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, PrimeRangeError>;

/// Violations of the `0 <= start <= end` range invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("start {start} is greater than end {end}")]
    RangeOrder { start: i32, end: i32 },

    #[error("range [{start}, {end}] contains a negative bound")]
    NegativeBound { start: i32, end: i32 },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Recoverable input problems. Each one sends the prompt loop back to the
/// first question; the `Display` text is what the user sees after `Error: `.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid input. Please enter integer values.")]
    Parse { token: String },

    #[error("Start of the range must be less than or equal to the end of the range.")]
    RangeOrder { start: i32, end: i32 },

    #[error("Range values must be non-negative.")]
    NegativeBound { start: i32, end: i32 },
}

pub type InputResult<T> = std::result::Result<T, InputError>;

impl From<DomainError> for InputError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::RangeOrder { start, end } => Self::RangeOrder { start, end },
            DomainError::NegativeBound { start, end } => Self::NegativeBound { start, end },
        }
    }
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Failed to serialize {format} output: {details}")]
    Serialization { format: String, details: String },

    #[error("Failed to write output: {message}")]
    Output {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for PresentationError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<serde_json::Error> for PresentationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<PrimeRangeError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| PrimeRangeError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
