// crates/shared-kernel/src/lib.rs
pub use error::{
    DomainError, DomainResult, ErrorContext, InputError, InputResult, PresentationError,
    PresentationResult, PrimeRangeError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::PrimeCount;
