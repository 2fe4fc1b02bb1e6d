// tests/common/mod.rs
//! Shared helpers for driving sessions over in-memory streams.


#[allow(unused_imports)]
pub use helpers::*;
