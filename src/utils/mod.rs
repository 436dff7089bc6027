//! Shared utilities used throughout the application:
//!
//! - [`errors`]: Application error type and the fixed JSON error contract
//! - [`pagination`]: Fixed-size page slicing for question listings
//! - [`random`]: Injectable randomness source for quiz selection
//! - [`serde`]: Custom serde deserialization helpers

pub mod errors;
pub mod pagination;
pub mod random;
pub mod serde;
