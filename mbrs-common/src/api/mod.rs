//! API request and response types

pub mod types;

pub use types::*;
