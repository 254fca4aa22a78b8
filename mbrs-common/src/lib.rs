//! # MBRS Common Library
//!
//! Shared code for the membership record service:
//! - Database schema, connection setup and row models
//! - API request/response types
//! - Bootstrap configuration loading
//! - Calendar helpers for subscription coverage

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod time;

pub use error::{Error, Result};
