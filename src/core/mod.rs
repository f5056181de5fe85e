//! Core module for grade computation and caching

pub mod cache;
pub mod config;
pub mod error;
pub mod extract;
pub mod grades;
pub mod models;
pub mod store;

pub use error::StoreError;

/// Returns the current version of the `gradepoint` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
