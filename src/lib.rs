//! Library for `gradepoint`
//! Grade conversion, GPA aggregation and the local multi-user grade cache.
//! The `gradepoint` CLI is a thin driver over this crate.

pub mod core;
pub mod logger;

pub use core::{cache, config, extract, get_version, grades, models, store};
