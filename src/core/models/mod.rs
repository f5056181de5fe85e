//! Data models for courses, assignments and category weighting

pub mod assignment;
pub mod category;
pub mod course;

pub use assignment::{Assignment, ClassAssignment, Indicators, Score, StatusFlag};
pub use category::{CategoryConfig, CategoryWeighting};
pub use course::Course;
