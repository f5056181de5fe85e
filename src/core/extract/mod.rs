//! Input boundary for extracted page rows and remote lookup records
//!
//! Collaborators hand over already-extracted values; this module only
//! validates them and assembles model records.

pub mod api;
pub mod rows;

pub use api::{assignments_from_lookup, parse_lookup_response, AssignmentLookup, AssignmentSection, ScoreRecord};
pub use rows::{
    class_assignment_from_row, class_assignments_from_rows, course_from_row, parse_percent_text,
    CourseRow, PageCell, PageRow,
};
