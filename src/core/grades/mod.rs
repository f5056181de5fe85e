//! Grade conversion, credit policy and GPA aggregation

pub mod gpa;
pub mod letter;
pub mod policy;
pub mod weighted;

pub use gpa::{calculate_gpa, summarize, CourseContribution, GpaSummary};
pub use letter::{grade_to_final_percent, grade_to_gpa, percent_to_grade, LetterGrade, UnknownGrade};
pub use policy::{course_boost, credit_hours};
pub use weighted::weighted_final_percent;
