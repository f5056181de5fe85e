//! GPA aggregation

use super::policy::{course_boost, credit_hours};
use crate::core::models::Course;

/// One graded course's contribution to the GPA
#[derive(Debug, Clone, PartialEq)]
pub struct CourseContribution {
    /// Course name
    pub name: String,
    /// Credit-hour multiplier
    pub credits: f64,
    /// Base grade points
    pub base: f64,
    /// Additive boost
    pub boost: f64,
}

impl CourseContribution {
    /// Boosted grade points before credit weighting
    #[must_use]
    pub fn points(&self) -> f64 {
        self.base + self.boost
    }
}

/// GPA with the per-course breakdown it was computed from
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GpaSummary {
    /// Graded courses in input order
    pub contributions: Vec<CourseContribution>,
    /// Names of courses skipped for lack of a grade
    pub ungraded: Vec<String>,
    /// Sum of credits over graded courses
    pub total_credits: f64,
    /// Credit-weighted sum of boosted grade points
    pub weighted_sum: f64,
}

impl GpaSummary {
    /// Weighted GPA, or `0.0` when nothing is graded
    #[must_use]
    pub fn gpa(&self) -> f64 {
        if self.total_credits == 0.0 {
            0.0
        } else {
            self.weighted_sum / self.total_credits
        }
    }

    /// GPA formatted to two decimals
    #[must_use]
    pub fn formatted(&self) -> String {
        format!("{:.2}", self.gpa())
    }
}

/// Compute the GPA breakdown for a set of courses.
///
/// Courses without a recognized grade are left out of both the credit total
/// and the weighted sum.
#[must_use]
pub fn summarize(courses: &[Course]) -> GpaSummary {
    let mut summary = GpaSummary::default();

    for course in courses {
        let Some(grade) = course.grade else {
            summary.ungraded.push(course.name.clone());
            continue;
        };

        let contribution = CourseContribution {
            name: course.name.clone(),
            credits: credit_hours(&course.name),
            base: grade.gpa(),
            boost: course_boost(&course.name, grade),
        };
        summary.total_credits += contribution.credits;
        summary.weighted_sum += contribution.credits * contribution.points();
        summary.contributions.push(contribution);
    }

    summary
}

/// Weighted GPA of `courses`, formatted to two decimals (`"0.00"` if none are graded)
///
/// # Examples
/// ```
/// use gradepoint::grades::{calculate_gpa, LetterGrade};
/// use gradepoint::models::Course;
///
/// let courses = vec![
///     Course::new("Math".into(), String::new(), Some(LetterGrade::A), None),
///     Course::new("AP Biology".into(), String::new(), Some(LetterGrade::APlus), None),
/// ];
/// assert_eq!(calculate_gpa(&courses), "4.50");
/// ```
#[must_use]
pub fn calculate_gpa(courses: &[Course]) -> String {
    summarize(courses).formatted()
}
