//! Typed records from the remote assignment lookup endpoint

use crate::core::models::{Assignment, Score, StatusFlag};
use serde::{Deserialize, Serialize};

/// Placeholder score for sections with nothing entered
pub const NO_SCORE: &str = "--";

/// One score record for an assignment section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Score as entered by the instructor, if any
    #[serde(default)]
    pub actualscoreentered: Option<Score>,
    /// Whether the assignment is flagged missing
    #[serde(default)]
    pub ismissing: bool,
}

/// An assignment section: a named assignment and its score records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentSection {
    /// Assignment name
    pub name: String,
    /// Score records; only the first is used
    #[serde(rename = "_assignmentscores", default)]
    pub scores: Vec<ScoreRecord>,
}

/// One record of the lookup response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentLookup {
    /// Sections for a student/section/date-range tuple
    #[serde(rename = "_assignmentsections", default)]
    pub sections: Vec<AssignmentSection>,
}

impl AssignmentSection {
    /// Assignment from this section's first score record.
    ///
    /// A section with no score records, or no entered score, gets [`NO_SCORE`].
    #[must_use]
    pub fn to_assignment(&self, index: usize) -> Assignment {
        let first = self.scores.first();
        let score = first
            .and_then(|record| record.actualscoreentered.clone())
            .unwrap_or_else(|| Score::from(NO_SCORE));
        let flags = first
            .filter(|record| record.ismissing)
            .map(|_| StatusFlag::Missing);
        Assignment::new(self.name.clone(), score, index, flags)
    }
}

/// Assignments from every section of every record, indexed in response order
#[must_use]
pub fn assignments_from_lookup(records: &[AssignmentLookup]) -> Vec<Assignment> {
    records
        .iter()
        .flat_map(|record| record.sections.iter())
        .enumerate()
        .map(|(index, section)| section.to_assignment(index))
        .collect()
}

/// Parse a lookup response body.
///
/// Returns `None` if the body is not a JSON array of lookup records.
#[must_use]
pub fn parse_lookup_response(body: &str) -> Option<Vec<AssignmentLookup>> {
    serde_json::from_str(body).ok()
}
