//! Assignment models

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Status indicator shown beside an assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusFlag {
    /// Turned in
    Collected,
    /// Turned in late
    Late,
    /// Not turned in
    Missing,
    /// Exempt from grading
    Exempt,
    /// Student was absent
    Absent,
    /// Partially completed
    Incomplete,
    /// Excluded from the final grade
    Excluded,
}

impl StatusFlag {
    /// Flags in class-detail column order
    pub const ALL: [Self; 7] = [
        Self::Collected,
        Self::Late,
        Self::Missing,
        Self::Exempt,
        Self::Absent,
        Self::Incomplete,
        Self::Excluded,
    ];

    /// Persisted name, e.g. `"MISSING"`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Collected => "COLLECTED",
            Self::Late => "LATE",
            Self::Missing => "MISSING",
            Self::Exempt => "EXEMPT",
            Self::Absent => "ABSENT",
            Self::Incomplete => "INCOMPLETE",
            Self::Excluded => "EXCLUDED",
        }
    }
}

impl fmt::Display for StatusFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A score as reported: points or a free-text marker such as `"Not Due"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    /// Numeric score
    Number(f64),
    /// Text as displayed, e.g. `"18/20"`, `"--"`, `"Not Due"`
    Text(String),
}

impl Score {
    /// Earned and possible points when the score reads `earned/possible`.
    ///
    /// Returns `None` for bare numbers, markers and zero-point assignments.
    #[must_use]
    pub fn points(&self) -> Option<(f64, f64)> {
        let Self::Text(text) = self else {
            return None;
        };
        let (earned, possible) = text.split_once('/')?;
        let earned: f64 = earned.trim().parse().ok()?;
        let possible: f64 = possible.trim().parse().ok()?;
        if possible <= 0.0 {
            return None;
        }
        Some((earned, possible))
    }
}

impl From<&str> for Score {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(t) => f.write_str(t),
        }
    }
}

/// An assignment within a course, identified by its index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    name: String,
    score: Score,
    index: usize,
    #[serde(default)]
    flags: BTreeSet<StatusFlag>,
}

impl Assignment {
    /// Create an assignment from already-extracted values
    #[must_use]
    pub fn new(
        name: String,
        score: Score,
        index: usize,
        flags: impl IntoIterator<Item = StatusFlag>,
    ) -> Self {
        Self {
            name,
            score,
            index,
            flags: flags.into_iter().collect(),
        }
    }

    /// Assignment name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Score as reported
    #[must_use]
    pub const fn score(&self) -> &Score {
        &self.score
    }

    /// Position within the course
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Status flags
    #[must_use]
    pub const fn flags(&self) -> &BTreeSet<StatusFlag> {
        &self.flags
    }

    /// Whether a status flag is set
    #[must_use]
    pub fn has(&self, flag: StatusFlag) -> bool {
        self.flags.contains(&flag)
    }
}

/// The seven indicator slots of a class-detail row
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicators {
    /// Collected icon visible
    pub collected: bool,
    /// Late icon visible
    pub late: bool,
    /// Missing icon visible
    pub missing: bool,
    /// Exempt icon visible
    pub exempt: bool,
    /// Absent icon visible
    pub absent: bool,
    /// Incomplete icon visible
    pub incomplete: bool,
    /// Excluded icon visible
    pub excluded: bool,
}

impl Indicators {
    /// Build from the slots in column order
    #[must_use]
    pub const fn from_slots(slots: [bool; 7]) -> Self {
        Self {
            collected: slots[0],
            late: slots[1],
            missing: slots[2],
            exempt: slots[3],
            absent: slots[4],
            incomplete: slots[5],
            excluded: slots[6],
        }
    }

    /// Slots in column order
    #[must_use]
    pub const fn slots(self) -> [bool; 7] {
        [
            self.collected,
            self.late,
            self.missing,
            self.exempt,
            self.absent,
            self.incomplete,
            self.excluded,
        ]
    }

    /// Flags whose indicator is set
    pub fn flags(self) -> impl Iterator<Item = StatusFlag> {
        StatusFlag::ALL
            .into_iter()
            .zip(self.slots())
            .filter_map(|(flag, set)| set.then_some(flag))
    }
}

/// An assignment row from a single class's detail table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassAssignment {
    assignment: Assignment,
    due_date: String,
    category: String,
    percent: Option<f64>,
    indicators: Indicators,
}

impl ClassAssignment {
    /// Create a class assignment. The assignment's flags are exactly the set indicators.
    #[must_use]
    pub fn new(
        name: String,
        score: Score,
        index: usize,
        due_date: String,
        category: String,
        percent: Option<f64>,
        indicators: Indicators,
    ) -> Self {
        Self {
            assignment: Assignment::new(name, score, index, indicators.flags()),
            due_date,
            category,
            percent,
            indicators,
        }
    }

    /// The underlying assignment
    #[must_use]
    pub const fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Due date as displayed
    #[must_use]
    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    /// Grading category
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Percent shown in the row, if it parsed
    #[must_use]
    pub const fn percent(&self) -> Option<f64> {
        self.percent
    }

    /// Indicator slots
    #[must_use]
    pub const fn indicators(&self) -> Indicators {
        self.indicators
    }

    /// Whether the row should count toward a computed grade
    #[must_use]
    pub const fn counts_toward_grade(&self) -> bool {
        !(self.indicators.exempt || self.indicators.excluded)
    }

    /// Consume into the plain assignment
    #[must_use]
    pub fn into_assignment(self) -> Assignment {
        self.assignment
    }
}
