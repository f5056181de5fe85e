//! Letter grade tables and the percent-to-grade resolver

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A letter grade, ordered from highest to lowest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LetterGrade {
    /// A+ (4.5)
    #[serde(rename = "A+")]
    APlus,
    /// A (4.0)
    #[serde(rename = "A")]
    A,
    /// B+ (3.5)
    #[serde(rename = "B+")]
    BPlus,
    /// B (3.0)
    #[serde(rename = "B")]
    B,
    /// C+ (2.5)
    #[serde(rename = "C+")]
    CPlus,
    /// C (2.0)
    #[serde(rename = "C")]
    C,
    /// D+ (1.5)
    #[serde(rename = "D+")]
    DPlus,
    /// D (1.0)
    #[serde(rename = "D")]
    D,
    /// F (0.0)
    #[serde(rename = "F")]
    F,
}

/// Grade table: (grade, grade points, lower bound of the percent band).
///
/// Bands are closed below and open above; each band ends where the previous
/// row's band begins. A+ has no upper bound.
const GRADE_TABLE: [(LetterGrade, f64, f64); 9] = [
    (LetterGrade::APlus, 4.5, 85.0),
    (LetterGrade::A, 4.0, 75.0),
    (LetterGrade::BPlus, 3.5, 65.0),
    (LetterGrade::B, 3.0, 55.0),
    (LetterGrade::CPlus, 2.5, 45.0),
    (LetterGrade::C, 2.0, 35.0),
    (LetterGrade::DPlus, 1.5, 25.0),
    (LetterGrade::D, 1.0, 15.0),
    (LetterGrade::F, 0.0, 0.0),
];

/// Error returned when a string is not a recognized letter grade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGrade(pub String);

impl fmt::Display for UnknownGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown letter grade: '{}'", self.0)
    }
}

impl std::error::Error for UnknownGrade {}

impl LetterGrade {
    /// All grades from highest to lowest
    pub const ALL: [Self; 9] = [
        Self::APlus,
        Self::A,
        Self::BPlus,
        Self::B,
        Self::CPlus,
        Self::C,
        Self::DPlus,
        Self::D,
        Self::F,
    ];

    const fn row(self) -> (Self, f64, f64) {
        GRADE_TABLE[self as usize]
    }

    /// Grade points for this grade, in `[0.0, 4.5]`
    #[must_use]
    pub const fn gpa(self) -> f64 {
        self.row().1
    }

    /// Representative final percent: the lower bound of this grade's band
    #[must_use]
    pub const fn final_percent(self) -> f64 {
        self.row().2
    }

    /// Display form, e.g. `"B+"`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the display form. Callers trim raw text first.
impl FromStr for LetterGrade {
    type Err = UnknownGrade;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|grade| grade.as_str() == s)
            .ok_or_else(|| UnknownGrade(s.to_string()))
    }
}

/// Look up grade points for a letter grade string.
///
/// Exact table lookup: returns `None` for anything that is not one of the
/// nine letter grades, including padded text such as `" A "`.
#[must_use]
pub fn grade_to_gpa(grade: &str) -> Option<f64> {
    grade.parse::<LetterGrade>().ok().map(LetterGrade::gpa)
}

/// Look up the representative final percent for a letter grade string.
///
/// Returns `None` for unrecognized input.
#[must_use]
pub fn grade_to_final_percent(grade: &str) -> Option<f64> {
    grade.parse::<LetterGrade>().ok().map(LetterGrade::final_percent)
}

/// Resolve a final percent to its letter grade.
///
/// The input is rounded to two decimal places before the band lookup so
/// values such as `84.999_999` land on `85.00`. Anything at or above the A+
/// lower bound is A+, including extra credit above 100.
///
/// Returns `None` for NaN or negative percents.
#[must_use]
pub fn percent_to_grade(percent: f64) -> Option<LetterGrade> {
    let rounded = (percent * 100.0).round() / 100.0;
    if rounded.is_nan() || rounded < 0.0 {
        return None;
    }
    GRADE_TABLE
        .iter()
        .find(|(_, _, low)| rounded >= *low)
        .map(|(grade, _, _)| *grade)
}
