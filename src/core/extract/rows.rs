//! Assembly of model values from already-extracted page rows

use crate::core::grades::LetterGrade;
use crate::core::models::{ClassAssignment, Course, Indicators, Score};
use serde::{Deserialize, Serialize};

/// Cells in a class-detail row without the optional leading cell
pub const CLASS_ROW_LEN: usize = 13;

const DUE_DATE: usize = 0;
const CATEGORY: usize = 1;
const NAME: usize = 2;
const FIRST_INDICATOR: usize = 3;
const SCORE: usize = 10;
const PERCENT: usize = 11;

/// One table cell as the page collaborator saw it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCell {
    /// Text content, untrimmed
    #[serde(default)]
    pub text: String,
    /// Whether the cell's status icon is visible
    #[serde(default)]
    pub icon_visible: bool,
}

impl PageCell {
    /// Text-only cell
    #[must_use]
    pub fn text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            icon_visible: false,
        }
    }

    /// Indicator cell
    #[must_use]
    pub const fn icon(visible: bool) -> Self {
        Self {
            text: String::new(),
            icon_visible: visible,
        }
    }
}

/// A table row as a list of cells
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRow {
    /// Cells in display order
    pub cells: Vec<PageCell>,
}

impl PageRow {
    /// Column offset for this row: `0` for the normal layout, `1` when a
    /// leading cell was added, `None` for any other length.
    #[must_use]
    pub fn column_offset(&self) -> Option<usize> {
        match self.cells.len() {
            CLASS_ROW_LEN => Some(0),
            n if n == CLASS_ROW_LEN + 1 => Some(1),
            _ => None,
        }
    }

    fn cell_text(&self, offset: usize, column: usize) -> &str {
        self.cells
            .get(offset + column)
            .map_or("", |cell| cell.text.trim())
    }
}

/// A course row from the main grades page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRow {
    /// Course name
    pub name: String,
    /// Detail page link
    #[serde(default)]
    pub link: String,
    /// Letter grade text, e.g. `"B+"` or `"--"`
    #[serde(default)]
    pub grade_text: String,
    /// Percent text, e.g. `"67.50"` or `"67.5%"`
    #[serde(default)]
    pub percent_text: String,
}

/// Parse percent text such as `"87.30"`, `"87.3%"` or `" 90 "`.
///
/// Returns `None` for empty text, placeholders like `"--"` and anything else
/// that is not a finite number.
#[must_use]
pub fn parse_percent_text(text: &str) -> Option<f64> {
    let cleaned = text.trim().trim_end_matches('%').trim();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Build a class assignment from a detail row.
///
/// Returns `None` when the row length matches neither layout or the name cell is empty.
#[must_use]
pub fn class_assignment_from_row(row: &PageRow, index: usize) -> Option<ClassAssignment> {
    let offset = row.column_offset()?;
    let name = row.cell_text(offset, NAME);
    if name.is_empty() {
        return None;
    }

    let mut slots = [false; 7];
    for (i, slot) in slots.iter_mut().enumerate() {
        *slot = row
            .cells
            .get(offset + FIRST_INDICATOR + i)
            .is_some_and(|cell| cell.icon_visible);
    }

    Some(ClassAssignment::new(
        name.to_string(),
        Score::from(row.cell_text(offset, SCORE)),
        index,
        row.cell_text(offset, DUE_DATE).to_string(),
        row.cell_text(offset, CATEGORY).to_string(),
        parse_percent_text(row.cell_text(offset, PERCENT)),
        Indicators::from_slots(slots),
    ))
}

/// Build class assignments from a detail table, indexed by row position.
///
/// Rows that do not fit the layout are skipped; the indices of the rest are
/// unaffected.
#[must_use]
pub fn class_assignments_from_rows(rows: &[PageRow]) -> Vec<ClassAssignment> {
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| class_assignment_from_row(row, index))
        .collect()
}

/// Build a course from a main-page row. Unparseable grade or percent text becomes `None`.
#[must_use]
pub fn course_from_row(row: &CourseRow) -> Course {
    Course::new(
        row.name.trim().to_string(),
        row.link.trim().to_string(),
        row.grade_text.trim().parse::<LetterGrade>().ok(),
        parse_percent_text(&row.percent_text),
    )
}
