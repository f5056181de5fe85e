//! Final percent from class assignments under a category weighting

use crate::core::models::{CategoryWeighting, ClassAssignment};
use std::collections::BTreeMap;

/// Points earned and possible per category, over rows that count toward the grade.
///
/// Rows without an `earned/possible` score (not due, ungraded) are skipped.
#[must_use]
pub fn category_totals(rows: &[ClassAssignment]) -> BTreeMap<String, (f64, f64)> {
    let mut totals: BTreeMap<String, (f64, f64)> = BTreeMap::new();
    for row in rows.iter().filter(|r| r.counts_toward_grade()) {
        if let Some((earned, possible)) = row.assignment().score().points() {
            let entry = totals.entry(row.category().to_string()).or_default();
            entry.0 += earned;
            entry.1 += possible;
        }
    }
    totals
}

/// Category-weighted final percent.
///
/// Each weighted category contributes its manual percent when one is set,
/// otherwise its earned/possible ratio. Categories with no graded work and no
/// manual percent drop out and the remaining weights are renormalized.
/// Categories missing from `weighting` or without a positive weight are ignored.
///
/// Returns `None` when no weighted category has anything to contribute.
#[must_use]
pub fn weighted_final_percent(rows: &[ClassAssignment], weighting: &CategoryWeighting) -> Option<f64> {
    let totals = category_totals(rows);
    let mut weight_sum = 0.0;
    let mut weighted = 0.0;

    for (category, config) in weighting {
        let Some(weight) = config.weight.filter(|w| *w > 0.0) else {
            continue;
        };
        let percent = config.manual_percent.or_else(|| {
            totals
                .get(category)
                .map(|(earned, possible)| earned / possible * 100.0)
        });
        if let Some(percent) = percent {
            weight_sum += weight;
            weighted += weight * percent;
        }
    }

    (weight_sum > 0.0).then(|| weighted / weight_sum)
}
