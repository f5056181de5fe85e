//! Weighting command handler

use super::open_cache;
use crate::args::WeightingSubcommand;
use gradepoint::config::Config;
use gradepoint::models::{CategoryConfig, CategoryWeighting};

/// Dispatch weighting subcommands
///
/// # Errors
/// Returns a printable message on failure.
pub fn run(subcommand: WeightingSubcommand, config: &Config) -> Result<(), String> {
    let mut cache = open_cache(config);
    match subcommand {
        WeightingSubcommand::Get { course } => {
            let weighting = cache
                .get_weighting(&course)
                .ok_or_else(|| format!("✗ No weighting saved for {course}"))?;
            if weighting.is_empty() {
                println!("{course}: (no categories)");
            }
            for (category, entry) in &weighting {
                let weight = entry.weight.map_or_else(|| "(no weight)".to_string(), |w| w.to_string());
                match entry.manual_percent {
                    Some(manual) => println!("{category}: {weight} (manual {manual}%)"),
                    None => println!("{category}: {weight}"),
                }
            }
            Ok(())
        }
        WeightingSubcommand::Set {
            course,
            category,
            weight,
        } => {
            if !weight.is_finite() || weight < 0.0 {
                return Err(format!("✗ Invalid weight: {weight}"));
            }
            let mut weighting = match cache.get_weighting(&course) {
                Some(weighting) => weighting,
                None if cache.has_weighting(&course) => {
                    return Err(format!(
                        "✗ Stored weighting for {course} is unreadable; not overwriting it"
                    ));
                }
                None => CategoryWeighting::new(),
            };
            weighting
                .entry(category.clone())
                .and_modify(|entry| entry.set_weight(weight))
                .or_insert_with(|| CategoryConfig::weighted(weight));
            cache
                .save_weighting(&course, &weighting)
                .map_err(|e| format!("✗ Failed to save weighting for {course}: {e}"))?;
            println!("✓ {course}: {category} = {weight}");
            Ok(())
        }
    }
}
