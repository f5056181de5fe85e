//! GPA command handler

use super::load_courses;
use gradepoint::grades::summarize;
use gradepoint::models::Course;
use gradepoint::{info, verbose};
use std::path::Path;

/// Compute and print the GPA for a course file
///
/// # Errors
/// Returns a message when the file cannot be read or parsed.
pub fn run(file: &Path) -> Result<(), String> {
    let courses = load_courses(file).map_err(|e| format!("✗ Failed to load {}: {e}", file.display()))?;
    info!("Loaded {} course(s) from {}", courses.len(), file.display());
    print_summary(&courses);
    Ok(())
}

/// Print the per-course breakdown followed by the GPA
pub fn print_summary(courses: &[Course]) {
    let summary = summarize(courses);

    for c in &summary.contributions {
        println!(
            "  {:<36} {:>4} cr  {:.1}{}",
            c.name,
            c.credits,
            c.base,
            if c.boost > 0.0 {
                format!(" + {:.1}", c.boost)
            } else {
                String::new()
            }
        );
    }
    for name in &summary.ungraded {
        verbose!("  {name:<36} (no grade, skipped)");
    }

    println!("GPA: {}", summary.formatted());
}
