//! Convert and policy command handlers

use crate::args::ConvertSubcommand;
use gradepoint::grades::{course_boost, credit_hours, percent_to_grade, LetterGrade};

/// Run a conversion
///
/// # Errors
/// Returns a message when the input has no conversion.
pub fn run(subcommand: &ConvertSubcommand) -> Result<(), String> {
    match subcommand {
        ConvertSubcommand::Grade { letter } => {
            let grade: LetterGrade = letter.trim().parse().map_err(|e| format!("✗ {e}"))?;
            println!("{grade}: {:.1} grade points, {:.0}% or above", grade.gpa(), grade.final_percent());
        }
        ConvertSubcommand::Percent { value } => {
            let grade =
                percent_to_grade(*value).ok_or_else(|| format!("✗ No letter grade for {value}%"))?;
            println!("{value}% → {grade} ({:.1} grade points)", grade.gpa());
        }
    }
    Ok(())
}

/// Show credit multiplier and boost for a course
///
/// # Errors
/// Returns a message when the grade is not a letter grade.
pub fn policy(course: &str, grade: Option<&str>) -> Result<(), String> {
    println!("{course}: {} credit(s)", credit_hours(course));
    if let Some(letter) = grade {
        let grade: LetterGrade = letter.trim().parse().map_err(|e| format!("✗ {e}"))?;
        let boost = course_boost(course, grade);
        println!(
            "  {grade}: {:.1} + {boost:.1} boost = {:.1}",
            grade.gpa(),
            grade.gpa() + boost
        );
    }
    Ok(())
}
