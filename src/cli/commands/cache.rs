//! Cache command handler

use super::{gpa::print_summary, load_courses, open_cache};
use crate::args::CacheSubcommand;
use gradepoint::config::Config;
use gradepoint::models::Course;
use gradepoint::{error, verbose};

/// Dispatch cache subcommands
///
/// # Errors
/// Returns a printable message on failure.
pub fn run(subcommand: CacheSubcommand, config: &Config) -> Result<(), String> {
    match subcommand {
        CacheSubcommand::Show { user } => show(user, config),
        CacheSubcommand::Save { user, file, replace } => {
            let fresh = load_courses(&file)
                .map_err(|e| format!("✗ Failed to load {}: {e}", file.display()))?;
            let mut cache = open_cache(config);
            let saved = if replace {
                cache.save_user_courses(&user, &fresh).map(|()| fresh)
            } else {
                cache.refresh_user_courses(&user, fresh)
            }
            .map_err(|e| {
                error!("Saving courses for '{user}' failed: {e}");
                format!("✗ Failed to save courses for {user}: {e}")
            })?;
            println!("✓ Saved {} course(s) for {user}", saved.len());
            Ok(())
        }
        CacheSubcommand::Users => {
            let cache = open_cache(config);
            let recent = cache.most_recent_user();
            for name in cache.cached_users() {
                let marker = if recent.as_deref() == Some(name.as_str()) { " *" } else { "" };
                println!("{name}{marker}");
            }
            Ok(())
        }
    }
}

fn show(user: Option<String>, config: &Config) -> Result<(), String> {
    let cache = open_cache(config);
    let user = user
        .or_else(|| Some(config.store.user.clone()).filter(|u| !u.is_empty()))
        .or_else(|| cache.most_recent_user())
        .ok_or("✗ No user given and no user has been cached yet")?;

    let courses = cache
        .load_user_courses(&user)
        .ok_or_else(|| format!("✗ No cached courses for {user}"))?;

    println!("\n=== Cached courses for {user} ===\n");
    for course in &courses {
        print_course(course);
    }
    println!();
    print_summary(&courses);
    Ok(())
}

fn print_course(course: &Course) {
    let grade = course.grade.map_or_else(|| "--".to_string(), |g| g.to_string());
    let percent = course
        .final_percent
        .map_or_else(String::new, |p| format!(" ({p:.2}%)"));
    println!("{} {grade}{percent}", course.name);
    for assignment in &course.assignments {
        let flags: Vec<String> = assignment
            .flags()
            .iter()
            .map(ToString::to_string)
            .collect();
        verbose!(
            "    #{:<3} {:<32} {:>10} {}",
            assignment.index(),
            assignment.name(),
            assignment.score().to_string(),
            flags.join(",")
        );
    }
}
