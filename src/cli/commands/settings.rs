//! Settings command handler

use super::open_cache;
use crate::args::SettingsSubcommand;
use gradepoint::config::Config;

/// Dispatch settings subcommands
///
/// # Errors
/// Returns a printable message on failure.
pub fn run(subcommand: Option<SettingsSubcommand>, config: &Config) -> Result<(), String> {
    let mut cache = open_cache(config);
    let mut settings = cache
        .load_settings()
        .map_err(|e| format!("✗ Failed to read {}: {e}", config.store.file))?;

    match subcommand {
        None | Some(SettingsSubcommand::Get) => print!("{settings}"),
        Some(SettingsSubcommand::Set { name, value }) => {
            settings.set_toggle(&name, value).map_err(|e| format!("✗ {e}"))?;
            cache
                .save_settings(&settings)
                .map_err(|e| format!("✗ Failed to write {}: {e}", config.store.file))?;
            println!("✓ Set {name} = {value}");
        }
    }
    Ok(())
}
