//! CLI argument definitions for `gradepoint`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gradepoint::config::ConfigOverrides;
use gradepoint::logger::Level;

/// CLI log level argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key to display (e.g., `level`, `store_file`, `user`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum ConvertSubcommand {
    /// Show grade points and representative percent for a letter grade.
    Grade {
        /// Letter grade (A+, A, B+, B, C+, C, D+, D, F)
        #[arg(value_name = "LETTER")]
        letter: String,
    },
    /// Show the letter grade for a final percent.
    Percent {
        /// Final percent
        #[arg(value_name = "VALUE", allow_negative_numbers = true)]
        value: f64,
    },
}

#[derive(Debug, Subcommand)]
pub enum CacheSubcommand {
    /// Show cached courses for a user (defaults to the configured or most recent user).
    Show {
        /// Username
        #[arg(value_name = "USER")]
        user: Option<String>,
    },
    /// Merge courses from a JSON file with the cache and save them for a user.
    Save {
        /// Username
        #[arg(value_name = "USER")]
        user: String,
        /// JSON file holding a list of course records
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Replace the cached list instead of merging with it
        #[arg(long)]
        replace: bool,
    },
    /// List users with cached courses.
    Users,
}

#[derive(Debug, Subcommand)]
pub enum WeightingSubcommand {
    /// Show the category weighting saved for a course.
    Get {
        /// Course title
        #[arg(value_name = "COURSE")]
        course: String,
    },
    /// Set one category's weight for a course, keeping the other categories.
    Set {
        /// Course title
        #[arg(value_name = "COURSE")]
        course: String,
        /// Category name
        #[arg(value_name = "CATEGORY")]
        category: String,
        /// Category weight
        #[arg(value_name = "WEIGHT")]
        weight: f64,
    },
}

#[derive(Debug, Subcommand)]
pub enum SettingsSubcommand {
    /// Display stored settings.
    Get,
    /// Set a stored toggle (opted_in, showExtensionInfo, percent_main_page).
    Set {
        /// Toggle name
        #[arg(value_name = "NAME")]
        name: String,
        /// New value (true/false)
        #[arg(value_name = "VALUE", value_parser = BoolishValueParser::new())]
        value: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Convert between letter grades, grade points and percents.
    Convert {
        #[command(subcommand)]
        subcommand: ConvertSubcommand,
    },
    /// Show the credit multiplier and boost for a course.
    Policy {
        /// Course name (e.g., "AP Biology")
        #[arg(value_name = "COURSE")]
        course: String,
        /// Letter grade used for the boost check
        #[arg(short, long, value_name = "LETTER")]
        grade: Option<String>,
    },
    /// Compute GPA from a JSON file of course records.
    Gpa {
        /// JSON file holding a list of course records
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Inspect and update the per-user grade cache.
    Cache {
        #[command(subcommand)]
        subcommand: CacheSubcommand,
    },
    /// Manage per-course category weighting.
    Weighting {
        #[command(subcommand)]
        subcommand: WeightingSubcommand,
    },
    /// Manage stored toggles.
    ///
    /// If no subcommand is provided, displays the stored settings.
    Settings {
        #[command(subcommand)]
        subcommand: Option<SettingsSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gradepoint",
    about = "GPA calculator and local grade cache",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the store file for this run
    #[arg(long = "store-file", value_name = "PATH")]
    pub store_file: Option<PathBuf>,

    /// Override the default user for this run
    #[arg(long, value_name = "USER")]
    pub user: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: None,
            verbose: self.config_verbose,
            store_file: self
                .store_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            user: self.user.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_verbose: None,
            store_file: None,
            user: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare(Command::Config { subcommand: None }).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.store_file.is_none());
        assert!(overrides.user.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare(Command::Cache {
            subcommand: CacheSubcommand::Users,
        });
        cli.config_level = Some(LogLevelArg::Info);
        cli.store_file = Some(PathBuf::from("/tmp/store.json"));
        cli.user = Some("alice".to_string());

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("info".to_string()));
        assert_eq!(overrides.store_file, Some("/tmp/store.json".to_string()));
        assert_eq!(overrides.user, Some("alice".to_string()));
    }

    #[test]
    fn test_parse_cache_save() {
        let cli = Cli::parse_from(["gradepoint", "--user", "bob", "cache", "save", "alice", "grades.json", "--replace"]);
        match cli.command {
            Command::Cache {
                subcommand: CacheSubcommand::Save { user, file, replace },
            } => {
                assert_eq!(user, "alice");
                assert_eq!(file, PathBuf::from("grades.json"));
                assert!(replace);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.user.as_deref(), Some("bob"));
    }

    #[test]
    fn test_parse_negative_percent() {
        let cli = Cli::parse_from(["gradepoint", "convert", "percent", "-3"]);
        assert!(matches!(
            cli.command,
            Command::Convert {
                subcommand: ConvertSubcommand::Percent { value }
            } if value < 0.0
        ));
    }
}
