//! Command-line interface entry point for `gradepoint`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use gradepoint::config::Config;
use gradepoint::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use gradepoint::{debug, info};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins, then config logging.level, then warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }
    debug!("Using store file {}", config.store.file);

    let result = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &mut config, &defaults),
        Command::Convert { subcommand } => commands::convert::run(&subcommand),
        Command::Policy { course, grade } => commands::convert::policy(&course, grade.as_deref()),
        Command::Gpa { file } => commands::gpa::run(&file),
        Command::Cache { subcommand } => commands::cache::run(subcommand, &config),
        Command::Weighting { subcommand } => commands::weighting::run(subcommand, &config),
        Command::Settings { subcommand } => commands::settings::run(subcommand, &config),
    };

    if let Err(message) = result {
        eprintln!("{message}");
        std::process::exit(1);
    }
}
