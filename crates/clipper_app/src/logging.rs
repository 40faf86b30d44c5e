//! Logger initialization for the clipper binary.
//!
//! The interactive screen owns the terminal, so its logs go to
//! `./clipper.log`; one-shot commands log to the terminal instead.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, TermLogger, TerminalMode, WriteLogger,
};

const LOG_FILENAME: &str = "./clipper.log";

/// File logger for the interactive screen.
pub fn init_file_logger() {
    let config = build_config();
    let log_path = PathBuf::from(LOG_FILENAME);
    match File::create(&log_path) {
        Ok(file) => {
            let _ = CombinedLogger::init(vec![WriteLogger::new(
                LevelFilter::Info,
                config,
                file,
            )]);
        }
        Err(err) => {
            eprintln!("Warning: Could not create log file at {log_path:?}: {err}");
        }
    }
}

/// Terminal logger for one-shot commands; warnings and errors only, so
/// command output stays readable.
pub fn init_terminal_logger() {
    let _ = CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Warn,
        build_config(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
