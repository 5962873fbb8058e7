//! Bevy CLI
//!
//! Command-line interface for Bevy

use bevy_core::logging_facility;
use bevy_core::ShellConfig;
use std::io::{self, Write};

mod commands;

fn main() {
    let config = match ShellConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(profile) = config.log_profile {
        logging_facility::init(profile);
    }

    let root = match commands::build_root() {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = root
        .dispatch(std::env::args_os(), &mut out)
        .and_then(|_| out.flush().map_err(Into::into));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if e.is_usage_error() {
            eprintln!("Run '{} --help' for usage.", root.name());
        }
        std::process::exit(1);
    }
}
