/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub override_files: bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            override_files: false
        }
    }
}

/// Extract options shared by every subcommand
pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    let yes_source = options
        .subcommand()
        .and_then(|(_, sub)| sub.value_source("all-yes"))
        .or_else(|| options.value_source("all-yes"));

    if yes_source == Some(ValueSource::CommandLine) {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    cmd_options
}

fn flag_set(options: &ArgMatches, name: &str) -> bool {
    options.get_flag(name)
        || options
            .subcommand()
            .map(|(_, sub)| sub.get_flag(name))
            .unwrap_or(false)
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if flag_set(options, "debug") {
        Level::Debug
    } else if flag_set(options, "trace") {
        Level::Trace
    } else if flag_set(options, "warn") {
        Level::Warn
    } else if flag_set(options, "info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
        return;
    }
    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
