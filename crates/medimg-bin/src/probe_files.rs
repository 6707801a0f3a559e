/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;
use log::{info, warn};
use medimg::probe::probe_with_format;

use crate::errors::CmdErrors;
use crate::serde::ProbeReport;

/// Probe input files, extract metadata, and print to standard output.
///
/// Files that cannot be probed are reported and skipped
pub fn probe_input_files(args: &ArgMatches) -> Result<(), CmdErrors> {
    let Some(files) = args.get_many::<PathBuf>("in") else {
        return Ok(());
    };
    let mut failures = 0;

    for in_file in files {
        match probe_with_format(in_file) {
            Ok((format, descriptor)) => {
                let size = in_file.metadata()?.len();
                let report = ProbeReport::new(in_file, size, format, &descriptor);

                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            Err(reason) => {
                warn!("Could not probe {:?}: {:?}", in_file, reason);
                failures += 1;
            }
        }
    }
    info!("Probed files, {} failures", failures);

    if failures > 0 {
        return Err(CmdErrors::Generic(format!(
            "{failures} file(s) could not be probed"
        )));
    }
    Ok(())
}
