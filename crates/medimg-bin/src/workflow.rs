/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{debug, info};
use medimg::reader::{read_with_options, HostImage};
use medimg::writer::write;
use medimg_core::buffer::{DenseBuffer, Layout};
use medimg_core::options::ReaderOptions;

use crate::cmd_args::arg_parsers::MetadataLevelArg;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CmdErrors;
use crate::file_io::{read_raw_f64, verify_output_path, write_raw_f64};
use crate::probe_files::probe_input_files;
use crate::serde::ReadReport;

fn required<'a, T: Clone + Send + Sync + 'static>(
    args: &'a ArgMatches, name: &str
) -> Result<&'a T, CmdErrors> {
    args.get_one::<T>(name)
        .ok_or_else(|| CmdErrors::Generic(format!("Missing argument --{name}")))
}

/// Run whichever subcommand was given on the command line
pub(crate) fn run_subcommand(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), CmdErrors> {
    match args.subcommand() {
        Some(("probe", sub)) => probe_input_files(sub),
        Some(("read", sub)) => read_command(sub, cmd_opts),
        Some(("write", sub)) => write_command(sub, cmd_opts),
        Some(("convert", sub)) => convert_command(sub, cmd_opts),
        Some((name, _)) => Err(CmdErrors::Generic(format!("Unknown command {name}"))),
        None => Err(CmdErrors::Generic("No command given".to_string()))
    }
}

fn read_command(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), CmdErrors> {
    let in_file = required::<PathBuf>(args, "in")?;
    let level = required::<MetadataLevelArg>(args, "level")?.to_metadata_level();
    let raw = args.get_one::<PathBuf>("raw");

    if let Some(raw) = raw {
        verify_output_path(Some(in_file), raw, cmd_opts.override_files)?;
    }
    let options = ReaderOptions::default().set_metadata_level(level);
    let image = read_with_options(in_file, options)?;

    println!(
        "{}",
        serde_json::to_string_pretty(&ReadReport::new(in_file, &image))?
    );

    if let Some(raw) = raw {
        write_raw_f64(raw, image.buffer.data())?;
    }
    Ok(())
}

fn write_command(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), CmdErrors> {
    let raw = required::<PathBuf>(args, "raw")?;
    let out_file = required::<PathBuf>(args, "out")?;

    verify_output_path(Some(raw), out_file, cmd_opts.override_files)?;

    let shape = required::<Vec<usize>>(args, "shape")?;
    let values = read_raw_f64(raw)?;

    debug!("Read {} values from {:?}", values.len(), raw);

    let buffer = DenseBuffer::new(values, shape.clone(), Layout::HostLayout)?;

    write_buffer(args, buffer, out_file)
}

fn write_buffer(args: &ArgMatches, buffer: DenseBuffer, out_file: &Path) -> Result<(), CmdErrors> {
    let origin = required::<Vec<f64>>(args, "origin")?;
    let spacing = required::<Vec<f64>>(args, "spacing")?;
    let direction = required::<Vec<f64>>(args, "direction")?;
    let kind = required::<String>(args, "kind")?;

    write(out_file, buffer, origin, spacing, direction, kind)?;
    info!("Wrote {:?}", out_file);

    Ok(())
}

fn convert_command(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), CmdErrors> {
    let in_file = required::<PathBuf>(args, "in")?;
    let out_file = required::<PathBuf>(args, "out")?;
    let kind = required::<String>(args, "kind")?;

    verify_output_path(Some(in_file), out_file, cmd_opts.override_files)?;

    // direction is passed straight back to the writer
    let image = read_with_options(in_file, ReaderOptions::default().set_warn_direction(false))?;

    let HostImage {
        buffer,
        origin,
        spacing,
        direction,
        ..
    } = image;

    let (Some(origin), Some(spacing), Some(direction)) = (origin, spacing, direction) else {
        return Err(CmdErrors::Generic(format!(
            "{in_file:?} was read without spatial metadata"
        )));
    };
    write(out_file, buffer, &origin, &spacing, &direction, kind)?;
    info!("Converted {:?} to {:?}", in_file, out_file);

    Ok(())
}
