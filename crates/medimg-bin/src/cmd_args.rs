/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::arg_parsers::{parse_f64_list, parse_usize_list, MetadataLevelArg};
use crate::cmd_args::help_strings::{DIRECTION_HELP, KIND_HELP, LEVEL_HELP, WRITE_HELP};

pub mod arg_parsers;
pub mod help_strings;

fn input_arg() -> Arg {
    Arg::new("in")
        .short('i')
        .long("input")
        .help("Input file to read data from")
        .value_parser(value_parser!(PathBuf))
        .required(true)
}

fn output_arg() -> Arg {
    Arg::new("out")
        .short('o')
        .long("output")
        .help("Output file to write the image to")
        .long_help("Output file to write the image to.\nThe extension picks the format, .nii, .nii.gz, .hdr and .img are understood")
        .value_parser(value_parser!(PathBuf))
        .required(true)
}

fn kind_arg() -> Arg {
    Arg::new("kind")
        .long("kind")
        .help("Pixel encoding of the written file")
        .long_help(KIND_HELP)
        .default_value("float")
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("medimg")
        .about("Read and write medical images in host array order")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("probe")
            .about("Print what an image looks like without decoding it")
            .arg(input_arg()
                .action(ArgAction::Append)))
        .subcommand(Command::new("read")
            .about("Read an image into host layout and print its metadata")
            .arg(input_arg())
            .arg(Arg::new("raw")
                .long("raw")
                .help("Dump the host ordered pixels as native endian f64 to this file")
                .value_parser(value_parser!(PathBuf)))
            .arg(Arg::new("level")
                .long("level")
                .help("How much metadata to extract")
                .long_help(LEVEL_HELP)
                .value_parser(value_parser!(MetadataLevelArg))
                .default_value("full")))
        .subcommand(Command::new("write")
            .about("Write a raw host ordered f64 buffer as an image")
            .long_about(WRITE_HELP)
            .arg(Arg::new("raw")
                .long("raw")
                .help("Native endian f64 pixels, column-major over the shape")
                .value_parser(value_parser!(PathBuf))
                .required(true))
            .arg(Arg::new("shape")
                .long("shape")
                .help("Host order shape, e.g 64,64,32")
                .value_parser(parse_usize_list)
                .required(true))
            .arg(Arg::new("origin")
                .long("origin")
                .help("Host order origin")
                .value_parser(parse_f64_list)
                .default_value("0,0,0"))
            .arg(Arg::new("spacing")
                .long("spacing")
                .help("Host order spacing")
                .value_parser(parse_f64_list)
                .default_value("1,1,1"))
            .arg(Arg::new("direction")
                .long("direction")
                .help("Direction cosines, 9 values flattened column-major")
                .long_help(DIRECTION_HELP)
                .value_parser(parse_f64_list)
                .default_value("1,0,0,0,1,0,0,0,1"))
            .arg(kind_arg())
            .arg(output_arg()))
        .subcommand(Command::new("convert")
            .about("Read an image and write it back with another encoding or format")
            .arg(input_arg())
            .arg(output_arg())
            .arg(kind_arg()))
        .arg(Arg::new("all-yes")
            .short('y')
            .long("yes")
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Overwrite existing output files"))
        .arg(Arg::new("debug")
            .long("debug")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about what the pipelines are doing"))
}
