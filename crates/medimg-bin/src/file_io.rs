/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Raw buffer files and output path checks
use std::fs;
use std::path::Path;

use log::info;

use crate::errors::CmdErrors;

const F64_SIZE: usize = core::mem::size_of::<f64>();

/// Refuse to clobber existing files unless asked to
pub fn verify_output_path(input: Option<&Path>, output: &Path, override_files: bool) -> Result<(), CmdErrors> {
    if let Some(input) = input {
        if !input.is_file() {
            return Err(CmdErrors::Generic(format!("Path {input:?} is not a file")));
        }
        if input == output {
            return Err(CmdErrors::Generic(format!(
                "Cannot use {input:?} as both input and output"
            )));
        }
    }
    if output.exists() {
        if !override_files {
            return Err(CmdErrors::Generic(format!(
                "File {output:?} exists, pass -y to overwrite it"
            )));
        }
        info!("Overwriting path {:?}", output);
    }
    Ok(())
}

/// Read native endian `f64` values from `path`
pub fn read_raw_f64(path: &Path) -> Result<Vec<f64>, CmdErrors> {
    let bytes = fs::read(path)?;

    if bytes.len() % F64_SIZE != 0 {
        return Err(CmdErrors::Generic(format!(
            "{path:?} holds {} bytes, not a whole number of f64 values",
            bytes.len()
        )));
    }
    let mut values = vec![0.0_f64; bytes.len() / F64_SIZE];
    bytemuck::cast_slice_mut::<f64, u8>(&mut values).copy_from_slice(&bytes);

    Ok(values)
}

/// Write `values` as native endian bytes to `path`
pub fn write_raw_f64(path: &Path, values: &[f64]) -> Result<(), CmdErrors> {
    fs::write(path, bytemuck::cast_slice::<f64, u8>(values))?;
    info!("Wrote {} values to {:?}", values.len(), path);

    Ok(())
}
