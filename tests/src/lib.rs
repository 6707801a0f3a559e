/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Integration tests for the reader and writer pipelines
//!
//! Every test works on files in the system temporary directory,
//! named after the test so tests can run in parallel.
#![allow(unused_imports, unused)]

use std::path::{Path, PathBuf};

use medimg_core::buffer::{DenseBuffer, Layout};
use nifti::NiftiHeader;
use ndarray::{Array, IxDyn, ShapeBuilder};

mod boundaries;
mod metadata;
mod round_trip;

/// Identity direction, flattened
pub const IDENTITY: [f64; 9] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

/// A fresh path in the temporary directory, any file
/// left over from an earlier run is removed.
pub fn scratch_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("medimg-tests-{name}"));

    for stale in [path.clone(), sibling(&path, ".img"), sibling(&path, ".hdr")] {
        let _ = std::fs::remove_file(stale);
    }
    path
}

/// `path` with its last extension replaced by `extension`
pub fn sibling(path: &Path, extension: &str) -> PathBuf {
    let name = path.file_name().unwrap().to_str().unwrap();
    let stem = name.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(name);

    path.with_file_name(format!("{stem}{extension}"))
}

/// A host layout buffer whose pixels are `0, 1, 2, ...`
pub fn counting_buffer(shape: &[usize]) -> DenseBuffer {
    let len = shape.iter().product::<usize>();
    let data = (0..len).map(|x| x as f64).collect();

    DenseBuffer::new(data, shape.to_vec(), Layout::HostLayout).unwrap()
}

/// Write `native` pixels (first axis fastest) with the nifti library directly,
/// bypassing the writer pipeline.
pub fn write_raw_nifti(path: &Path, dims: &[usize], native: Vec<f32>, header: &NiftiHeader) {
    let array = Array::from_shape_vec(IxDyn(dims).f(), native).unwrap();

    nifti::writer::WriterOptions::new(path)
        .reference_header(header)
        .write_nifti(&array)
        .unwrap();
}
