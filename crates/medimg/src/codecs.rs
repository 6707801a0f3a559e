/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry point for all supported codecs the library understands
//!
//! Decoders are chosen by file content, encoders by file name,
//! a file written as `out.nii.gz` is a gzip compressed NIfTI-1 file.
//!
//! # Adding a format
//! - implement [`DecoderTrait`] and [`EncoderTrait`] in a module under `codecs`
//! - add a variant to [`ImageFormat`] and teach [`guess_format`] its signature
//! - map its extensions in [`ImageFormat::encoder_for_path`]
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use medimg_core::errors::MedImageErrors;
use medimg_core::log::trace;

use crate::traits::{DecoderTrait, EncoderTrait};

pub mod nifti;

/// Leading bytes of a gzip stream
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// All supported image formats
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ImageFormat {
    /// Neuroimaging Informatics Technology Initiative, version 1
    Nifti,
    /// Any unknown format
    Unknown
}

impl ImageFormat {
    pub const fn name(self) -> &'static str {
        match self {
            ImageFormat::Nifti => "nifti-1",
            ImageFormat::Unknown => "unknown"
        }
    }

    /// Create a decoder reading from `path`
    pub fn decoder<P: AsRef<Path>>(&self, path: P) -> Result<Box<dyn DecoderTrait>, MedImageErrors> {
        match self {
            ImageFormat::Nifti => Ok(Box::new(nifti::NiftiDecoder::new(path))),
            ImageFormat::Unknown => Err(MedImageErrors::UnreadableFormat(format!(
                "No decoder for {:?}",
                path.as_ref()
            )))
        }
    }

    /// Create an encoder writing to `path`
    pub fn encoder<P: AsRef<Path>>(&self, path: P) -> Result<Box<dyn EncoderTrait>, MedImageErrors> {
        match self {
            ImageFormat::Nifti => Ok(Box::new(nifti::NiftiEncoder::new(path))),
            ImageFormat::Unknown => Err(MedImageErrors::EncodeFailure(format!(
                "No encoder for {:?}",
                path.as_ref()
            )))
        }
    }

    pub fn guess_format<P: AsRef<Path>>(path: P) -> Option<ImageFormat> {
        guess_format(path)
    }

    /// Pick an encoder from the file name.
    ///
    /// Matching ignores ASCII case and understands double
    /// extensions such as `.nii.gz`
    pub fn encoder_for_path<P: AsRef<Path>>(path: P) -> Option<ImageFormat> {
        let name = path.as_ref().file_name()?.to_str()?.to_ascii_lowercase();

        if nifti::EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
            return Some(ImageFormat::Nifti);
        }
        None
    }
}

/// Read up to `length` leading bytes of a file, decompressing
/// gzip streams on the fly.
pub(crate) fn read_leading_bytes(path: &Path, length: usize) -> std::io::Result<Vec<u8>> {
    let mut raw = Vec::with_capacity(length);
    File::open(path)?.take(length as u64).read_to_end(&mut raw)?;

    if raw.starts_with(&GZIP_MAGIC) {
        trace!("{:?} is gzip compressed", path);

        let mut inflated = Vec::with_capacity(length);
        let decoder = GzDecoder::new(BufReader::new(File::open(path)?));
        decoder.take(length as u64).read_to_end(&mut inflated)?;

        return Ok(inflated);
    }
    Ok(raw)
}

/// Guess the format of a file from its content
///
/// Returns `None` for files that cannot be opened or whose
/// content matches no known format.
pub fn guess_format<P: AsRef<Path>>(path: P) -> Option<ImageFormat> {
    let path = path.as_ref();

    if nifti::probe_nifti(path) {
        return Some(ImageFormat::Nifti);
    }
    None
}
