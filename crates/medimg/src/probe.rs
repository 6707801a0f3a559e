/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Header only inspection of image files
use std::path::Path;

use medimg_core::descriptor::ImageDescriptor;
use medimg_core::errors::MedImageErrors;
use medimg_core::log::debug;

use crate::codecs::{guess_format, ImageFormat};
use crate::traits::DecoderTrait;

/// Describe an image without decoding its pixels
///
/// # Errors
/// - [`UnreadableFormat`](MedImageErrors::UnreadableFormat): the file is missing or in no known format
/// - [`UnsupportedPixelSemantics`](MedImageErrors::UnsupportedPixelSemantics): not a scalar image
/// - [`UnsupportedDimensionality`](MedImageErrors::UnsupportedDimensionality): not 2, 3 or 4 axes
/// - [`UnsupportedScalarKind`](MedImageErrors::UnsupportedScalarKind): a storage type with no `f64` view
pub fn probe<P: AsRef<Path>>(path: P) -> Result<ImageDescriptor, MedImageErrors> {
    probe_with_format(path).map(|(_, descriptor)| descriptor)
}

/// Like [`probe`], also returning the detected format
pub fn probe_with_format<P: AsRef<Path>>(
    path: P
) -> Result<(ImageFormat, ImageDescriptor), MedImageErrors> {
    let (decoder, descriptor) = open_decoder(path.as_ref())?;

    Ok((decoder.format(), descriptor))
}

/// Detect the format of `path` and read its headers, returning the
/// decoder for further use.
pub(crate) fn open_decoder(
    path: &Path
) -> Result<(Box<dyn DecoderTrait>, ImageDescriptor), MedImageErrors> {
    let format = guess_format(path).ok_or_else(|| {
        MedImageErrors::UnreadableFormat(format!("{path:?} is missing or in an unknown format"))
    })?;
    debug!("Probing {:?} as {:?}", path, format);

    let mut decoder = format.decoder(path)?;
    let descriptor = decoder.read_headers()?;

    Ok((decoder, descriptor))
}
