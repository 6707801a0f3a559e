/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The image reader pipeline
//!
//! probe, decode into library native order, then permute pixels and
//! metadata into host order.
use std::path::Path;

use medimg_axes::metadata::{direction_to_host, swap_leading};
use medimg_axes::relayout;
use medimg_core::buffer::{DenseBuffer, Layout};
use medimg_core::descriptor::ImageDescriptor;
use medimg_core::errors::MedImageErrors;
use medimg_core::log::{trace, warn};
use medimg_core::options::ReaderOptions;

use crate::probe::open_decoder;

/// An image in host layout
///
/// Metadata fields are `None` when the [`MetadataLevel`](medimg_core::options::MetadataLevel)
/// of the read did not ask for them.
#[derive(Clone, Debug, PartialEq)]
pub struct HostImage {
    pub descriptor: ImageDescriptor,
    /// Pixels, column-major over `descriptor.shape()`
    pub buffer:     DenseBuffer,
    /// Origin, first two components swapped relative to the file
    pub origin:     Option<Vec<f64>>,
    /// Spacing, first two components swapped relative to the file
    pub spacing:    Option<Vec<f64>>,
    /// Direction cosines flattened column-major, axes not swapped.
    ///
    /// Meant to be handed back to the writer as is.
    pub direction:  Option<Vec<f64>>
}

impl HostImage {
    pub fn dimensionality(&self) -> usize {
        self.descriptor.dimensionality()
    }
}

/// Read an image with all its metadata
pub fn read<P: AsRef<Path>>(path: P) -> Result<HostImage, MedImageErrors> {
    read_with_options(path, ReaderOptions::default())
}

/// Read an image, extracting as much metadata as `options` asks for
///
/// # Errors
/// - Everything [`probe`](crate::probe::probe) reports
/// - [`DecodeFailure`](MedImageErrors::DecodeFailure) if the pixels cannot be read
pub fn read_with_options<P: AsRef<Path>>(
    path: P, options: ReaderOptions
) -> Result<HostImage, MedImageErrors> {
    let path = path.as_ref();
    let (mut decoder, descriptor) = open_decoder(path)?;
    let level = options.metadata_level();

    if level.wants_direction() && options.warn_direction() {
        warn!("Direction values are only meant to be passed to the writer, do not use them as a host ordered matrix");
    }
    let native = decoder.decode(&options)?;
    let (dims, pixels, frame) = native.into_parts();

    let shape = swap_leading(&dims);

    if shape != descriptor.shape() {
        return Err(MedImageErrors::DecodeFailure(format!(
            "Decoded shape {shape:?} differs from header shape {:?}",
            descriptor.shape()
        )));
    }
    let buffer = DenseBuffer::new(pixels.into_f64(), shape, Layout::LibraryNative)?;
    let buffer = relayout(buffer, Layout::HostLayout)?;

    trace!("Permuted {} pixels to host layout", buffer.len());

    let (origin, spacing, direction) = frame.into_parts();

    let direction = if level.wants_direction() {
        Some(direction_to_host(&direction, descriptor.dimensionality())?)
    } else {
        None
    };

    Ok(HostImage {
        origin: level.wants_origin().then(|| swap_leading(&origin)),
        spacing: level.wants_spacing().then(|| swap_leading(&spacing)),
        direction,
        buffer,
        descriptor
    })
}
