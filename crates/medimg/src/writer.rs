/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The image writer pipeline
//!
//! Every argument is validated before the destination is touched,
//! a failed validation never leaves a file behind.
use std::path::Path;

use medimg_axes::metadata::{direction_to_native, swap_leading};
use medimg_axes::relayout;
use medimg_core::buffer::{DenseBuffer, Layout};
use medimg_core::errors::MedImageErrors;
use medimg_core::log::info;
use medimg_core::scalar::ScalarKind;
use medimg_core::spatial::{validate_spacing, SpatialFrame};

use crate::codecs::ImageFormat;
use crate::image::{NativeImage, PixelData};

/// Number of axes the writer accepts
pub const WRITER_DIMENSIONS: usize = 3;

/// Write a host ordered 3D buffer, selecting the pixel encoding by name
///
/// `kind_name` is one of `uint8`, `uint16`, `float` or `double`,
/// see [`write_with_kind`] for everything else.
///
/// # Errors
/// [`UnsupportedScalarKind`](MedImageErrors::UnsupportedScalarKind) for an unknown name,
/// checked before anything else.
pub fn write<P: AsRef<Path>>(
    path: P, buffer: DenseBuffer, origin: &[f64], spacing: &[f64], direction: &[f64],
    kind_name: &str
) -> Result<(), MedImageErrors> {
    let kind = ScalarKind::from_name(kind_name)?;

    write_with_kind(path, buffer, origin, spacing, direction, kind)
}

/// Write a host ordered 3D buffer as `kind`.
///
/// `origin` and `spacing` are in host order, `direction` is flattened
/// column-major exactly as [`read`](crate::reader::read) returns it.
/// The file format follows the extension of `path`.
///
/// Pixels are narrowed with saturating conversions, values outside the
/// range of `kind` are clamped and NaN becomes zero for integer kinds.
///
/// # Errors
/// In the order they are checked
/// - [`UnsupportedDimensionality`](MedImageErrors::UnsupportedDimensionality): `buffer` does not have 3 axes
/// - [`InvalidOrigin`](MedImageErrors::InvalidOrigin): `origin` does not have 3 components
/// - [`InvalidSpacing`](MedImageErrors::InvalidSpacing): `spacing` does not have 3 positive components
/// - [`InvalidDirection`](MedImageErrors::InvalidDirection): `direction` does not have 9 components
/// - [`EncodeFailure`](MedImageErrors::EncodeFailure): unknown extension, or the file could not be written
pub fn write_with_kind<P: AsRef<Path>>(
    path: P, buffer: DenseBuffer, origin: &[f64], spacing: &[f64], direction: &[f64],
    kind: ScalarKind
) -> Result<(), MedImageErrors> {
    let path = path.as_ref();
    let dims = buffer.dimensionality();

    if dims != WRITER_DIMENSIONS {
        return Err(MedImageErrors::UnsupportedDimensionality(dims));
    }
    if origin.len() != WRITER_DIMENSIONS {
        return Err(MedImageErrors::InvalidOrigin(WRITER_DIMENSIONS, origin.len()));
    }
    validate_spacing(spacing, WRITER_DIMENSIONS)?;

    if direction.len() != WRITER_DIMENSIONS * WRITER_DIMENSIONS {
        return Err(MedImageErrors::InvalidDirection(
            WRITER_DIMENSIONS * WRITER_DIMENSIONS,
            direction.len()
        ));
    }
    let format = ImageFormat::encoder_for_path(path).ok_or_else(|| {
        MedImageErrors::EncodeFailure(format!("No encoder understands the extension of {path:?}"))
    })?;

    let buffer = relayout(buffer, Layout::LibraryNative)?;
    let dims = swap_leading(buffer.shape());
    let pixels = PixelData::from_f64(kind, buffer.data());

    let frame = SpatialFrame::new(
        swap_leading(origin),
        swap_leading(spacing),
        direction_to_native(direction, WRITER_DIMENSIONS)?
    )?;
    let image = NativeImage::new(dims, pixels, frame)?;

    info!("Writing {:?} as {} ({})", path, kind, format.name());

    format.encoder(path)?.encode(&image)
}
