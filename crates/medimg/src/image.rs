/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The library native image representation
//!
//! This is what codecs produce and consume. Dimensions follow the on-disk
//! axis order and pixels are flattened with the first on-disk axis varying
//! fastest, the direction matrix is flattened row-major.
use medimg_core::descriptor::validate_shape;
use medimg_core::errors::MedImageErrors;
use medimg_core::scalar::{ComponentType, ScalarKind};
use medimg_core::spatial::SpatialFrame;

/// Pixel storage tagged with its type
///
/// Carries one variant per writer encoding plus `F64`, which the decoders
/// use for everything they read.
#[derive(Clone, Debug, PartialEq)]
pub enum PixelData {
    U8(Vec<u8>),
    U32(Vec<u32>),
    F32(Vec<f32>),
    F64(Vec<f64>)
}

impl PixelData {
    /// Narrow `f64` pixels into the storage type of `kind`
    ///
    /// Conversions saturate, values outside the target range are clamped to
    /// it and NaN becomes zero for integer kinds. Fractional parts are truncated.
    pub fn from_f64(kind: ScalarKind, data: &[f64]) -> PixelData {
        match kind {
            ScalarKind::U8 => PixelData::U8(data.iter().map(|x| *x as u8).collect()),
            ScalarKind::U16 => PixelData::U32(data.iter().map(|x| *x as u32).collect()),
            ScalarKind::F32 => PixelData::F32(data.iter().map(|x| *x as f32).collect()),
            ScalarKind::F64 => PixelData::F64(data.to_vec())
        }
    }

    /// Widen pixels to `f64`
    pub fn to_f64(&self) -> Vec<f64> {
        match self {
            PixelData::U8(data) => data.iter().map(|x| f64::from(*x)).collect(),
            PixelData::U32(data) => data.iter().map(|x| f64::from(*x)).collect(),
            PixelData::F32(data) => data.iter().map(|x| f64::from(*x)).collect(),
            PixelData::F64(data) => data.clone()
        }
    }

    /// Consume and widen pixels to `f64`, reusing the allocation for `F64`
    pub fn into_f64(self) -> Vec<f64> {
        match self {
            PixelData::F64(data) => data,
            other => other.to_f64()
        }
    }

    pub fn len(&self) -> usize {
        match self {
            PixelData::U8(data) => data.len(),
            PixelData::U32(data) => data.len(),
            PixelData::F32(data) => data.len(),
            PixelData::F64(data) => data.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn component_type(&self) -> ComponentType {
        match self {
            PixelData::U8(_) => ComponentType::U8,
            PixelData::U32(_) => ComponentType::U32,
            PixelData::F32(_) => ComponentType::F32,
            PixelData::F64(_) => ComponentType::F64
        }
    }
}

/// An image in the image library's own conventions
#[derive(Clone, Debug, PartialEq)]
pub struct NativeImage {
    dims:   Vec<usize>,
    pixels: PixelData,
    frame:  SpatialFrame
}

impl NativeImage {
    /// Create a new image
    ///
    /// # Errors
    /// - `dims` is not a supported shape
    /// - the number of pixels does not match `dims`
    /// - [`UnsupportedDimensionality`](MedImageErrors::UnsupportedDimensionality):
    ///   `frame` describes a different number of axes than `dims`
    pub fn new(
        dims: Vec<usize>, pixels: PixelData, frame: SpatialFrame
    ) -> Result<NativeImage, MedImageErrors> {
        validate_shape(&dims)?;

        let expected: usize = dims.iter().product();

        if pixels.len() != expected {
            return Err(MedImageErrors::BufferSizeMismatch(expected, pixels.len()));
        }
        if frame.dimensionality() != dims.len() {
            return Err(MedImageErrors::UnsupportedDimensionality(
                frame.dimensionality()
            ));
        }
        Ok(NativeImage {
            dims,
            pixels,
            frame
        })
    }

    /// Dimensions in on-disk axis order
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn dimensionality(&self) -> usize {
        self.dims.len()
    }

    pub const fn pixels(&self) -> &PixelData {
        &self.pixels
    }

    /// Spatial frame, direction flattened row-major
    pub const fn frame(&self) -> &SpatialFrame {
        &self.frame
    }

    pub fn into_parts(self) -> (Vec<usize>, PixelData, SpatialFrame) {
        (self.dims, self.pixels, self.frame)
    }
}
