/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible while probing, reading or writing images
use core::fmt::{Debug, Display, Formatter};

use crate::scalar::PixelSemantics;

/// All possible errors that can occur.
///
/// Each variant renders to a human readable message,
/// callers that sit behind a foreign call boundary can forward
/// the `Display` output as is.
pub enum MedImageErrors {
    /// No decoder recognises the file, or the file cannot be opened
    UnreadableFormat(String),
    /// Number of axes outside what the operation supports
    UnsupportedDimensionality(usize),
    /// The pixels are not plain scalars
    UnsupportedPixelSemantics(PixelSemantics),
    /// Unknown scalar kind name or a storage type that can't be represented
    UnsupportedScalarKind(String),
    /// Format was detected but pixel data could not be materialized
    DecodeFailure(String),
    /// The image library failed to persist the image
    EncodeFailure(String),
    /// Wrong number of origin components, (expected, found)
    InvalidOrigin(usize, usize),
    /// Wrong number of spacing components or a non positive spacing
    InvalidSpacing(String),
    /// Wrong number of direction components, (expected, found)
    InvalidDirection(usize, usize),
    /// Buffer length does not match the shape, (expected, found)
    BufferSizeMismatch(usize, usize),
    /// The axis at this index has zero length
    ZeroSizedAxis(usize)
}

impl Debug for MedImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnreadableFormat(reason) => {
                writeln!(f, "Unreadable image format: {reason}")
            }
            Self::UnsupportedDimensionality(dims) => {
                writeln!(
                    f,
                    "Unsupported number of dimensions: {dims}, supported dimensions are 2, 3 and 4"
                )
            }
            Self::UnsupportedPixelSemantics(semantics) => {
                writeln!(
                    f,
                    "Unsupported pixel type {semantics:?} with {} components, only scalar pixels are supported",
                    semantics.num_components()
                )
            }
            Self::UnsupportedScalarKind(kind) => {
                writeln!(
                    f,
                    "Unsupported scalar kind {kind:?}, expected one of uint8, uint16, float, double"
                )
            }
            Self::DecodeFailure(reason) => writeln!(f, "Could not decode image: {reason}"),
            Self::EncodeFailure(reason) => writeln!(f, "Could not encode image: {reason}"),
            Self::InvalidOrigin(expected, found) => {
                writeln!(
                    f,
                    "Origin should have {expected} components but {found} were given"
                )
            }
            Self::InvalidSpacing(reason) => writeln!(f, "Invalid spacing: {reason}"),
            Self::InvalidDirection(expected, found) => {
                writeln!(
                    f,
                    "Direction should have {expected} components but {found} were given"
                )
            }
            Self::BufferSizeMismatch(expected, found) => {
                writeln!(
                    f,
                    "Buffer size mismatch, expected {expected} elements but found {found}"
                )
            }
            Self::ZeroSizedAxis(axis) => writeln!(f, "Axis {axis} has zero length")
        }
    }
}

impl Display for MedImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        // the debug impl is already meant for humans
        write!(f, "{self:?}")
    }
}

impl std::error::Error for MedImageErrors {}
