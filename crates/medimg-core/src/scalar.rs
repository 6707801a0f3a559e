/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel encodings, information and manipulations
//!
//! Two closely related enums live here
//!
//! - [`ScalarKind`]: the encodings a caller can ask the writer for, by name.
//! - [`ComponentType`]: the numeric type a file actually stores per pixel.
//!
//! The two differ because `uint16` is persisted using a 32 bit wide unsigned
//! integer, so a file written as `uint16` reports a [`ComponentType::U32`] storage.

use core::fmt::{Display, Formatter};

use crate::errors::MedImageErrors;

/// The scalar encodings understood by the writer pipeline.
///
/// Callers select them by name, see [`ScalarKind::from_name`]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ScalarKind {
    /// Eight bit unsigned integers, `0..=255`
    U8,
    /// Unsigned integers, requested as `uint16`.
    ///
    /// Stored with native unsigned 32 bit width, values above
    /// `u16::MAX` therefore survive a write.
    U16,
    /// 32 bit IEEE floats
    F32,
    /// 64 bit IEEE floats
    F64
}

impl ScalarKind {
    /// All kinds in the order the writer documents them
    pub const ALL: [ScalarKind; 4] = [Self::U8, Self::U16, Self::F32, Self::F64];

    /// Parse a kind from the names accepted at the writer boundary.
    ///
    /// Accepted names are `uint8`, `uint16`, `float` and `double`,
    /// `float32` and `float64` are accepted as aliases.
    ///
    /// # Example
    /// ```
    /// use medimg_core::scalar::ScalarKind;
    /// assert_eq!(ScalarKind::from_name("uint16").unwrap(), ScalarKind::U16);
    /// assert!(ScalarKind::from_name("int32").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<ScalarKind, MedImageErrors> {
        match name {
            "uint8" => Ok(Self::U8),
            "uint16" => Ok(Self::U16),
            "float" | "float32" => Ok(Self::F32),
            "double" | "float64" => Ok(Self::F64),
            _ => Err(MedImageErrors::UnsupportedScalarKind(name.to_string()))
        }
    }

    /// The canonical name of this kind, the inverse of [`from_name`](Self::from_name)
    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "uint8",
            Self::U16 => "uint16",
            Self::F32 => "float",
            Self::F64 => "double"
        }
    }

    /// The component type used to persist this kind
    pub const fn storage(self) -> ComponentType {
        match self {
            Self::U8 => ComponentType::U8,
            Self::U16 => ComponentType::U32,
            Self::F32 => ComponentType::F32,
            Self::F64 => ComponentType::F64
        }
    }
}

impl Display for ScalarKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric type of a single pixel component as found on disk.
///
/// Every variant can be read, pixel values are always
/// upcast to `f64`. 64 bit integers lose precision above 2^53.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ComponentType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64
}

impl ComponentType {
    /// The writer kind that produces this storage, if any
    ///
    /// # Example
    /// ```
    /// use medimg_core::scalar::{ComponentType, ScalarKind};
    /// assert_eq!(ComponentType::U32.scalar_kind(), Some(ScalarKind::U16));
    /// assert_eq!(ComponentType::I16.scalar_kind(), None);
    /// ```
    pub const fn scalar_kind(self) -> Option<ScalarKind> {
        match self {
            Self::U8 => Some(ScalarKind::U8),
            Self::U32 => Some(ScalarKind::U16),
            Self::F32 => Some(ScalarKind::F32),
            Self::F64 => Some(ScalarKind::F64),
            _ => None
        }
    }
}

/// What a single pixel represents.
///
/// Only [`Scalar`](PixelSemantics::Scalar) pixels can be mapped to a dense
/// array of reals, everything else is rejected by the probe.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PixelSemantics {
    /// A single real value per pixel
    Scalar,
    /// `n` real values per pixel
    Vector(usize),
    /// Real and imaginary pair per pixel
    Complex,
    /// Red, Green, Blue
    Rgb,
    /// Red, Green, Blue, Alpha
    Rgba
}

impl PixelSemantics {
    /// Number of real components making up one pixel
    pub const fn num_components(self) -> usize {
        match self {
            Self::Scalar => 1,
            Self::Vector(n) => n,
            Self::Complex => 2,
            Self::Rgb => 3,
            Self::Rgba => 4
        }
    }

    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::Scalar)
    }
}
