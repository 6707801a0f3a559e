/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Axis order and index mapping
//!
//! Image libraries hand out pixels row-major over the on-disk axis
//! order, with the first on-disk axis varying fastest. Numeric hosts want
//! them column-major with the first two axes swapped. This crate converts
//! between the two for images with 2, 3 and 4 axes, and applies the matching
//! transformation to spatial metadata.
//!
//! Shapes are always given in host order `[s0, s1, s2, s3]`.
//!
//! - [`AxisMap`](map::AxisMap): per offset index transforms in both directions
//! - [`permute_axes`](permute::permute_axes): whole buffer permutation
//! - [`relayout`](permute::relayout): convert a [`DenseBuffer`](medimg_core::buffer::DenseBuffer)
//!   to another layout
//! - [`metadata`]: origin, spacing and direction transforms
//!
//! # Example
//! ```
//! use medimg_axes::{permute_axes, Direction};
//!
//! // two rows of three values, row-major
//! let native = [0, 1, 2, 3, 4, 5];
//! let host = permute_axes(&native, &[2, 3], Direction::NativeToHost).unwrap();
//!
//! assert_eq!(host, [0, 3, 1, 4, 2, 5]);
//! ```
pub mod map;
pub mod metadata;
pub mod permute;

pub use map::{AxisMap, Direction};
pub use permute::{permute_axes, relayout};
