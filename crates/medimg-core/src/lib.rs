/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all medimg crates
//!
//! This crate provides the data model that the probe, the
//! reader and the writer pipelines pass between each other.
//!
//! It currently contains
//!
//! - Scalar kinds, on-disk component types and pixel semantics
//! - The image descriptor (dimensionality, shape and component type)
//! - The spatial frame (origin, spacing and direction)
//! - A dense `f64` buffer tagged with its flattening convention
//! - Reader options
//! - The error type shared by the whole family
//!
//! # Features
//!  - `log`: Route the internal logging macros to the [`log`](https://docs.rs/log) crate,
//!     otherwise they compile to nothing.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![macro_use]

pub mod buffer;
pub mod descriptor;
pub mod errors;
#[cfg(not(feature = "log"))]
pub mod log;
pub mod options;
pub mod scalar;
pub mod serde;
pub mod spatial;

#[cfg(feature = "log")]
pub use log;

/// Smallest number of axes an image may have
pub const MIN_DIMENSIONS: usize = 2;
/// Largest number of axes an image may have
pub const MAX_DIMENSIONS: usize = 4;

/// Returns true if `n` is a supported number of image axes
pub const fn is_supported_dimensionality(n: usize) -> bool {
    n >= MIN_DIMENSIONS && n <= MAX_DIMENSIONS
}
