/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A medical image library
//!
//! This crate reads medical images of unknown dimensionality and pixel type into
//! dense `f64` arrays laid out the way numeric hosts expect (column-major,
//! first two axes swapped), and writes such arrays back out together with their
//! spatial metadata.
//!
//! It is split into three pipelines
//!
//! - [`probe`](probe::probe): learn dimensionality, shape and storage type from the header only
//! - [`read`](reader::read): pixels plus origin, spacing and direction in host order
//! - [`write`](writer::write): a host ordered 3D buffer plus metadata into a file
//!
//! # Formats
//! Formats are detected by content, not by extension, see [`codecs`].
//!
//! | Format  | Decoder | Encoder |
//! |---------|---------|---------|
//! | NIfTI-1 | Yes     | Yes     |
//!
//! NIfTI-1 files may be single files (`.nii`), header/image pairs (`.hdr` + `.img`)
//! and gzip compressed versions of both.
//!
//! # Example
//! ```no_run
//! use medimg::reader::read;
//!
//! let image = read("brain.nii.gz").unwrap();
//! println!("{:?}", image.descriptor.shape());
//! ```
//!
//! # Features
//!  - `log`: Log what the pipelines are doing through the [`log`](https://docs.rs/log) crate.
//!  - `serde-support`: Serialize descriptors and probe results
pub use medimg_core::errors::MedImageErrors;

pub mod codecs;
pub mod image;
pub mod probe;
pub mod reader;
pub mod serde;
pub mod traits;
pub mod writer;
