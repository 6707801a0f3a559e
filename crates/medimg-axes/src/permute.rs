/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Whole buffer permutation
//!
//! Both conventions agree on the stride of every axis after the first two,
//! so a permutation only ever reorders elements inside one `s0 x s1` plane.
//! Each plane is transposed independently.
use medimg_core::buffer::{DenseBuffer, Layout};
use medimg_core::descriptor::validate_shape;
use medimg_core::errors::MedImageErrors;
use medimg_core::log::trace;

use crate::map::Direction;
use crate::permute::scalar::transpose_scalar;

pub(crate) mod scalar;

/// Permute a flat buffer between library native and host layout
///
/// `shape` is in host order. The returned buffer holds the same elements
/// reordered so that, for every offset `k`,
/// `out[AxisMap::map(k, direction)] == src[k]`.
///
/// # Errors
/// - [`UnsupportedDimensionality`](MedImageErrors::UnsupportedDimensionality): `shape` does not have 2, 3 or 4 axes
/// - [`ZeroSizedAxis`](MedImageErrors::ZeroSizedAxis): an axis of `shape` is zero
/// - [`BufferSizeMismatch`](MedImageErrors::BufferSizeMismatch): `src.len()` differs from the product of `shape`
pub fn permute_axes<T: Copy + Default>(
    src: &[T], shape: &[usize], direction: Direction
) -> Result<Vec<T>, MedImageErrors> {
    validate_shape(shape)?;

    let expected: usize = shape.iter().product();

    if src.len() != expected {
        return Err(MedImageErrors::BufferSizeMismatch(expected, src.len()));
    }
    let (s0, s1) = (shape[0], shape[1]);
    let plane = s0 * s1;

    // native planes are s0 rows of s1 values, host planes are s1 rows of s0 values
    let (width, height) = match direction {
        Direction::NativeToHost => (s1, s0),
        Direction::HostToNative => (s0, s1)
    };
    trace!(
        "Permuting {} planes of {s0}x{s1} ({:?})",
        expected / plane,
        direction
    );
    let mut out = vec![T::default(); expected];

    for (in_plane, out_plane) in src.chunks_exact(plane).zip(out.chunks_exact_mut(plane)) {
        transpose_scalar(in_plane, out_plane, width, height);
    }
    Ok(out)
}

/// Convert a buffer to `target` layout.
///
/// A buffer already in `target` layout is returned as is.
pub fn relayout(buffer: DenseBuffer, target: Layout) -> Result<DenseBuffer, MedImageErrors> {
    if buffer.layout() == target {
        return Ok(buffer);
    }
    let direction = match target {
        Layout::HostLayout => Direction::NativeToHost,
        Layout::LibraryNative => Direction::HostToNative
    };
    let (data, shape, _) = buffer.into_parts();
    let permuted = permute_axes(&data, &shape, direction)?;

    DenseBuffer::new(permuted, shape, target)
}
