/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Spatial metadata transforms
//!
//! Origin, spacing and shapes swap their first two components between the
//! conventions. Direction matrices are only reflattened, row-major on the library
//! side and column-major on the host side, their axes are not swapped.
use medimg_core::errors::MedImageErrors;

/// Swap the first two components, leaving the rest untouched.
///
/// Applying it twice gives back the input. Slices shorter than two are
/// returned unchanged.
///
/// ```
/// use medimg_axes::metadata::swap_leading;
///
/// assert_eq!(swap_leading(&[1.0, 2.0, 3.0]), [2.0, 1.0, 3.0]);
/// ```
pub fn swap_leading<T: Copy>(values: &[T]) -> Vec<T> {
    let mut out = values.to_vec();

    if out.len() >= 2 {
        out.swap(0, 1);
    }
    out
}

/// Reflatten a row-major `n x n` direction matrix column-major.
///
/// Destination columns are the outer loop and rows the inner one,
/// `out[col * n + row] = row_major[row * n + col]`.
pub fn direction_to_host(row_major: &[f64], n: usize) -> Result<Vec<f64>, MedImageErrors> {
    reflatten(row_major, n)
}

/// Inverse of [`direction_to_host`]
///
/// `out[row * n + col] = column_major[col * n + row]`
pub fn direction_to_native(column_major: &[f64], n: usize) -> Result<Vec<f64>, MedImageErrors> {
    reflatten(column_major, n)
}

fn reflatten(matrix: &[f64], n: usize) -> Result<Vec<f64>, MedImageErrors> {
    if matrix.len() != n * n {
        return Err(MedImageErrors::InvalidDirection(n * n, matrix.len()));
    }
    let mut out = Vec::with_capacity(n * n);

    for outer in 0..n {
        for inner in 0..n {
            out.push(matrix[inner * n + outer]);
        }
    }
    Ok(out)
}
