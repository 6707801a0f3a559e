/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Side of the square blocks the transpose walks in
const TILE: usize = 8;

/// Transpose a row-major `height x width` matrix into a row-major
/// `width x height` one.
///
/// `out_matrix[col * height + row] = in_matrix[row * width + col]`
///
/// The matrix is walked in `TILE x TILE` blocks so that both the reads and the
/// writes of a block stay within a few cache lines, blocks on the right and
/// bottom edges are clipped to the matrix.
pub(crate) fn transpose_scalar<T: Copy>(
    in_matrix: &[T], out_matrix: &mut [T], width: usize, height: usize
) {
    let dimensions = width * height;
    assert_eq!(
        in_matrix.len(),
        dimensions,
        "In matrix dimensions do not match width and height"
    );
    assert_eq!(
        out_matrix.len(),
        dimensions,
        "Out matrix dimensions do not match width and height"
    );

    for row_start in (0..height).step_by(TILE) {
        let row_end = (row_start + TILE).min(height);

        for col_start in (0..width).step_by(TILE) {
            let col_end = (col_start + TILE).min(width);

            for row in row_start..row_end {
                let in_row = &in_matrix[row * width..(row + 1) * width];

                for (col, value) in in_row.iter().enumerate().take(col_end).skip(col_start) {
                    out_matrix[col * height + row] = *value;
                }
            }
        }
    }
}
