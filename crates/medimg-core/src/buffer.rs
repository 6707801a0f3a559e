/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Dense pixel buffers and their flattening conventions
use crate::descriptor::validate_shape;
use crate::errors::MedImageErrors;

/// How a dense buffer is flattened.
///
/// Shapes are always given in host order `[s0, s1, s2, s3]`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Layout {
    /// Row-major over the on-disk axis order, `s1` varies fastest,
    /// followed by `s0`, `s2` and `s3`.
    ///
    /// This is the order the image library hands out pixels.
    LibraryNative,
    /// Column-major over the host shape, `s0` varies fastest,
    /// followed by `s1`, `s2` and `s3`.
    HostLayout
}

/// A flat buffer of `f64` pixels together with its shape and layout.
///
/// The buffer owns its pixels, changing layout consumes it and
/// produces a new buffer (see `medimg_axes::relayout`).
#[derive(Clone, Debug, PartialEq)]
pub struct DenseBuffer {
    data:   Vec<f64>,
    shape:  Vec<usize>,
    layout: Layout
}

impl DenseBuffer {
    /// Create a new buffer
    ///
    /// # Errors
    /// - Unsupported dimensionality or zero sized axes in `shape`
    /// - `data.len()` differs from the product of `shape`
    ///
    /// # Example
    /// ```
    /// use medimg_core::buffer::{DenseBuffer, Layout};
    ///
    /// let buffer = DenseBuffer::new(vec![0.0; 6], vec![2, 3], Layout::HostLayout).unwrap();
    /// assert_eq!(buffer.len(), 6);
    /// assert!(DenseBuffer::new(vec![0.0; 5], vec![2, 3], Layout::HostLayout).is_err());
    /// ```
    pub fn new(data: Vec<f64>, shape: Vec<usize>, layout: Layout) -> Result<DenseBuffer, MedImageErrors> {
        validate_shape(&shape)?;

        let expected: usize = shape.iter().product();

        if data.len() != expected {
            return Err(MedImageErrors::BufferSizeMismatch(expected, data.len()));
        }
        Ok(DenseBuffer {
            data,
            shape,
            layout
        })
    }

    /// Create a zero filled buffer
    pub fn zeros(shape: Vec<usize>, layout: Layout) -> Result<DenseBuffer, MedImageErrors> {
        validate_shape(&shape)?;
        let len = shape.iter().product();

        DenseBuffer::new(vec![0.0; len], shape, layout)
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Shape in host order
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub const fn layout(&self) -> Layout {
        self.layout
    }

    pub fn dimensionality(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Give up ownership of the pixels
    pub fn into_data(self) -> Vec<f64> {
        self.data
    }

    /// Split the buffer into (pixels, shape, layout)
    pub fn into_parts(self) -> (Vec<f64>, Vec<usize>, Layout) {
        (self.data, self.shape, self.layout)
    }
}
