/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Spatial metadata, the mapping from index space to physical space

use crate::errors::MedImageErrors;
use crate::is_supported_dimensionality;

/// Origin, spacing and direction cosines of an image.
///
/// The direction is kept flattened, `dimensionality²` values.
/// Whether it is flattened row-major or column-major depends on who built
/// the frame, library-native frames are row-major.
///
/// The direction is expected to be orthonormal but this is not checked.
#[derive(Clone, Debug, PartialEq)]
pub struct SpatialFrame {
    origin:    Vec<f64>,
    spacing:   Vec<f64>,
    direction: Vec<f64>
}

impl SpatialFrame {
    /// Create a new frame for an image with `origin.len()` axes
    ///
    /// # Errors
    /// - Unsupported number of axes
    /// - Spacing or direction with the wrong number of components
    /// - A spacing that is not a positive finite number
    pub fn new(
        origin: Vec<f64>, spacing: Vec<f64>, direction: Vec<f64>
    ) -> Result<SpatialFrame, MedImageErrors> {
        let dims = origin.len();

        if !is_supported_dimensionality(dims) {
            return Err(MedImageErrors::UnsupportedDimensionality(dims));
        }
        validate_spacing(&spacing, dims)?;

        if direction.len() != dims * dims {
            return Err(MedImageErrors::InvalidDirection(dims * dims, direction.len()));
        }
        Ok(SpatialFrame {
            origin,
            spacing,
            direction
        })
    }

    /// A frame with zero origin, unit spacing and identity direction
    pub fn identity(dims: usize) -> Result<SpatialFrame, MedImageErrors> {
        let mut direction = vec![0.0; dims * dims];

        for i in 0..dims {
            direction[i * dims + i] = 1.0;
        }
        SpatialFrame::new(vec![0.0; dims], vec![1.0; dims], direction)
    }

    pub fn dimensionality(&self) -> usize {
        self.origin.len()
    }

    pub fn origin(&self) -> &[f64] {
        &self.origin
    }

    pub fn spacing(&self) -> &[f64] {
        &self.spacing
    }

    pub fn direction(&self) -> &[f64] {
        &self.direction
    }

    /// Split the frame into its (origin, spacing, direction) parts
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.origin, self.spacing, self.direction)
    }
}

/// Check spacing length against `dims` and that every value is positive and finite
pub fn validate_spacing(spacing: &[f64], dims: usize) -> Result<(), MedImageErrors> {
    if spacing.len() != dims {
        let msg = format!(
            "expected {dims} components but {} were given",
            spacing.len()
        );
        return Err(MedImageErrors::InvalidSpacing(msg));
    }
    if let Some((axis, value)) = spacing
        .iter()
        .enumerate()
        .find(|(_, x)| !(x.is_finite() && **x > 0.0))
    {
        let msg = format!("spacing along axis {axis} must be positive, found {value}");
        return Err(MedImageErrors::InvalidSpacing(msg));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::errors::MedImageErrors;
    use crate::spatial::SpatialFrame;

    #[test]
    fn identity_frame() {
        let frame = SpatialFrame::identity(3).unwrap();
        assert_eq!(frame.origin(), &[0.0; 3]);
        assert_eq!(frame.spacing(), &[1.0; 3]);
        assert_eq!(
            frame.direction(),
            &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn rejects_bad_component_counts() {
        let err = SpatialFrame::new(vec![0.0; 3], vec![1.0; 2], vec![0.0; 9]).unwrap_err();
        assert!(matches!(err, MedImageErrors::InvalidSpacing(_)));

        let err = SpatialFrame::new(vec![0.0; 3], vec![1.0; 3], vec![0.0; 4]).unwrap_err();
        assert!(matches!(err, MedImageErrors::InvalidDirection(9, 4)));

        let err = SpatialFrame::new(vec![0.0; 5], vec![1.0; 5], vec![0.0; 25]).unwrap_err();
        assert!(matches!(err, MedImageErrors::UnsupportedDimensionality(5)));
    }

    #[test]
    fn rejects_non_positive_spacing() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = SpatialFrame::new(vec![0.0; 2], vec![1.0, bad], vec![0.0; 4]).unwrap_err();
            assert!(matches!(err, MedImageErrors::InvalidSpacing(_)));
        }
    }
}
