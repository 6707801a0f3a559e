/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image descriptor, what the probe learns without touching pixels

use crate::errors::MedImageErrors;
use crate::is_supported_dimensionality;
use crate::scalar::{ComponentType, ScalarKind};

/// Dimensionality, shape and storage type of an image.
///
/// The shape is given in host order, i.e. the first two on-disk
/// axes are swapped, this is the shape a host allocates to receive
/// the pixels.
///
/// The descriptor is immutable once constructed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImageDescriptor {
    shape:     Vec<usize>,
    component: ComponentType
}

impl ImageDescriptor {
    /// Create a new descriptor
    ///
    /// # Errors
    /// - [`UnsupportedDimensionality`](MedImageErrors::UnsupportedDimensionality): shape length outside `2..=4`
    /// - [`ZeroSizedAxis`](MedImageErrors::ZeroSizedAxis): an axis has zero length
    ///
    /// # Example
    /// ```
    /// use medimg_core::descriptor::ImageDescriptor;
    /// use medimg_core::scalar::ComponentType;
    ///
    /// let desc = ImageDescriptor::new(vec![3, 4, 5], ComponentType::I16).unwrap();
    /// assert_eq!(desc.dimensionality(), 3);
    /// assert_eq!(desc.num_elements(), 60);
    /// assert!(ImageDescriptor::new(vec![2; 5], ComponentType::U8).is_err());
    /// ```
    pub fn new(shape: Vec<usize>, component: ComponentType) -> Result<ImageDescriptor, MedImageErrors> {
        validate_shape(&shape)?;
        Ok(ImageDescriptor { shape, component })
    }

    /// Number of axes
    pub fn dimensionality(&self) -> usize {
        self.shape.len()
    }

    /// Shape in host order
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Storage type found on disk
    pub const fn component_type(&self) -> ComponentType {
        self.component
    }

    /// The writer kind matching the on-disk storage, if any.
    ///
    /// Informational only, pixels are always delivered as `f64`
    pub const fn scalar_kind(&self) -> Option<ScalarKind> {
        self.component.scalar_kind()
    }

    /// Total number of pixels
    pub fn num_elements(&self) -> usize {
        self.shape.iter().product()
    }
}

/// Check that a shape has a supported number of axes and none of them is empty
pub fn validate_shape(shape: &[usize]) -> Result<(), MedImageErrors> {
    if !is_supported_dimensionality(shape.len()) {
        return Err(MedImageErrors::UnsupportedDimensionality(shape.len()));
    }
    if let Some(axis) = shape.iter().position(|x| *x == 0) {
        return Err(MedImageErrors::ZeroSizedAxis(axis));
    }
    Ok(())
}
