/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde")]

use serde::ser::*;

use crate::descriptor::ImageDescriptor;
use crate::scalar::{ComponentType, PixelSemantics, ScalarKind};
use crate::spatial::SpatialFrame;

impl Serialize for ScalarKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(self.name())
    }
}

impl Serialize for ComponentType {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // component type serialization is simply it's debug value
        serializer.serialize_str(&format!("{:?}", self))
    }
}

impl Serialize for PixelSemantics {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(&format!("{:?}", self))
    }
}

impl Serialize for ImageDescriptor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        const STRUCT_FIELDS: usize = 4;
        let mut state = serializer.serialize_struct("ImageDescriptor", STRUCT_FIELDS)?;

        state.serialize_field("dimensionality", &self.dimensionality())?;
        state.serialize_field("shape", self.shape())?;
        state.serialize_field("component_type", &self.component_type())?;
        state.serialize_field("scalar_kind", &self.scalar_kind())?;

        state.end()
    }
}

impl Serialize for SpatialFrame {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        const STRUCT_FIELDS: usize = 3;
        let mut state = serializer.serialize_struct("SpatialFrame", STRUCT_FIELDS)?;

        state.serialize_field("origin", self.origin())?;
        state.serialize_field("spacing", self.spacing())?;
        state.serialize_field("direction", self.direction())?;

        state.end()
    }
}
