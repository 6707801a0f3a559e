/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use medimg::codecs::ImageFormat;
use medimg::reader::HostImage;
use medimg_core::descriptor::ImageDescriptor;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// What `probe` prints for a file
pub struct ProbeReport<'a> {
    file:       &'a Path,
    size:       u64,
    format:     ImageFormat,
    descriptor: &'a ImageDescriptor
}

impl<'a> ProbeReport<'a> {
    pub fn new(
        file: &'a Path, size: u64, format: ImageFormat, descriptor: &'a ImageDescriptor
    ) -> ProbeReport<'a> {
        ProbeReport {
            file,
            size,
            format,
            descriptor
        }
    }
}

impl Serialize for ProbeReport<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ProbeReport", 4)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("format", &self.format)?;
        state.serialize_field("metadata", self.descriptor)?;

        state.end()
    }
}

/// What `read` prints for a file, pixels are left out
pub struct ReadReport<'a> {
    file:  &'a Path,
    image: &'a HostImage
}

impl<'a> ReadReport<'a> {
    pub fn new(file: &'a Path, image: &'a HostImage) -> ReadReport<'a> {
        ReadReport { file, image }
    }
}

impl Serialize for ReadReport<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ReadReport", 5)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("metadata", &self.image.descriptor)?;
        state.serialize_field("origin", &self.image.origin)?;
        state.serialize_field("spacing", &self.image.spacing)?;
        state.serialize_field("direction", &self.image.direction)?;

        state.end()
    }
}
