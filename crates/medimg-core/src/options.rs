/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reader options
//!
//! This module exposes a struct which configures how much
//! the reader pipeline extracts from an image.

/// How much spatial metadata the reader returns together with the pixels.
///
/// The levels are cumulative, each one adds to the previous
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum MetadataLevel {
    /// Pixels only
    PixelsOnly,
    /// Pixels and origin
    Origin,
    /// Pixels, origin and spacing
    OriginSpacing,
    /// Pixels, origin, spacing and direction
    Full
}

impl MetadataLevel {
    pub const fn wants_origin(self) -> bool {
        !matches!(self, Self::PixelsOnly)
    }

    pub const fn wants_spacing(self) -> bool {
        matches!(self, Self::OriginSpacing | Self::Full)
    }

    pub const fn wants_direction(self) -> bool {
        matches!(self, Self::Full)
    }
}

/// Reader options
///
/// Not all options are respected by all formats,
/// each option lists who respects it.
#[derive(Debug, Copy, Clone)]
pub struct ReaderOptions {
    /// How much metadata to extract
    ///
    /// - Default value: `MetadataLevel::Full`
    /// - Respected by: `all formats`
    metadata:       MetadataLevel,
    /// Maximum number of pixels the reader will materialize.
    ///
    /// Protects against headers claiming absurd sizes.
    ///
    /// - Default value: `1 << 30`
    /// - Respected by: `all formats`
    max_elements:   usize,
    /// Log a warning when direction is requested, reminding callers
    /// that its values are meant to be passed back to the writer untouched.
    ///
    /// - Default value: true
    warn_direction: bool
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            metadata:       MetadataLevel::Full,
            max_elements:   1 << 30,
            warn_direction: true
        }
    }
}

impl ReaderOptions {
    /// Options that return only pixels
    pub fn pixels_only() -> ReaderOptions {
        ReaderOptions::default().set_metadata_level(MetadataLevel::PixelsOnly)
    }

    pub const fn metadata_level(&self) -> MetadataLevel {
        self.metadata
    }

    pub const fn max_elements(&self) -> usize {
        self.max_elements
    }

    pub const fn warn_direction(&self) -> bool {
        self.warn_direction
    }

    /// Set how much metadata the reader extracts
    pub fn set_metadata_level(mut self, level: MetadataLevel) -> Self {
        self.metadata = level;
        self
    }

    /// Set the maximum number of pixels the reader will decode
    pub fn set_max_elements(mut self, elements: usize) -> Self {
        self.max_elements = elements;
        self
    }

    /// Whether to warn when direction is requested
    pub fn set_warn_direction(mut self, yes: bool) -> Self {
        self.warn_direction = yes;
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::options::{MetadataLevel, ReaderOptions};

    #[test]
    fn levels_are_cumulative() {
        let levels = [
            MetadataLevel::PixelsOnly,
            MetadataLevel::Origin,
            MetadataLevel::OriginSpacing,
            MetadataLevel::Full
        ];
        for pair in levels.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].wants_origin() <= pair[1].wants_origin());
            assert!(pair[0].wants_spacing() <= pair[1].wants_spacing());
            assert!(pair[0].wants_direction() <= pair[1].wants_direction());
        }
    }

    #[test]
    fn default_is_full() {
        let options = ReaderOptions::default();
        assert_eq!(options.metadata_level(), MetadataLevel::Full);
        assert_eq!(
            ReaderOptions::pixels_only().metadata_level(),
            MetadataLevel::PixelsOnly
        );
    }
}
