/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Main image decoder and encoder traits
//!
//! Every format plugs into the pipelines by implementing these two traits.
use medimg_core::descriptor::ImageDescriptor;
use medimg_core::errors::MedImageErrors;
use medimg_core::options::ReaderOptions;

use crate::codecs::ImageFormat;
use crate::image::NativeImage;

/// Encapsulates an image decoder.
///
/// Decoders are bound to a single file at construction.
pub trait DecoderTrait {
    /// Read the header and return what the image looks like.
    ///
    /// This does not touch the pixel payload, so it works on files
    /// whose payload is missing or truncated.
    ///
    /// # Errors
    /// Unsupported dimensionality, pixel semantics or storage type
    fn read_headers(&mut self) -> Result<ImageDescriptor, MedImageErrors>;

    /// Decode the whole image into library native order with `f64` pixels
    fn decode(&mut self, options: &ReaderOptions) -> Result<NativeImage, MedImageErrors>;

    /// Get the name of the decoder
    fn name(&self) -> &'static str;

    /// The format this decoder handles
    fn format(&self) -> ImageFormat;
}

/// Encapsulates an image encoder.
///
/// Like decoders, encoders are bound to their destination at construction
pub trait EncoderTrait {
    /// Persist `image`
    ///
    /// # Errors
    /// Any failure of the underlying library or I/O is an
    /// [`EncodeFailure`](MedImageErrors::EncodeFailure)
    fn encode(&mut self, image: &NativeImage) -> Result<(), MedImageErrors>;

    /// Get the name of the encoder
    fn name(&self) -> &'static str;

    fn format(&self) -> ImageFormat;
}
