/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! NIfTI-1 decoding and encoding support
//!
//! This uses the delegate library [`nifti`](::nifti) for the byte level work,
//! the code here only interprets header fields.
//!
//! # Spatial frame
//! NIfTI stores positions in RAS+ (x grows to the right, y to the front),
//! the frames produced here are LPS+, so the first two rows of the direction
//! and the first two components of the origin are negated on the way in
//! and on the way out.
//!
//! The transform is taken from the `sform` when present, the `qform`
//! otherwise and finally from the voxel sizes alone.
use std::path::{Path, PathBuf};

use ::nifti::writer::WriterOptions;
use ::nifti::{IntoNdArray, NiftiHeader, NiftiObject, NiftiType};
use medimg_axes::metadata::swap_leading;
use medimg_core::descriptor::ImageDescriptor;
use medimg_core::errors::MedImageErrors;
use medimg_core::is_supported_dimensionality;
use medimg_core::log::{debug, trace};
use medimg_core::options::ReaderOptions;
use medimg_core::scalar::{ComponentType, PixelSemantics};
use medimg_core::spatial::SpatialFrame;
use ndarray::{ArrayView, IxDyn, ShapeBuilder};

use crate::codecs::{read_leading_bytes, ImageFormat};
use crate::image::{NativeImage, PixelData};
use crate::traits::{DecoderTrait, EncoderTrait};

/// File name endings written as NIfTI-1
pub const EXTENSIONS: [&str; 6] = [".nii", ".nii.gz", ".hdr", ".hdr.gz", ".img", ".img.gz"];

/// Size of a NIfTI-1 header, also the value of its first field
const HEADER_SIZE: usize = 348;
const MAGIC_OFFSET: usize = 344;
/// Header and data in one file
const MAGIC_SINGLE: &[u8; 4] = b"n+1\0";
/// Header in `.hdr`, data in `.img`
const MAGIC_PAIR: &[u8; 4] = b"ni1\0";
/// `NIFTI_INTENT_VECTOR`, each voxel holds `dim[5]` values
const INTENT_VECTOR: i64 = 1007;

/// Returns true if `bytes` start with a NIfTI-1 header in either byte order
pub fn is_nifti_header(bytes: &[u8]) -> bool {
    if bytes.len() < HEADER_SIZE {
        return false;
    }
    let size = [bytes[0], bytes[1], bytes[2], bytes[3]];
    let magic = &bytes[MAGIC_OFFSET..MAGIC_OFFSET + 4];

    let size_matches = i32::from_le_bytes(size) == HEADER_SIZE as i32
        || i32::from_be_bytes(size) == HEADER_SIZE as i32;

    size_matches && (magic == MAGIC_SINGLE || magic == MAGIC_PAIR)
}

/// The file holding the header for `path`.
///
/// Image halves of a pair (`.img`, `.img.gz`) map to their `.hdr` sibling,
/// everything else maps to itself.
pub fn header_path(path: &Path) -> PathBuf {
    let Some(name) = path.file_name().and_then(|x| x.to_str()) else {
        return path.to_path_buf();
    };
    let lower = name.to_ascii_lowercase();

    for (from, to) in [(".img", ".hdr"), (".img.gz", ".hdr.gz")] {
        if lower.ends_with(from) {
            let stem = &name[..name.len() - from.len()];
            return path.with_file_name(format!("{stem}{to}"));
        }
    }
    path.to_path_buf()
}

pub(crate) fn probe_nifti(path: &Path) -> bool {
    read_leading_bytes(&header_path(path), HEADER_SIZE)
        .map(|bytes| is_nifti_header(&bytes))
        .unwrap_or(false)
}

fn read_header(path: &Path) -> Result<NiftiHeader, MedImageErrors> {
    let bytes = read_leading_bytes(path, HEADER_SIZE)
        .map_err(|e| MedImageErrors::UnreadableFormat(format!("{path:?}: {e}")))?;

    if !is_nifti_header(&bytes) {
        return Err(MedImageErrors::UnreadableFormat(format!(
            "{path:?} does not start with a NIfTI-1 header"
        )));
    }
    NiftiHeader::from_reader(bytes.as_slice())
        .map_err(|e| MedImageErrors::UnreadableFormat(format!("{path:?}: {e}")))
}

fn component_type(header: &NiftiHeader) -> Result<ComponentType, MedImageErrors> {
    let data_type = header.data_type().map_err(|_| {
        MedImageErrors::UnsupportedScalarKind(format!("NIfTI datatype code {}", header.datatype))
    })?;

    #[allow(unreachable_patterns)]
    let component = match data_type {
        NiftiType::Uint8 => ComponentType::U8,
        NiftiType::Int8 => ComponentType::I8,
        NiftiType::Uint16 => ComponentType::U16,
        NiftiType::Int16 => ComponentType::I16,
        NiftiType::Uint32 => ComponentType::U32,
        NiftiType::Int32 => ComponentType::I32,
        NiftiType::Uint64 => ComponentType::U64,
        NiftiType::Int64 => ComponentType::I64,
        NiftiType::Float32 => ComponentType::F32,
        NiftiType::Float64 => ComponentType::F64,
        other => {
            return Err(MedImageErrors::UnsupportedScalarKind(format!("{other:?}")));
        }
    };
    Ok(component)
}

/// On-disk dimensions of the first `n` axes
fn native_dims(header: &NiftiHeader, n: usize) -> Vec<usize> {
    header.dim[1..=n].iter().map(|x| (*x).max(0) as usize).collect()
}

/// What a single voxel of `header` holds
///
/// Unknown datatypes count as scalar here, [`descriptor_from_header`]
/// rejects them through their storage type.
pub fn pixel_semantics(header: &NiftiHeader) -> PixelSemantics {
    match header.data_type() {
        Ok(NiftiType::Complex64 | NiftiType::Complex128 | NiftiType::Complex256) => {
            return PixelSemantics::Complex;
        }
        Ok(NiftiType::Rgb24) => return PixelSemantics::Rgb,
        Ok(NiftiType::Rgba32) => return PixelSemantics::Rgba,
        _ => ()
    }
    let dims = header.dim[0].max(0) as usize;

    if i64::from(header.intent_code) == INTENT_VECTOR && dims >= 5 {
        let components = header.dim[5].max(0) as usize;

        if components > 1 {
            return PixelSemantics::Vector(components);
        }
    }
    PixelSemantics::Scalar
}

/// Build the descriptor of a header, rejecting everything but scalar
/// images with 2, 3 or 4 axes.
pub fn descriptor_from_header(header: &NiftiHeader) -> Result<ImageDescriptor, MedImageErrors> {
    let semantics = pixel_semantics(header);

    if !semantics.is_scalar() {
        return Err(MedImageErrors::UnsupportedPixelSemantics(semantics));
    }
    let component = component_type(header)?;
    let dims = header.dim[0].max(0) as usize;

    if !is_supported_dimensionality(dims) {
        return Err(MedImageErrors::UnsupportedDimensionality(dims));
    }
    ImageDescriptor::new(swap_leading(&native_dims(header, dims)), component)
}

/// Voxel sizes of zero or garbage mean "unknown", treat them as one
fn sanitize_spacing(value: f64) -> f64 {
    let value = value.abs();

    if value > 0.0 && value.is_finite() {
        value
    } else {
        1.0
    }
}

/// 3x3 rotation and scaling from the quaternion fields
fn quaternion_matrix(header: &NiftiHeader, pixdim: &[f64; 8]) -> [[f64; 3]; 3] {
    let mut b = f64::from(header.quatern_b);
    let mut c = f64::from(header.quatern_c);
    let mut d = f64::from(header.quatern_d);
    let mut a = 1.0 - (b * b + c * c + d * d);

    if a < 1e-7 {
        // 180 degree rotation, renormalize
        let scale = 1.0 / (b * b + c * c + d * d).sqrt();
        b *= scale;
        c *= scale;
        d *= scale;
        a = 0.0;
    } else {
        a = a.sqrt();
    }
    let qfac = if pixdim[0] < 0.0 { -1.0 } else { 1.0 };
    let scale = [
        sanitize_spacing(pixdim[1]),
        sanitize_spacing(pixdim[2]),
        qfac * sanitize_spacing(pixdim[3])
    ];
    let rotation = [
        [a * a + b * b - c * c - d * d, 2.0 * (b * c - a * d), 2.0 * (b * d + a * c)],
        [2.0 * (b * c + a * d), a * a + c * c - b * b - d * d, 2.0 * (c * d - a * b)],
        [2.0 * (b * d - a * c), 2.0 * (c * d + a * b), a * a + d * d - c * c - b * b]
    ];
    let mut matrix = [[0.0; 3]; 3];

    for (row, values) in rotation.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            matrix[row][col] = value * scale[col];
        }
    }
    matrix
}

/// RAS+ voxel to world transform, (matrix, offset)
fn spatial_transform(header: &NiftiHeader, pixdim: &[f64; 8]) -> ([[f64; 3]; 3], [f64; 3]) {
    if header.sform_code > 0 {
        trace!("Using sform, code {}", header.sform_code);

        let rows = [header.srow_x, header.srow_y, header.srow_z];
        let mut matrix = [[0.0; 3]; 3];
        let mut offset = [0.0; 3];

        for (r, row) in rows.iter().enumerate() {
            for c in 0..3 {
                matrix[r][c] = f64::from(row[c]);
            }
            offset[r] = f64::from(row[3]);
        }
        return (matrix, offset);
    }
    if header.qform_code > 0 {
        trace!("Using qform, code {}", header.qform_code);

        let offset = [
            f64::from(header.quatern_x),
            f64::from(header.quatern_y),
            f64::from(header.quatern_z)
        ];
        return (quaternion_matrix(header, pixdim), offset);
    }
    trace!("No sform or qform, falling back to voxel sizes");

    let matrix = [
        [sanitize_spacing(pixdim[1]), 0.0, 0.0],
        [0.0, sanitize_spacing(pixdim[2]), 0.0],
        [0.0, 0.0, sanitize_spacing(pixdim[3])]
    ];
    (matrix, [0.0; 3])
}

/// Library native spatial frame of a header, direction flattened row-major.
///
/// `dims` is the number of image axes, 2-axis images use the upper left
/// block of the 3D transform, 4-axis images extend it with an identity
/// time axis starting at `toffset`.
pub fn frame_from_header(header: &NiftiHeader, dims: usize) -> Result<SpatialFrame, MedImageErrors> {
    if !is_supported_dimensionality(dims) {
        return Err(MedImageErrors::UnsupportedDimensionality(dims));
    }
    let pixdim = header.pixdim.map(f64::from);
    let (matrix, offset) = spatial_transform(header, &pixdim);

    let mut rotation = [[0.0; 3]; 3];

    for col in 0..3 {
        let norm = matrix.iter().map(|row| row[col] * row[col]).sum::<f64>().sqrt();

        for row in 0..3 {
            rotation[row][col] = if norm > 0.0 && norm.is_finite() {
                matrix[row][col] / norm
            } else if row == col {
                1.0
            } else {
                0.0
            };
        }
    }
    // RAS to LPS
    for value in rotation[..2].iter_mut().flatten() {
        *value = -*value;
    }
    let position = [-offset[0], -offset[1], offset[2]];

    let mut direction = vec![0.0; dims * dims];

    for row in 0..dims {
        for col in 0..dims {
            direction[row * dims + col] = if row < 3 && col < 3 {
                rotation[row][col]
            } else if row == col {
                1.0
            } else {
                0.0
            };
        }
    }
    let mut origin: Vec<f64> = position.iter().take(dims).copied().collect();

    if dims == 4 {
        origin.push(f64::from(header.toffset));
    }
    let spacing = (1..=dims).map(|axis| sanitize_spacing(pixdim[axis])).collect();

    SpatialFrame::new(origin, spacing, direction)
}

/// Header describing a 3D library native frame.
///
/// The frame is stored as an `sform` with scanner anatomical code, the
/// `qform` is left unset. Dimensions and datatype are filled in by the writer.
pub fn header_from_frame(frame: &SpatialFrame) -> Result<NiftiHeader, MedImageErrors> {
    if frame.dimensionality() != 3 {
        return Err(MedImageErrors::UnsupportedDimensionality(
            frame.dimensionality()
        ));
    }
    let (origin, spacing, direction) = (frame.origin(), frame.spacing(), frame.direction());

    // LPS to RAS
    let flip = [-1.0, -1.0, 1.0];
    let mut rows = [[0.0_f32; 4]; 3];

    for (row, values) in rows.iter_mut().enumerate() {
        for col in 0..3 {
            values[col] = (flip[row] * direction[row * 3 + col] * spacing[col]) as f32;
        }
        values[3] = (flip[row] * origin[row]) as f32;
    }
    let mut header = NiftiHeader::default();

    header.pixdim = [1.0; 8];

    for (axis, value) in spacing.iter().enumerate() {
        header.pixdim[axis + 1] = *value as f32;
    }
    header.srow_x = rows[0];
    header.srow_y = rows[1];
    header.srow_z = rows[2];
    header.sform_code = 1;
    header.qform_code = 0;
    // millimeters, no time unit
    header.xyzt_units = 2;
    header.scl_slope = 1.0;
    header.scl_inter = 0.0;

    Ok(header)
}

/// A NIfTI-1 decoder bound to a file
pub struct NiftiDecoder {
    path:       PathBuf,
    header:     Option<NiftiHeader>,
    descriptor: Option<ImageDescriptor>
}

impl NiftiDecoder {
    /// Create a decoder for `path`, image halves of a pair are
    /// read through their header file.
    pub fn new<P: AsRef<Path>>(path: P) -> NiftiDecoder {
        NiftiDecoder {
            path:       header_path(path.as_ref()),
            header:     None,
            descriptor: None
        }
    }

    /// The raw header, available after [`read_headers`](DecoderTrait::read_headers)
    pub const fn header(&self) -> Option<&NiftiHeader> {
        self.header.as_ref()
    }
}

impl DecoderTrait for NiftiDecoder {
    fn read_headers(&mut self) -> Result<ImageDescriptor, MedImageErrors> {
        if let Some(descriptor) = &self.descriptor {
            return Ok(descriptor.clone());
        }
        let header = read_header(&self.path)?;
        let descriptor = descriptor_from_header(&header)?;

        debug!(
            "{:?}: {} axes, shape {:?}, {:?}",
            self.path,
            descriptor.dimensionality(),
            descriptor.shape(),
            descriptor.component_type()
        );
        self.header = Some(header);
        self.descriptor = Some(descriptor.clone());

        Ok(descriptor)
    }

    fn decode(&mut self, options: &ReaderOptions) -> Result<NativeImage, MedImageErrors> {
        let descriptor = self.read_headers()?;

        if descriptor.num_elements() > options.max_elements() {
            return Err(MedImageErrors::DecodeFailure(format!(
                "Image has {} pixels, more than the configured limit of {}",
                descriptor.num_elements(),
                options.max_elements()
            )));
        }
        let object = ::nifti::ReaderOptions::new()
            .read_file(&self.path)
            .map_err(|e| MedImageErrors::DecodeFailure(format!("{:?}: {e}", self.path)))?;

        let dims = descriptor.dimensionality();
        let frame = frame_from_header(object.header(), dims)?;
        let native = native_dims(object.header(), dims);

        let array = object
            .into_volume()
            .into_ndarray::<f64>()
            .map_err(|e| MedImageErrors::DecodeFailure(format!("{:?}: {e}", self.path)))?;

        // the reversed view iterates with the first on-disk axis fastest
        let pixels: Vec<f64> = array.t().iter().copied().collect();

        trace!("Decoded {} pixels", pixels.len());

        NativeImage::new(native, PixelData::F64(pixels), frame).map_err(|e| match e {
            MedImageErrors::BufferSizeMismatch(expected, found) => {
                MedImageErrors::DecodeFailure(format!(
                    "Expected {expected} pixels but the volume holds {found}"
                ))
            }
            other => other
        })
    }

    fn name(&self) -> &'static str {
        "nifti-decoder"
    }

    fn format(&self) -> ImageFormat {
        ImageFormat::Nifti
    }
}

/// A NIfTI-1 encoder bound to a destination file.
///
/// The destination decides the layout, `.nii` is a single file, `.hdr`
/// and `.img` a header/image pair, a trailing `.gz` compresses.
pub struct NiftiEncoder {
    path: PathBuf
}

impl NiftiEncoder {
    pub fn new<P: AsRef<Path>>(path: P) -> NiftiEncoder {
        NiftiEncoder {
            path: header_path(path.as_ref())
        }
    }
}

fn array_view<'a, T>(dims: &[usize], data: &'a [T]) -> Result<ArrayView<'a, T, IxDyn>, MedImageErrors> {
    ArrayView::from_shape(IxDyn(dims).f(), data)
        .map_err(|e| MedImageErrors::EncodeFailure(format!("{e}")))
}

impl EncoderTrait for NiftiEncoder {
    fn encode(&mut self, image: &NativeImage) -> Result<(), MedImageErrors> {
        let header = header_from_frame(image.frame())?;
        let writer = WriterOptions::new(&self.path).reference_header(&header);
        let dims = image.dims();

        debug!(
            "Writing {:?} as {:?}, dims {:?}",
            self.path,
            image.pixels().component_type(),
            dims
        );

        let result = match image.pixels() {
            PixelData::U8(data) => writer.write_nifti(&array_view(dims, data)?),
            PixelData::U32(data) => writer.write_nifti(&array_view(dims, data)?),
            PixelData::F32(data) => writer.write_nifti(&array_view(dims, data)?),
            PixelData::F64(data) => writer.write_nifti(&array_view(dims, data)?)
        };
        result.map_err(|e| MedImageErrors::EncodeFailure(format!("{:?}: {e}", self.path)))
    }

    fn name(&self) -> &'static str {
        "nifti-encoder"
    }

    fn format(&self) -> ImageFormat {
        ImageFormat::Nifti
    }
}
