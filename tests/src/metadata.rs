/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;

use medimg::codecs::nifti::NiftiEncoder;
use medimg::image::{NativeImage, PixelData};
use medimg::reader::{read, read_with_options};
use medimg::traits::EncoderTrait;
use medimg_axes::metadata::direction_to_host;
use medimg_axes::AxisMap;
use medimg_core::buffer::Layout;
use medimg_core::options::{MetadataLevel, ReaderOptions};
use medimg_core::spatial::SpatialFrame;
use nifti::NiftiHeader;

use crate::{scratch_path, write_raw_nifti, IDENTITY};

/// Write a 3D image in on-disk conventions, pixels counting up
fn write_native(name: &str, dims: Vec<usize>, frame: SpatialFrame) -> std::path::PathBuf {
    let path = scratch_path(name);
    let len = dims.iter().product::<usize>();
    let pixels = PixelData::F64((0..len).map(|x| x as f64).collect());
    let image = NativeImage::new(dims, pixels, frame).unwrap();

    NiftiEncoder::new(&path).encode(&image).unwrap();
    path
}

#[test]
fn leading_metadata_is_swapped() {
    let frame =
        SpatialFrame::new(vec![1.0, 2.0, 3.0], vec![0.5, 2.0, 4.0], IDENTITY.to_vec()).unwrap();
    let path = write_native("native-origin.nii", vec![3, 2, 4], frame);

    let image = read(&path).unwrap();

    assert_eq!(image.descriptor.shape(), &[2, 3, 4]);
    assert_eq!(image.origin.as_deref(), Some([2.0, 1.0, 3.0].as_slice()));
    assert_eq!(image.spacing.as_deref(), Some([2.0, 0.5, 4.0].as_slice()));

    let _ = fs::remove_file(&path);
}

#[test]
fn pixels_follow_axis_map() {
    let frame = SpatialFrame::identity(3).unwrap();
    let path = write_native("native-pixels.nii", vec![3, 2, 4], frame);

    let image = read(&path).unwrap();
    let map = AxisMap::new(image.descriptor.shape()).unwrap();

    assert_eq!(image.buffer.layout(), Layout::HostLayout);

    for (host, value) in image.buffer.data().iter().enumerate() {
        assert_eq!(*value, map.to_native(host) as f64, "host offset {host}");
    }
    let _ = fs::remove_file(&path);
}

#[test]
fn direction_is_column_major() {
    // a rotation about the third axis, row-major
    let native = vec![0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0];
    let frame = SpatialFrame::new(vec![0.0; 3], vec![1.0; 3], native.clone()).unwrap();
    let path = write_native("native-direction.nii", vec![2, 2, 2], frame);

    let image = read(&path).unwrap();

    assert_eq!(
        image.direction,
        Some(direction_to_host(&native, 3).unwrap())
    );
    let _ = fs::remove_file(&path);
}

#[test]
fn four_dimensional_read() {
    let path = scratch_path("four-axes.nii");
    let dims = [4, 3, 2, 2];
    let len = dims.iter().product::<usize>();

    let mut header = NiftiHeader::default();
    header.sform_code = 1;
    header.srow_x = [2.0, 0.0, 0.0, -10.0];
    header.srow_y = [0.0, 3.0, 0.0, -20.0];
    header.srow_z = [0.0, 0.0, 4.0, 30.0];
    header.pixdim = [1.0, 2.0, 3.0, 4.0, 0.5, 1.0, 1.0, 1.0];
    header.toffset = 2.5;

    write_raw_nifti(&path, &dims, (0..len).map(|x| x as f32).collect(), &header);

    let image = read(&path).unwrap();

    assert_eq!(image.dimensionality(), 4);
    assert_eq!(image.descriptor.shape(), &[3, 4, 2, 2]);
    assert_eq!(
        image.origin.as_deref(),
        Some([20.0, 10.0, 30.0, 2.5].as_slice())
    );
    assert_eq!(
        image.spacing.as_deref(),
        Some([3.0, 2.0, 4.0, 0.5].as_slice())
    );
    #[rustfmt::skip]
    let direction = [
        -1.0,  0.0, 0.0, 0.0,
         0.0, -1.0, 0.0, 0.0,
         0.0,  0.0, 1.0, 0.0,
         0.0,  0.0, 0.0, 1.0,
    ];
    assert_eq!(image.direction.as_deref(), Some(direction.as_slice()));

    let map = AxisMap::new(image.descriptor.shape()).unwrap();

    for (host, value) in image.buffer.data().iter().enumerate() {
        assert_eq!(*value, map.to_native(host) as f64);
    }
    let _ = fs::remove_file(&path);
}

#[test]
fn two_dimensional_read() {
    let path = scratch_path("two-axes.nii");
    let mut header = NiftiHeader::default();
    header.pixdim = [1.0, 0.25, 0.75, 1.0, 1.0, 1.0, 1.0, 1.0];

    write_raw_nifti(&path, &[5, 3], (0..15).map(|x| x as f32).collect(), &header);

    let image = read(&path).unwrap();

    assert_eq!(image.descriptor.shape(), &[3, 5]);
    assert_eq!(image.spacing.as_deref(), Some([0.75, 0.25].as_slice()));
    assert_eq!(image.direction.as_ref().map(Vec::len), Some(4));

    let map = AxisMap::new(&[3, 5]).unwrap();

    for (host, value) in image.buffer.data().iter().enumerate() {
        assert_eq!(*value, map.to_native(host) as f64);
    }
    let _ = fs::remove_file(&path);
}

#[test]
fn metadata_levels() {
    let frame =
        SpatialFrame::new(vec![4.0, 5.0, 6.0], vec![1.0, 2.0, 3.0], IDENTITY.to_vec()).unwrap();
    let path = write_native("levels.nii", vec![2, 3, 2], frame);

    let full = read(&path).unwrap();

    let levels = [
        (MetadataLevel::PixelsOnly, false, false, false),
        (MetadataLevel::Origin, true, false, false),
        (MetadataLevel::OriginSpacing, true, true, false),
        (MetadataLevel::Full, true, true, true)
    ];
    for (level, origin, spacing, direction) in levels {
        let options = ReaderOptions::default().set_metadata_level(level);
        let image = read_with_options(&path, options).unwrap();

        assert_eq!(image.buffer, full.buffer, "{level:?}");
        assert_eq!(image.origin.is_some(), origin, "{level:?}");
        assert_eq!(image.spacing.is_some(), spacing, "{level:?}");
        assert_eq!(image.direction.is_some(), direction, "{level:?}");
    }
    let pixels = read_with_options(&path, ReaderOptions::pixels_only()).unwrap();
    assert_eq!(pixels.origin, None);

    let _ = fs::remove_file(&path);
}
