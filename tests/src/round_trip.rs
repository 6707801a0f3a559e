/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;

use medimg::reader::read;
use medimg::writer::{write, write_with_kind};
use medimg_core::buffer::{DenseBuffer, Layout};
use medimg_core::scalar::ScalarKind;
use nanorand::Rng;

use crate::{scratch_path, sibling, IDENTITY};

const ORIGIN: [f64; 3] = [1.5, -2.25, 10.0];
const SPACING: [f64; 3] = [0.5, 1.25, 3.0];
/// A signed axis permutation, flattened column-major
const DIRECTION: [f64; 9] = [0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0];

/// Random pixel values that survive storage as `kind`
fn representable_values(kind: ScalarKind, len: usize, rng: &mut nanorand::WyRand) -> Vec<f64> {
    (0..len)
        .map(|_| match kind {
            ScalarKind::U8 => f64::from(rng.generate::<u8>()),
            ScalarKind::U16 => f64::from(rng.generate::<u16>()),
            // multiples of 1/64 and 1/1024 stay exact in either float width
            ScalarKind::F32 => f64::from(rng.generate_range(0_u32..=64_000)) / 64.0 - 500.0,
            ScalarKind::F64 => rng.generate_range(0_u64..=u64::from(u32::MAX)) as f64 / 1024.0
        })
        .collect()
}

fn round_trip(name: &str, kind: ScalarKind) {
    let path = scratch_path(name);
    let mut rng = nanorand::WyRand::new_seed(0xdead_beef);

    let shape = vec![4, 3, 5];
    let data = representable_values(kind, 60, &mut rng);
    let buffer = DenseBuffer::new(data.clone(), shape.clone(), Layout::HostLayout).unwrap();

    write(&path, buffer, &ORIGIN, &SPACING, &DIRECTION, kind.name()).unwrap();

    let image = read(&path).unwrap();

    assert_eq!(image.descriptor.shape(), shape.as_slice());
    assert_eq!(image.descriptor.component_type(), kind.storage());
    assert_eq!(image.descriptor.scalar_kind(), Some(kind));
    assert_eq!(image.buffer.layout(), Layout::HostLayout);
    assert_eq!(image.buffer.data(), data.as_slice(), "Pixels differ for {kind}");
    assert_eq!(image.origin.as_deref(), Some(ORIGIN.as_slice()));
    assert_eq!(image.spacing.as_deref(), Some(SPACING.as_slice()));
    assert_eq!(image.direction.as_deref(), Some(DIRECTION.as_slice()));

    let _ = fs::remove_file(&path);
}

#[test]
fn uint8_round_trip() {
    round_trip("uint8.nii", ScalarKind::U8);
}

#[test]
fn uint16_round_trip() {
    round_trip("uint16.nii", ScalarKind::U16);
}

#[test]
fn float_round_trip() {
    round_trip("float.nii", ScalarKind::F32);
}

#[test]
fn double_round_trip() {
    round_trip("double.nii", ScalarKind::F64);
}

#[test]
fn gzip_round_trip() {
    round_trip("compressed.nii.gz", ScalarKind::F32);

    let path = scratch_path("compressed-check.nii.gz");
    let buffer = crate::counting_buffer(&[2, 2, 2]);

    write(&path, buffer, &ORIGIN, &SPACING, &IDENTITY, "double").unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], &[0x1f, 0x8b]);

    let image = read(&path).unwrap();
    assert_eq!(image.buffer.data(), crate::counting_buffer(&[2, 2, 2]).data());

    let _ = fs::remove_file(&path);
}

#[test]
fn header_image_pair() {
    let path = scratch_path("pair.hdr");
    let image_half = sibling(&path, ".img");
    let buffer = crate::counting_buffer(&[3, 2, 2]);

    write(&path, buffer.clone(), &ORIGIN, &SPACING, &IDENTITY, "float").unwrap();

    assert!(image_half.exists());

    for source in [&path, &image_half] {
        let image = read(source).unwrap();
        assert_eq!(image.buffer.data(), buffer.data());
        assert_eq!(image.origin.as_deref(), Some(ORIGIN.as_slice()));
    }
    let _ = fs::remove_file(&path);
    let _ = fs::remove_file(&image_half);
}

#[test]
fn uint16_keeps_values_above_u16() {
    let path = scratch_path("uint16-wide.nii");
    let buffer = DenseBuffer::new(
        vec![0.0, 65535.0, 65536.0, 100000.0, 1.0, 2.0, 3.0, 4.0],
        vec![2, 2, 2],
        Layout::HostLayout
    )
    .unwrap();

    write_with_kind(&path, buffer.clone(), &ORIGIN, &SPACING, &IDENTITY, ScalarKind::U16)
        .unwrap();

    let image = read(&path).unwrap();
    assert_eq!(image.buffer.data(), buffer.data());

    let _ = fs::remove_file(&path);
}

#[test]
fn narrowing_saturates() {
    let path = scratch_path("saturate.nii");
    let buffer = DenseBuffer::new(
        vec![-5.0, 300.0, f64::NAN, 12.7, 0.0, 255.0, 256.0, 1.0],
        vec![2, 2, 2],
        Layout::HostLayout
    )
    .unwrap();

    write(&path, buffer, &ORIGIN, &SPACING, &IDENTITY, "uint8").unwrap();

    let image = read(&path).unwrap();
    assert_eq!(
        image.buffer.data(),
        &[0.0, 255.0, 0.0, 12.0, 0.0, 255.0, 255.0, 1.0]
    );

    let _ = fs::remove_file(&path);
}
