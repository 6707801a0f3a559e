/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;

use medimg::probe::probe;
use medimg::reader::{read, read_with_options};
use medimg::writer::write;
use medimg_core::buffer::{DenseBuffer, Layout};
use medimg_core::errors::MedImageErrors;
use medimg_core::options::ReaderOptions;
use medimg_core::scalar::{ComponentType, PixelSemantics};
use nifti::NiftiHeader;

use crate::{counting_buffer, scratch_path, sibling, write_raw_nifti, IDENTITY};

#[test]
fn five_axes_are_rejected() {
    let path = scratch_path("five-axes.nii");

    write_raw_nifti(&path, &[2, 2, 2, 2, 2], vec![0.0; 32], &NiftiHeader::default());

    let err = probe(&path).unwrap_err();
    assert!(matches!(err, MedImageErrors::UnsupportedDimensionality(5)));

    let err = read(&path).unwrap_err();
    assert!(matches!(err, MedImageErrors::UnsupportedDimensionality(5)));

    let _ = fs::remove_file(&path);
}

#[test]
fn vector_pixels_are_rejected() {
    let path = scratch_path("vector.nii");
    let mut header = NiftiHeader::default();
    // NIFTI_INTENT_VECTOR
    header.intent_code = 1007;

    write_raw_nifti(&path, &[2, 2, 2, 1, 3], vec![1.0; 24], &header);

    let err = probe(&path).unwrap_err();
    assert!(matches!(
        err,
        MedImageErrors::UnsupportedPixelSemantics(PixelSemantics::Vector(3))
    ));
    let _ = fs::remove_file(&path);
}

#[test]
fn writer_only_takes_three_axes() {
    for shape in [vec![4, 4], vec![2, 3, 4, 5]] {
        let path = scratch_path("writer-axes.nii");
        let dims = shape.len();
        let buffer = counting_buffer(&shape);

        let err = write(
            &path,
            buffer,
            &vec![0.0; dims],
            &vec![1.0; dims],
            &vec![0.0; dims * dims],
            "float"
        )
        .unwrap_err();

        assert!(matches!(err, MedImageErrors::UnsupportedDimensionality(n) if n == dims));
        assert!(!path.exists());
    }
}

#[test]
fn unknown_kind_writes_nothing() {
    let path = scratch_path("int32.nii");

    let err = write(
        &path,
        counting_buffer(&[2, 2, 2]),
        &[0.0; 3],
        &[1.0; 3],
        &IDENTITY,
        "int32"
    )
    .unwrap_err();

    assert!(matches!(err, MedImageErrors::UnsupportedScalarKind(_)));
    assert!(!path.exists());
}

#[test]
fn writer_accepts_native_layout() {
    let path = scratch_path("native-layout.nii");
    let native = DenseBuffer::new(
        (0..8).map(f64::from).collect(),
        vec![2, 2, 2],
        Layout::LibraryNative
    )
    .unwrap();

    write(&path, native, &[0.0; 3], &[1.0; 3], &IDENTITY, "float").unwrap();

    let image = read(&path).unwrap();
    // 2x2 planes transpose when the layout changes
    assert_eq!(image.buffer.data(), &[0.0, 2.0, 1.0, 3.0, 4.0, 6.0, 5.0, 7.0]);

    let _ = fs::remove_file(&path);
}

#[test]
fn unreadable_files() {
    let missing = scratch_path("does-not-exist.nii");
    assert!(matches!(
        probe(&missing).unwrap_err(),
        MedImageErrors::UnreadableFormat(_)
    ));

    let garbage = scratch_path("garbage.nii");
    fs::write(&garbage, vec![0xAB_u8; 1024]).unwrap();

    assert!(matches!(
        probe(&garbage).unwrap_err(),
        MedImageErrors::UnreadableFormat(_)
    ));
    assert!(matches!(
        read(&garbage).unwrap_err(),
        MedImageErrors::UnreadableFormat(_)
    ));
    let _ = fs::remove_file(&garbage);
}

#[test]
fn probe_does_not_touch_pixels() {
    let path = scratch_path("headers-only.hdr");
    let payload = sibling(&path, ".img");

    write(&path, counting_buffer(&[3, 4, 5]), &[0.0; 3], &[1.0; 3], &IDENTITY, "uint16").unwrap();
    fs::remove_file(&payload).unwrap();

    let descriptor = probe(&path).unwrap();

    assert_eq!(descriptor.shape(), &[3, 4, 5]);
    assert_eq!(descriptor.component_type(), ComponentType::U32);

    let err = read(&path).unwrap_err();
    assert!(matches!(err, MedImageErrors::DecodeFailure(_)));

    let _ = fs::remove_file(&path);
}

#[test]
fn truncated_payload() {
    let path = scratch_path("truncated.nii");

    write(&path, counting_buffer(&[8, 8, 8]), &[0.0; 3], &[1.0; 3], &IDENTITY, "double").unwrap();

    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

    assert!(probe(&path).is_ok());
    assert!(matches!(
        read(&path).unwrap_err(),
        MedImageErrors::DecodeFailure(_)
    ));
    let _ = fs::remove_file(&path);
}

#[test]
fn element_limit() {
    let path = scratch_path("limit.nii");

    write(&path, counting_buffer(&[4, 4, 4]), &[0.0; 3], &[1.0; 3], &IDENTITY, "uint8").unwrap();

    let options = ReaderOptions::default().set_max_elements(63);
    assert!(matches!(
        read_with_options(&path, options).unwrap_err(),
        MedImageErrors::DecodeFailure(_)
    ));
    let options = ReaderOptions::default().set_max_elements(64);
    assert!(read_with_options(&path, options).is_ok());

    let _ = fs::remove_file(&path);
}
