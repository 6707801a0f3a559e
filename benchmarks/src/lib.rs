/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

/// Shapes benchmarked, in host order
pub const SHAPES: [[usize; 3]; 3] = [[64, 64, 64], [256, 256, 32], [512, 512, 8]];

/// A path in the temporary directory for files written
/// while benchmarking
pub fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("medimg-bench-{name}"))
}
