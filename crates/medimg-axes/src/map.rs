/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Explicit index transforms between the two flattening conventions
//!
//! A flattening is described by a stride per host axis and the order
//! in which the axes vary, fastest first.
//!
//! | layout         | fastest to slowest   | strides `[s0, s1, s2, s3]`            |
//! |----------------|----------------------|---------------------------------------|
//! | library native | `s1, s0, s2, s3`     | `[s1, 1, s0*s1, s0*s1*s2]`            |
//! | host           | `s0, s1, s2, s3`     | `[1, s0, s0*s1, s0*s1*s2]`            |
//!
//! Mapping an offset decomposes it into per axis coordinates using the source
//! strides, slowest axis first, then recombines them with the destination strides.
//!
//! For three axes and a native offset `k` this gives
//! `depth = k / (s0*s1)`, `row = (k % (s0*s1)) / s1`, `col = (k % (s0*s1)) % s1`
//! and the host offset `row + col*s0 + depth*s0*s1`.
use medimg_core::descriptor::validate_shape;
use medimg_core::errors::MedImageErrors;
use medimg_core::MAX_DIMENSIONS;

/// Which way a permutation goes
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Library native to host layout, used when reading
    NativeToHost,
    /// Host layout to library native, used when writing
    HostToNative
}

impl Direction {
    pub const fn inverse(self) -> Direction {
        match self {
            Self::NativeToHost => Self::HostToNative,
            Self::HostToNative => Self::NativeToHost
        }
    }
}

/// Strides of one flattening convention
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Strides {
    /// stride of each host axis
    strides: [usize; MAX_DIMENSIONS],
    /// host axes ordered from fastest to slowest varying
    order:   [usize; MAX_DIMENSIONS]
}

impl Strides {
    fn new(shape: &[usize], order: [usize; MAX_DIMENSIONS]) -> Strides {
        let mut strides = [0; MAX_DIMENSIONS];
        let mut step = 1;

        for &axis in order.iter().filter(|axis| **axis < shape.len()) {
            strides[axis] = step;
            step *= shape[axis];
        }
        Strides { strides, order }
    }
}

/// Index mapping for one shape
///
/// # Example
/// ```
/// use medimg_axes::AxisMap;
///
/// let map = AxisMap::new(&[2, 3]).unwrap();
/// // native offset 1 is row 0, column 1
/// assert_eq!(map.to_host(1), 2);
/// assert_eq!(map.to_native(2), 1);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AxisMap {
    dims:   usize,
    len:    usize,
    native: Strides,
    host:   Strides
}

impl AxisMap {
    /// Create a mapping for a host ordered shape
    ///
    /// # Errors
    /// - Unsupported dimensionality, only 2, 3 and 4 axes are supported
    /// - An axis of zero length
    pub fn new(shape: &[usize]) -> Result<AxisMap, MedImageErrors> {
        validate_shape(shape)?;

        Ok(AxisMap {
            dims:   shape.len(),
            len:    shape.iter().product(),
            native: Strides::new(shape, [1, 0, 2, 3]),
            host:   Strides::new(shape, [0, 1, 2, 3])
        })
    }

    /// Number of axes
    pub const fn dimensionality(&self) -> usize {
        self.dims
    }

    /// Number of elements addressed by the mapping
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Map a library native offset to its host layout offset
    pub fn to_host(&self, offset: usize) -> usize {
        self.map(offset, Direction::NativeToHost)
    }

    /// Map a host layout offset to its library native offset
    pub fn to_native(&self, offset: usize) -> usize {
        self.map(offset, Direction::HostToNative)
    }

    /// Map an offset in the source convention of `direction` to the
    /// destination convention.
    ///
    /// `offset` must be less than [`len`](Self::len)
    pub fn map(&self, offset: usize, direction: Direction) -> usize {
        debug_assert!(offset < self.len, "Offset {offset} out of bounds {}", self.len);

        let (from, to) = match direction {
            Direction::NativeToHost => (&self.native, &self.host),
            Direction::HostToNative => (&self.host, &self.native)
        };
        let mut remainder = offset;
        let mut mapped = 0;

        for &axis in from.order[..self.dims].iter().rev() {
            let stride = from.strides[axis];
            let coord = remainder / stride;

            remainder %= stride;
            mapped += coord * to.strides[axis];
        }
        mapped
    }
}
