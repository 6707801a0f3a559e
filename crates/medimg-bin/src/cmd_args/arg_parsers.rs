/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::ValueEnum;
use medimg_core::options::MetadataLevel;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MetadataLevelArg {
    Pixels,
    Origin,
    Spacing,
    Full
}

impl MetadataLevelArg {
    pub const fn to_metadata_level(self) -> MetadataLevel {
        match self {
            MetadataLevelArg::Pixels => MetadataLevel::PixelsOnly,
            MetadataLevelArg::Origin => MetadataLevel::Origin,
            MetadataLevelArg::Spacing => MetadataLevel::OriginSpacing,
            MetadataLevelArg::Full => MetadataLevel::Full
        }
    }
}

impl ValueEnum for MetadataLevelArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Pixels, Self::Origin, Self::Spacing, Self::Full]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Pixels => PossibleValue::new("pixels"),
            Self::Origin => PossibleValue::new("origin"),
            Self::Spacing => PossibleValue::new("spacing"),
            Self::Full => PossibleValue::new("full")
        })
    }
}

fn parse_list<T: std::str::FromStr>(value: &str) -> Result<Vec<T>, String> {
    value
        .split(',')
        .map(|x| x.trim())
        .filter(|x| !x.is_empty())
        .map(|x| {
            x.parse::<T>()
                .map_err(|_| format!("Could not parse {x:?} in list {value:?}"))
        })
        .collect()
}

/// Parse a comma separated list of floats, e.g `0.5,1,2`
pub fn parse_f64_list(value: &str) -> Result<Vec<f64>, String> {
    parse_list(value)
}

/// Parse a comma separated list of sizes, e.g `64,64,32`
pub fn parse_usize_list(value: &str) -> Result<Vec<usize>, String> {
    parse_list(value)
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::arg_parsers::{parse_f64_list, parse_usize_list};

    #[test]
    fn lists() {
        assert_eq!(parse_f64_list("0.5, 1,-2").unwrap(), vec![0.5, 1.0, -2.0]);
        assert_eq!(parse_usize_list("64,64,32").unwrap(), vec![64, 64, 32]);
        assert!(parse_usize_list("4,-1").is_err());
        assert!(parse_f64_list("a,b").is_err());
    }
}
