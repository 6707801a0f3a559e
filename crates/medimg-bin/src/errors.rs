/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};

use medimg::MedImageErrors;

/// Errors the command line can run into
pub enum CmdErrors {
    Image(MedImageErrors),
    Io(std::io::Error),
    Json(serde_json::Error),
    Generic(String)
}

impl Debug for CmdErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image(err) => writeln!(f, "{err:?}"),
            Self::Io(err) => writeln!(f, "I/O error: {err}"),
            Self::Json(err) => writeln!(f, "Could not serialize output: {err}"),
            Self::Generic(reason) => writeln!(f, "{reason}")
        }
    }
}

impl From<MedImageErrors> for CmdErrors {
    fn from(value: MedImageErrors) -> Self {
        CmdErrors::Image(value)
    }
}

impl From<std::io::Error> for CmdErrors {
    fn from(value: std::io::Error) -> Self {
        CmdErrors::Io(value)
    }
}

impl From<serde_json::Error> for CmdErrors {
    fn from(value: serde_json::Error) -> Self {
        CmdErrors::Json(value)
    }
}
