// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Error returned when a style is constructed with an invalid identifier or value.
///
/// These are programmer errors: styles built from markup never produce them, unknown names in
/// markup simply fall back to default styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    value: String,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn new(kind: ErrorKind, value: &str) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::EmptyIdentifier => write!(f, "identifier must not be empty"),
            ErrorKind::InvalidTagName => write!(
                f,
                "tag name {:?} must only contain letters, digits and underscores",
                self.value
            ),
            ErrorKind::ReservedTagName => {
                write!(f, "tag name {:?} is reserved by rich text", self.value)
            }
            ErrorKind::InvalidColor => write!(
                f,
                "{:?} is not a #RRGGBB or #RRGGBBAA color",
                self.value
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A class name or tag name was empty.
    EmptyIdentifier,

    /// A custom tag name contained characters other than letters, digits and underscores.
    InvalidTagName,

    /// A custom tag name collides with a built-in rich text tag.
    ReservedTagName,

    /// A color string could not be parsed.
    InvalidColor,
}
