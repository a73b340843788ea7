// Copyright 2026 the HyperText Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error returned when an [`IndexRange`](crate::IndexRange) cannot be built from its endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    start: usize,
    end: usize,
}

impl Error {
    pub(crate) fn invalid_range(start: usize, end: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidRange,
            start,
            end,
        }
    }

    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The requested first index.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The requested last index.
    pub fn end(&self) -> usize {
        self.end
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Self { start, end, .. } = self;
        match self.kind {
            ErrorKind::InvalidRange => write!(f, "invalid range {start}..={end}: start > end"),
        }
    }
}

impl core::error::Error for Error {}

/// The category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The first index was greater than the last one.
    InvalidRange,
}
