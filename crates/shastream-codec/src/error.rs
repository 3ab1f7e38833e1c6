// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;

use thiserror::Error;

/// Input that is not valid for the selected encoding.
///
/// Positions count characters (not bytes) from the start of the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// HEX input with an odd number of digits.
    #[error("HEX input must be in byte increments (got {len} digits)")]
    OddHexLength {
        /// Number of characters in the input
        len: usize,
    },

    /// Character outside `[0-9a-fA-F]` in HEX input.
    #[error("invalid HEX digit {ch:?} at position {position}")]
    InvalidHexDigit {
        /// Offending character
        ch: char,
        /// Character index
        position: usize,
    },

    /// Character outside `[A-Za-z0-9+/=]` in base-64 input.
    #[error("invalid base-64 character {ch:?} at position {position}")]
    InvalidBase64Char {
        /// Offending character
        ch: char,
        /// Character index
        position: usize,
    },

    /// `=` padding followed by more data.
    #[error("base-64 padding '=' at position {position} precedes data")]
    PaddingBeforeData {
        /// Index of the first `=`
        position: usize,
    },

    /// BYTES input character that does not fit in one byte.
    #[error("BYTES character {ch:?} at position {position} is above U+00FF")]
    ByteOutOfRange {
        /// Offending character
        ch: char,
        /// Character index
        position: usize,
    },
}

/// Unrecognised input format, output format or text encoding name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported {kind}: {name:?}")]
pub struct UnknownFormatError {
    /// What was being parsed ("input format", "output format", "text encoding")
    pub kind: &'static str,
    /// The rejected name
    pub name: String,
}
