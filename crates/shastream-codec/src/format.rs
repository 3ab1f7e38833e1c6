// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Format names and output formatting options.

use alloc::borrow::ToOwned;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::UnknownFormatError;

/// Implements `name()`, `ALL`, `Display` and `FromStr` for a fieldless enum
/// from a `Variant => "NAME"` table.
macro_rules! named_formats {
    ($ty:ident, $kind:literal, [$($variant:ident => $name:literal),+ $(,)?]) => {
        impl $ty {
            /// Every value, in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Canonical name, as accepted by [`FromStr`].
            pub const fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownFormatError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.name() == s)
                    .ok_or_else(|| UnknownFormatError {
                        kind: $kind,
                        name: s.to_owned(),
                    })
            }
        }
    };
}

/// How `update` / `set_hmac_key` input strings are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputFormat {
    /// Hexadecimal digits, two per byte
    Hex,
    /// Text, converted to bytes through a [`TextEncoding`]
    Text,
    /// Standard base-64 alphabet with optional `=` padding
    B64,
    /// One byte per character (U+0000..=U+00FF)
    Bytes,
}

named_formats!(InputFormat, "input format", [
    Hex => "HEX",
    Text => "TEXT",
    B64 => "B64",
    Bytes => "BYTES",
]);

/// Byte expansion used for [`InputFormat::Text`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    /// UTF-8
    #[default]
    Utf8,
    /// UTF-16, big-endian code units
    Utf16Be,
    /// UTF-16, little-endian code units
    Utf16Le,
}

named_formats!(TextEncoding, "text encoding", [
    Utf8 => "UTF8",
    Utf16Be => "UTF16BE",
    Utf16Le => "UTF16LE",
]);

/// Representation of a finished digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Hexadecimal, lowercase unless [`OutputOptions::output_upper`]
    Hex,
    /// Base-64, padded with [`OutputOptions::b64_pad`]
    B64,
    /// One character per byte (U+0000..=U+00FF)
    Bytes,
}

named_formats!(OutputFormat, "output format", [
    Hex => "HEX",
    B64 => "B64",
    Bytes => "BYTES",
]);

/// Formatting knobs for [`encode`](crate::encode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
    /// Uppercase hex digits. Ignored by B64 and BYTES.
    pub output_upper: bool,
    /// Emitted once per missing base-64 character. Empty omits padding.
    pub b64_pad: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            output_upper: false,
            b64_pad: "=".to_owned(),
        }
    }
}

impl OutputOptions {
    /// Set uppercase hex output.
    pub fn with_output_upper(mut self, output_upper: bool) -> Self {
        self.output_upper = output_upper;
        self
    }

    /// Replace the base-64 pad string.
    pub fn with_b64_pad(mut self, b64_pad: impl Into<String>) -> Self {
        self.b64_pad = b64_pad.into();
        self
    }
}
