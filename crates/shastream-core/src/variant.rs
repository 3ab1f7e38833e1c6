// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::borrow::ToOwned;
use core::fmt;
use core::str::FromStr;

use crate::error::UnknownVariantError;

/// Lane width of the chaining state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneWidth {
    /// 32-bit lanes (SHA-1, SHA-224, SHA-256)
    W32,
    /// 64-bit lanes (SHA-384, SHA-512)
    W64,
}

/// Supported members of the SHA family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// SHA-1, 160-bit digest
    Sha1,
    /// SHA-224, 224-bit digest (truncated SHA-256 with its own IV)
    Sha224,
    /// SHA-256, 256-bit digest
    Sha256,
    /// SHA-384, 384-bit digest (truncated SHA-512 with its own IV)
    Sha384,
    /// SHA-512, 512-bit digest
    Sha512,
}

impl Variant {
    /// Every variant, in increasing digest size.
    pub const ALL: [Variant; 5] = [
        Variant::Sha1,
        Variant::Sha224,
        Variant::Sha256,
        Variant::Sha384,
        Variant::Sha512,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Sha1 => "SHA-1",
            Variant::Sha224 => "SHA-224",
            Variant::Sha256 => "SHA-256",
            Variant::Sha384 => "SHA-384",
            Variant::Sha512 => "SHA-512",
        }
    }

    /// Lane width of the chaining state.
    pub const fn lane_width(self) -> LaneWidth {
        match self {
            Variant::Sha1 | Variant::Sha224 | Variant::Sha256 => LaneWidth::W32,
            Variant::Sha384 | Variant::Sha512 => LaneWidth::W64,
        }
    }

    /// Block size in bits (512 or 1024).
    pub const fn block_bits(self) -> usize {
        match self.lane_width() {
            LaneWidth::W32 => 512,
            LaneWidth::W64 => 1024,
        }
    }

    /// Block size in packed 32-bit words.
    pub const fn block_words(self) -> usize {
        self.block_bits() / 32
    }

    /// Block size in bytes.
    pub const fn block_bytes(self) -> usize {
        self.block_bits() / 8
    }

    /// Width of the trailing message-length field in bits (64 or 128).
    pub const fn length_field_bits(self) -> usize {
        match self.lane_width() {
            LaneWidth::W32 => 64,
            LaneWidth::W64 => 128,
        }
    }

    /// Digest size in bits.
    pub const fn output_bits(self) -> usize {
        match self {
            Variant::Sha1 => 160,
            Variant::Sha224 => 224,
            Variant::Sha256 => 256,
            Variant::Sha384 => 384,
            Variant::Sha512 => 512,
        }
    }

    /// Digest size in packed 32-bit words.
    pub const fn output_words(self) -> usize {
        self.output_bits() / 32
    }

    /// Digest size in bytes.
    pub const fn output_bytes(self) -> usize {
        self.output_bits() / 8
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.name() == s)
            .ok_or_else(|| UnknownVariantError(s.to_owned()))
    }
}
