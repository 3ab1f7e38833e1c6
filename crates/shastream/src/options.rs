// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Session and key configuration.

use alloc::string::{String, ToString};
use core::fmt;
use core::num::NonZeroU32;
use core::str::FromStr;

use shastream_codec::TextEncoding;

use crate::error::ConfigError;

/// Number of times the digest is computed (`numRounds`).
///
/// `1` is the standard hash. `n > 1` rehashes the digest `n - 1` more times,
/// each time as a fresh message with a freshly initialized state. This is a
/// non-standard extension and matches no published construction; HMAC
/// ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NumRounds(NonZeroU32);

impl NumRounds {
    /// A single round: plain SHA.
    pub const ONE: NumRounds = NumRounds(NonZeroU32::MIN);

    /// `None` for zero.
    pub const fn new(rounds: u32) -> Option<Self> {
        match NonZeroU32::new(rounds) {
            Some(rounds) => Some(NumRounds(rounds)),
            None => None,
        }
    }

    /// Total number of rounds (>= 1).
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Rounds applied after the first one.
    pub(crate) const fn extra(self) -> u32 {
        self.0.get() - 1
    }
}

impl Default for NumRounds {
    fn default() -> Self {
        NumRounds::ONE
    }
}

impl fmt::Display for NumRounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<u32> for NumRounds {
    type Error = ConfigError;

    fn try_from(rounds: u32) -> Result<Self, Self::Error> {
        NumRounds::new(rounds).ok_or_else(|| ConfigError::InvalidNumRounds(rounds.to_string()))
    }
}

impl TryFrom<i64> for NumRounds {
    type Error = ConfigError;

    fn try_from(rounds: i64) -> Result<Self, Self::Error> {
        u32::try_from(rounds)
            .ok()
            .and_then(NumRounds::new)
            .ok_or_else(|| ConfigError::InvalidNumRounds(rounds.to_string()))
    }
}

impl FromStr for NumRounds {
    type Err = ConfigError;

    /// Accepts decimal integers only: `"2.5"`, `"-1"`, `"0"` and `""` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .ok()
            .and_then(NumRounds::new)
            .ok_or_else(|| ConfigError::InvalidNumRounds(String::from(s)))
    }
}

/// Options fixed at session construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Encoding of `TEXT` input passed to `update`.
    pub text_encoding: TextEncoding,
    /// Iterated hashing rounds, see [`NumRounds`].
    pub num_rounds: NumRounds,
}

impl SessionOptions {
    /// Set the `TEXT` encoding for `update`.
    pub fn with_text_encoding(mut self, text_encoding: TextEncoding) -> Self {
        self.text_encoding = text_encoding;
        self
    }

    /// Set the number of hashing rounds.
    pub fn with_num_rounds(mut self, num_rounds: NumRounds) -> Self {
        self.num_rounds = num_rounds;
        self
    }
}

/// Options for decoding an HMAC key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyOptions {
    /// Encoding of a `TEXT` key.
    pub text_encoding: TextEncoding,
}

impl KeyOptions {
    /// Set the `TEXT` encoding for the key.
    pub fn with_text_encoding(mut self, text_encoding: TextEncoding) -> Self {
        self.text_encoding = text_encoding;
        self
    }
}
