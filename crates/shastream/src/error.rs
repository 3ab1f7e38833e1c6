// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;

use thiserror::Error;

use shastream_codec::{CodecError, UnknownFormatError};
use shastream_core::UnknownVariantError;

/// Bad construction or key-setting parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Variant name outside "SHA-1", "SHA-224", "SHA-256", "SHA-384", "SHA-512".
    #[error(transparent)]
    UnknownVariant(#[from] UnknownVariantError),

    /// Input format, output format or text encoding name not recognised.
    #[error(transparent)]
    UnknownFormat(#[from] UnknownFormatError),

    /// Iteration count that is not an integer >= 1.
    #[error("numRounds must be an integer >= 1 (got {0:?})")]
    InvalidNumRounds(String),
}

/// Operation called out of the permitted order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// `set_hmac_key` called twice.
    #[error("HMAC key already set")]
    KeyAlreadySet,

    /// `set_hmac_key` after the digest was produced.
    #[error("cannot set HMAC key after finalizing hash")]
    KeyAfterFinalize,

    /// `set_hmac_key` after data was fed.
    #[error("cannot set HMAC key after calling update")]
    KeyAfterUpdate,

    /// `update` after the digest was produced.
    #[error("cannot call update after finalizing hash")]
    UpdateAfterFinalize,

    /// `get_hash` on a keyed session; use `get_hmac`.
    #[error("cannot call get_hash after setting HMAC key")]
    HashOnKeyedSession,

    /// `get_hmac` on a session without a key.
    #[error("cannot call get_hmac without first setting HMAC key")]
    HmacWithoutKey,
}

/// Every failure a session can report.
///
/// All three kinds are deterministic: retrying the same call on the same
/// session fails the same way. A failed call leaves the session unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShaError {
    /// Input not valid for its declared encoding.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] CodecError),

    /// Bad variant, format or encoding name, or bad `numRounds`.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// Operation not allowed in the session's current phase.
    #[error("invalid state: {0}")]
    InvalidState(#[from] StateError),
}

impl From<UnknownVariantError> for ShaError {
    fn from(err: UnknownVariantError) -> Self {
        ShaError::InvalidConfiguration(err.into())
    }
}

impl From<UnknownFormatError> for ShaError {
    fn from(err: UnknownFormatError) -> Self {
        ShaError::InvalidConfiguration(err.into())
    }
}
