// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming SHA-1 / SHA-2 hashing and HMAC.
//!
//! A [`ShaSession`] ingests data incrementally in any of the supported input
//! encodings (`HEX`, `TEXT` as UTF-8/UTF-16BE/UTF-16LE, `B64`, `BYTES`) and
//! produces the digest as hex, base-64 or a byte string. Calls must follow
//! the lifecycle below; anything else is rejected with
//! [`ShaError::InvalidState`]:
//!
//! 1. construct ([`ShaSession::new`], [`ShaSession::with_options`],
//!    [`ShaSession::from_names`])
//! 2. optionally [`set_hmac_key`](ShaSession::set_hmac_key), at most once
//! 3. zero or more [`update`](ShaSession::update) calls
//! 4. [`get_hash`](ShaSession::get_hash) (unkeyed) or
//!    [`get_hmac`](ShaSession::get_hmac) (keyed), repeatable
//!
//! For whole messages in memory, [`digest`] and [`hmac`] skip the session.
//!
//! ## Iterated hashing
//!
//! [`SessionOptions::num_rounds`] > 1 rehashes the digest that many times in
//! total. This is a non-standard extension: the result matches no published
//! SHA or HMAC test vector, and `get_hmac` ignores it.
//!
//! ## Logging
//!
//! Emits `debug` records on session creation, key installation and
//! finalization, and `trace` records per update through the [`log`] facade.
//! No key material, message data or digest is ever logged.
//!
//! ## Example
//!
//! ```
//! use shastream::{InputFormat, KeyOptions, OutputFormat, OutputOptions, ShaSession, Variant};
//!
//! let mut session = ShaSession::new(Variant::Sha256, InputFormat::Text);
//! session.set_hmac_key("key", InputFormat::Text, KeyOptions::default())?;
//! session.update("The quick brown fox jumps over the lazy dog")?;
//!
//! let mac = session.get_hmac(OutputFormat::Hex, &OutputOptions::default())?;
//! assert_eq!(
//!     mac,
//!     "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
//! );
//! # Ok::<(), shastream::ShaError>(())
//! ```
//!
//! ## License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod hash;
mod hmac;
mod options;
mod session;

pub use error::{ConfigError, ShaError, StateError};
pub use hash::digest;
pub use hmac::hmac;
pub use options::{KeyOptions, NumRounds, SessionOptions};
pub use session::{Phase, ShaSession};

pub use shastream_codec::{
    CodecError, InputFormat, OutputFormat, OutputOptions, TextEncoding, UnknownFormatError,
};
pub use shastream_core::{LaneWidth, UnknownVariantError, Variant};
