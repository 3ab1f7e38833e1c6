// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1 / SHA-2 block engine
//!
//! Lane arithmetic, round constants, the SHA-1 and SHA-2 compression functions
//! and the Merkle-Damgård padding shared by every variant. Input arrives as
//! big-endian packed 32-bit words with an explicit bit length; the packing
//! itself lives in `shastream-codec`.
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod consts;
mod error;
mod finalize;
mod sha1;
mod sha2;
mod state;
mod variant;
mod word;

pub use error::UnknownVariantError;
pub use finalize::finalize;
pub use state::ChainingState;
pub use variant::{LaneWidth, Variant};
pub use word::{Lane, Word32, Word64};
