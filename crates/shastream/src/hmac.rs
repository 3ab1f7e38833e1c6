// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC per RFC 2104 over any supported variant.
//!
//! HMAC(K, m) = H((K' ^ opad) || H((K' ^ ipad) || m))
//!
//! where K' is K hashed down when longer than a block, then zero-padded to
//! exactly one block.

use alloc::vec::Vec;
use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use shastream_codec::PackedWordBuffer;
use shastream_core::{ChainingState, Variant, finalize};

use crate::hash::hash_message;

const IPAD: u32 = 0x3636_3636;
const OPAD: u32 = 0x5c5c_5c5c;

/// How the key was brought to block size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyPath {
    HashedDown,
    ZeroPadded,
    Exact,
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeyPath::HashedDown => "hashed down",
            KeyPath::ZeroPadded => "zero-padded",
            KeyPath::Exact => "exact block",
        })
    }
}

/// Key-derived inner and outer pads, one block of packed words each.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) struct HmacPads {
    #[zeroize(skip)]
    variant: Variant,
    inner: Vec<u32>,
    outer: Vec<u32>,
}

impl HmacPads {
    /// Derive K' ^ ipad and K' ^ opad from a raw key.
    pub(crate) fn derive(variant: Variant, key: &[u8]) -> (Self, KeyPath) {
        let block_bytes = variant.block_bytes();

        let (mut block_key, path) = match key.len() {
            len if len > block_bytes => {
                let packed = PackedWordBuffer::from_bytes(key);
                let hashed = hash_message(variant, packed.words(), packed.bit_len());
                (Zeroizing::new(hashed.digest_bytes()), KeyPath::HashedDown)
            }
            len if len < block_bytes => (Zeroizing::new(key.to_vec()), KeyPath::ZeroPadded),
            _ => (Zeroizing::new(key.to_vec()), KeyPath::Exact),
        };
        block_key.resize(block_bytes, 0);

        let packed = PackedWordBuffer::from_bytes(&block_key);
        let inner = packed.words().iter().map(|w| w ^ IPAD).collect();
        let outer = packed.words().iter().map(|w| w ^ OPAD).collect();

        (
            Self {
                variant,
                inner,
                outer,
            },
            path,
        )
    }

    /// Fresh state with K' ^ ipad already compressed (`block_bits` processed).
    pub(crate) fn inner_state(&self) -> ChainingState {
        let mut state = ChainingState::new(self.variant);
        state.compress_block(&self.inner);
        state
    }

    /// Outer pass: H((K' ^ opad) || inner digest).
    pub(crate) fn outer_state(&self, inner: &ChainingState) -> ChainingState {
        let variant = self.variant;
        let inner_digest = Zeroizing::new(inner.digest_words());

        let mut state = ChainingState::new(variant);
        state.compress_block(&self.outer);
        finalize(
            &mut state,
            &inner_digest,
            variant.output_bits() as u64,
            variant.block_bits() as u64,
        );

        state
    }
}

/// One-shot HMAC of `message` under `key`.
///
/// # Example
///
/// ```
/// use shastream::{Variant, hmac};
///
/// let mac = hmac(Variant::Sha256, b"key", b"message");
/// assert_eq!(mac.len(), 32);
/// ```
pub fn hmac(variant: Variant, key: &[u8], message: &[u8]) -> Vec<u8> {
    let (pads, _) = HmacPads::derive(variant, key);

    let packed = PackedWordBuffer::from_bytes(message);
    let mut inner = pads.inner_state();
    finalize(
        &mut inner,
        packed.words(),
        packed.bit_len(),
        variant.block_bits() as u64,
    );

    pads.outer_state(&inner).digest_bytes()
}
