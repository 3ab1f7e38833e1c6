// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Whole-message hashing and iterated rounds.

use alloc::vec::Vec;

use zeroize::Zeroizing;

use shastream_codec::PackedWordBuffer;
use shastream_core::{ChainingState, Variant, finalize};

/// Hash a complete packed message with a freshly initialized state.
pub(crate) fn hash_message(variant: Variant, words: &[u32], bits: u64) -> ChainingState {
    let mut state = ChainingState::new(variant);
    finalize(&mut state, words, bits, 0);
    state
}

/// Rehash the digest held by `state` `extra` more times.
///
/// Each round treats the previous digest as a new `output_bits`-long message.
pub(crate) fn iterate(mut state: ChainingState, extra: u32) -> ChainingState {
    let variant = state.variant();
    let output_bits = variant.output_bits() as u64;

    for _ in 0..extra {
        let digest = Zeroizing::new(state.digest_words());
        state = hash_message(variant, &digest, output_bits);
    }

    state
}

/// One-shot digest of `message`.
///
/// # Example
///
/// ```
/// use shastream::{Variant, digest};
///
/// let out = digest(Variant::Sha1, b"abc");
/// assert_eq!(out[..4], [0xa9, 0x99, 0x3e, 0x36]);
/// ```
pub fn digest(variant: Variant, message: &[u8]) -> Vec<u8> {
    let packed = PackedWordBuffer::from_bytes(message);
    hash_message(variant, packed.words(), packed.bit_len()).digest_bytes()
}
