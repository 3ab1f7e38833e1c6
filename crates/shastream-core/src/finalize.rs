// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Padding and finalization per FIPS 180-4 Section 5.1

use alloc::vec;

use zeroize::Zeroizing;

use crate::state::ChainingState;

/// Pad the trailing message bits and compress the resulting block(s).
///
/// Appends a single `1` bit right after the last data bit, zero-pads until the
/// length is congruent to `block - length_field` bits, then appends the total
/// message length (`remainder_bits + processed_bits`) big-endian in the
/// 64-bit (SHA-1/224/256) or 128-bit (SHA-384/512) length field. Always
/// compresses at least one block; two when the remainder leaves no room for
/// the `1` bit and the length field.
///
/// `remainder` may span any number of blocks (HMAC key hashing and iterated
/// hashing finalize whole messages with `processed_bits == 0`). Bits of
/// `remainder` past `remainder_bits` are ignored.
///
/// # Arguments
/// * `state` - Chaining state after all complete blocks (input/output)
/// * `remainder` - Trailing message bits, big-endian packed
/// * `remainder_bits` - Number of valid bits in `remainder`
/// * `processed_bits` - Bits already compressed into `state`
pub fn finalize(
    state: &mut ChainingState,
    remainder: &[u32],
    remainder_bits: u64,
    processed_bits: u64,
) {
    let variant = state.variant();
    let block_bits = variant.block_bits() as u64;
    let length_bits = variant.length_field_bits() as u64;

    // Data + '1' bit + length field, rounded up to whole blocks
    let padded_bits = (remainder_bits + 1 + length_bits).div_ceil(block_bits) * block_bits;
    let padded_len = (padded_bits / 32) as usize;
    let data_len = remainder_bits.div_ceil(32) as usize;
    debug_assert!(remainder.len() >= data_len);

    let mut padded = Zeroizing::new(vec![0u32; padded_len]);
    padded[..data_len].copy_from_slice(&remainder[..data_len]);

    // Clear stale bits in a partially filled last word
    let tail_bits = (remainder_bits % 32) as u32;
    if tail_bits != 0 {
        padded[data_len - 1] &= !(u32::MAX >> tail_bits);
    }

    // Append '1'
    padded[(remainder_bits / 32) as usize] |= 0x8000_0000 >> tail_bits;

    // Append message length, big-endian, least significant word last
    let total_bits = u128::from(remainder_bits) + u128::from(processed_bits);
    let length_words = (length_bits / 32) as usize;
    for i in 0..length_words {
        padded[padded_len - 1 - i] = (total_bits >> (32 * i)) as u32;
    }

    for block in padded.chunks_exact(variant.block_words()) {
        state.compress_block(block);
    }
}
