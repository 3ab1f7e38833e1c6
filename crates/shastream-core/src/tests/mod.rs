// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod state;

use crate::{ChainingState, Variant, finalize};

/// Pack bytes big-endian into 32-bit words (test-side reference packing).
pub(crate) fn pack(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks(4)
        .map(|chunk| {
            let mut word = [0u8; 4];
            word[..chunk.len()].copy_from_slice(chunk);
            u32::from_be_bytes(word)
        })
        .collect()
}

/// One-shot hash: compress every full block, then finalize the tail.
pub(crate) fn hash(variant: Variant, message: &[u8]) -> Vec<u8> {
    let block_bytes = variant.block_bytes();
    let full_blocks = message.len() / block_bytes;
    let (blocks, tail) = message.split_at(full_blocks * block_bytes);

    let mut state = ChainingState::new(variant);
    for block in blocks.chunks_exact(block_bytes) {
        state.compress_block(&pack(block));
    }

    let tail_bits = (tail.len() * 8) as u64;
    let processed_bits = (blocks.len() * 8) as u64;
    finalize(&mut state, &pack(tail), tail_bits, processed_bits);

    state.digest_bytes()
}
