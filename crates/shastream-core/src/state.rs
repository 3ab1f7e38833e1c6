// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Chaining state H(i) carried from one block to the next.

use alloc::vec::Vec;

use zeroize::Zeroize;

use crate::consts::{H0_SHA1, H0_SHA224, H0_SHA256, H0_SHA384, H0_SHA512};
use crate::variant::Variant;
use crate::word::{Lane, Word32, Word64};
use crate::{sha1, sha2};

#[derive(Clone)]
enum Lanes {
    Sha1([Word32; 5]),
    Narrow([Word32; 8]),
    Wide([Word64; 8]),
}

impl Zeroize for Lanes {
    fn zeroize(&mut self) {
        match self {
            Lanes::Sha1(h) => h.zeroize(),
            Lanes::Narrow(h) => h.zeroize(),
            Lanes::Wide(h) => h.zeroize(),
        }
    }
}

/// Running hash state of one variant.
///
/// Mutated in place by [`compress_block`](Self::compress_block); zeroized on drop.
#[derive(Clone)]
pub struct ChainingState {
    variant: Variant,
    lanes: Lanes,
}

impl ChainingState {
    /// Fresh state initialized with the variant's H(0).
    pub fn new(variant: Variant) -> Self {
        let lanes = match variant {
            Variant::Sha1 => Lanes::Sha1(H0_SHA1.map(Word32::new)),
            Variant::Sha224 => Lanes::Narrow(H0_SHA224.map(Word32::new)),
            Variant::Sha256 => Lanes::Narrow(H0_SHA256.map(Word32::new)),
            Variant::Sha384 => Lanes::Wide(H0_SHA384.map(Word64::new)),
            Variant::Sha512 => Lanes::Wide(H0_SHA512.map(Word64::new)),
        };

        Self { variant, lanes }
    }

    /// Variant this state belongs to.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Compress one block of big-endian packed words into the state.
    ///
    /// `block` must hold exactly [`Variant::block_words`] words; the session
    /// layer guarantees block alignment, so anything else is a bug.
    pub fn compress_block(&mut self, block: &[u32]) {
        debug_assert_eq!(block.len(), self.variant.block_words());

        match &mut self.lanes {
            Lanes::Sha1(h) => {
                let mut m = unpack::<Word32>(block);
                sha1::compress(h, &m);
                m.zeroize();
            }
            Lanes::Narrow(h) => {
                let mut m = unpack::<Word32>(block);
                sha2::compress(h, &m);
                m.zeroize();
            }
            Lanes::Wide(h) => {
                let mut m = unpack::<Word64>(block);
                sha2::compress(h, &m);
                m.zeroize();
            }
        }
    }

    /// Full chaining value as packed words (5, 8 or 16 words).
    pub fn words(&self) -> Vec<u32> {
        match &self.lanes {
            Lanes::Sha1(h) => h.iter().map(|w| w.get()).collect(),
            Lanes::Narrow(h) => h.iter().map(|w| w.get()).collect(),
            Lanes::Wide(h) => h
                .iter()
                .flat_map(|w| [w.high_order(), w.low_order()])
                .collect(),
        }
    }

    /// Digest words: the chaining value truncated to the variant's output size.
    ///
    /// SHA-224 keeps 7 of 8 lanes, SHA-384 keeps 6 of 8 (12 words).
    pub fn digest_words(&self) -> Vec<u32> {
        let mut words = self.words();
        words.truncate(self.variant.output_words());
        words
    }

    /// Digest as big-endian bytes.
    pub fn digest_bytes(&self) -> Vec<u8> {
        let mut words = self.digest_words();
        let bytes = words.iter().flat_map(|w| w.to_be_bytes()).collect();
        words.zeroize();
        bytes
    }
}

impl Drop for ChainingState {
    fn drop(&mut self) {
        self.lanes.zeroize();
    }
}

/// Rebuild 16 lanes from a packed block.
#[inline(always)]
fn unpack<L: Lane>(block: &[u32]) -> [L; 16] {
    let mut m = [L::default(); 16];
    for (lane, words) in m.iter_mut().zip(block.chunks_exact(L::WORDS)) {
        *lane = L::from_words(words);
    }
    m
}
