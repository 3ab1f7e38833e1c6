// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Big-endian packed bit string with an explicit bit length.

use alloc::vec::Vec;
use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Bit string packed big-endian into 32-bit words.
///
/// Bit `i` of the string is bit `31 - i % 32` of word `i / 32`. The buffer
/// always holds exactly `bit_len.div_ceil(32)` words and every bit past
/// `bit_len` is zero, so appending can OR new bits in place.
///
/// Zeroized on drop; `Debug` never prints the contents.
#[derive(Default, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PackedWordBuffer {
    words: Vec<u32>,
    bit_len: u64,
}

impl fmt::Debug for PackedWordBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackedWordBuffer")
            .field("words", &"REDACTED")
            .field("bit_len", &self.bit_len)
            .finish()
    }
}

impl PackedWordBuffer {
    #[inline(always)]
    fn debug_assert_invariant(&self) {
        debug_assert_eq!(
            self.words.len() as u64,
            self.bit_len.div_ceil(32),
            "Invariant violated: word count matches bit length ({} bits)",
            self.bit_len
        );
    }

    /// Empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `bytes`, `8 * bytes.len()` bits long.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buffer = Self::new();
        buffer.append_bytes(bytes);
        buffer
    }

    /// Packed words; the last one may be partially filled.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Number of valid bits.
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    /// Whether the buffer holds no bits.
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Append `bytes` starting at the current bit offset.
    ///
    /// The offset need not be byte-aligned: a byte landing across a word
    /// boundary is split between the two words.
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        let new_len = self.bit_len + 8 * bytes.len() as u64;
        self.words.resize(new_len.div_ceil(32) as usize, 0);

        for &byte in bytes {
            let index = (self.bit_len / 32) as usize;
            let offset = (self.bit_len % 32) as u32;

            // Byte positioned in a 64-bit window whose upper half is words[index]
            let window = u64::from(byte) << (56 - offset);
            self.words[index] |= (window >> 32) as u32;
            if offset > 24 {
                self.words[index + 1] |= window as u32;
            }

            self.bit_len += 8;
        }

        self.debug_assert_invariant();
    }

    /// Hand every complete leading block of `block_words` words to `f`, then
    /// drop those blocks from the buffer. Returns the number of blocks.
    ///
    /// The words left behind are moved to the front and the vacated tail is
    /// zeroized before truncation.
    pub fn drain_blocks(&mut self, block_words: usize, mut f: impl FnMut(&[u32])) -> usize {
        debug_assert!(block_words > 0);

        let block_bits = 32 * block_words as u64;
        let blocks = (self.bit_len / block_bits) as usize;
        if blocks == 0 {
            return 0;
        }

        let consumed = blocks * block_words;
        for block in self.words[..consumed].chunks_exact(block_words) {
            f(block);
        }

        let keep = self.words.len() - consumed;
        self.words.copy_within(consumed.., 0);
        self.words[keep..].zeroize();
        self.words.truncate(keep);
        self.bit_len -= blocks as u64 * block_bits;

        self.debug_assert_invariant();

        blocks
    }

    /// Contents as bytes. A trailing partial byte is zero-filled.
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        let len = self.bit_len.div_ceil(8) as usize;
        let mut bytes: Vec<u8> = self.words.iter().flat_map(|w| w.to_be_bytes()).collect();
        bytes[len..].zeroize();
        bytes.truncate(len);
        Zeroizing::new(bytes)
    }

    /// Empty the buffer, zeroizing its words.
    pub fn clear(&mut self) {
        self.words.zeroize();
        self.bit_len = 0;
    }
}
