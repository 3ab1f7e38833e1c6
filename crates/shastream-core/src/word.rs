// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word32 / Word64 - fixed-width lanes with wrapping arithmetic.
//!
//! Addition is always modulo 2^32 or 2^64. Rotations and shifts map straight
//! onto the native operators, so no partial-sum emulation is needed.

use core::iter::Sum;
use core::ops::{Add, BitAnd, BitXor, Not};

use zeroize::Zeroize;

use crate::consts::{K256, K512};

/// 32-bit lane used by SHA-1, SHA-224 and SHA-256.
///
/// - `#[repr(transparent)]` ensures same layout as u32
/// - `+` wraps modulo 2^32
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Zeroize)]
#[repr(transparent)]
pub struct Word32(u32);

/// 64-bit lane used by SHA-384 and SHA-512.
///
/// Packed into two consecutive big-endian 32-bit words (high half first).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Zeroize)]
#[repr(transparent)]
pub struct Word64(u64);

impl Word32 {
    /// Create new Word32 with given value
    #[inline(always)]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Create zero Word32
    #[inline(always)]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Raw value
    #[inline(always)]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Parity(x,y,z) = x ⊕ y ⊕ z, SHA-1 rounds 20..40 and 60..80
    #[inline(always)]
    pub fn parity(x: Self, y: Self, z: Self) -> Self {
        x ^ y ^ z
    }
}

impl Word64 {
    /// Create new Word64 with given value
    #[inline(always)]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Create zero Word64
    #[inline(always)]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Raw value
    #[inline(always)]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// High-order 32 bits
    #[inline(always)]
    pub const fn high_order(self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// Low-order 32 bits
    #[inline(always)]
    pub const fn low_order(self) -> u32 {
        self.0 as u32
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Operators
// ═══════════════════════════════════════════════════════════════════════════════

macro_rules! impl_lane_ops {
    ($word:ident) => {
        impl Add for $word {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self(self.0.wrapping_add(rhs.0))
            }
        }

        impl BitXor for $word {
            type Output = Self;

            #[inline(always)]
            fn bitxor(self, rhs: Self) -> Self {
                Self(self.0 ^ rhs.0)
            }
        }

        impl BitAnd for $word {
            type Output = Self;

            #[inline(always)]
            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl Not for $word {
            type Output = Self;

            #[inline(always)]
            fn not(self) -> Self {
                Self(!self.0)
            }
        }

        impl Sum for $word {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self(0), Add::add)
            }
        }
    };
}

impl_lane_ops!(Word32);
impl_lane_ops!(Word64);

// ═══════════════════════════════════════════════════════════════════════════════
// Lane trait
// ═══════════════════════════════════════════════════════════════════════════════

/// A SHA-2 lane: everything the shared compression function needs to know
/// about the word width.
///
/// The rotation amounts and round constants differ between the 32-bit family
/// (SHA-224/256, FIPS 180-4 §4.1.2) and the 64-bit family (SHA-384/512,
/// §4.1.3); the round structure does not.
pub trait Lane:
    Copy
    + Default
    + Zeroize
    + Add<Output = Self>
    + BitXor<Output = Self>
    + BitAnd<Output = Self>
    + Not<Output = Self>
    + Sum
{
    /// Width in bits
    const BITS: u32;

    /// Number of packed 32-bit words per lane
    const WORDS: usize;

    /// Rounds per block (64 or 80)
    const ROUNDS: usize;

    /// Rotations for Σ0
    const BSIG0: [u32; 3];

    /// Rotations for Σ1
    const BSIG1: [u32; 3];

    /// Two rotations then one shift for σ0
    const SSIG0: [u32; 3];

    /// Two rotations then one shift for σ1
    const SSIG1: [u32; 3];

    /// Round constant K[t]
    fn round_constant(t: usize) -> Self;

    /// Rebuild a lane from `Self::WORDS` big-endian packed words
    fn from_words(words: &[u32]) -> Self;

    /// Circular right rotation
    fn rotr(self, n: u32) -> Self;

    /// Circular left rotation
    fn rotl(self, n: u32) -> Self;

    /// Logical right shift
    fn shr(self, n: u32) -> Self;

    /// Ch(x,y,z) = (x ∧ y) ⊕ (¬x ∧ z)
    #[inline(always)]
    fn ch(x: Self, y: Self, z: Self) -> Self {
        (x & y) ^ (!x & z)
    }

    /// Maj(x,y,z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z)
    ///
    /// Optimized form: (x & y) ^ (z & (x ^ y))
    #[inline(always)]
    fn maj(x: Self, y: Self, z: Self) -> Self {
        (x & y) ^ (z & (x ^ y))
    }

    /// Σ0(x)
    #[inline(always)]
    fn bsig0(self) -> Self {
        let [a, b, c] = Self::BSIG0;
        self.rotr(a) ^ self.rotr(b) ^ self.rotr(c)
    }

    /// Σ1(x)
    #[inline(always)]
    fn bsig1(self) -> Self {
        let [a, b, c] = Self::BSIG1;
        self.rotr(a) ^ self.rotr(b) ^ self.rotr(c)
    }

    /// σ0(x), the message schedule "gamma0"
    #[inline(always)]
    fn ssig0(self) -> Self {
        let [a, b, s] = Self::SSIG0;
        self.rotr(a) ^ self.rotr(b) ^ self.shr(s)
    }

    /// σ1(x), the message schedule "gamma1"
    #[inline(always)]
    fn ssig1(self) -> Self {
        let [a, b, s] = Self::SSIG1;
        self.rotr(a) ^ self.rotr(b) ^ self.shr(s)
    }
}

impl Lane for Word32 {
    const BITS: u32 = 32;
    const WORDS: usize = 1;
    const ROUNDS: usize = 64;
    const BSIG0: [u32; 3] = [2, 13, 22];
    const BSIG1: [u32; 3] = [6, 11, 25];
    const SSIG0: [u32; 3] = [7, 18, 3];
    const SSIG1: [u32; 3] = [17, 19, 10];

    #[inline(always)]
    fn round_constant(t: usize) -> Self {
        Self(K256[t])
    }

    #[inline(always)]
    fn from_words(words: &[u32]) -> Self {
        Self(words[0])
    }

    #[inline(always)]
    fn rotr(self, n: u32) -> Self {
        Self(self.0.rotate_right(n))
    }

    #[inline(always)]
    fn rotl(self, n: u32) -> Self {
        Self(self.0.rotate_left(n))
    }

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        Self(self.0 >> n)
    }
}

impl Lane for Word64 {
    const BITS: u32 = 64;
    const WORDS: usize = 2;
    const ROUNDS: usize = 80;
    const BSIG0: [u32; 3] = [28, 34, 39];
    const BSIG1: [u32; 3] = [14, 18, 41];
    const SSIG0: [u32; 3] = [1, 8, 7];
    const SSIG1: [u32; 3] = [19, 61, 6];

    #[inline(always)]
    fn round_constant(t: usize) -> Self {
        Self(K512[t])
    }

    #[inline(always)]
    fn from_words(words: &[u32]) -> Self {
        Self((u64::from(words[0]) << 32) | u64::from(words[1]))
    }

    #[inline(always)]
    fn rotr(self, n: u32) -> Self {
        Self(self.0.rotate_right(n))
    }

    #[inline(always)]
    fn rotl(self, n: u32) -> Self {
        Self(self.0.rotate_left(n))
    }

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        Self(self.0 >> n)
    }
}
