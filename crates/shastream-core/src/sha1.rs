// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1 compression function per FIPS 180-4 Section 6.1.2

use zeroize::Zeroize;

use crate::consts::K_SHA1;
use crate::word::{Lane, Word32};

/// SHA-1 compression function (single block)
///
/// Updates hash state `h` with a single 512-bit message block.
///
/// # Arguments
/// * `h` - Hash state (5 × Word32, input/output)
/// * `block` - Message block (16 × Word32, big-endian packed)
pub(crate) fn compress(h: &mut [Word32; 5], block: &[Word32; 16]) {
    // Step 1: Prepare message schedule W[0..79]
    let mut w = [Word32::zero(); 80];
    w[..16].copy_from_slice(block);

    // W[t] = ROTL^1(W[t-3] ⊕ W[t-8] ⊕ W[t-14] ⊕ W[t-16])
    for t in 16..80 {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotl(1);
    }

    // Step 2: Initialize working variables
    let mut wv = *h;

    // Step 3: 80 rounds
    for (t, wt) in w.iter().enumerate() {
        let [a, b, c, d, e] = wv;

        let f = match t {
            0..20 => Word32::ch(b, c, d),
            40..60 => Word32::maj(b, c, d),
            _ => Word32::parity(b, c, d),
        };
        let k = Word32::new(K_SHA1[t / 20]);

        // T = ROTL^5(a) + f(b,c,d) + e + K[t] + W[t]
        let temp = [a.rotl(5), f, e, k, *wt].into_iter().sum();

        wv = [temp, a, b.rotl(30), c, d];
    }

    // Step 4: H(i) = H(i-1) + working variables
    for (hi, v) in h.iter_mut().zip(wv) {
        *hi = *hi + v;
    }

    w.zeroize();
    wv.zeroize();
}
