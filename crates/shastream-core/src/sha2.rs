// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-2 compression function per FIPS 180-4 Sections 6.2.2 and 6.4.2
//!
//! One routine serves both families: `Word32` lanes give the 64-round
//! SHA-224/256 function, `Word64` lanes the 80-round SHA-384/512 function.

use zeroize::Zeroize;

use crate::word::Lane;

/// Longest message schedule (SHA-384/512)
const MAX_ROUNDS: usize = 80;

/// SHA-2 compression function (single block)
///
/// # Arguments
/// * `h` - Hash state (8 lanes, input/output)
/// * `block` - Message block (16 lanes)
pub(crate) fn compress<L: Lane>(h: &mut [L; 8], block: &[L; 16]) {
    debug_assert!(L::ROUNDS <= MAX_ROUNDS);

    // Step 1: Prepare message schedule
    // W[0..15] straight from the block
    let mut w = [L::default(); MAX_ROUNDS];
    w[..16].copy_from_slice(block);

    // W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
    for t in 16..L::ROUNDS {
        w[t] = [w[t - 2].ssig1(), w[t - 7], w[t - 15].ssig0(), w[t - 16]]
            .into_iter()
            .sum();
    }

    // Step 2: Initialize working variables with H
    let mut wv = *h;

    // Step 3: rounds
    for (t, wt) in w.iter().take(L::ROUNDS).enumerate() {
        let [a, b, c, d, e, f, g, hh] = wv;

        // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
        let t1: L = [hh, e.bsig1(), L::ch(e, f, g), L::round_constant(t), *wt]
            .into_iter()
            .sum();

        // T2 = Σ0(a) + Maj(a,b,c)
        let t2 = a.bsig0() + L::maj(a, b, c);

        // h=g, g=f, f=e, e=d+T1, d=c, c=b, b=a, a=T1+T2
        wv = [t1 + t2, a, b, c, d + t1, e, f, g];
    }

    // Step 4: H(i) = H(i-1) + working variables
    for (hi, v) in h.iter_mut().zip(wv) {
        *hi = *hi + v;
    }

    w.zeroize();
    wv.zeroize();
}
