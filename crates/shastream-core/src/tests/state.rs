// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{ChainingState, Variant};

#[test]
fn test_initial_state_words() {
    assert_eq!(
        ChainingState::new(Variant::Sha1).words(),
        vec![0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0]
    );

    // SHA-384 IV split into high/low halves
    let words = ChainingState::new(Variant::Sha384).words();
    assert_eq!(words.len(), 16);
    assert_eq!(&words[..2], &[0xcbbb9d5d, 0xc1059ed8]);
}

#[test]
fn test_digest_truncation_per_variant() {
    for variant in Variant::ALL {
        let state = ChainingState::new(variant);
        assert_eq!(state.digest_words().len(), variant.output_words(), "{variant}");
        assert_eq!(state.digest_bytes().len(), variant.output_bytes(), "{variant}");
    }

    // SHA-224 keeps the first 7 of 8 lanes
    let sha224 = ChainingState::new(Variant::Sha224);
    assert_eq!(sha224.digest_words(), sha224.words()[..7].to_vec());

    // SHA-384 keeps the first 6 of 8 lanes (12 words)
    let sha384 = ChainingState::new(Variant::Sha384);
    assert_eq!(sha384.digest_words(), sha384.words()[..12].to_vec());
}

#[test]
fn test_clone_diverges_independently() {
    let block = vec![0u32; 16];

    let mut a = ChainingState::new(Variant::Sha256);
    let b = a.clone();
    a.compress_block(&block);

    assert_ne!(a.words(), b.words());
    assert_eq!(b.words(), ChainingState::new(Variant::Sha256).words());
}
