// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;
use shastream::{
    InputFormat, KeyOptions, OutputFormat, OutputOptions, ShaSession, Variant, digest, hmac,
};
use shastream_test_utils::{bytes_to_hex, even_chunks, split_at_cuts};

fn any_variant() -> impl Strategy<Value = Variant> {
    prop::sample::select(Variant::ALL.to_vec())
}

proptest! {
    #[test]
    fn chunking_never_changes_the_hash(
        variant in any_variant(),
        message in prop::collection::vec(any::<u8>(), 0..600),
        cuts in prop::collection::vec(0usize..600, 0..8),
    ) {
        let mut session = ShaSession::new(variant, InputFormat::Bytes);
        for chunk in split_at_cuts(&message, &cuts) {
            session.update_bytes(chunk).expect("Failed to update_bytes(..)");
        }

        let streamed = session.hash_bytes().expect("Failed to hash_bytes()");
        prop_assert_eq!(streamed, digest(variant, &message));
    }

    #[test]
    fn chunking_never_changes_the_hmac(
        variant in any_variant(),
        key in prop::collection::vec(any::<u8>(), 0..300),
        message in prop::collection::vec(any::<u8>(), 0..400),
        cuts in prop::collection::vec(0usize..400, 0..6),
    ) {
        let mut session = ShaSession::new(variant, InputFormat::Hex);
        session
            .set_hmac_key(&bytes_to_hex(&key), InputFormat::Hex, KeyOptions::default())
            .expect("Failed to set_hmac_key(..)");
        for chunk in split_at_cuts(&message, &cuts) {
            session.update(&bytes_to_hex(chunk)).expect("Failed to update(..)");
        }

        let streamed = session.hmac_bytes().expect("Failed to hmac_bytes()");
        prop_assert_eq!(streamed, hmac(variant, &key, &message));
    }

    #[test]
    fn text_chunking_on_char_boundaries(
        variant in any_variant(),
        text in "\\PC{0,120}",
        chunk_chars in 1usize..9,
    ) {
        let chars: Vec<char> = text.chars().collect();
        let mut session = ShaSession::new(variant, InputFormat::Text);
        for piece in chars.chunks(chunk_chars) {
            let piece: String = piece.iter().collect();
            session.update(&piece).expect("Failed to update(..)");
        }

        let streamed = session.hash_bytes().expect("Failed to hash_bytes()");
        prop_assert_eq!(streamed, digest(variant, text.as_bytes()));
    }

    #[test]
    fn finalize_is_idempotent(
        variant in any_variant(),
        message in prop::collection::vec(any::<u8>(), 0..300),
        upper in any::<bool>(),
    ) {
        let options = OutputOptions::default().with_output_upper(upper);
        let mut session = ShaSession::new(variant, InputFormat::Bytes);
        session.update_bytes(&message).expect("Failed to update_bytes(..)");

        let first = session.get_hash(OutputFormat::Hex, &options).expect("Failed to get_hash(..)");
        let second = session.get_hash(OutputFormat::Hex, &options).expect("Failed to get_hash(..)");
        prop_assert_eq!(first, second);
    }
}

#[test]
fn block_sized_updates_for_every_variant() {
    let message: Vec<u8> = (0..1000u32).map(|i| (i * 7) as u8).collect();

    for variant in Variant::ALL {
        for size in [1, 55, 56, 63, 64, 65, 111, 112, 127, 128, 129] {
            let mut session = ShaSession::new(variant, InputFormat::Bytes);
            for chunk in even_chunks(&message, size) {
                session.update_bytes(chunk).expect("Failed to update_bytes(..)");
            }

            let streamed = session.hash_bytes().expect("Failed to hash_bytes()");
            assert_eq!(streamed, digest(variant, &message), "{variant} chunk {size}");
        }
    }
}
