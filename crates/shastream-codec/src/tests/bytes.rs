// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::bytes::{decode, encode};
use crate::error::CodecError;

#[test]
fn test_decode_latin1_range() {
    let bytes = decode("\u{0}a\u{e9}\u{ff}").expect("Failed to decode(..)");
    assert_eq!(bytes.as_slice(), &[0x00, 0x61, 0xe9, 0xff]);
}

#[test]
fn test_decode_rejects_wide_character() {
    assert_eq!(
        decode("ab\u{100}"),
        Err(CodecError::ByteOutOfRange {
            ch: '\u{100}',
            position: 2
        })
    );
}

#[test]
fn test_encode_every_byte() {
    let all: Vec<u8> = (0..=255).collect();
    let encoded = encode(&all);

    assert_eq!(encoded.chars().count(), 256);
    for (ch, byte) in encoded.chars().zip(all) {
        assert_eq!(ch as u32, u32::from(byte));
    }
}
