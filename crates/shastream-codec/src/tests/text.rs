// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::format::TextEncoding;
use crate::text::decode;

#[test]
fn test_utf8_ascii() {
    assert_eq!(decode("abc", TextEncoding::Utf8).as_slice(), b"abc");
}

#[test]
fn test_utf8_multibyte_and_astral() {
    let bytes = decode("é😀", TextEncoding::Utf8);
    assert_eq!(bytes.as_slice(), &[0xc3, 0xa9, 0xf0, 0x9f, 0x98, 0x80]);
}

#[test]
fn test_utf16be_ascii() {
    let bytes = decode("abc", TextEncoding::Utf16Be);
    assert_eq!(bytes.as_slice(), &[0x00, 0x61, 0x00, 0x62, 0x00, 0x63]);
}

#[test]
fn test_utf16le_ascii() {
    let bytes = decode("abc", TextEncoding::Utf16Le);
    assert_eq!(bytes.as_slice(), &[0x61, 0x00, 0x62, 0x00, 0x63, 0x00]);
}

#[test]
fn test_utf16_surrogate_pair() {
    let be = decode("😀", TextEncoding::Utf16Be);
    assert_eq!(be.as_slice(), &[0xd8, 0x3d, 0xde, 0x00]);

    let le = decode("😀", TextEncoding::Utf16Le);
    assert_eq!(le.as_slice(), &[0x3d, 0xd8, 0x00, 0xde]);
}

#[test]
fn test_empty_text() {
    for &encoding in TextEncoding::ALL {
        assert!(decode("", encoding).is_empty());
    }
}
