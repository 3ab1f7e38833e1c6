// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use zeroize::Zeroizing;

use crate::format::TextEncoding;

/// Expand text to bytes. Code points above U+FFFF become surrogate pairs
/// under both UTF-16 encodings.
pub(crate) fn decode(input: &str, encoding: TextEncoding) -> Zeroizing<Vec<u8>> {
    let bytes = match encoding {
        TextEncoding::Utf8 => input.as_bytes().to_vec(),
        TextEncoding::Utf16Be => input.encode_utf16().flat_map(u16::to_be_bytes).collect(),
        TextEncoding::Utf16Le => input.encode_utf16().flat_map(u16::to_le_bytes).collect(),
    };

    Zeroizing::new(bytes)
}
