// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec::Vec;

use zeroize::Zeroizing;

use crate::error::CodecError;

const DIGITS_LOWER: &[u8; 16] = b"0123456789abcdef";
const DIGITS_UPPER: &[u8; 16] = b"0123456789ABCDEF";

pub(crate) fn decode(input: &str) -> Result<Zeroizing<Vec<u8>>, CodecError> {
    let len = input.chars().count();
    if len % 2 != 0 {
        return Err(CodecError::OddHexLength { len });
    }

    let mut bytes = Zeroizing::new(Vec::with_capacity(len / 2));
    let mut high: Option<u8> = None;

    for (position, ch) in input.chars().enumerate() {
        let nibble = ch
            .to_digit(16)
            .ok_or(CodecError::InvalidHexDigit { ch, position })? as u8;

        match high.take() {
            None => high = Some(nibble),
            Some(h) => bytes.push((h << 4) | nibble),
        }
    }

    Ok(bytes)
}

pub(crate) fn encode(bytes: &[u8], upper: bool) -> String {
    let digits = if upper { DIGITS_UPPER } else { DIGITS_LOWER };
    let mut out = String::with_capacity(bytes.len() * 2);

    for &byte in bytes {
        out.push(digits[(byte >> 4) as usize] as char);
        out.push(digits[(byte & 0x0f) as usize] as char);
    }

    out
}
