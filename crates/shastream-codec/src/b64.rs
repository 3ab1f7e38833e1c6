// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Base-64 (RFC 4648 standard alphabet).
//!
//! Decoding is lenient about group completeness: after stripping `=`, every
//! group of `n` characters (n <= 4) contributes `n - 1` bytes, so missing
//! padding is accepted. A lone trailing character contributes nothing.

use alloc::string::String;
use alloc::vec::Vec;

use zeroize::{Zeroize, Zeroizing};

use crate::error::CodecError;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

#[inline(always)]
fn sextet(ch: char) -> Option<u32> {
    let value = match ch {
        'A'..='Z' => ch as u32 - 'A' as u32,
        'a'..='z' => ch as u32 - 'a' as u32 + 26,
        '0'..='9' => ch as u32 - '0' as u32 + 52,
        '+' => 62,
        '/' => 63,
        _ => return None,
    };
    Some(value)
}

pub(crate) fn decode(input: &str) -> Result<Zeroizing<Vec<u8>>, CodecError> {
    let mut sextets = Zeroizing::new(Vec::with_capacity(input.len()));
    let mut first_pad = None;
    let mut pad_before_data = false;

    // Character set first, so an invalid character wins over misplaced padding
    for (position, ch) in input.chars().enumerate() {
        if ch == '=' {
            first_pad.get_or_insert(position);
            continue;
        }

        let value = sextet(ch).ok_or(CodecError::InvalidBase64Char { ch, position })?;
        pad_before_data |= first_pad.is_some();
        sextets.push(value);
    }

    if pad_before_data {
        if let Some(position) = first_pad {
            return Err(CodecError::PaddingBeforeData { position });
        }
    }

    let mut bytes = Zeroizing::new(Vec::with_capacity(sextets.len() * 3 / 4));
    for group in sextets.chunks(4) {
        let mut acc = 0u32;
        for (j, value) in group.iter().enumerate() {
            acc |= value << (18 - 6 * j);
        }
        for j in 0..group.len().saturating_sub(1) {
            bytes.push((acc >> (16 - 8 * j)) as u8);
        }
        acc.zeroize();
    }

    Ok(bytes)
}

pub(crate) fn encode(bytes: &[u8], pad: &str) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);

    for chunk in bytes.chunks(3) {
        let mut triplet = 0u32;
        for (i, &byte) in chunk.iter().enumerate() {
            triplet |= u32::from(byte) << (16 - 8 * i);
        }

        // A chunk of n bytes carries n + 1 significant characters
        for j in 0..4 {
            if j <= chunk.len() {
                out.push(ALPHABET[((triplet >> (18 - 6 * j)) & 0x3f) as usize] as char);
            } else {
                out.push_str(pad);
            }
        }
    }

    out
}
