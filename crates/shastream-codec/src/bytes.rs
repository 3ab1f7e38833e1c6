// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw byte strings: character code == byte value.

use alloc::string::String;
use alloc::vec::Vec;

use zeroize::Zeroizing;

use crate::error::CodecError;

pub(crate) fn decode(input: &str) -> Result<Zeroizing<Vec<u8>>, CodecError> {
    let mut bytes = Zeroizing::new(Vec::with_capacity(input.len()));

    for (position, ch) in input.chars().enumerate() {
        let byte = u8::try_from(ch).map_err(|_| CodecError::ByteOutOfRange { ch, position })?;
        bytes.push(byte);
    }

    Ok(bytes)
}

pub(crate) fn encode(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
