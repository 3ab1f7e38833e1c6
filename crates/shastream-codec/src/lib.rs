// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Input/output codecs for the shastream hash engine.
//!
//! Converts between string representations of a message and the
//! [`PackedWordBuffer`] the block engine consumes:
//!
//! | Format | Decode | Encode |
//! |--------|--------|--------|
//! | `HEX` | two digits per byte, case-insensitive | lowercase or uppercase |
//! | `TEXT` | UTF-8, UTF-16BE or UTF-16LE | - |
//! | `B64` | standard alphabet, `=` optional | configurable pad string |
//! | `BYTES` | one byte per character | one character per byte |
//!
//! Decoding never touches the target buffer until the whole input has been
//! validated: a failed [`decode_into`] leaves the buffer exactly as it was.
//!
//! ## License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod b64;
mod buffer;
mod bytes;
mod error;
mod format;
mod hex;
mod text;

use alloc::string::String;
use alloc::vec::Vec;

use zeroize::Zeroizing;

pub use buffer::PackedWordBuffer;
pub use error::{CodecError, UnknownFormatError};
pub use format::{InputFormat, OutputFormat, OutputOptions, TextEncoding};

/// Decode `input` to raw bytes.
///
/// `text_encoding` only applies to [`InputFormat::Text`].
pub fn decode_bytes(
    input: &str,
    format: InputFormat,
    text_encoding: TextEncoding,
) -> Result<Zeroizing<Vec<u8>>, CodecError> {
    match format {
        InputFormat::Hex => hex::decode(input),
        InputFormat::Text => Ok(text::decode(input, text_encoding)),
        InputFormat::B64 => b64::decode(input),
        InputFormat::Bytes => bytes::decode(input),
    }
}

/// Decode `input` into a fresh buffer.
pub fn decode(
    input: &str,
    format: InputFormat,
    text_encoding: TextEncoding,
) -> Result<PackedWordBuffer, CodecError> {
    let mut buffer = PackedWordBuffer::new();
    decode_into(&mut buffer, input, format, text_encoding)?;
    Ok(buffer)
}

/// Decode `input` and append it at the buffer's current bit offset.
///
/// On error the buffer is left untouched.
pub fn decode_into(
    buffer: &mut PackedWordBuffer,
    input: &str,
    format: InputFormat,
    text_encoding: TextEncoding,
) -> Result<(), CodecError> {
    let bytes = decode_bytes(input, format, text_encoding)?;
    buffer.append_bytes(&bytes);
    Ok(())
}

/// Format raw bytes.
pub fn encode_bytes(bytes: &[u8], format: OutputFormat, options: &OutputOptions) -> String {
    match format {
        OutputFormat::Hex => hex::encode(bytes, options.output_upper),
        OutputFormat::B64 => b64::encode(bytes, &options.b64_pad),
        OutputFormat::Bytes => bytes::encode(bytes),
    }
}

/// Format the contents of a buffer.
///
/// A bit length that is not a multiple of 8 is rounded up to whole bytes,
/// with the missing low bits reading as zero.
pub fn encode(buffer: &PackedWordBuffer, format: OutputFormat, options: &OutputOptions) -> String {
    encode_bytes(&buffer.to_bytes(), format, options)
}
