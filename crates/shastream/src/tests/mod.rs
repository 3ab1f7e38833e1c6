// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod lifecycle;

use crate::{InputFormat, OutputFormat, OutputOptions, SessionOptions, ShaSession, Variant};

/// Feed `pieces` through one session and return the lowercase hex hash.
pub(crate) fn hex_hash(
    variant: Variant,
    input_format: InputFormat,
    options: SessionOptions,
    pieces: &[&str],
) -> String {
    let mut session = ShaSession::with_options(variant, input_format, options);
    for piece in pieces {
        session.update(piece).expect("Failed to update(..)");
    }
    session
        .get_hash(OutputFormat::Hex, &OutputOptions::default())
        .expect("Failed to get_hash(..)")
}
