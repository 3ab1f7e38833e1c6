// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for shastream crates.
//!
//! ## License
//!
//! GPL-3.0-only

mod chunking;
mod hex;
pub mod vectors;

pub use chunking::{even_chunks, split_at_cuts};
pub use hex::{bytes_to_hex, hex_to_bytes};
