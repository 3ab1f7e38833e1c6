// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;

use thiserror::Error;

/// Variant name not one of `SHA-1`, `SHA-224`, `SHA-256`, `SHA-384`, `SHA-512`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported SHA variant: {0:?}")]
pub struct UnknownVariantError(pub String);
