// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Helpers for feeding one message through several `update` calls.

/// Split `data` at the given cut points.
///
/// Cuts are clamped to `data.len()`, sorted and deduplicated, so any
/// proptest-generated vector of offsets yields a valid partition. Empty
/// chunks are kept at the edges (a cut at 0 produces a leading empty chunk),
/// which exercises zero-length updates.
pub fn split_at_cuts<'a>(data: &'a [u8], cuts: &[usize]) -> Vec<&'a [u8]> {
    let mut cuts: Vec<usize> = cuts.iter().map(|&c| c.min(data.len())).collect();
    cuts.sort_unstable();
    cuts.dedup();

    let mut chunks = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for cut in cuts {
        chunks.push(&data[start..cut]);
        start = cut;
    }
    chunks.push(&data[start..]);

    chunks
}

/// Split `data` into chunks of `size` bytes (last one may be shorter).
///
/// # Panics
///
/// Panics if `size == 0`.
pub fn even_chunks(data: &[u8], size: usize) -> Vec<&[u8]> {
    assert!(size > 0, "chunk size must be positive");
    data.chunks(size).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_at_cuts_preserves_bytes() {
        let data: Vec<u8> = (0..10).collect();
        let chunks = split_at_cuts(&data, &[7, 3, 3, 42]);

        assert_eq!(chunks, vec![&data[..3], &data[3..7], &data[7..10], &data[10..]]);
        assert_eq!(chunks.concat(), data);
    }

    #[test]
    fn test_split_at_cuts_no_cuts() {
        let data = b"abc";
        assert_eq!(split_at_cuts(data, &[]), vec![&data[..]]);
    }

    #[test]
    fn test_even_chunks() {
        let data: Vec<u8> = (0..10).collect();
        let chunks = even_chunks(&data, 4);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2], &[8, 9]);
    }
}
