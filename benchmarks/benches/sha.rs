// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use shastream::{InputFormat, ShaSession, Variant, digest};

fn benchmark_digest(c: &mut Criterion) {
    for variant in Variant::ALL {
        let mut group = c.benchmark_group(format!("digest/{variant}"));

        for len in [64, 1024, 16 * 1024, 256 * 1024].iter() {
            let message = vec![0xa5u8; *len];
            group.throughput(Throughput::Bytes(*len as u64));
            group.bench_with_input(format!("{} bytes", len), &message, |b, message| {
                b.iter(|| digest(variant, black_box(message)));
            });
        }
        group.finish();
    }
}

fn benchmark_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming");
    let message = vec![0x5au8; 64 * 1024];
    group.throughput(Throughput::Bytes(message.len() as u64));

    // Chunks deliberately misaligned with both block sizes
    for chunk in [13, 100, 4096].iter() {
        group.bench_with_input(format!("SHA-256 {} byte updates", chunk), chunk, |b, &chunk| {
            b.iter(|| {
                let mut session = ShaSession::new(Variant::Sha256, InputFormat::Bytes);
                for piece in message.chunks(chunk) {
                    session
                        .update_bytes(black_box(piece))
                        .expect("update failed");
                }
                session.hash_bytes().expect("hash failed")
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_digest, benchmark_streaming);
criterion_main!(benches);
