// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use bulwark_digest::{HashPrimitive, Sha1, Sha256, Sha384, Sha512};

const SIZES: [usize; 5] = [64, 256, 1024, 8192, 65536];

fn bench_one_shot<H: HashPrimitive + Default>(c: &mut Criterion, group_name: &str) {
    let mut group = c.benchmark_group(group_name);

    for len in SIZES.iter() {
        group.throughput(Throughput::Bytes(*len as u64));
        group.bench_with_input(format!("{} bytes", len), len, |b, &len| {
            let data = vec![0xa5u8; len];
            let mut hasher = H::default();
            let mut out = [0u8; 64];

            b.iter(|| {
                hasher.absorb(black_box(&data));
                hasher
                    .finalize_into(black_box(&mut out))
                    .expect("finalize failed");
            });
        });
    }
    group.finish();
}

fn benchmark_sha1(c: &mut Criterion) {
    bench_one_shot::<Sha1>(c, "sha1");
}

fn benchmark_sha256(c: &mut Criterion) {
    bench_one_shot::<Sha256>(c, "sha256");
}

fn benchmark_sha384(c: &mut Criterion) {
    bench_one_shot::<Sha384>(c, "sha384");
}

fn benchmark_sha512(c: &mut Criterion) {
    bench_one_shot::<Sha512>(c, "sha512");
}

fn benchmark_sha256_small_chunks(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256_streaming");

    // Same 8 KiB message, fed in chunks that do and do not align with words
    for chunk in [1usize, 3, 64, 1000].iter() {
        group.throughput(Throughput::Bytes(8192));
        group.bench_with_input(format!("{} byte chunks", chunk), chunk, |b, &chunk| {
            let data = vec![0x5au8; 8192];
            let mut hasher = Sha256::new();

            b.iter(|| {
                for piece in data.chunks(chunk) {
                    hasher.absorb(black_box(piece));
                }
                black_box(hasher.finalize_fixed());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_sha1,
    benchmark_sha256,
    benchmark_sha384,
    benchmark_sha512,
    benchmark_sha256_small_chunks
);
criterion_main!(benches);
