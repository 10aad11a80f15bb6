// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use bulwark_digest_core::HashPrimitive;
use bulwark_util::{bytes_to_hex, hex_to_bytes};

use crate::message::Message;

/// Uneven chunk lengths that straddle word and block boundaries. The zero
/// entry exercises empty `absorb` calls.
const CHUNK_PATTERN: &[usize] = &[1, 0, 7, 63, 3, 128, 129, 1000];

/// One known-answer digest case.
#[derive(Debug, Clone, Copy)]
pub struct DigestVector {
    /// Case label used in failure reports
    pub name: &'static str,
    /// Expected `algorithm_name()`
    pub algorithm: &'static str,
    /// Input
    pub message: Message,
    /// Expected digest (hex)
    pub digest: &'static str,
}

/// One known-answer MAC case.
#[derive(Debug, Clone, Copy)]
pub struct MacVector {
    /// Case label used in failure reports
    pub name: &'static str,
    /// Key
    pub key: Message,
    /// Input
    pub message: Message,
    /// Expected tag (hex)
    pub tag: &'static str,
}

/// Absorbs `data` into `primitive` in chunks cycling through `chunk_lens`
/// and returns the digest.
///
/// A zero chunk length absorbs an empty slice. If no length is positive,
/// everything is fed in one call.
pub fn digest_in_chunks<H: HashPrimitive>(
    primitive: &mut H,
    data: &[u8],
    chunk_lens: &[usize],
) -> Vec<u8> {
    if chunk_lens.iter().all(|len| *len == 0) {
        primitive.absorb(data);
        return primitive.finalize();
    }

    let mut rest = data;
    for len in chunk_lens.iter().cycle() {
        if rest.is_empty() {
            break;
        }
        let take = (*len).min(rest.len());
        primitive.absorb(&rest[..take]);
        rest = &rest[take..];
    }

    primitive.finalize()
}

fn check_three_ways<H: HashPrimitive>(
    primitive: &mut H,
    name: &str,
    data: &[u8],
    expected: &str,
) -> Result<(), String> {
    let want = hex_to_bytes(expected);

    let runs = [
        ("one-shot", digest_in_chunks(primitive, data, &[])),
        ("chunked", digest_in_chunks(primitive, data, CHUNK_PATTERN)),
        ("reused", digest_in_chunks(primitive, data, &[])),
    ];

    for (how, got) in runs {
        if got != want {
            return Err(format!(
                "{name} ({how}): digest mismatch\n  expected: {expected}\n  got:      {}",
                bytes_to_hex(&got)
            ));
        }
    }

    Ok(())
}

/// Runs digest vectors against fresh `H` instances. Returns one message per
/// failing case; empty means all passed.
pub fn run_digest_vectors<H: HashPrimitive + Default>(vectors: &[DigestVector]) -> Vec<String> {
    let mut failures = Vec::new();

    for tc in vectors {
        let mut primitive = H::default();

        if primitive.algorithm_name() != tc.algorithm {
            failures.push(format!(
                "{}: vector for {} run against {}",
                tc.name,
                tc.algorithm,
                primitive.algorithm_name()
            ));
            continue;
        }

        let data = tc.message.to_vec();
        if let Err(e) = check_three_ways(&mut primitive, tc.name, &data, tc.digest) {
            failures.push(e);
        }
    }

    failures
}

/// Runs MAC vectors, keying each instance with `new`. Returns one message
/// per failing case.
pub fn run_mac_vectors<M, F>(vectors: &[MacVector], new: F) -> Vec<String>
where
    M: HashPrimitive,
    F: Fn(&[u8]) -> M,
{
    let mut failures = Vec::new();

    for tc in vectors {
        let key = tc.key.to_vec();
        let data = tc.message.to_vec();
        let mut mac = new(&key);

        if let Err(e) = check_three_ways(&mut mac, tc.name, &data, tc.tag) {
            failures.push(e);
        }
    }

    failures
}
