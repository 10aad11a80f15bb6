// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Tests for SHA-1 streaming behavior

use bulwark_digest_core::{DigestError, HashPrimitive};
use bulwark_util::hex_to_bytes;

use crate::Sha1;

#[test]
fn test_sha1_abc() {
    assert_eq!(
        Sha1::digest(b"abc")[..],
        hex_to_bytes("a9993e364706816aba3e25717850c26c9cd0d89d")[..]
    );
}

#[test]
fn test_sha1_split_matches_one_shot() {
    let msg = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

    let mut sha = Sha1::new();
    for chunk in msg.chunks(3) {
        sha.absorb(chunk);
    }

    assert_eq!(sha.finalize_fixed(), Sha1::digest(msg));
}

#[test]
fn test_sha1_finalize_wipes_scratch() {
    let mut sha = Sha1::new();
    sha.absorb(&[0x42; 61]);
    assert!(!sha.scratch_is_zeroized());

    sha.finalize_fixed();

    assert!(sha.scratch_is_zeroized());
}

#[test]
fn test_sha1_output_too_small() {
    let mut sha = Sha1::new();
    sha.absorb(b"ab");

    let mut out = [0u8; 19];
    assert_eq!(
        sha.finalize_into(&mut out),
        Err(DigestError::OutputTooSmall {
            required: 20,
            provided: 19
        })
    );

    sha.absorb(b"c");
    let mut out = [0u8; 32];
    assert_eq!(sha.finalize_into(&mut out), Ok(20));
    assert_eq!(out[..20], Sha1::digest(b"abc"));
    assert_eq!(out[20..], [0u8; 12]);
}

#[test]
fn test_sha1_constants() {
    let sha = Sha1::default();

    assert_eq!(sha.algorithm_name(), "SHA-1");
    assert_eq!(sha.digest_size_bytes(), 20);
    assert_eq!(sha.input_block_size_bytes(), 64);
}
