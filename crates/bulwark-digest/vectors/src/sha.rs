// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! FIPS 180-4 example digests, plus a few widely published extras.

use crate::message::{MSG_448, MSG_896, Message};
use crate::runner::DigestVector;

const EMPTY: Message = Message::Bytes(b"");
const ABC: Message = Message::Bytes(b"abc");
const TWO_BLOCK_448: Message = Message::Bytes(MSG_448);
const TWO_BLOCK_896: Message = Message::Bytes(MSG_896);
const MILLION_A: Message = Message::Repeated {
    byte: b'a',
    count: 1_000_000,
};
const FOX: Message = Message::Bytes(b"The quick brown fox jumps over the lazy dog");

/// SHA-1
pub const SHA1: &[DigestVector] = &[
    DigestVector {
        name: "sha1 empty",
        algorithm: "SHA-1",
        message: EMPTY,
        digest: "da39a3ee5e6b4b0d3255bfef95601890afd80709",
    },
    DigestVector {
        name: "sha1 abc",
        algorithm: "SHA-1",
        message: ABC,
        digest: "a9993e364706816aba3e25717850c26c9cd0d89d",
    },
    DigestVector {
        name: "sha1 448-bit",
        algorithm: "SHA-1",
        message: TWO_BLOCK_448,
        digest: "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
    },
    DigestVector {
        name: "sha1 million a",
        algorithm: "SHA-1",
        message: MILLION_A,
        digest: "34aa973cd4c4daa4f61eeb2bdbad27316534016f",
    },
    DigestVector {
        name: "sha1 fox",
        algorithm: "SHA-1",
        message: FOX,
        digest: "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
    },
];

/// SHA-224
pub const SHA224: &[DigestVector] = &[
    DigestVector {
        name: "sha224 empty",
        algorithm: "SHA-224",
        message: EMPTY,
        digest: "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f",
    },
    DigestVector {
        name: "sha224 abc",
        algorithm: "SHA-224",
        message: ABC,
        digest: "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
    },
    DigestVector {
        name: "sha224 448-bit",
        algorithm: "SHA-224",
        message: TWO_BLOCK_448,
        digest: "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525",
    },
    DigestVector {
        name: "sha224 million a",
        algorithm: "SHA-224",
        message: MILLION_A,
        digest: "20794655980c91d8bbb4c1ea97618a4bf03f42581948b2ee4ee7ad67",
    },
];

/// SHA-256
pub const SHA256: &[DigestVector] = &[
    DigestVector {
        name: "sha256 empty",
        algorithm: "SHA-256",
        message: EMPTY,
        digest: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    DigestVector {
        name: "sha256 abc",
        algorithm: "SHA-256",
        message: ABC,
        digest: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    DigestVector {
        name: "sha256 448-bit",
        algorithm: "SHA-256",
        message: TWO_BLOCK_448,
        digest: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    DigestVector {
        name: "sha256 896-bit",
        algorithm: "SHA-256",
        message: TWO_BLOCK_896,
        digest: "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    },
    DigestVector {
        name: "sha256 million a",
        algorithm: "SHA-256",
        message: MILLION_A,
        digest: "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    },
    DigestVector {
        name: "sha256 fox",
        algorithm: "SHA-256",
        message: FOX,
        digest: "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
    },
];

/// SHA-384
pub const SHA384: &[DigestVector] = &[
    DigestVector {
        name: "sha384 empty",
        algorithm: "SHA-384",
        message: EMPTY,
        digest: "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b",
    },
    DigestVector {
        name: "sha384 abc",
        algorithm: "SHA-384",
        message: ABC,
        digest: "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7",
    },
    DigestVector {
        name: "sha384 896-bit",
        algorithm: "SHA-384",
        message: TWO_BLOCK_896,
        digest: "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712fcc7c71a557e2db966c3e9fa91746039",
    },
    DigestVector {
        name: "sha384 million a",
        algorithm: "SHA-384",
        message: MILLION_A,
        digest: "9d0e1809716474cb086e834e310a4a1ced149e9c00f248527972cec5704c2a5b07b8b3dc38ecc4ebae97ddd87f3d8985",
    },
];

/// SHA-512
pub const SHA512: &[DigestVector] = &[
    DigestVector {
        name: "sha512 empty",
        algorithm: "SHA-512",
        message: EMPTY,
        digest: "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
    },
    DigestVector {
        name: "sha512 abc",
        algorithm: "SHA-512",
        message: ABC,
        digest: "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
    },
    DigestVector {
        name: "sha512 448-bit",
        algorithm: "SHA-512",
        message: TWO_BLOCK_448,
        digest: "204a8fc6dda82f0a0ced7beb8e08a41657c16ef468b228a8279be331a703c33596fd15c13b1b07f9aa1d3bea57789ca031ad85c7a71dd70354ec631238ca3445",
    },
    DigestVector {
        name: "sha512 896-bit",
        algorithm: "SHA-512",
        message: TWO_BLOCK_896,
        digest: "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909",
    },
    DigestVector {
        name: "sha512 million a",
        algorithm: "SHA-512",
        message: MILLION_A,
        digest: "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973ebde0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b",
    },
];

/// SHA-512/224
pub const SHA512_224: &[DigestVector] = &[
    DigestVector {
        name: "sha512/224 empty",
        algorithm: "SHA-512/224",
        message: EMPTY,
        digest: "6ed0dd02806fa89e25de060c19d3ac86cabb87d6a0ddd05c333b84f4",
    },
    DigestVector {
        name: "sha512/224 abc",
        algorithm: "SHA-512/224",
        message: ABC,
        digest: "4634270f707b6a54daae7530460842e20e37ed265ceee9a43e8924aa",
    },
];

/// SHA-512/256
pub const SHA512_256: &[DigestVector] = &[
    DigestVector {
        name: "sha512/256 empty",
        algorithm: "SHA-512/256",
        message: EMPTY,
        digest: "c672b8d1ef56ed28ab87c3622c5114069bdd3ad7b8f9737498d0c01ecef0967a",
    },
    DigestVector {
        name: "sha512/256 abc",
        algorithm: "SHA-512/256",
        message: ABC,
        digest: "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23",
    },
];
