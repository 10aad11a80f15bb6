// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC test cases from RFC 2202 (SHA-1) and RFC 4231 (SHA-2), plus the
//! commonly quoted "key" / quick-brown-fox and empty-key cases.

use crate::message::Message;
use crate::runner::MacVector;

const EMPTY: Message = Message::Bytes(b"");
const FOX: Message = Message::Bytes(b"The quick brown fox jumps over the lazy dog");
const KEY: Message = Message::Bytes(b"key");

// RFC 2202 / RFC 4231 test case 1
const TC1_KEY: Message = Message::Repeated {
    byte: 0x0b,
    count: 20,
};
const TC1_DATA: Message = Message::Bytes(b"Hi There");

// Test case 2: key shorter than the output
const TC2_KEY: Message = Message::Bytes(b"Jefe");
const TC2_DATA: Message = Message::Bytes(b"what do ya want for nothing?");

// Test case 6: key longer than the block, hashed first
const TC6_DATA: Message = Message::Bytes(b"Test Using Larger Than Block-Size Key - Hash Key First");

/// HMAC-SHA-1
pub const HMAC_SHA1: &[MacVector] = &[
    MacVector {
        name: "rfc2202 case 1",
        key: TC1_KEY,
        message: TC1_DATA,
        tag: "b617318655057264e28bc0b6fb378c8ef146be00",
    },
    MacVector {
        name: "rfc2202 case 2",
        key: TC2_KEY,
        message: TC2_DATA,
        tag: "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79",
    },
    MacVector {
        name: "rfc2202 case 6",
        key: Message::Repeated {
            byte: 0xaa,
            count: 80,
        },
        message: TC6_DATA,
        tag: "aa4ae5e15272d00e95705637ce8a3b55ed402112",
    },
    MacVector {
        name: "key/fox",
        key: KEY,
        message: FOX,
        tag: "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9",
    },
    MacVector {
        name: "empty key, empty message",
        key: EMPTY,
        message: EMPTY,
        tag: "fbdb1d1b18aa6c08324b7d64b71fb76370690e1d",
    },
];

const TC6_KEY_4231: Message = Message::Repeated {
    byte: 0xaa,
    count: 131,
};

/// HMAC-SHA-224
pub const HMAC_SHA224: &[MacVector] = &[
    MacVector {
        name: "rfc4231 case 1",
        key: TC1_KEY,
        message: TC1_DATA,
        tag: "896fb1128abbdf196832107cd49df33f47b4b1169912ba4f53684b22",
    },
    MacVector {
        name: "rfc4231 case 2",
        key: TC2_KEY,
        message: TC2_DATA,
        tag: "a30e01098bc6dbbf45690f3a7e9e6d0f8bbea2a39e6148008fd05e44",
    },
    MacVector {
        name: "rfc4231 case 6",
        key: TC6_KEY_4231,
        message: TC6_DATA,
        tag: "95e9a0db962095adaebe9b2d6f0dbce2d499f112f2d2b7273fa6870e",
    },
];

/// HMAC-SHA-256
pub const HMAC_SHA256: &[MacVector] = &[
    MacVector {
        name: "rfc4231 case 1",
        key: TC1_KEY,
        message: TC1_DATA,
        tag: "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7",
    },
    MacVector {
        name: "rfc4231 case 2",
        key: TC2_KEY,
        message: TC2_DATA,
        tag: "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843",
    },
    MacVector {
        name: "rfc4231 case 6",
        key: TC6_KEY_4231,
        message: TC6_DATA,
        tag: "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54",
    },
    MacVector {
        name: "key/fox",
        key: KEY,
        message: FOX,
        tag: "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8",
    },
    MacVector {
        name: "empty key, empty message",
        key: EMPTY,
        message: EMPTY,
        tag: "b613679a0814d9ec772f95d778c35fc5ff1697c493715653c6c712144292c5ad",
    },
];

/// HMAC-SHA-384
pub const HMAC_SHA384: &[MacVector] = &[
    MacVector {
        name: "rfc4231 case 1",
        key: TC1_KEY,
        message: TC1_DATA,
        tag: "afd03944d84895626b0825f4ab46907f15f9dadbe4101ec682aa034c7cebc59cfaea9ea9076ede7f4af152e8b2fa9cb6",
    },
    MacVector {
        name: "rfc4231 case 2",
        key: TC2_KEY,
        message: TC2_DATA,
        tag: "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47e42ec3736322445e8e2240ca5e69e2c78b3239ecfab21649",
    },
    MacVector {
        name: "rfc4231 case 6",
        key: TC6_KEY_4231,
        message: TC6_DATA,
        tag: "4ece084485813e9088d2c63a041bc5b44f9ef1012a2b588f3cd11f05033ac4c60c2ef6ab4030fe8296248df163f44952",
    },
];

/// HMAC-SHA-512
pub const HMAC_SHA512: &[MacVector] = &[
    MacVector {
        name: "rfc4231 case 1",
        key: TC1_KEY,
        message: TC1_DATA,
        tag: "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cdedaa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854",
    },
    MacVector {
        name: "rfc4231 case 2",
        key: TC2_KEY,
        message: TC2_DATA,
        tag: "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea2505549758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737",
    },
    MacVector {
        name: "rfc4231 case 6",
        key: TC6_KEY_4231,
        message: TC6_DATA,
        tag: "80b24263c7c1a3ebb71493c1dd7be8b49b46d1f41b4aeec1121b013783f8f3526b56d037e05f2598bd0fd2215d6a1e5295e64f73f63f0aec8b915a985d786598",
    },
    MacVector {
        name: "key/fox",
        key: KEY,
        message: FOX,
        tag: "b42af09057bac1e2d41708e48a902e09b5ff7f12ab428a4fe86653c73dd248fb82f948a549f7b791a5b41915ee4d1ec3935357e4e2317250d0372afa2ebeeb3a",
    },
];
