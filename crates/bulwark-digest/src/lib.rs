// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming SHA-1, SHA-2 and HMAC with secure memory handling
//!
//! Implementation per FIPS 180-4 (SHA-1, SHA-224, SHA-256, SHA-384, SHA-512,
//! SHA-512/224, SHA-512/256) and RFC 2104 (HMAC). Input may be absorbed in
//! any chunking; the digest only depends on the concatenated bytes. Message
//! schedules and partial words are wiped after use, and all state is wiped
//! on drop.
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf>
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//!
//! # Example
//!
//! ```
//! use bulwark_digest::{HashPrimitive, Hmac, Sha256};
//!
//! let mut sha = Sha256::new();
//! sha.absorb(b"a");
//! sha.absorb(b"bc");
//! assert_eq!(sha.finalize_fixed(), Sha256::digest(b"abc"));
//!
//! let mut mac = Hmac::<Sha256>::new(b"key");
//! mac.absorb(b"The quick brown fox jumps over the lazy dog");
//! assert_eq!(mac.finalize()[..4], [0xf7u8, 0xbc, 0x83, 0xf4]);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod accumulator;
mod engine;
mod hmac;
mod sha1;
mod sha2;

pub mod compress;
pub mod counter;
pub mod params;
pub mod word;

use alloc::vec::Vec;

pub use bulwark_digest_core::{DigestError, HashPrimitive};
pub use engine::Sha2Engine;
pub use hmac::Hmac;
pub use sha1::{SHA1_BLOCK_LEN, SHA1_DIGEST_LEN, Sha1};
pub use sha2::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};

/// SHA-1 of `data`.
pub fn sha1(data: &[u8]) -> [u8; 20] {
    Sha1::digest(data)
}

/// SHA-224 of `data`.
pub fn sha224(data: &[u8]) -> [u8; 28] {
    Sha224::digest(data)
}

/// SHA-256 of `data`.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data)
}

/// SHA-384 of `data`.
pub fn sha384(data: &[u8]) -> [u8; 48] {
    Sha384::digest(data)
}

/// SHA-512 of `data`.
pub fn sha512(data: &[u8]) -> [u8; 64] {
    Sha512::digest(data)
}

/// SHA-512/224 of `data`.
pub fn sha512_224(data: &[u8]) -> [u8; 28] {
    Sha512_224::digest(data)
}

/// SHA-512/256 of `data`.
pub fn sha512_256(data: &[u8]) -> [u8; 32] {
    Sha512_256::digest(data)
}

/// HMAC of `data` under `key` with hash `H`.
///
/// ```
/// use bulwark_digest::{Sha1, hmac};
///
/// let tag = hmac::<Sha1>(b"", b"");
/// assert_eq!(tag.len(), 20);
/// ```
pub fn hmac<H: HashPrimitive + Default>(key: &[u8], data: &[u8]) -> Vec<u8> {
    Hmac::<H>::mac(key, data)
}
