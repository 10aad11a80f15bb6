// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Known-answer vectors and runners for bulwark digests and HMAC.
//!
//! Runners only speak [`HashPrimitive`], so the same vectors check any
//! implementation. Every vector is computed three ways: one `absorb` call,
//! uneven chunks, and again on the same instance after finalization (which
//! checks that finalize leaves a clean state).
//!
//! References:
//! - FIPS 180-4 examples, NIST CSRC "Examples with Intermediate Values"
//! - RFC 2202: Test Cases for HMAC-MD5 and HMAC-SHA-1
//! - RFC 4231: Identifiers and Test Vectors for HMAC-SHA-224, HMAC-SHA-256,
//!   HMAC-SHA-384, and HMAC-SHA-512

mod hmac;
mod message;
mod runner;
mod sha;

pub use hmac::{HMAC_SHA1, HMAC_SHA224, HMAC_SHA256, HMAC_SHA384, HMAC_SHA512};
pub use message::{Message, MSG_448, MSG_896};
pub use runner::{
    DigestVector, MacVector, digest_in_chunks, run_digest_vectors, run_mac_vectors,
};
pub use sha::{SHA1, SHA224, SHA256, SHA384, SHA512, SHA512_224, SHA512_256};
