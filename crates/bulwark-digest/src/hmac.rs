// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC per RFC 2104, over any [`HashPrimitive`].

use alloc::vec;
use alloc::vec::Vec;

use bulwark_digest_core::{DigestError, HashPrimitive};
use bulwark_util::constant_time_eq;
use zeroize::{Zeroize, ZeroizeOnDrop};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Streaming HMAC state.
///
/// The keyed pads and the inner digest live in this struct and are wiped on
/// drop. The two hash instances wipe themselves.
#[derive(Clone)]
pub struct Hmac<H: HashPrimitive + Default> {
    /// Inner hash, primed with K ⊕ ipad
    inner: H,
    /// Outer hash over K ⊕ opad || inner digest
    outer: H,
    /// K ⊕ ipad (0x36 repeated)
    k_ipad: Vec<u8>,
    /// K ⊕ opad (0x5c repeated)
    k_opad: Vec<u8>,
    /// Inner hash result: H(K ⊕ ipad || message)
    inner_hash: Vec<u8>,
}

impl<H: HashPrimitive + Default> Hmac<H> {
    /// Creates an HMAC keyed with `key`.
    ///
    /// Keys longer than the hash block size are hashed first; shorter keys
    /// are zero-padded to the block size.
    pub fn new(key: &[u8]) -> Self {
        let mut inner = H::default();
        let outer = H::default();
        let block_len = inner.input_block_size_bytes();
        let digest_len = inner.digest_size_bytes();

        let mut key_block = vec![0u8; block_len];
        if key.len() > block_len {
            log::trace!(
                "HMAC-{}: hashing {}-byte key down to {} bytes",
                inner.algorithm_name(),
                key.len(),
                digest_len
            );

            inner.absorb(key);
            let mut hashed_key = inner.finalize();
            let n = core::cmp::min(hashed_key.len(), block_len);
            key_block[..n].copy_from_slice(&hashed_key[..n]);
            hashed_key.zeroize();
        } else {
            key_block[..key.len()].copy_from_slice(key);
        }

        let k_ipad = key_block.iter().map(|b| b ^ IPAD).collect();
        let k_opad = key_block.iter().map(|b| b ^ OPAD).collect();
        key_block.zeroize();

        let mut mac = Self {
            inner,
            outer,
            k_ipad,
            k_opad,
            inner_hash: vec![0u8; digest_len],
        };
        mac.reset();
        mac
    }

    /// Name of the underlying hash, e.g. `"SHA-256"`.
    pub fn hash_algorithm_name(&self) -> &'static str {
        self.inner.algorithm_name()
    }

    /// Finishes the computation and compares the tag against `expected` in
    /// constant time. Resets afterwards either way.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::MacMismatch`] unless `expected` equals the full
    /// computed tag.
    pub fn verify(&mut self, expected: &[u8]) -> Result<(), DigestError> {
        let mut tag = self.finalize();
        let matches = constant_time_eq(&tag, expected);
        tag.zeroize();

        if matches {
            Ok(())
        } else {
            Err(DigestError::MacMismatch)
        }
    }

    /// One-shot HMAC of `data` under `key`.
    pub fn mac(key: &[u8], data: &[u8]) -> Vec<u8> {
        let mut mac = Self::new(key);
        mac.absorb(data);
        mac.finalize()
    }
}

impl<H: HashPrimitive + Default> HashPrimitive for Hmac<H> {
    fn algorithm_name(&self) -> &'static str {
        "HMAC"
    }

    fn digest_size_bits(&self) -> usize {
        self.inner.digest_size_bits()
    }

    fn input_block_size_bytes(&self) -> usize {
        self.inner.input_block_size_bytes()
    }

    /// Returns to the keyed state with no message absorbed.
    fn reset(&mut self) {
        // Slice wipe keeps the length; Vec::zeroize would also clear it.
        self.inner_hash.as_mut_slice().zeroize();
        self.outer.reset();
        self.inner.reset();
        self.inner.absorb(&self.k_ipad);
    }

    fn absorb(&mut self, data: &[u8]) {
        self.inner.absorb(data);
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize, DigestError> {
        let required = self.inner_hash.len();
        if out.len() < required {
            return Err(DigestError::OutputTooSmall {
                required,
                provided: out.len(),
            });
        }

        // Inner hash: H(k_ipad || data)
        self.inner.finalize_into(&mut self.inner_hash)?;

        // Outer hash: H(k_opad || inner_hash) -> out
        self.outer.absorb(&self.k_opad);
        self.outer.absorb(&self.inner_hash);
        let written = self.outer.finalize_into(out)?;

        self.reset();
        Ok(written)
    }
}

impl<H: HashPrimitive + Default> Drop for Hmac<H> {
    fn drop(&mut self) {
        self.k_ipad.zeroize();
        self.k_opad.zeroize();
        self.inner_hash.zeroize();
    }
}

impl<H: HashPrimitive + Default> ZeroizeOnDrop for Hmac<H> {}
