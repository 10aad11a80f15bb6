// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message-length counters.
//!
//! The final padded block carries the pre-padding message length in bits as
//! two big-endian words: 64 bits for SHA-1/SHA-224/SHA-256, 128 bits for the
//! SHA-384/512 family. Counters track bytes and produce those two words.

use zeroize::Zeroize;

/// Running count of absorbed message bytes.
pub trait ByteCounter<W>: Clone + Default + Send + Sync + Zeroize {
    /// Adds `len` absorbed bytes.
    fn add(&mut self, len: usize);

    /// Message length in bits as `(high, low)` words of the length field.
    fn length_words(&self) -> (W, W);

    /// Returns `true` if no byte has been counted.
    fn is_zero(&self) -> bool;
}

/// 64-bit byte counter for the 32-bit word family.
///
/// The bit length wraps modulo 2^64, which the 64-bit length field cannot
/// distinguish anyway.
#[derive(Clone, Default, Zeroize)]
pub struct Counter64 {
    bytes: u64,
}

impl Counter64 {
    /// Creates a counter that has already seen `bytes` bytes.
    pub fn with_bytes(bytes: u64) -> Self {
        Self { bytes }
    }

    /// Bytes counted so far.
    pub fn bytes(&self) -> u64 {
        self.bytes
    }
}

impl ByteCounter<u32> for Counter64 {
    #[inline]
    fn add(&mut self, len: usize) {
        self.bytes = self.bytes.wrapping_add(len as u64);
    }

    #[inline]
    fn length_words(&self) -> (u32, u32) {
        let bits = self.bytes << 3;
        ((bits >> 32) as u32, bits as u32)
    }

    fn is_zero(&self) -> bool {
        self.bytes == 0
    }
}

/// Low half keeps 61 significant bits, so `low << 3` never loses a bit.
const LOW_MASK: u64 = 0x1fff_ffff_ffff_ffff;

/// 128-bit byte counter for the 64-bit word family, split in two halves.
///
/// Invariant: `low <= LOW_MASK`. Every addition folds whatever overflows the
/// low 61 bits into `high`, so the total byte count is
/// `high * 2^61 + low` and the bit length is `high * 2^64 + low * 8`:
/// `high` is exactly the high word of the 128-bit length field.
#[derive(Clone, Default, Zeroize)]
pub struct Counter128 {
    low: u64,
    high: u64,
}

impl Counter128 {
    /// Creates a counter from raw halves, normalizing `low` into 61 bits.
    pub fn with_parts(low: u64, high: u64) -> Self {
        let mut counter = Self { low: 0, high };
        counter.fold(low as u128);
        counter
    }

    /// Low half (bytes modulo 2^61).
    pub fn low(&self) -> u64 {
        self.low
    }

    /// High half (multiples of 2^61 bytes).
    pub fn high(&self) -> u64 {
        self.high
    }

    #[inline]
    fn fold(&mut self, extra: u128) {
        let sum = self.low as u128 + extra;
        self.high = self.high.wrapping_add((sum >> 61) as u64);
        self.low = (sum as u64) & LOW_MASK;
    }
}

impl ByteCounter<u64> for Counter128 {
    #[inline]
    fn add(&mut self, len: usize) {
        self.fold(len as u128);
    }

    #[inline]
    fn length_words(&self) -> (u64, u64) {
        (self.high, self.low << 3)
    }

    fn is_zero(&self) -> bool {
        self.low == 0 && self.high == 0
    }
}
