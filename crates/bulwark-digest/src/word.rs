// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word-width capabilities.
//!
//! [`Word`] is what the accumulator needs from a machine word: big-endian
//! codec and wrapping addition. [`Sha2Word`] adds the SHA-2 mixing functions
//! per FIPS 180-4 Section 4.1.2 (32-bit) and 4.1.3 (64-bit), and picks the
//! byte counter wide enough for that family's length field.

use core::ops::{BitAnd, BitOr, BitXor, Not};

use bulwark_util::{load_u32_be, load_u64_be, u32_from_be, u32_to_be, u64_from_be, u64_to_be};
use zeroize::Zeroize;

use crate::counter::{ByteCounter, Counter64, Counter128};

/// Machine word consumed by a block function.
pub trait Word:
    Copy
    + Default
    + Eq
    + Send
    + Sync
    + Zeroize
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + 'static
{
    /// Word size in bytes.
    const BYTES: usize;

    /// All-zero word.
    const ZERO: Self;

    /// Owned byte image of one word.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Copy + Default + Send + Sync + Zeroize;

    /// Reads a big-endian word from the first `BYTES` bytes of borrowed input.
    fn load_be(src: &[u8]) -> Self;

    /// Decodes a big-endian word, zeroizing `bytes`.
    fn take_be(bytes: &mut Self::Bytes) -> Self;

    /// Encodes `self` big-endian into `bytes`, zeroizing `self`.
    fn export_be(&mut self, bytes: &mut Self::Bytes);

    /// Addition modulo 2^(8 * BYTES).
    fn add_mod(self, rhs: Self) -> Self;
}

/// Word width of a SHA-2 family member.
pub trait Sha2Word: Word {
    /// Message-length counter for this family.
    type Counter: ByteCounter<Self>;

    /// Σ0(x)
    fn big_sigma0(self) -> Self;

    /// Σ1(x)
    fn big_sigma1(self) -> Self;

    /// σ0(x), used in schedule expansion
    fn small_sigma0(self) -> Self;

    /// σ1(x), used in schedule expansion
    fn small_sigma1(self) -> Self;

    /// Ch(x,y,z) = (x ∧ y) ⊕ (¬x ∧ z)
    #[inline(always)]
    fn ch(x: Self, y: Self, z: Self) -> Self {
        (x & y) ^ (!x & z)
    }

    /// Maj(x,y,z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z)
    ///
    /// Computed as (x & y) ^ (z & (x ^ y)).
    #[inline(always)]
    fn maj(x: Self, y: Self, z: Self) -> Self {
        (x & y) ^ (z & (x ^ y))
    }
}

impl Word for u32 {
    const BYTES: usize = 4;
    const ZERO: Self = 0;

    type Bytes = [u8; 4];

    #[inline(always)]
    fn load_be(src: &[u8]) -> Self {
        load_u32_be(src)
    }

    #[inline(always)]
    fn take_be(bytes: &mut [u8; 4]) -> Self {
        let mut value = 0;
        u32_from_be(&mut value, bytes);
        value
    }

    #[inline(always)]
    fn export_be(&mut self, bytes: &mut [u8; 4]) {
        u32_to_be(self, bytes);
    }

    #[inline(always)]
    fn add_mod(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl Word for u64 {
    const BYTES: usize = 8;
    const ZERO: Self = 0;

    type Bytes = [u8; 8];

    #[inline(always)]
    fn load_be(src: &[u8]) -> Self {
        load_u64_be(src)
    }

    #[inline(always)]
    fn take_be(bytes: &mut [u8; 8]) -> Self {
        let mut value = 0;
        u64_from_be(&mut value, bytes);
        value
    }

    #[inline(always)]
    fn export_be(&mut self, bytes: &mut [u8; 8]) {
        u64_to_be(self, bytes);
    }

    #[inline(always)]
    fn add_mod(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

// SHA-224/256: FIPS 180-4 Section 4.1.2
impl Sha2Word for u32 {
    type Counter = Counter64;

    #[inline(always)]
    fn big_sigma0(self) -> Self {
        self.rotate_right(2) ^ self.rotate_right(13) ^ self.rotate_right(22)
    }

    #[inline(always)]
    fn big_sigma1(self) -> Self {
        self.rotate_right(6) ^ self.rotate_right(11) ^ self.rotate_right(25)
    }

    #[inline(always)]
    fn small_sigma0(self) -> Self {
        self.rotate_right(7) ^ self.rotate_right(18) ^ (self >> 3)
    }

    #[inline(always)]
    fn small_sigma1(self) -> Self {
        self.rotate_right(17) ^ self.rotate_right(19) ^ (self >> 10)
    }
}

// SHA-384/512 and SHA-512/t: FIPS 180-4 Section 4.1.3
impl Sha2Word for u64 {
    type Counter = Counter128;

    #[inline(always)]
    fn big_sigma0(self) -> Self {
        self.rotate_right(28) ^ self.rotate_right(34) ^ self.rotate_right(39)
    }

    #[inline(always)]
    fn big_sigma1(self) -> Self {
        self.rotate_right(14) ^ self.rotate_right(18) ^ self.rotate_right(41)
    }

    #[inline(always)]
    fn small_sigma0(self) -> Self {
        self.rotate_right(1) ^ self.rotate_right(8) ^ (self >> 7)
    }

    #[inline(always)]
    fn small_sigma1(self) -> Self {
        self.rotate_right(19) ^ self.rotate_right(61) ^ (self >> 6)
    }
}
