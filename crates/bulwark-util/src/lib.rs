// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Big-endian word codec and verification helpers.
//!
//! FIPS 180-4 lays out every message word, length field and digest word
//! big-endian. The `*_from_be` / `*_to_be` pairs move a word between an owned
//! byte array and an integer, wiping whichever side was consumed, so that
//! partial-word buffers and serialized state never keep a second copy of
//! message material. The `load_*_be` readers borrow caller input and leave it
//! untouched.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[cfg(feature = "test-utils")]
use alloc::string::String;
#[cfg(feature = "test-utils")]
use alloc::vec::Vec;

#[cfg(test)]
mod tests;

/// Generates the big-endian codec functions for an unsigned integer type.
macro_rules! impl_be_conversions {
    ($type:ty, $size:expr, $fn_load:ident, $fn_from:ident, $fn_to:ident) => {
        #[doc = concat!("Reads a big-endian `", stringify!($type), "` from the first ", stringify!($size), " bytes of `src`.")]
        ///
        /// `src` is borrowed caller input and is not modified.
        ///
        /// # Panics
        ///
        #[doc = concat!("Panics if `src` is shorter than ", stringify!($size), " bytes.")]
        #[inline(always)]
        pub fn $fn_load(src: &[u8]) -> $type {
            let mut value: $type = 0;
            for byte in &src[..$size] {
                value = (value << 8) | (*byte as $type);
            }
            value
        }

        #[doc = concat!("Converts ", stringify!($size), " big-endian bytes to a `", stringify!($type), "`, zeroizing the source bytes.")]
        #[inline(always)]
        pub fn $fn_from(dst: &mut $type, bytes: &mut [u8; $size]) {
            *dst = 0;
            for byte in bytes.iter_mut() {
                *dst = (*dst << 8) | (*byte as $type);
                *byte = 0;
            }
        }

        #[doc = concat!("Converts a `", stringify!($type), "` to big-endian bytes, zeroizing the source.")]
        #[inline(always)]
        pub fn $fn_to(src: &mut $type, bytes: &mut [u8; $size]) {
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = (*src >> (8 * ($size - 1 - i))) as u8;
            }
            *src = 0;
        }
    };
}

impl_be_conversions!(u32, 4, load_u32_be, u32_from_be, u32_to_be);
impl_be_conversions!(u64, 8, load_u64_be, u64_from_be, u64_to_be);

/// Constant-time equality comparison for byte slices.
///
/// Returns `true` if slices are equal, `false` otherwise.
/// The comparison time depends only on the lengths, never on where the
/// first differing byte sits.
///
/// # Example
///
/// ```
/// use bulwark_util::constant_time_eq;
///
/// let a = [1, 2, 3, 4];
/// let b = [1, 2, 3, 4];
/// let c = [1, 2, 3, 5];
///
/// assert!(constant_time_eq(&a, &b));
/// assert!(!constant_time_eq(&a, &c));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

/// Verifies that a slice is zeroized.
///
/// # Example
///
/// ```
/// use bulwark_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u32; 4]));
/// assert!(!is_slice_zeroized(&[0u64, 1, 0]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized<T: Copy + Default + PartialEq>(slice: &[T]) -> bool {
    let zero = T::default();
    slice.iter().all(|v| *v == zero)
}

/// Parses a hexadecimal string into bytes.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
///
/// # Example
///
/// ```
/// use bulwark_util::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("deadbeef"), vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
#[cfg(feature = "test-utils")]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "odd-length hex string: {hex:?}");

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}

/// Encodes bytes as lowercase hexadecimal.
///
/// # Example
///
/// ```
/// use bulwark_util::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
/// ```
#[cfg(feature = "test-utils")]
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    use core::fmt::Write;

    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        // Writing into a String cannot fail.
        let _ = write!(out, "{byte:02x}");
    }
    out
}
