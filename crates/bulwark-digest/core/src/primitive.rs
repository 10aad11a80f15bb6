// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The minimal hash-primitive interface.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::DigestError;

/// Validates that `offset..offset + length` lies within a buffer of
/// `buffer_len` bytes and returns the range end.
///
/// # Errors
///
/// Returns [`DigestError::InvalidArgument`] if the range overflows or exceeds
/// the buffer.
#[inline]
pub fn check_range(buffer_len: usize, offset: usize, length: usize) -> Result<usize, DigestError> {
    match offset.checked_add(length) {
        Some(end) if end <= buffer_len => Ok(end),
        _ => {
            log::debug!(
                "rejected absorb range: offset={offset} length={length} buffer_len={buffer_len}"
            );
            Err(DigestError::InvalidArgument {
                offset,
                length,
                buffer_len,
            })
        }
    }
}

/// Streaming hash primitive.
///
/// An instance accumulates bytes through any number of [`absorb`] calls and
/// produces a digest on [`finalize_into`]. The digest depends only on the
/// concatenation of absorbed bytes since the last reset, never on how they
/// were chunked.
///
/// After a successful [`finalize_into`] the instance is back in its freshly
/// reset state. Clone the instance first to keep hashing on top of the same
/// prefix.
///
/// [`absorb`]: HashPrimitive::absorb
/// [`finalize_into`]: HashPrimitive::finalize_into
pub trait HashPrimitive {
    /// Human-readable algorithm name, e.g. `"SHA-256"`.
    fn algorithm_name(&self) -> &'static str;

    /// Digest size in bits.
    fn digest_size_bits(&self) -> usize;

    /// Size in bytes of one input block consumed per compression.
    fn input_block_size_bytes(&self) -> usize;

    /// Returns the instance to its freshly constructed state.
    fn reset(&mut self);

    /// Feeds `data` into the running computation. Never fails.
    fn absorb(&mut self, data: &[u8]);

    /// Finishes the computation, writes the digest to `out[..digest_size_bytes()]`
    /// and resets the instance.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::OutputTooSmall`] if `out` cannot hold the
    /// digest. The running state is left untouched in that case.
    fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize, DigestError>;

    /// Digest size in bytes.
    fn digest_size_bytes(&self) -> usize {
        self.digest_size_bits() / 8
    }

    /// Feeds `length` bytes of `buffer` starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::InvalidArgument`] if the range does not lie
    /// within `buffer`; nothing is absorbed in that case.
    fn absorb_range(
        &mut self,
        buffer: &[u8],
        offset: usize,
        length: usize,
    ) -> Result<(), DigestError> {
        let end = check_range(buffer.len(), offset, length)?;
        self.absorb(&buffer[offset..end]);
        Ok(())
    }

    /// Finishes the computation and returns the digest as a fresh vector.
    fn finalize(&mut self) -> Vec<u8> {
        let mut out = vec![0u8; self.digest_size_bytes()];
        match self.finalize_into(&mut out) {
            Ok(written) => out.truncate(written),
            // `out` is sized from digest_size_bytes(), so this arm is unreachable
            // for conforming implementations.
            Err(_) => out.clear(),
        }
        out
    }
}
