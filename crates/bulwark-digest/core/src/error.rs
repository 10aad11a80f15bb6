// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Digest error
///
/// Hashing is total over its input bytes: every variant is a caller contract
/// violation, never a property of the data being hashed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestError {
    /// `offset..offset + length` does not lie within the supplied buffer
    #[error("invalid argument: range {offset}+{length} exceeds buffer of {buffer_len} bytes")]
    InvalidArgument {
        /// Requested start offset
        offset: usize,
        /// Requested length
        length: usize,
        /// Length of the supplied buffer
        buffer_len: usize,
    },

    /// Output buffer cannot hold the digest
    #[error("output buffer too small: need {required} bytes, got {provided}")]
    OutputTooSmall {
        /// Digest size in bytes
        required: usize,
        /// Size of the supplied output buffer
        provided: usize,
    },

    /// HMAC tag did not match the computed tag
    #[error("MAC verification failed")]
    MacMismatch,
}
