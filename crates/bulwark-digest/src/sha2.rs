// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-output SHA-2 types over [`Sha2Engine`].

use bulwark_digest_core::{DigestError, HashPrimitive};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::engine::Sha2Engine;
use crate::params::{SHA224, SHA256, SHA384, SHA512, SHA512_224, SHA512_256};

macro_rules! sha2_digest {
    ($(#[$meta:meta])* $name:ident, $word:ty, $params:ident, $len:expr, $block:expr) => {
        $(#[$meta])*
        ///
        /// Cloning captures the current running state.
        #[allow(non_camel_case_types)]
        #[derive(Clone)]
        pub struct $name(Sha2Engine<$word>);

        impl $name {
            /// Output size in bytes
            pub const DIGEST_LEN: usize = $len;

            /// Block size in bytes
            pub const BLOCK_LEN: usize = $block;

            /// Creates a fresh instance.
            pub fn new() -> Self {
                Self(Sha2Engine::new(&$params))
            }

            /// Feeds message bytes. Zero-length input is a no-op.
            pub fn absorb(&mut self, data: &[u8]) {
                self.0.absorb(data);
            }

            /// Finishes the computation, returns the digest and resets.
            pub fn finalize_fixed(&mut self) -> [u8; $len] {
                let mut out = [0u8; $len];
                self.0.finish(&mut out);
                out
            }

            /// Returns the instance to its freshly constructed state.
            pub fn reset(&mut self) {
                self.0.reset();
            }

            /// Returns `true` if no message-derived scratch data is held.
            pub fn scratch_is_zeroized(&self) -> bool {
                self.0.scratch_is_zeroized()
            }

            /// One-shot digest of `data`.
            pub fn digest(data: &[u8]) -> [u8; $len] {
                let mut state = Self::new();
                state.absorb(data);
                state.finalize_fixed()
            }

            #[cfg(test)]
            #[allow(dead_code)]
            pub(crate) fn engine_mut(&mut self) -> &mut Sha2Engine<$word> {
                &mut self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Zeroize for $name {
            fn zeroize(&mut self) {
                self.0.zeroize();
            }
        }

        impl ZeroizeOnDrop for $name {}

        impl HashPrimitive for $name {
            fn algorithm_name(&self) -> &'static str {
                self.0.algorithm_name()
            }

            fn digest_size_bits(&self) -> usize {
                $len * 8
            }

            fn input_block_size_bytes(&self) -> usize {
                $block
            }

            fn reset(&mut self) {
                self.0.reset();
            }

            fn absorb(&mut self, data: &[u8]) {
                self.0.absorb(data);
            }

            fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize, DigestError> {
                self.0.finalize_into(out)
            }
        }
    };
}

sha2_digest!(
    /// Streaming SHA-224.
    Sha224, u32, SHA224, 28, 64
);
sha2_digest!(
    /// Streaming SHA-256.
    Sha256, u32, SHA256, 32, 64
);
sha2_digest!(
    /// Streaming SHA-384.
    Sha384, u64, SHA384, 48, 128
);
sha2_digest!(
    /// Streaming SHA-512.
    Sha512, u64, SHA512, 64, 128
);
sha2_digest!(
    /// Streaming SHA-512/224.
    Sha512_224, u64, SHA512_224, 28, 128
);
sha2_digest!(
    /// Streaming SHA-512/256.
    Sha512_256, u64, SHA512_256, 32, 128
);
