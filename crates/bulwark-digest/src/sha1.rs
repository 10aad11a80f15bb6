// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1 per FIPS 180-4 Section 6.1.
//!
//! Shares word assembly, the schedule scratch buffer and the 64-bit length
//! counter with SHA-256; only the block function differs.

use bulwark_digest_core::{DigestError, HashPrimitive};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::accumulator::{Schedule, WordAssembler};
use crate::compress::MAX_SCHEDULE_WORDS;
use crate::counter::{ByteCounter, Counter64};
use crate::params::BLOCK_WORDS;
use crate::word::Word;

/// SHA-1 output size in bytes
pub const SHA1_DIGEST_LEN: usize = 20;

/// SHA-1 block size in bytes
pub const SHA1_BLOCK_LEN: usize = 64;

/// Initial hash value H(0) per FIPS 180-4 Section 5.3.1
const H0: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Round constants per FIPS 180-4 Section 4.2.1, one per 20-round quarter
const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

/// Compresses one block into `state`. `schedule[..16]` holds the message
/// words on entry; all 80 words are expanded in place.
fn compress_sha1(state: &mut [u32; 5], schedule: &mut [u32; MAX_SCHEDULE_WORDS]) {
    // W[t] = ROTL^1(W[t-3] ⊕ W[t-8] ⊕ W[t-14] ⊕ W[t-16])
    for t in BLOCK_WORDS..MAX_SCHEDULE_WORDS {
        schedule[t] =
            (schedule[t - 3] ^ schedule[t - 8] ^ schedule[t - 14] ^ schedule[t - 16]).rotate_left(1);
    }

    let mut wv = *state;

    for (t, wt) in schedule.iter().enumerate() {
        let [a, b, c, d, e] = wv;

        // f_t per FIPS 180-4 Section 4.1.1
        let f = match t / 20 {
            0 => (b & c) | (!b & d),
            2 => (b & c) | (b & d) | (c & d),
            _ => b ^ c ^ d,
        };

        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(K[t / 20])
            .wrapping_add(*wt);

        wv = [temp, a, b.rotate_left(30), c, d];
    }

    for (h, v) in state.iter_mut().zip(wv.iter()) {
        *h = h.wrapping_add(*v);
    }

    wv.zeroize();
}

/// Streaming SHA-1.
///
/// SHA-1 is broken for collision resistance; it is provided for HMAC-SHA1
/// and interoperability.
#[derive(Clone)]
pub struct Sha1 {
    state: [u32; 5],
    schedule: Schedule<u32>,
    assembler: WordAssembler<u32>,
    counter: Counter64,
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha1 {
    /// Output size in bytes
    pub const DIGEST_LEN: usize = SHA1_DIGEST_LEN;

    /// Block size in bytes
    pub const BLOCK_LEN: usize = SHA1_BLOCK_LEN;

    /// Create new SHA-1 state initialized with H(0)
    pub fn new() -> Self {
        Self {
            state: H0,
            schedule: Schedule::default(),
            assembler: WordAssembler::default(),
            counter: Counter64::default(),
        }
    }

    /// Feeds message bytes. Zero-length input is a no-op.
    pub fn absorb(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }

        self.counter.add(data.len());
        self.absorb_uncounted(data);
    }

    fn absorb_uncounted(&mut self, data: &[u8]) {
        let Self {
            state,
            schedule,
            assembler,
            ..
        } = self;

        assembler.absorb(data, |word| {
            if schedule.push(word) {
                compress_sha1(state, schedule.words_mut());
                schedule.clear();
            }
        });
    }

    fn push_word(&mut self, word: u32) {
        if self.schedule.push(word) {
            compress_sha1(&mut self.state, self.schedule.words_mut());
            self.schedule.clear();
        }
    }

    fn finish(&mut self, out: &mut [u8; SHA1_DIGEST_LEN]) {
        let (len_high, len_low) = self.counter.length_words();

        self.absorb_uncounted(&[0x80]);
        while self.assembler.pending_len() != 0 {
            self.absorb_uncounted(&[0x00]);
        }
        while self.schedule.filled() != BLOCK_WORDS - 2 {
            self.push_word(0);
        }
        self.push_word(len_high);
        self.push_word(len_low);

        let mut bytes = [0u8; 4];
        for (word, chunk) in self.state.iter_mut().zip(out.chunks_exact_mut(4)) {
            word.export_be(&mut bytes);
            chunk.copy_from_slice(&bytes);
        }
        bytes.zeroize();

        log::trace!("SHA-1: digest finalized");

        self.reset();
    }

    /// Finishes the computation, returns the digest and resets.
    pub fn finalize_fixed(&mut self) -> [u8; SHA1_DIGEST_LEN] {
        let mut out = [0u8; SHA1_DIGEST_LEN];
        self.finish(&mut out);
        out
    }

    /// Reloads H(0) and wipes schedule, partial word and counter.
    pub fn reset(&mut self) {
        self.schedule.clear();
        self.assembler.zeroize();
        self.counter.zeroize();
        self.state = H0;
    }

    /// Returns `true` if no message-derived scratch data is held.
    pub fn scratch_is_zeroized(&self) -> bool {
        self.schedule.is_zeroized() && self.assembler.is_zeroized() && self.counter.is_zero()
    }

    /// One-shot SHA-1 of `data`.
    pub fn digest(data: &[u8]) -> [u8; SHA1_DIGEST_LEN] {
        let mut state = Self::new();
        state.absorb(data);
        state.finalize_fixed()
    }
}

impl HashPrimitive for Sha1 {
    fn algorithm_name(&self) -> &'static str {
        "SHA-1"
    }

    fn digest_size_bits(&self) -> usize {
        SHA1_DIGEST_LEN * 8
    }

    fn input_block_size_bytes(&self) -> usize {
        SHA1_BLOCK_LEN
    }

    fn reset(&mut self) {
        Sha1::reset(self);
    }

    fn absorb(&mut self, data: &[u8]) {
        Sha1::absorb(self, data);
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize, DigestError> {
        let provided = out.len();
        match out.first_chunk_mut::<SHA1_DIGEST_LEN>() {
            Some(out) => {
                self.finish(out);
                Ok(SHA1_DIGEST_LEN)
            }
            None => Err(DigestError::OutputTooSmall {
                required: SHA1_DIGEST_LEN,
                provided,
            }),
        }
    }
}

impl Zeroize for Sha1 {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.schedule.zeroize();
        self.assembler.zeroize();
        self.counter.zeroize();
    }
}

impl Drop for Sha1 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Sha1 {}
