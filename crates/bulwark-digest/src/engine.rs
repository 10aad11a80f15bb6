// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming SHA-2 engine, generic over the word width.
//!
//! All mutable material (hash state, message schedule, partial word, length
//! counter) lives in the struct so it can be wiped on reset and on drop.

use bulwark_digest_core::{DigestError, HashPrimitive};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::accumulator::{Schedule, WordAssembler};
use crate::compress::compress;
use crate::counter::ByteCounter;
use crate::params::{BLOCK_WORDS, Sha2Params};
use crate::word::Sha2Word;

/// Streaming SHA-2 state selected by a [`Sha2Params`] set.
#[derive(Clone)]
pub struct Sha2Engine<W: Sha2Word> {
    params: &'static Sha2Params<W>,
    // Hash state H(i)
    state: [W; 8],
    // Block under assembly / message schedule W[0..rounds]
    schedule: Schedule<W>,
    assembler: WordAssembler<W>,
    counter: W::Counter,
}

impl<W: Sha2Word> Sha2Engine<W> {
    /// Creates an engine initialized with the parameter set's H(0).
    pub fn new(params: &'static Sha2Params<W>) -> Self {
        Self {
            params,
            state: params.initial_state,
            schedule: Schedule::default(),
            assembler: WordAssembler::default(),
            counter: W::Counter::default(),
        }
    }

    /// Parameter set this engine runs.
    pub fn params(&self) -> &'static Sha2Params<W> {
        self.params
    }

    /// Feeds message bytes. Zero-length input is a no-op.
    pub fn absorb(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }

        self.counter.add(data.len());
        self.absorb_uncounted(data);
    }

    /// Runs bytes through word/block assembly without touching the length
    /// counter. Padding takes this path.
    fn absorb_uncounted(&mut self, data: &[u8]) {
        let Self {
            params,
            state,
            schedule,
            assembler,
            ..
        } = self;

        assembler.absorb(data, |word| {
            if schedule.push(word) {
                compress(state, schedule.words_mut(), params.round_constants);
                schedule.clear();
            }
        });
    }

    fn push_word(&mut self, word: W) {
        if self.schedule.push(word) {
            compress(
                &mut self.state,
                self.schedule.words_mut(),
                self.params.round_constants,
            );
            self.schedule.clear();
        }
    }

    /// Pads, compresses the final block(s) and writes the first
    /// `digest_len` bytes of the state to `out`, then resets.
    ///
    /// `out` must hold at least `digest_len` bytes.
    pub(crate) fn finish(&mut self, out: &mut [u8]) {
        // Length is taken before padding enters the assembler
        let (len_high, len_low) = self.counter.length_words();

        // 1 bit, then zeros up to a word boundary
        self.absorb_uncounted(&[0x80]);
        while self.assembler.pending_len() != 0 {
            self.absorb_uncounted(&[0x00]);
        }

        // Zero words until two slots remain for the length. A block with
        // only one free slot is compressed here and padding continues in a
        // fresh block.
        while self.schedule.filled() != BLOCK_WORDS - 2 {
            self.push_word(W::ZERO);
        }
        self.push_word(len_high);
        self.push_word(len_low);

        debug_assert_eq!(self.schedule.filled(), 0);

        let digest_len = self.params.digest_len;
        let mut bytes = W::Bytes::default();
        for (i, word) in self.state.iter_mut().enumerate() {
            let start = i * W::BYTES;
            if start >= digest_len {
                break;
            }
            let n = core::cmp::min(W::BYTES, digest_len - start);

            word.export_be(&mut bytes);
            out[start..start + n].copy_from_slice(&bytes.as_ref()[..n]);
        }
        bytes.zeroize();

        log::trace!("{}: digest finalized", self.params.name);

        self.reset();
    }

    /// Reloads H(0) and wipes schedule, partial word and counter.
    pub fn reset(&mut self) {
        self.schedule.clear();
        self.assembler.zeroize();
        self.counter.zeroize();
        self.state = self.params.initial_state;
    }

    /// Returns `true` if no message-derived scratch data is held: the
    /// schedule, partial-word buffer and counter are all zero.
    pub fn scratch_is_zeroized(&self) -> bool {
        self.schedule.is_zeroized() && self.assembler.is_zeroized() && self.counter.is_zero()
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &[W; 8] {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn schedule_filled(&self) -> usize {
        self.schedule.filled()
    }

    #[cfg(test)]
    pub(crate) fn pending_len(&self) -> usize {
        self.assembler.pending_len()
    }

    #[cfg(test)]
    pub(crate) fn counter_mut(&mut self) -> &mut W::Counter {
        &mut self.counter
    }
}

impl<W: Sha2Word> HashPrimitive for Sha2Engine<W> {
    fn algorithm_name(&self) -> &'static str {
        self.params.name
    }

    fn digest_size_bits(&self) -> usize {
        self.params.digest_len * 8
    }

    fn input_block_size_bytes(&self) -> usize {
        self.params.block_len()
    }

    fn reset(&mut self) {
        Sha2Engine::reset(self);
    }

    fn absorb(&mut self, data: &[u8]) {
        Sha2Engine::absorb(self, data);
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize, DigestError> {
        let required = self.params.digest_len;
        if out.len() < required {
            return Err(DigestError::OutputTooSmall {
                required,
                provided: out.len(),
            });
        }

        self.finish(out);
        Ok(required)
    }
}

impl<W: Sha2Word> Zeroize for Sha2Engine<W> {
    /// Wipes everything, including the hash state. The engine must be
    /// [`reset`](Sha2Engine::reset) before further use.
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.schedule.zeroize();
        self.assembler.zeroize();
        self.counter.zeroize();
    }
}

impl<W: Sha2Word> Drop for Sha2Engine<W> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<W: Sha2Word> ZeroizeOnDrop for Sha2Engine<W> {}
