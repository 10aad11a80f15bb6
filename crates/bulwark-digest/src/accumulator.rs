// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word and block assembly shared by every engine.
//!
//! [`WordAssembler`] turns arbitrarily chunked input into whole big-endian
//! words, carrying at most `W::BYTES - 1` bytes between calls.
//! [`Schedule`] collects those words into a block and doubles as the
//! message-schedule scratch buffer the compressor expands in place.

use zeroize::Zeroize;

use bulwark_util::is_slice_zeroized;

use crate::compress::MAX_SCHEDULE_WORDS;
use crate::params::BLOCK_WORDS;
use crate::word::Word;

/// Partial-word buffer.
///
/// Invariant: `pending_len < W::BYTES` between calls.
#[derive(Clone, Default)]
pub(crate) struct WordAssembler<W: Word> {
    pending: W::Bytes,
    pending_len: usize,
}

impl<W: Word> WordAssembler<W> {
    /// Splits `data` into words and hands each completed word to `emit`.
    ///
    /// A pending partial word is completed first. Whole words are then read
    /// straight from `data`; only the trailing remainder is copied into the
    /// buffer.
    #[inline]
    pub fn absorb(&mut self, mut data: &[u8], mut emit: impl FnMut(W)) {
        if self.pending_len > 0 {
            let take = core::cmp::min(W::BYTES - self.pending_len, data.len());
            self.pending.as_mut()[self.pending_len..self.pending_len + take]
                .copy_from_slice(&data[..take]);
            self.pending_len += take;
            data = &data[take..];

            if self.pending_len < W::BYTES {
                return;
            }

            // take_be wipes the buffer
            self.pending_len = 0;
            emit(W::take_be(&mut self.pending));
        }

        let mut words = data.chunks_exact(W::BYTES);
        for chunk in &mut words {
            emit(W::load_be(chunk));
        }

        let rest = words.remainder();
        self.pending.as_mut()[..rest.len()].copy_from_slice(rest);
        self.pending_len = rest.len();
    }

    /// Number of buffered bytes.
    pub fn pending_len(&self) -> usize {
        self.pending_len
    }

    pub fn is_zeroized(&self) -> bool {
        self.pending_len == 0 && is_slice_zeroized(self.pending.as_ref())
    }
}

impl<W: Word> Zeroize for WordAssembler<W> {
    fn zeroize(&mut self) {
        self.pending.zeroize();
        self.pending_len.zeroize();
    }
}

/// Block under assembly, expanded in place into the message schedule.
#[derive(Clone)]
pub(crate) struct Schedule<W: Word> {
    words: [W; MAX_SCHEDULE_WORDS],
    filled: usize,
}

impl<W: Word> Default for Schedule<W> {
    fn default() -> Self {
        Self {
            words: [W::ZERO; MAX_SCHEDULE_WORDS],
            filled: 0,
        }
    }
}

impl<W: Word> Schedule<W> {
    /// Appends a message word. Returns `true` once the block is complete.
    #[inline(always)]
    pub fn push(&mut self, word: W) -> bool {
        self.words[self.filled] = word;
        self.filled += 1;
        self.filled == BLOCK_WORDS
    }

    /// Message words already in the current block.
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// Scratch buffer for the compressor.
    #[inline(always)]
    pub fn words_mut(&mut self) -> &mut [W; MAX_SCHEDULE_WORDS] {
        &mut self.words
    }

    /// Wipes the whole scratch buffer and starts a new block.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.words.zeroize();
        self.filled = 0;
    }

    pub fn is_zeroized(&self) -> bool {
        self.filled == 0 && is_slice_zeroized(&self.words)
    }
}

impl<W: Word> Zeroize for Schedule<W> {
    fn zeroize(&mut self) {
        self.clear();
    }
}
