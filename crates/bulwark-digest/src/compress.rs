// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-2 block compression per FIPS 180-4 Sections 6.2.2 and 6.4.2.
//!
//! One generic body serves both word widths; only the mixing functions of
//! [`Sha2Word`] and the round-constant table change.

use zeroize::Zeroize;

use crate::params::BLOCK_WORDS;
use crate::word::Sha2Word;

/// Longest expanded schedule of any supported algorithm (SHA-1, SHA-384/512).
pub const MAX_SCHEDULE_WORDS: usize = 80;

/// Compresses one block into `state`.
///
/// `schedule[..16]` holds the block's message words on entry. The remaining
/// `round_constants.len() - 16` words are expanded in place; the caller owns
/// wiping the schedule afterwards.
///
/// # Panics
///
/// Panics if `schedule` is shorter than `round_constants`.
pub fn compress<W: Sha2Word>(state: &mut [W; 8], schedule: &mut [W], round_constants: &[W]) {
    let rounds = round_constants.len();
    let w = &mut schedule[..rounds];

    // Step 1: W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
    for t in BLOCK_WORDS..rounds {
        w[t] = w[t - 2]
            .small_sigma1()
            .add_mod(w[t - 7])
            .add_mod(w[t - 15].small_sigma0())
            .add_mod(w[t - 16]);
    }

    // Step 2: working variables a..h from H(i-1)
    let mut wv = *state;

    // Step 3: rounds
    for (k, wt) in round_constants.iter().zip(w.iter()) {
        let [a, b, c, d, e, f, g, h] = wv;

        // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
        let t1 = h
            .add_mod(e.big_sigma1())
            .add_mod(W::ch(e, f, g))
            .add_mod(*k)
            .add_mod(*wt);

        // T2 = Σ0(a) + Maj(a,b,c)
        let t2 = a.big_sigma0().add_mod(W::maj(a, b, c));

        wv = [t1.add_mod(t2), a, b, c, d.add_mod(t1), e, f, g];
    }

    // Step 4: H(i) = H(i-1) + working variables
    for (h, v) in state.iter_mut().zip(wv.iter()) {
        *h = h.add_mod(*v);
    }

    wv.zeroize();
}

/// Compresses a raw block of `16 * W::BYTES` big-endian bytes into `state`.
///
/// Uses a local schedule that is wiped before returning.
///
/// # Panics
///
/// Panics if `block` is shorter than one block.
pub fn compress_block<W: Sha2Word>(state: &mut [W; 8], block: &[u8], round_constants: &[W]) {
    let mut schedule = [W::ZERO; MAX_SCHEDULE_WORDS];

    for (word, chunk) in schedule
        .iter_mut()
        .zip(block[..BLOCK_WORDS * W::BYTES].chunks_exact(W::BYTES))
    {
        *word = W::load_be(chunk);
    }

    compress(state, &mut schedule, round_constants);
    schedule.zeroize();
}
