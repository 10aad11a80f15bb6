// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use bulwark_digest_core::{DigestError, HashPrimitive};
use bulwark_digest_vectors::{Message, digest_in_chunks};

/// Records the length of every absorb call; the "digest" is the call count.
#[derive(Default)]
struct CallLog {
    calls: Vec<usize>,
}

impl HashPrimitive for CallLog {
    fn algorithm_name(&self) -> &'static str {
        "CALL-LOG"
    }

    fn digest_size_bits(&self) -> usize {
        8
    }

    fn input_block_size_bytes(&self) -> usize {
        1
    }

    fn reset(&mut self) {
        self.calls.clear();
    }

    fn absorb(&mut self, data: &[u8]) {
        self.calls.push(data.len());
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize, DigestError> {
        out[0] = self.calls.len() as u8;
        Ok(1)
    }
}

#[test]
fn test_chunk_lengths_cycle() {
    let mut log = CallLog::default();
    digest_in_chunks(&mut log, &[0u8; 10], &[3, 0, 2]);

    assert_eq!(log.calls, vec![3, 0, 2, 3, 0, 2]);
}

#[test]
fn test_all_zero_lengths_feed_once() {
    let mut log = CallLog::default();
    digest_in_chunks(&mut log, &[0u8; 10], &[0, 0]);

    assert_eq!(log.calls, vec![10]);
}

#[test]
fn test_no_lengths_feed_once() {
    let mut log = CallLog::default();
    digest_in_chunks(&mut log, &[0u8; 5], &[]);

    assert_eq!(log.calls, vec![5]);
}

#[test]
fn test_repeated_message() {
    let msg = Message::Repeated {
        byte: 0xaa,
        count: 131,
    };

    assert_eq!(msg.len(), 131);
    assert!(msg.to_vec().iter().all(|b| *b == 0xaa));
    assert!(Message::Bytes(b"").is_empty());
}
