// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// "abcdbcde...nopq", 448 bits: the two-block SHA-1/SHA-256 test message
pub const MSG_448: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

/// "abcdefgh...nopqrstu", 896 bits: the two-block SHA-384/512 test message
pub const MSG_896: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

/// Test input, either literal or generated.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Literal bytes
    Bytes(&'static [u8]),
    /// `byte` repeated `count` times
    Repeated {
        /// Fill byte
        byte: u8,
        /// Number of bytes
        count: usize,
    },
}

impl Message {
    /// Materializes the input.
    pub fn to_vec(&self) -> Vec<u8> {
        match *self {
            Message::Bytes(bytes) => bytes.to_vec(),
            Message::Repeated { byte, count } => vec![byte; count],
        }
    }

    /// Input length in bytes.
    pub fn len(&self) -> usize {
        match *self {
            Message::Bytes(bytes) => bytes.len(),
            Message::Repeated { count, .. } => count,
        }
    }

    /// Returns `true` for empty input.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
