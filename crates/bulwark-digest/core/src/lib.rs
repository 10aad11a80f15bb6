// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core contract shared by every bulwark hash engine and by HMAC.
//!
//! Collaborators (HMAC, test-vector runners, benchmarks) only ever talk to an
//! engine through [`HashPrimitive`]: `reset`, `absorb`, `finalize` and a few
//! side-effect-free size queries.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod primitive;

pub use error::DigestError;
pub use primitive::{HashPrimitive, check_range};
