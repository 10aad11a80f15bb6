// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::*;

// u32 tests
#[test]
fn test_u32_from_be() {
    let mut value: u32 = 0;
    let mut bytes = [0x01, 0x02, 0x03, 0x04];
    u32_from_be(&mut value, &mut bytes);
    assert_eq!(value, 0x01020304);
    assert_eq!(bytes, [0, 0, 0, 0]);
}

#[test]
fn test_u32_to_be() {
    let mut value: u32 = 0x01020304;
    let mut bytes = [0u8; 4];
    u32_to_be(&mut value, &mut bytes);
    assert_eq!(bytes, [0x01, 0x02, 0x03, 0x04]);
    assert_eq!(value, 0);
}

#[test]
fn test_load_u32_be_leaves_source_intact() {
    let src = [0xDE, 0xAD, 0xBE, 0xEF, 0xFF];
    assert_eq!(load_u32_be(&src), 0xDEADBEEF);
    assert_eq!(src, [0xDE, 0xAD, 0xBE, 0xEF, 0xFF]);
}

// u64 tests
#[test]
fn test_u64_from_be() {
    let mut value: u64 = 0;
    let mut bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
    u64_from_be(&mut value, &mut bytes);
    assert_eq!(value, 0x0102030405060708);
    assert_eq!(bytes, [0; 8]);
}

#[test]
fn test_u64_to_be() {
    let mut value: u64 = 0x0102030405060708;
    let mut bytes = [0u8; 8];
    u64_to_be(&mut value, &mut bytes);
    assert_eq!(bytes, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
    assert_eq!(value, 0);
}

#[test]
fn test_load_u64_be() {
    let src = [0x6a, 0x09, 0xe6, 0x67, 0xf3, 0xbc, 0xc9, 0x08];
    assert_eq!(load_u64_be(&src), 0x6a09e667f3bcc908);
}

#[test]
#[should_panic]
fn test_load_u64_be_short_input_panics() {
    let src = [0u8; 7];
    let _ = load_u64_be(&src);
}

// agreement with core
#[test]
fn test_matches_core_be_bytes() {
    for value in [0u32, 1, 0x8000_0000, 0xFFFF_FFFF, 0x1234_5678] {
        assert_eq!(load_u32_be(&value.to_be_bytes()), value);

        let mut v = value;
        let mut bytes = [0u8; 4];
        u32_to_be(&mut v, &mut bytes);
        assert_eq!(bytes, value.to_be_bytes());
    }

    for value in [0u64, 1, 0x8000_0000_0000_0000, u64::MAX, 0x0123_4567_89AB_CDEF] {
        assert_eq!(load_u64_be(&value.to_be_bytes()), value);

        let mut v = value;
        let mut bytes = [0u8; 8];
        u64_to_be(&mut v, &mut bytes);
        assert_eq!(bytes, value.to_be_bytes());
    }
}

// edge cases
#[test]
fn test_max_values() {
    let mut u32_val: u32 = u32::MAX;
    let mut u32_bytes = [0u8; 4];
    u32_to_be(&mut u32_val, &mut u32_bytes);
    assert_eq!(u32_bytes, [0xFF; 4]);
    assert_eq!(u32_val, 0);

    let mut u64_val: u64 = u64::MAX;
    let mut u64_bytes = [0u8; 8];
    u64_to_be(&mut u64_val, &mut u64_bytes);
    assert_eq!(u64_bytes, [0xFF; 8]);
    assert_eq!(u64_val, 0);
}

#[test]
fn test_from_be_overwrites_destination() {
    let mut value: u32 = 0xDEADBEEF;
    let mut bytes = [0x00, 0x00, 0x00, 0x01];
    u32_from_be(&mut value, &mut bytes);
    assert_eq!(value, 1);
}
