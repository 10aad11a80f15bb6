// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Property tests: the digest depends only on the concatenated input

use bulwark_digest::{
    HashPrimitive, Hmac, Sha1, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256,
};
use bulwark_digest_vectors::digest_in_chunks;
use proptest::prelude::*;

fn one_shot<H: HashPrimitive + Default>(data: &[u8]) -> Vec<u8> {
    let mut h = H::default();
    h.absorb(data);
    h.finalize()
}

fn chunked<H: HashPrimitive + Default>(data: &[u8], chunk_lens: &[usize]) -> Vec<u8> {
    digest_in_chunks(&mut H::default(), data, chunk_lens)
}

proptest! {
    #[test]
    fn sha1_chunk_invariant(
        data in proptest::collection::vec(any::<u8>(), 0..400),
        chunk_lens in proptest::collection::vec(0..150usize, 1..12)
    ) {
        prop_assert_eq!(chunked::<Sha1>(&data, &chunk_lens), one_shot::<Sha1>(&data));
    }

    #[test]
    fn sha224_chunk_invariant(
        data in proptest::collection::vec(any::<u8>(), 0..400),
        chunk_lens in proptest::collection::vec(0..150usize, 1..12)
    ) {
        prop_assert_eq!(chunked::<Sha224>(&data, &chunk_lens), one_shot::<Sha224>(&data));
    }

    #[test]
    fn sha256_chunk_invariant(
        data in proptest::collection::vec(any::<u8>(), 0..400),
        chunk_lens in proptest::collection::vec(0..150usize, 1..12)
    ) {
        prop_assert_eq!(chunked::<Sha256>(&data, &chunk_lens), one_shot::<Sha256>(&data));
    }

    #[test]
    fn sha384_chunk_invariant(
        data in proptest::collection::vec(any::<u8>(), 0..600),
        chunk_lens in proptest::collection::vec(0..300usize, 1..12)
    ) {
        prop_assert_eq!(chunked::<Sha384>(&data, &chunk_lens), one_shot::<Sha384>(&data));
    }

    #[test]
    fn sha512_chunk_invariant(
        data in proptest::collection::vec(any::<u8>(), 0..600),
        chunk_lens in proptest::collection::vec(0..300usize, 1..12)
    ) {
        prop_assert_eq!(chunked::<Sha512>(&data, &chunk_lens), one_shot::<Sha512>(&data));
    }

    #[test]
    fn sha512_t_chunk_invariant(
        data in proptest::collection::vec(any::<u8>(), 0..600),
        chunk_lens in proptest::collection::vec(0..300usize, 1..12)
    ) {
        prop_assert_eq!(
            chunked::<Sha512_224>(&data, &chunk_lens),
            one_shot::<Sha512_224>(&data)
        );
        prop_assert_eq!(
            chunked::<Sha512_256>(&data, &chunk_lens),
            one_shot::<Sha512_256>(&data)
        );
    }

    #[test]
    fn hmac_chunk_invariant(
        key in proptest::collection::vec(any::<u8>(), 0..200),
        data in proptest::collection::vec(any::<u8>(), 0..400),
        chunk_lens in proptest::collection::vec(0..150usize, 1..12)
    ) {
        let want = Hmac::<Sha256>::mac(&key, &data);
        let got = digest_in_chunks(&mut Hmac::<Sha256>::new(&key), &data, &chunk_lens);
        prop_assert_eq!(got, want);
    }

    #[test]
    fn clone_matches_prefix_plus_suffix(
        prefix in proptest::collection::vec(any::<u8>(), 0..300),
        suffix in proptest::collection::vec(any::<u8>(), 0..300)
    ) {
        let mut sha = Sha384::new();
        sha.absorb(&prefix);
        let mut fork = sha.clone();
        fork.absorb(&suffix);

        let mut whole = prefix.clone();
        whole.extend_from_slice(&suffix);

        prop_assert_eq!(fork.finalize(), one_shot::<Sha384>(&whole));
        prop_assert_eq!(sha.finalize(), one_shot::<Sha384>(&prefix));
    }
}
