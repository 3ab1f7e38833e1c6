// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Published known-answer vectors.
//!
//! References:
//! [1] FIPS 180-4: Secure Hash Standard (SHS)
//!     https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf
//! [2] NIST example values
//!     https://csrc.nist.gov/projects/cryptographic-standards-and-guidelines/example-values
//! [3] RFC 2202: Test Cases for HMAC-MD5 and HMAC-SHA-1
//! [4] RFC 4231: Identifiers and Test Vectors for HMAC-SHA-224, HMAC-SHA-256,
//!     HMAC-SHA-384, and HMAC-SHA-512
//! [5] RFC 4226: HOTP, Appendix D

/// Two-block-boundary message (448 bits: lands exactly on the SHA-256 padding boundary)
pub const MSG_448: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

/// 896-bit message (lands exactly on the SHA-512 padding boundary)
pub const MSG_896: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

/// A single hash known-answer test.
pub struct HashVector {
    /// Variant name (`"SHA-1"`, `"SHA-256"`, ...)
    pub variant: &'static str,
    /// Short description
    pub label: &'static str,
    /// Message pattern
    pub message: &'static [u8],
    /// How many times `message` is repeated
    pub repeat: usize,
    /// Expected digest (lowercase hex)
    pub digest: &'static str,
}

impl HashVector {
    /// Materialize the full message.
    pub fn message_bytes(&self) -> Vec<u8> {
        self.message.repeat(self.repeat)
    }
}

macro_rules! hash_vectors {
    ($variant:literal, $empty:literal, $abc:literal, $m448:literal, $m896:literal, $million:literal) => {
        [
            HashVector { variant: $variant, label: "empty", message: b"", repeat: 1, digest: $empty },
            HashVector { variant: $variant, label: "abc", message: b"abc", repeat: 1, digest: $abc },
            HashVector { variant: $variant, label: "448-bit", message: MSG_448, repeat: 1, digest: $m448 },
            HashVector { variant: $variant, label: "896-bit", message: MSG_896, repeat: 1, digest: $m896 },
            HashVector { variant: $variant, label: "million-a", message: b"a", repeat: 1_000_000, digest: $million },
        ]
    };
}

/// SHA-1 vectors [1][2]
pub const SHA1_VECTORS: [HashVector; 5] = hash_vectors!(
    "SHA-1",
    "da39a3ee5e6b4b0d3255bfef95601890afd80709",
    "a9993e364706816aba3e25717850c26c9cd0d89d",
    "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
    "a49b2446a02c645bf419f995b67091253a04a259",
    "34aa973cd4c4daa4f61eeb2bdbad27316534016f"
);

/// SHA-224 vectors [1][2]
pub const SHA224_VECTORS: [HashVector; 5] = hash_vectors!(
    "SHA-224",
    "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f",
    "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
    "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525",
    "c97ca9a559850ce97a04a96def6d99a9e0e0e2ab14e6b8df265fc0b3",
    "20794655980c91d8bbb4c1ea97618a4bf03f42581948b2ee4ee7ad67"
);

/// SHA-256 vectors [1][2]
pub const SHA256_VECTORS: [HashVector; 5] = hash_vectors!(
    "SHA-256",
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
);

/// SHA-384 vectors [1][2]
pub const SHA384_VECTORS: [HashVector; 5] = hash_vectors!(
    "SHA-384",
    "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b",
    "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7",
    "3391fdddfc8dc7393707a65b1b4709397cf8b1d162af05abfe8f450de5f36bc6b0455a8520bc4e6f5fe95b1fe3c8452b",
    "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712fcc7c71a557e2db966c3e9fa91746039",
    "9d0e1809716474cb086e834e310a4a1ced149e9c00f248527972cec5704c2a5b07b8b3dc38ecc4ebae97ddd87f3d8985"
);

/// SHA-512 vectors [1][2]
pub const SHA512_VECTORS: [HashVector; 5] = hash_vectors!(
    "SHA-512",
    "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
    "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
    "204a8fc6dda82f0a0ced7beb8e08a41657c16ef468b228a8279be331a703c33596fd15c13b1b07f9aa1d3bea57789ca031ad85c7a71dd70354ec631238ca3445",
    "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909",
    "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973ebde0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b"
);

/// All hash vectors, every variant.
pub fn all_hash_vectors() -> impl Iterator<Item = HashVector> {
    SHA1_VECTORS
        .into_iter()
        .chain(SHA224_VECTORS)
        .chain(SHA256_VECTORS)
        .chain(SHA384_VECTORS)
        .chain(SHA512_VECTORS)
}

/// A single HMAC known-answer test.
pub struct HmacVector {
    /// Variant name
    pub variant: &'static str,
    /// RFC and test case
    pub label: &'static str,
    /// Key
    pub key: &'static [u8],
    /// Message
    pub data: &'static [u8],
    /// Expected MAC (lowercase hex)
    pub mac: &'static str,
}

const KEY_0B_20: &[u8] = &[0x0b; 20];
const KEY_AA_20: &[u8] = &[0xaa; 20];
const KEY_AA_80: &[u8] = &[0xaa; 80];
const KEY_AA_131: &[u8] = &[0xaa; 131];
const DATA_DD_50: &[u8] = &[0xdd; 50];
const DATA_LARGE_KEY: &[u8] = b"Test Using Larger Than Block-Size Key - Hash Key First";
const DATA_LARGE_KEY_AND_DATA: &[u8] =
    b"Test Using Larger Than Block-Size Key and Larger Than One Block-Size Data";

/// RFC 2202 HMAC-SHA-1 vectors [3]
pub const HMAC_SHA1_VECTORS: [HmacVector; 5] = [
    HmacVector { variant: "SHA-1", label: "RFC 2202 #1", key: KEY_0B_20, data: b"Hi There", mac: "b617318655057264e28bc0b6fb378c8ef146be00" },
    HmacVector { variant: "SHA-1", label: "RFC 2202 #2", key: b"Jefe", data: b"what do ya want for nothing?", mac: "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79" },
    HmacVector { variant: "SHA-1", label: "RFC 2202 #3", key: KEY_AA_20, data: DATA_DD_50, mac: "125d7342b9ac11cd91a39af48aa17b4f63f175d3" },
    HmacVector { variant: "SHA-1", label: "RFC 2202 #6", key: KEY_AA_80, data: DATA_LARGE_KEY, mac: "aa4ae5e15272d00e95705637ce8a3b55ed402112" },
    HmacVector { variant: "SHA-1", label: "RFC 2202 #7", key: KEY_AA_80, data: DATA_LARGE_KEY_AND_DATA, mac: "e8e99d0f45237d786d6bbaa7965c7808bbff1a91" },
];

/// RFC 4231 HMAC-SHA-2 vectors (test cases 1, 2, 3 and 6) [4]
pub const HMAC_SHA2_VECTORS: [HmacVector; 16] = [
    HmacVector { variant: "SHA-224", label: "RFC 4231 #1", key: KEY_0B_20, data: b"Hi There", mac: "896fb1128abbdf196832107cd49df33f47b4b1169912ba4f53684b22" },
    HmacVector { variant: "SHA-256", label: "RFC 4231 #1", key: KEY_0B_20, data: b"Hi There", mac: "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7" },
    HmacVector { variant: "SHA-384", label: "RFC 4231 #1", key: KEY_0B_20, data: b"Hi There", mac: "afd03944d84895626b0825f4ab46907f15f9dadbe4101ec682aa034c7cebc59cfaea9ea9076ede7f4af152e8b2fa9cb6" },
    HmacVector { variant: "SHA-512", label: "RFC 4231 #1", key: KEY_0B_20, data: b"Hi There", mac: "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cdedaa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854" },
    HmacVector { variant: "SHA-224", label: "RFC 4231 #2", key: b"Jefe", data: b"what do ya want for nothing?", mac: "a30e01098bc6dbbf45690f3a7e9e6d0f8bbea2a39e6148008fd05e44" },
    HmacVector { variant: "SHA-256", label: "RFC 4231 #2", key: b"Jefe", data: b"what do ya want for nothing?", mac: "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843" },
    HmacVector { variant: "SHA-384", label: "RFC 4231 #2", key: b"Jefe", data: b"what do ya want for nothing?", mac: "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47e42ec3736322445e8e2240ca5e69e2c78b3239ecfab21649" },
    HmacVector { variant: "SHA-512", label: "RFC 4231 #2", key: b"Jefe", data: b"what do ya want for nothing?", mac: "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea2505549758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737" },
    HmacVector { variant: "SHA-224", label: "RFC 4231 #3", key: KEY_AA_20, data: DATA_DD_50, mac: "7fb3cb3588c6c1f6ffa9694d7d6ad2649365b0c1f65d69d1ec8333ea" },
    HmacVector { variant: "SHA-256", label: "RFC 4231 #3", key: KEY_AA_20, data: DATA_DD_50, mac: "773ea91e36800e46854db8ebd09181a72959098b3ef8c122d9635514ced565fe" },
    HmacVector { variant: "SHA-384", label: "RFC 4231 #3", key: KEY_AA_20, data: DATA_DD_50, mac: "88062608d3e6ad8a0aa2ace014c8a86f0aa635d947ac9febe83ef4e55966144b2a5ab39dc13814b94e3ab6e101a34f27" },
    HmacVector { variant: "SHA-512", label: "RFC 4231 #3", key: KEY_AA_20, data: DATA_DD_50, mac: "fa73b0089d56a284efb0f0756c890be9b1b5dbdd8ee81a3655f83e33b2279d39bf3e848279a722c806b485a47e67c807b946a337bee8942674278859e13292fb" },
    HmacVector { variant: "SHA-224", label: "RFC 4231 #6", key: KEY_AA_131, data: DATA_LARGE_KEY, mac: "95e9a0db962095adaebe9b2d6f0dbce2d499f112f2d2b7273fa6870e" },
    HmacVector { variant: "SHA-256", label: "RFC 4231 #6", key: KEY_AA_131, data: DATA_LARGE_KEY, mac: "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54" },
    HmacVector { variant: "SHA-384", label: "RFC 4231 #6", key: KEY_AA_131, data: DATA_LARGE_KEY, mac: "4ece084485813e9088d2c63a041bc5b44f9ef1012a2b588f3cd11f05033ac4c60c2ef6ab4030fe8296248df163f44952" },
    HmacVector { variant: "SHA-512", label: "RFC 4231 #6", key: KEY_AA_131, data: DATA_LARGE_KEY, mac: "80b24263c7c1a3ebb71493c1dd7be8b49b46d1f41b4aeec1121b013783f8f3526b56d037e05f2598bd0fd2215d6a1e5295e64f73f63f0aec8b915a985d786598" },
];

/// All HMAC vectors, every variant.
pub fn all_hmac_vectors() -> impl Iterator<Item = HmacVector> {
    HMAC_SHA1_VECTORS.into_iter().chain(HMAC_SHA2_VECTORS)
}

/// RFC 4226 HOTP secret (ASCII "12345678901234567890") [5]
pub const HOTP_SECRET_HEX: &str = "3132333435363738393031323334353637383930";

/// RFC 4226 Appendix D intermediate HMAC-SHA-1 for counter 0 [5]
pub const HOTP_COUNTER0_HMAC: &str = "cc93cf18508d94934c64b65d8ba7667fb7cde4b0";
