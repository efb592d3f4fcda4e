//! Xoshiro-family bit-stream engines
//!
//! Three interchangeable engines from the xoroshiro/xoshiro family
//! (Blackman & Vigna, <https://prng.di.unimi.it/>): Xoroshiro128++,
//! Xoshiro256++, and Xoshiro512++. Each advances its state array and
//! returns one 64-bit word per call, bit-exact against the reference
//! C implementations.
//!
//! State is written only by seeding (see `gen.rs`) and by the engine's
//! own transition function.

use serde::{Deserialize, Serialize};

/// Xoroshiro128++: 2 words of state, period 2^128 - 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Xoroshiro128pp {
    s: [u64; 2],
}

/// Xoshiro256++: 4 words of state, period 2^256 - 1. The recommended
/// general-purpose engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Xoshiro256pp {
    s: [u64; 4],
}

/// Xoshiro512++: 8 words of state, period 2^512 - 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Xoshiro512pp {
    s: [u64; 8],
}

impl Xoroshiro128pp {
    pub(crate) fn from_words(s: [u64; 2]) -> Self {
        Self { s }
    }

    pub(crate) fn words_mut(&mut self) -> &mut [u64] {
        &mut self.s
    }

    #[inline]
    pub(crate) fn next(&mut self) -> u64 {
        let s0 = self.s[0];
        let mut s1 = self.s[1];
        let result = s0.wrapping_add(s1).rotate_left(17).wrapping_add(s0);

        s1 ^= s0;
        self.s[0] = s0.rotate_left(49) ^ s1 ^ (s1 << 21);
        self.s[1] = s1.rotate_left(28);

        result
    }
}

impl Xoshiro256pp {
    pub(crate) fn from_words(s: [u64; 4]) -> Self {
        Self { s }
    }

    pub(crate) fn words_mut(&mut self) -> &mut [u64] {
        &mut self.s
    }

    #[inline]
    pub(crate) fn next(&mut self) -> u64 {
        let result = self.s[0]
            .wrapping_add(self.s[3])
            .rotate_left(23)
            .wrapping_add(self.s[0]);
        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }
}

impl Xoshiro512pp {
    pub(crate) fn from_words(s: [u64; 8]) -> Self {
        Self { s }
    }

    pub(crate) fn words_mut(&mut self) -> &mut [u64] {
        &mut self.s
    }

    #[inline]
    pub(crate) fn next(&mut self) -> u64 {
        let result = self.s[0]
            .wrapping_add(self.s[2])
            .rotate_left(17)
            .wrapping_add(self.s[2]);
        let t = self.s[1] << 11;

        self.s[2] ^= self.s[0];
        self.s[5] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[7] ^= self.s[3];
        self.s[3] ^= self.s[4];
        self.s[4] ^= self.s[5];
        self.s[0] ^= self.s[6];
        self.s[6] ^= self.s[7];

        self.s[6] ^= t;
        self.s[7] = self.s[7].rotate_left(21);

        result
    }
}
