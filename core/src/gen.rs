//! Generator handle and seeding
//!
//! [`Rng`] owns exactly one bit-stream engine and is the only type end
//! users interact with. The engine variant is fixed at construction;
//! dispatch is a tagged enum over the three fixed-size state arrays, so
//! there is no heap allocation and no dynamic dispatch on the draw path.
//!
//! Seeding requests 8 bytes per state word from the OS entropy source
//! and maps them little-endian into the state. If the read fails, every
//! word is filled from a SplitMix64 mixer keyed by a process-unique
//! fallback seed; the failure is never surfaced to the caller.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::engines::{Xoroshiro128pp, Xoshiro256pp, Xoshiro512pp};
use crate::entropy::{EntropySource, OsEntropy};
use crate::splitmix::SplitMix64;

#[derive(Debug, Clone, Serialize, Deserialize)]
enum Engine {
    X128(Xoroshiro128pp),
    X256(Xoshiro256pp),
    X512(Xoshiro512pp),
}

/// Pseudo-random generator handle.
///
/// Not threadsafe. Each logical thread of control should construct and
/// own its own `Rng`; handles are cheap to create (a few dozen bytes of
/// state and one entropy read).
///
/// Serialization captures the full engine state, so a simulation can
/// checkpoint an `Rng` mid-run and resume the exact same draw stream.
///
/// # Example
/// ```
/// use xoshiro_core_rs::Rng;
///
/// let mut rng1 = Rng::new();
/// let mut rng2 = Rng::new();
/// rng1.reseed(12345);
/// rng2.reseed(12345);
///
/// // Same variant + same seed produce identical sequences
/// assert_eq!(rng1.next_u64(), rng2.next_u64());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rng {
    engine: Engine,
}

impl Rng {
    /// Create a generator backed by the recommended general-purpose
    /// engine. Equivalent in all ways to [`Rng::new_256`].
    pub fn new() -> Self {
        Self::new_256()
    }

    /// Create a generator backed by Xoroshiro128++ (2 state words).
    pub fn new_128() -> Self {
        Self::new_128_from(&mut OsEntropy)
    }

    /// Create a generator backed by Xoshiro256++ (4 state words).
    pub fn new_256() -> Self {
        Self::new_256_from(&mut OsEntropy)
    }

    /// Create a generator backed by Xoshiro512++ (8 state words).
    pub fn new_512() -> Self {
        Self::new_512_from(&mut OsEntropy)
    }

    /// Create a Xoroshiro128++ generator seeded from `entropy`.
    pub fn new_128_from(entropy: &mut dyn EntropySource) -> Self {
        let mut words = [0u64; 2];
        seed_state(&mut words, entropy);
        Self {
            engine: Engine::X128(Xoroshiro128pp::from_words(words)),
        }
    }

    /// Create a Xoshiro256++ generator seeded from `entropy`.
    pub fn new_256_from(entropy: &mut dyn EntropySource) -> Self {
        let mut words = [0u64; 4];
        seed_state(&mut words, entropy);
        Self {
            engine: Engine::X256(Xoshiro256pp::from_words(words)),
        }
    }

    /// Create a Xoshiro512++ generator seeded from `entropy`.
    pub fn new_512_from(entropy: &mut dyn EntropySource) -> Self {
        let mut words = [0u64; 8];
        seed_state(&mut words, entropy);
        Self {
            engine: Engine::X512(Xoshiro512pp::from_words(words)),
        }
    }

    /// Advance the engine and return the next raw 64-bit word.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        match &mut self.engine {
            Engine::X128(engine) => engine.next(),
            Engine::X256(engine) => engine.next(),
            Engine::X512(engine) => engine.next(),
        }
    }

    /// Manually reseed the generator, overwriting every state word with
    /// SplitMix64 output keyed by `seed`.
    ///
    /// This is the reproducibility contract: two handles of the same
    /// variant reseeded with equal values draw bit-identical sequences
    /// from then on. Unpredictability is only restored by constructing a
    /// fresh handle.
    ///
    /// # Arguments
    /// * `seed` - 64-bit seed value
    ///
    /// # Example
    /// ```
    /// use xoshiro_core_rs::Rng;
    ///
    /// let mut rng = Rng::new_512();
    /// rng.reseed(69420);
    /// let first = rng.next_u64();
    ///
    /// rng.reseed(69420);
    /// assert_eq!(rng.next_u64(), first);
    /// ```
    pub fn reseed(&mut self, seed: u64) {
        SplitMix64::new(seed).fill(self.words_mut());
    }

    fn words_mut(&mut self) -> &mut [u64] {
        match &mut self.engine {
            Engine::X128(engine) => engine.words_mut(),
            Engine::X256(engine) => engine.words_mut(),
            Engine::X512(engine) => engine.words_mut(),
        }
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}

/// Fill `state` from the entropy source, falling back to SplitMix64 if
/// the read fails. Never returns an error; an entropy failure only costs
/// the unpredictability of this one instance's stream.
fn seed_state(state: &mut [u64], entropy: &mut dyn EntropySource) {
    const BYTES_PER_WORD: usize = 8;
    let mut material = vec![0u8; state.len() * BYTES_PER_WORD];

    match entropy.fill(&mut material) {
        Ok(()) => {
            // Consecutive 8-byte groups map to consecutive state words.
            // Little-endian was chosen arbitrarily; only internal
            // consistency matters.
            for (i, word) in state.iter_mut().enumerate() {
                let mut group = [0u8; BYTES_PER_WORD];
                group.copy_from_slice(&material[i * BYTES_PER_WORD..(i + 1) * BYTES_PER_WORD]);
                *word = u64::from_le_bytes(group);
            }
        }
        Err(_) => {
            SplitMix64::new(fallback_seed(&material)).fill(state);
        }
    }
}

/// Derive a fallback seed from the wall clock and the seed buffer's
/// address. Neither input is enumerable by an observer, which is the
/// best available without the entropy source.
fn fallback_seed(material: &[u8]) -> u64 {
    let micros = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_micros() as u64)
        .unwrap_or(0);
    micros ^ material.as_ptr() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::EntropyError;

    /// Entropy source returning a fixed byte pattern.
    struct ScriptedEntropy;

    impl EntropySource for ScriptedEntropy {
        fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
            for (i, byte) in dest.iter_mut().enumerate() {
                *byte = i as u8;
            }
            Ok(())
        }
    }

    /// Entropy source that always fails, forcing the fallback path.
    struct FailingEntropy;

    impl EntropySource for FailingEntropy {
        fn fill(&mut self, _dest: &mut [u8]) -> Result<(), EntropyError> {
            Err(EntropyError::Os(getrandom::Error::UNSUPPORTED))
        }
    }

    #[test]
    fn test_seed_material_maps_little_endian() {
        let mut rng = Rng::new_128_from(&mut ScriptedEntropy);

        // Bytes 0x00..0x0f as two little-endian words
        let mut reference = Xoroshiro128pp::from_words([0x0706050403020100, 0x0f0e0d0c0b0a0908]);

        for _ in 0..10 {
            assert_eq!(rng.next_u64(), reference.next());
        }
    }

    #[test]
    fn test_entropy_failure_falls_back_silently() {
        let mut rng = Rng::new_256_from(&mut FailingEntropy);

        // Construction must succeed and the stream must still be usable
        let values: Vec<u64> = (0..100).map(|_| rng.next_u64()).collect();
        let unique = values.iter().collect::<std::collections::HashSet<_>>().len();
        assert!(
            unique > 90,
            "fallback-seeded stream not diverse: {} unique of 100",
            unique
        );
    }

    #[test]
    fn test_reseed_overwrites_fallback_state() {
        let mut failed = Rng::new_512_from(&mut FailingEntropy);
        let mut fresh = Rng::new_512();

        failed.reseed(777);
        fresh.reseed(777);

        for _ in 0..50 {
            assert_eq!(failed.next_u64(), fresh.next_u64());
        }
    }

    #[test]
    fn test_default_aliases_256() {
        // Both must be the 4-word variant: equal reseeds give equal streams
        let mut a = Rng::default();
        let mut b = Rng::new_256();
        a.reseed(1);
        b.reseed(1);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_variants_with_equal_seed_diverge() {
        let mut r128 = Rng::new_128();
        let mut r256 = Rng::new_256();
        let mut r512 = Rng::new_512();
        r128.reseed(42);
        r256.reseed(42);
        r512.reseed(42);

        let (a, b, c) = (r128.next_u64(), r256.next_u64(), r512.next_u64());
        assert!(a != b || b != c, "different engines should mix differently");
    }

    #[test]
    fn test_clone_forks_identical_stream() {
        let mut original = Rng::new();
        original.reseed(2024);
        original.next_u64();

        let mut fork = original.clone();
        for _ in 0..100 {
            assert_eq!(original.next_u64(), fork.next_u64());
        }
    }
}
