//! Xoshiro Core - deterministic random generation engine
//!
//! Fast, non-cryptographic pseudo-random generation with reproducible
//! streams when manually seeded.
//!
//! # Architecture
//!
//! - **engines**: Xoroshiro128++ / Xoshiro256++ / Xoshiro512++ bit-stream engines
//! - **gen**: the [`Rng`] handle owning one engine (construction, seeding, reseed)
//! - **sample**: derived samplers (bounded ints, floats, normal, exponential, perm)
//! - **shuffle**: generic in-place Fisher-Yates shuffle
//! - **entropy**: OS entropy acquisition with deterministic SplitMix64 fallback
//!
//! # Critical Invariants
//!
//! 1. Manual reseeding is deterministic: same variant + same seed → same stream
//! 2. Engine transitions are bit-exact against the published reference outputs
//! 3. One `Rng` per logical thread of control; handles are cheap to construct
//!
//! # Example
//! ```
//! use xoshiro_core_rs::Rng;
//!
//! let mut rng = Rng::new();
//! rng.reseed(42);
//!
//! let die = rng.bounded_u64(6) + 1;
//! assert!((1..=6).contains(&die));
//!
//! let probability = rng.next_f64();
//! assert!(probability >= 0.0 && probability < 1.0);
//! ```

// Module declarations
pub mod entropy;

mod engines;
mod gen;
mod sample;
mod shuffle;
mod splitmix;

// Re-exports for convenience
pub use entropy::{EntropyError, EntropySource, OsEntropy};
pub use gen::Rng;
pub use shuffle::shuffle;
