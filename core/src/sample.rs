//! Derived samplers
//!
//! Everything here is built from [`Rng::next_u64`] raw draws: bit-width
//! extraction, debiased bounded integers (Lemire's nearly divisionless
//! method), uniform floats with full mantissa density, Marsaglia polar
//! normal pairs, inverse-transform exponentials, and permutations.
//!
//! None of these methods validate their arguments. Preconditions are
//! documented per method and enforced with `debug_assert!` only; the
//! release path is check-free.

use crate::gen::Rng;

const F64_MANTISSA_BITS: u32 = 53;
const F64_DENOM: f64 = (1u64 << F64_MANTISSA_BITS) as f64;
const F32_MANTISSA_BITS: u32 = 24;
const F32_DENOM: f32 = (1u32 << F32_MANTISSA_BITS) as f32;

impl Rng {
    /// Return the uppermost `bitcount` bits of one raw draw,
    /// right-aligned: a uniform value in `[0, 2^bitcount)`.
    ///
    /// Precondition: `1 <= bitcount <= 64`.
    #[inline]
    pub fn bits(&mut self, bitcount: u32) -> u64 {
        debug_assert!((1..=64).contains(&bitcount), "bitcount out of range");
        self.next_u64() >> (64 - bitcount)
    }

    /// Return a uniform value in `[0, bound)` with zero modulo bias,
    /// using Lemire's widening-multiply method.
    ///
    /// Precondition: `bound > 0`. Expected draws per call is below 2 for
    /// every bound and ~1 for bounds far from `2^63`.
    ///
    /// # Example
    /// ```
    /// use xoshiro_core_rs::Rng;
    ///
    /// let mut rng = Rng::new();
    /// let v = rng.bounded_u64(100);
    /// assert!(v < 100);
    /// ```
    #[inline]
    pub fn bounded_u64(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0, "bound must be positive");
        let mut wide = u128::from(self.next_u64()) * u128::from(bound);
        let mut low = wide as u64;
        if low < bound {
            // 2^64 mod bound, via the wraparound identity (-bound) mod bound
            let threshold = bound.wrapping_neg() % bound;
            while low < threshold {
                wide = u128::from(self.next_u64()) * u128::from(bound);
                low = wide as u64;
            }
        }
        (wide >> 64) as u64
    }

    /// Return a uniform value in `[0, bound)`.
    ///
    /// Precondition: `bound > 0`.
    #[inline]
    pub fn bounded_i64(&mut self, bound: i64) -> i64 {
        self.bounded_u64(bound as u64) as i64
    }

    /// Return a uniform value in `[lower, upper)`.
    ///
    /// Precondition: `lower < upper`.
    #[inline]
    pub fn range_i64(&mut self, lower: i64, upper: i64) -> i64 {
        self.bounded_i64(upper - lower) + lower
    }

    /// Return a uniform boolean.
    #[inline]
    pub fn next_bool(&mut self) -> bool {
        self.bits(1) == 1
    }

    /// Return a uniform `f64` in `[0.0, 1.0)`.
    ///
    /// Built as `bits(53) / 2^53`, so every representable value with
    /// 53-bit mantissa precision in range is reachable, and multiplying
    /// the result by `2^53` recovers the integer draw exactly. Do not
    /// cast the result to `f32`; rounding makes some 24-bit mantissa
    /// values unreachable. Use [`next_f32`](Rng::next_f32) instead.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.bits(F64_MANTISSA_BITS) as f64 / F64_DENOM
    }

    /// Return a uniform `f32` in `[0.0, 1.0)`, with the same full-density
    /// property as [`next_f64`](Rng::next_f64) for 24-bit mantissas.
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        self.bits(F32_MANTISSA_BITS) as f32 / F32_DENOM
    }

    /// Return two independent uniform `f32` values in `[0.0, 1.0)` from a
    /// single raw draw.
    ///
    /// One 48-bit extraction is split into two 24-bit mantissas, so this
    /// is semantically identical to two [`next_f32`](Rng::next_f32) calls
    /// at roughly half the generator cost.
    #[inline]
    pub fn next_f32_pair(&mut self) -> (f32, f32) {
        let raw = self.bits(2 * F32_MANTISSA_BITS);
        let low = (raw & ((1 << F32_MANTISSA_BITS) - 1)) as f32 / F32_DENOM;
        let high = (raw >> F32_MANTISSA_BITS) as f32 / F32_DENOM;
        (low, high)
    }

    /// Return two independent standard-normal variates (mean 0, stddev 1)
    /// via the Marsaglia polar method.
    ///
    /// Rejection sampling with acceptance rate ~π/4; the loop's iteration
    /// count is geometrically distributed with mean ~1.27.
    pub fn normal(&mut self) -> (f64, f64) {
        loop {
            let u = self.signed_unit_f64();
            let v = self.signed_unit_f64();
            let s = u * u + v * v;
            if s >= 1.0 || s == 0.0 {
                continue;
            }
            let scale = (-2.0 * s.ln() / s).sqrt();
            return (u * scale, v * scale);
        }
    }

    /// Return two independent normal variates with the given mean and
    /// standard deviation.
    ///
    /// # Arguments
    /// * `mean` - center of the distribution
    /// * `stddev` - standard deviation
    pub fn normal_dist(&mut self, mean: f64, stddev: f64) -> (f64, f64) {
        let (x, y) = self.normal();
        (x * stddev + mean, y * stddev + mean)
    }

    /// Uniform `f64` in the open interval `(-1.0, 1.0)`.
    ///
    /// A 54-bit draw shifted down by `2^53`; raw draws of zero are
    /// rejected so the lower endpoint stays open.
    #[inline]
    fn signed_unit_f64(&mut self) -> f64 {
        loop {
            let raw = self.bits(F64_MANTISSA_BITS + 1);
            if raw != 0 {
                return (raw as i64 - (1i64 << F64_MANTISSA_BITS)) as f64 / F64_DENOM;
            }
        }
    }

    /// Return an exponentially distributed `f64` with rate λ = 1, via
    /// inverse transform sampling. Adjust the rate with
    /// `exponential() / lambda`.
    ///
    /// The uniform input is `(bits(53) + 1) / 2^53`, uniform over
    /// `(0.0, 1.0]`, so the logarithm is always finite and the result
    /// never negative.
    #[inline]
    pub fn exponential(&mut self) -> f64 {
        let unit = (self.bits(F64_MANTISSA_BITS) + 1) as f64 / F64_DENOM;
        -unit.ln()
    }

    /// Return a uniformly random permutation of `[0, n)`, built in one
    /// forward pass with the inside-out Fisher-Yates variant.
    ///
    /// `n = 0` yields an empty vector.
    ///
    /// # Example
    /// ```
    /// use xoshiro_core_rs::Rng;
    ///
    /// let mut rng = Rng::new();
    /// let p = rng.perm(5);
    /// let mut sorted = p.clone();
    /// sorted.sort_unstable();
    /// assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn perm(&mut self, n: usize) -> Vec<usize> {
        let mut slots = vec![0usize; n];
        for i in 0..n {
            let j = self.bounded_u64((i + 1) as u64) as usize;
            slots[i] = slots[j];
            slots[j] = i;
        }
        slots
    }
}
