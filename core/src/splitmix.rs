//! SplitMix64 mixing function
//!
//! Expands a single 64-bit seed into an arbitrary number of well-mixed
//! words. Used to fill engine state on manual reseed and when the OS
//! entropy source fails. Never used for the draw stream itself.

/// Running-accumulator SplitMix64 mixer.
///
/// Produces one 64-bit word per call to [`next_u64`](SplitMix64::next_u64).
/// Two mixers created with the same seed produce identical word streams,
/// which is what makes manual reseeding reproducible.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the accumulator and return the next mixed word.
    #[inline]
    pub(crate) fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    /// Fill every word of `state`, one mixer output per word.
    pub(crate) fn fill(&mut self, state: &mut [u64]) {
        for word in state.iter_mut() {
            *word = self.next_u64();
        }
    }
}
