//! In-place Fisher-Yates shuffle
//!
//! A free function rather than an `Rng` method so it can be generic over
//! the element type while the handle's own API stays monomorphic.

use crate::gen::Rng;

/// Shuffle `slice` in place with a Fisher-Yates pass.
///
/// Slices of length 0 or 1 are left untouched. If `rng` is `None`, a
/// 512-bit generator is constructed for this call only and discarded
/// afterwards; pass `Some` when the shuffle must be reproducible or when
/// shuffling in a loop (a fresh handle per call costs an entropy read).
///
/// # Example
/// ```
/// use xoshiro_core_rs::{shuffle, Rng};
///
/// let mut rng = Rng::new();
/// rng.reseed(7);
///
/// let mut deck: Vec<u32> = (0..52).collect();
/// shuffle(Some(&mut rng), &mut deck);
///
/// let mut sorted = deck.clone();
/// sorted.sort_unstable();
/// assert_eq!(sorted, (0..52).collect::<Vec<u32>>());
/// ```
pub fn shuffle<T>(rng: Option<&mut Rng>, slice: &mut [T]) {
    if slice.len() <= 1 {
        return;
    }
    let mut local;
    let rng = match rng {
        Some(handle) => handle,
        None => {
            local = Rng::new_512();
            &mut local
        }
    };
    for i in (1..slice.len()).rev() {
        let j = rng.bounded_u64((i + 1) as u64) as usize;
        slice.swap(i, j);
    }
}
