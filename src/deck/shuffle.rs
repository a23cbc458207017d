//! Fisher-Yates shuffling.

use crate::core::RandomSource;

/// Shuffle a slice in place.
///
/// Walks from the last index down, swapping each element with a uniformly
/// chosen element at or below it. Given a uniform source every
/// permutation is equally likely.
pub fn shuffle_in_place<T, R>(items: &mut [T], rng: &mut R)
where
    R: RandomSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i);
        items.swap(i, j);
    }
}

/// Return a shuffled copy, leaving the input untouched.
///
/// ```
/// use tarot_reader::core::ReadingRng;
/// use tarot_reader::deck::shuffle;
///
/// let mut rng = ReadingRng::new(42);
/// let mut deck = shuffle(&[1, 2, 3, 4, 5], &mut rng);
/// deck.sort();
/// assert_eq!(deck, vec![1, 2, 3, 4, 5]);
/// ```
#[must_use]
pub fn shuffle<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    let mut shuffled = items.to_vec();
    shuffle_in_place(&mut shuffled, rng);
    shuffled
}
