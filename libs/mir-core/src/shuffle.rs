//! Display-time shuffling.

use rand::Rng;

/// Fisher-Yates shuffle over a copy of the slice.
///
/// Strictly a presentation-time transform: stored packages keep the
/// canonical order (correct alternative first), and grading and export
/// read that order, never a shuffled one. The random source is explicit
/// so callers can seed it deterministically.
pub fn shuffle_for_display<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}
