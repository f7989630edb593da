// Scale representation and normalization.
//
// A scale is a set of distinct pitch classes (integers 0-11, a note identity
// modulo one octave), but it is carried as an ordered sequence because the
// interval derivation walks the sequence cyclically. Internally the order is
// always some rotation of the ascending sort, so the cyclic gaps are all
// positive and sum to exactly 12 (one full octave traversal) — the invariant
// every validity rule in rules.rs is written against.
//
// `from_raw` is the set-promotion step: mutation operators work on widened
// `i16` copies and may leave values negative, ≥ 12, or colliding with an
// existing pitch class; reducing mod 12, sorting, and deduplicating here is
// what makes their output comparable. `with_random_root` is the display-time
// re-rooting: it changes the traversal start, never the underlying set.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of pitch classes in the octave.
pub const OCTAVE: i16 = 12;

/// A scale: distinct pitch classes in cyclic ascending order.
///
/// Two scales with the same pitch classes in the same cyclic order are
/// interchangeable; there is no identity beyond the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    pcs: Vec<u8>,
}

impl Scale {
    /// Build a scale from raw pitch values: reduce each modulo 12, sort
    /// ascending, and drop duplicate pitch classes.
    ///
    /// Tolerates operator intermediates that are negative or ≥ 12. Sorting
    /// here (rather than trusting the caller's order) guarantees the cyclic
    /// gaps of the result are positive and sum to 12, independent of what
    /// order a mutation operator left the sequence in.
    pub fn from_raw(raw: &[i16]) -> Scale {
        let mut pcs: Vec<u8> = raw.iter().map(|&p| p.rem_euclid(OCTAVE) as u8).collect();
        pcs.sort_unstable();
        pcs.dedup();
        Scale { pcs }
    }

    /// Re-root the scale: rotate so traversal starts at a uniformly random
    /// pivot. This changes only the display order, not the pitch-class set.
    ///
    /// Panics if the scale is empty.
    pub fn with_random_root(mut self, rng: &mut impl Rng) -> Scale {
        assert!(!self.pcs.is_empty(), "cannot re-root an empty scale");
        let pivot = rng.random_range(0..self.pcs.len());
        self.pcs.rotate_left(pivot);
        self
    }

    /// The cyclic half-step gaps between consecutive members, including the
    /// wrap-around gap from the last member back to the first.
    ///
    /// Output length equals the scale length. For any scale built through
    /// `from_raw` (with two or more members) every gap is in [1, 11] and the
    /// gaps sum to exactly 12.
    pub fn intervals(&self) -> Vec<u8> {
        let n = self.pcs.len();
        (0..n)
            .map(|i| {
                let a = self.pcs[i] as i16;
                let b = self.pcs[(i + 1) % n] as i16;
                (b - a).rem_euclid(OCTAVE) as u8
            })
            .collect()
    }

    /// A widened private copy for a mutation operator to edit in place.
    /// Operators never touch the `Scale` they were derived from.
    pub fn working_copy(&self) -> Vec<i16> {
        self.pcs.iter().map(|&p| p as i16).collect()
    }

    /// The pitch classes in the scale's current cyclic order.
    pub fn pitch_classes(&self) -> &[u8] {
        &self.pcs
    }

    pub fn len(&self) -> usize {
        self.pcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pcs.is_empty()
    }
}
