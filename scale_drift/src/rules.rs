// Validity rules for generated scales.
//
// A candidate scale is accepted iff all three rules over its cyclic interval
// sequence hold:
// 1. no gap wider than a minor third (3 half-steps);
// 2. every gap of exactly 3 is flanked on both cyclic sides by half-step
//    gaps (an augmented second is only allowed between two minor seconds,
//    as in the harmonic minor scale);
// 3. no two cyclically consecutive half-step gaps.
//
// The rules are checked in that order and short-circuit: a wide leap makes
// the other two moot. Everything here is a pure function of the interval
// sequence, so the verdict is identical for every rotation of a scale.

use crate::scale::Scale;

/// Widest allowed gap between cyclically adjacent scale members, in
/// half-steps.
pub const MAX_GAP: u8 = 3;

/// Check a scale against all three interval rules.
pub fn is_valid(scale: &Scale) -> bool {
    let gaps = scale.intervals();
    no_wide_leaps(&gaps) && augmented_seconds_flanked(&gaps) && no_adjacent_half_steps(&gaps)
}

/// Rule 1: every gap is at most `MAX_GAP` half-steps.
fn no_wide_leaps(gaps: &[u8]) -> bool {
    gaps.iter().all(|&g| g <= MAX_GAP)
}

/// Rule 2: a gap of exactly 3 half-steps must have both cyclic neighbors
/// equal to 1.
fn augmented_seconds_flanked(gaps: &[u8]) -> bool {
    let n = gaps.len();
    (0..n).all(|i| gaps[i] != 3 || (gaps[(i + n - 1) % n] == 1 && gaps[(i + 1) % n] == 1))
}

/// Rule 3: no two cyclically consecutive gaps of 1 half-step.
fn no_adjacent_half_steps(gaps: &[u8]) -> bool {
    let n = gaps.len();
    (0..n).all(|i| !(gaps[(i + n - 1) % n] == 1 && gaps[i] == 1))
}
