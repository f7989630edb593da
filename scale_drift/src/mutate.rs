// The four structural mutation operators.
//
// Each operator edits a widened working copy (`Vec<i16>`, from
// `Scale::working_copy`) in place at a given position. Position arithmetic
// wraps modulo the current length, and pitch values may temporarily leave
// [0, 12) — `Scale::from_raw` reduces and deduplicates afterwards, which can
// shrink the result below the operator's nominal cardinality when an edit
// lands on an already-present pitch class.
//
// Operators never validate their own output; the search controller in
// search.rs runs the rules over the promoted result.

use serde::{Deserialize, Serialize};

/// One of the four structural edits a search step can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mutation {
    /// Move the note at the position up one half-step.
    Raise,
    /// Move the note at the position down one half-step.
    Lower,
    /// Replace the note with two notes a whole step apart: the original
    /// moves down one half-step and a new note lands one half-step above
    /// its old pitch. Cardinality +1.
    Split,
    /// Collapse the note below the position into its neighbor, nudging the
    /// survivor up one half-step. Cardinality -1.
    Merge,
}

impl Mutation {
    pub const ALL: [Mutation; 4] = [
        Mutation::Raise,
        Mutation::Lower,
        Mutation::Split,
        Mutation::Merge,
    ];

    /// Apply the edit to `notes` at `position` (wrapped modulo the length).
    ///
    /// `notes` must be non-empty; it is the caller's private copy.
    pub fn apply(self, notes: &mut Vec<i16>, position: usize) {
        match self {
            Mutation::Raise => raise(notes, position),
            Mutation::Lower => lower(notes, position),
            Mutation::Split => split(notes, position),
            Mutation::Merge => merge(notes, position),
        }
    }
}

fn raise(notes: &mut [i16], position: usize) {
    let i = position % notes.len();
    notes[i] += 1;
}

fn lower(notes: &mut [i16], position: usize) {
    let i = position % notes.len();
    notes[i] -= 1;
}

fn split(notes: &mut Vec<i16>, position: usize) {
    let i = position % notes.len();
    notes.push(notes[i] + 1);
    lower(notes, i);
}

fn merge(notes: &mut Vec<i16>, position: usize) {
    let n = notes.len();
    if n < 2 {
        // Nothing to collapse; leave the single note alone.
        return;
    }
    notes.sort_unstable();
    notes.remove((position + n - 1) % n);
    let len = notes.len();
    raise(notes, (position + len - 1) % len);
}
