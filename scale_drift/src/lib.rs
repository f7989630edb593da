// Scale Drift
//
// Generates an endless sequence of musically valid scales by randomly
// mutating the current scale into a neighboring one. A scale is a set of
// distinct pitch classes in a 12-tone octave; each step applies one of four
// structural edits (raise, lower, split, merge) at a random position, keeps
// the first result that satisfies the interval rules, and re-roots it at a
// random pivot for display. When no neighbor passes the rules within the
// attempt budget, the walk restarts from a preset.
//
// Architecture:
// - scale.rs: pitch-class sequence representation, normalization (mod-12 +
//   dedup + random re-rooting), and cyclic interval derivation
// - rules.rs: the three validity rules over a scale's interval sequence
// - mutate.rs: the four structural mutation operators
// - bank.rs: preset bank of known-good scales (seed + search fallback),
//   with optional JSON loading
// - search.rs: bounded randomized search chaining the operators, with the
//   guaranteed preset fallback
// - display.rs: pitch-class-to-note-name rendering (sharp and flat spellings)
//
// The generator is deterministic given a seed: all randomness flows through
// an injected `rand::Rng` handle.

pub mod bank;
pub mod display;
pub mod mutate;
pub mod rules;
pub mod scale;
pub mod search;
