// Preset bank: known-good scales used as seeds and as the search fallback.
//
// The builtin bank is the fixed table the walk starts from and falls back to
// when no valid mutation is found within the attempt budget. Every entry
// must pass the validity rules; a bank that is empty or carries an invalid
// entry is a configuration defect and is rejected at construction, never
// mid-search. Entries are handed out as clones — the bank itself is never
// mutated after construction.
//
// A replacement bank can be loaded from a JSON file (an array of
// pitch-class arrays) through the same validating constructor.

use crate::rules;
use crate::scale::Scale;
use rand::Rng;
use std::path::Path;

/// An immutable table of pre-validated scales.
#[derive(Debug, Clone)]
pub struct PresetBank {
    scales: Vec<Scale>,
}

impl PresetBank {
    /// The eight builtin seed scales: diatonic major (twice, as in the
    /// reference table), the augmented scale, the octatonic scale, the
    /// whole-tone scale, and three harmonic/melodic-minor-family patterns.
    pub fn builtin() -> PresetBank {
        let entries: &[&[u8]] = &[
            &[0, 2, 4, 5, 7, 9, 11],
            &[0, 1, 4, 5, 8, 9],
            &[0, 1, 3, 4, 6, 7, 9, 10],
            &[0, 2, 4, 6, 8, 10],
            &[0, 2, 3, 5, 7, 8, 11],
            &[0, 2, 4, 5, 7, 8, 11],
            &[0, 2, 4, 6, 7, 9, 10],
            &[0, 2, 4, 5, 7, 9, 11],
        ];
        PresetBank {
            scales: entries
                .iter()
                .map(|pcs| {
                    let raw: Vec<i16> = pcs.iter().map(|&p| p as i16).collect();
                    Scale::from_raw(&raw)
                })
                .collect(),
        }
    }

    /// Build a bank from raw entries, normalizing each and rejecting an
    /// empty bank or any entry that fails the validity rules.
    pub fn from_entries(entries: Vec<Vec<u8>>) -> Result<PresetBank, Box<dyn std::error::Error>> {
        if entries.is_empty() {
            return Err("preset bank is empty".into());
        }
        let mut scales = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let raw: Vec<i16> = entry.iter().map(|&p| p as i16).collect();
            let scale = Scale::from_raw(&raw);
            // The rules are vacuously satisfied below two notes, but such a
            // scale has no octave-spanning interval cycle and the search
            // requires non-empty input; reject it here rather than mid-walk.
            if scale.len() < 2 {
                return Err(format!(
                    "preset {} ({:?}) has fewer than two pitch classes",
                    i, entry
                )
                .into());
            }
            if !rules::is_valid(&scale) {
                return Err(format!("preset {} ({:?}) fails the validity rules", i, entry).into());
            }
            scales.push(scale);
        }
        Ok(PresetBank { scales })
    }

    /// Load a bank from a JSON file holding an array of pitch-class arrays,
    /// e.g. `[[0,2,4,5,7,9,11],[0,2,4,6,8,10]]`.
    pub fn load(path: &Path) -> Result<PresetBank, Box<dyn std::error::Error>> {
        let data = std::fs::read_to_string(path)?;
        let entries: Vec<Vec<u8>> = serde_json::from_str(&data)?;
        PresetBank::from_entries(entries)
    }

    /// A uniformly random preset, cloned so the caller may mutate it freely.
    pub fn random(&self, rng: &mut impl Rng) -> Scale {
        self.scales[rng.random_range(0..self.scales.len())].clone()
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}
