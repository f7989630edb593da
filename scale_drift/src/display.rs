// Note-name rendering for generated scales.
//
// Pitch class 0 is rooted at A — the reference point is arbitrary, the
// engine never interprets it. Two interchangeable spelling conventions are
// offered: sharps (A♯, C♯, ...) and flats (B♭, D♭, ...).

use crate::scale::Scale;
use serde::{Deserialize, Serialize};

/// Sharp spellings, indexed by pitch class from A.
pub const SHARP_NAMES: [&str; 12] = [
    "A", "A♯", "B", "C", "C♯", "D", "D♯", "E", "F", "F♯", "G", "G♯",
];

/// Flat spellings, indexed by pitch class from A.
pub const FLAT_NAMES: [&str; 12] = [
    "A", "B♭", "B", "C", "D♭", "D", "E♭", "E", "F", "G♭", "G", "A♭",
];

/// Which spelling convention to render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteStyle {
    Sharps,
    Flats,
}

impl NoteStyle {
    pub fn parse(name: &str) -> Option<NoteStyle> {
        match name.to_lowercase().as_str() {
            "sharps" | "sharp" => Some(NoteStyle::Sharps),
            "flats" | "flat" => Some(NoteStyle::Flats),
            _ => None,
        }
    }

    /// The name of a pitch class under this convention.
    pub fn name_of(self, pc: u8) -> &'static str {
        match self {
            NoteStyle::Sharps => SHARP_NAMES[(pc % 12) as usize],
            NoteStyle::Flats => FLAT_NAMES[(pc % 12) as usize],
        }
    }
}

/// Render a scale as space-separated note names, in its current cyclic
/// order.
pub fn render(scale: &Scale, style: NoteStyle) -> String {
    scale
        .pitch_classes()
        .iter()
        .map(|&pc| style.name_of(pc))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a_major_in_sharps() {
        let scale = Scale::from_raw(&[0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(render(&scale, NoteStyle::Sharps), "A B C♯ D E F♯ G♯");
    }

    #[test]
    fn test_flat_spelling() {
        let scale = Scale::from_raw(&[0, 1, 4, 5, 8, 9]);
        assert_eq!(render(&scale, NoteStyle::Flats), "A B♭ D♭ D F G♭");
    }

    #[test]
    fn test_render_follows_cyclic_order() {
        let mut rng = {
            use rand::SeedableRng;
            rand::rngs::StdRng::seed_from_u64(2)
        };
        let scale = Scale::from_raw(&[0, 2, 4]).with_random_root(&mut rng);
        let names: Vec<&str> = scale
            .pitch_classes()
            .iter()
            .map(|&pc| NoteStyle::Sharps.name_of(pc))
            .collect();
        assert_eq!(render(&scale, NoteStyle::Sharps), names.join(" "));
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!(NoteStyle::parse("sharps"), Some(NoteStyle::Sharps));
        assert_eq!(NoteStyle::parse("Flat"), Some(NoteStyle::Flats));
        assert_eq!(NoteStyle::parse("solfege"), None);
    }
}
