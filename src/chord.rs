//! # Chord Model
//!
//! Chord-quality interval formulas and chord-tone derivation.
//!
//! A chord quality is an ordered list of semitone offsets from a root. The
//! offsets are kept literal (a ninth is 14, not 2) and only reduced modulo
//! 12 when resolved to pitch classes, so the same formula can drive both
//! pitch-class derivation and scale-degree reasoning.
//!
//! ## Quality Keys
//! The engine is driven by string keys at the adapter boundary
//! (a `<select>` value, a CLI argument). [`ChordQuality::from_key`] is the
//! only fallible lookup in the whole engine; everything downstream works on
//! the [`ChordQuality`] enum.
//!
//! ## Related Modules
//! - `note` - the pitch-class arithmetic the formulas resolve through
//! - `fretboard` - places derived chord tones on strings and frets
//! - `progression` - assigns diatonic qualities to scale degrees

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TheoryError;
use crate::note::PitchClass;

/// Chord qualities recognized by the engine.
///
/// Each variant maps to a fixed interval formula via [`intervals`](Self::intervals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordQuality {
    Major,
    Minor,
    Dominant7,
    Major7,
    Minor7,
    Sus2,
    Sus4,
    Diminished,
    Augmented,
    Ninth,
    Add9,
}

impl ChordQuality {
    /// Every quality in table order.
    pub const ALL: [ChordQuality; 11] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Dominant7,
        ChordQuality::Major7,
        ChordQuality::Minor7,
        ChordQuality::Sus2,
        ChordQuality::Sus4,
        ChordQuality::Diminished,
        ChordQuality::Augmented,
        ChordQuality::Ninth,
        ChordQuality::Add9,
    ];

    /// Parse a chord quality key.
    ///
    /// Accepts the canonical keys (`"major"`, `"dominant7"`, `"add9"`, ...)
    /// plus the common short spellings used by chord symbols and the original
    /// selector values:
    /// - **Major**: `major`, `maj`, `M`
    /// - **Minor**: `minor`, `min`, `m`
    /// - **Dominant 7th**: `dominant7`, `7`
    /// - **Major 7th**: `major7`, `maj7`, `M7`
    /// - **Minor 7th**: `minor7`, `min7`, `m7`
    /// - **Sus**: `sus2`, `sus4`
    /// - **Diminished**: `diminished`, `dim`
    /// - **Augmented**: `augmented`, `aug`
    /// - **Ninth**: `ninth`, `9`
    /// - **Add 9**: `add9`
    ///
    /// # Errors
    /// Returns [`TheoryError::UnknownQuality`] for anything else. The key is
    /// never defaulted to a guessed quality.
    ///
    /// # Example
    /// ```
    /// use fretwork::ChordQuality;
    ///
    /// assert_eq!(ChordQuality::from_key("min7"), Ok(ChordQuality::Minor7));
    /// assert!(ChordQuality::from_key("blues").is_err());
    /// ```
    pub fn from_key(key: &str) -> Result<Self, TheoryError> {
        match key {
            "major" | "maj" | "M" => Ok(ChordQuality::Major),
            "minor" | "min" | "m" => Ok(ChordQuality::Minor),
            "dominant7" | "7" => Ok(ChordQuality::Dominant7),
            "major7" | "maj7" | "M7" => Ok(ChordQuality::Major7),
            "minor7" | "min7" | "m7" => Ok(ChordQuality::Minor7),
            "sus2" => Ok(ChordQuality::Sus2),
            "sus4" => Ok(ChordQuality::Sus4),
            "diminished" | "dim" => Ok(ChordQuality::Diminished),
            "augmented" | "aug" => Ok(ChordQuality::Augmented),
            "ninth" | "9" => Ok(ChordQuality::Ninth),
            "add9" => Ok(ChordQuality::Add9),
            _ => Err(TheoryError::UnknownQuality(key.to_string())),
        }
    }

    /// Canonical key for this quality.
    pub fn key(self) -> &'static str {
        match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
            ChordQuality::Dominant7 => "dominant7",
            ChordQuality::Major7 => "major7",
            ChordQuality::Minor7 => "minor7",
            ChordQuality::Sus2 => "sus2",
            ChordQuality::Sus4 => "sus4",
            ChordQuality::Diminished => "diminished",
            ChordQuality::Augmented => "augmented",
            ChordQuality::Ninth => "ninth",
            ChordQuality::Add9 => "add9",
        }
    }

    /// Ordered semitone offsets from the root.
    ///
    /// Every formula starts with 0, so the root is always the first chord
    /// tone. Compound intervals stay literal (the 9th is 14).
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Dominant7 => &[0, 4, 7, 10],
            ChordQuality::Major7 => &[0, 4, 7, 11],
            ChordQuality::Minor7 => &[0, 3, 7, 10],
            ChordQuality::Sus2 => &[0, 2, 7],
            ChordQuality::Sus4 => &[0, 5, 7],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Augmented => &[0, 4, 8],
            ChordQuality::Ninth => &[0, 4, 7, 10, 14],
            ChordQuality::Add9 => &[0, 4, 7, 14],
        }
    }

    /// Human-readable name for chord titles and progression labels.
    pub fn display_name(self) -> &'static str {
        match self {
            ChordQuality::Major => "Major",
            ChordQuality::Minor => "Minor",
            ChordQuality::Dominant7 => "7",
            ChordQuality::Major7 => "Major 7",
            ChordQuality::Minor7 => "Minor 7",
            ChordQuality::Sus2 => "Sus2",
            ChordQuality::Sus4 => "Sus4",
            ChordQuality::Diminished => "Diminished",
            ChordQuality::Augmented => "Augmented",
            ChordQuality::Ninth => "9",
            ChordQuality::Add9 => "Add9",
        }
    }
}

/// A chord: a root pitch class plus a quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chord {
    pub root: PitchClass,
    pub quality: ChordQuality,
}

impl Chord {
    pub fn new(root: PitchClass, quality: ChordQuality) -> Self {
        Self { root, quality }
    }

    /// Chord tones in formula order, root first.
    ///
    /// Duplicates are impossible: every formula's offsets are distinct
    /// modulo 12.
    ///
    /// # Example
    /// ```
    /// use fretwork::{Chord, ChordQuality, PitchClass};
    ///
    /// let chord = Chord::new(PitchClass::C, ChordQuality::Major);
    /// assert_eq!(
    ///     chord.tones(),
    ///     vec![PitchClass::C, PitchClass::E, PitchClass::G]
    /// );
    /// ```
    pub fn tones(&self) -> Vec<PitchClass> {
        self.quality
            .intervals()
            .iter()
            .map(|&offset| self.root.transposed(offset))
            .collect()
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.root, self.quality.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_canonical_round_trip() {
        for &quality in &ChordQuality::ALL {
            assert_eq!(ChordQuality::from_key(quality.key()), Ok(quality));
        }
    }

    #[test]
    fn test_from_key_aliases() {
        assert_eq!(ChordQuality::from_key("7"), Ok(ChordQuality::Dominant7));
        assert_eq!(ChordQuality::from_key("maj7"), Ok(ChordQuality::Major7));
        assert_eq!(ChordQuality::from_key("dim"), Ok(ChordQuality::Diminished));
        assert_eq!(ChordQuality::from_key("aug"), Ok(ChordQuality::Augmented));
        assert_eq!(ChordQuality::from_key("9"), Ok(ChordQuality::Ninth));
    }

    #[test]
    fn test_from_key_unknown() {
        assert_eq!(
            ChordQuality::from_key("blues"),
            Err(TheoryError::UnknownQuality("blues".to_string()))
        );
    }

    #[test]
    fn test_formulas_start_at_root() {
        for &quality in &ChordQuality::ALL {
            assert_eq!(quality.intervals()[0], 0, "{:?}", quality);
        }
    }

    #[test]
    fn test_formulas_distinct_mod_12() {
        for &quality in &ChordQuality::ALL {
            let mut classes: Vec<u8> =
                quality.intervals().iter().map(|&offset| offset % 12).collect();
            classes.sort_unstable();
            classes.dedup();
            assert_eq!(classes.len(), quality.intervals().len(), "{:?}", quality);
        }
    }

    #[test]
    fn test_c_major_tones() {
        let chord = Chord::new(PitchClass::C, ChordQuality::Major);
        assert_eq!(
            chord.tones(),
            vec![PitchClass::C, PitchClass::E, PitchClass::G]
        );
    }

    #[test]
    fn test_a_minor7_tones() {
        let chord = Chord::new(PitchClass::A, ChordQuality::Minor7);
        assert_eq!(
            chord.tones(),
            vec![PitchClass::A, PitchClass::C, PitchClass::E, PitchClass::G]
        );
    }

    #[test]
    fn test_ninth_wraps_compound_interval() {
        // The 14-semitone ninth resolves two semitones above the root.
        let chord = Chord::new(PitchClass::C, ChordQuality::Add9);
        assert_eq!(
            chord.tones(),
            vec![PitchClass::C, PitchClass::E, PitchClass::G, PitchClass::D]
        );
    }

    #[test]
    fn test_display() {
        let chord = Chord::new(PitchClass::FSharp, ChordQuality::Minor7);
        assert_eq!(chord.to_string(), "F# Minor 7");
    }
}
