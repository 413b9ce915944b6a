//! Chord placement on the fretboard
//!
//! Resolves a chord to string/fret positions through a two-way strategy:
//! an exact curated shape when the library has one, otherwise a greedy
//! per-string scan for the lowest fret sounding a chord tone.

use crate::chord::Chord;
use crate::note::PitchClass;

use super::shapes;
use super::types::{ChordShape, Fret, FretPosition, FRET_COUNT, OPEN_STRINGS, STRING_COUNT};

/// Pitch class sounding at `fret` on a string whose open pitch is `open`.
///
/// # Example
/// ```
/// use fretwork::fretboard::note_at;
/// use fretwork::PitchClass;
///
/// // Third fret of the A string is a C.
/// assert_eq!(note_at(PitchClass::A, 3), PitchClass::C);
/// ```
pub fn note_at(open: PitchClass, fret: u8) -> PitchClass {
    open.transposed(fret)
}

/// How a chord was resolved to fretboard positions.
///
/// A curated shape takes absolute precedence over the scan and is returned
/// verbatim, muted strings and finger labels included. The generated scan is
/// deterministic and best-effort: it prioritizes low frets per string and
/// makes no attempt to cover every chord tone or avoid doubling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Voicing {
    /// Exact fingering from the curated shape library.
    Curated(&'static ChordShape),
    /// Greedy lowest-fret scan over each string.
    Generated(Vec<FretPosition>),
}

impl Voicing {
    /// Flatten to the position list handed to the presentation layer.
    pub fn positions(&self) -> Vec<FretPosition> {
        match self {
            Voicing::Curated(shape) => shape.positions.to_vec(),
            Voicing::Generated(positions) => positions.clone(),
        }
    }
}

/// Resolve a chord to a voicing: curated shape when available, generated
/// scan otherwise.
pub fn resolve_voicing(chord: Chord) -> Voicing {
    if let Some(shape) = shapes::shape_for(chord.root, chord.quality) {
        return Voicing::Curated(shape);
    }
    Voicing::Generated(scan_strings(&chord.tones()))
}

/// Place a chord on the fretboard.
///
/// Curated entries yield all six strings (muted ones included); generated
/// voicings omit any string with no chord tone in the first
/// [`FRET_COUNT`] frets.
///
/// # Example
/// ```
/// use fretwork::{Chord, ChordQuality, PitchClass};
/// use fretwork::fretboard::place_chord;
///
/// let positions = place_chord(Chord::new(PitchClass::E, ChordQuality::Major));
/// assert_eq!(positions.len(), 6);
/// ```
pub fn place_chord(chord: Chord) -> Vec<FretPosition> {
    resolve_voicing(chord).positions()
}

/// Greedy scan: for each string independently, the lowest fret sounding a
/// chord tone. Strings with no hit are left out, not muted.
fn scan_strings(tones: &[PitchClass]) -> Vec<FretPosition> {
    let mut positions = Vec::with_capacity(STRING_COUNT);
    for (string, &open) in OPEN_STRINGS.iter().enumerate() {
        if let Some(fret) = lowest_chord_tone_fret(open, tones) {
            positions.push(FretPosition {
                string: string as u8,
                fret: Fret::At(fret),
                finger: None,
            });
        }
    }
    positions
}

fn lowest_chord_tone_fret(open: PitchClass, tones: &[PitchClass]) -> Option<u8> {
    (0..FRET_COUNT).find(|&fret| tones.contains(&note_at(open, fret)))
}
