//! # fretwork
//!
//! A music theory engine for guitar: chord tones, fretboard voicings, and
//! chord progressions, computed from a root note and a chord quality.
//!
//! ## Pipeline
//! 1. Root + quality resolve to chord tones (`chord`)
//! 2. Chord tones land on strings and frets, curated shapes first
//!    (`fretboard`)
//! 3. Independently, root + quality seed a key and a progression of further
//!    chords, each resolvable through steps 1-2 (`progression`)
//!
//! Everything is pure and reentrant; the only non-determinism is the
//! caller-supplied random source for progression-template choice.
//!
//! ## Example
//! ```rust
//! use fretwork::{chord_tones, place_chord, PitchClass};
//!
//! let tones = chord_tones(PitchClass::C, "major")?;
//! assert_eq!(tones.len(), 3);
//!
//! let positions = place_chord(PitchClass::C, "major")?;
//! assert_eq!(positions.len(), 6); // curated open-position shape
//! # Ok::<(), fretwork::TheoryError>(())
//! ```

pub mod chord;
pub mod error;
pub mod fretboard;
pub mod note;
pub mod progression;

pub use chord::{Chord, ChordQuality};
pub use error::TheoryError;
pub use fretboard::{ChordShape, Finger, Fret, FretPosition, Voicing};
pub use note::PitchClass;
pub use progression::{build_scale, classify_scale_type, ScaleType};

use rand::Rng;

/// Chord tones for a root note and a chord quality key, root first.
///
/// # Errors
/// Returns [`TheoryError::UnknownQuality`] if `quality` is not a recognized
/// key.
///
/// # Example
/// ```rust
/// use fretwork::{chord_tones, PitchClass};
///
/// let tones = chord_tones(PitchClass::A, "minor7")?;
/// assert_eq!(
///     tones,
///     vec![PitchClass::A, PitchClass::C, PitchClass::E, PitchClass::G]
/// );
/// # Ok::<(), fretwork::TheoryError>(())
/// ```
pub fn chord_tones(root: PitchClass, quality: &str) -> Result<Vec<PitchClass>, TheoryError> {
    let quality = ChordQuality::from_key(quality)?;
    Ok(Chord::new(root, quality).tones())
}

/// Fretboard positions for a root note and a chord quality key.
///
/// Curated shapes are returned verbatim (six entries, muted strings and
/// finger labels included); other chords get a generated lowest-fret
/// voicing.
///
/// # Errors
/// Returns [`TheoryError::UnknownQuality`] if `quality` is not a recognized
/// key.
pub fn place_chord(root: PitchClass, quality: &str) -> Result<Vec<FretPosition>, TheoryError> {
    let quality = ChordQuality::from_key(quality)?;
    Ok(fretboard::place_chord(Chord::new(root, quality)))
}

/// Suggest a chord progression starting from a root note and a chord
/// quality key.
///
/// Template choice draws from `rng`; pass a seeded generator to pin the
/// result, or `rand::thread_rng()` for variety.
///
/// # Errors
/// Returns [`TheoryError::UnknownQuality`] if `quality` is not a recognized
/// key.
pub fn suggest_progression<R: Rng + ?Sized>(
    root: PitchClass,
    quality: &str,
    rng: &mut R,
) -> Result<Vec<Chord>, TheoryError> {
    let quality = ChordQuality::from_key(quality)?;
    Ok(progression::suggest_progression(root, quality, rng))
}

/// Display string for a chord quality key.
///
/// Unknown keys fall back to the raw key itself; this function never fails.
///
/// # Example
/// ```rust
/// use fretwork::format_quality;
///
/// assert_eq!(format_quality("maj7"), "Major 7");
/// assert_eq!(format_quality("blues"), "blues");
/// ```
pub fn format_quality(key: &str) -> String {
    match ChordQuality::from_key(key) {
        Ok(quality) => quality.display_name().to_string(),
        Err(_) => key.to_string(),
    }
}
