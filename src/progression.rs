//! # Progression Model
//!
//! Scale construction, diatonic degree qualities, and chord-progression
//! suggestion.
//!
//! A progression template is an ordered list of scale-degree indices (0-6).
//! Suggesting a progression classifies the starting chord into a scale
//! family, draws one template uniformly at random from that family's fixed
//! set, and realizes each degree as a chord: root from the scale, quality
//! from the degree-quality table.
//!
//! ## Randomness
//! Template choice is the only non-deterministic operation in the engine and
//! it is deliberate - two calls with identical inputs may suggest different
//! progressions. The random source is a caller-supplied [`Rng`], so tests
//! pin it with a seeded `StdRng` and interactive callers pass
//! `rand::thread_rng()`.

use rand::Rng;
use serde::Serialize;

use crate::chord::{Chord, ChordQuality};
use crate::note::PitchClass;

/// Scale families used for progression building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    Major,
    Minor,
}

impl ScaleType {
    /// Semitone offsets of the seven scale degrees from the root.
    pub fn intervals(self) -> [u8; 7] {
        match self {
            ScaleType::Major => [0, 2, 4, 5, 7, 9, 11],
            ScaleType::Minor => [0, 2, 3, 5, 7, 8, 10],
        }
    }

    /// Diatonic chord quality of each scale degree.
    pub fn degree_qualities(self) -> [ChordQuality; 7] {
        match self {
            // maj, min, min, maj, maj, min, dim
            ScaleType::Major => [
                ChordQuality::Major,
                ChordQuality::Minor,
                ChordQuality::Minor,
                ChordQuality::Major,
                ChordQuality::Major,
                ChordQuality::Minor,
                ChordQuality::Diminished,
            ],
            // min, dim, maj, min, min, maj, maj
            ScaleType::Minor => [
                ChordQuality::Minor,
                ChordQuality::Diminished,
                ChordQuality::Major,
                ChordQuality::Minor,
                ChordQuality::Minor,
                ChordQuality::Major,
                ChordQuality::Major,
            ],
        }
    }

    /// Progression templates as scale-degree indices. A template may revisit
    /// a degree; order and repetition are both meaningful.
    pub fn templates(self) -> &'static [&'static [usize]] {
        match self {
            ScaleType::Major => &[
                &[0, 3, 4],    // I, IV, V
                &[0, 5, 3, 4], // I, vi, IV, V
                &[0, 4, 5, 3], // I, V, vi, IV
                &[1, 4, 0],    // ii, V, I
                &[0, 3, 1, 4], // I, IV, ii, V
            ],
            ScaleType::Minor => &[
                &[0, 3, 4],    // i, iv, v
                &[0, 5, 2, 6], // i, VI, III, VII
                &[0, 3, 6, 2], // i, iv, VII, III
                &[0, 6, 5, 6], // i, VII, VI, VII
                &[0, 4, 5, 4], // i, v, VI, v
            ],
        }
    }
}

/// The seven pitch classes of a scale rooted at `root`.
///
/// # Example
/// ```
/// use fretwork::{build_scale, PitchClass, ScaleType};
///
/// let c_major = build_scale(PitchClass::C, ScaleType::Major);
/// assert_eq!(c_major[4], PitchClass::G);
/// ```
pub fn build_scale(root: PitchClass, scale_type: ScaleType) -> [PitchClass; 7] {
    scale_type.intervals().map(|offset| root.transposed(offset))
}

/// Scale family for a chord quality.
///
/// Minor and minor-seventh chords get minor-family progressions; every other
/// quality is treated as major-family. This is a coarse classification, not
/// a full harmonic analysis: diminished, augmented, and sus chords all land
/// in the major family.
pub fn classify_scale_type(quality: ChordQuality) -> ScaleType {
    match quality {
        ChordQuality::Minor | ChordQuality::Minor7 => ScaleType::Minor,
        _ => ScaleType::Major,
    }
}

/// Realize a progression template in a key.
///
/// For each degree index in template order: chord root is that degree of the
/// scale rooted at `root`, chord quality comes from the degree-quality
/// table. Deterministic; [`suggest_progression`] layers the random template
/// draw on top.
///
/// # Panics
/// Panics if a degree index is 7 or greater. The fixed template sets only
/// use degrees 0-6.
pub fn progression_from_template(
    root: PitchClass,
    scale_type: ScaleType,
    template: &[usize],
) -> Vec<Chord> {
    let scale = scale_type.intervals();
    let qualities = scale_type.degree_qualities();
    template
        .iter()
        .map(|&degree| Chord::new(root.transposed(scale[degree]), qualities[degree]))
        .collect()
}

/// Suggest a chord progression starting from `root` and `quality`.
///
/// Picks one template uniformly at random from the classified scale
/// family's set, then realizes it. The returned chords resolve
/// independently through the chord and fretboard models.
///
/// # Example
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use fretwork::{ChordQuality, PitchClass};
/// use fretwork::progression::suggest_progression;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let chords = suggest_progression(PitchClass::C, ChordQuality::Major, &mut rng);
/// assert!(chords.len() == 3 || chords.len() == 4);
/// ```
pub fn suggest_progression<R: Rng + ?Sized>(
    root: PitchClass,
    quality: ChordQuality,
    rng: &mut R,
) -> Vec<Chord> {
    let scale_type = classify_scale_type(quality);
    let templates = scale_type.templates();
    let template = templates[rng.gen_range(0..templates.len())];
    progression_from_template(root, scale_type, template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_build_scale_c_major() {
        assert_eq!(
            build_scale(PitchClass::C, ScaleType::Major),
            [
                PitchClass::C,
                PitchClass::D,
                PitchClass::E,
                PitchClass::F,
                PitchClass::G,
                PitchClass::A,
                PitchClass::B,
            ]
        );
    }

    #[test]
    fn test_build_scale_a_minor() {
        assert_eq!(
            build_scale(PitchClass::A, ScaleType::Minor),
            [
                PitchClass::A,
                PitchClass::B,
                PitchClass::C,
                PitchClass::D,
                PitchClass::E,
                PitchClass::F,
                PitchClass::G,
            ]
        );
    }

    #[test]
    fn test_classify_minor_family() {
        assert_eq!(classify_scale_type(ChordQuality::Minor), ScaleType::Minor);
        assert_eq!(classify_scale_type(ChordQuality::Minor7), ScaleType::Minor);
    }

    #[test]
    fn test_classify_everything_else_major_family() {
        // Includes the deliberately coarse cases: dim, aug, and sus chords.
        for quality in [
            ChordQuality::Major,
            ChordQuality::Dominant7,
            ChordQuality::Major7,
            ChordQuality::Sus2,
            ChordQuality::Sus4,
            ChordQuality::Diminished,
            ChordQuality::Augmented,
            ChordQuality::Ninth,
            ChordQuality::Add9,
        ] {
            assert_eq!(classify_scale_type(quality), ScaleType::Major, "{:?}", quality);
        }
    }

    #[test]
    fn test_first_major_template_in_c() {
        // Template [0, 3, 4] is I, IV, V: C, F, G, all major.
        let chords = progression_from_template(PitchClass::C, ScaleType::Major, &[0, 3, 4]);
        assert_eq!(
            chords,
            vec![
                Chord::new(PitchClass::C, ChordQuality::Major),
                Chord::new(PitchClass::F, ChordQuality::Major),
                Chord::new(PitchClass::G, ChordQuality::Major),
            ]
        );
    }

    #[test]
    fn test_template_revisits_degrees() {
        // Minor template [0, 6, 5, 6] hits the seventh degree twice.
        let chords = progression_from_template(PitchClass::A, ScaleType::Minor, &[0, 6, 5, 6]);
        assert_eq!(chords.len(), 4);
        assert_eq!(chords[1], chords[3]);
        assert_eq!(chords[1], Chord::new(PitchClass::G, ChordQuality::Major));
    }

    #[test]
    fn test_suggestion_is_deterministic_under_a_fixed_seed() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        assert_eq!(
            suggest_progression(PitchClass::D, ChordQuality::Minor, &mut first),
            suggest_progression(PitchClass::D, ChordQuality::Minor, &mut second),
        );
    }

    #[test]
    fn test_suggestion_matches_some_template() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let chords = suggest_progression(PitchClass::E, ChordQuality::Major, &mut rng);
            let matched = ScaleType::Major.templates().iter().any(|template| {
                progression_from_template(PitchClass::E, ScaleType::Major, template) == chords
            });
            assert!(matched);
        }
    }

    #[test]
    fn test_suggestion_stays_diatonic() {
        let mut rng = StdRng::seed_from_u64(3);
        let scale = build_scale(PitchClass::G, ScaleType::Minor);
        for _ in 0..50 {
            let chords = suggest_progression(PitchClass::G, ChordQuality::Minor7, &mut rng);
            assert!(chords.len() == 3 || chords.len() == 4);
            for chord in chords {
                assert!(scale.contains(&chord.root));
            }
        }
    }
}
