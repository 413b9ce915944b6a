//! Fretboard data type definitions
//!
//! Types describing where a chord lands on the neck: string/fret
//! coordinates, finger labels, and curated shapes. These are the values the
//! presentation layer consumes, so they serialize in the form the adapter
//! expects (camelCase fields, muted strings as -1).

use serde::{Deserialize, Serialize, Serializer};

use crate::note::PitchClass;

/// Number of strings in the fixed tuning.
pub const STRING_COUNT: usize = 6;

/// Number of frets on the visualized neck; fret 0 is the open string.
pub const FRET_COUNT: u8 = 6;

/// Open-string pitch classes from string 0 (high E) to string 5 (low E).
pub const OPEN_STRINGS: [PitchClass; STRING_COUNT] = [
    PitchClass::E,
    PitchClass::B,
    PitchClass::G,
    PitchClass::D,
    PitchClass::A,
    PitchClass::E,
];

/// What happens on one string within a voicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fret {
    /// The string is not played.
    Muted,
    /// The string is fretted at the given fret; 0 is the open string.
    At(u8),
}

impl Fret {
    pub fn is_played(self) -> bool {
        matches!(self, Fret::At(_))
    }
}

// The adapter contract uses -1 for a muted string.
impl Serialize for Fret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Fret::Muted => serializer.serialize_i8(-1),
            Fret::At(fret) => serializer.serialize_i8(*fret as i8),
        }
    }
}

/// Fretting-hand finger labels used by curated shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Finger {
    Open,
    #[serde(rename = "X")]
    Muted,
    #[serde(rename = "1")]
    Index,
    #[serde(rename = "2")]
    Middle,
    #[serde(rename = "3")]
    Ring,
    #[serde(rename = "4")]
    Pinky,
}

impl Finger {
    /// Display form of the label: `Open`, `X`, or a digit 1-4.
    pub fn label(self) -> &'static str {
        match self {
            Finger::Open => "Open",
            Finger::Muted => "X",
            Finger::Index => "1",
            Finger::Middle => "2",
            Finger::Ring => "3",
            Finger::Pinky => "4",
        }
    }
}

/// A single string/fret placement within a chord voicing.
///
/// Generated voicings carry no finger labels; curated shapes label every
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretPosition {
    /// String index, 0 (high E) through 5 (low E).
    pub string: u8,
    pub fret: Fret,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finger: Option<Finger>,
}

/// A hand-authored fingering for a specific chord, one entry per string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordShape {
    pub positions: [FretPosition; STRING_COUNT],
}
