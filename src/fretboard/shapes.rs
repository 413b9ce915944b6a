//! Curated chord shape library
//!
//! A small table of hand-authored open-position fingerings that override the
//! generated placement algorithm. The table lives in an embedded YAML
//! document (`shapes.yaml`) and is parsed once, on first lookup, into a
//! read-only registry keyed by exact `(root, quality)` pairs.
//!
//! The raw YAML rows use -1 for muted strings and implicit string indices
//! (list position); [`RawShape`] carries that wire form and converts into the
//! typed [`ChordShape`].

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::chord::ChordQuality;
use crate::note::PitchClass;

use super::types::{ChordShape, Finger, Fret, FretPosition, STRING_COUNT};

const SHAPE_TABLE: &str = include_str!("shapes.yaml");

/// A shape row as declared in the YAML table.
#[derive(Debug, Deserialize)]
struct RawShape {
    root: PitchClass,
    quality: ChordQuality,
    positions: Vec<RawPosition>,
}

#[derive(Debug, Deserialize)]
struct RawPosition {
    fret: i8,
    finger: Finger,
}

impl RawShape {
    fn into_shape(self) -> ChordShape {
        let positions: Vec<FretPosition> = self
            .positions
            .iter()
            .enumerate()
            .map(|(string, raw)| FretPosition {
                string: string as u8,
                fret: if raw.fret < 0 {
                    Fret::Muted
                } else {
                    Fret::At(raw.fret as u8)
                },
                finger: Some(raw.finger),
            })
            .collect();
        let positions: [FretPosition; STRING_COUNT] = positions
            .try_into()
            .expect("shape table entries cover all six strings");
        ChordShape { positions }
    }
}

fn library() -> &'static HashMap<(PitchClass, ChordQuality), ChordShape> {
    static LIBRARY: OnceLock<HashMap<(PitchClass, ChordQuality), ChordShape>> = OnceLock::new();
    LIBRARY.get_or_init(|| {
        let raw: Vec<RawShape> =
            serde_yaml::from_str(SHAPE_TABLE).expect("embedded chord shape table is valid YAML");
        raw.into_iter()
            .map(|shape| ((shape.root, shape.quality), shape.into_shape()))
            .collect()
    })
}

/// Curated shape for an exact `(root, quality)` key, if one exists.
pub(crate) fn shape_for(root: PitchClass, quality: ChordQuality) -> Option<&'static ChordShape> {
    library().get(&(root, quality))
}
