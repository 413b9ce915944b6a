use std::env;
use std::process;

use fretwork::{fretboard, progression, Chord, ChordQuality, Fret, PitchClass};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: fretwork <root> <quality>");
        eprintln!("       roots: C C# D D# E F F# G G# A A# B");
        eprintln!("       qualities: major minor dominant7 major7 minor7 sus2 sus4 diminished augmented ninth add9");
        process::exit(1);
    }

    let root = match PitchClass::from_name(&args[1]) {
        Some(root) => root,
        None => {
            eprintln!("Unknown root note '{}' (sharps only, e.g. C# not Db)", args[1]);
            process::exit(1);
        }
    };

    let quality = match ChordQuality::from_key(&args[2]) {
        Ok(quality) => quality,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let chord = Chord::new(root, quality);
    println!("{}", chord);

    let tones: Vec<&str> = chord.tones().iter().map(|tone| tone.name()).collect();
    println!("  tones: {}", tones.join(" "));

    let string_names = ["E (high)", "B", "G", "D", "A", "E (low)"];
    for position in fretboard::place_chord(chord) {
        let string = string_names[position.string as usize];
        match position.fret {
            Fret::Muted => println!("  {}: don't play", string),
            Fret::At(fret) => {
                let note =
                    fretboard::note_at(fretboard::OPEN_STRINGS[position.string as usize], fret);
                match position.finger {
                    Some(finger) => println!(
                        "  {}: fret {} ({}, finger {})",
                        string,
                        fret,
                        note,
                        finger.label()
                    ),
                    None => println!("  {}: fret {} ({})", string, fret, note),
                }
            }
        }
    }

    let suggested =
        progression::suggest_progression(root, quality, &mut rand::thread_rng());
    let labels: Vec<String> = suggested.iter().map(|chord| chord.to_string()).collect();
    println!("  try: {}", labels.join(" - "));
}
