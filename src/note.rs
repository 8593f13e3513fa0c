use crate::chord::ChordError;
use crate::utils::normalize_value;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];
const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Which accidental a note prefers when it falls on a black key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Spelling {
    Sharp,
    Flat,
}

/// A pitch class with a preferred spelling.
///
/// Two notes compare equal only if both the pitch class and the spelling
/// match, so `C#` and `Db` are distinct values. Use [`Note::pitch_class`]
/// for enharmonic comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Note {
    pitch_class: u8,
    spelling: Spelling,
}

impl Note {
    pub const C: Note = Note {
        pitch_class: 0,
        spelling: Spelling::Sharp,
    };

    pub fn new(pitch_class: u8, spelling: Spelling) -> Self {
        Note {
            pitch_class: pitch_class % 12,
            spelling,
        }
    }

    pub fn pitch_class(&self) -> u8 {
        self.pitch_class
    }

    pub fn spelling(&self) -> Spelling {
        self.spelling
    }

    /// Moves the note up by `semitones`, wrapping within the octave and
    /// keeping the spelling preference.
    pub fn transpose(&self, semitones: i32) -> Note {
        let pitch_class = normalize_value(self.pitch_class as i32 + semitones, 12);
        Note::new(pitch_class as u8, self.spelling)
    }

    pub fn name(&self) -> &'static str {
        match self.spelling {
            Spelling::Sharp => SHARP_NAMES[self.pitch_class as usize],
            Spelling::Flat => FLAT_NAMES[self.pitch_class as usize],
        }
    }
}

impl Default for Note {
    fn default() -> Self {
        Note::C
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Note {
    type Err = ChordError;

    /// Parses a letter `A`-`G` (either case) followed by any number of `#`
    /// or `b` accidentals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChordError::invalid("note", s);

        let mut chars = s.chars();
        let base = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('C') => 0,
            Some('D') => 2,
            Some('E') => 4,
            Some('F') => 5,
            Some('G') => 7,
            Some('A') => 9,
            Some('B') => 11,
            _ => return Err(invalid()),
        };

        let mut offset = 0i32;
        let mut spelling = Spelling::Sharp;
        for c in chars {
            match c {
                '#' => offset += 1,
                'b' => {
                    offset -= 1;
                    spelling = Spelling::Flat;
                }
                _ => return Err(invalid()),
            }
        }

        let pitch_class = normalize_value(base + offset, 12);
        Ok(Note::new(pitch_class as u8, spelling))
    }
}
