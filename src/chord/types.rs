use crate::interval::IntervalError;
use crate::note::Note;
use std::fmt;
use std::str::FromStr;

/// Extension used when a chord does not name one (a plain triad)
pub const DEFAULT_EXTENSION: u8 = 5;
/// Highest extension the degree model covers
pub const MAX_EXTENSION: u8 = 13;

/// Chord quality, selecting one of the degree skeletons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChordType {
    #[default]
    Major,
    Minor,
    Diminished,
    Dominant,
    Sus2,
    Sus4,
    Augmented,
    DiminishedSus2,
    DiminishedSus4,
    AugmentedSus2,
    AugmentedSus4,
}

impl ChordType {
    pub const ALL: [ChordType; 11] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Dominant,
        ChordType::Sus2,
        ChordType::Sus4,
        ChordType::Augmented,
        ChordType::DiminishedSus2,
        ChordType::DiminishedSus4,
        ChordType::AugmentedSus2,
        ChordType::AugmentedSus4,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            ChordType::Major => "maj",
            ChordType::Minor => "min",
            ChordType::Diminished => "dim",
            ChordType::Dominant => "dom",
            ChordType::Sus2 => "sus2",
            ChordType::Sus4 => "sus4",
            ChordType::Augmented => "aug",
            ChordType::DiminishedSus2 => "dimSus2",
            ChordType::DiminishedSus4 => "dimSus4",
            ChordType::AugmentedSus2 => "augSus2",
            ChordType::AugmentedSus4 => "augSus4",
        }
    }
}

/// A scale degree added on top of the stacked thirds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordAddition {
    Add2,
    Add4,
    Add6,
    Add9,
    Add11,
    Add13,
}

impl ChordAddition {
    pub const ALL: [ChordAddition; 6] = [
        ChordAddition::Add2,
        ChordAddition::Add4,
        ChordAddition::Add6,
        ChordAddition::Add9,
        ChordAddition::Add11,
        ChordAddition::Add13,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            ChordAddition::Add2 => "add2",
            ChordAddition::Add4 => "add4",
            ChordAddition::Add6 => "add6",
            ChordAddition::Add9 => "add9",
            ChordAddition::Add11 => "add11",
            ChordAddition::Add13 => "add13",
        }
    }
}

/// A degree raised or lowered by a semitone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordAlteration {
    Flat5,
    Sharp5,
    Flat9,
    Sharp9,
    Sharp11,
    Flat13,
}

impl ChordAlteration {
    pub const ALL: [ChordAlteration; 6] = [
        ChordAlteration::Flat5,
        ChordAlteration::Sharp5,
        ChordAlteration::Flat9,
        ChordAlteration::Sharp9,
        ChordAlteration::Sharp11,
        ChordAlteration::Flat13,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            ChordAlteration::Flat5 => "b5",
            ChordAlteration::Sharp5 => "#5",
            ChordAlteration::Flat9 => "b9",
            ChordAlteration::Sharp9 => "#9",
            ChordAlteration::Sharp11 => "#11",
            ChordAlteration::Flat13 => "b13",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accidental {
    Sharp,
    Flat,
}

impl Accidental {
    /// Semitone shift applied by the accidental
    pub fn offset(self) -> i32 {
        match self {
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }
}

macro_rules! impl_tag_traits {
    ($ty:ty, $kind:literal) => {
        impl FromStr for $ty {
            type Err = ChordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .into_iter()
                    .find(|value| value.tag() == s)
                    .ok_or_else(|| ChordError::invalid($kind, s))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.tag())
            }
        }
    };
}

impl_tag_traits!(ChordType, "chord type");
impl_tag_traits!(ChordAddition, "addition");
impl_tag_traits!(ChordAlteration, "alteration");

/// A chord description where any field may be left out.
///
/// Omitted fields are filled in by [`set_defaults`](super::set_defaults).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChordSpec {
    pub root: Option<Note>,
    pub chord_type: Option<ChordType>,
    pub extension: Option<u8>,
    pub additions: Option<Vec<ChordAddition>>,
    pub alterations: Option<Vec<ChordAlteration>>,
    pub slash: Option<Note>,
}

impl ChordSpec {
    pub fn new(chord_type: ChordType) -> Self {
        ChordSpec {
            chord_type: Some(chord_type),
            ..Default::default()
        }
    }

    pub fn root(mut self, root: Note) -> Self {
        self.root = Some(root);
        self
    }

    pub fn extension(mut self, extension: u8) -> Self {
        self.extension = Some(extension);
        self
    }

    pub fn additions(mut self, additions: Vec<ChordAddition>) -> Self {
        self.additions = Some(additions);
        self
    }

    pub fn alterations(mut self, alterations: Vec<ChordAlteration>) -> Self {
        self.alterations = Some(alterations);
        self
    }

    pub fn slash(mut self, slash: Note) -> Self {
        self.slash = Some(slash);
        self
    }
}

/// A chord description with every field resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    pub root: Note,
    pub chord_type: ChordType,
    pub extension: u8,
    pub additions: Vec<ChordAddition>,
    pub alterations: Vec<ChordAlteration>,
    pub slash: Note,
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.root, self.chord_type, self.extension)?;

        let modifiers: Vec<&str> = self
            .additions
            .iter()
            .map(|a| a.tag())
            .chain(self.alterations.iter().map(|a| a.tag()))
            .collect();
        if !modifiers.is_empty() {
            write!(f, "({})", modifiers.join(" "))?;
        }

        if self.slash != self.root {
            write!(f, "/{}", self.slash)?;
        }
        Ok(())
    }
}

/// Errors that can occur while building or analyzing a chord
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChordError {
    /// A tag outside the known chord types, additions, alterations or notes
    #[error("Invalid chord: unknown {kind} '{value}'")]
    InvalidChord { kind: &'static str, value: String },

    /// Extension outside the modeled degrees
    #[error("Invalid chord: extension {0} is outside 1..=13")]
    InvalidExtension(u8),

    /// A derived distance has no catalog entry
    #[error(transparent)]
    Interval(#[from] IntervalError),
}

impl ChordError {
    pub(crate) fn invalid(kind: &'static str, value: &str) -> Self {
        ChordError::InvalidChord {
            kind,
            value: value.to_string(),
        }
    }
}
