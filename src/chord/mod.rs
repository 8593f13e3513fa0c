/// Chord engine: derives which intervals a chord contains.
///
/// A chord's type selects a seven-degree skeleton. The extension picks the
/// stacked thirds from it, additions append single degrees from the same
/// skeleton, and alterations shift matching degrees by a semitone before the
/// result is deduplicated, sorted and resolved against the interval catalog.
mod engine;
mod tables;
mod types;

pub use engine::{intervals, notes, set_defaults};
pub use tables::{addition_data, alteration_data, skeleton, AdditionData, AlterationData, Skeleton};
pub use types::{
    Accidental, Chord, ChordAddition, ChordAlteration, ChordError, ChordSpec, ChordType,
    DEFAULT_EXTENSION, MAX_EXTENSION,
};
