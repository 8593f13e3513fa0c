//! Chord interval analysis.
//!
//! This crate provides functionality to:
//! - Look up the 13 intervals from a unison to an octave by name, short name or size
//! - Derive the sorted, deduplicated interval set of a chord from its type,
//!   extension, additions and alterations
//! - Spell the concrete notes of a chord from its root
pub mod chord;
pub mod config;
pub mod interval;
pub mod note;
pub mod utils;

pub use chord::{Chord, ChordAddition, ChordAlteration, ChordError, ChordSpec, ChordType};
pub use interval::{Interval, IntervalError, IntervalKey};
pub use note::Note;
