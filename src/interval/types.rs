use serde::Serialize;
use std::fmt;

/// A named interval between unison and octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    /// Distance in semitones, 0 to 12
    pub length: u8,
    /// Canonical name, e.g. "Major Third"
    pub name: &'static str,
    /// Short code, e.g. "M3"
    pub short_name: &'static str,
    /// Enharmonic names for the same distance
    pub alternate_names: &'static [&'static str],
    /// Dissonance rating, higher is more tense
    pub tension: u8,
}

/// The ways an interval can be looked up in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IntervalKey {
    Name(String),
    ShortName(String),
    Length(u8),
}

impl IntervalKey {
    pub fn name(name: impl Into<String>) -> Self {
        IntervalKey::Name(name.into())
    }

    pub fn short_name(short_name: impl Into<String>) -> Self {
        IntervalKey::ShortName(short_name.into())
    }

    pub fn length(length: u8) -> Self {
        IntervalKey::Length(length)
    }
}

impl From<u8> for IntervalKey {
    fn from(length: u8) -> Self {
        IntervalKey::Length(length)
    }
}

impl fmt::Display for IntervalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalKey::Name(name) => write!(f, "name '{}'", name),
            IntervalKey::ShortName(short_name) => write!(f, "short name '{}'", short_name),
            IntervalKey::Length(length) => write!(f, "length {}", length),
        }
    }
}

/// Errors that can occur during interval lookup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntervalError {
    /// No catalog entry matches the key
    #[error("No interval found for {0}")]
    NotFound(IntervalKey),
}
