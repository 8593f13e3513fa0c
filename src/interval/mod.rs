/// Interval catalog covering every distance from a unison to an octave.
///
/// Each interval can be looked up by its canonical name, its short code or
/// its size in semitones, and all three resolve to the same record.
mod catalog;
mod types;

pub use catalog::{
    alternate_names, get_interval_data, parse_key, tension, to_length, to_name, to_short_name,
    INTERVALS,
};
pub use types::{Interval, IntervalError, IntervalKey};
