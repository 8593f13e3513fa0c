use super::types::{Interval, IntervalError, IntervalKey};

/// Every interval from a perfect unison to a perfect octave, indexed by length.
pub static INTERVALS: [Interval; 13] = [
    Interval {
        length: 0,
        name: "Perfect Unison",
        short_name: "P1",
        alternate_names: &["Diminished Second"],
        tension: 0,
    },
    Interval {
        length: 1,
        name: "Minor Second",
        short_name: "m2",
        alternate_names: &["Augmented Unison"],
        tension: 6,
    },
    Interval {
        length: 2,
        name: "Major Second",
        short_name: "M2",
        alternate_names: &["Diminished Third"],
        tension: 4,
    },
    Interval {
        length: 3,
        name: "Minor Third",
        short_name: "m3",
        alternate_names: &["Augmented Second"],
        tension: 2,
    },
    Interval {
        length: 4,
        name: "Major Third",
        short_name: "M3",
        alternate_names: &["Diminished Fourth"],
        tension: 2,
    },
    Interval {
        length: 5,
        name: "Perfect Fourth",
        short_name: "P4",
        alternate_names: &["Augmented Third"],
        tension: 1,
    },
    Interval {
        length: 6,
        name: "Tritone",
        short_name: "TT",
        alternate_names: &["Augmented Fourth", "Diminished Fifth"],
        tension: 5,
    },
    Interval {
        length: 7,
        name: "Perfect Fifth",
        short_name: "P5",
        alternate_names: &["Diminished Sixth"],
        tension: 1,
    },
    Interval {
        length: 8,
        name: "Minor Sixth",
        short_name: "m6",
        alternate_names: &["Augmented Fifth"],
        tension: 3,
    },
    Interval {
        length: 9,
        name: "Major Sixth",
        short_name: "M6",
        alternate_names: &["Diminished Seventh"],
        tension: 3,
    },
    Interval {
        length: 10,
        name: "Minor Seventh",
        short_name: "m7",
        alternate_names: &["Augmented Sixth"],
        tension: 4,
    },
    Interval {
        length: 11,
        name: "Major Seventh",
        short_name: "M7",
        alternate_names: &["Diminished Octave"],
        tension: 5,
    },
    Interval {
        length: 12,
        name: "Perfect Octave",
        short_name: "P8",
        alternate_names: &["Augmented Seventh"],
        tension: 0,
    },
];

/// Returns the full catalog record for `key`.
///
/// # Errors
/// * `IntervalError::NotFound` if no interval matches the key
pub fn get_interval_data(key: &IntervalKey) -> Result<&'static Interval, IntervalError> {
    let found = match key {
        IntervalKey::Name(name) => INTERVALS.iter().find(|i| i.name == name.as_str()),
        IntervalKey::ShortName(short_name) => INTERVALS
            .iter()
            .find(|i| i.short_name == short_name.as_str()),
        IntervalKey::Length(length) => INTERVALS.get(*length as usize),
    };
    found.ok_or_else(|| IntervalError::NotFound(key.clone()))
}

pub fn to_name(key: &IntervalKey) -> Result<&'static str, IntervalError> {
    get_interval_data(key).map(|i| i.name)
}

pub fn to_short_name(key: &IntervalKey) -> Result<&'static str, IntervalError> {
    get_interval_data(key).map(|i| i.short_name)
}

pub fn to_length(key: &IntervalKey) -> Result<u8, IntervalError> {
    get_interval_data(key).map(|i| i.length)
}

pub fn alternate_names(key: &IntervalKey) -> Result<&'static [&'static str], IntervalError> {
    get_interval_data(key).map(|i| i.alternate_names)
}

pub fn tension(key: &IntervalKey) -> Result<u8, IntervalError> {
    get_interval_data(key).map(|i| i.tension)
}

/// Resolves free-form text to a lookup key.
///
/// The input is tried as a canonical name, then as a short name, and only
/// then as a length. Text that is not a plain run of digits is never read
/// as a length.
///
/// # Errors
/// * `IntervalError::NotFound` if the text matches no name or short name
///   and is not a valid length
pub fn parse_key(input: &str) -> Result<IntervalKey, IntervalError> {
    if INTERVALS.iter().any(|i| i.name == input) {
        return Ok(IntervalKey::name(input));
    }
    if INTERVALS.iter().any(|i| i.short_name == input) {
        return Ok(IntervalKey::short_name(input));
    }

    let is_numeric = !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit());
    match input.parse::<u8>() {
        Ok(length) if is_numeric => {
            let key = IntervalKey::length(length);
            get_interval_data(&key)?;
            Ok(key)
        }
        _ => Err(IntervalError::NotFound(IntervalKey::name(input))),
    }
}
