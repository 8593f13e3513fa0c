use super::tables::{addition_data, alteration_data, skeleton};
use super::types::{Chord, ChordAlteration, ChordError, ChordSpec, DEFAULT_EXTENSION, MAX_EXTENSION};
use crate::interval::{get_interval_data, Interval, IntervalKey};
use crate::note::Note;
use crate::utils::{normalize_value, remove_duplicates};
use tracing::{debug, trace};

/// Fills every omitted field of `spec`.
///
/// The root is resolved first and an omitted slash takes the resolved root,
/// so `{ root: D }` gets a `D` bass rather than the default `C`.
///
/// # Errors
/// * `ChordError::InvalidExtension` if the extension is outside `1..=13`
pub fn set_defaults(spec: &ChordSpec) -> Result<Chord, ChordError> {
    let root = spec.root.unwrap_or_default();
    let extension = spec.extension.unwrap_or(DEFAULT_EXTENSION);
    if extension == 0 || extension > MAX_EXTENSION {
        return Err(ChordError::InvalidExtension(extension));
    }

    Ok(Chord {
        root,
        chord_type: spec.chord_type.unwrap_or_default(),
        extension,
        additions: spec.additions.clone().unwrap_or_default(),
        alterations: spec.alterations.clone().unwrap_or_default(),
        slash: spec.slash.unwrap_or(root),
    })
}

/// Derives the sorted, deduplicated intervals sounding in a chord.
///
/// # Errors
/// * `ChordError::InvalidExtension` if the extension is outside `1..=13`
/// * `ChordError::Interval` if a derived distance has no catalog entry
pub fn intervals(spec: &ChordSpec) -> Result<Vec<Interval>, ChordError> {
    set_defaults(spec)?.intervals()
}

/// Spells the notes of a chord, bass first when a slash note is given.
pub fn notes(spec: &ChordSpec) -> Result<Vec<Note>, ChordError> {
    set_defaults(spec)?.notes()
}

impl Chord {
    /// Semitone distances above the root, ascending and without repeats.
    pub fn interval_lengths(&self) -> Vec<u8> {
        let skeleton = skeleton(self.chord_type);

        // Even positions are the stacked thirds: degrees 1, 3, 5, 7, 9, 11, 13
        let mut lengths: Vec<u8> = (0..self.extension as i32)
            .filter(|position| position % 2 == 0)
            .map(|position| skeleton[normalize_value(position, 7) as usize])
            .collect();
        debug!(chord = %self, ?lengths, "base skeleton");

        for addition in &self.additions {
            let data = addition_data(*addition);
            let position = normalize_value(data.degree as i32 - 1, 7) as usize;
            lengths.push(skeleton[position]);
        }
        debug!(chord = %self, ?lengths, "after additions");

        let lengths: Vec<u8> = lengths
            .into_iter()
            .map(|length| apply_alterations(length, &self.alterations))
            .collect();
        debug!(chord = %self, ?lengths, "after alterations");

        let mut lengths = remove_duplicates(&lengths);
        lengths.sort_unstable();
        lengths
    }

    pub fn intervals(&self) -> Result<Vec<Interval>, ChordError> {
        let intervals = self
            .interval_lengths()
            .into_iter()
            .map(|length| get_interval_data(&IntervalKey::length(length)).copied())
            .collect::<Result<Vec<Interval>, _>>()?;
        debug!(
            chord = %self,
            intervals = ?intervals.iter().map(|i| i.short_name).collect::<Vec<_>>(),
            "derived intervals"
        );
        Ok(intervals)
    }

    pub fn notes(&self) -> Result<Vec<Note>, ChordError> {
        let mut notes = Vec::new();
        if self.slash.pitch_class() != self.root.pitch_class() {
            notes.push(self.slash);
        }

        for interval in self.intervals()? {
            let note = self.root.transpose(interval.length as i32);
            if !notes.iter().any(|n: &Note| n.pitch_class() == note.pitch_class()) {
                notes.push(note);
            }
        }
        Ok(notes)
    }
}

/// Replaces `length` with the altered distance of every alteration whose
/// base interval it equals. Later alterations in the list win.
fn apply_alterations(length: u8, alterations: &[ChordAlteration]) -> u8 {
    let mut result = length;
    for alteration in alterations {
        let data = alteration_data(*alteration);
        if length == data.base_interval {
            result = data.altered_interval;
        } else {
            trace!(%alteration, length, "alteration does not apply");
        }
    }
    result
}
