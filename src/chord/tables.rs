use super::types::{Accidental, ChordAddition, ChordAlteration, ChordType};

/// Semitone distance of each degree 1 to 7 above the root, one entry per
/// skeleton position. Degrees 9, 11 and 13 reuse positions 1, 3 and 5.
pub type Skeleton = [u8; 7];

const MAJOR: Skeleton = [0, 2, 4, 5, 7, 9, 11];
const MINOR: Skeleton = [0, 2, 3, 5, 7, 8, 10];
const DIMINISHED: Skeleton = [0, 2, 3, 4, 6, 8, 9];
const DOMINANT: Skeleton = [0, 2, 4, 5, 7, 9, 10];
const AUGMENTED: Skeleton = [0, 2, 4, 5, 8, 9, 10];

// Suspended skeletons put the second or fourth in the third's slot
const SUS2: Skeleton = [0, 2, 2, 5, 7, 9, 10];
const SUS4: Skeleton = [0, 2, 5, 5, 7, 9, 10];
const DIMINISHED_SUS2: Skeleton = [0, 2, 2, 4, 6, 8, 9];
const DIMINISHED_SUS4: Skeleton = [0, 2, 4, 4, 6, 8, 9];
const AUGMENTED_SUS2: Skeleton = [0, 2, 2, 5, 8, 9, 10];
const AUGMENTED_SUS4: Skeleton = [0, 2, 5, 5, 8, 9, 10];

pub fn skeleton(chord_type: ChordType) -> &'static Skeleton {
    match chord_type {
        ChordType::Major => &MAJOR,
        ChordType::Minor => &MINOR,
        ChordType::Diminished => &DIMINISHED,
        ChordType::Dominant => &DOMINANT,
        ChordType::Sus2 => &SUS2,
        ChordType::Sus4 => &SUS4,
        ChordType::Augmented => &AUGMENTED,
        ChordType::DiminishedSus2 => &DIMINISHED_SUS2,
        ChordType::DiminishedSus4 => &DIMINISHED_SUS4,
        ChordType::AugmentedSus2 => &AUGMENTED_SUS2,
        ChordType::AugmentedSus4 => &AUGMENTED_SUS4,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdditionData {
    /// Scale degree the addition targets
    pub degree: u8,
    /// Distance of that degree in a major context. The engine reads the
    /// actual distance from the chord's own skeleton.
    pub interval: u8,
}

pub fn addition_data(addition: ChordAddition) -> AdditionData {
    let (degree, interval) = match addition {
        ChordAddition::Add2 => (2, 2),
        ChordAddition::Add4 => (4, 5),
        ChordAddition::Add6 => (6, 9),
        ChordAddition::Add9 => (9, 14),
        ChordAddition::Add11 => (11, 17),
        ChordAddition::Add13 => (13, 21),
    };
    AdditionData { degree, interval }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlterationData {
    pub degree: u8,
    pub accidental: Accidental,
    /// Octave-reduced distance of the unaltered degree
    pub base_interval: u8,
    /// `base_interval` shifted by the accidental, wrapped to the octave
    pub altered_interval: u8,
}

pub fn alteration_data(alteration: ChordAlteration) -> AlterationData {
    let (degree, accidental, base_interval, altered_interval) = match alteration {
        ChordAlteration::Flat5 => (5, Accidental::Flat, 7, 6),
        ChordAlteration::Sharp5 => (5, Accidental::Sharp, 7, 8),
        ChordAlteration::Flat9 => (9, Accidental::Flat, 2, 1),
        ChordAlteration::Sharp9 => (9, Accidental::Sharp, 2, 3),
        ChordAlteration::Sharp11 => (11, Accidental::Sharp, 5, 6),
        ChordAlteration::Flat13 => (13, Accidental::Flat, 9, 8),
    };
    AlterationData {
        degree,
        accidental,
        base_interval,
        altered_interval,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::normalize_value;

    #[test]
    fn test_skeletons_start_at_root_and_stay_in_octave() {
        for chord_type in ChordType::ALL {
            let skeleton = skeleton(chord_type);
            assert_eq!(skeleton[0], 0, "{} skeleton must start at the root", chord_type);
            assert!(skeleton.iter().all(|&d| d < 12), "{} leaves the octave", chord_type);
        }
    }

    #[test]
    fn test_sus_skeletons_replace_third() {
        assert_eq!(skeleton(ChordType::Sus2)[2], 2);
        assert_eq!(skeleton(ChordType::Sus4)[2], 5);
        assert_eq!(skeleton(ChordType::DiminishedSus4)[2], skeleton(ChordType::Diminished)[3]);
        assert_eq!(skeleton(ChordType::AugmentedSus4)[4], skeleton(ChordType::Augmented)[4]);
    }

    #[test]
    fn test_addition_interval_matches_major_degree() {
        for addition in ChordAddition::ALL {
            let data = addition_data(addition);
            let position = normalize_value(data.degree as i32 - 1, 7) as usize;
            assert_eq!(data.interval % 12, MAJOR[position], "{}", addition);
        }
    }

    #[test]
    fn test_altered_interval_is_one_semitone_from_base() {
        for alteration in ChordAlteration::ALL {
            let data = alteration_data(alteration);
            let expected = normalize_value(data.base_interval as i32 + data.accidental.offset(), 12);
            assert_eq!(data.altered_interval as i32, expected, "{}", alteration);

            let position = normalize_value(data.degree as i32 - 1, 7) as usize;
            assert_eq!(data.base_interval, MAJOR[position], "{}", alteration);
        }
    }
}
