// Chord engine tests
//
// These tests focus on deriving interval sets from chord descriptions.
// They verify each stage of the pipeline: stacked thirds picked by the
// extension, additions read from the chord's own skeleton, alterations
// replacing matching intervals, and the final dedup, sort and catalog lookup.
//
// The tests cover:
// - Triads and seventh chords of each quality
// - Additions, including ones that duplicate an existing interval
// - Alterations, including ones that find nothing to alter
// - Default filling and invalid input

use chord_intervals::chord::{self, ChordAddition, ChordAlteration, ChordError, ChordSpec, ChordType};
use chord_intervals::interval::IntervalError;
use chord_intervals::note::Note;

use test_utils::{chord_lengths, is_strictly_ascending, lengths, names, spec_from_tags};

/// Test the plain major triad end to end, down to interval names.
#[test]
fn test_major_triad() {
    let intervals = chord::intervals(&ChordSpec::new(ChordType::Major).extension(5))
        .expect("Failed to analyze major triad");

    assert_eq!(lengths(&intervals), vec![0, 4, 7]);
    assert_eq!(
        names(&intervals),
        vec!["Perfect Unison", "Major Third", "Perfect Fifth"]
    );
}

/// Test stacked thirds for each extension and quality.
///
/// This test verifies:
/// - Extension 7 picks degrees 1, 3, 5, 7
/// - Extensions 9, 11, 13 wrap back into the skeleton
/// - Extensions below 5 drop the upper degrees
#[test]
fn test_extensions() {
    assert_eq!(chord_lengths(&spec_from_tags("min", 7, &[], &[])), vec![0, 3, 7, 10]);
    assert_eq!(chord_lengths(&spec_from_tags("dom", 7, &[], &[])), vec![0, 4, 7, 10]);
    assert_eq!(chord_lengths(&spec_from_tags("maj", 7, &[], &[])), vec![0, 4, 7, 11]);
    assert_eq!(chord_lengths(&spec_from_tags("dim", 7, &[], &[])), vec![0, 3, 6, 9]);
    assert_eq!(chord_lengths(&spec_from_tags("aug", 5, &[], &[])), vec![0, 4, 8]);
    assert_eq!(chord_lengths(&spec_from_tags("dom", 9, &[], &[])), vec![0, 2, 4, 7, 10]);
    assert_eq!(
        chord_lengths(&spec_from_tags("maj", 13, &[], &[])),
        vec![0, 2, 4, 5, 7, 9, 11]
    );
    assert_eq!(chord_lengths(&spec_from_tags("maj", 3, &[], &[])), vec![0, 4]);
    assert_eq!(chord_lengths(&spec_from_tags("maj", 1, &[], &[])), vec![0]);
}

/// Test that suspended chords swap the third for a second or fourth.
#[test]
fn test_suspended_chords() {
    assert_eq!(chord_lengths(&spec_from_tags("sus4", 5, &[], &[])), vec![0, 5, 7]);
    assert_eq!(chord_lengths(&spec_from_tags("sus2", 5, &[], &[])), vec![0, 2, 7]);
    assert_eq!(chord_lengths(&spec_from_tags("sus2", 7, &[], &[])), vec![0, 2, 7, 10]);
    assert_eq!(chord_lengths(&spec_from_tags("dimSus4", 5, &[], &[])), vec![0, 4, 6]);
    assert_eq!(chord_lengths(&spec_from_tags("augSus2", 5, &[], &[])), vec![0, 2, 8]);
}

/// Test additions.
///
/// This test verifies:
/// - An addition appends the degree from the chord's own skeleton
/// - A diminished chord's added fourth is the diminished fourth
/// - An addition already covered by the extension is deduplicated
#[test]
fn test_additions() {
    assert_eq!(chord_lengths(&spec_from_tags("dom", 5, &["add6"], &[])), vec![0, 4, 7, 9]);
    assert_eq!(chord_lengths(&spec_from_tags("maj", 5, &["add9"], &[])), vec![0, 2, 4, 7]);
    assert_eq!(chord_lengths(&spec_from_tags("dim", 5, &["add4"], &[])), vec![0, 3, 4, 6]);
    assert_eq!(chord_lengths(&spec_from_tags("min", 5, &["add6"], &[])), vec![0, 3, 7, 8]);
    assert_eq!(
        chord_lengths(&spec_from_tags("maj", 9, &["add9", "add2"], &[])),
        vec![0, 2, 4, 7, 11]
    );
}

/// Test alterations.
///
/// This test verifies:
/// - A matching base interval is replaced by the altered one
/// - Alterations also apply to intervals contributed by additions
/// - An alteration with no matching base interval is silently skipped
#[test]
fn test_alterations() {
    assert_eq!(chord_lengths(&spec_from_tags("maj", 5, &[], &["b5"])), vec![0, 4, 6]);
    assert_eq!(chord_lengths(&spec_from_tags("dom", 7, &[], &["#5"])), vec![0, 4, 8, 10]);
    assert_eq!(
        chord_lengths(&spec_from_tags("dom", 9, &[], &["#9"])),
        vec![0, 3, 4, 7, 10]
    );
    assert_eq!(
        chord_lengths(&spec_from_tags("maj", 5, &["add9"], &["b9"])),
        vec![0, 1, 4, 7]
    );

    // Degree 5 is not in the chord
    assert_eq!(chord_lengths(&spec_from_tags("maj", 3, &[], &["b5"])), vec![0, 4]);
    // The augmented fifth is already raised
    assert_eq!(chord_lengths(&spec_from_tags("aug", 5, &[], &["#5"])), vec![0, 4, 8]);
    // No eleventh below extension 11
    assert_eq!(chord_lengths(&spec_from_tags("dom", 7, &[], &["#11"])), vec![0, 4, 7, 10]);
}

/// Test that when two alterations share a base interval the later one wins.
#[test]
fn test_conflicting_alterations_last_wins() {
    assert_eq!(
        chord_lengths(&spec_from_tags("maj", 5, &[], &["b5", "#5"])),
        vec![0, 4, 8]
    );
    assert_eq!(
        chord_lengths(&spec_from_tags("maj", 5, &[], &["#5", "b5"])),
        vec![0, 4, 6]
    );
}

/// Test that every combination produces sorted, unique intervals.
///
/// This walks every chord type, extension, single addition and single
/// alteration and checks the output invariant holds for all of them.
#[test]
fn test_output_always_sorted_and_unique() {
    for chord_type in ChordType::ALL {
        for extension in 1..=13 {
            for addition in ChordAddition::ALL {
                for alteration in ChordAlteration::ALL {
                    let spec = ChordSpec::new(chord_type)
                        .extension(extension)
                        .additions(vec![addition])
                        .alterations(vec![alteration]);
                    let result = chord_lengths(&spec);
                    assert!(
                        is_strictly_ascending(&result),
                        "{:?} produced {:?}",
                        spec,
                        result
                    );
                    assert_eq!(result[0], 0, "{:?} lost its root", spec);
                }
            }
        }
    }
}

/// Test default filling.
///
/// This test verifies:
/// - An empty spec becomes a C major triad with a C bass
/// - An omitted slash follows the given root, not the default root
/// - Explicit fields are kept as given
#[test]
fn test_set_defaults() {
    let resolved = chord::set_defaults(&ChordSpec::default()).unwrap();
    assert_eq!(resolved.root, Note::C);
    assert_eq!(resolved.chord_type, ChordType::Major);
    assert_eq!(resolved.extension, 5);
    assert!(resolved.additions.is_empty());
    assert!(resolved.alterations.is_empty());
    assert_eq!(resolved.slash, Note::C);

    let d: Note = "D".parse().unwrap();
    let resolved = chord::set_defaults(&ChordSpec::default().root(d)).unwrap();
    assert_eq!(resolved.slash, d);

    let f: Note = "F".parse().unwrap();
    let resolved = chord::set_defaults(
        &ChordSpec::new(ChordType::Minor)
            .root(d)
            .extension(7)
            .slash(f),
    )
    .unwrap();
    assert_eq!(resolved.chord_type, ChordType::Minor);
    assert_eq!(resolved.extension, 7);
    assert_eq!(resolved.slash, f);
}

/// Test rejection of extensions outside the modeled degrees.
#[test]
fn test_invalid_extension() {
    assert_eq!(
        chord::intervals(&ChordSpec::new(ChordType::Major).extension(0)).unwrap_err(),
        ChordError::InvalidExtension(0)
    );
    let err = chord::set_defaults(&ChordSpec::new(ChordType::Major).extension(14)).unwrap_err();
    assert_eq!(err, ChordError::InvalidExtension(14));
    assert_eq!(err.to_string(), "Invalid chord: extension 14 is outside 1..=13");
}

/// Test that unknown tags are rejected when parsed.
///
/// This test verifies:
/// - Unknown chord types, additions and alterations fail to parse
/// - The error names both the kind of tag and the offending value
#[test]
fn test_invalid_tags() {
    let err = "maj7".parse::<ChordType>().unwrap_err();
    assert_eq!(
        err,
        ChordError::InvalidChord {
            kind: "chord type",
            value: "maj7".to_string()
        }
    );
    assert_eq!(err.to_string(), "Invalid chord: unknown chord type 'maj7'");

    assert!("add3".parse::<ChordAddition>().is_err());
    assert!("b3".parse::<ChordAlteration>().is_err());
    assert!("Maj".parse::<ChordType>().is_err());

    assert_eq!("dimSus4".parse::<ChordType>().unwrap(), ChordType::DiminishedSus4);
    assert_eq!("add13".parse::<ChordAddition>().unwrap(), ChordAddition::Add13);
    assert_eq!("#11".parse::<ChordAlteration>().unwrap(), ChordAlteration::Sharp11);
}

/// Test that catalog failures surface through the chord error type.
#[test]
fn test_interval_error_conversion() {
    let err: ChordError = IntervalError::NotFound(13u8.into()).into();
    assert_eq!(err.to_string(), "No interval found for length 13");
}

/// Test the chord symbol rendering used in logs and CLI output.
#[test]
fn test_chord_display() {
    let resolved = chord::set_defaults(&ChordSpec::default()).unwrap();
    assert_eq!(resolved.to_string(), "Cmaj5");

    let spec = spec_from_tags("min", 7, &["add6"], &["b5"])
        .root("D".parse().unwrap())
        .slash("F".parse().unwrap());
    let resolved = chord::set_defaults(&spec).unwrap();
    assert_eq!(resolved.to_string(), "Dmin7(add6 b5)/F");
}
