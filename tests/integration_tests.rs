// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for chordbook
//!
//! These tests verify that multiple components work together correctly.

use chordbook::arrangement::{Song, SongPart, Songbook};
use chordbook::config::SongbookFile;
use chordbook::voicing::is_blank;
use chordbook::{DiagramEdit, DiagramLayout, DiagramMode, FretboardInput, Voicing, VoicingStore};
use tempfile::tempdir;

/// 300 x 360 canvas with 15 padding: strings every 45 from x=60,
/// open row below y=48, fret bands of 60, gutter below x=45
fn layout() -> DiagramLayout {
    DiagramLayout::new(300.0, 360.0, 15.0)
}

fn string_x(string: usize) -> f32 {
    60.0 + 45.0 * string as f32
}

fn fret_y(fret: u8) -> f32 {
    48.0 + 60.0 * fret as f32 - 30.0
}

fn names(voicings: &[Voicing]) -> Vec<&str> {
    voicings.iter().map(|v| v.name.as_str()).collect()
}

/// Lookup falls back to capitalizing the first character only
#[test]
fn test_lookup_fallback() {
    let store = VoicingStore::new();

    let fsharp = store.find_voicing("f#m");
    assert_eq!(fsharp.name, "F#m");
    assert_eq!(fsharp.start_fret, 2);
    assert_eq!(fsharp.positions, [1, 3, 3, 1, 1, 1]);

    let trimmed = store.find_voicing("  am ");
    assert_eq!(trimmed.name, "Am");

    let missing = store.find_voicing("unknownName");
    assert_eq!(missing.positions, [-1; 6]);
    assert!(missing.is_blank());
    // Only the first character is folded
    assert!(store.find_voicing("AM").is_blank());
}

/// A custom chord shadows the catalog and can be removed again
#[test]
fn test_overlay_precedence() {
    let mut store = VoicingStore::new();
    store.add_custom_chord("C", 3, [-1, 1, 3, 3, 3, 1]);

    let c = store.find_voicing("C");
    assert_eq!(c.start_fret, 3);
    assert_eq!(c.positions, [-1, 1, 3, 3, 3, 1]);

    // One "C" in the listing, the custom one
    let listing = store.chords_by_root("C");
    let cs: Vec<_> = listing.iter().filter(|v| v.name == "C").collect();
    assert_eq!(cs.len(), 1);
    assert_eq!(cs[0].start_fret, 3);

    assert!(store.remove_chord("C"));
    assert_eq!(store.find_voicing("C").positions, [-1, 3, 2, 0, 1, 0]);
    // Catalog entries cannot be removed
    assert!(!store.remove_chord("C"));
    assert!(!store.find_voicing("C").is_blank());
}

/// Root filtering separates naturals from sharps and flats
#[test]
fn test_root_filtering_and_order() {
    let mut store = VoicingStore::new();
    store.add_custom_chord("C#m7", 4, [-1, 1, 3, 1, 2, 1]);
    store.add_custom_chord("Cm7", 3, [-1, 1, 3, 1, 2, 1]);
    store.add_custom_chord("Csus4", 1, [-1, 3, 3, 0, 1, 1]);
    store.add_custom_chord("Cb", 7, [-1, 1, 3, 3, 3, 1]);

    let c = store.chords_by_root("C");
    let c_names = names(&c);
    assert!(c_names.iter().all(|n| !n.starts_with("C#") && !n.starts_with("Cb")));
    for expected in ["C", "Cm", "C7"] {
        assert!(c_names.contains(&expected), "missing {}", expected);
    }

    // "" < m < 7 < m7 < sus4 < unranked
    let position = |name: &str| c_names.iter().position(|n| *n == name).unwrap();
    assert!(position("C") < position("Cm"));
    assert!(position("Cm") < position("C7"));
    assert!(position("C7") < position("Cm7"));
    assert!(position("Cm7") < position("Csus4"));
    assert!(position("Csus4") < position("Cadd9"));

    let csharp = store.chords_by_root("C#");
    let csharp_names = names(&csharp);
    assert_eq!(csharp_names, vec!["C#m", "C#m7"]);
}

/// Unranked suffixes tie-break by plain string comparison
#[test]
fn test_unranked_suffix_order() {
    let mut store = VoicingStore::empty();
    store.add_custom_chord("Gadd9", 1, [3, 2, 0, 2, 0, 3]);
    store.add_custom_chord("G13", 3, [1, -1, 1, 2, 3, -1]);
    store.add_custom_chord("G", 1, [3, 2, 0, 0, 0, 3]);
    store.add_custom_chord("G7sus4", 1, [3, 3, 0, 0, 1, 1]);

    let listing = store.chords_by_root("G");
    assert_eq!(names(&listing), vec!["G", "G13", "G7sus4", "Gadd9"]);
}

/// Tap sequences follow the per-string state machine
#[test]
fn test_hit_testing_round_trip() {
    let seed = Voicing::new("", 1, [0, -1, -1, 3, -1, -1]);
    let mut input = FretboardInput::new(layout(), DiagramMode::Interactive, &seed);

    input.tap(string_x(0), 20.0);
    assert_eq!(input.positions()[0], -1);
    input.tap(string_x(0), 20.0);
    assert_eq!(input.positions()[0], 0);

    // Same fret mutes, a different fret moves
    input.tap(string_x(3), fret_y(3));
    assert_eq!(input.positions()[3], -1);
    input.tap(string_x(3), fret_y(3));
    input.tap(string_x(3), fret_y(2));
    assert_eq!(input.positions()[3], 2);

    // Other strings untouched throughout
    assert_eq!(input.positions(), [0, -1, -1, 2, -1, -1]);
}

/// Start fret stays inside 1..=20 under repeated taps
#[test]
fn test_start_fret_clamp() {
    let mut input = FretboardInput::blank(layout());

    for _ in 0..10 {
        input.tap(10.0, 10.0);
    }
    assert_eq!(input.start_fret(), 1);

    for _ in 0..40 {
        input.tap(10.0, 300.0);
    }
    assert_eq!(input.start_fret(), 20);
    assert_eq!(input.tap(10.0, 300.0), None);
    assert_eq!(input.tap(10.0, 10.0), Some(DiagramEdit::StartFret(19)));
}

/// Blank positions mean "not found" whatever the name says
#[test]
fn test_blank_regardless_of_name() {
    let named = Voicing::new("Cmaj7", 5, [-1; 6]);
    assert!(named.is_blank());
    assert!(is_blank(&named.positions));
    assert!(Voicing::blank().name.is_empty());
}

/// Edit a library chord, save it, and see it in lookup and listing
#[test]
fn test_edit_and_commit() {
    let mut store = VoicingStore::new();
    let mut input = FretboardInput::blank(layout());

    assert!(input.auto_fill("am", &store));
    // Am to Am7: lift the G string finger
    input.tap(string_x(3), fret_y(2));
    let edited = input.to_voicing("Am7");
    store.add_custom_chord(&edited.name, edited.start_fret, edited.positions);

    assert_eq!(store.find_voicing("Am7").positions, [-1, 0, 2, -1, 1, 0]);
    assert!(names(&store.chords_by_root("A")).contains(&"Am7"));
    // The catalog Am is unchanged
    assert_eq!(store.find_voicing("Am").positions, [-1, 0, 2, 2, 1, 0]);
}

/// Songbook and custom chords survive a save and reload
#[test]
fn test_songbook_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("songbook.yaml");

    let mut store = VoicingStore::new();
    store.add_custom_chord("Dsus2", 1, [-1, -1, 0, 2, 3, 0]);

    let mut file = SongbookFile::default();
    let mut book = Songbook::new();
    let index = book.add_song("Horse With No Name", "America").unwrap();
    let song: &mut Song = book.song_mut(index).unwrap();
    let mut verse = SongPart::new("Verse").with_memo("two chords");
    verse.add_chord(store.find_voicing("Em"));
    verse.add_chord(store.find_voicing("Dsus2"));
    song.add_part(verse);
    book.toggle_favorite(index);
    file.songs = book;
    file.capture_custom_chords(&store);
    file.save(&path).unwrap();

    let loaded = SongbookFile::load(&path).unwrap();
    assert_eq!(loaded, file);

    let mut fresh = VoicingStore::new();
    assert_eq!(loaded.install_custom_chords(&mut fresh), 1);
    assert_eq!(fresh.find_voicing("Dsus2").positions, [-1, -1, 0, 2, 3, 0]);

    let song = loaded.songs.favorites().next().unwrap();
    assert_eq!(song.parts[0].chord_names(), vec!["Em", "Dsus2"]);
}

/// A removed custom chord leaves the saved file and the catalog shows through
#[test]
fn test_remove_custom_chord_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("songbook.yaml");

    let mut store = VoicingStore::new();
    store.add_custom_chord("G", 3, [1, 3, 3, 2, 1, 1]);
    let mut file = SongbookFile::default();
    file.capture_custom_chords(&store);
    file.save(&path).unwrap();

    let mut file = SongbookFile::load(&path).unwrap();
    let mut store = VoicingStore::new();
    file.install_custom_chords(&mut store);
    assert_eq!(store.find_voicing("G").start_fret, 3);

    assert!(store.remove_chord("G"));
    file.capture_custom_chords(&store);
    file.save(&path).unwrap();

    let reloaded = SongbookFile::load(&path).unwrap();
    assert!(reloaded.custom_chords.is_empty());
    let mut fresh = VoicingStore::new();
    assert_eq!(reloaded.install_custom_chords(&mut fresh), 0);
    assert_eq!(fresh.find_voicing("G").positions, [3, 2, 0, 0, 0, 3]);
}
