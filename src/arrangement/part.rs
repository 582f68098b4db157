// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song parts.
//!
//! A part is a named section of a song (Intro, Verse, Chorus) holding an
//! ordered list of chord voicings and a free-form memo.

use serde::{Deserialize, Serialize};

use crate::voicing::Voicing;

/// A named section of a song with its chords
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongPart {
    /// Part name
    pub name: String,
    /// Notes for the player
    #[serde(default)]
    pub memo: String,
    /// Chords in playing order
    #[serde(default)]
    pub chords: Vec<Voicing>,
}

impl SongPart {
    /// Create an empty part
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            memo: String::new(),
            chords: Vec::new(),
        }
    }

    /// Builder: set the memo
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    /// Append a chord
    pub fn add_chord(&mut self, voicing: Voicing) {
        self.chords.push(voicing);
    }

    /// Replace the chord at `index`, returning the old one
    pub fn replace_chord(&mut self, index: usize, voicing: Voicing) -> Option<Voicing> {
        let slot = self.chords.get_mut(index)?;
        Some(std::mem::replace(slot, voicing))
    }

    /// Remove the chord at `index`
    pub fn remove_chord(&mut self, index: usize) -> Option<Voicing> {
        (index < self.chords.len()).then(|| self.chords.remove(index))
    }

    /// Chord names in order, e.g. for a compact chart line
    pub fn chord_names(&self) -> Vec<&str> {
        self.chords.iter().map(|c| c.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chord(name: &str) -> Voicing {
        Voicing::new(name, 1, [0, 0, 0, 0, 0, 0])
    }

    #[test]
    fn test_part_chords() {
        let mut part = SongPart::new("Verse").with_memo("let ring");
        part.add_chord(chord("Am"));
        part.add_chord(chord("F"));
        part.add_chord(chord("C"));

        assert_eq!(part.memo, "let ring");
        assert_eq!(part.chord_names(), vec!["Am", "F", "C"]);

        let old = part.replace_chord(1, chord("Fmaj7"));
        assert_eq!(old.map(|v| v.name), Some("F".to_string()));
        assert_eq!(part.chord_names(), vec!["Am", "Fmaj7", "C"]);

        let removed = part.remove_chord(0);
        assert_eq!(removed.map(|v| v.name), Some("Am".to_string()));
        assert_eq!(part.chord_names(), vec!["Fmaj7", "C"]);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut part = SongPart::new("Bridge");
        assert!(part.replace_chord(0, chord("G")).is_none());
        assert!(part.remove_chord(3).is_none());
        assert!(part.chords.is_empty());
    }
}
