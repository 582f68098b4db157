// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord voicing model.
//!
//! A voicing is a named fretboard fingering: a start fret plus one state
//! per string. This module provides the value type, the built-in catalog,
//! suffix ranking, and the store that resolves names to voicings.

pub mod catalog;
pub mod store;
pub mod suffix;

pub use store::{SharedVoicingStore, VoicingStore};
pub use suffix::{split_root, SuffixPriorityTable, UNRANKED};

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of strings on the diagram
pub const STRING_COUNT: usize = 6;

/// Number of fret rows in the diagram window
pub const FRET_COUNT: u8 = 5;

/// Lowest start fret shown at the top of the diagram
pub const MIN_START_FRET: u8 = 1;

/// Highest start fret shown at the top of the diagram
pub const MAX_START_FRET: u8 = 20;

/// Raw encoding of a muted string
pub const MUTED: i8 = -1;

/// Raw encoding of an open string
pub const OPEN: i8 = 0;

/// Per-string states, index 0 is the lowest (6th) string.
///
/// `-1` is muted, `0` is open, `1..=5` is a fret relative to the start fret.
pub type Positions = [i8; STRING_COUNT];

/// Positions of the blank voicing
pub const BLANK_POSITIONS: Positions = [MUTED; STRING_COUNT];

/// Errors raised when building voicings from foreign data
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoicingError {
    /// The supplied position list did not have one entry per string.
    #[error("expected {expected} string positions, got {got}")]
    WrongStringCount { expected: usize, got: usize },

    /// The start fret is outside the scrollable window.
    #[error("start fret {0} is outside 1..=20")]
    StartFretOutOfRange(u8),

    /// A string value is not mute, open, or a fret inside the window.
    #[error("string {string} has invalid state {value}")]
    InvalidStringState { string: usize, value: i8 },
}

/// Decoded state of a single string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringState {
    /// Not played
    Muted,
    /// Played with no finger
    Open,
    /// Fretted at a relative fret (1-5) inside the diagram window
    Fretted(u8),
}

impl StringState {
    /// Decode a raw position value, `None` if it is out of range
    pub fn from_raw(value: i8) -> Option<Self> {
        match value {
            MUTED => Some(StringState::Muted),
            OPEN => Some(StringState::Open),
            v if (1..=FRET_COUNT as i8).contains(&v) => Some(StringState::Fretted(v as u8)),
            _ => None,
        }
    }

    /// Encode back into the raw position value
    pub fn to_raw(self) -> i8 {
        match self {
            StringState::Muted => MUTED,
            StringState::Open => OPEN,
            StringState::Fretted(fret) => fret as i8,
        }
    }
}

/// A named fretboard fingering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voicing {
    /// Chord name, also the lookup key (e.g. "Cm7")
    pub name: String,
    /// Fret number shown at the top of the diagram window
    #[serde(default = "default_start_fret")]
    pub start_fret: u8,
    /// One state per string
    pub positions: Positions,
}

fn default_start_fret() -> u8 {
    MIN_START_FRET
}

impl Voicing {
    /// Create a voicing. No range checks are performed.
    pub fn new(name: impl Into<String>, start_fret: u8, positions: Positions) -> Self {
        Self {
            name: name.into(),
            start_fret,
            positions,
        }
    }

    /// The "not found" sentinel: empty name, every string muted
    pub fn blank() -> Self {
        Self::new("", MIN_START_FRET, BLANK_POSITIONS)
    }

    /// Build a voicing from a foreign list of string values.
    ///
    /// Fails if the list does not hold exactly one value per string.
    pub fn from_slice(
        name: impl Into<String>,
        start_fret: u8,
        values: &[i8],
    ) -> Result<Self, VoicingError> {
        let positions: Positions = values.try_into().map_err(|_| VoicingError::WrongStringCount {
            expected: STRING_COUNT,
            got: values.len(),
        })?;
        Ok(Self::new(name, start_fret, positions))
    }

    /// Check the start fret and every string value against their ranges
    pub fn validate(&self) -> Result<(), VoicingError> {
        if !(MIN_START_FRET..=MAX_START_FRET).contains(&self.start_fret) {
            return Err(VoicingError::StartFretOutOfRange(self.start_fret));
        }
        for (string, &value) in self.positions.iter().enumerate() {
            if StringState::from_raw(value).is_none() {
                return Err(VoicingError::InvalidStringState { string, value });
            }
        }
        Ok(())
    }

    /// True if every string is muted, regardless of name
    pub fn is_blank(&self) -> bool {
        is_blank(&self.positions)
    }

    /// Decoded state of a string
    pub fn string_state(&self, string: usize) -> Option<StringState> {
        self.positions
            .get(string)
            .and_then(|&value| StringState::from_raw(value))
    }

    /// Fret measured from the nut for a fretted string
    pub fn absolute_fret(&self, string: usize) -> Option<u8> {
        match self.string_state(string)? {
            StringState::Fretted(relative) => Some(self.start_fret.saturating_add(relative - 1)),
            _ => None,
        }
    }

    /// Index of the lowest sounding string, used for highlighting
    pub fn root_string_index(&self) -> Option<usize> {
        root_string_index(&self.positions)
    }
}

impl Default for Voicing {
    fn default() -> Self {
        Self::blank()
    }
}

impl fmt::Display for Voicing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frets: Vec<String> = self
            .positions
            .iter()
            .map(|&p| match p {
                MUTED => "x".to_string(),
                v => v.to_string(),
            })
            .collect();
        write!(f, "{} [{}] @{}", self.name, frets.join(" "), self.start_fret)
    }
}

/// True if every string is muted
pub fn is_blank(positions: &Positions) -> bool {
    positions.iter().all(|&p| p == MUTED)
}

/// First string (from index 0) that is not muted
pub fn root_string_index(positions: &Positions) -> Option<usize> {
    positions.iter().position(|&p| p != MUTED)
}
