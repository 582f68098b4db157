// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interactive chord diagram engine.
//!
//! This module provides:
//! - Geometry: canvas coordinates of strings, frets and the gutter
//! - Tap classification: pointer position to a discrete target
//! - Edit state: the per-string state machine and start-fret scrolling

pub mod geometry;
pub mod input;

pub use geometry::{DiagramGeometry, DiagramLayout, TapTarget};
pub use input::{DiagramEdit, FretboardInput};

use crate::voicing::{
    root_string_index, Positions, Voicing, BLANK_POSITIONS, MAX_START_FRET, MIN_START_FRET, MUTED,
    OPEN,
};

/// Whether a diagram accepts taps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagramMode {
    /// Editable: taps change the voicing, the gutter is always shown
    #[default]
    Interactive,
    /// Display only: taps are ignored
    ReadOnly,
}

/// Working copy of a voicing being edited.
///
/// Detached from the voicing it was seeded from; edits never reach the
/// source or the store until the caller commits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramEditState {
    positions: Positions,
    start_fret: u8,
}

impl DiagramEditState {
    /// Create an edit state from raw values. The start fret is clamped to
    /// the scrollable range.
    pub fn new(positions: Positions, start_fret: u8) -> Self {
        Self {
            positions,
            start_fret: start_fret.clamp(MIN_START_FRET, MAX_START_FRET),
        }
    }

    /// All strings muted, window at the first fret
    pub fn blank() -> Self {
        Self::new(BLANK_POSITIONS, MIN_START_FRET)
    }

    /// Copy the values of a voicing
    pub fn from_voicing(voicing: &Voicing) -> Self {
        Self::new(voicing.positions, voicing.start_fret)
    }

    /// Current string states
    pub fn positions(&self) -> Positions {
        self.positions
    }

    /// Current start fret
    pub fn start_fret(&self) -> u8 {
        self.start_fret
    }

    /// Lowest sounding string, for highlighting only
    pub fn root_string_index(&self) -> Option<usize> {
        root_string_index(&self.positions)
    }

    /// Replace every string state at once
    pub fn set_positions(&mut self, positions: Positions) {
        self.positions = positions;
    }

    /// Tap on the open/mute row: open strings become muted, anything else
    /// (muted or fretted) becomes open. An unknown string changes nothing.
    pub fn toggle_open(&self, string: usize) -> Positions {
        let mut next = self.positions;
        if let Some(state) = next.get_mut(string) {
            *state = if *state == OPEN { MUTED } else { OPEN };
        }
        next
    }

    /// Tap on a fret row: the same fret again mutes the string, any other
    /// fret moves the finger there. An unknown string changes nothing.
    pub fn press_fret(&self, string: usize, fret: u8) -> Positions {
        let mut next = self.positions;
        let fret = fret as i8;
        if let Some(state) = next.get_mut(string) {
            *state = if *state == fret { MUTED } else { fret };
        }
        next
    }

    /// Start fret one lower, `None` at the first fret
    pub fn start_fret_down(&self) -> Option<u8> {
        (self.start_fret > MIN_START_FRET).then(|| self.start_fret - 1)
    }

    /// Start fret one higher, `None` at the last fret
    pub fn start_fret_up(&self) -> Option<u8> {
        (self.start_fret < MAX_START_FRET).then(|| self.start_fret + 1)
    }

    /// Set the start fret, clamped to the scrollable range
    pub fn set_start_fret(&mut self, start_fret: u8) {
        self.start_fret = start_fret.clamp(MIN_START_FRET, MAX_START_FRET);
    }

    /// Build a voicing from the current state
    pub fn to_voicing(&self, name: impl Into<String>) -> Voicing {
        Voicing::new(name, self.start_fret, self.positions)
    }
}

impl Default for DiagramEditState {
    fn default() -> Self {
        Self::blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_state() {
        let state = DiagramEditState::blank();
        assert_eq!(state.positions(), [-1; 6]);
        assert_eq!(state.start_fret(), 1);
        assert_eq!(state.root_string_index(), None);
    }

    #[test]
    fn test_open_row_cycle() {
        let mut state = DiagramEditState::new([0, -1, 3, 0, 0, 0], 1);

        // Open -> muted
        state.set_positions(state.toggle_open(0));
        assert_eq!(state.positions()[0], -1);
        // Muted -> open
        state.set_positions(state.toggle_open(0));
        assert_eq!(state.positions()[0], 0);
        // Fretted -> open, not muted
        assert_eq!(state.toggle_open(2)[2], 0);
    }

    #[test]
    fn test_fret_row_cycle() {
        let state = DiagramEditState::new([-1, 3, 3, 0, 1, 0], 1);
        assert_eq!(state.press_fret(1, 3)[1], -1);
        assert_eq!(state.press_fret(1, 2)[1], 2);
        assert_eq!(state.press_fret(0, 5)[0], 5);
        assert_eq!(state.press_fret(3, 1)[3], 1);
    }

    #[test]
    fn test_transitions_do_not_mutate() {
        let state = DiagramEditState::new([0, 0, 0, 0, 0, 0], 1);
        let next = state.toggle_open(4);
        assert_eq!(next, [0, 0, 0, 0, -1, 0]);
        assert_eq!(state.positions(), [0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_start_fret_bounds() {
        let low = DiagramEditState::new(BLANK_POSITIONS, 1);
        assert_eq!(low.start_fret_down(), None);
        assert_eq!(low.start_fret_up(), Some(2));

        let high = DiagramEditState::new(BLANK_POSITIONS, 20);
        assert_eq!(high.start_fret_up(), None);
        assert_eq!(high.start_fret_down(), Some(19));

        let mut state = DiagramEditState::blank();
        state.set_start_fret(0);
        assert_eq!(state.start_fret(), 1);
        state.set_start_fret(42);
        assert_eq!(state.start_fret(), 20);
    }

    #[test]
    fn test_detached_from_source() {
        let source = Voicing::new("Am", 1, [-1, 0, 2, 2, 1, 0]);
        let mut state = DiagramEditState::from_voicing(&source);
        state.set_positions(state.press_fret(4, 1));

        assert_eq!(source.positions, [-1, 0, 2, 2, 1, 0]);
        assert_eq!(state.to_voicing("Am").positions, [-1, 0, 2, 2, -1, 0]);
    }

    #[test]
    fn test_seed_start_fret_clamped() {
        let state = DiagramEditState::from_voicing(&Voicing::new("X", 25, [1; 6]));
        assert_eq!(state.start_fret(), 20);
        assert_eq!(state.start_fret_down(), Some(19));

        let state = DiagramEditState::new(BLANK_POSITIONS, 0);
        assert_eq!(state.start_fret(), 1);
    }

    #[test]
    fn test_unknown_string_ignored() {
        let state = DiagramEditState::new([-1, 3, 2, 0, 1, 0], 1);
        assert_eq!(state.toggle_open(6), [-1, 3, 2, 0, 1, 0]);
        assert_eq!(state.press_fret(9, 2), [-1, 3, 2, 0, 1, 0]);
    }
}
