// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Tap handling for a single diagram.

use tracing::trace;

use super::geometry::{DiagramGeometry, DiagramLayout, TapTarget};
use super::{DiagramEditState, DiagramMode};
use crate::voicing::{Positions, Voicing, VoicingStore};

/// Change produced by one tap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramEdit {
    /// Full replacement of the six string states
    Positions(Positions),
    /// New start fret
    StartFret(u8),
}

/// Interactive diagram: geometry plus the edit state it drives
#[derive(Debug, Clone)]
pub struct FretboardInput {
    layout: DiagramLayout,
    mode: DiagramMode,
    state: DiagramEditState,
}

impl FretboardInput {
    /// Create a diagram seeded from a voicing
    pub fn new(layout: DiagramLayout, mode: DiagramMode, voicing: &Voicing) -> Self {
        Self {
            layout,
            mode,
            state: DiagramEditState::from_voicing(voicing),
        }
    }

    /// Create an interactive diagram with every string muted
    pub fn blank(layout: DiagramLayout) -> Self {
        Self::new(layout, DiagramMode::Interactive, &Voicing::blank())
    }

    /// Geometry for the current canvas and start fret
    pub fn geometry(&self) -> DiagramGeometry {
        DiagramGeometry::new(self.layout, self.mode, self.state.start_fret())
    }

    /// Handle a tap at `(x, y)` in canvas coordinates.
    ///
    /// Returns the edit that was applied, or `None` if the tap was ignored
    /// (read-only diagram, outside the board, or start fret already at its
    /// limit).
    pub fn tap(&mut self, x: f32, y: f32) -> Option<DiagramEdit> {
        if self.mode == DiagramMode::ReadOnly {
            return None;
        }

        let target = self.geometry().classify(x, y);
        trace!(x, y, ?target, "diagram tap");

        let edit = match target {
            TapTarget::StartFretDown => DiagramEdit::StartFret(self.state.start_fret_down()?),
            TapTarget::StartFretUp => DiagramEdit::StartFret(self.state.start_fret_up()?),
            TapTarget::OpenRow { string } => DiagramEdit::Positions(self.state.toggle_open(string)),
            TapTarget::Fret { string, fret } => {
                DiagramEdit::Positions(self.state.press_fret(string, fret))
            }
            TapTarget::Outside => return None,
        };

        self.apply(edit);
        Some(edit)
    }

    /// Commit an edit to the working state
    pub fn apply(&mut self, edit: DiagramEdit) {
        match edit {
            DiagramEdit::Positions(positions) => self.state.set_positions(positions),
            DiagramEdit::StartFret(start_fret) => self.state.set_start_fret(start_fret),
        }
    }

    /// Seed the diagram from a chord name.
    ///
    /// Only applies when the store knows the name; a blank result leaves
    /// the current edit untouched.
    pub fn auto_fill(&mut self, name: &str, store: &VoicingStore) -> bool {
        let found = store.find_voicing(name);
        if found.is_blank() {
            return false;
        }
        self.state = DiagramEditState::from_voicing(&found);
        true
    }

    /// Back to the blank voicing
    pub fn reset(&mut self) {
        self.state = DiagramEditState::blank();
    }

    /// Resize the canvas
    pub fn set_layout(&mut self, layout: DiagramLayout) {
        self.layout = layout;
    }

    /// Current canvas
    pub fn layout(&self) -> DiagramLayout {
        self.layout
    }

    /// Interactive or read-only
    pub fn mode(&self) -> DiagramMode {
        self.mode
    }

    /// Working state
    pub fn state(&self) -> &DiagramEditState {
        &self.state
    }

    /// Current string states
    pub fn positions(&self) -> Positions {
        self.state.positions()
    }

    /// Current start fret
    pub fn start_fret(&self) -> u8 {
        self.state.start_fret()
    }

    /// Lowest sounding string, for highlighting
    pub fn root_string_index(&self) -> Option<usize> {
        self.state.root_string_index()
    }

    /// The edited voicing under a name
    pub fn to_voicing(&self, name: impl Into<String>) -> Voicing {
        self.state.to_voicing(name)
    }
}
