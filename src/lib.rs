// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Guitar chord voicings and diagram editing.
//!
//! - `voicing`: the built-in catalog with a user overlay, root listings
//! - `fretboard`: diagram geometry and tap-driven editing
//! - `arrangement`: songs, parts and the songbook
//! - `config`: songbook YAML files
//! - `ui`: terminal diagram widget and editor

pub mod arrangement;
pub mod config;
pub mod fretboard;
pub mod ui;
pub mod voicing;

pub use fretboard::{DiagramEdit, DiagramLayout, DiagramMode, FretboardInput, TapTarget};
pub use voicing::{Positions, Voicing, VoicingError, VoicingStore};
