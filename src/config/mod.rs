// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Songbook file handling.
//!
//! The songbook file is the persistence side of the app: songs with their
//! parts and chords, the user's custom voicings, and diagram display
//! settings, stored as YAML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::arrangement::Songbook;
use crate::voicing::{Voicing, VoicingStore};

/// Root of a songbook file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SongbookFile {
    /// Display settings
    #[serde(default)]
    pub settings: DiagramSettings,
    /// Songs with parts and chords
    #[serde(default)]
    pub songs: Songbook,
    /// User voicings that overlay the built-in catalog
    #[serde(default)]
    pub custom_chords: Vec<Voicing>,
}

impl SongbookFile {
    /// Load a songbook from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read songbook file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Load a songbook, or start an empty one if the file does not exist yet
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            info!(path = ?path.as_ref(), "songbook not found, starting empty");
            Ok(Self::default())
        }
    }

    /// Parse a songbook from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse songbook YAML")
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize songbook to YAML")
    }

    /// Save the songbook to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write songbook file: {:?}", path.as_ref()))
    }

    /// Replay the saved custom voicings into a store.
    ///
    /// Entries that fail validation are skipped with a warning; returns the
    /// number installed.
    pub fn install_custom_chords(&self, store: &mut VoicingStore) -> usize {
        let mut installed = 0;
        for voicing in &self.custom_chords {
            if let Err(e) = voicing.validate() {
                warn!(name = %voicing.name, error = %e, "skipping saved chord");
                continue;
            }
            store.add_custom_chord(&voicing.name, voicing.start_fret, voicing.positions);
            installed += 1;
        }
        installed
    }

    /// Copy the store's custom voicings into the file
    pub fn capture_custom_chords(&mut self, store: &VoicingStore) {
        self.custom_chords = store.custom_chords();
    }
}

/// Terminal diagram display settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DiagramSettings {
    /// Horizontal board padding in cells
    #[serde(default = "default_padding")]
    pub padding: f32,
    /// Draw the root string in a highlight color
    #[serde(default = "default_root_highlight")]
    pub root_highlight: bool,
}

fn default_padding() -> f32 {
    2.0
}
fn default_root_highlight() -> bool {
    true
}

impl Default for DiagramSettings {
    fn default() -> Self {
        Self {
            padding: default_padding(),
            root_highlight: default_root_highlight(),
        }
    }
}
