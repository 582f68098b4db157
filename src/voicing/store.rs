// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord name resolution.
//!
//! The store holds the immutable built-in catalog plus a user overlay of
//! custom voicings. Custom entries shadow catalog entries of the same name
//! in every lookup and listing. Misses are reported with the blank voicing,
//! never an error.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, trace};

use super::catalog;
use super::suffix::{matches_root, SuffixPriorityTable};
use super::{Positions, Voicing};

/// Root display order for the grouped library
pub const ROOT_ORDER: [&str; 14] = [
    "C", "C#", "D", "Eb", "D#", "E", "F", "F#", "G", "G#", "A", "Bb", "A#", "B",
];

/// Store handle for hosts that touch the overlay from several threads
pub type SharedVoicingStore = Arc<RwLock<VoicingStore>>;

/// Catalog plus custom overlay
#[derive(Debug, Clone)]
pub struct VoicingStore {
    /// Built-in voicings (name -> voicing), never mutated after construction
    catalog: HashMap<String, Voicing>,
    /// User voicings (exact name -> voicing), last write wins
    custom: HashMap<String, Voicing>,
    /// Ordering within a root group
    priorities: SuffixPriorityTable,
}

impl VoicingStore {
    /// Create a store with the built-in catalog and no custom chords
    pub fn new() -> Self {
        Self::with_catalog(catalog::builtin())
    }

    /// Create a store with no catalog at all
    pub fn empty() -> Self {
        Self::with_catalog(std::iter::empty())
    }

    /// Create a store seeded from an explicit catalog
    pub fn with_catalog(voicings: impl IntoIterator<Item = Voicing>) -> Self {
        let catalog = voicings
            .into_iter()
            .map(|v| (v.name.clone(), v))
            .collect();
        Self {
            catalog,
            custom: HashMap::new(),
            priorities: SuffixPriorityTable::default(),
        }
    }

    /// Wrap the store for shared access
    pub fn shared(self) -> SharedVoicingStore {
        Arc::new(RwLock::new(self))
    }

    /// Resolve a chord name.
    ///
    /// The name is trimmed, then looked up in the overlay (exact match), the
    /// catalog (exact match), and the catalog again with the first character
    /// upper-cased. Returns the blank voicing if nothing matches.
    pub fn find_voicing(&self, name: &str) -> Voicing {
        let key = name.trim();

        if let Some(voicing) = self.custom.get(key) {
            return voicing.clone();
        }
        if let Some(voicing) = self.catalog.get(key) {
            return voicing.clone();
        }
        if let Some(voicing) = self.catalog.get(&capitalize_first(key)) {
            return voicing.clone();
        }

        trace!(name = key, "no voicing found");
        Voicing::blank()
    }

    /// Save a custom voicing under the exact given name, replacing any
    /// previous custom entry with that name
    pub fn add_custom_chord(&mut self, name: &str, start_fret: u8, positions: Positions) {
        let replaced = self
            .custom
            .insert(name.to_string(), Voicing::new(name, start_fret, positions))
            .is_some();
        debug!(name, start_fret, replaced, "custom chord saved");
    }

    /// Remove a custom voicing. Catalog entries cannot be removed.
    pub fn remove_chord(&mut self, name: &str) -> bool {
        let removed = self.custom.remove(name).is_some();
        debug!(name, removed, "custom chord removal");
        removed
    }

    /// True if the exact name is in the custom overlay
    pub fn is_custom(&self, name: &str) -> bool {
        self.custom.contains_key(name)
    }

    /// All chords belonging to a root, ordered by suffix rank.
    ///
    /// A one-letter root does not claim names where it is followed by `#` or
    /// `b`. Each name appears once; a custom entry wins over a catalog entry
    /// of the same name.
    pub fn chords_by_root(&self, root: &str) -> Vec<Voicing> {
        let mut chords: Vec<Voicing> = self
            .custom
            .iter()
            .filter(|(name, _)| matches_root(name, root))
            .map(|(_, v)| v.clone())
            .collect();

        chords.extend(
            self.catalog
                .iter()
                .filter(|(name, _)| matches_root(name, root) && !self.custom.contains_key(*name))
                .map(|(_, v)| v.clone()),
        );

        chords.sort_by(|a, b| self.priorities.compare_names(root, &a.name, &b.name));
        chords
    }

    /// Every chord grouped by root in display order; empty groups are skipped
    pub fn library(&self) -> Vec<(&'static str, Vec<Voicing>)> {
        ROOT_ORDER
            .iter()
            .filter_map(|&root| {
                let chords = self.chords_by_root(root);
                (!chords.is_empty()).then_some((root, chords))
            })
            .collect()
    }

    /// Custom voicings sorted by name
    pub fn custom_chords(&self) -> Vec<Voicing> {
        let mut chords: Vec<Voicing> = self.custom.values().cloned().collect();
        chords.sort_by(|a, b| a.name.cmp(&b.name));
        chords
    }

    /// Number of built-in voicings
    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    /// Number of custom voicings
    pub fn custom_len(&self) -> usize {
        self.custom.len()
    }
}

impl Default for VoicingStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Upper-case only the first character, leaving the rest untouched
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
