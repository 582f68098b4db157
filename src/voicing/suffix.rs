// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord suffix ranking.
//!
//! The suffix is everything after the root ("m7" in "Am7"). Library
//! listings order chords of the same root by a fixed rank per suffix.

use std::cmp::Ordering;
use std::collections::HashMap;

/// Rank given to suffixes missing from the table
pub const UNRANKED: u32 = 99;

const DEFAULT_RANKS: &[(&str, u32)] = &[
    ("", 0),
    ("m", 1),
    ("7", 2),
    ("m7", 3),
    ("M7", 4),
    ("sus4", 5),
    ("sus2", 6),
    ("dim", 7),
    ("aug", 8),
    ("6", 9),
    ("9", 10),
];

/// Static suffix -> rank mapping, lower ranks sort first
#[derive(Debug, Clone)]
pub struct SuffixPriorityTable {
    ranks: HashMap<&'static str, u32>,
}

impl SuffixPriorityTable {
    /// Rank of a suffix, `UNRANKED` when unknown
    pub fn rank(&self, suffix: &str) -> u32 {
        self.ranks.get(suffix).copied().unwrap_or(UNRANKED)
    }

    /// Order two suffixes: by rank, then by plain string comparison
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.rank(a)
            .cmp(&self.rank(b))
            .then_with(|| a.cmp(b))
    }

    /// Order two chord names of the same root
    pub fn compare_names(&self, root: &str, a: &str, b: &str) -> Ordering {
        let suffix_a = a.strip_prefix(root).unwrap_or(a);
        let suffix_b = b.strip_prefix(root).unwrap_or(b);
        self.compare(suffix_a, suffix_b)
    }
}

impl Default for SuffixPriorityTable {
    fn default() -> Self {
        Self {
            ranks: DEFAULT_RANKS.iter().copied().collect(),
        }
    }
}

/// True if `name` belongs to the chord group of `root`.
///
/// A one-letter root must not be followed by an accidental, so "C" does not
/// claim "C#m" or "Cb".
pub fn matches_root(name: &str, root: &str) -> bool {
    let Some(rest) = name.strip_prefix(root) else {
        return false;
    };
    if root.chars().count() == 1 {
        !matches!(rest.chars().next(), Some('#') | Some('b'))
    } else {
        true
    }
}

/// Split a chord name into root and suffix.
///
/// The root is the first character plus a following `#` or `b`.
pub fn split_root(name: &str) -> (&str, &str) {
    let mut chars = name.char_indices();
    let Some((_, first)) = chars.next() else {
        return ("", "");
    };
    let mut end = first.len_utf8();
    if let Some((idx, accidental @ ('#' | 'b'))) = chars.next() {
        end = idx + accidental.len_utf8();
    }
    name.split_at(end)
}
