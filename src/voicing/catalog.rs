// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Built-in chord voicings.

use super::{Positions, Voicing};

/// (name, start fret, positions from the 6th string to the 1st)
pub const BUILTIN_VOICINGS: &[(&str, u8, Positions)] = &[
    // C
    ("C", 1, [-1, 3, 2, 0, 1, 0]),
    ("CM7", 1, [-1, 3, 2, 0, 0, 0]),
    ("C7", 1, [-1, 3, 2, 3, 1, 0]),
    ("Cm", 1, [-1, 3, 5, 5, 4, 3]),
    ("Cadd9", 1, [-1, 3, 2, 0, 3, 0]),
    // C#
    ("C#m", 4, [-1, 1, 3, 3, 2, 1]),
    // D
    ("D", 1, [-1, -1, 0, 2, 3, 2]),
    ("Dm", 1, [-1, -1, 0, 2, 3, 1]),
    ("D7", 1, [-1, -1, 0, 2, 1, 2]),
    ("Dsus4", 1, [-1, -1, 0, 2, 3, 3]),
    // Eb
    ("Eb", 6, [-1, 1, 3, 3, 3, 1]),
    // E
    ("E", 1, [0, 2, 2, 1, 0, 0]),
    ("Em", 1, [0, 2, 2, 0, 0, 0]),
    ("E7", 1, [0, 2, 0, 1, 0, 0]),
    ("Esus4", 1, [0, 2, 2, 2, 0, 0]),
    // F, E-shape barre
    ("F", 1, [1, 3, 3, 2, 1, 1]),
    ("Fm", 1, [1, 3, 3, 1, 1, 1]),
    ("F#m", 2, [1, 3, 3, 1, 1, 1]),
    // G
    ("G", 1, [3, 2, 0, 0, 0, 3]),
    ("G7", 1, [3, 2, 0, 0, 0, 1]),
    ("Gm", 3, [1, 3, 3, 1, 1, 1]),
    // A
    ("A", 1, [-1, 0, 2, 2, 2, 0]),
    ("Am", 1, [-1, 0, 2, 2, 1, 0]),
    ("A7", 1, [-1, 0, 2, 0, 2, 0]),
    ("Asus4", 1, [-1, 0, 2, 2, 3, 0]),
    // Bb
    ("Bb", 1, [-1, 1, 3, 3, 3, 1]),
    // B, A-shape barre
    ("B", 2, [-1, 1, 3, 3, 3, 1]),
    ("Bm", 2, [-1, 1, 3, 3, 2, 1]),
];

/// Build the catalog voicings
pub fn builtin() -> impl Iterator<Item = Voicing> {
    BUILTIN_VOICINGS
        .iter()
        .map(|&(name, start_fret, positions)| Voicing::new(name, start_fret, positions))
}
