// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Songs and the songbook.
//!
//! Songs carry performance metadata (tempo, capo, tuning) and an ordered
//! list of parts. The songbook is the list of songs, split into favorites
//! and the rest for display.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::part::SongPart;

/// Artist used when none is given
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

fn default_artist() -> String {
    UNKNOWN_ARTIST.to_string()
}

fn default_tuning() -> String {
    "Standard".to_string()
}

/// A song with its parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Song title
    pub title: String,
    /// Performing artist
    #[serde(default = "default_artist")]
    pub artist: String,
    /// Pinned to the favorites list
    #[serde(default)]
    pub favorite: bool,
    /// Tempo in BPM, if known
    #[serde(default)]
    pub bpm: Option<u16>,
    /// Capo fret, if any
    #[serde(default)]
    pub capo: Option<u8>,
    /// Guitar tuning
    #[serde(default = "default_tuning")]
    pub tuning: String,
    /// Reference recording
    #[serde(default)]
    pub link: Option<String>,
    /// Parts in order
    #[serde(default)]
    pub parts: Vec<SongPart>,
}

impl Song {
    /// Create a song with default metadata
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: default_artist(),
            favorite: false,
            bpm: None,
            capo: None,
            tuning: default_tuning(),
            link: None,
            parts: Vec::new(),
        }
    }

    /// Builder: set the artist, blank falls back to the unknown artist
    pub fn with_artist(mut self, artist: &str) -> Self {
        self.artist = normalize_artist(artist);
        self
    }

    /// Append a part
    pub fn add_part(&mut self, part: SongPart) {
        self.parts.push(part);
    }

    /// Remove the part at `index`
    pub fn remove_part(&mut self, index: usize) -> Option<SongPart> {
        (index < self.parts.len()).then(|| self.parts.remove(index))
    }

    /// Part by index
    pub fn part(&self, index: usize) -> Option<&SongPart> {
        self.parts.get(index)
    }

    /// Mutable part by index
    pub fn part_mut(&mut self, index: usize) -> Option<&mut SongPart> {
        self.parts.get_mut(index)
    }

    /// Total number of chords across parts
    pub fn chord_count(&self) -> usize {
        self.parts.iter().map(|p| p.chords.len()).sum()
    }
}

fn normalize_artist(artist: &str) -> String {
    let artist = artist.trim();
    if artist.is_empty() {
        default_artist()
    } else {
        artist.to_string()
    }
}

/// Every song the musician keeps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Songbook {
    songs: Vec<Song>,
}

impl Songbook {
    /// Create an empty songbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing list of songs
    pub fn from_songs(songs: Vec<Song>) -> Self {
        Self { songs }
    }

    /// Add a song. Blank titles are ignored; returns the new index.
    pub fn add_song(&mut self, title: &str, artist: &str) -> Option<usize> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        self.songs.push(Song::new(title).with_artist(artist));
        debug!(title, "song added");
        Some(self.songs.len() - 1)
    }

    /// Change title and artist; blank titles are ignored
    pub fn update_song(&mut self, index: usize, title: &str, artist: &str) -> bool {
        let title = title.trim();
        match self.songs.get_mut(index) {
            Some(song) if !title.is_empty() => {
                song.title = title.to_string();
                song.artist = normalize_artist(artist);
                true
            }
            _ => false,
        }
    }

    /// Flip the favorite flag, returning the new value
    pub fn toggle_favorite(&mut self, index: usize) -> Option<bool> {
        let song = self.songs.get_mut(index)?;
        song.favorite = !song.favorite;
        Some(song.favorite)
    }

    /// Remove a song
    pub fn remove_song(&mut self, index: usize) -> Option<Song> {
        (index < self.songs.len()).then(|| self.songs.remove(index))
    }

    /// Song by index
    pub fn song(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    /// Mutable song by index
    pub fn song_mut(&mut self, index: usize) -> Option<&mut Song> {
        self.songs.get_mut(index)
    }

    /// All songs in insertion order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Favorite songs
    pub fn favorites(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter().filter(|s| s.favorite)
    }

    /// Songs that are not favorites
    pub fn others(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter().filter(|s| !s.favorite)
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// True if there are no songs
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
