// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Songs and their parts.
//!
//! This module provides:
//! - Parts: Named song sections holding chord voicings
//! - Songs: Metadata plus ordered parts
//! - Songbook: The song list with favorites

pub mod part;
pub mod song;

pub use part::SongPart;
pub use song::{Song, Songbook, UNKNOWN_ARTIST};
