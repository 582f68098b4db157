// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diagram geometry and tap classification.
//!
//! The diagram is a 6-string x 5-fret window. Vertically the canvas is cut
//! into six equal bands: the open/mute row above the nut followed by five
//! fret rows. When labels are shown, the left 15% of the width is a gutter
//! holding the start-fret number and the up/down arrows.

use super::DiagramMode;
use crate::voicing::{FRET_COUNT, MAX_START_FRET, MIN_START_FRET, STRING_COUNT};

/// Share of the width reserved for the gutter
const LABEL_WIDTH_RATIO: f32 = 0.15;

/// Open/mute row height relative to a fret band
const TOP_MARGIN_RATIO: f32 = 0.8;

/// Canvas size and inner padding supplied by the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramLayout {
    /// Canvas width
    pub width: f32,
    /// Canvas height
    pub height: f32,
    /// Horizontal padding on both sides of the board
    pub padding: f32,
}

impl DiagramLayout {
    /// Create a layout
    pub fn new(width: f32, height: f32, padding: f32) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }
}

/// What a tap landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapTarget {
    /// Upper half of the gutter: scroll the window toward the nut
    StartFretDown,
    /// Lower half of the gutter: scroll the window up the neck
    StartFretUp,
    /// The open/mute row above the nut
    OpenRow { string: usize },
    /// A fret row (1-5) on a string
    Fret { string: usize, fret: u8 },
    /// Outside the playable area
    Outside,
}

/// Resolved coordinates of one diagram instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramGeometry {
    layout: DiagramLayout,
    start_fret: u8,
    show_labels: bool,
    label_width: f32,
    board_start_x: f32,
    board_end_x: f32,
    string_spacing: f32,
    band_height: f32,
    top_margin: f32,
}

impl DiagramGeometry {
    /// Compute the geometry for a canvas, mode and start fret.
    ///
    /// Labels are shown when the diagram is interactive, or when the start
    /// fret is above 1 so read-only diagrams still reveal the position.
    pub fn new(layout: DiagramLayout, mode: DiagramMode, start_fret: u8) -> Self {
        let show_labels = mode == DiagramMode::Interactive || start_fret > MIN_START_FRET;
        let label_width = if show_labels {
            layout.width * LABEL_WIDTH_RATIO
        } else {
            0.0
        };
        let board_start_x = label_width + layout.padding;
        let board_end_x = layout.width - layout.padding;
        let string_spacing = (board_end_x - board_start_x) / (STRING_COUNT - 1) as f32;
        let band_height = layout.height / (FRET_COUNT + 1) as f32;

        Self {
            layout,
            start_fret,
            show_labels,
            label_width,
            board_start_x,
            board_end_x,
            string_spacing,
            band_height,
            top_margin: band_height * TOP_MARGIN_RATIO,
        }
    }

    /// Classify a tap at `(x, y)` in canvas coordinates
    pub fn classify(&self, x: f32, y: f32) -> TapTarget {
        if !x.is_finite() || !y.is_finite() {
            return TapTarget::Outside;
        }
        if self.show_labels && x < self.label_width {
            let (_, label_y) = self.label_center();
            return if y < label_y {
                TapTarget::StartFretDown
            } else {
                TapTarget::StartFretUp
            };
        }

        let adjusted_x = x - self.board_start_x;
        if adjusted_x > self.board_width() + self.layout.padding {
            return TapTarget::Outside;
        }
        let string = ((adjusted_x / self.string_spacing).round().max(0.0) as usize)
            .min(STRING_COUNT - 1);

        if y < self.top_margin {
            return TapTarget::OpenRow { string };
        }

        let fret = ((y - self.top_margin) / self.band_height).floor() as i64 + 1;
        if (1..=FRET_COUNT as i64).contains(&fret) {
            TapTarget::Fret {
                string,
                fret: fret as u8,
            }
        } else {
            TapTarget::Outside
        }
    }

    /// Whether the gutter is drawn and tappable
    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    /// Width of the gutter, 0 when labels are hidden
    pub fn label_width(&self) -> f32 {
        self.label_width
    }

    /// Left edge of the board (position of string 0)
    pub fn board_start_x(&self) -> f32 {
        self.board_start_x
    }

    /// Right edge of the board (position of string 5)
    pub fn board_end_x(&self) -> f32 {
        self.board_end_x
    }

    /// Distance between the outer strings
    pub fn board_width(&self) -> f32 {
        self.board_end_x - self.board_start_x
    }

    /// Distance between adjacent strings
    pub fn string_spacing(&self) -> f32 {
        self.string_spacing
    }

    /// Height of one of the six vertical bands
    pub fn band_height(&self) -> f32 {
        self.band_height
    }

    /// Height of the open/mute row, also the y of the nut
    pub fn top_margin(&self) -> f32 {
        self.top_margin
    }

    /// Horizontal position of a string
    pub fn string_x(&self, string: usize) -> f32 {
        self.board_start_x + string as f32 * self.string_spacing
    }

    /// Vertical position of a fret line; 0 is the nut, 5 the bottom line
    pub fn fret_line_y(&self, line: u8) -> f32 {
        self.top_margin + line as f32 * self.band_height
    }

    /// Vertical centre of a fretted dot
    pub fn dot_y(&self, fret: u8) -> f32 {
        self.top_margin + fret as f32 * self.band_height - self.band_height / 2.0
    }

    /// Vertical position of open/mute markers, `offset` above the nut
    pub fn marker_y(&self, offset: f32) -> f32 {
        self.top_margin - offset
    }

    /// Centre of the start-fret label, level with the first fret band.
    /// Gutter taps above this point scroll down, below it scroll up.
    pub fn label_center(&self) -> (f32, f32) {
        (
            self.label_width / 2.0,
            self.top_margin + self.band_height * 0.5,
        )
    }

    /// The up arrow can still lower the start fret
    pub fn up_enabled(&self) -> bool {
        self.start_fret > MIN_START_FRET
    }

    /// The down arrow can still raise the start fret
    pub fn down_enabled(&self) -> bool {
        self.start_fret < MAX_START_FRET
    }

    /// The nut is drawn thick only when the window starts at the first fret
    pub fn thick_nut(&self) -> bool {
        self.start_fret == MIN_START_FRET
    }
}
