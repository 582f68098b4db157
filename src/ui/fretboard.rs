// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord diagram widget.
//!
//! Draws a diagram into a cell grid, using the widget area's width and
//! height as the canvas so the same geometry classifies mouse clicks.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Widget},
};

use crate::config::DiagramSettings;
use crate::fretboard::{DiagramGeometry, DiagramLayout, DiagramMode, FretboardInput};
use crate::voicing::{root_string_index, Positions, Voicing, FRET_COUNT, MUTED, OPEN, STRING_COUNT};

/// Distance in cells between open/mute markers and the nut
const MARKER_OFFSET: f32 = 1.0;

/// Widget drawing one chord diagram
pub struct FretboardWidget<'a> {
    positions: Positions,
    start_fret: u8,
    mode: DiagramMode,
    settings: DiagramSettings,
    block: Option<Block<'a>>,
}

impl<'a> FretboardWidget<'a> {
    /// Create a widget for raw diagram values
    pub fn new(positions: Positions, start_fret: u8, mode: DiagramMode) -> Self {
        Self {
            positions,
            start_fret,
            mode,
            settings: DiagramSettings::default(),
            block: None,
        }
    }

    /// Read-only widget for a stored voicing
    pub fn from_voicing(voicing: &Voicing) -> Self {
        Self::new(voicing.positions, voicing.start_fret, DiagramMode::ReadOnly)
    }

    /// Widget mirroring an interactive diagram
    pub fn from_input(input: &FretboardInput) -> Self {
        Self::new(input.positions(), input.start_fret(), input.mode())
    }

    /// Set display settings
    pub fn settings(mut self, settings: DiagramSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set the block wrapper
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

/// Cell under a canvas point, if it lies inside the area
fn cell(area: Rect, x: f32, y: f32) -> Option<(u16, u16)> {
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let (cx, cy) = (x.floor() as u16, y.floor() as u16);
    (cx < area.width && cy < area.height).then(|| (area.x + cx, area.y + cy))
}

fn put(buf: &mut Buffer, area: Rect, x: f32, y: f32, symbol: &str, style: Style) {
    if let Some((cx, cy)) = cell(area, x, y) {
        buf.set_string(cx, cy, symbol, style);
    }
}

impl Widget for FretboardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = if let Some(block) = self.block {
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };
        if area.width == 0 || area.height == 0 {
            return;
        }

        let layout = DiagramLayout::new(
            area.width as f32,
            area.height as f32,
            self.settings.padding,
        );
        let geo = DiagramGeometry::new(layout, self.mode, self.start_fret);

        let board = Style::default().fg(Color::White);
        let dim = Style::default().fg(Color::DarkGray);
        let root = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);

        let nut_row = geo.fret_line_y(0).floor();
        let bottom_row = geo.fret_line_y(FRET_COUNT).floor();
        let first_col = geo.string_x(0).floor();
        let last_col = geo.string_x(STRING_COUNT - 1).floor();

        // Strings between the fret lines
        for string in 0..STRING_COUNT {
            let x = geo.string_x(string);
            let mut row = nut_row + 1.0;
            while row < bottom_row {
                put(buf, area, x, row, "│", board);
                row += 1.0;
            }
        }

        // Nut and fret lines
        for line in 0..=FRET_COUNT {
            let y = geo.fret_line_y(line);
            let (rule, joint) = match line {
                0 if geo.thick_nut() => ("═", "╤"),
                0 => ("─", "┬"),
                l if l == FRET_COUNT => ("─", "┴"),
                _ => ("─", "┼"),
            };
            let mut col = first_col;
            while col <= last_col {
                put(buf, area, col, y, rule, board);
                col += 1.0;
            }
            for string in 0..STRING_COUNT {
                put(buf, area, geo.string_x(string), y, joint, board);
            }
        }

        // Markers
        let root_string = root_string_index(&self.positions);
        for (string, &state) in self.positions.iter().enumerate() {
            let style = if self.settings.root_highlight && root_string == Some(string) {
                root
            } else {
                board
            };
            let x = geo.string_x(string);
            match state {
                MUTED => put(buf, area, x, geo.marker_y(MARKER_OFFSET), "x", style),
                OPEN => put(buf, area, x, geo.marker_y(MARKER_OFFSET), "o", style),
                fret => put(buf, area, x, geo.dot_y(fret as u8), "●", style),
            }
        }

        // Gutter
        if geo.show_labels() {
            let (label_x, label_y) = geo.label_center();
            let label = self.start_fret.to_string();
            let label_start = label_x - label.len() as f32 / 2.0;
            put(buf, area, label_start.max(0.0), label_y, &label, board);

            if self.mode == DiagramMode::Interactive {
                let up = if geo.up_enabled() { board } else { dim };
                let down = if geo.down_enabled() { board } else { dim };
                put(buf, area, label_x, label_y - 1.0, "▲", up);
                put(buf, area, label_x, label_y + 1.0, "▼", down);
            }
        }
    }
}
