// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Terminal chord editor.
//!
//! Provides a ratatui-based diagram editor: the fretboard widget, the
//! editor state driven by keys and mouse clicks, and the terminal app loop.

mod fretboard;

pub use fretboard::FretboardWidget;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tracing::info;

use crate::config::DiagramSettings;
use crate::fretboard::{DiagramEdit, DiagramLayout, DiagramMode, FretboardInput};
use crate::voicing::{Voicing, VoicingStore};

/// Result of a key press in the editor
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    /// No action needed
    None,
    /// Quit the editor
    Quit,
    /// The chord was saved to the custom overlay
    Saved(Voicing),
    /// Saving was refused (empty name)
    SaveRejected,
    /// The diagram was filled from the library
    AutoFilled,
    /// No library voicing for the name
    NotFound,
    /// The diagram was cleared
    Cleared,
    /// The custom chord was removed from the overlay
    Removed,
    /// No custom chord under the name; built-in chords stay
    NotCustom,
}

/// Editor state, independent of the terminal
#[derive(Debug, Clone)]
pub struct Editor {
    name: String,
    input: FretboardInput,
    settings: DiagramSettings,
    diagram_area: Rect,
    status: Option<String>,
    running: bool,
}

impl Editor {
    /// Open the editor on a chord name, seeded with `voicing`
    pub fn new(name: impl Into<String>, voicing: &Voicing, settings: DiagramSettings) -> Self {
        let layout = DiagramLayout::new(0.0, 0.0, settings.padding);
        Self {
            name: name.into(),
            input: FretboardInput::new(layout, DiagramMode::Interactive, voicing),
            settings,
            diagram_area: Rect::default(),
            status: None,
            running: true,
        }
    }

    /// Chord name being edited
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Diagram input state
    pub fn input(&self) -> &FretboardInput {
        &self.input
    }

    /// Display settings
    pub fn settings(&self) -> DiagramSettings {
        self.settings
    }

    /// Current status line
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Check if running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Record where the diagram was drawn so clicks map onto it
    pub fn set_diagram_area(&mut self, area: Rect) {
        self.diagram_area = area;
        self.input.set_layout(DiagramLayout::new(
            area.width as f32,
            area.height as f32,
            self.settings.padding,
        ));
    }

    /// Area the diagram was last drawn in
    pub fn diagram_area(&self) -> Rect {
        self.diagram_area
    }

    /// Handle a key event
    pub fn handle_key(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        store: &mut VoicingStore,
    ) -> EditorAction {
        match (code, modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Esc, KeyModifiers::NONE)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.running = false;
                EditorAction::Quit
            }

            (KeyCode::Char('s'), KeyModifiers::NONE) => {
                if self.name.trim().is_empty() {
                    self.status = Some("Enter a chord name first".to_string());
                    return EditorAction::SaveRejected;
                }
                let voicing = self.input.to_voicing(self.name.clone());
                store.add_custom_chord(&voicing.name, voicing.start_fret, voicing.positions);
                info!(name = %voicing.name, "chord saved from editor");
                self.status = Some(format!("Saved {}", voicing));
                EditorAction::Saved(voicing)
            }

            (KeyCode::Char('a'), KeyModifiers::NONE) => {
                if self.input.auto_fill(&self.name, store) {
                    self.status = Some(format!("Loaded {} from library", self.name));
                    EditorAction::AutoFilled
                } else {
                    self.status = Some(format!("No voicing for {}", self.name));
                    EditorAction::NotFound
                }
            }

            (KeyCode::Char('d'), KeyModifiers::NONE) => {
                if !store.remove_chord(&self.name) {
                    self.status = Some(format!("{} is not a custom chord", self.name));
                    return EditorAction::NotCustom;
                }
                info!(name = %self.name, "chord removed from editor");
                // Show whatever the library still has under the name
                if !self.input.auto_fill(&self.name, store) {
                    self.input.reset();
                }
                self.status = Some(format!("Removed {}", self.name));
                EditorAction::Removed
            }

            (KeyCode::Char('c'), KeyModifiers::NONE) => {
                self.input.reset();
                self.status = Some("Cleared".to_string());
                EditorAction::Cleared
            }

            _ => EditorAction::None,
        }
    }

    /// Handle a left click at a terminal cell
    pub fn handle_click(&mut self, column: u16, row: u16) -> Option<DiagramEdit> {
        let area = self.diagram_area;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        if !inside {
            return None;
        }

        // Cell centres in diagram coordinates
        let x = (column - area.x) as f32 + 0.5;
        let y = (row - area.y) as f32 + 0.5;
        let edit = self.input.tap(x, y);
        if edit.is_some() {
            self.status = None;
        }
        edit
    }
}

/// Terminal editor application
pub struct App {
    /// Terminal handle
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Target frame rate
    frame_rate: u32,
}

impl App {
    /// Set up the terminal
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            frame_rate: 30,
        })
    }

    /// Run the editor until the user quits
    pub fn run(&mut self, editor: &mut Editor, store: &mut VoicingStore) -> io::Result<()> {
        while editor.is_running() {
            self.draw(editor)?;

            match self.poll_event()? {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    editor.handle_key(key.code, key.modifiers, store);
                }
                Some(Event::Mouse(mouse))
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
                {
                    editor.handle_click(mouse.column, mouse.row);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Poll for events with timeout
    fn poll_event(&self) -> io::Result<Option<Event>> {
        let timeout = Duration::from_millis(1000 / self.frame_rate as u64);
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    /// Draw the UI
    fn draw(&mut self, editor: &mut Editor) -> io::Result<()> {
        self.terminal.draw(|frame| render_editor(frame, editor))?;
        Ok(())
    }

    /// Restore the terminal
    fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Render the whole editor screen
fn render_editor(frame: &mut Frame, editor: &mut Editor) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(14),   // Diagram
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    // Keep the diagram roughly square in cells
    let diagram = Rect {
        width: chunks[0].width.min(40),
        ..chunks[0]
    };

    let title = Span::styled(
        format!(" {} ", display_name(editor.name())),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    );
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(diagram);
    editor.set_diagram_area(inner);

    frame.render_widget(
        FretboardWidget::from_input(editor.input())
            .settings(editor.settings())
            .block(block),
        diagram,
    );

    render_status_bar(frame, chunks[1], editor);
}

fn display_name(name: &str) -> &str {
    if name.trim().is_empty() {
        "(unnamed)"
    } else {
        name
    }
}

/// Render status bar
fn render_status_bar(frame: &mut Frame, area: Rect, editor: &Editor) {
    let line = match editor.status() {
        Some(msg) => Line::from(Span::styled(msg, Style::default().fg(Color::Yellow))),
        None => Line::from(Span::styled(
            " click: edit | s: Save | a: Auto-fill | d: Delete | c: Clear | q: Quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
