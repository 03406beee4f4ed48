// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Defines the areas of the application's user interface.
///
/// Each `Rect` represents one widget area on the terminal screen, so widgets
/// never have to recalculate dimensions themselves.
pub struct AppLayout {
    pub input: Rect,
    pub status: Rect,
    pub summary: Rect,
    pub footer: Rect,
}

/// Splits the frame into the input box at the top, the main content area in
/// the middle (surface status on the left, assessment summary on the right)
/// and a one-line footer at the bottom.
pub fn create_layout(frame_size: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main_chunks[1]);

    AppLayout {
        input: main_chunks[0],
        status: content_chunks[0],
        summary: content_chunks[1],
        footer: main_chunks[2],
    }
}
