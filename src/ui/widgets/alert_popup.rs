// src/ui/widgets/alert_popup.rs

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Renders the blocking notification shown when the user asks for an
/// analysis without a usable image selection.
///
/// The `Clear` widget is essential here: it wipes the popup area before
/// rendering so the background UI does not bleed through, which is what makes
/// the notification read as modal.
pub fn render_alert_popup(frame: &mut Frame, area: Rect) {
    let alert_text = Text::from(vec![
        Line::from("NO IMAGE SELECTED".bold().yellow()),
        Line::from(""),
        Line::from("Please capture or select an image first!"),
        Line::from(""),
        Line::from("Press ".bold() + "Enter".bold().yellow() + " to continue".bold()),
    ]);

    let block = Block::default()
        .title("Alert")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let popup_area = centered_rect(50, 30, area);

    let popup = Paragraph::new(alert_text)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

/// Helper to create a centered rectangle for a popup, sized as a percentage
/// of the parent area.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
