//! Status bar rendering with the pause state and key legend

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// The line is left-justified and the background style pads it to the full
/// width of `area`.
pub fn render_status_bar(frame: &mut Frame, area: Rect, paused: bool) {
    let state = if paused { "PAUSED" } else { "PLAYING" };
    let line = format!(" {} |  (Space) to Pause/Play | (q) to Quit ", state);

    let paragraph = Paragraph::new(line)
        .style(
            Style::default()
                .fg(DEFAULT_THEME.status_fg)
                .bg(DEFAULT_THEME.status_bg),
        )
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
