use ratatui::style::Color;

pub struct Theme {
    pub live_cell: Color,
    pub status_fg: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    live_cell: Color::Rgb(166, 227, 161), // Green
    status_fg: Color::Rgb(205, 214, 244),
    status_bg: Color::Rgb(50, 50, 70), // Slightly lighter BG for the status row
};
