use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Clear, Paragraph},
    Frame,
};

use super::{Screen, Theme};
use crate::state::AppState;

pub fn render(frame: &mut Frame, state: &AppState) {
    let theme = Theme::new();

    // Main layout: header, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let header = Paragraph::new(format!(
        "CALCTERM - {}    [?] Help  [q] Quit",
        state.current_screen.title()
    ))
    .style(theme.title_style());
    frame.render_widget(header, chunks[0]);

    render_main_content(frame, chunks[1], state, &theme);

    if state.help_visible {
        let area = centered_rect(60, 70, chunks[1]);
        frame.render_widget(Clear, area);
        super::screens::help::render(frame, area, &theme);
    }

    render_status_bar(frame, chunks[2], state, &theme);
}

fn render_main_content(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    use super::screens;

    match state.current_screen {
        Screen::Home => screens::home::render(frame, area, state, theme),
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let status = match state.notifications.back() {
        Some(notification) => Paragraph::new(format!(
            "[{}] {}",
            notification.timestamp.format("%H:%M:%S"),
            notification.message
        ))
        .style(theme.notification_style(&notification.level)),
        None => Paragraph::new(format!(
            "Ready | In flight: {} | History: {}",
            state.in_flight(),
            state.history.len()
        ))
        .style(theme.muted_style()),
    };

    frame.render_widget(status, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
