use ratatui::{
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: ratatui::layout::Rect, theme: &Theme) {
    let help_items = vec![
        "CALCTERM - remote calculator",
        "",
        "Global Keybindings:",
        "  q / Ctrl+C    - Quit application",
        "  ?             - Toggle this help",
        "  Esc           - Close help, clear input, or dismiss message",
        "",
        "Input:",
        "  0-9 . - + e   - Edit the number",
        "  Backspace     - Delete last character",
        "  Delete/Ctrl+U - Clear input",
        "  Enter         - Send to the backend",
        "  Ctrl+L        - Dismiss message",
    ];

    let list_items: Vec<ListItem> = help_items
        .iter()
        .map(|item| ListItem::new(*item))
        .collect();

    let list = List::new(list_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Help - Keybindings")
            .style(theme.title_style()),
    );

    frame.render_widget(list, area);
}
