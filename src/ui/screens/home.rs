use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::models::{CalcOutcome, Calculation};
use crate::state::AppState;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(1), // Endpoint
            Constraint::Min(0),    // History
        ])
        .split(area);

    let input = Paragraph::new(format!("> {}_", state.input))
        .style(theme.text_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Number (Enter to send)")
                .border_style(theme.primary_style()),
        );
    frame.render_widget(input, chunks[0]);

    let endpoint = Paragraph::new(format!(" Backend: {}", state.endpoint)).style(theme.muted_style());
    frame.render_widget(endpoint, chunks[1]);

    render_history(frame, chunks[2], state, theme);
}

fn render_history(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let items: Vec<ListItem> = if state.history.is_empty() {
        vec![ListItem::new("No calculations yet").style(theme.muted_style())]
    } else {
        state
            .history
            .iter()
            .map(|calc| history_item(calc, theme))
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(history_title(state)),
    );

    frame.render_widget(list, area);
}

fn history_title(state: &AppState) -> String {
    let waiting = state.history.iter().filter(|c| c.is_pending()).count();
    if waiting == 0 {
        format!("History ({})", state.history.len())
    } else {
        format!("History ({}, {} waiting)", state.history.len(), waiting)
    }
}

fn history_item<'a>(calc: &Calculation, theme: &Theme) -> ListItem<'a> {
    let time = calc.requested_at.format("%H:%M:%S").to_string();
    let elapsed = calc
        .elapsed_ms()
        .map(|ms| format!("  ({} ms)", ms))
        .unwrap_or_default();

    let (outcome, style) = match &calc.outcome {
        CalcOutcome::Pending => ("waiting for backend...".to_string(), theme.warning_style()),
        CalcOutcome::Succeeded(value) => (value.to_string(), theme.success_style()),
        CalcOutcome::Failed(failure) => (
            format!("{} error: {}", failure.kind.label(), failure.message),
            theme.error_style(),
        ),
    };

    ListItem::new(Line::from(vec![
        Span::styled(format!("{}  ", time), theme.muted_style()),
        Span::styled(format!("{} -> ", calc.input), theme.text_style()),
        Span::styled(outcome, style),
        Span::styled(elapsed, theme.muted_style()),
    ]))
}
