use crate::app::AppState;
use crate::menu::MenuAction;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    f.render_widget(Clear, area);

    let lines: Vec<Line> = MenuAction::ALL
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let selected = i == state.menu_cursor;
            let base = if action.needs_confirmation() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::White)
            };
            let style = if selected {
                base.bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                base
            };
            let marker = if selected { "▸ " } else { "  " };
            Line::from(Span::styled(format!("{marker}{}", action.label()), style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
