use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Page};

fn hints(state: &AppState, narrow: bool) -> &'static [(&'static str, &'static str)] {
    if state.has_detail_overlay() {
        &[("v/q", "schließen")]
    } else if state.has_confirm_overlay() {
        &[("y", "löschen"), ("n", "abbrechen")]
    } else if state.page != Page::Courses {
        &[("j/k", "blättern"), ("n/r", "Seite"), ("q", "zurück")]
    } else if state.search_mode {
        &[("Enter/Esc", "Suche beenden"), ("⌫", "löschen")]
    } else if state.menu_is_open() {
        &[("j/k", "wählen"), ("Enter", "ausführen"), ("Esc", "schließen")]
    } else if narrow {
        &[
            ("j/k", "nav"),
            ("/", "suche"),
            ("f", "filter"),
            ("t/s/d", "sort"),
            ("m", "menü"),
            ("q", "ende"),
        ]
    } else {
        &[
            ("↑↓/jk", "Navigation"),
            ("/", "Suche"),
            ("f", "Filter"),
            ("t/s/d", "Sortierung"),
            ("m", "Menü"),
            ("e", "Bearbeiten"),
            ("v", "Details"),
            ("q", "Beenden"),
        ]
    }
}

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let narrow = area.width < crate::app::NARROW_WIDTH_THRESHOLD;

    // Latest toast wins over the key hints
    let line = if let Some(toast) = state.toasts.last() {
        Line::from(vec![
            Span::styled("★ ", Style::default().fg(Color::Yellow)),
            Span::styled(&toast.message, Style::default().fg(Color::Yellow)),
        ])
    } else {
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, desc)) in hints(state, narrow).iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                format!(" {desc}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    };

    let footer = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}
