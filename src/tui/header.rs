use crate::app::{AppState, Page};
use crate::listing::StatusFilter;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let lines = vec![title_line(state), stats_line(state), query_line(state)];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(header, area);
}

fn title_line(state: &AppState) -> Line<'_> {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", state.config.version_string),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled(
            state.page.title(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    for (page, key) in [
        (Page::Notifications, "n"),
        (Page::Recommendations, "r"),
    ] {
        if state.page != page {
            spans.push(Span::styled(
                format!("  [{key}] {}", page.title()),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    if state.error_message().is_some() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            "!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn stats_line(state: &AppState) -> Line<'static> {
    let s = state.stats;
    let card = |label: &'static str, value: String, color: Color| {
        [
            Span::styled(format!(" {label} "), Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::raw("  "),
        ]
    };
    let spans: Vec<Span> = card("Aktive Kurse", s.active_courses.to_string(), Color::Green)
        .into_iter()
        .chain(card("In Planung", s.planned_courses.to_string(), Color::Yellow))
        .chain(card("Offene Updates", s.open_updates.to_string(), Color::Magenta))
        .chain(card("Teilnehmer", s.participants.to_string(), Color::Cyan))
        .collect();
    Line::from(spans)
}

fn query_line(state: &AppState) -> Line<'_> {
    if state.page != Page::Courses {
        let count = match state.page {
            Page::Notifications => format!(" {} Benachrichtigungen", state.notices.len()),
            _ => format!(" {} Empfehlungen für Sie", state.recommendations.len()),
        };
        return Line::from(Span::styled(count, Style::default().fg(Color::DarkGray)));
    }

    let query = state.list.query();
    let search_style = if state.search_mode {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let mut spans = vec![
        Span::styled(" Suche: ", Style::default().fg(Color::DarkGray)),
        Span::styled(query.search.as_str(), search_style),
    ];
    if state.search_mode {
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    } else if query.search.is_empty() {
        spans.push(Span::styled(
            "Kurse durchsuchen…",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let filter_style = match query.status {
        StatusFilter::All => Style::default().fg(Color::DarkGray),
        StatusFilter::Only(_) => Style::default().fg(Color::Magenta),
    };
    spans.push(Span::styled("  │ ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(query.status.label(), filter_style));
    spans.push(Span::styled("  │ ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(
        format!(
            "{} {}",
            query.sort_field.label(),
            query.direction.arrow()
        ),
        Style::default().fg(Color::DarkGray),
    ));
    spans.push(Span::styled(
        format!("  {}/{}", state.list.visible_len(), state.list.courses().len()),
        Style::default().fg(Color::DarkGray),
    ));
    Line::from(spans)
}
