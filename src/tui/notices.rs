use crate::app::AppState;
use crate::course::{format_day, NoticeKind};
use crate::tui::truncate;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Each notice takes a title line, a description line and a spacer.
const LINES_PER_NOTICE: usize = 3;

fn kind_icon(kind: NoticeKind) -> (&'static str, Color) {
    match kind {
        NoticeKind::Info => ("ℹ", Color::Blue),
        NoticeKind::Warning => ("⚠", Color::Yellow),
        NoticeKind::Success => ("✓", Color::Green),
    }
}

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    if state.notices.is_empty() {
        let para = Paragraph::new(" Keine neuen Benachrichtigungen")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(para, area);
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let per_page = (area.height as usize / LINES_PER_NOTICE).max(1);
    let offset = crate::tui::layout::scroll_offset(state.page_scroll, per_page);

    let mut lines: Vec<Line> = Vec::new();
    for (i, notice) in state.notices.iter().enumerate().skip(offset).take(per_page) {
        let (icon, color) = kind_icon(notice.kind);
        let selected = i == state.page_scroll;
        let title_style = if selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };
        let date = format_day(&notice.date);
        let title_max = width.saturating_sub(date.len() + 2);
        lines.push(Line::from(vec![
            Span::styled(format!(" {icon} "), Style::default().fg(color)),
            Span::styled(truncate(&notice.title, title_max), title_style),
            Span::styled(format!("  {date}"), Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", truncate(&notice.description, width)),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::raw(""));
    }

    f.render_widget(Paragraph::new(lines), area);
}
