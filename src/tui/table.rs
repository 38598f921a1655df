use crate::app::AppState;
use crate::course::{Course, CourseStatus};
use crate::listing::SortField;
use crate::tui::layout::{self, Columns};
use crate::tui::truncate;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

pub const TRIGGER: &str = "⋮";

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let cols = layout::columns(area);
    render_header_row(f, area, &cols, state);

    if state.list.visible_len() == 0 {
        if area.height > 1 {
            let msg = if state.list.courses().is_empty() {
                "Noch keine Kurse angelegt"
            } else {
                "Keine Kurse gefunden"
            };
            let para = Paragraph::new(msg).style(Style::default().fg(Color::DarkGray));
            f.render_widget(para, Rect::new(area.x + 1, area.y + 1, area.width.saturating_sub(1), 1));
        }
        return;
    }

    let height = layout::table_rows(area);
    let offset = layout::scroll_offset(state.cursor, height);
    for (i, course) in state.list.visible().enumerate().skip(offset).take(height) {
        let y = area.y + 1 + (i - offset) as u16;
        let menu_open = state.list.menu().is_open_for(&course.id);
        render_row(f, area, &cols, y, course, i == state.cursor, menu_open);
    }
}

fn cell(r: Rect, y: u16) -> Rect {
    Rect::new(r.x, y, r.width, 1)
}

fn render_header_row(f: &mut Frame, area: Rect, cols: &Columns, state: &AppState) {
    let query = state.list.query();
    let label_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);
    let active_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    for (field, rect) in [
        (SortField::Title, cols.title),
        (SortField::Status, cols.status),
        (SortField::StartDate, cols.period),
    ] {
        if rect.width == 0 {
            continue;
        }
        let (text, style) = if query.sort_field == field {
            (
                format!("{} {}", field.label(), query.direction.arrow()),
                active_style,
            )
        } else {
            (field.label().to_string(), label_style)
        };
        f.render_widget(
            Paragraph::new(Span::styled(truncate(&text, rect.width as usize), style)),
            cell(rect, area.y),
        );
    }

    let students = if cols.students.width >= 10 { "Teilnehmer" } else { "TN" };
    f.render_widget(
        Paragraph::new(Span::styled(students, label_style)),
        cell(cols.students, area.y),
    );
}

fn status_style(status: CourseStatus) -> Style {
    let color = match status {
        CourseStatus::Active => Color::Green,
        CourseStatus::Draft => Color::Yellow,
        CourseStatus::Archived => Color::DarkGray,
    };
    Style::default().fg(color)
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    cols: &Columns,
    y: u16,
    course: &Course,
    is_selected: bool,
    menu_open: bool,
) {
    if is_selected {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::DarkGray)),
            Rect::new(area.x, y, area.width, 1),
        );
    }

    let title_style = if is_selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    f.render_widget(
        Paragraph::new(Span::styled(
            truncate(&course.title, cols.title.width as usize),
            title_style,
        )),
        cell(cols.title, y),
    );
    f.render_widget(
        Paragraph::new(Span::styled(course.status.label(), status_style(course.status))),
        cell(cols.status, y),
    );
    if cols.period.width > 0 {
        f.render_widget(
            Paragraph::new(Span::styled(
                truncate(&course.period(), cols.period.width as usize),
                Style::default().fg(Color::Gray),
            )),
            cell(cols.period, y),
        );
    }
    f.render_widget(
        Paragraph::new(Span::styled(
            course.student_count.to_string(),
            Style::default().fg(Color::Gray),
        ))
        .right_aligned(),
        cell(cols.students, y),
    );

    let trigger_style = if menu_open {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    f.render_widget(
        Paragraph::new(Span::styled(TRIGGER, trigger_style)).centered(),
        cell(cols.actions, y),
    );
}
