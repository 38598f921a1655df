use crate::app::AppState;
use crate::course::Course;
use crate::tui::truncate;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const LINES_PER_CARD: usize = 4;

fn score_color(score: u8) -> Color {
    match score {
        95.. => Color::Green,
        90..=94 => Color::Cyan,
        _ => Color::Yellow,
    }
}

fn card(course: &Course, selected: bool, width: usize) -> Vec<Line<'static>> {
    let score = course.ai_recommendation_score.unwrap_or(0);
    let badge = format!(" {score}% Match ");
    let title_style = if selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };
    let title_max = width.saturating_sub(badge.len() + 2);

    let mut meta = vec![Span::styled(
        format!("   {}", course.category.label()),
        Style::default().fg(Color::Magenta),
    )];
    if let Some(instructor) = &course.instructor {
        meta.push(Span::styled(
            format!(" · {instructor}"),
            Style::default().fg(Color::Gray),
        ));
    }
    meta.push(Span::styled(
        format!(
            " · {} Module · {} Teilnehmer · {}",
            course.module_count,
            course.student_count,
            course.period()
        ),
        Style::default().fg(Color::DarkGray),
    ));

    vec![
        Line::from(vec![
            Span::styled(" ✦ ", Style::default().fg(Color::Yellow)),
            Span::styled(truncate(&course.title, title_max), title_style),
            Span::styled(
                badge,
                Style::default()
                    .fg(Color::Black)
                    .bg(score_color(score))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("   {}", truncate(&course.description, width)),
            Style::default().fg(Color::Gray),
        )),
        Line::from(meta),
        Line::raw(""),
    ]
}

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    if state.recommendations.is_empty() {
        let para = Paragraph::new(" Keine Empfehlungen verfügbar")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(para, area);
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let per_page = (area.height as usize / LINES_PER_CARD).max(1);
    let offset = crate::tui::layout::scroll_offset(state.page_scroll, per_page);

    let lines: Vec<Line> = state
        .recommendations
        .iter()
        .enumerate()
        .skip(offset)
        .take(per_page)
        .flat_map(|(i, course)| card(course, i == state.page_scroll, width))
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_colors() {
        assert_eq!(score_color(98), Color::Green);
        assert_eq!(score_color(93), Color::Cyan);
        assert_eq!(score_color(70), Color::Yellow);
    }

    #[test]
    fn card_has_fixed_height() {
        let course = crate::sample::recommendations().remove(0);
        assert_eq!(card(&course, false, 60).len(), LINES_PER_CARD);
    }
}
