use crate::app::{ActiveOverlay, AppState, Page};
use crate::tui::{
    confirm_overlay, detail_overlay, footer, header, layout, menu_popup, notices,
    recommendations, table,
};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render(f: &mut Frame, state: &AppState) {
    let regions = layout::regions(f.area());

    header::render(f, regions.header, state);
    match state.page {
        Page::Courses => {
            table::render(f, regions.body, state);
            if let Some(menu) = layout::menu_area(regions.body, state) {
                menu_popup::render(f, menu, state);
            }
        }
        Page::Notifications => notices::render(f, regions.body, state),
        Page::Recommendations => recommendations::render(f, regions.body, state),
    }
    footer::render(f, regions.footer, state);

    // Error overlay
    if let Some(err) = state.error_message() {
        let area = f.area();
        if area.height > 6 && area.width >= 4 {
            let err_area = Rect {
                x: area.x + 1,
                y: area.y + area.height.saturating_sub(5),
                width: area.width.saturating_sub(2),
                height: 3,
            };
            let err_widget = Paragraph::new(err.to_owned())
                .style(Style::default().fg(Color::Red))
                .block(
                    Block::default()
                        .title(" Fehler ")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red)),
                )
                .wrap(Wrap { trim: true });
            f.render_widget(err_widget, err_area);
        }
    }

    // Overlay (drawn on top of everything)
    match &state.overlay {
        ActiveOverlay::Detail(overlay) => detail_overlay::render(f, overlay),
        ActiveOverlay::Confirm(overlay) => confirm_overlay::render(f, overlay),
        ActiveOverlay::None => {}
    }
}
