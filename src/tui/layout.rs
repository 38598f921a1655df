//! Screen geometry shared by the renderers and mouse hit testing.
//!
//! Everything here is derived from the frame area and the app state, so a
//! click is resolved against exactly what the last frame drew.

use crate::app::{AppState, ClickTarget, Page, NARROW_WIDTH_THRESHOLD};
use crate::listing::SortField;
use crate::menu::MenuAction;
use ratatui::layout::{Constraint, Layout, Position, Rect};

pub const HEADER_HEIGHT: u16 = 4;
pub const FOOTER_HEIGHT: u16 = 2;
pub const MENU_WIDTH: u16 = 18;
/// Entries plus top and bottom border.
pub const MENU_HEIGHT: u16 = MenuAction::ALL.len() as u16 + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn regions(area: Rect) -> Regions {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);
    Regions {
        header,
        body,
        footer,
    }
}

/// Course table columns. Each rect spans the full body height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub title: Rect,
    pub status: Rect,
    pub period: Rect,
    pub students: Rect,
    pub actions: Rect,
}

pub fn columns(body: Rect) -> Columns {
    let narrow = body.width < NARROW_WIDTH_THRESHOLD;
    let [title, status, period, students, actions] = Layout::horizontal([
        Constraint::Min(12),
        Constraint::Length(11),
        Constraint::Length(if narrow { 0 } else { 23 }),
        Constraint::Length(if narrow { 5 } else { 12 }),
        Constraint::Length(3),
    ])
    .spacing(1)
    .areas(body);
    Columns {
        title,
        status,
        period,
        students,
        actions,
    }
}

impl Columns {
    pub fn sort_field_at(&self, x: u16) -> Option<SortField> {
        let within = |r: Rect| r.width > 0 && x >= r.x && x < r.right();
        if within(self.title) {
            Some(SortField::Title)
        } else if within(self.status) {
            Some(SortField::Status)
        } else if within(self.period) {
            Some(SortField::StartDate)
        } else {
            None
        }
    }
}

/// Rows available for courses below the column header.
pub fn table_rows(body: Rect) -> usize {
    body.height.saturating_sub(1) as usize
}

/// First visible index so that `cursor` stays on screen.
pub fn scroll_offset(cursor: usize, visible_height: usize) -> usize {
    if visible_height == 0 {
        0
    } else if cursor >= visible_height {
        cursor - visible_height + 1
    } else {
        0
    }
}

/// Screen row of the course at display position `pos`, if scrolled into view.
pub fn row_y(body: Rect, state: &AppState, pos: usize) -> Option<u16> {
    let height = table_rows(body);
    let offset = scroll_offset(state.cursor, height);
    if pos < offset || pos >= offset + height {
        return None;
    }
    Some(body.y + 1 + (pos - offset) as u16)
}

/// Where the open row menu is drawn. `None` when closed or its row is not on screen.
pub fn menu_area(body: Rect, state: &AppState) -> Option<Rect> {
    let id = state.list.menu().open_id()?;
    let pos = state.list.position_of(id)?;
    let y = row_y(body, state, pos)?;
    let cols = columns(body);

    let width = MENU_WIDTH.min(body.width);
    let height = MENU_HEIGHT.min(body.height);
    let x = cols.actions.right().saturating_sub(width).max(body.x);
    let below = y + 1;
    let top = if below + height <= body.bottom() {
        below
    } else {
        y.saturating_sub(height).max(body.y)
    };
    Some(Rect::new(x, top, width, height))
}

/// Resolves a left click at (`column`, `row`) in a frame of size `area`.
pub fn hit_test(area: Rect, state: &AppState, column: u16, row: u16) -> ClickTarget {
    if state.page != Page::Courses {
        return ClickTarget::Elsewhere;
    }
    let point = Position::new(column, row);
    let body = regions(area).body;

    if let Some(menu) = menu_area(body, state) {
        if menu.contains(point) {
            let inner_top = menu.y + 1;
            let idx = row.checked_sub(inner_top).map(usize::from);
            return match idx {
                Some(i)
                    if i < MenuAction::ALL.len() && column > menu.x && column + 1 < menu.right() =>
                {
                    ClickTarget::MenuEntry(i)
                }
                _ => ClickTarget::MenuFrame,
            };
        }
    }

    if !body.contains(point) {
        return ClickTarget::Elsewhere;
    }
    let cols = columns(body);
    if row == body.y {
        return cols
            .sort_field_at(column)
            .map_or(ClickTarget::Elsewhere, ClickTarget::SortHeader);
    }

    let offset = scroll_offset(state.cursor, table_rows(body));
    let pos = offset + usize::from(row - body.y - 1);
    if pos >= state.list.visible_len() {
        return ClickTarget::Elsewhere;
    }
    if cols.actions.contains(point) {
        ClickTarget::Trigger(pos)
    } else {
        ClickTarget::Row(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppConfig;
    use crate::listing::ListQuery;
    use crate::sample;
    use pretty_assertions::assert_eq;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 30,
    };

    fn state() -> AppState {
        AppState::new(
            AppConfig {
                version_string: String::new(),
                desktop_notify: false,
            },
            sample::courses(),
            sample::notices(),
            sample::recommendations(),
            ListQuery::default(),
        )
    }

    #[test]
    fn regions_split_vertically() {
        let r = regions(AREA);
        assert_eq!(r.header.height, HEADER_HEIGHT);
        assert_eq!(r.footer.height, FOOTER_HEIGHT);
        assert_eq!(r.body.y, HEADER_HEIGHT);
        assert_eq!(r.body.height, 30 - HEADER_HEIGHT - FOOTER_HEIGHT);
    }

    #[test]
    fn columns_are_ordered_and_disjoint() {
        let c = columns(regions(AREA).body);
        assert!(c.title.right() <= c.status.x);
        assert!(c.status.right() <= c.period.x);
        assert!(c.period.right() <= c.students.x);
        assert!(c.students.right() <= c.actions.x);
        assert_eq!(c.actions.right(), AREA.right());
    }

    #[test]
    fn narrow_drops_period_column() {
        let c = columns(Rect::new(0, 0, 60, 10));
        assert_eq!(c.period.width, 0);
        assert!((0..60).all(|x| c.sort_field_at(x) != Some(SortField::StartDate)));
    }

    #[test]
    fn scroll_offset_keeps_cursor_visible() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(5, 5), 1);
        assert_eq!(scroll_offset(9, 5), 5);
        assert_eq!(scroll_offset(3, 0), 0);
    }

    #[test]
    fn header_click_maps_to_sort_field() {
        let state = state();
        let body = regions(AREA).body;
        let c = columns(body);
        assert_eq!(
            hit_test(AREA, &state, c.title.x, body.y),
            ClickTarget::SortHeader(SortField::Title)
        );
        assert_eq!(
            hit_test(AREA, &state, c.status.x + 1, body.y),
            ClickTarget::SortHeader(SortField::Status)
        );
        assert_eq!(
            hit_test(AREA, &state, c.period.x, body.y),
            ClickTarget::SortHeader(SortField::StartDate)
        );
        assert_eq!(hit_test(AREA, &state, c.students.x, body.y), ClickTarget::Elsewhere);
    }

    #[test]
    fn row_and_trigger_clicks() {
        let state = state();
        let body = regions(AREA).body;
        let c = columns(body);
        assert_eq!(hit_test(AREA, &state, c.title.x, body.y + 1), ClickTarget::Row(0));
        assert_eq!(hit_test(AREA, &state, c.actions.x, body.y + 3), ClickTarget::Trigger(2));
        // below the last course
        assert_eq!(hit_test(AREA, &state, c.actions.x, body.y + 10), ClickTarget::Elsewhere);
    }

    #[test]
    fn header_and_footer_are_elsewhere() {
        let state = state();
        assert_eq!(hit_test(AREA, &state, 5, 1), ClickTarget::Elsewhere);
        assert_eq!(hit_test(AREA, &state, 5, 29), ClickTarget::Elsewhere);
    }

    #[test]
    fn menu_opens_below_its_row() {
        let mut state = state();
        state.toggle_menu_for("3");
        let body = regions(AREA).body;
        let menu = menu_area(body, &state).unwrap();
        // course 3 is at display position 1
        assert_eq!(menu.y, body.y + 1 + 1 + 1);
        assert_eq!(menu.height, MENU_HEIGHT);
        assert_eq!(menu.right(), columns(body).actions.right());
    }

    #[test]
    fn menu_flips_above_near_bottom() {
        let mut state = state();
        state.toggle_menu_for("4");
        let small = Rect::new(0, 0, 100, 16);
        let body = regions(small).body;
        let menu = menu_area(body, &state).unwrap();
        assert!(menu.bottom() <= body.bottom());
        assert!(menu.y >= body.y);
    }

    #[test]
    fn menu_hidden_when_row_filtered_out() {
        let mut state = state();
        state.toggle_menu_for("4");
        state.cycle_filter(); // active only
        assert_eq!(menu_area(regions(AREA).body, &state), None);
    }

    #[test]
    fn clicks_inside_menu() {
        let mut state = state();
        state.toggle_menu_for("2");
        let menu = menu_area(regions(AREA).body, &state).unwrap();
        assert_eq!(hit_test(AREA, &state, menu.x + 2, menu.y + 1), ClickTarget::MenuEntry(0));
        assert_eq!(
            hit_test(AREA, &state, menu.x + 2, menu.y + 6),
            ClickTarget::MenuEntry(5)
        );
        assert_eq!(hit_test(AREA, &state, menu.x + 2, menu.y), ClickTarget::MenuFrame);
        assert_eq!(hit_test(AREA, &state, menu.x, menu.y + 2), ClickTarget::MenuFrame);
    }

    #[test]
    fn other_pages_have_no_targets() {
        let mut state = state();
        state.set_page(Page::Notifications);
        let body = regions(AREA).body;
        assert_eq!(hit_test(AREA, &state, 1, body.y), ClickTarget::Elsewhere);
    }
}
