use crate::controller::CourseList;
use crate::course::{format_day, Course, Notice};
use crate::input::{Action, InputContext, OverlayMode};
use crate::listing::{ListQuery, SortField};
use crate::menu::{ActionOutcome, MenuAction, PointerTarget, QuickAction};
use crate::prompt::ScriptedPrompter;
use crate::stats::DashboardStats;
use std::cmp::Reverse;
use std::time::Instant;

// UI constants
pub const TOAST_TTL_SECS: u64 = 5;
pub const ERROR_TTL_SECS: u64 = 10;
pub const NARROW_WIDTH_THRESHOLD: u16 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Courses,
    Notifications,
    Recommendations,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Courses => "Kursverwaltung",
            Page::Notifications => "Benachrichtigungen",
            Page::Recommendations => "KI-Empfehlungen",
        }
    }
}

/// What a left click landed on, resolved from screen geometry by `tui::layout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    SortHeader(SortField),
    /// Menu trigger of the row at this display position.
    Trigger(usize),
    MenuEntry(usize),
    /// Border of the menu popup.
    MenuFrame,
    Row(usize),
    Elsewhere,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub timestamp: Instant,
}

pub struct DetailOverlay {
    pub title: String,
    pub lines: Vec<(String, String)>,
}

pub struct ConfirmOverlay {
    pub title: String,
    pub message: String,
    pub course_id: String,
}

/// At most one overlay active at a time (not a stack). New overlay replaces previous.
pub enum ActiveOverlay {
    None,
    Detail(DetailOverlay),
    Confirm(ConfirmOverlay),
}

/// Immutable configuration set at startup.
pub struct AppConfig {
    pub version_string: String,
    pub desktop_notify: bool,
}

pub struct AppState {
    pub config: AppConfig,

    // Data
    pub list: CourseList,
    pub notices: Vec<Notice>,
    pub recommendations: Vec<Course>,
    pub stats: DashboardStats,

    // Navigation
    pub page: Page,
    pub cursor: usize,
    pub page_scroll: usize,
    pub search_mode: bool,
    pub menu_cursor: usize,

    // Active overlay (mutually exclusive)
    pub overlay: ActiveOverlay,

    // Transient UI
    pub toasts: Vec<Toast>,
    pub error: Option<(String, Instant)>,
    pub should_quit: bool,

    /// Acknowledgements waiting to be mirrored as desktop notifications.
    pub desktop_outbox: Vec<String>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        courses: Vec<Course>,
        mut notices: Vec<Notice>,
        mut recommendations: Vec<Course>,
        query: ListQuery,
    ) -> Self {
        let stats = DashboardStats::compute(&courses, &notices);
        // ISO dates, newest first
        notices.sort_by(|a, b| b.date.cmp(&a.date));
        recommendations.sort_by_key(|c| Reverse(c.ai_recommendation_score));
        Self {
            config,
            list: CourseList::with_query(courses, query),
            notices,
            recommendations,
            stats,
            page: Page::Courses,
            cursor: 0,
            page_scroll: 0,
            search_mode: false,
            menu_cursor: 0,
            overlay: ActiveOverlay::None,
            toasts: Vec::new(),
            error: None,
            should_quit: false,
            desktop_outbox: Vec::new(),
        }
    }

    pub fn selected_course(&self) -> Option<&Course> {
        self.list.visible_at(self.cursor)
    }

    fn clamp_cursor(&mut self) {
        let len = self.list.visible_len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    fn page_len(&self) -> usize {
        match self.page {
            Page::Courses => self.list.visible_len(),
            Page::Notifications => self.notices.len(),
            Page::Recommendations => self.recommendations.len(),
        }
    }

    pub fn move_cursor_up(&mut self) {
        match self.page {
            Page::Courses => self.cursor = self.cursor.saturating_sub(1),
            _ => self.page_scroll = self.page_scroll.saturating_sub(1),
        }
    }

    pub fn move_cursor_down(&mut self) {
        let len = self.page_len();
        match self.page {
            Page::Courses => {
                if len > 0 && self.cursor < len - 1 {
                    self.cursor += 1;
                }
            }
            _ => {
                if len > 0 && self.page_scroll < len - 1 {
                    self.page_scroll += 1;
                }
            }
        }
    }

    pub fn set_page(&mut self, page: Page) {
        if self.page != page {
            self.list.close_menu();
            self.search_mode = false;
            self.page_scroll = 0;
            self.page = page;
        }
    }

    // --- Search, filter, sort ---

    pub fn start_search(&mut self) {
        self.list.close_menu();
        self.search_mode = true;
    }

    pub fn end_search(&mut self) {
        self.search_mode = false;
    }

    pub fn search_input(&mut self, c: char) {
        self.list.push_search_char(c);
        self.clamp_cursor();
    }

    pub fn search_backspace(&mut self) {
        self.list.pop_search_char();
        self.clamp_cursor();
    }

    pub fn clear_search(&mut self) {
        self.list.set_search("");
        self.clamp_cursor();
    }

    pub fn cycle_filter(&mut self) {
        self.list.cycle_status_filter();
        self.clamp_cursor();
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        let selected = self.selected_course().map(|c| c.id.clone());
        self.list.toggle_sort(field);
        // Keep the same course under the cursor
        if let Some(pos) = selected.and_then(|id| self.list.position_of(&id)) {
            self.cursor = pos;
        }
        self.clamp_cursor();
    }

    // --- Row menu ---

    pub fn menu_is_open(&self) -> bool {
        self.list.menu().is_open()
    }

    pub fn toggle_menu_for_selected(&mut self) {
        if let Some(id) = self.selected_course().map(|c| c.id.clone()) {
            self.toggle_menu_for(&id);
        }
    }

    pub fn toggle_menu_for(&mut self, id: &str) {
        self.list.toggle_menu(id);
        self.menu_cursor = 0;
        if let Some(pos) = self.list.position_of(id) {
            self.cursor = pos;
        }
    }

    pub fn close_menu(&mut self) {
        self.list.close_menu();
    }

    pub fn menu_up(&mut self) {
        self.menu_cursor = self.menu_cursor.saturating_sub(1);
    }

    pub fn menu_down(&mut self) {
        if self.menu_cursor + 1 < MenuAction::ALL.len() {
            self.menu_cursor += 1;
        }
    }

    pub fn select_menu_entry(&mut self) {
        if let Some(&action) = MenuAction::ALL.get(self.menu_cursor) {
            self.select_menu_action(action);
        }
    }

    /// Delete opens the confirm overlay and leaves the menu open until answered.
    pub fn select_menu_action(&mut self, action: MenuAction) {
        let Some(id) = self.list.menu().open_id().map(str::to_string) else {
            return;
        };
        if action.needs_confirmation() {
            let Some(course) = self.list.find(&id) else {
                self.list.close_menu();
                return;
            };
            self.overlay = ActiveOverlay::Confirm(ConfirmOverlay {
                title: "Kurs löschen".to_string(),
                message: MenuAction::confirmation_prompt(course),
                course_id: id,
            });
            return;
        }
        self.run_menu_action(action, false);
    }

    fn run_menu_action(&mut self, action: MenuAction, answer: bool) -> ActionOutcome {
        let mut prompter = ScriptedPrompter {
            answer,
            ..Default::default()
        };
        let outcome = self.list.select_action(action, &mut prompter);
        for msg in prompter.notices {
            self.acknowledge(msg);
        }
        outcome
    }

    // --- Confirm overlay ---

    pub fn has_confirm_overlay(&self) -> bool {
        matches!(self.overlay, ActiveOverlay::Confirm(_))
    }

    pub fn confirm_yes(&mut self) -> ActionOutcome {
        self.resolve_confirm(true)
    }

    pub fn confirm_no(&mut self) -> ActionOutcome {
        self.resolve_confirm(false)
    }

    fn resolve_confirm(&mut self, answer: bool) -> ActionOutcome {
        if !self.has_confirm_overlay() {
            return ActionOutcome::Ignored;
        }
        self.overlay = ActiveOverlay::None;
        self.run_menu_action(MenuAction::Delete, answer)
    }

    // --- Quick actions and detail overlay ---

    pub fn quick_edit_selected(&mut self) {
        let Some(id) = self.selected_course().map(|c| c.id.clone()) else {
            return;
        };
        let mut prompter = ScriptedPrompter::default();
        self.list.quick_action(&id, QuickAction::Edit, &mut prompter);
        for msg in prompter.notices {
            self.acknowledge(msg);
        }
    }

    pub fn show_details_selected(&mut self) {
        let Some(id) = self.selected_course().map(|c| c.id.clone()) else {
            return;
        };
        let mut prompter = ScriptedPrompter::default();
        let detail = self
            .list
            .quick_action(&id, QuickAction::View, &mut prompter)
            .map(course_detail);
        for msg in prompter.notices {
            self.acknowledge(msg);
        }
        if let Some(detail) = detail {
            self.overlay = ActiveOverlay::Detail(detail);
        }
    }

    pub fn has_detail_overlay(&self) -> bool {
        matches!(self.overlay, ActiveOverlay::Detail(_))
    }

    pub fn close_detail_overlay(&mut self) {
        if matches!(self.overlay, ActiveOverlay::Detail(_)) {
            self.overlay = ActiveOverlay::None;
        }
    }

    // --- Pointer ---

    /// Left button down. Overlays are modal and swallow clicks.
    pub fn click(&mut self, target: ClickTarget) {
        if !matches!(self.overlay, ActiveOverlay::None) || self.page != Page::Courses {
            return;
        }
        let trigger_id = match target {
            ClickTarget::Trigger(pos) => self.list.visible_at(pos).map(|c| c.id.clone()),
            _ => None,
        };
        let menu_target = match (&target, &trigger_id) {
            (ClickTarget::MenuEntry(_) | ClickTarget::MenuFrame, _) => PointerTarget::Menu,
            (ClickTarget::Trigger(_), Some(id)) => PointerTarget::Trigger(id.clone()),
            _ => PointerTarget::Outside,
        };
        self.list.pointer_down(&menu_target);

        match target {
            ClickTarget::SortHeader(field) => self.toggle_sort(field),
            ClickTarget::Trigger(_) => {
                if let Some(id) = trigger_id {
                    self.toggle_menu_for(&id);
                }
            }
            ClickTarget::MenuEntry(idx) => {
                self.menu_cursor = idx;
                self.select_menu_entry();
            }
            ClickTarget::Row(pos) => {
                if pos < self.list.visible_len() {
                    self.cursor = pos;
                }
            }
            ClickTarget::MenuFrame | ClickTarget::Elsewhere => {}
        }
    }

    // --- Keyboard ---

    pub fn input_context(&self) -> InputContext {
        InputContext {
            has_error: self.error.is_some(),
            search_mode: self.search_mode,
            menu_open: self.menu_is_open(),
            overlay: match self.overlay {
                ActiveOverlay::None => OverlayMode::None,
                ActiveOverlay::Detail(_) => OverlayMode::Detail,
                ActiveOverlay::Confirm(_) => OverlayMode::Confirm,
            },
            page: self.page,
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::DismissError => self.clear_error(),
            Action::MoveUp => self.move_cursor_up(),
            Action::MoveDown => self.move_cursor_down(),
            Action::StartSearch => self.start_search(),
            Action::SearchInput(c) => self.search_input(c),
            Action::SearchBackspace => self.search_backspace(),
            Action::EndSearch => self.end_search(),
            Action::ClearSearch => self.clear_search(),
            Action::CycleFilter => self.cycle_filter(),
            Action::SortBy(field) => self.toggle_sort(field),
            Action::ToggleMenu => self.toggle_menu_for_selected(),
            Action::MenuUp => self.menu_up(),
            Action::MenuDown => self.menu_down(),
            Action::MenuSelect => self.select_menu_entry(),
            Action::CloseMenu => self.close_menu(),
            Action::QuickEdit => self.quick_edit_selected(),
            Action::ShowDetails => self.show_details_selected(),
            Action::ShowPage(page) => self.set_page(page),
            Action::ConfirmYes => {
                self.confirm_yes();
            }
            Action::ConfirmNo => {
                self.confirm_no();
            }
            Action::CloseOverlay => self.close_detail_overlay(),
            Action::None => {}
        }
    }

    // --- Toasts and errors ---

    fn acknowledge(&mut self, message: String) {
        if self.config.desktop_notify {
            self.desktop_outbox.push(message.clone());
        }
        self.add_toast(message);
    }

    pub fn add_toast(&mut self, message: String) {
        self.toasts.push(Toast {
            message,
            timestamp: Instant::now(),
        });
    }

    pub fn prune_toasts(&mut self) {
        let now = Instant::now();
        self.toasts
            .retain(|t| now.duration_since(t.timestamp).as_secs() < TOAST_TTL_SECS);
    }

    pub fn set_error(&mut self, msg: String) {
        self.error = Some((msg, Instant::now()));
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn prune_error(&mut self) {
        if let Some((_, ts)) = &self.error {
            if ts.elapsed().as_secs() >= ERROR_TTL_SECS {
                self.error = None;
            }
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|(msg, _)| msg.as_str())
    }
}

fn course_detail(course: &Course) -> DetailOverlay {
    let mut lines = vec![
        ("Beschreibung".to_string(), course.description.clone()),
        ("Status".to_string(), course.status.label().to_string()),
        ("Kategorie".to_string(), course.category.label().to_string()),
        ("Zeitraum".to_string(), course.period()),
        ("Module".to_string(), course.module_count.to_string()),
        ("Teilnehmer".to_string(), course.student_count.to_string()),
        ("Geändert".to_string(), format_day(&course.last_modified)),
    ];
    if let Some(instructor) = &course.instructor {
        lines.push(("Dozent".to_string(), instructor.clone()));
    }
    DetailOverlay {
        title: course.title.clone(),
        lines,
    }
}
