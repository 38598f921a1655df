//! The course list controller: owns the input collection plus the view state
//! (query and row menu) and keeps the displayed order in sync with both.

use crate::course::Course;
use crate::listing::{ListQuery, SortField, StatusFilter};
use crate::menu::{
    ActionOutcome, MenuAction, PointerTarget, QuickAction, RowMenu, DELETED_NOTICE,
};
use crate::prompt::Prompter;

pub struct CourseList {
    courses: Vec<Course>,
    query: ListQuery,
    menu: RowMenu,
    /// Indices into `courses`, always `query.apply(&courses)`.
    visible: Vec<usize>,
}

impl CourseList {
    pub fn new(courses: Vec<Course>) -> Self {
        Self::with_query(courses, ListQuery::default())
    }

    pub fn with_query(courses: Vec<Course>, query: ListQuery) -> Self {
        let visible = query.apply(&courses);
        Self {
            courses,
            query,
            menu: RowMenu::Closed,
            visible,
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn menu(&self) -> &RowMenu {
        &self.menu
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Course> + '_ {
        self.visible.iter().map(|&i| &self.courses[i])
    }

    /// Course at display position `pos`.
    pub fn visible_at(&self, pos: usize) -> Option<&Course> {
        self.visible.get(pos).map(|&i| &self.courses[i])
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.visible
            .iter()
            .position(|&i| self.courses[i].id == id)
    }

    pub fn find(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    fn refresh(&mut self) {
        self.visible = self.query.apply(&self.courses);
        tracing::debug!(
            search = %self.query.search,
            status = ?self.query.status,
            sort = ?self.query.sort_field,
            direction = ?self.query.direction,
            shown = self.visible.len(),
            "course list refreshed"
        );
    }

    // --- Query ---

    pub fn set_search(&mut self, text: &str) {
        if self.query.search != text {
            self.query.search = text.to_string();
            self.refresh();
        }
    }

    pub fn push_search_char(&mut self, c: char) {
        self.query.search.push(c);
        self.refresh();
    }

    pub fn pop_search_char(&mut self) {
        if self.query.search.pop().is_some() {
            self.refresh();
        }
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        if self.query.status != filter {
            self.query.status = filter;
            self.refresh();
        }
    }

    pub fn cycle_status_filter(&mut self) {
        self.set_status_filter(self.query.status.next());
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.query.toggle_sort(field);
        self.refresh();
    }

    // --- Row menu ---

    pub fn toggle_menu(&mut self, id: &str) {
        self.menu.toggle(id);
    }

    pub fn pointer_down(&mut self, target: &PointerTarget) {
        self.menu.pointer_down(target);
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
    }

    /// Runs `action` for the course whose menu is open, then closes the menu.
    pub fn select_action(
        &mut self,
        action: MenuAction,
        prompter: &mut dyn Prompter,
    ) -> ActionOutcome {
        let Some(id) = self.menu.open_id().map(str::to_string) else {
            return ActionOutcome::Ignored;
        };
        self.menu.close();
        let Some(course) = self.find(&id) else {
            tracing::warn!("menu was open for unknown course {id}");
            return ActionOutcome::Ignored;
        };

        tracing::info!(course = %id, action = action.name(), "row action");
        if let Some(msg) = action.notice(course) {
            prompter.notify(&msg);
            return ActionOutcome::Acknowledged(action);
        }

        if prompter.confirm(&MenuAction::confirmation_prompt(course)) {
            prompter.notify(DELETED_NOTICE);
            ActionOutcome::Acknowledged(action)
        } else {
            tracing::debug!(course = %id, "delete declined");
            ActionOutcome::Declined
        }
    }

    /// Inline row button. Leaves the menu alone.
    pub fn quick_action(
        &self,
        id: &str,
        action: QuickAction,
        prompter: &mut dyn Prompter,
    ) -> Option<&Course> {
        let course = self.find(id)?;
        prompter.notify(&action.notice(course));
        Some(course)
    }
}
