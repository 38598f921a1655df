//! Contextual row menu: which course (if any) has its action menu open, and
//! the actions it offers.
//!
//! The menu knows nothing about geometry. The UI classifies each pointer-down
//! into a [`PointerTarget`] and the state machine only compares ids.

use crate::course::Course;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RowMenu {
    #[default]
    Closed,
    OpenFor(String),
}

/// Where a pointer-down landed, as seen by the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    /// Inside the open menu popup.
    Menu,
    /// On the menu trigger of the row with this course id.
    Trigger(String),
    Outside,
}

impl RowMenu {
    pub fn open_id(&self) -> Option<&str> {
        match self {
            RowMenu::Closed => None,
            RowMenu::OpenFor(id) => Some(id.as_str()),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, RowMenu::OpenFor(_))
    }

    pub fn is_open_for(&self, id: &str) -> bool {
        self.open_id() == Some(id)
    }

    /// Trigger click: opens for `id`, closes if already open for `id`,
    /// moves over if open for another row.
    pub fn toggle(&mut self, id: &str) {
        *self = if self.is_open_for(id) {
            RowMenu::Closed
        } else {
            RowMenu::OpenFor(id.to_string())
        };
    }

    /// Pointer-down anywhere except the popup and its own trigger closes the menu.
    pub fn pointer_down(&mut self, target: &PointerTarget) {
        let keep = match target {
            PointerTarget::Menu => true,
            PointerTarget::Trigger(id) => self.is_open_for(id),
            PointerTarget::Outside => false,
        };
        if !keep {
            self.close();
        }
    }

    pub fn close(&mut self) {
        *self = RowMenu::Closed;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Edit,
    Preview,
    Duplicate,
    Share,
    Archive,
    Delete,
}

impl MenuAction {
    /// Menu order, top to bottom.
    pub const ALL: [MenuAction; 6] = [
        MenuAction::Edit,
        MenuAction::Preview,
        MenuAction::Duplicate,
        MenuAction::Share,
        MenuAction::Archive,
        MenuAction::Delete,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MenuAction::Edit => "edit",
            MenuAction::Preview => "preview",
            MenuAction::Duplicate => "duplicate",
            MenuAction::Share => "share",
            MenuAction::Archive => "archive",
            MenuAction::Delete => "delete",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Edit => "Bearbeiten",
            MenuAction::Preview => "Vorschau",
            MenuAction::Duplicate => "Duplizieren",
            MenuAction::Share => "Freigeben",
            MenuAction::Archive => "Archivieren",
            MenuAction::Delete => "Löschen",
        }
    }

    pub fn needs_confirmation(self) -> bool {
        self == MenuAction::Delete
    }

    /// Notice shown right away. `None` for delete, which asks first.
    pub fn notice(self, course: &Course) -> Option<String> {
        let title = &course.title;
        match self {
            MenuAction::Edit => Some(format!("Kurs \"{title}\" wird bearbeitet")),
            MenuAction::Preview => Some(format!("Vorschau für \"{title}\" wird geöffnet")),
            MenuAction::Duplicate => Some(format!("Kurs \"{title}\" wird dupliziert")),
            MenuAction::Share => Some(format!(
                "Freigabeoptionen für \"{title}\" werden geöffnet"
            )),
            MenuAction::Archive => Some(format!("Kurs \"{title}\" wird archiviert")),
            MenuAction::Delete => None,
        }
    }

    pub fn confirmation_prompt(course: &Course) -> String {
        format!("Möchten Sie den Kurs \"{}\" wirklich löschen?", course.title)
    }
}

pub const DELETED_NOTICE: &str = "Kurs wurde gelöscht";

/// The two inline buttons on every row, next to the menu trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Edit,
    View,
}

impl QuickAction {
    pub fn notice(self, course: &Course) -> String {
        match self {
            QuickAction::Edit => format!("Schnellbearbeitung für \"{}\" gestartet", course.title),
            QuickAction::View => format!("Detailansicht für \"{}\" wird geöffnet", course.title),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Acknowledged(MenuAction),
    /// Delete was not confirmed.
    Declined,
    /// No menu was open, or its course is gone.
    Ignored,
}
