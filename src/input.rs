use crate::app::Page;
use crate::listing::SortField;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    DismissError,
    MoveUp,
    MoveDown,
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    EndSearch,
    ClearSearch,
    CycleFilter,
    SortBy(SortField),
    ToggleMenu,
    MenuUp,
    MenuDown,
    MenuSelect,
    CloseMenu,
    QuickEdit,
    ShowDetails,
    ShowPage(Page),
    ConfirmYes,
    ConfirmNo,
    CloseOverlay,
    None,
}

/// Which overlay (if any) is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayMode {
    #[default]
    None,
    Detail,
    Confirm,
}

/// Captures the UI state needed to interpret a key press.
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    pub has_error: bool,
    pub search_mode: bool,
    pub menu_open: bool,
    pub overlay: OverlayMode,
    pub page: Page,
}

pub fn map_key(key: KeyEvent, ctx: &InputContext) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match ctx.overlay {
        OverlayMode::Confirm => {
            return match key.code {
                KeyCode::Char('y' | 'Y') => Action::ConfirmYes,
                KeyCode::Char('n' | 'N') | KeyCode::Esc => Action::ConfirmNo,
                _ => Action::None,
            };
        }
        OverlayMode::Detail => {
            return match key.code {
                KeyCode::Char('q' | 'v') | KeyCode::Esc | KeyCode::Enter => Action::CloseOverlay,
                _ => Action::None,
            };
        }
        OverlayMode::None => {}
    }

    if ctx.page != Page::Courses {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('b') => {
                Action::ShowPage(Page::Courses)
            }
            KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
            KeyCode::Char('n') => Action::ShowPage(Page::Notifications),
            KeyCode::Char('r') => Action::ShowPage(Page::Recommendations),
            _ => Action::None,
        };
    }

    if ctx.search_mode {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => Action::EndSearch,
            KeyCode::Backspace => Action::SearchBackspace,
            KeyCode::Up => Action::MoveUp,
            KeyCode::Down => Action::MoveDown,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Action::SearchInput(c)
            }
            _ => Action::None,
        };
    }

    if ctx.menu_open {
        return match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::MenuUp,
            KeyCode::Down | KeyCode::Char('j') => Action::MenuDown,
            KeyCode::Enter => Action::MenuSelect,
            KeyCode::Char('m' | ' ') => Action::ToggleMenu,
            KeyCode::Esc | KeyCode::Char('q') => Action::CloseMenu,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc => {
            if ctx.has_error {
                Action::DismissError
            } else {
                Action::Quit
            }
        }
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::Char('/') => Action::StartSearch,
        KeyCode::Char('x') => Action::ClearSearch,
        KeyCode::Char('f') => Action::CycleFilter,
        KeyCode::Char('t') => Action::SortBy(SortField::Title),
        KeyCode::Char('s') => Action::SortBy(SortField::Status),
        KeyCode::Char('d') => Action::SortBy(SortField::StartDate),
        KeyCode::Char('m' | ' ') => Action::ToggleMenu,
        KeyCode::Char('e') => Action::QuickEdit,
        KeyCode::Char('v') | KeyCode::Enter => Action::ShowDetails,
        KeyCode::Char('n') => Action::ShowPage(Page::Notifications),
        KeyCode::Char('r') => Action::ShowPage(Page::Recommendations),
        _ => Action::None,
    }
}
