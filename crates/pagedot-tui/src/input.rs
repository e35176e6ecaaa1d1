use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    GotoPage(usize),
    CycleStyle,
    CycleStyleBack,
    ToggleOrientation,
    ToggleInteractive,
    AddPage,
    RemovePage,
    ToggleHelp,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    // Any key leaves the help overlay
    if app.show_help {
        return Action::ExitMode;
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Page navigation
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::NextPage,
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::PrevPage,
        (KeyCode::Right, KeyModifiers::NONE) => Action::NextPage,
        (KeyCode::Left, KeyModifiers::NONE) => Action::PrevPage,
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::NextPage,
        (KeyCode::Home, KeyModifiers::NONE) => Action::FirstPage,
        (KeyCode::End, KeyModifiers::NONE) => Action::LastPage,
        (KeyCode::Char('g'), KeyModifiers::NONE) => Action::FirstPage,
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::LastPage,

        // Jump straight to a page
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::GotoPage(c as usize - '1' as usize)
        }

        // Runtime toggles
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::CycleStyle,
        (KeyCode::Char('S'), KeyModifiers::SHIFT) => Action::CycleStyleBack,
        (KeyCode::Char('o'), KeyModifiers::NONE) => Action::ToggleOrientation,
        (KeyCode::Char('i'), KeyModifiers::NONE) => Action::ToggleInteractive,
        (KeyCode::Char('+'), _) | (KeyCode::Char('='), KeyModifiers::NONE) => Action::AddPage,
        (KeyCode::Char('-'), KeyModifiers::NONE) => Action::RemovePage,

        // Help
        (KeyCode::Char('?'), _) => Action::ToggleHelp,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::ExitMode,

        _ => Action::None,
    }
}
