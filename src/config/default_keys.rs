//! Default keybindings
//!
//! Used when the config file has no [keys] section, and as the base that user
//! bindings are merged onto.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};

use super::keys::{KeyCombo, KeyContext, KeybindingConfig};
use crate::ui::action::Action;

/// Helper to insert a keybinding
fn bind(map: &mut HashMap<KeyCombo, Action>, key: &str, action: Action) {
    if let Ok(combo) = key.parse() {
        map.insert(combo, action);
    }
}

/// Create the default keybindings configuration
pub fn default_keybindings() -> KeybindingConfig {
    let mut config = KeybindingConfig::new();

    // ========== Global Keybindings ==========

    bind(&mut config.global, "C-q", Action::Quit);
    bind(&mut config.global, "C-p", Action::Export);
    bind(&mut config.global, "<F1>", Action::ShowHelp);
    bind(&mut config.global, "M-<Right>", Action::NextStep);
    bind(&mut config.global, "M-<Left>", Action::PrevStep);
    bind(&mut config.global, "<PageDown>", Action::NextStep);
    bind(&mut config.global, "<PageUp>", Action::PrevStep);

    // Ctrl+Arrow scrolls the preview pane
    config.global.insert(
        KeyCombo::new(KeyCode::Up, KeyModifiers::CONTROL),
        Action::ScrollPreviewUp,
    );
    config.global.insert(
        KeyCombo::new(KeyCode::Down, KeyModifiers::CONTROL),
        Action::ScrollPreviewDown,
    );

    // Readline shortcuts
    bind(&mut config.global, "C-a", Action::MoveCursorStart);
    bind(&mut config.global, "C-e", Action::MoveCursorEnd);
    bind(&mut config.global, "C-f", Action::MoveCursorRight);
    bind(&mut config.global, "C-b", Action::MoveCursorLeft);
    bind(&mut config.global, "C-u", Action::DeleteToStart);
    bind(&mut config.global, "C-k", Action::DeleteToEnd);
    bind(&mut config.global, "C-w", Action::DeleteWordBack);
    bind(&mut config.global, "C-h", Action::Backspace);
    bind(&mut config.global, "M-b", Action::MoveWordLeft);
    bind(&mut config.global, "M-f", Action::MoveWordRight);
    bind(&mut config.global, "M-<BS>", Action::DeleteWordBack);

    // ========== Form ==========
    let form = config.context.entry(KeyContext::Form).or_default();

    bind(form, "<Tab>", Action::NextField);
    bind(form, "<Down>", Action::NextField);
    bind(form, "<S-Tab>", Action::PrevField);
    bind(form, "<Up>", Action::PrevField);
    bind(form, "<CR>", Action::Confirm);
    bind(form, "<BS>", Action::Backspace);
    bind(form, "<Del>", Action::Delete);
    bind(form, "<Left>", Action::MoveCursorLeft);
    bind(form, "<Right>", Action::MoveCursorRight);
    bind(form, "<Home>", Action::MoveCursorStart);
    bind(form, "<End>", Action::MoveCursorEnd);

    // List sections
    bind(form, "C-n", Action::AddEntry);
    bind(form, "C-d", Action::RemoveEntry);
    bind(form, "M-<Down>", Action::SelectNextEntry);
    bind(form, "M-<Up>", Action::SelectPrevEntry);
    bind(form, "C-g", Action::StartDrag);

    // ========== Dragging ==========
    let dragging = config.context.entry(KeyContext::Dragging).or_default();

    bind(dragging, "<Up>", Action::DragUp);
    bind(dragging, "k", Action::DragUp);
    bind(dragging, "<Down>", Action::DragDown);
    bind(dragging, "j", Action::DragDown);
    bind(dragging, "<CR>", Action::Drop);
    bind(dragging, "<Space>", Action::Drop);
    bind(dragging, "<Esc>", Action::CancelDrag);
    bind(dragging, "C-q", Action::Quit);

    // ========== Dialog ==========
    let dialog = config.context.entry(KeyContext::Dialog).or_default();

    bind(dialog, "<Esc>", Action::CloseDialog);
    bind(dialog, "<CR>", Action::CloseDialog);
    bind(dialog, "q", Action::CloseDialog);
    bind(dialog, "d", Action::ToggleDetails);
    bind(dialog, "<Up>", Action::ScrollPreviewUp);
    bind(dialog, "k", Action::ScrollPreviewUp);
    bind(dialog, "<Down>", Action::ScrollPreviewDown);
    bind(dialog, "j", Action::ScrollPreviewDown);
    bind(dialog, "C-q", Action::Quit);

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::keys::parse_key_notation;

    fn key(s: &str) -> KeyCombo {
        parse_key_notation(s).unwrap()
    }

    #[test]
    fn test_enter_depends_on_context() {
        let config = default_keybindings();
        assert_eq!(
            config.get_action(&key("<CR>"), KeyContext::Form),
            Some(Action::Confirm)
        );
        assert_eq!(
            config.get_action(&key("<CR>"), KeyContext::Dragging),
            Some(Action::Drop)
        );
        assert_eq!(
            config.get_action(&key("<CR>"), KeyContext::Dialog),
            Some(Action::CloseDialog)
        );
    }

    #[test]
    fn test_global_keys_reach_the_form() {
        let config = default_keybindings();
        assert_eq!(
            config.get_action(&key("C-p"), KeyContext::Form),
            Some(Action::Export)
        );
        assert_eq!(
            config.get_action(&key("M-<Right>"), KeyContext::Form),
            Some(Action::NextStep)
        );
    }

    #[test]
    fn test_plain_letters_are_left_for_typing() {
        let config = default_keybindings();
        for c in ['j', 'k', 'q', 'd'] {
            let combo = KeyCombo::new(KeyCode::Char(c), KeyModifiers::NONE);
            assert_eq!(config.get_action(&combo, KeyContext::Form), None);
        }
    }

    #[test]
    fn test_every_key_in_drag_mode_is_explicit() {
        let config = default_keybindings();
        assert_eq!(config.get_action(&key("C-p"), KeyContext::Dragging), None);
        assert_eq!(
            config.get_action(&key("<Esc>"), KeyContext::Dragging),
            Some(Action::CancelDrag)
        );
    }
}
