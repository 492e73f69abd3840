//! Actions that can be triggered by keybindings
//!
//! Each action is a single, atomic operation on the wizard. Keys are mapped
//! to actions through [`crate::config::KeybindingConfig`].

use serde::{Deserialize, Serialize};

/// All mappable UI actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ========== Global Actions ==========
    /// Quit the application
    Quit,
    /// Export the preview to resume.pdf
    Export,
    /// Go to the next wizard step
    NextStep,
    /// Go to the previous wizard step
    PrevStep,
    /// Show keybindings and about text
    ShowHelp,
    /// Scroll the preview pane (or the open dialog) up one line
    ScrollPreviewUp,
    /// Scroll the preview pane (or the open dialog) down one line
    ScrollPreviewDown,

    // ========== Form Navigation ==========
    /// Focus the next input (wraps into the next entry on list steps)
    NextField,
    /// Focus the previous input
    PrevField,
    /// Advance focus; on the last input take the step's primary action
    Confirm,

    // ========== Text Editing ==========
    Backspace,
    Delete,
    DeleteWordBack,
    DeleteToStart,
    DeleteToEnd,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorStart,
    MoveCursorEnd,
    MoveWordLeft,
    MoveWordRight,

    // ========== List Sections ==========
    /// Append a blank entry and select it
    AddEntry,
    /// Remove the selected entry
    RemoveEntry,
    /// Select the next entry
    SelectNextEntry,
    /// Select the previous entry
    SelectPrevEntry,
    /// Pick up the selected entry to move it
    StartDrag,

    // ========== Dragging ==========
    /// Move the drop target up
    DragUp,
    /// Move the drop target down
    DragDown,
    /// Drop the entry at the target position
    Drop,
    /// Put the entry back where it was
    CancelDrag,

    // ========== Dialogs ==========
    CloseDialog,
    ToggleDetails,
}

impl Action {
    /// Short label used in key hints and the help dialog
    pub fn description(&self) -> &'static str {
        match self {
            Action::Quit => "Quit",
            Action::Export => "Export PDF",
            Action::NextStep => "Next step",
            Action::PrevStep => "Previous step",
            Action::ShowHelp => "Help",
            Action::ScrollPreviewUp => "Scroll up",
            Action::ScrollPreviewDown => "Scroll down",
            Action::NextField => "Next field",
            Action::PrevField => "Previous field",
            Action::Confirm => "Confirm",
            Action::Backspace => "Delete back",
            Action::Delete => "Delete forward",
            Action::DeleteWordBack => "Delete word",
            Action::DeleteToStart => "Delete to start",
            Action::DeleteToEnd => "Delete to end",
            Action::MoveCursorLeft => "Cursor left",
            Action::MoveCursorRight => "Cursor right",
            Action::MoveCursorStart => "Line start",
            Action::MoveCursorEnd => "Line end",
            Action::MoveWordLeft => "Word left",
            Action::MoveWordRight => "Word right",
            Action::AddEntry => "Add entry",
            Action::RemoveEntry => "Remove entry",
            Action::SelectNextEntry => "Next entry",
            Action::SelectPrevEntry => "Previous entry",
            Action::StartDrag => "Move entry",
            Action::DragUp => "Move up",
            Action::DragDown => "Move down",
            Action::Drop => "Drop",
            Action::CancelDrag => "Cancel move",
            Action::CloseDialog => "Close",
            Action::ToggleDetails => "Details",
        }
    }
}

/// Parse an action name string into an Action
pub fn parse_action(name: &str) -> Option<Action> {
    let action = match name {
        "quit" => Action::Quit,
        "export" => Action::Export,
        "next_step" => Action::NextStep,
        "prev_step" => Action::PrevStep,
        "show_help" | "help" => Action::ShowHelp,
        "scroll_preview_up" => Action::ScrollPreviewUp,
        "scroll_preview_down" => Action::ScrollPreviewDown,
        "next_field" => Action::NextField,
        "prev_field" => Action::PrevField,
        "confirm" => Action::Confirm,
        "backspace" => Action::Backspace,
        "delete" => Action::Delete,
        "delete_word_back" => Action::DeleteWordBack,
        "delete_to_start" => Action::DeleteToStart,
        "delete_to_end" => Action::DeleteToEnd,
        "move_cursor_left" => Action::MoveCursorLeft,
        "move_cursor_right" => Action::MoveCursorRight,
        "move_cursor_start" => Action::MoveCursorStart,
        "move_cursor_end" => Action::MoveCursorEnd,
        "move_word_left" => Action::MoveWordLeft,
        "move_word_right" => Action::MoveWordRight,
        "add_entry" => Action::AddEntry,
        "remove_entry" => Action::RemoveEntry,
        "select_next_entry" => Action::SelectNextEntry,
        "select_prev_entry" => Action::SelectPrevEntry,
        "start_drag" | "move_entry" => Action::StartDrag,
        "drag_up" => Action::DragUp,
        "drag_down" => Action::DragDown,
        "drop" => Action::Drop,
        "cancel_drag" => Action::CancelDrag,
        "close_dialog" => Action::CloseDialog,
        "toggle_details" => Action::ToggleDetails,
        _ => return None,
    };
    Some(action)
}
