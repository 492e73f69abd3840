use crate::config::KeyContext;

/// Application-level events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Terminal input event
    Input(crossterm::event::Event),

    /// Tick event for status message expiry
    Tick,
}

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Typing into the focused form input
    #[default]
    Editing,
    /// Moving a picked-up entry within its list
    Dragging,
    /// Showing help dialog
    ShowingHelp,
    /// Showing an error dialog
    ShowingError,
}

impl InputMode {
    /// Keybinding context that resolves keys in this mode
    pub fn key_context(&self) -> KeyContext {
        match self {
            InputMode::Editing => KeyContext::Form,
            InputMode::Dragging => KeyContext::Dragging,
            InputMode::ShowingHelp | InputMode::ShowingError => KeyContext::Dialog,
        }
    }
}
