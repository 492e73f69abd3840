pub mod action;
pub mod app;
pub mod components;
pub mod events;
pub mod session;
pub mod terminal_guard;

pub use action::Action;
pub use app::App;
pub use events::{AppEvent, InputMode};
pub use session::{ConfirmOutcome, DragState, FocusTarget, WizardSession};
