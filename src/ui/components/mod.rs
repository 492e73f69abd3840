mod dialog;
mod error_dialog;
mod form_view;
mod global_footer;
mod help_dialog;
mod key_hints;
mod preview_pane;
mod step_header;
mod text_input;
pub mod theme;

pub use dialog::{DialogFrame, InstructionBar};
pub use error_dialog::{ErrorDialog, ErrorDialogState};
pub use form_view::{FormKeys, FormView, REVIEW_MESSAGE};
pub use global_footer::{FooterContext, GlobalFooter, StatusMessage};
pub use help_dialog::{
    HelpCategory, HelpDialog, HelpDialogState, KeybindingEntry, ABOUT_TEXT, APP_NAME,
};
pub use key_hints::{HintBar, KeyHints};
pub use preview_pane::PreviewPane;
pub use step_header::StepHeader;
pub use text_input::TextInputState;
