pub mod cli;
pub mod config;
pub mod data;
pub mod export;
pub mod preview;
pub mod ui;
pub mod util;
pub mod wizard;

pub use config::Config;
pub use data::{ResumeDocument, ResumeStore};
pub use export::{ExportError, Exporter, PdfExporter};
pub use preview::{render_preview, Preview};
pub use ui::App;
pub use wizard::{Step, StepController};
