//! Export from the wizard into scratch directories

use std::fs;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use resumeforge::export::{Exporter, PdfExporter, EXPORT_FILE_NAME};
use resumeforge::ui::components::StatusMessage;
use resumeforge::ui::InputMode;
use resumeforge::{render_preview, App, Config, Step};
use tempfile::TempDir;

use super::common::fixtures::sample_document;

fn config_with_output(dir: &std::path::Path) -> Config {
    Config::default().with_output_dir(dir.to_path_buf())
}

#[test]
fn test_ctrl_p_exports_from_any_step() {
    let tmp = TempDir::new().unwrap();
    let mut app = App::with_document(config_with_output(tmp.path()), sample_document());
    assert_eq!(app.session().current_step(), Step::Personal);

    app.handle_key_event(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL));

    let path = tmp.path().join(EXPORT_FILE_NAME);
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(String::from_utf8_lossy(&bytes).contains("(Ada Lovelace)"));
    assert!(matches!(app.status(), Some(StatusMessage::Success(msg)) if msg.contains("resume.pdf")));
}

#[test]
fn test_enter_on_review_exports() {
    let tmp = TempDir::new().unwrap();
    let mut app = App::new(config_with_output(tmp.path()));
    for _ in 0..5 {
        app.handle_key_event(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE));
    }
    assert_eq!(app.session().current_step(), Step::Review);

    app.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    let bytes = fs::read(tmp.path().join(EXPORT_FILE_NAME)).unwrap();
    // Blank documents export their placeholders
    assert!(String::from_utf8_lossy(&bytes).contains("(Your Name)"));
}

#[test]
fn test_export_sees_latest_edit() {
    let tmp = TempDir::new().unwrap();
    let mut app = App::new(config_with_output(tmp.path()));
    for c in "Grace".chars() {
        app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
    app.handle_key_event(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL));

    let bytes = fs::read(tmp.path().join(EXPORT_FILE_NAME)).unwrap();
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("(Grace)"));
    assert!(!text.contains("(Your Name)"));
}

#[test]
fn test_failed_export_opens_error_dialog() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    fs::write(&blocker, "file").unwrap();

    let mut app = App::new(config_with_output(&blocker.join("out")));
    app.handle_key_event(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL));

    assert_eq!(app.input_mode(), InputMode::ShowingError);
    assert!(app.error_dialog().is_visible());
    assert!(app.error_dialog().has_details());

    app.handle_key_event(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE));
    assert!(app.error_dialog().details_expanded);

    app.handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    assert_eq!(app.input_mode(), InputMode::Editing);
    assert!(!app.error_dialog().is_visible());
}

#[test]
fn test_exporter_overwrites_previous_file() {
    let tmp = TempDir::new().unwrap();
    let exporter = PdfExporter::default();

    let first = exporter
        .export(&render_preview(&sample_document()), tmp.path())
        .unwrap();
    let second = exporter
        .export(&render_preview(&Default::default()), tmp.path())
        .unwrap();
    assert_eq!(first, second);

    let text = String::from_utf8_lossy(&fs::read(second).unwrap()).into_owned();
    assert!(text.contains("(Your Name)"));
    assert!(!text.contains("(Ada Lovelace)"));
}
