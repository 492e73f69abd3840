//! Full-screen rendering through the test backend

use std::fs;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use resumeforge::{App, Config};
use tempfile::TempDir;

use super::common::fixtures::sample_document;
use super::common::terminal::render_app;

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[test]
fn test_initial_screen() {
    let mut app = App::new(Config::default());
    let screen = render_app(&mut app, WIDTH, HEIGHT);

    assert!(screen.contains("ResumeForge"));
    assert!(screen.contains("Step 1 of 6"));
    assert!(screen.contains("Personal Details"));
    // Preview placeholder for the empty name
    assert!(screen.contains("Your Name"));
    assert!(screen.contains("Export as PDF (C-p)"));
}

#[test]
fn test_preview_shows_document() {
    let mut app = App::with_document(Config::default(), sample_document());
    let screen = render_app(&mut app, WIDTH, HEIGHT);

    assert!(screen.contains("Ada Lovelace"));
    assert!(!screen.contains("Your Name"));
}

#[test]
fn test_review_step_offers_export() {
    let mut app = App::new(Config::default());
    for _ in 0..5 {
        app.handle_key_event(key(KeyCode::PageDown));
    }
    let screen = render_app(&mut app, WIDTH, HEIGHT);

    assert!(screen.contains("Step 6 of 6"));
    assert!(screen.contains("Review Your Resume"));
    assert!(screen.contains("[ Export as PDF ]"));
}

#[test]
fn test_empty_list_message() {
    let mut app = App::new(Config::default());
    app.handle_key_event(key(KeyCode::PageDown));
    app.handle_key_event(key(KeyCode::PageDown));
    app.handle_key_event(ctrl('d'));
    assert!(app.session().document().experience_entries.is_empty());

    let screen = render_app(&mut app, WIDTH, HEIGHT);
    assert!(screen.contains("Work Experience"));
    assert!(screen.contains("No entries. Press C-n to add one."));
}

#[test]
fn test_help_dialog_renders() {
    let mut app = App::new(Config::default());
    app.handle_key_event(key(KeyCode::F(1)));
    let screen = render_app(&mut app, WIDTH, HEIGHT);

    assert!(screen.contains("ResumeForge - Help"));
    assert!(screen.contains("ABOUT"));
    assert!(screen.contains("GLOBAL"));
}

#[test]
fn test_error_dialog_renders() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, "file").unwrap();
    let config = Config::default().with_output_dir(blocker.join("out"));

    let mut app = App::new(config);
    app.handle_key_event(ctrl('p'));
    let screen = render_app(&mut app, WIDTH, HEIGHT);

    assert!(screen.contains("Export Failed"));
    assert!(screen.contains("Your resume could not be saved as a PDF."));
    assert!(screen.contains("Dismiss"));
}

#[test]
fn test_narrow_terminal_stacks_panes() {
    let mut app = App::with_document(Config::default(), sample_document());
    let screen = render_app(&mut app, 70, HEIGHT);

    assert!(screen.contains("Personal Details"));
    assert!(screen.contains("Ada Lovelace"));
}
