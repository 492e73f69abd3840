//! Wizard flows driven through the app's key handling
//!
//! Keys go through the real keybinding table, so these tests also pin the
//! default bindings the user sees in the footer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use resumeforge::data::Section;
use resumeforge::ui::{FocusTarget, InputMode};
use resumeforge::{App, Config, ResumeStore, Step};

use super::common::fixtures::sample_document;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn press_mod(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    app.handle_key_event(KeyEvent::new(code, modifiers));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn goto(app: &mut App, step: Step) {
    while app.session().current_step() != step {
        press(app, KeyCode::PageDown);
    }
}

#[test]
fn test_fill_every_step_with_enter() {
    let mut app = App::new(Config::default());

    type_text(&mut app, "Ada Lovelace");
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "ada@example.com");
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "555-0100");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session().current_step(), Step::Summary);

    type_text(&mut app, "First programmer.");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session().current_step(), Step::Experience);

    for value in ["Analyst", "Engine Co", "1842", "1843", "Notes on the engine"] {
        type_text(&mut app, value);
        press(&mut app, KeyCode::Enter);
    }
    assert_eq!(app.session().current_step(), Step::Education);

    for value in ["BSc", "Mathematics", "Home", "1835"] {
        type_text(&mut app, value);
        press(&mut app, KeyCode::Enter);
    }
    assert_eq!(app.session().current_step(), Step::Skills);

    type_text(&mut app, "Go, Rust,  TypeScript");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session().current_step(), Step::Review);

    let doc = app.session().document();
    assert_eq!(doc.name, "Ada Lovelace");
    assert_eq!(doc.experience_entries[0].end_date, "1843");
    assert_eq!(doc.education_entries[0].graduation_year, "1835");
    assert_eq!(doc.skills, ["Go", "Rust", "TypeScript"]);
}

#[test]
fn test_step_keys_saturate_at_both_ends() {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::PageUp);
    assert_eq!(app.session().steps().index(), 0);

    for _ in 0..10 {
        press(&mut app, KeyCode::PageDown);
    }
    assert_eq!(app.session().current_step(), Step::Review);

    press_mod(&mut app, KeyCode::Left, KeyModifiers::ALT);
    assert_eq!(app.session().current_step(), Step::Skills);
}

#[test]
fn test_add_edit_and_reorder_experience_with_keys() {
    let mut app = App::new(Config::default());
    goto(&mut app, Step::Experience);
    assert_eq!(app.session().document().experience_entries.len(), 1);

    // append -> two entries, new one focused
    press_mod(&mut app, KeyCode::Char('n'), KeyModifiers::CONTROL);
    assert_eq!(app.session().document().experience_entries.len(), 2);
    assert_eq!(app.session().selected_entry(), 1);

    type_text(&mut app, "Engineer");
    assert_eq!(app.session().document().experience_entries[1].title, "Engineer");
    assert_eq!(app.session().document().experience_entries[0].title, "");

    // drag entry 1 to position 0
    press_mod(&mut app, KeyCode::Char('g'), KeyModifiers::CONTROL);
    assert_eq!(app.input_mode(), InputMode::Dragging);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode(), InputMode::Editing);
    assert_eq!(app.session().document().experience_entries[0].title, "Engineer");
    assert_eq!(app.session().selected_entry(), 0);
}

#[test]
fn test_cancelled_drag_keeps_order() {
    let mut app = App::new(Config::default());
    goto(&mut app, Step::Education);
    type_text(&mut app, "First");
    press_mod(&mut app, KeyCode::Char('n'), KeyModifiers::CONTROL);
    type_text(&mut app, "Second");
    let before = app.session().document().clone();

    press_mod(&mut app, KeyCode::Char('g'), KeyModifiers::CONTROL);
    press(&mut app, KeyCode::Char('k'));
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.session().document(), &before);
    assert_eq!(app.input_mode(), InputMode::Editing);
}

#[test]
fn test_remove_all_entries_then_add_again() {
    let mut app = App::new(Config::default());
    goto(&mut app, Step::Experience);
    press_mod(&mut app, KeyCode::Char('d'), KeyModifiers::CONTROL);
    assert!(app.session().document().experience_entries.is_empty());
    assert_eq!(app.session().focus(), FocusTarget::Nothing);

    // Typing with nothing focused changes nothing
    type_text(&mut app, "lost");
    assert!(app.session().document().experience_entries.is_empty());

    press_mod(&mut app, KeyCode::Char('n'), KeyModifiers::CONTROL);
    type_text(&mut app, "kept");
    assert_eq!(app.session().document().experience_entries[0].title, "kept");
}

#[test]
fn test_skills_are_reloaded_as_joined_text() {
    let mut app = App::with_document(Config::default(), sample_document());
    goto(&mut app, Step::Skills);
    assert_eq!(app.session().input().value(), "Mathematics, Algorithms");

    press_mod(&mut app, KeyCode::Char('u'), KeyModifiers::CONTROL);
    assert!(app.session().document().skills.iter().all(|s| s.is_empty()));
    type_text(&mut app, " Go ,Rust ");
    assert_eq!(app.session().document().skills, ["Go", "Rust"]);
}

#[test]
fn test_store_scenario_by_field_name() {
    let mut store = ResumeStore::new();
    assert_eq!(store.document().experience_entries.len(), 1);

    store.append(Section::Experience);
    assert_eq!(store.document().experience_entries.len(), 2);

    store
        .set_field(Section::Experience, 1, "title", "Engineer")
        .unwrap();
    assert_eq!(store.document().experience_entries[1].title, "Engineer");
    assert_eq!(store.document().experience_entries[0].title, "");

    store.reorder(Section::Experience, 1, Some(0));
    assert_eq!(store.document().experience_entries[0].title, "Engineer");
}
