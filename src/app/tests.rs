//! Unit tests for the App module: focus routing, form input, submission
//! validation, popup lifecycle, thank-you reset, and mouse dispatch.

use super::*;
use tempfile::TempDir;

// ─── Helpers ─────────────────────────────────────────────────────

/// Creates an App whose store writes into a temp directory. No avatar
/// assets on disk, so rendering falls back to placeholders.
fn test_app() -> (App<'static>, TempDir) {
    let dir = TempDir::new().unwrap();
    let app = App::new(KioskOptions {
        entries: dir.path().join("guestbook.jsonl"),
        assets: dir.path().join("char"),
        cards: 5,
        terminal_width: 100,
    });
    (app, dir)
}

/// Populates the hit-test rects the way a 100x30 render would.
fn setup_areas(app: &mut App) {
    app.arrow_left_area = Rect::new(0, 2, 3, 11);
    app.strip_area = Rect::new(3, 2, 94, 11);
    app.arrow_right_area = Rect::new(97, 2, 3, 11);
    app.name_area = Rect::new(0, 14, 100, 3);
    app.comment_area = Rect::new(0, 17, 100, 6);
    app.submit_area = Rect::new(0, 24, 100, 1);
}

fn key_event(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl_key(ch: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

fn char_event(ch: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.handle_event(char_event(ch));
    }
}

/// Fills both fields with valid content.
fn fill_form(app: &mut App) {
    app.handle_event(key_event(KeyCode::Tab)); // → Name
    type_text(app, "Ada");
    app.handle_event(key_event(KeyCode::Enter)); // → Comment
    type_text(app, "lovely kiosk");
}

// ─── Focus routing ───────────────────────────────────────────────

#[test]
fn tab_cycles_carousel_name_comment() {
    let (mut app, _dir) = test_app();
    assert_eq!(app.focus, Focus::Carousel);
    app.handle_event(key_event(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Name);
    app.handle_event(key_event(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Comment);
    app.handle_event(key_event(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Carousel);
}

#[test]
fn enter_walks_from_carousel_to_comment() {
    let (mut app, _dir) = test_app();
    app.handle_event(key_event(KeyCode::Enter));
    assert_eq!(app.focus, Focus::Name);
    app.handle_event(key_event(KeyCode::Enter));
    assert_eq!(app.focus, Focus::Comment);
}

#[test]
fn esc_returns_focus_to_carousel() {
    let (mut app, _dir) = test_app();
    app.handle_event(key_event(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Name);
    app.handle_event(key_event(KeyCode::Esc));
    assert_eq!(app.focus, Focus::Carousel);
    assert!(!app.should_quit);
}

#[test]
fn typed_characters_land_in_the_focused_field() {
    let (mut app, _dir) = test_app();
    fill_form(&mut app);
    assert_eq!(app.name(), "Ada");
    assert_eq!(app.comment(), "lovely kiosk");
}

#[test]
fn enter_in_name_does_not_insert_a_newline() {
    let (mut app, _dir) = test_app();
    app.handle_event(key_event(KeyCode::Tab));
    type_text(&mut app, "Ada");
    app.handle_event(key_event(KeyCode::Enter));
    assert_eq!(app.name_input.lines().len(), 1);
    assert_eq!(app.focus, Focus::Comment);
}

#[test]
fn paste_into_name_strips_newlines() {
    let (mut app, _dir) = test_app();
    app.handle_event(key_event(KeyCode::Tab));
    app.handle_event(Event::Paste("Ada\nLovelace".to_string()));
    assert_eq!(app.name_input.lines().len(), 1);
    assert_eq!(app.name(), "AdaLovelace");
}

// ─── Carousel keys ───────────────────────────────────────────────

#[test]
fn arrow_keys_step_the_carousel() {
    let (mut app, _dir) = test_app();
    let start = app.carousel.active_index();
    app.handle_event(key_event(KeyCode::Right));
    assert_eq!(app.carousel.active_index(), start % 5 + 1);
    app.handle_event(key_event(KeyCode::Left));
    assert_eq!(app.carousel.active_index(), start);
}

#[test]
fn arrow_keys_only_work_with_carousel_focus() {
    let (mut app, _dir) = test_app();
    let start = app.carousel.active_index();
    app.handle_event(key_event(KeyCode::Tab)); // → Name
    app.handle_event(key_event(KeyCode::Right));
    assert_eq!(app.carousel.active_index(), start);
}

// ─── Submission ──────────────────────────────────────────────────

#[test]
fn submit_with_empty_fields_shows_a_validation_popup() {
    let (mut app, _dir) = test_app();
    app.handle_event(ctrl_key('s'));

    let popup = app.popup.as_ref().expect("expected a validation popup");
    assert_eq!(popup.kind, popup::PopupKind::Error);
    assert_eq!(app.screen, Screen::Form);
    assert_eq!(app.store.entries().unwrap().len(), 0);
}

#[test]
fn submit_with_blank_whitespace_name_is_rejected() {
    let (mut app, _dir) = test_app();
    app.handle_event(key_event(KeyCode::Tab));
    type_text(&mut app, "   ");
    app.handle_event(key_event(KeyCode::Enter));
    type_text(&mut app, "note");
    app.handle_event(ctrl_key('s'));
    assert!(matches!(
        app.popup.as_ref().map(|p| p.kind),
        Some(popup::PopupKind::Error)
    ));
    assert_eq!(app.store.entries().unwrap().len(), 0);
}

#[test]
fn valid_submit_appends_the_entry_and_shows_thanks() {
    let (mut app, _dir) = test_app();
    let avatar = app.carousel.active_index();
    fill_form(&mut app);
    app.handle_event(ctrl_key('s'));

    assert_eq!(app.screen, Screen::ThankYou);
    assert!(matches!(
        app.popup.as_ref().map(|p| p.kind),
        Some(popup::PopupKind::Success)
    ));
    assert_eq!(app.entry_count, 1);

    let entries = app.store.entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Ada");
    assert_eq!(entries[0].comment, "lovely kiosk");
    assert_eq!(entries[0].avatar, avatar);
}

#[test]
fn submission_records_the_stepped_avatar() {
    let (mut app, _dir) = test_app();
    app.handle_event(key_event(KeyCode::Right));
    let avatar = app.carousel.active_index();
    fill_form(&mut app);
    app.handle_event(ctrl_key('s'));

    assert_eq!(app.store.entries().unwrap()[0].avatar, avatar);
}

#[test]
fn consecutive_visitors_append_entries() {
    let (mut app, _dir) = test_app();
    fill_form(&mut app);
    app.handle_event(ctrl_key('s'));

    app.popup = None;
    app.handle_event(key_event(KeyCode::Enter)); // reset from thank-you
    fill_form(&mut app);
    app.handle_event(ctrl_key('s'));

    assert_eq!(app.entry_count, 2);
    assert_eq!(app.store.entries().unwrap().len(), 2);
}

// ─── Popups and thank-you ────────────────────────────────────────

#[test]
fn error_popup_swallows_the_dismissing_key() {
    let (mut app, _dir) = test_app();
    app.handle_event(ctrl_key('s')); // validation popup
    assert!(app.popup.is_some());

    // The dismissing key must not leak into the form.
    app.handle_event(char_event('x'));
    assert!(app.popup.is_none());
    assert_eq!(app.name(), "");
}

#[test]
fn success_popup_expires_on_tick() {
    let (mut app, _dir) = test_app();
    fill_form(&mut app);
    app.handle_event(ctrl_key('s'));
    assert!(app.popup.is_some());

    // Force expiry rather than sleeping 1.6s.
    if let Some(popup) = &mut app.popup {
        popup.expires_at = Some(Instant::now() - Duration::from_millis(1));
    }
    app.tick();
    assert!(app.popup.is_none());
}

#[test]
fn any_key_on_thank_you_resets_the_form() {
    let (mut app, _dir) = test_app();
    fill_form(&mut app);
    app.handle_event(ctrl_key('s'));
    app.popup = None;

    app.handle_event(char_event('z'));
    assert_eq!(app.screen, Screen::Form);
    assert_eq!(app.focus, Focus::Carousel);
    assert_eq!(app.name(), "");
    assert_eq!(app.comment(), "");
    assert!(app.last_entry.is_none());
}

#[test]
fn ctrl_q_quits_even_with_a_popup_up() {
    let (mut app, _dir) = test_app();
    app.handle_event(ctrl_key('s'));
    assert!(app.popup.is_some());
    app.handle_event(ctrl_key('q'));
    assert!(app.should_quit);
}

// ─── Mouse dispatch ──────────────────────────────────────────────

#[test]
fn clicking_the_arrows_steps_the_carousel() {
    let (mut app, _dir) = test_app();
    setup_areas(&mut app);
    let start = app.carousel.active_index();

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 98, 6));
    assert_eq!(app.carousel.active_index(), start % 5 + 1);

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 1, 6));
    assert_eq!(app.carousel.active_index(), start);
}

#[test]
fn press_drag_release_inside_the_strip_drives_the_carousel() {
    let (mut app, _dir) = test_app();
    setup_areas(&mut app);

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 50, 6));
    assert!(app.carousel.is_dragging());
    assert_eq!(app.focus, Focus::Carousel);

    let offset_before = app.carousel.offset();
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 6));
    assert_eq!(app.carousel.offset(), offset_before + 10.0);

    // Release outside the strip still ends the drag.
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 40, 28));
    assert!(!app.carousel.is_dragging());
}

#[test]
fn click_without_drag_keeps_the_selection() {
    let (mut app, _dir) = test_app();
    setup_areas(&mut app);
    let active = app.carousel.active_index();
    let offset = app.carousel.offset();

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 50, 6));
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 50, 6));

    assert_eq!(app.carousel.active_index(), active);
    assert_eq!(app.carousel.offset(), offset);
}

#[test]
fn clicking_fields_moves_focus_and_clicking_submit_submits() {
    let (mut app, _dir) = test_app();
    setup_areas(&mut app);

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 15));
    assert_eq!(app.focus, Focus::Name);
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 19));
    assert_eq!(app.focus, Focus::Comment);

    // Empty form: the click lands on submit and trips validation.
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 50, 24));
    assert!(matches!(
        app.popup.as_ref().map(|p| p.kind),
        Some(popup::PopupKind::Error)
    ));
}

#[test]
fn click_dismisses_a_popup_without_reaching_the_form() {
    let (mut app, _dir) = test_app();
    setup_areas(&mut app);
    app.handle_event(ctrl_key('s'));
    assert!(app.popup.is_some());

    let start = app.carousel.active_index();
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 98, 6));
    assert!(app.popup.is_none());
    assert_eq!(app.carousel.active_index(), start);
}

// ─── Status bar ──────────────────────────────────────────────────

#[test]
fn status_message_clears_after_timeout() {
    let (mut app, _dir) = test_app();
    app.set_status("hello");
    assert_eq!(app.status_message, "hello");

    app.status_time = Some(Instant::now() - STATUS_DURATION);
    app.tick();
    assert!(app.status_message.is_empty());
    assert!(app.status_time.is_none());
}
