use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use kokaton_fight::entities::HeldKeys;
use kokaton_fight::input::*;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn with_kind(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
}

#[test]
fn fresh_tracker_holds_nothing() {
    let keys = KeyTracker::new();
    assert_eq!(keys.held(0), HeldKeys::default());
    assert!(!keys.quit_requested());
}

#[test]
fn pressed_arrow_is_held() {
    let mut keys = KeyTracker::new();
    keys.record(press(KeyCode::Up), 10);
    let held = keys.held(10);
    assert!(held.up);
    assert!(!held.down && !held.left && !held.right);
}

#[test]
fn wasd_aliases_arrows() {
    let mut keys = KeyTracker::new();
    keys.record(press(KeyCode::Char('w')), 1);
    keys.record(press(KeyCode::Char('D')), 1);
    let held = keys.held(1);
    assert!(held.up);
    assert!(held.right);
}

#[test]
fn held_key_expires_after_hold_window() {
    let mut keys = KeyTracker::new();
    keys.record(press(KeyCode::Left), 5);
    assert!(keys.held(5 + HOLD_WINDOW).left);
    assert!(!keys.held(5 + HOLD_WINDOW + 1).left);
}

#[test]
fn repeat_refreshes_hold() {
    let mut keys = KeyTracker::new();
    keys.record(press(KeyCode::Left), 0);
    keys.record(with_kind(KeyCode::Left, KeyEventKind::Repeat), 6);
    assert!(keys.held(6 + HOLD_WINDOW).left);
}

#[test]
fn release_drops_key_immediately() {
    let mut keys = KeyTracker::new();
    keys.record(press(KeyCode::Down), 3);
    keys.record(with_kind(KeyCode::Down, KeyEventKind::Release), 3);
    assert!(!keys.held(3).down);
}

#[test]
fn space_presses_queue_fire_events() {
    let mut keys = KeyTracker::new();
    keys.record(press(KeyCode::Char(' ')), 1);
    keys.record(press(KeyCode::Char(' ')), 1);
    keys.record(with_kind(KeyCode::Char(' '), KeyEventKind::Repeat), 1);
    keys.record(press(KeyCode::Char(' ')), 1);
    assert_eq!(keys.take_fires(), 3);
    assert_eq!(keys.take_fires(), 0);
}

#[test]
fn frame_input_drains_fires_and_snapshots_keys() {
    let mut keys = KeyTracker::new();
    keys.record(press(KeyCode::Right), 2);
    keys.record(press(KeyCode::Char(' ')), 2);
    let input = keys.frame_input(2);
    assert!(input.held.right);
    assert_eq!(input.fires, 1);
    assert_eq!(keys.frame_input(3).fires, 0);
}

#[test]
fn quit_keys() {
    for ev in [
        press(KeyCode::Esc),
        press(KeyCode::Char('q')),
        press(KeyCode::Char('Q')),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        let mut keys = KeyTracker::new();
        keys.record(ev, 0);
        assert!(keys.quit_requested());
    }
}

#[test]
fn plain_c_does_not_quit() {
    let mut keys = KeyTracker::new();
    keys.record(press(KeyCode::Char('c')), 0);
    assert!(!keys.quit_requested());
}
