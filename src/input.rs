/// Keyboard input source built on crossterm key events.
///
/// Held keys are tracked with a `key_frame` map recording the frame of the
/// last press/repeat event for every key.  A key stays "held" while that
/// frame is within `HOLD_WINDOW` of the current one, or until its release
/// event on terminals that report releases.  This lets several direction
/// keys and Space work at the same time on both classes of terminal:
///
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire after `HOLD_WINDOW` frames of silence.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::{FrameInput, HeldKeys};

/// 7 frames @ 50 FPS ≈ 140 ms, longer than any OS key-repeat interval.
pub const HOLD_WINDOW: u64 = 7;

#[derive(Debug, Default)]
pub struct KeyTracker {
    key_frame: HashMap<KeyCode, u64>,
    fires: usize,
    quit: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key event seen during `frame`.
    pub fn record(&mut self, event: KeyEvent, frame: u64) {
        let code = normalize(event.code);
        match event.kind {
            KeyEventKind::Press => {
                self.key_frame.insert(code, frame);
                match code {
                    KeyCode::Char(' ') => self.fires += 1,
                    KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
                    KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                        self.quit = true;
                    }
                    _ => {}
                }
            }
            // Repeat only refreshes the hold; it never fires
            KeyEventKind::Repeat => {
                self.key_frame.insert(code, frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&code);
            }
        }
    }

    /// Direction keys held as of `frame`.  Arrows and WASD are aliases.
    pub fn held(&self, frame: u64) -> HeldKeys {
        HeldKeys {
            up: self.is_held(KeyCode::Up, frame) || self.is_held(KeyCode::Char('w'), frame),
            down: self.is_held(KeyCode::Down, frame) || self.is_held(KeyCode::Char('s'), frame),
            left: self.is_held(KeyCode::Left, frame) || self.is_held(KeyCode::Char('a'), frame),
            right: self.is_held(KeyCode::Right, frame) || self.is_held(KeyCode::Char('d'), frame),
        }
    }

    /// Drain the fire events queued since the last call.
    pub fn take_fires(&mut self) -> usize {
        std::mem::take(&mut self.fires)
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Snapshot for one simulation frame; drains pending fire events.
    pub fn frame_input(&mut self, frame: u64) -> FrameInput {
        FrameInput {
            held: self.held(frame),
            fires: self.take_fires(),
        }
    }

    fn is_held(&self, key: KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }
}

/// Fold upper-case letters onto lower-case so Shift doesn't change meaning.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
