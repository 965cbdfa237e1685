use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::snakebird::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Move(Direction),
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Only fresh presses count; held-key repeats and releases do nothing
        if key.kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Move(Direction::Up),
            KeyCode::Down => KeyAction::Move(Direction::Down),
            KeyCode::Left => KeyAction::Move(Direction::Left),
            KeyCode::Right => KeyAction::Move(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Move(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Move(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Move(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Move(Direction::Right),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds at most one direction between frames
///
/// The first press after a frame wins; later presses before the next frame
/// are dropped so the snake never takes more than one step per frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove(Option<Direction>);

impl PendingMove {
    pub fn press(&mut self, direction: Direction) {
        if self.0.is_none() {
            self.0 = Some(direction);
        }
    }

    /// Hand the direction to this frame and clear it
    pub fn take(&mut self) -> Option<Direction> {
        self.0.take()
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }
}
