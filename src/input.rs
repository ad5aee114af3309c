use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde::Serialize;

/// Axis-aligned movement heading of the snake head.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Returns the opposite heading.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit cell offset `(dx, dy)`; y grows downwards.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Heading),
    Confirm,
    Quit,
}

/// Returns whether a heading change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Heading, next: Heading) -> bool {
    next != current.opposite()
}

/// Resolves heading requests between two ticks.
///
/// Requests are checked against the heading used by the last move, never
/// against a pending one, so turns do not stack within a tick. The last
/// accepted request wins.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DirectionArbiter {
    current: Heading,
    pending: Heading,
}

impl DirectionArbiter {
    #[must_use]
    pub fn new(initial: Heading) -> Self {
        Self {
            current: initial,
            pending: initial,
        }
    }

    /// Stores `requested` as the next heading unless it reverses the current
    /// one. Returns whether the request was accepted.
    pub fn request(&mut self, requested: Heading) -> bool {
        if !direction_change_is_valid(self.current, requested) {
            return false;
        }

        self.pending = requested;
        true
    }

    /// Promotes the pending heading for the upcoming move and returns it.
    pub fn commit(&mut self) -> Heading {
        self.current = self.pending;
        self.current
    }

    /// Heading used by the most recent move.
    #[must_use]
    pub fn current(&self) -> Heading {
        self.current
    }

    /// Heading the next move will use.
    #[must_use]
    pub fn pending(&self) -> Heading {
        self.pending
    }
}

/// Polls the terminal for key presses and decodes them into [`GameInput`].
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for one decodable key press.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(decode_key(key)),
            _ => Ok(None),
        }
    }
}

/// Maps a key event to a game input; key releases and unbound keys map to
/// `None`.
#[must_use]
pub fn decode_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C') => Some(GameInput::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k') => Some(GameInput::Direction(Heading::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j') => {
            Some(GameInput::Direction(Heading::Down))
        }
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h') => {
            Some(GameInput::Direction(Heading::Left))
        }
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l') => {
            Some(GameInput::Direction(Heading::Right))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::Confirm),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(GameInput::Quit),
        _ => None,
    }
}
