//! Per-frame input snapshots
//!
//! The simulation only ever sees a `TickInput`. On the web the keyboard
//! feeds an `InputLatch`, which is sampled once per frame.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Directional pad and action button for one player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// A button - rotates the *other* player's avatar
    pub action: bool,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Player 1 and Player 2
    pub players: [PlayerInput; 2],
    pub one_player_start: bool,
    pub two_player_start: bool,
}

impl TickInput {
    /// Either start button counts
    #[inline]
    pub fn start_pressed(&self) -> bool {
        self.one_player_start || self.two_player_start
    }
}

/// Physical cabinet buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Up(usize),
    Down(usize),
    Left(usize),
    Right(usize),
    Action(usize),
    OnePlayerStart,
    TwoPlayerStart,
}

/// Keyboard key -> button table
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<(String, Button)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let table = [
            ("w", Button::Up(0)),
            ("s", Button::Down(0)),
            ("a", Button::Left(0)),
            ("d", Button::Right(0)),
            ("f", Button::Action(0)),
            ("arrowup", Button::Up(1)),
            ("arrowdown", Button::Down(1)),
            ("arrowleft", Button::Left(1)),
            ("arrowright", Button::Right(1)),
            ("/", Button::Action(1)),
            ("1", Button::OnePlayerStart),
            ("2", Button::TwoPlayerStart),
        ];
        Self {
            bindings: table
                .into_iter()
                .map(|(key, button)| (key.to_string(), button))
                .collect(),
        }
    }
}

impl KeyBindings {
    /// Bind (or rebind) a key
    pub fn bind(&mut self, key: &str, button: Button) {
        let key = key.to_lowercase();
        self.bindings.retain(|(k, _)| *k != key);
        self.bindings.push((key, button));
    }

    /// Look up a key by its DOM `KeyboardEvent.key` name (case-insensitive)
    pub fn lookup(&self, key: &str) -> Option<Button> {
        let key = key.to_lowercase();
        self.bindings
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, button)| button)
    }
}

/// Held-button state fed by key events
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    bindings: KeyBindings,
    held: HashSet<Button>,
}

impl InputLatch {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: HashSet::new(),
        }
    }

    /// Returns true if the key is bound (so the caller can swallow the event)
    pub fn key_down(&mut self, key: &str) -> bool {
        match self.bindings.lookup(key) {
            Some(button) => {
                self.held.insert(button);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        match self.bindings.lookup(key) {
            Some(button) => {
                self.held.remove(&button);
                true
            }
            None => false,
        }
    }

    /// Drop every held button (window lost focus)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, button: Button) -> bool {
        self.held.contains(&button)
    }

    /// Sample the current state
    pub fn snapshot(&self) -> TickInput {
        let mut input = TickInput {
            one_player_start: self.is_held(Button::OnePlayerStart),
            two_player_start: self.is_held(Button::TwoPlayerStart),
            ..Default::default()
        };
        for (i, player) in input.players.iter_mut().enumerate() {
            *player = PlayerInput {
                up: self.is_held(Button::Up(i)),
                down: self.is_held(Button::Down(i)),
                left: self.is_held(Button::Left(i)),
                right: self.is_held(Button::Right(i)),
                action: self.is_held(Button::Action(i)),
            };
        }
        input
    }
}
