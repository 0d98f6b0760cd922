//! Key bindings
//!
//! Maps whatever keys the host reports as held/pressed into an explicit
//! [`FrameInput`], so the simulation never polls input itself.

use serde::{Deserialize, Serialize};

use crate::sim::{AngleHold, FrameInput, Side};

/// Keys for one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Steepen the launch angle while held
    pub raise: char,
    /// Flatten the launch angle while held
    pub lower: char,
    /// Serve / volley on press
    pub hit: char,
}

impl KeyBindings {
    pub const LEFT: Self = Self {
        raise: 'E',
        lower: 'D',
        hit: 'F',
    };

    pub const RIGHT: Self = Self {
        raise: 'I',
        lower: 'K',
        hit: 'J',
    };

    pub fn default_for(side: Side) -> Self {
        match side {
            Side::Left => Self::LEFT,
            Side::Right => Self::RIGHT,
        }
    }
}

/// Both players' bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub left: KeyBindings,
    pub right: KeyBindings,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            left: KeyBindings::LEFT,
            right: KeyBindings::RIGHT,
        }
    }
}

fn contains_key(keys: &str, key: char) -> bool {
    keys.chars().any(|k| k.eq_ignore_ascii_case(&key))
}

impl Controls {
    pub fn for_side(&self, side: Side) -> &KeyBindings {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Build a frame's input from the keys held down and the keys newly pressed.
    ///
    /// Keys are matched case-insensitively.
    pub fn sample(&self, down: &str, pressed: &str) -> FrameInput {
        let mut input = FrameInput::default();
        for side in Side::BOTH {
            let keys = self.for_side(side);
            input.angle[side.index()] = AngleHold {
                raise: contains_key(down, keys.raise),
                lower: contains_key(down, keys.lower),
            };
            input.hit[side.index()] = contains_key(pressed, keys.hit);
        }
        input
    }
}
