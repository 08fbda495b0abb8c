//! Input collaborator contract
//!
//! Front ends collect raw key events and hand the game one [`TickInput`] per
//! tick. Key-repeat throttling for the control keys lives here too, so every
//! front end shares the same first-press-then-periodic behaviour.

mod repeat;

pub use repeat::{KeyRepeat, RepeatPolicy};

/// Everything the player did during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Characters typed since the last tick, in order
    pub chars: Vec<char>,
    /// Commit key fired this tick
    pub commit: bool,
    /// Delete key fired this tick
    pub delete: bool,
}

impl TickInput {
    #[must_use]
    pub fn typed(ch: char) -> Self {
        Self {
            chars: vec![ch],
            ..Self::default()
        }
    }

    #[must_use]
    pub fn commit() -> Self {
        Self {
            commit: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn delete() -> Self {
        Self {
            delete: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty() && !self.commit && !self.delete
    }
}
