//! Conversion mode state machine.
//!
//! ```text
//!          activate (arm expiry)
//!   Base ------------------------> Convert
//!        <------------------------
//!          activate | exit | expiry(current ticket)
//! ```
//!
//! Every activation mints a fresh [`ModeTicket`]. An expiry only reverts the
//! mode when it carries the current ticket, so a revert scheduled for an
//! earlier activation can never end a later one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which set of actions the keypad exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Digits, operators, clear, backspace.
    #[default]
    Base,
    /// Binary and fraction conversions.
    Convert,
}

impl Mode {
    pub const fn is_convert(self) -> bool {
        matches!(self, Mode::Convert)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Base => f.write_str("BASE"),
            Mode::Convert => f.write_str("CONVERT"),
        }
    }
}

/// Identifies one activation of conversion mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModeTicket(u64);

impl ModeTicket {
    /// Raw generation number (for front-ends that pass tickets around as integers).
    pub const fn id(self) -> u64 {
        self.0
    }

    pub const fn from_id(id: u64) -> Self {
        Self(id)
    }
}

/// Conversion mode plus the ticket of its current activation.
#[derive(Debug, Clone, Default)]
pub struct ConvertMode {
    mode: Mode,
    generation: u64,
}

impl ConvertMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Enter conversion mode, or restart it if already active.
    pub fn enter(&mut self) -> ModeTicket {
        self.generation += 1;
        self.mode = Mode::Convert;
        ModeTicket(self.generation)
    }

    /// Return to base mode. Outstanding tickets become stale.
    pub fn exit(&mut self) {
        self.generation += 1;
        self.mode = Mode::Base;
    }

    /// Flip between modes. Returns the new ticket when conversion mode was entered.
    pub fn toggle(&mut self) -> Option<ModeTicket> {
        match self.mode {
            Mode::Base => Some(self.enter()),
            Mode::Convert => {
                self.exit();
                None
            }
        }
    }

    /// Apply an expiry. Returns `true` only if this reverted the mode.
    pub fn expire(&mut self, ticket: ModeTicket) -> bool {
        if self.mode == Mode::Convert && ticket.0 == self.generation {
            self.mode = Mode::Base;
            true
        } else {
            false
        }
    }
}
