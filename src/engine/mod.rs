//! The calculator engine.
//!
//! This module ties the expression and number layers into one stateful unit:
//! - An equation buffer edited one token at a time
//! - The last evaluated value and the string currently shown as result
//! - A history of successful evaluations
//! - The conversion mode with its expiry ticket

pub mod buffer;
pub mod history;
pub mod mode;
pub mod timer;
pub mod calculator;

pub use buffer::EquationBuffer;
pub use history::{History, HistoryEntry};
pub use mode::{ConvertMode, Mode, ModeTicket};
pub use timer::ExpiryTimer;
pub use calculator::{Conversion, Engine, Evaluation};
