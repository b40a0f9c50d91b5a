//! Numeric representations of a computed result.
//!
//! This module provides the three renderings a result can be shown in:
//! - [`format_number`] - rounded decimal display (3 places)
//! - [`to_binary`] - base-2 with up to 8 fractional bits
//! - [`to_fraction`] - lowest-terms fraction with repeating-decimal detection

mod format;
pub mod binary;
pub mod fraction;

pub use format::format_number;
pub use binary::{to_binary, BinaryError};
pub use fraction::{to_fraction, FractionError};
