//! Quantity extraction from clause text
//!
//! Every extractor reports "not found" as `None` rather than a zero or a
//! placeholder, so a rule can never read a missing number as a real change.

pub mod numeric;
pub mod state;

pub use numeric::{
    extract_amounts, extract_days, extract_duration, extract_months, extract_years, first_amount,
    format_amount, Duration, DurationUnit,
};
pub use state::extract_state;
