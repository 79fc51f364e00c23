//! Small pure numeric helpers for engineering notation, gcd/lcm and medians.
//!
//! - [`engineering`]: SI engineering notation (`1500.0` → `"1.5 k"`).
//! - [`arithmetic`]: GCD / LCM over `f64` operands.
//! - [`statistics`]: median of an unordered sequence.
//!
//! Everything is stateless and thread-safe; the prefix table in [`units`] is
//! a compile-time perfect-hash map. Diagnostics go through `tracing`, so a
//! subscriber installed by the host application will pick up fallbacks and
//! abandoned GCD loops.

pub mod arithmetic;
pub mod config;
pub mod engineering;
pub mod error;
pub mod statistics;
pub mod units;

mod proptests;

pub use arithmetic::{gcd, gcd_all, lcm, lcm_all, try_gcd};
pub use config::{FormatOptions, GcdOptions, PrefixConvention};
pub use engineering::{
    base_value, classify, format, format_with, render, render_with, Magnitude, Rendering,
};
pub use error::{NumericError, Result};
pub use statistics::{median, median_in_place};
pub use units::{prefix_by_name, prefix_by_symbol, symbol_for, symbol_for_with, Prefix};
