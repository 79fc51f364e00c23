//! SI engineering notation.
//!
//! A value is bucketed into a power-of-ten step that is a multiple of three,
//! the remaining mantissa is kept in `[1, 1000)`, and the step is paired
//! with its SI prefix symbol from [`crate::units`].
//!
//! [`classify`] and [`Magnitude::symbol`] are strict. [`format`] and
//! [`render`] never fail: when no prefix applies they fall back to the
//! plain number.

use std::fmt;

use tracing::debug;

use crate::config::{FormatOptions, PrefixConvention};
use crate::error::Result;
use crate::units::{prefix_for, symbol_for_with, EXPONENT_STEPS};

// Largest power of ten applied in one division; 10^308 is the last finite
// one, so larger shifts are done in chunks.
const MAX_POW10_CHUNK: i32 = 300;

const SMALLEST_PREFIX_STEP: i32 = EXPONENT_STEPS[0];

/// A real number together with its engineering-notation bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnitude {
    value: f64,
    absolute_value: f64,
    decimal_exponent: Option<f64>,
    exponent_step: i32,
}

/// Buckets `value` into its engineering exponent step.
///
/// Zero and non-finite values have no decimal exponent; they get step 0,
/// which has no prefix.
pub fn classify(value: f64) -> Magnitude {
    let absolute_value = libm::fabs(value);
    let decimal_exponent =
        (value != 0.0 && value.is_finite()).then(|| libm::log10(absolute_value));
    let exponent_step = decimal_exponent.map_or(0, |exp| {
        let step = (libm::floor(exp / 3.0) * 3.0) as i32;
        renormalize(value, step)
    });

    Magnitude {
        value,
        absolute_value,
        decimal_exponent,
        exponent_step,
    }
}

/// The rounded `10^step`: the prefix table's literal factor when there is
/// one, `pow` otherwise.
fn power_of_ten(step: i32) -> f64 {
    match prefix_for(step) {
        Ok(prefix) => prefix.factor,
        Err(_) => libm::pow(10.0, step as f64),
    }
}

/// `log10` can miss a bucket edge by an ulp, so the step is settled by
/// comparing against the bucket's own power of ten. A value that lands just
/// under the yocto edge keeps its prefix.
fn renormalize(value: f64, step: i32) -> i32 {
    let absolute_value = libm::fabs(value);
    let step = if absolute_value >= power_of_ten(step + 3) {
        step + 3
    } else if absolute_value < power_of_ten(step) && step != SMALLEST_PREFIX_STEP {
        step - 3
    } else {
        step
    };

    // The division itself can still round the base up onto 1000.
    if libm::fabs(base_value(value, step)) >= 1000.0 {
        step + 3
    } else {
        step
    }
}

/// `value × 10^(−step)`, computed as `value / 10^step`.
///
/// Table steps divide by the correctly rounded literal factor, so exact
/// powers such as `1e-24` give a base of exactly 1.
pub fn base_value(value: f64, step: i32) -> f64 {
    if let Ok(prefix) = prefix_for(step) {
        return value / prefix.factor;
    }

    let mut result = value;
    let mut remaining = step;
    while remaining.unsigned_abs() > MAX_POW10_CHUNK as u32 {
        let chunk = remaining.signum() * MAX_POW10_CHUNK;
        result /= libm::pow(10.0, chunk as f64);
        remaining -= chunk;
    }
    result / libm::pow(10.0, remaining as f64)
}

impl Magnitude {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn absolute_value(&self) -> f64 {
        self.absolute_value
    }

    /// `log10(|value|)`, or `None` for zero and non-finite values.
    pub fn decimal_exponent(&self) -> Option<f64> {
        self.decimal_exponent
    }

    /// The multiple-of-three power of ten this value falls into.
    pub fn exponent(&self) -> i32 {
        self.exponent_step
    }

    pub fn base_value(&self) -> f64 {
        base_value(self.value, self.exponent_step)
    }

    /// Prefix symbol for this value's step under the corrected table.
    pub fn symbol(&self) -> Result<&'static str> {
        self.symbol_with(PrefixConvention::Corrected)
    }

    pub fn symbol_with(&self, convention: PrefixConvention) -> Result<&'static str> {
        symbol_for_with(self.exponent_step, convention)
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&render_magnitude(self, PrefixConvention::Corrected), f)
    }
}

/// Outcome of an attempt to express a value in engineering notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rendering {
    Scaled { base: f64, symbol: &'static str },
    /// No prefix applies; carries the original value.
    Plain(f64),
}

impl Rendering {
    pub fn is_scaled(&self) -> bool {
        matches!(self, Rendering::Scaled { .. })
    }

    /// Collapses the rendering to a string using `options` for the number
    /// format and separator.
    pub fn to_string_with(&self, options: &FormatOptions) -> String {
        let number = |x: f64| match options.precision {
            Some(precision) => format!("{x:.precision$}"),
            None => x.to_string(),
        };
        match self {
            Rendering::Scaled { base, symbol } => {
                format!("{}{}{}", number(*base), options.separator, symbol)
            }
            Rendering::Plain(value) => number(*value),
        }
    }
}

impl fmt::Display for Rendering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&FormatOptions::default()))
    }
}

fn render_magnitude(magnitude: &Magnitude, convention: PrefixConvention) -> Rendering {
    match magnitude.symbol_with(convention) {
        Ok(symbol) => Rendering::Scaled {
            base: magnitude.base_value(),
            symbol,
        },
        Err(err) => {
            debug!(value = magnitude.value, %err, "falling back to plain rendering");
            Rendering::Plain(magnitude.value)
        }
    }
}

/// Attempts engineering notation, falling back to [`Rendering::Plain`].
pub fn render(value: f64) -> Rendering {
    render_with(value, PrefixConvention::Corrected)
}

pub fn render_with(value: f64, convention: PrefixConvention) -> Rendering {
    render_magnitude(&classify(value), convention)
}

/// Formats `value` as `"<base> <symbol>"`, or as the plain number when no
/// prefix applies (zero, `[1, 1000)`, beyond ±10^27, NaN, infinities).
///
/// ```
/// assert_eq!(sinumeric::format(1500.0), "1.5 k");
/// assert_eq!(sinumeric::format(0.0), "0");
/// ```
pub fn format(value: f64) -> String {
    render(value).to_string()
}

pub fn format_with(value: f64, options: &FormatOptions) -> String {
    render_with(value, options.convention).to_string_with(options)
}
