//! Tunable knobs for formatting and the floating-point Euclidean loop.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default iteration cap for [`crate::arithmetic::try_gcd`].
///
/// Every finite double is an integer multiple of 2^-1074, so the Euclidean
/// loop over finite operands finishes in far fewer steps than this.
pub const DEFAULT_GCD_MAX_ITERATIONS: usize = 4096;

/// Which exponent-to-symbol table to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PrefixConvention {
    /// Standard SI table, -18 maps to atto ("a").
    #[default]
    Corrected,
    /// Historical table where -18 also maps to "p", leaving atto unreachable.
    Legacy,
}

/// Options for [`crate::engineering::format_with`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatOptions {
    /// Fixed number of decimals. `None` uses the shortest round-trip form.
    pub precision: Option<usize>,
    pub convention: PrefixConvention,
    /// Text placed between the base value and the prefix symbol.
    pub separator: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            precision: None,
            convention: PrefixConvention::Corrected,
            separator: " ".to_string(),
        }
    }
}

impl FormatOptions {
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_convention(mut self, convention: PrefixConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Options for [`crate::arithmetic::try_gcd`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GcdOptions {
    pub max_iterations: usize,
}

impl Default for GcdOptions {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_GCD_MAX_ITERATIONS,
        }
    }
}

impl GcdOptions {
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}
