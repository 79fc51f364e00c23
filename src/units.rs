use phf::phf_map;

use crate::config::PrefixConvention;
use crate::error::{NumericError, Result};

#[derive(Debug, PartialEq)]
pub struct Prefix {
    pub name: &'static str,
    pub symbol: &'static str,
    pub exponent: i32,
    /// `10^exponent` as a correctly rounded literal.
    pub factor: f64,
}

// Engineering prefixes only. There is deliberately no entry for exponent 0.
static PREFIXES: phf::Map<&'static str, Prefix> = phf_map! {
    "YOTTA" => Prefix {name: "YOTTA", symbol: "Y", exponent: 24, factor: 1e24},
    "ZETTA" => Prefix {name: "ZETTA", symbol: "Z", exponent: 21, factor: 1e21},
    "EXA" => Prefix {name: "EXA", symbol: "E", exponent: 18, factor: 1e18},
    "PETA" => Prefix {name: "PETA", symbol: "P", exponent: 15, factor: 1e15},
    "TERA" => Prefix {name: "TERA", symbol: "T", exponent: 12, factor: 1e12},
    "GIGA" => Prefix {name: "GIGA", symbol: "G", exponent: 9, factor: 1e9},
    "MEGA" => Prefix {name: "MEGA", symbol: "M", exponent: 6, factor: 1e6},
    "KILO" => Prefix {name: "KILO", symbol: "k", exponent: 3, factor: 1e3},
    "MILLI" => Prefix {name: "MILLI", symbol: "m", exponent: -3, factor: 1e-3},
    "MICRO" => Prefix {name: "MICRO", symbol: "μ", exponent: -6, factor: 1e-6},
    "NANO" => Prefix {name: "NANO", symbol: "n", exponent: -9, factor: 1e-9},
    "PICO" => Prefix {name: "PICO", symbol: "p", exponent: -12, factor: 1e-12},
    "FEMTO" => Prefix {name: "FEMTO", symbol: "f", exponent: -15, factor: 1e-15},
    "ATTO" => Prefix {name: "ATTO", symbol: "a", exponent: -18, factor: 1e-18},
    "ZEPTO" => Prefix {name: "ZEPTO", symbol: "z", exponent: -21, factor: 1e-21},
    "YOCTO" => Prefix {name: "YOCTO", symbol: "y", exponent: -24, factor: 1e-24},
};

/// Exponent steps that carry a prefix, in ascending order.
pub const EXPONENT_STEPS: [i32; 16] = [
    -24, -21, -18, -15, -12, -9, -6, -3, 3, 6, 9, 12, 15, 18, 21, 24,
];

// Table key for each step from -24 to 24, indexed by `(step + 24) / 3`.
const NAMES_BY_STEP: [Option<&str>; 17] = [
    Some("YOCTO"),
    Some("ZEPTO"),
    Some("ATTO"),
    Some("FEMTO"),
    Some("PICO"),
    Some("NANO"),
    Some("MICRO"),
    Some("MILLI"),
    None,
    Some("KILO"),
    Some("MEGA"),
    Some("GIGA"),
    Some("TERA"),
    Some("PETA"),
    Some("EXA"),
    Some("ZETTA"),
    Some("YOTTA"),
];

/// Looks up the prefix whose exponent equals `step`.
pub fn prefix_for(step: i32) -> Result<&'static Prefix> {
    (step % 3 == 0 && (-24..=24).contains(&step))
        .then(|| NAMES_BY_STEP[((step + 24) / 3) as usize])
        .flatten()
        .and_then(|name| PREFIXES.get(name))
        .ok_or(NumericError::UnsupportedMagnitude { step })
}

/// SI symbol for an exponent step under the corrected table.
///
/// Fails with [`NumericError::UnsupportedMagnitude`] for 0, for steps that
/// are not multiples of 3 and for anything beyond ±24.
pub fn symbol_for(step: i32) -> Result<&'static str> {
    symbol_for_with(step, PrefixConvention::Corrected)
}

/// SI symbol for an exponent step under the given convention.
pub fn symbol_for_with(step: i32, convention: PrefixConvention) -> Result<&'static str> {
    match (convention, step) {
        (PrefixConvention::Legacy, -18) => Ok("p"),
        _ => prefix_for(step).map(|prefix| prefix.symbol),
    }
}

/// Case-insensitive lookup by English prefix name, e.g. `"kilo"`.
pub fn prefix_by_name(name: &str) -> Result<&'static Prefix> {
    PREFIXES
        .get(name.trim().to_ascii_uppercase().as_str())
        .ok_or_else(|| NumericError::UnknownPrefix(name.to_string()))
}

/// Lookup by symbol. Symbols are case-sensitive (`m` vs `M`); this scans
/// the table since it is keyed by name.
pub fn prefix_by_symbol(symbol: &str) -> Result<&'static Prefix> {
    PREFIXES
        .values()
        .find(|prefix| prefix.symbol == symbol)
        .ok_or_else(|| NumericError::UnknownPrefix(symbol.to_string()))
}
