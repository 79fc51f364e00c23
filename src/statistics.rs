//! Median by full sort.
//!
//! This is O(n log n) rather than a linear-time selection; the sort keeps it
//! simple and the inputs this is meant for are small.

use crate::error::{NumericError, Result};

fn is_odd(n: usize) -> bool {
    n & 1 == 1
}

/// Median of an unordered sequence.
///
/// Fails with [`NumericError::EmptyInput`] for an empty sequence and with
/// [`NumericError::NanInput`] if any element is NaN.
pub fn median<I>(numbers: I) -> Result<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut data: Vec<f64> = numbers.into_iter().collect();
    median_in_place(&mut data)
}

/// Median of `data`, sorting it ascending in place.
pub fn median_in_place(data: &mut [f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(NumericError::EmptyInput);
    }
    if let Some(index) = data.iter().position(|x| x.is_nan()) {
        return Err(NumericError::NanInput { index });
    }

    data.sort_by(f64::total_cmp);

    let n = data.len();
    let mid = n / 2;
    if is_odd(n) {
        Ok(data[mid])
    } else {
        Ok((data[mid - 1] + data[mid]) / 2.0)
    }
}
