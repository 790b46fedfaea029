use crate::{interpreter::series::Series, util::num::shifted_index};

/// Returns the trailing window `[index - period + 1, index]` of `series`,
/// clipped to the start of the series.
///
/// A period of zero or less gives an empty window.
fn trailing_window(series: &[f64], index: usize, period: i64) -> &[f64] {
    let end = index + 1;
    let start = usize::try_from(period).map_or(end, |period| end.saturating_sub(period));
    &series[start..end]
}

/// Computes the adaptive trailing mean (`MA`).
///
/// For each index the non-`NaN` values of the trailing window are summed and
/// divided by how many there were, not by `period`. Windows that reach past
/// the start of the series, or contain gaps, therefore average what is
/// available. A window with no values yields `NaN`.
///
/// # Example
/// ```
/// use formulang::interpreter::evaluator::function::window::moving_average;
///
/// let ma = moving_average(&[2.0, 4.0, f64::NAN, 8.0], 2);
///
/// assert_eq!(ma[0], 2.0); // only one point in range
/// assert_eq!(ma[1], 3.0);
/// assert_eq!(ma[2], 4.0); // NaN skipped
/// assert_eq!(ma[3], 8.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn moving_average(series: &[f64], period: i64) -> Series {
    let mut result = Vec::with_capacity(series.len());

    for index in 0..series.len() {
        let mut sum = 0.0;
        let mut count = 0_usize;
        for value in trailing_window(series, index, period).iter().filter(|v| !v.is_nan()) {
            sum += value;
            count += 1;
        }
        result.push(if count == 0 { f64::NAN } else { sum / count as f64 });
    }

    result
}

/// Shifts a series by `offset` indices (`REF`).
///
/// `out[i] = series[i - offset]` when that index exists, `NaN` otherwise. A
/// positive offset looks back, zero is the identity and a negative offset
/// looks ahead.
///
/// # Example
/// ```
/// use formulang::interpreter::evaluator::function::window::reference;
///
/// let lagged = reference(&[1.0, 2.0, 3.0], 1);
///
/// assert!(lagged[0].is_nan());
/// assert_eq!(&lagged[1..], &[1.0, 2.0]);
/// ```
#[must_use]
pub fn reference(series: &[f64], offset: i64) -> Series {
    (0..series.len()).map(|index| {
                         shifted_index(index, offset, series.len()).map_or(f64::NAN, |i| series[i])
                     })
                     .collect()
}

/// Computes the highest non-`NaN` value of each trailing window (`HHV`).
///
/// # Example
/// ```
/// use formulang::interpreter::evaluator::function::window::highest;
///
/// assert_eq!(highest(&[3.0, 1.0, 2.0], 2), vec![3.0, 3.0, 2.0]);
/// ```
#[must_use]
pub fn highest(series: &[f64], period: i64) -> Series {
    window_extreme(series, period, f64::max)
}

/// Computes the lowest non-`NaN` value of each trailing window (`LLV`).
///
/// # Example
/// ```
/// use formulang::interpreter::evaluator::function::window::lowest;
///
/// assert_eq!(lowest(&[3.0, 1.0, 2.0], 2), vec![3.0, 1.0, 1.0]);
/// ```
#[must_use]
pub fn lowest(series: &[f64], period: i64) -> Series {
    window_extreme(series, period, f64::min)
}

fn window_extreme(series: &[f64], period: i64, pick: fn(f64, f64) -> f64) -> Series {
    (0..series.len()).map(|index| {
                         let window = trailing_window(series, index, period);
                         window.iter()
                               .copied()
                               .filter(|value| !value.is_nan())
                               .reduce(pick)
                               .unwrap_or(f64::NAN)
                     })
                     .collect()
}
