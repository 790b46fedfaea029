use std::collections::HashMap;

use crate::error::EvalError;

/// An ordered sequence of points, one per time index. `NaN` marks "no data".
pub type Series = Vec<f64>;

/// User-assigned names and the series computed for them.
pub type SymbolTable = HashMap<String, Series>;

/// The externally supplied input series of one run (e.g. `CLOSE`, `HIGH`).
///
/// Construction checks that every series has the same length, which is also
/// the length numeric literals are broadcast to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSeries {
    series: HashMap<String, Series>,
    len:    usize,
}

impl InputSeries {
    /// Validates and wraps a map of named series.
    ///
    /// Series are compared in name order, so the error for a mismatched map
    /// is deterministic: the lexicographically first name sets the expected
    /// length.
    ///
    /// # Errors
    /// Returns [`EvalError::InconsistentSeriesLength`] if two series differ in
    /// length.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use formulang::interpreter::series::InputSeries;
    ///
    /// let ok = InputSeries::new(HashMap::from([("CLOSE".to_string(), vec![1.0, 2.0]),
    ///                                          ("OPEN".to_string(), vec![1.5, 2.5])])).unwrap();
    /// assert_eq!(ok.len(), 2);
    ///
    /// let ragged = HashMap::from([("CLOSE".to_string(), vec![1.0, 2.0]),
    ///                             ("OPEN".to_string(), vec![1.5])]);
    /// assert!(InputSeries::new(ragged).is_err());
    /// ```
    pub fn new(series: HashMap<String, Series>) -> Result<Self, EvalError> {
        let mut names: Vec<&String> = series.keys().collect();
        names.sort();

        let mut len = None;
        for name in names {
            let found = series[name].len();
            match len {
                None => len = Some(found),
                Some(expected) if expected != found => {
                    return Err(EvalError::InconsistentSeriesLength { name: name.clone(),
                                                                     expected,
                                                                     found });
                },
                Some(_) => {},
            }
        }

        Ok(Self { len: len.unwrap_or(0),
                  series })
    }

    /// The common length of all input series; `0` when there are none.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the run has zero time indices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Looks up an input series by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Series> {
        self.series.get(name)
    }
}
