/// Shifts `index` back by `offset` and checks the result against `len`.
///
/// Returns `Some(index - offset)` if that is a valid index into a slice of
/// length `len`, and `None` if it falls before the start, at or past the end,
/// or cannot be represented.
///
/// ## Example
/// ```
/// use formulang::util::num::shifted_index;
///
/// assert_eq!(shifted_index(5, 2, 10), Some(3));
/// assert_eq!(shifted_index(1, 2, 10), None);
/// assert_eq!(shifted_index(8, -1, 10), Some(9));
/// assert_eq!(shifted_index(9, -1, 10), None);
/// assert_eq!(shifted_index(0, i64::MIN, 10), None);
/// ```
#[must_use]
pub fn shifted_index(index: usize, offset: i64, len: usize) -> Option<usize> {
    let index = i64::try_from(index).ok()?;
    let shifted = usize::try_from(index.checked_sub(offset)?).ok()?;
    (shifted < len).then_some(shifted)
}
