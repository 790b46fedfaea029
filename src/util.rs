/// Checked index arithmetic.
///
/// Converts between signed offsets and slice indices without wrapping, so
/// out-of-range shifts are reported as `None` instead of panicking.
pub mod num;
