/// Call dispatch.
///
/// Maps each reserved function to its kernel and rejects reserved functions
/// that have none.
pub mod core;

/// Window kernels: `MA`, `REF`, `HHV` and `LLV`.
///
/// Each kernel takes a series and an integer window length (or offset) and
/// returns a series of the same length.
pub mod window;
