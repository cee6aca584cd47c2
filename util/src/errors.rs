//! Helpers for error handling

/// Expands to a closure mapping an error into the given error constructor,
/// stringifying the source error
///
/// To be used in a `map_err` call
#[macro_export]
macro_rules! err_str {
    ($x:expr) => {
        |e| $x(e.to_string())
    };
}
