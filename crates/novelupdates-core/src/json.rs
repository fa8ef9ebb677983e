//! JSON rendering with a configurable indent

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;

/// Indent used when none (or an out-of-range one) is requested
pub const DEFAULT_INDENT: usize = 2;

/// Largest accepted indent
pub const MAX_INDENT: i32 = 8;

/// Resolve a requested indent to a number of spaces.
///
/// Values in `1..=8` are used as-is; anything else, or `None`, gives 2.
pub fn indent_width(indent: Option<i32>) -> usize {
    match indent {
        Some(n @ 1..=MAX_INDENT) => n as usize,
        _ => DEFAULT_INDENT,
    }
}

/// Serialize `value` as pretty-printed JSON.
///
/// # Arguments
/// * `value` - Any serializable record (or slice of records)
/// * `indent` - Spaces per nesting level, see [`indent_width`]
///
/// # Errors
/// Returns `EncodingError` if serialization fails
pub fn to_json<T: Serialize + ?Sized>(value: &T, indent: Option<i32>) -> Result<Vec<u8>> {
    let spaces = " ".repeat(indent_width(indent));
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(spaces.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(out)
}
