//! Value coercion and chunking for filter input
//!
//! User-entered filter text is always accepted. Ordering operators try to
//! read the text as a number, membership operators split it into bounded
//! groups, and everything else keeps the raw text.

use super::types::{Operator, TypedValue};

/// Default maximum number of values per membership group
pub const DEFAULT_CHUNK_SIZE: usize = 10;

/// Split `items` into consecutive groups of at most `size` elements
///
/// The last group may be shorter. Empty input yields no groups.
///
/// # Panics
///
/// Panics if `size` is zero.
///
/// # Examples
///
/// ```
/// use docbrowse::filters::chunk;
///
/// let groups = chunk(&[1, 2, 3, 4, 5], 2);
/// assert_eq!(groups, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
#[must_use]
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    assert!(size > 0, "chunk size must be at least 1");
    items.chunks(size).map(<[T]>::to_vec).collect()
}

/// Convert raw filter text into a typed value for `operator`
///
/// Unparseable numbers fall back to the original text; the store decides
/// how to compare it. Numbers too large for a float also fall back, while
/// a spelled-out infinity (`inf`, `-Infinity`) is kept.
#[must_use]
pub fn coerce_value(raw: &str, operator: Operator, chunk_size: usize) -> TypedValue {
    if operator.is_ordering() {
        parse_float(raw)
            .map(TypedValue::Float)
            .or_else(|| raw.parse::<i64>().ok().map(TypedValue::Integer))
            .unwrap_or_else(|| TypedValue::String(raw.to_string()))
    } else if operator.is_membership() {
        let values: Vec<String> = raw.split(',').map(str::to_string).collect();
        TypedValue::Chunks(chunk(&values, chunk_size))
    } else {
        TypedValue::String(raw.to_string())
    }
}

/// Parse a float, rejecting finite text that overflows to infinity
fn parse_float(raw: &str) -> Option<f64> {
    let value = raw.parse::<f64>().ok()?;
    if value.is_infinite() && !names_infinity(raw) {
        return None;
    }
    Some(value)
}

fn names_infinity(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
