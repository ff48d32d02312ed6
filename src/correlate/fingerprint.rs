//! Change fingerprinting.

use crate::model::Change;
use std::fmt::Write as _;

/// Compute the correlation fingerprint of a change.
///
/// The fingerprint is a 32-bit rolling hash over the lowercased
/// concatenation of the change's identifying fields in fixed order:
/// `property`, `original`, `new`, then the context positions
/// (`new_line`, `new_column`, `original_line`, `original_column`).
/// Absent, empty, and zero-valued fields are skipped entirely rather
/// than substituted; no delimiter separates fields. The result is the
/// signed 32-bit hash rendered in decimal, `"0"` for empty input.
///
/// The undelimited concatenation is ambiguous for adjacent numeric
/// fields (line 12 column 3 concatenates like line 1 column 23). This
/// matches the engine's published scheme and must not be "fixed" here;
/// [`build_index`](super::build_index) resolves collisions by
/// last-write-wins and counts them.
#[must_use]
pub fn fingerprint(change: &Change) -> String {
    let mut joined = String::with_capacity(64);
    push_str_field(&mut joined, Some(&change.property));
    push_str_field(&mut joined, change.original.as_deref());
    push_str_field(&mut joined, change.new.as_deref());
    push_num_field(&mut joined, change.context.new_line);
    push_num_field(&mut joined, change.context.new_column);
    push_num_field(&mut joined, change.context.original_line);
    push_num_field(&mut joined, change.context.original_column);
    hash_identity(&joined)
}

fn push_str_field(buf: &mut String, value: Option<&str>) {
    if let Some(v) = value {
        if !v.is_empty() {
            buf.push_str(v);
        }
    }
}

fn push_num_field(buf: &mut String, value: Option<u32>) {
    if let Some(v) = value {
        if v > 0 {
            let _ = write!(buf, "{v}");
        }
    }
}

/// The rolling hash itself: `h = (h << 5) - h + code` per UTF-16 code
/// unit of the lowercased input, wrapped to signed 32-bit.
fn hash_identity(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut hash: i32 = 0;
    for code in lowered.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(code));
    }
    hash.to_string()
}
