//! Coordinate text formatting.

use crate::geometry::Position;

/// Writes a single number in its shortest round-trip decimal form.
///
/// `102.0` is written as `102`, negative zero as `0`.
pub fn write_number(out: &mut String, value: f64) {
    if value == 0.0 {
        out.push('0');
    } else {
        out.push_str(&value.to_string());
    }
}

/// Writes numbers of a position separated by `separator`.
pub fn write_position(out: &mut String, position: &[f64], separator: char) {
    for (idx, value) in position.iter().enumerate() {
        if idx > 0 {
            out.push(separator);
        }
        write_number(out, *value);
    }
}

/// Writes a list of positions. Numbers inside a tuple are joined with `cs`, tuples with `ts`.
pub fn write_positions(out: &mut String, positions: &[Position], cs: char, ts: char) {
    for (idx, position) in positions.iter().enumerate() {
        if idx > 0 {
            out.push(ts);
        }
        write_position(out, position, cs);
    }
}
