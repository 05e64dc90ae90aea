//! Path-data number formatting.
//!
//! Coordinates are written with at most 3 fractional digits, rounding ties half-up
//! (`Math.round(x * 1000) / 1000` semantics), with trailing zeros trimmed and `-0` folded to
//! `0`. Anchors (start, bend and end points) are therefore exact up to 3 decimal places, which
//! is well below a device pixel at any practical zoom. Non-finite values never reach the
//! output: they are written as `0`. Callers validate their inputs first, so this is a last line
//! for derived values only.

use std::fmt::Write as _;

pub fn fmt_path(v: f64) -> String {
    let mut out = String::new();
    fmt_path_into(&mut out, v);
    out
}

pub fn fmt_path_into(out: &mut String, v: f64) {
    if !v.is_finite() || v.abs() < 0.0005 {
        out.push('0');
        return;
    }

    let scaled = v * 1000.0;
    if !scaled.is_finite() || scaled.abs() >= i64::MAX as f64 {
        // Too large for the fixed-point path; the shortest round-trip form is still exact.
        let _ = write!(out, "{v}");
        return;
    }

    let k = (scaled + 0.5).floor() as i64;
    if k == 0 {
        out.push('0');
        return;
    }
    append_fixed_3dp_trimmed(out, k);
}

fn append_fixed_3dp_trimmed(out: &mut String, k: i64) {
    if k < 0 {
        out.push('-');
    }
    let abs = k.unsigned_abs();
    let int = abs / 1000;
    let frac = abs % 1000;
    let _ = write!(out, "{int}");
    if frac == 0 {
        return;
    }

    let mut digits = [b'0'; 3];
    digits[0] = b'0' + (frac / 100) as u8;
    digits[1] = b'0' + ((frac / 10) % 10) as u8;
    digits[2] = b'0' + (frac % 10) as u8;
    let mut len = 3;
    while len > 0 && digits[len - 1] == b'0' {
        len -= 1;
    }
    out.push('.');
    for &d in &digits[..len] {
        out.push(d as char);
    }
}

/// Writes `{cmd}{x},{y}`.
pub(crate) fn emit_cmd_pair(out: &mut String, cmd: char, x: f64, y: f64) {
    out.push(cmd);
    fmt_path_into(out, x);
    out.push(',');
    fmt_path_into(out, y);
}

/// Writes `C{x1},{y1},{x2},{y2},{x},{y}`.
pub(crate) fn emit_cmd_cubic(out: &mut String, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
    out.push('C');
    for (i, v) in [x1, y1, x2, y2, x, y].into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        fmt_path_into(out, v);
    }
}
