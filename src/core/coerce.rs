// src/core/coerce.rs
// Cell text -> typed value. Unparsable input is None, never an error.
//
// Numbers are read from the *leading* part of the text. The pages decorate
// values with quality marks ("0.5 )", "12.1]"), which must not hide the value.

use super::bearing::Compass;

/// Leading integer, e.g. "13" -> 13, " 1.5 )" -> 1, "abc" -> None.
pub fn coerce_int(text: &str) -> Option<i32> {
    let t = text.trim_start();
    let b = t.as_bytes();
    let mut i = sign_len(b);
    let digits = count_digits(&b[i..]);
    if digits == 0 { return None; }
    i += digits;
    t[..i].parse().ok()
}

/// Leading decimal number with optional fraction and exponent.
/// "12.3" -> 12.3, ".5" -> 0.5, "0.5 )" -> 0.5, "--" -> None.
pub fn coerce_float(text: &str) -> Option<f64> {
    let t = text.trim_start();
    let b = t.as_bytes();
    let mut i = sign_len(b);

    let int_digits = count_digits(&b[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if b.get(i) == Some(&b'.') {
        frac_digits = count_digits(&b[i + 1..]);
        if frac_digits > 0 { i += 1 + frac_digits; }
    }
    if int_digits == 0 && frac_digits == 0 { return None; }

    // Exponent only counts when digits follow it.
    if matches!(b.get(i), Some(b'e' | b'E')) {
        let j = i + 1;
        let s = sign_len(&b[j..]);
        let exp_digits = count_digits(&b[j + s..]);
        if exp_digits > 0 { i = j + s + exp_digits; }
    }

    t[..i].parse().ok()
}

/// Wind direction label -> bearing in degrees.
pub fn coerce_bearing(text: &str) -> Option<f64> {
    Compass::from_label(text.trim()).map(Compass::degrees)
}

/// Trimmed text, None when empty.
pub fn coerce_text(text: &str) -> Option<String> {
    let t = text.trim();
    if t.is_empty() { None } else { Some(s!(t)) }
}

fn sign_len(b: &[u8]) -> usize {
    matches!(b.first(), Some(b'+' | b'-')) as usize
}

fn count_digits(b: &[u8]) -> usize {
    b.iter().take_while(|c| c.is_ascii_digit()).count()
}
