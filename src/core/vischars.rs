// src/core/vischars.rs
// Visible-text character iterator for an HTML fragment, roughly what a
// browser would report as innerText for a table cell.
// Skips tags (<...>), decodes entities (&...;), collapses whitespace to ' '.

use super::sanitize::{decode_entity, normalize_ws};

/// Longest entity body we try to decode; beyond that '&' is literal.
const MAX_ENTITY: usize = 10;

pub struct VisChars<'a> {
    s: &'a str,
    b: &'a [u8],
    i: usize,
    n: usize,
}

impl<'a> VisChars<'a> {
    pub fn new(s: &'a str) -> Self { Self { s, b: s.as_bytes(), i: 0, n: s.len() } }

    #[inline]
    fn skip_tag(&mut self) {
        // called when current byte is '<'
        self.i += 1;
        let mut in_s = false; // '
        let mut in_d = false; // "
        while self.i < self.n {
            match self.b[self.i] {
                b'\'' if !in_d => in_s = !in_s,
                b'"'  if !in_s => in_d = !in_d,
                b'>' if !in_s && !in_d => { self.i += 1; break; }
                _ => {}
            }
            self.i += 1;
        }
    }

    #[inline]
    fn entity(&mut self) -> char {
        // called when current byte is '&'
        let body_start = self.i + 1;
        let limit = (body_start + MAX_ENTITY + 1).min(self.n);
        let semi = self.b[body_start..limit].iter().position(|&c| c == b';');
        if let Some(rel) = semi {
            let body = &self.s[body_start..body_start + rel];
            if let Some(ch) = decode_entity(body) {
                self.i = body_start + rel + 1;
                return ch;
            }
        }
        self.i += 1;
        '&'
    }

    #[inline]
    fn next_char(&mut self) -> Option<char> {
        let ch = self.s[self.i..].chars().next()?;
        self.i += ch.len_utf8();
        Some(ch)
    }
}

impl<'a> Iterator for VisChars<'a> {
    type Item = char;
    fn next(&mut self) -> Option<Self::Item> {
        while self.i < self.n {
            match self.b[self.i] {
                b'<' => { self.skip_tag(); continue; }
                b'&' => return Some(self.entity()),
                b' ' | b'\t' | b'\r' | b'\n' => {
                    // collapse consecutive whitespace to a single space
                    while self.i < self.n {
                        match self.b[self.i] { b' ' | b'\t' | b'\r' | b'\n' => self.i += 1, _ => break }
                    }
                    return Some(' ');
                }
                _ => return self.next_char(),
            }
        }
        None
    }
}

/// Rendered text of a fragment, whitespace-normalized and trimmed.
pub fn visible_text(fragment: &str) -> String {
    normalize_ws(&VisChars::new(fragment).collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_entities() {
        assert_eq!(visible_text("<td>12.3</td>"), "12.3");
        assert_eq!(visible_text("1.5&nbsp;)"), "1.5 )");
        assert_eq!(visible_text("<span title=\"a>b\">北</span>&nbsp; "), "北");
        assert_eq!(visible_text("a &amp; b"), "a & b");
    }

    #[test]
    fn stray_ampersand_is_literal() {
        assert_eq!(visible_text("A & B"), "A & B");
        assert_eq!(visible_text("x&y"), "x&y");
    }

    #[test]
    fn image_only_cell_is_empty() {
        assert_eq!(visible_text(r#"<img src="x.png" alt="晴れ">"#), "");
    }

    #[test]
    fn multibyte_passes_through() {
        assert_eq!(visible_text("<td>\n  北北東\n</td>"), "北北東");
    }
}
