// src/core/html.rs
// Tolerant, case-insensitive tag scanning. No DOM; blocks are byte ranges.

/// ASCII-only lowercase; keeps byte offsets identical to the input.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Next `<open ...> ... close` block at or after `from`, as `(start, end)`.
/// `end` is exclusive and includes the closing pattern.
pub fn next_tag_block_ci(s: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let open = to_lower(open);
    let close = to_lower(close);

    let mut at = from;
    loop {
        let start = lc.get(at..)?.find(&open)? + at;
        // "<td" must not match "<tdx"; the next byte ends the tag name.
        let after = lc.as_bytes().get(start + open.len()).copied();
        if !matches!(after, Some(b'>' | b' ' | b'\t' | b'\r' | b'\n' | b'/')) {
            at = start + open.len();
            continue;
        }
        let open_end = s[start..].find('>')? + start + 1;
        let end_rel = lc[open_end..].find(&close)?;
        return Some((start, open_end + end_rel + close.len()));
    }
}

/// The opening tag of a block, e.g. `<td class="x">`.
pub fn opener(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..=i],
        None => block,
    }
}

/// Everything between the opening tag and the last `<` of the block.
pub fn inner_after_open_tag(block: &str) -> &str {
    if let (Some(oe), Some(cs)) = (block.find('>'), block.rfind('<')) {
        if cs > oe {
            return &block[oe + 1..cs];
        }
    }
    ""
}

/// Value of attribute `name` in an opening tag. Handles `a="v"`, `a='v'`, `a=v`.
/// A bare attribute (`<img alt>`) yields an empty value.
pub fn attr_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(tag);
    let name = to_lower(name);
    let b = lc.as_bytes();

    let mut from = 0usize;
    while let Some(rel) = lc[from..].find(&name) {
        let i = from + rel;
        from = i + name.len();

        // Must be a whole attribute name, preceded by whitespace.
        if i == 0 || !b[i - 1].is_ascii_whitespace() { continue; }

        let end = i + name.len();
        let mut j = end;
        while j < b.len() && b[j].is_ascii_whitespace() { j += 1; }
        match b.get(j) {
            Some(b'=') => j += 1,
            _ if j > end => return Some(""),
            Some(b'>' | b'/') | None => return Some(""),
            _ => continue,
        }
        while j < b.len() && b[j].is_ascii_whitespace() { j += 1; }

        return match b.get(j) {
            Some(&q @ (b'"' | b'\'')) => {
                let v0 = j + 1;
                let v1 = tag[v0..].find(q as char).map(|e| v0 + e).unwrap_or(tag.len());
                Some(&tag[v0..v1])
            }
            Some(_) => {
                let v1 = tag[j..]
                    .find(|c: char| c.is_ascii_whitespace() || c == '>')
                    .map(|e| j + e)
                    .unwrap_or(tag.len());
                Some(tag[j..v1].trim_end_matches('/'))
            }
            None => Some(""),
        };
    }
    None
}

/// First `<table>` block whose `id` attribute equals `id`.
pub fn table_by_id<'a>(doc: &'a str, id: &str) -> Option<&'a str> {
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(doc, "<table", "</table>", pos) {
        let block = &doc[s..e];
        if attr_value(opener(block), "id") == Some(id) {
            return Some(block);
        }
        pos = s + opener(block).len();
    }
    None
}
