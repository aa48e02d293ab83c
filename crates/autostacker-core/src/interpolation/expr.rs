//! Expression grammar
//!
//! ```text
//! expr  := name ( '[' keys ']' | '.' path )?
//! name  := [A-Za-z_] ( [A-Za-z0-9_] | '::' )*
//! keys  := key ( ',' key )*        top-level commas only
//! key   := '@'-expression | text   whitespace trimmed
//! ```
//!
//! One key gives the convention lookup `NameMap[@Name, key]`, two or more an
//! explicit lookup in `Name`. Nothing follows a bracket lookup. Brackets
//! with a blank key are not a lookup and stay literal text.

use super::scanner::{self, ScanContext, INTRODUCER};
use super::tree::{Expr, MapLookup, Part};
use crate::error::{Error, Result};

/// How the extent of an expression is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// No delimiter; the expression ends where the grammar stops matching
    Greedy,
    /// The text is exactly the `@{ ... }` body
    Delimited,
}

pub(crate) fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_name_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_path_char(b: u8) -> bool {
    is_name_continue(b) || b == b'.'
}

/// Parse the expression starting at byte offset `start` of `text`
///
/// Returns the expression and the offset just past its last character, or
/// `None` if no name starts at `start`. Error offsets are shifted by `base`.
pub(crate) fn parse_expression(
    ctx: &ScanContext<'_>,
    text: &str,
    start: usize,
    mode: Mode,
    base: usize,
) -> Result<Option<(Expr, usize)>> {
    let name_end = scan_name(text, start);
    if name_end == start {
        return Ok(None);
    }
    let name = &text[start..name_end];

    match text.as_bytes().get(name_end) {
        Some(b'[') => parse_lookup(ctx, text, name, name_end, base).map(Some),
        Some(b'.') => Ok(Some(parse_attribute(text, name, name_end, mode))),
        _ => Ok(Some((Expr::Reference(name.to_string()), name_end))),
    }
}

/// End offset of the name starting at `start` (`start` itself if none)
fn scan_name(text: &str, start: usize) -> usize {
    let bytes = text.as_bytes();
    match bytes.get(start) {
        Some(&b) if is_name_start(b as char) => {}
        _ => return start,
    }

    let mut i = start + 1;
    loop {
        match bytes.get(i) {
            Some(&b) if is_name_continue(b) => i += 1,
            // `::` only joins when another name character follows
            Some(b':')
                if bytes.get(i + 1) == Some(&b':')
                    && bytes.get(i + 2).is_some_and(|&b| is_name_continue(b)) =>
            {
                i += 2
            }
            _ => return i,
        }
    }
}

fn parse_attribute(text: &str, name: &str, dot: usize, mode: Mode) -> (Expr, usize) {
    let path_start = dot + 1;
    let path_end = match mode {
        Mode::Delimited => text.len(),
        Mode::Greedy => {
            let bytes = text.as_bytes();
            let mut end = path_start;
            while bytes.get(end).is_some_and(|&b| is_path_char(b)) {
                end += 1;
            }
            // a sentence-ending dot is not part of the path
            while end > path_start && bytes[end - 1] == b'.' {
                end -= 1;
            }
            end
        }
    };

    if path_end == path_start {
        return (Expr::Reference(name.to_string()), dot);
    }
    let attribute = Expr::Attribute {
        name: name.to_string(),
        path: text[path_start..path_end].to_string(),
    };
    (attribute, path_end)
}

fn parse_lookup(
    ctx: &ScanContext<'_>,
    text: &str,
    name: &str,
    open: usize,
    base: usize,
) -> Result<(Expr, usize)> {
    let close = find_matching(text, open, '[', ']').ok_or_else(|| {
        Error::UnterminatedDelimiter {
            delimiter: '[',
            offset: base + open,
        }
    })?;

    let interior = &text[open + 1..close];
    let segments = split_keys(interior);
    if segments.iter().any(|(_, segment)| segment.is_empty()) {
        // `@Name[]`, `@Name[a,]`: a reference followed by literal brackets
        return Ok((Expr::Reference(name.to_string()), open));
    }

    let interior_start = base + open + 1;
    let mut keys = segments
        .into_iter()
        .map(|(offset, segment)| parse_key(ctx, segment, interior_start + offset))
        .collect::<Result<Vec<_>>>()?;

    let lookup = if keys.len() == 1 {
        MapLookup::by_convention(name, keys.remove(0))
    } else {
        match MapLookup::explicit(name, keys) {
            Some(lookup) => lookup,
            None => return Ok((Expr::Reference(name.to_string()), open)),
        }
    };
    Ok((Expr::MapLookup(lookup), close + 1))
}

/// Keys starting with `@` go through the full scanner, anything else is verbatim
fn parse_key(ctx: &ScanContext<'_>, segment: &str, offset: usize) -> Result<Part> {
    if segment.starts_with(INTRODUCER) {
        Ok(scanner::scan(ctx, segment, offset)?.into())
    } else {
        Ok(Part::Literal(segment.to_string()))
    }
}

/// Split on commas outside nested brackets and braces
///
/// Each key is trimmed and paired with its offset in `interior`.
fn split_keys(interior: &str) -> Vec<(usize, &str)> {
    fn trimmed(interior: &str, start: usize, end: usize) -> (usize, &str) {
        let raw = &interior[start..end];
        let lead = raw.len() - raw.trim_start().len();
        (start + lead, raw.trim())
    }

    let mut keys = Vec::new();
    let mut depth = 0usize;
    let mut key_start = 0;

    for (i, b) in interior.bytes().enumerate() {
        match b {
            b'[' | b'{' => depth += 1,
            b']' | b'}' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                keys.push(trimmed(interior, key_start, i));
                key_start = i + 1;
            }
            _ => {}
        }
    }
    keys.push(trimmed(interior, key_start, interior.len()));
    keys
}

/// Offset of the delimiter closing the one at `open`, tracking nesting
pub(crate) fn find_matching(text: &str, open: usize, opener: char, closer: char) -> Option<usize> {
    let (opener, closer) = (opener as u8, closer as u8);
    let mut depth = 0usize;

    for (i, &b) in text.as_bytes().iter().enumerate().skip(open) {
        if b == opener {
            depth += 1;
        } else if b == closer {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}
