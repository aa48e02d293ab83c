//! `//` line comment removal for JSON templates
//!
//! Single forward pass over the characters using a state machine.

/// Comment scanning state
///
/// # State Transitions
///
/// ```text
/// Normal ──"──> InString ──\──> InEscape ──(any)──> InString
///   │  ▲          │
///   │  └────"─────┘
///   │
///   └──/──> SeenSlash ──/──> InComment ──\n──> Normal
///              │
///              └──(other)──> Normal (the '/' is kept)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Regular JSON outside strings
    Normal,

    /// Seen a single `/` outside a string
    SeenSlash,

    /// Inside `// ...` up to the end of line
    InComment,

    /// Inside a string literal
    InString,

    /// Seen `\` inside a string literal
    InEscape,
}

/// True when the template starts with a `//` comment
///
/// Only such templates get comments stripped; plain JSON is parsed as-is.
pub fn has_leading_comment(src: &str) -> bool {
    src.trim_start().starts_with("//")
}

/// Remove `//` comments outside string literals
///
/// Line breaks are kept so JSON parse errors still report the right line.
pub fn strip_comments(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut state = ScanState::Normal;

    for c in src.chars() {
        state = match (state, c) {
            (ScanState::Normal, '"') => {
                out.push(c);
                ScanState::InString
            }
            (ScanState::Normal, '/') => ScanState::SeenSlash,
            (ScanState::Normal, _) => {
                out.push(c);
                ScanState::Normal
            }
            (ScanState::SeenSlash, '/') => ScanState::InComment,
            (ScanState::SeenSlash, _) => {
                out.push('/');
                out.push(c);
                if c == '"' {
                    ScanState::InString
                } else {
                    ScanState::Normal
                }
            }
            (ScanState::InComment, '\n') => {
                out.push(c);
                ScanState::Normal
            }
            (ScanState::InComment, _) => ScanState::InComment,
            (ScanState::InString, '\\') => {
                out.push(c);
                ScanState::InEscape
            }
            (ScanState::InString, '"') => {
                out.push(c);
                ScanState::Normal
            }
            (ScanState::InString, _) | (ScanState::InEscape, _) => {
                out.push(c);
                ScanState::InString
            }
        };
    }

    if state == ScanState::SeenSlash {
        out.push('/');
    }
    out
}
