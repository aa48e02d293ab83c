//! Expression tree produced by interpolation

use serde::Serialize;
use std::fmt;

/// Result of interpolating one string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Interpolated {
    /// No expression was found; the text with escapes resolved
    Literal(String),

    /// A single expression, or a `Join` of literal text and expressions
    Expr(Expr),
}

/// A resolved expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Expr {
    /// `@Name`
    Reference(String),

    /// `@Name.attr.path`
    Attribute {
        /// Entity name
        name: String,
        /// Dotted attribute path, never reparsed
        path: String,
    },

    /// `@Map[k1, k2]` or the single-key convention `@Name[key]`
    MapLookup(MapLookup),

    /// Literal text mixed with expressions, in source order
    Join(Join),
}

/// One element of a `Join` or one key of a `MapLookup`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Part {
    Literal(String),
    Expr(Expr),
}

/// Map lookup with a non-empty key list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapLookup {
    map: String,
    keys: Vec<Part>,
}

impl MapLookup {
    /// Single-key convention: `@Env[key]` looks up `EnvMap[@Env, key]`
    pub fn by_convention(name: &str, key: Part) -> Self {
        Self {
            map: format!("{name}Map"),
            keys: vec![Part::Expr(Expr::Reference(name.to_string())), key],
        }
    }

    /// Explicit lookup in `map`; `None` when `keys` is empty
    pub fn explicit(map: impl Into<String>, keys: Vec<Part>) -> Option<Self> {
        if keys.is_empty() {
            return None;
        }
        Some(Self {
            map: map.into(),
            keys,
        })
    }

    pub fn map(&self) -> &str {
        &self.map
    }

    pub fn keys(&self) -> &[Part] {
        &self.keys
    }

    /// The looked-up name when this lookup follows the single-key convention
    fn convention_stem(&self) -> Option<&str> {
        let stem = self.map.strip_suffix("Map")?;
        match self.keys.as_slice() {
            [Part::Expr(Expr::Reference(name)), _] if name == stem => Some(stem),
            _ => None,
        }
    }
}

/// Concatenation of at least two parts
///
/// Adjacent literal parts are always merged, so literals and expressions
/// alternate except where two expressions follow each other directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Join {
    parts: Vec<Part>,
}

impl Join {
    /// Build the result for a part sequence
    ///
    /// Empty literals are dropped and adjacent literals merged. Fewer than two
    /// remaining parts collapse into a bare literal or bare expression.
    pub fn collapse(parts: Vec<Part>) -> Interpolated {
        let mut merged: Vec<Part> = Vec::with_capacity(parts.len());
        for part in parts {
            match part {
                Part::Literal(text) if text.is_empty() => {}
                Part::Literal(text) => match merged.last_mut() {
                    Some(Part::Literal(prev)) => prev.push_str(&text),
                    _ => merged.push(Part::Literal(text)),
                },
                part => merged.push(part),
            }
        }

        match merged.len() {
            0 => Interpolated::Literal(String::new()),
            1 => match merged.pop() {
                Some(Part::Expr(expr)) => Interpolated::Expr(expr),
                Some(Part::Literal(text)) => Interpolated::Literal(text),
                None => Interpolated::Literal(String::new()),
            },
            _ => Interpolated::Expr(Expr::Join(Join { parts: merged })),
        }
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }
}

impl From<Interpolated> for Part {
    fn from(value: Interpolated) -> Self {
        match value {
            Interpolated::Literal(text) => Part::Literal(text),
            Interpolated::Expr(expr) => Part::Expr(expr),
        }
    }
}

// Display renders canonical source syntax, used in diagnostics.

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for (i, chunk) in text.split('@').enumerate() {
        if i > 0 {
            f.write_str("@@")?;
        }
        f.write_str(chunk)?;
    }
    Ok(())
}

impl fmt::Display for Interpolated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interpolated::Literal(text) => write_escaped(f, text),
            Interpolated::Expr(expr) => fmt::Display::fmt(expr, f),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Literal(text) => write_escaped(f, text),
            Part::Expr(expr) => fmt::Display::fmt(expr, f),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Reference(name) => write!(f, "@{{{name}}}"),
            Expr::Attribute { name, path } => write!(f, "@{{{name}.{path}}}"),
            Expr::MapLookup(lookup) => {
                if let Some(stem) = lookup.convention_stem() {
                    return write!(f, "@{{{stem}[{}]}}", lookup.keys[1]);
                }
                write!(f, "@{{{}[", lookup.map)?;
                for (i, key) in lookup.keys.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}")?;
                }
                f.write_str("]}")
            }
            Expr::Join(join) => join
                .parts
                .iter()
                .try_for_each(|part| fmt::Display::fmt(part, f)),
        }
    }
}
