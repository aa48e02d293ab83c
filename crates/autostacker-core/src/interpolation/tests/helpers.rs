//! Shared constructors for expected trees

use crate::interpolation::{Expr, Interpolated, Join, MapLookup, Part};

pub(super) fn lit(text: &str) -> Part {
    Part::Literal(text.to_string())
}

pub(super) fn reference(name: &str) -> Expr {
    Expr::Reference(name.to_string())
}

pub(super) fn attribute(name: &str, path: &str) -> Expr {
    Expr::Attribute {
        name: name.to_string(),
        path: path.to_string(),
    }
}

pub(super) fn lookup(map: &str, keys: Vec<Part>) -> Expr {
    Expr::MapLookup(MapLookup::explicit(map, keys).expect("keys must not be empty"))
}

pub(super) fn join(parts: Vec<Part>) -> Interpolated {
    let result = Join::collapse(parts);
    assert!(
        matches!(result, Interpolated::Expr(Expr::Join(_))),
        "expected a join with at least two parts"
    );
    result
}

pub(super) fn expr(expr: Expr) -> Interpolated {
    Interpolated::Expr(expr)
}

pub(super) fn text(text: &str) -> Interpolated {
    Interpolated::Literal(text.to_string())
}

impl From<Expr> for Part {
    fn from(expr: Expr) -> Self {
        Part::Expr(expr)
    }
}
