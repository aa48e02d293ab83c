//! Encoding of interpolation results as template intrinsic functions
//!
//! | Node           | Encoding                               |
//! |----------------|----------------------------------------|
//! | literal        | `"text"`                               |
//! | `Reference`    | `{"Ref": name}`                        |
//! | `Attribute`    | `{"Fn::GetAtt": [name, path]}`         |
//! | `MapLookup`    | `{"Fn::FindInMap": [map, key, ...]}`   |
//! | `Join`         | `{"Fn::Join": ["", [part, ...]]}`      |

use serde_json::{json, Value};

use crate::interpolation::{Expr, Interpolated, Part};

/// Encode an interpolation result
pub fn to_value(result: &Interpolated) -> Value {
    match result {
        Interpolated::Literal(text) => Value::String(text.clone()),
        Interpolated::Expr(expr) => expr.to_value(),
    }
}

impl Expr {
    /// Encode this expression as an intrinsic function object
    pub fn to_value(&self) -> Value {
        match self {
            Expr::Reference(name) => json!({ "Ref": name }),
            Expr::Attribute { name, path } => json!({ "Fn::GetAtt": [name, path] }),
            Expr::MapLookup(lookup) => {
                let mut args = Vec::with_capacity(lookup.keys().len() + 1);
                args.push(Value::String(lookup.map().to_string()));
                args.extend(lookup.keys().iter().map(Part::to_value));
                json!({ "Fn::FindInMap": args })
            }
            Expr::Join(join) => {
                let parts: Vec<Value> = join.parts().iter().map(Part::to_value).collect();
                json!({ "Fn::Join": ["", parts] })
            }
        }
    }
}

impl Part {
    pub fn to_value(&self) -> Value {
        match self {
            Part::Literal(text) => Value::String(text.clone()),
            Part::Expr(expr) => expr.to_value(),
        }
    }
}
