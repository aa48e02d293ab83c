//! Accumulation of literal runs and expressions into a result

use super::tree::{Expr, Interpolated, Join, Part};

/// Collects the parts of one interpolation in source order
///
/// Text is buffered in an open literal run that is only closed when an
/// expression arrives, so a literal never gets split.
#[derive(Debug, Default)]
pub(crate) struct TreeBuilder {
    parts: Vec<Part>,
    run: String,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_str(&mut self, text: &str) {
        self.run.push_str(text);
    }

    pub fn push_char(&mut self, c: char) {
        self.run.push(c);
    }

    pub fn push_expr(&mut self, expr: Expr) {
        self.close_run();
        self.parts.push(Part::Expr(expr));
    }

    pub fn finish(mut self) -> Interpolated {
        self.close_run();
        Join::collapse(self.parts)
    }

    fn close_run(&mut self) {
        if !self.run.is_empty() {
            self.parts.push(Part::Literal(std::mem::take(&mut self.run)));
        }
    }
}
