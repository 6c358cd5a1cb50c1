//! JavaScript default export builder.

use super::{arrays::JsArray, objects::JsObject};
use crate::builder::{CodeFragment, Renderable};

/// An expression that can be default-exported.
#[derive(Debug, Clone)]
pub enum Expr {
    Array(JsArray),
    Object(JsObject),
}

impl From<JsArray> for Expr {
    fn from(array: JsArray) -> Self {
        Self::Array(array)
    }
}

impl From<JsObject> for Expr {
    fn from(object: JsObject) -> Self {
        Self::Object(object)
    }
}

/// Builder for `export default <expr>` statements.
///
/// Non-empty literals are laid out one entry per line; empty ones stay
/// on the statement line.
#[derive(Debug, Clone)]
pub struct ExportDefault {
    expr: Expr,
}

impl ExportDefault {
    pub fn new(expr: impl Into<Expr>) -> Self {
        Self { expr: expr.into() }
    }

    fn literal(open: &str, close: &str, entries: Vec<String>) -> Vec<CodeFragment> {
        if entries.is_empty() {
            return vec![CodeFragment::line(format!("export default {open}{close}"))];
        }

        let last = entries.len() - 1;
        let body = entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                if i == last {
                    CodeFragment::Line(entry)
                } else {
                    CodeFragment::Line(format!("{entry},"))
                }
            })
            .collect();

        vec![CodeFragment::block(
            format!("export default {open}"),
            body,
            Some(close.to_string()),
        )]
    }
}

impl Renderable for ExportDefault {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match &self.expr {
            Expr::Array(array) => Self::literal("[", "]", array.elements().to_vec()),
            Expr::Object(object) => Self::literal(
                "{",
                "}",
                object.properties().iter().map(ToString::to_string).collect(),
            ),
        }
    }
}
