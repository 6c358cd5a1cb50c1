//! JavaScript AST builders for the statements a barrel module is made of.
//!
//! These provide a high-level API for constructing JavaScript syntax,
//! which can then be rendered via CodeBuilder.

mod arrays;
mod exports;
mod imports;
mod objects;

pub use arrays::JsArray;
pub use exports::{ExportDefault, Expr};
pub use imports::Import;
pub use objects::{JsObject, Property};
