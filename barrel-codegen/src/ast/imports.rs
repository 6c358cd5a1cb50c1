//! JavaScript import builder.

use crate::builder::{CodeFragment, Renderable};

/// A default import: `import <name> from "<from>"`.
///
/// Barrel modules omit the trailing semicolon.
#[derive(Debug, Clone)]
pub struct Import {
    name: String,
    from: String,
}

impl Import {
    pub fn new(name: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            from: from.into(),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!(
            "import {} from \"{}\"",
            self.name, self.from
        ))]
    }
}
