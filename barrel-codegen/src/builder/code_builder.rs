//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Renderable};

/// One indent level in generated barrels.
const INDENT: &str = "    ";

/// Accumulates code with 4-space indentation.
///
/// # Example
///
/// ```
/// use barrelgen_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::new();
/// builder.apply_fragment(CodeFragment::block(
///     "export default [",
///     vec![CodeFragment::line("Button")],
///     Some("]".to_string()),
/// ));
///
/// assert_eq!(builder.build(), "export default [\n    Button\n]\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.indent_level += 1;
                for f in body {
                    self.apply_fragment(f);
                }
                self.indent_level -= 1;
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_and_blank() {
        let mut builder = CodeBuilder::new();
        builder
            .push_line("import A from \"./a.js\"")
            .push_blank()
            .push_line("export default []");

        assert_eq!(
            builder.build(),
            "import A from \"./a.js\"\n\nexport default []\n"
        );
    }

    #[test]
    fn test_apply_block_fragment() {
        let mut builder = CodeBuilder::new();
        builder.apply_fragment(CodeFragment::block(
            "export default {",
            vec![CodeFragment::line("[A.id]: A,"), CodeFragment::line("[B.id]: B")],
            Some("}".to_string()),
        ));
        assert_eq!(
            builder.build(),
            "export default {\n    [A.id]: A,\n    [B.id]: B\n}\n"
        );
    }

    #[test]
    fn test_nested_blocks_indent_twice() {
        let mut builder = CodeBuilder::new();
        builder.apply_fragment(CodeFragment::block(
            "a",
            vec![CodeFragment::block("b", vec![CodeFragment::line("c")], None)],
            None,
        ));
        builder.push_line("d");
        assert_eq!(builder.build(), "a\n    b\n        c\nd\n");
    }
}
