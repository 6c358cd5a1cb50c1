//! JavaScript array literal builder.

/// Array literal whose elements are raw expressions.
#[derive(Debug, Clone, Default)]
pub struct JsArray {
    elements: Vec<String>,
}

impl JsArray {
    /// Create an array from raw expressions.
    pub fn from_raw<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: iter.into_iter().map(Into::into).collect(),
        }
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }
}
