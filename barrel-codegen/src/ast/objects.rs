//! JavaScript object literal builder.

use std::fmt;

/// A property with a computed key, evaluated at load time: `[key]: value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub key: String,
    pub value: String,
}

impl Property {
    pub fn computed(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]: {}", self.key, self.value)
    }
}

/// Object literal made of computed-key properties.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a computed key (`[key]: value`).
    pub fn computed(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property::computed(key, value));
        self
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }
}
