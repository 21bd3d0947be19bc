use std::fmt;

use serde::{Deserialize, Serialize};

/// Source model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelA {
    pub field1: String,
    pub field2: String,
}

impl ModelA {
    /// Field names in declaration order.
    pub const FIELD_NAMES: &'static [&'static str] = &["field1", "field2"];

    pub fn new(field1: impl Into<String>, field2: impl Into<String>) -> Self {
        Self {
            field1: field1.into(),
            field2: field2.into(),
        }
    }
}

impl fmt::Display for ModelA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A: Field1 = {}, Field2 = {}", self.field1, self.field2)
    }
}

/// First destination model.
///
/// Rendered with positional labels (`Field1`, `Field2`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelB {
    pub field3: String,
    pub field4: String,
}

impl ModelB {
    /// Field names in declaration order.
    pub const FIELD_NAMES: &'static [&'static str] = &["field3", "field4"];

    pub fn new(field3: impl Into<String>, field4: impl Into<String>) -> Self {
        Self {
            field3: field3.into(),
            field4: field4.into(),
        }
    }
}

impl fmt::Display for ModelB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B: Field1 = {}, Field2 = {}", self.field3, self.field4)
    }
}

/// Second destination model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelC {
    pub field5: String,
    pub field6: String,
}

impl ModelC {
    /// Field names in declaration order.
    pub const FIELD_NAMES: &'static [&'static str] = &["field5", "field6"];

    pub fn new(field5: impl Into<String>, field6: impl Into<String>) -> Self {
        Self {
            field5: field5.into(),
            field6: field6.into(),
        }
    }
}

impl fmt::Display for ModelC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C: Field1 = {}, Field2 = {}", self.field5, self.field6)
    }
}
