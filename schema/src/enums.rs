use serde::{Deserialize, Serialize};

/// An enum definition, either at file scope or nested in a message.
///
/// proto3 requires the first constant to carry the value `0`; the renderer
/// rejects enums that break this.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Enum {
    pub description: String,
    pub name:        String,
    pub constants:   Vec<EnumConstant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumConstant {
    pub description: String,
    pub name:        String,
    pub value:       u32,
}

impl Enum {
    pub fn new(name: impl Into<String>, constants: Vec<EnumConstant>) -> Self {
        Enum {
            name: name.into(),
            constants,
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl EnumConstant {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        EnumConstant {
            name: name.into(),
            value,
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
