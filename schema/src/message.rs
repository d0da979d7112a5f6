use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::Enum;

/// A message definition. Messages nest to any depth: a message may declare
/// its own enums and messages alongside its fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    pub description: String,
    pub name:        String,
    pub fields:      Vec<MessageField>,
    pub enums:       Vec<Enum>,
    pub messages:    Vec<Message>,
}

impl Message {
    pub fn new(name: impl Into<String>) -> Self {
        Message {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_field(mut self, field: MessageField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_enum(mut self, enum_: Enum) -> Self {
        self.enums.push(enum_);
        self
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }
}

/// A single field of a message.
///
/// `type_` is either a scalar keyword (`string`, `uint32`, ...) or a reference
/// to another message or enum, dotted for nested types
/// (`NestedMessage.DoublyNestedEnum`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageField {
    pub description: String,
    pub id:          u32,
    pub name:        String,
    #[serde(rename = "type")]
    pub type_:       String,
    pub optional:    bool,
    pub repeated:    bool,
}

impl MessageField {
    pub fn new(id: u32, name: impl Into<String>, type_: impl Into<String>) -> Self {
        MessageField {
            id,
            name: name.into(),
            type_: type_.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    /// Collapses the two flags into one marker. `optional` takes priority
    /// when both are set.
    pub fn cardinality(&self) -> Cardinality {
        if self.optional {
            Cardinality::Optional
        } else if self.repeated {
            Cardinality::Repeated
        } else {
            Cardinality::Singular
        }
    }
}

/// Field multiplicity. Displays as the prefix written before the field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Singular,
    Optional,
    Repeated,
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Cardinality::Singular => Ok(()),
            Cardinality::Optional => f.write_str("optional "),
            Cardinality::Repeated => f.write_str("repeated "),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cardinality_prefers_optional() {
        let field = MessageField::new(1, "tags", "string").repeated().optional();
        assert_eq!(field.cardinality(), Cardinality::Optional);

        let field = MessageField::new(1, "tags", "string").repeated();
        assert_eq!(field.cardinality(), Cardinality::Repeated);

        let field = MessageField::new(1, "tags", "string");
        assert_eq!(field.cardinality(), Cardinality::Singular);
        assert_eq!(field.cardinality().to_string(), "");
    }

    #[test]
    fn field_type_serializes_as_type() {
        let field = MessageField::new(3, "global_enum", "GlobalEnum").optional();
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "GlobalEnum");
        assert_eq!(json["id"], 3);

        let back: MessageField = serde_json::from_value(json).unwrap();
        assert_eq!(back, field);
    }

    #[test]
    fn missing_json_keys_default() {
        let message: Message = serde_json::from_str(r#"{"name": "Empty"}"#).unwrap();
        assert_eq!(message, Message::new("Empty"));
    }
}
