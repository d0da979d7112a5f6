use serde::{Deserialize, Serialize};

use crate::{enums::Enum, message::Message, service::Service};

/// The root of a schema tree: one `.proto` file.
///
/// Top-level sequences are rendered in the order they are stored here. Nothing
/// is sorted or deduplicated, so two identical imports produce two import
/// lines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Proto {
    /// Free text rendered as a `//` comment block at the top of the file.
    /// An empty string means no header.
    pub description: String,
    pub package:     String,
    pub options:     Vec<ProtoOption>,
    pub imports:     Vec<String>,
    pub enums:       Vec<Enum>,
    pub messages:    Vec<Message>,
    pub services:    Vec<Service>,
}

/// A file-level compiler directive.
///
/// Only the Go package override is modelled. Options are carried through the
/// tree (and through JSON) but are not rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtoOption {
    pub go_package: String,
}

impl Proto {
    pub fn new(package: impl Into<String>) -> Self {
        Proto {
            package: package.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
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

    pub fn with_service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }
}
