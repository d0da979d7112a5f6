use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while rendering a schema tree.
///
/// Validation variants name the offending node by its scope path, a dotted
/// name rooted at the package (`example.ComplexType.NestedMessage`). Nodes
/// whose own name is missing are located by their index in the parent.
#[derive(Debug, Error)]
pub enum ProtoDefError {
    #[error("Package name cannot be empty")]
    MissingPackage,

    #[error("Import at index {index} cannot be empty")]
    EmptyImport { index: usize },

    #[error("Message at index {index} in {scope:?} has an empty name")]
    EmptyMessageName { scope: String, index: usize },

    #[error("Field at index {index} in message {message:?} has an empty name")]
    EmptyFieldName { message: String, index: usize },

    #[error("Field {field:?} in message {message:?} has an empty type")]
    EmptyFieldType { message: String, field: String },

    #[error("Field {field:?} in message {message:?} has id {id}, ids must be at least 1")]
    InvalidFieldId { message: String, field: String, id: u32 },

    #[error("Enum at index {index} in {scope:?} has an empty name")]
    EmptyEnumName { scope: String, index: usize },

    #[error("Enum {enum_name:?} must have at least one constant")]
    EmptyEnumConstants { enum_name: String },

    #[error("First constant {constant:?} of enum {enum_name:?} has value {value}, expected 0")]
    FirstConstantNotZero { enum_name: String, constant: String, value: u32 },

    #[error("Constant at index {index} in enum {enum_name:?} has an empty name")]
    EmptyConstantName { enum_name: String, index: usize },

    #[error("Service at index {index} in {scope:?} has an empty name")]
    EmptyServiceName { scope: String, index: usize },

    #[error("Method at index {index} in service {service:?} has an empty name")]
    EmptyMethodName { service: String, index: usize },

    #[error("Method {method:?} in service {service:?} has an empty request type")]
    EmptyMethodRequest { service: String, method: String },

    #[error("Method {method:?} in service {service:?} has an empty response type")]
    EmptyMethodResponse { service: String, method: String },

    #[error("Could not write proto to {}: {source}", .path.display())]
    WriteFailed {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProtoDefError>;
