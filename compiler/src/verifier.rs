//! Structural rules checked while a tree is rendered.
//!
//! Each check looks at one node and reports the first violation. Only the
//! rules proto3 files cannot do without are enforced: non-empty names and
//! types, positive field ids and a zero-valued first enum constant. Names are
//! not checked against the identifier grammar and duplicates are not detected.

use protodef_schema::{Enum, EnumConstant, Message, MessageField, Service, ServiceMethod};

use crate::error::{ProtoDefError, Result};

/// Joins a parent scope and a child name into a dotted scope path.
pub fn scope_path(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", scope, name)
    }
}

pub fn verify_package(package: &str) -> Result<()> {
    if package.is_empty() {
        return Err(ProtoDefError::MissingPackage);
    }
    Ok(())
}

pub fn verify_import(import: &str, index: usize) -> Result<()> {
    if import.is_empty() {
        return Err(ProtoDefError::EmptyImport { index });
    }
    Ok(())
}

pub fn verify_message_name(message: &Message, scope: &str, index: usize) -> Result<()> {
    if message.name.is_empty() {
        return Err(ProtoDefError::EmptyMessageName {
            scope: scope.to_string(),
            index,
        });
    }
    Ok(())
}

/// `message` is the scope path of the enclosing message.
pub fn verify_field(
    field:           &MessageField,
    message:         &str,
    index:           usize,
    strict_field_id: bool,
) -> Result<()> {
    if field.name.is_empty() {
        return Err(ProtoDefError::EmptyFieldName {
            message: message.to_string(),
            index,
        });
    }
    if field.type_.is_empty() {
        return Err(ProtoDefError::EmptyFieldType {
            message: message.to_string(),
            field:   field.name.clone(),
        });
    }
    if strict_field_id && field.id < 1 {
        return Err(ProtoDefError::InvalidFieldId {
            message: message.to_string(),
            field:   field.name.clone(),
            id:      field.id,
        });
    }
    Ok(())
}

pub fn verify_enum_name(enum_: &Enum, scope: &str, index: usize) -> Result<()> {
    if enum_.name.is_empty() {
        return Err(ProtoDefError::EmptyEnumName {
            scope: scope.to_string(),
            index,
        });
    }
    Ok(())
}

/// `enum_name` is the scope path of the enum.
pub fn verify_enum_constants(enum_: &Enum, enum_name: &str) -> Result<()> {
    let first = match enum_.constants.first() {
        Some(first) => first,
        None => {
            return Err(ProtoDefError::EmptyEnumConstants {
                enum_name: enum_name.to_string(),
            })
        }
    };
    if first.value != 0 {
        return Err(ProtoDefError::FirstConstantNotZero {
            enum_name: enum_name.to_string(),
            constant:  first.name.clone(),
            value:     first.value,
        });
    }
    Ok(())
}

pub fn verify_constant(constant: &EnumConstant, enum_name: &str, index: usize) -> Result<()> {
    if constant.name.is_empty() {
        return Err(ProtoDefError::EmptyConstantName {
            enum_name: enum_name.to_string(),
            index,
        });
    }
    Ok(())
}

pub fn verify_service_name(service: &Service, scope: &str, index: usize) -> Result<()> {
    if service.name.is_empty() {
        return Err(ProtoDefError::EmptyServiceName {
            scope: scope.to_string(),
            index,
        });
    }
    Ok(())
}

/// `service` is the scope path of the enclosing service.
pub fn verify_method(method: &ServiceMethod, service: &str, index: usize) -> Result<()> {
    if method.name.is_empty() {
        return Err(ProtoDefError::EmptyMethodName {
            service: service.to_string(),
            index,
        });
    }
    if method.request.is_empty() {
        return Err(ProtoDefError::EmptyMethodRequest {
            service: service.to_string(),
            method:  method.name.clone(),
        });
    }
    if method.response.is_empty() {
        return Err(ProtoDefError::EmptyMethodResponse {
            service: service.to_string(),
            method:  method.name.clone(),
        });
    }
    Ok(())
}
