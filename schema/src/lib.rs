//! Schema tree types for the protodef renderer.
//!
//! A [`Proto`] is the root of a tree of messages, enums and services that the
//! `protodef-compiler` crate turns into `proto3` source text. The types here
//! are plain data: they carry no validation of their own, and the renderer
//! only ever borrows them.
//!
//! ```
//! use protodef_schema::*;
//!
//! let mut proto = Proto::new("example");
//! proto.messages.push(
//!     Message::new("Point")
//!         .with_field(MessageField::new(1, "x", "float"))
//!         .with_field(MessageField::new(2, "y", "float").optional()),
//! );
//!
//! let point = &proto.messages[0];
//! assert_eq!(point.fields[1].cardinality(), Cardinality::Optional);
//! assert_eq!(format!("{}", point.fields[1].cardinality()), "optional ");
//! ```

pub mod enums;
pub mod message;
pub mod proto;
pub mod service;

pub use enums::*;
pub use message::*;
pub use proto::*;
pub use service::*;
