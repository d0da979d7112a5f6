//! protodef
//!
//! Build a schema tree in memory and render it as a `proto3` file.
//!
//! - Schema model (re-exported from `protodef-schema`)
//! - `render_proto` / `render_proto_to_file` and the `ProtoDefWriter` trait
//! - JSON interchange for schema trees
//!
//! ```
//! use protodef::*;
//!
//! let proto = Proto::new("example")
//!     .with_message(Message::new("M").with_field(MessageField::new(1, "f", "string")));
//!
//! let text = render_proto(&proto, &RenderOptions::default()).unwrap();
//! assert_eq!(text, "syntax = \"proto3\";\n\npackage example;\n\nmessage M {\n  string f = 1;\n}\n\n");
//! ```

pub use protodef_compiler::{
    render_proto, render_proto_to_file, ProtoDefError, ProtoDefWriter, RenderOptions, Result,
};
pub use protodef_schema::*;

/// Load a schema tree from JSON. Missing keys take their default values.
pub fn proto_from_json(json: &str) -> Result<Proto> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a schema tree to pretty-printed JSON.
pub fn proto_to_json(proto: &Proto) -> Result<String> {
    Ok(serde_json::to_string_pretty(proto)?)
}

/// Load a schema tree from JSON and render it.
pub fn render_json(json: &str, options: &RenderOptions) -> Result<String> {
    let proto = proto_from_json(json)?;
    render_proto(&proto, options)
}

pub mod error {
    pub use protodef_compiler::error::{ProtoDefError, Result};
}

pub mod schema {
    pub use protodef_schema::*;
}
