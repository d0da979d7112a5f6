//! protodef-compiler
//!
//! This crate implements:
//!  1) A line emitter with fixed-width indentation and `//` description blocks,
//!  2) Per-node structural checks (empty names and types, field ids, first enum value),
//!  3) The recursive renderer (`render_proto` → `String`),
//!  4) A file sink (`render_proto_to_file`) and the `ProtoDefWriter` trait,
//!  5) Render options (`RenderOptions`) and the error type (`ProtoDefError`).

pub mod error;
pub mod options;
pub mod emitter;
pub mod verifier;
pub mod renderer;
pub mod sink;
pub mod traits;

pub use error::{ProtoDefError, Result};
pub use options::RenderOptions;
pub use renderer::render_proto;
pub use sink::render_proto_to_file;
pub use traits::ProtoDefWriter;
