use std::path::Path;

use protodef_schema::Proto;

use crate::{
    error::Result,
    options::RenderOptions,
    renderer::render_proto,
    sink::write_proto_text,
};

/// Anything that can be written out as a `.proto` definition.
///
/// Implementors provide the text rendering; writing to a file comes for free.
pub trait ProtoDefWriter {
    fn to_proto_def(&self, options: &RenderOptions) -> Result<String>;

    fn write_proto_def(&self, options: &RenderOptions, path: &Path) -> Result<()> {
        let text = self.to_proto_def(options)?;
        write_proto_text(path, &text)
    }
}

impl ProtoDefWriter for Proto {
    fn to_proto_def(&self, options: &RenderOptions) -> Result<String> {
        render_proto(self, options)
    }
}
