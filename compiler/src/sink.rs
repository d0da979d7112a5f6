use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use log::debug;
use protodef_schema::Proto;

use crate::{
    error::{ProtoDefError, Result},
    options::RenderOptions,
    renderer::render_proto,
};

/// Renders `proto` and writes the text to `path`, creating or truncating it.
///
/// Nothing is touched on disk unless the render succeeds. New files are
/// created with mode `0o777` on Unix, subject to the process umask.
pub fn render_proto_to_file(
    proto:   &Proto,
    options: &RenderOptions,
    path:    impl AsRef<Path>,
) -> Result<()> {
    let text = render_proto(proto, options)?;
    write_proto_text(path.as_ref(), &text)
}

/// Writes already rendered text to `path`, creating or truncating it.
pub fn write_proto_text(path: &Path, text: &str) -> Result<()> {
    write_text(path, text).map_err(|source| ProtoDefError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

fn write_text(path: &Path, text: &str) -> std::io::Result<()> {
    let mut open = OpenOptions::new();
    open.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        open.mode(0o777);
    }
    let mut file = open.open(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()
}
