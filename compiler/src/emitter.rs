/// Line-oriented text buffer with fixed-width indentation.
///
/// Indentation is expressed in levels; each level is `indent_width` spaces.
/// Blank lines never carry indentation.
pub struct Emitter {
    buf:          String,
    indent_width: usize,
}

impl Emitter {
    pub fn new(indent_width: usize) -> Self {
        Emitter {
            buf:          String::new(),
            indent_width: indent_width.max(1),
        }
    }

    pub fn write_line(&mut self, text: &str, indent: usize) {
        self.push_indent(indent);
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    pub fn blank_line(&mut self) {
        self.buf.push('\n');
    }

    /// Writes `text` as a block of `// ` comments, one per `\n`-separated
    /// segment. Only the empty string is skipped: whitespace is emitted as is,
    /// and a trailing newline yields a final bare `// ` line.
    pub fn write_description(&mut self, text: &str, indent: usize) {
        if text.is_empty() {
            return;
        }
        for line in text.split('\n') {
            self.push_indent(indent);
            self.buf.push_str("// ");
            self.buf.push_str(line);
            self.buf.push('\n');
        }
    }

    /// Closes a `{` block opened at `indent` and separates it from whatever
    /// follows with one blank line.
    pub fn close_block(&mut self, indent: usize) {
        self.write_line("}", indent);
        self.blank_line();
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn finish(self) -> String {
        self.buf
    }

    fn push_indent(&mut self, indent: usize) {
        let width = indent * self.indent_width;
        self.buf.reserve(width);
        for _ in 0..width {
            self.buf.push(' ');
        }
    }
}
