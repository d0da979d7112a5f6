use serde::{Deserialize, Serialize};

pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Settings for a single render call.
///
/// The two capability flags select which rule set is active:
/// `services_enabled` renders the `services` of a [`Proto`](protodef_schema::Proto)
/// (they are skipped otherwise), and `strict_field_id` rejects field ids
/// below 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Spaces per nesting level. Always at least 1.
    pub indent_width:     usize,
    pub services_enabled: bool,
    pub strict_field_id:  bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            indent_width:     DEFAULT_INDENT_WIDTH,
            services_enabled: true,
            strict_field_id:  true,
        }
    }
}

impl RenderOptions {
    /// Services off and no field id check: plain message and enum files.
    pub fn messages_only() -> Self {
        RenderOptions::default().with_services(false)
    }

    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width.max(1);
        self
    }

    /// Toggles services together with the field id check, the two always
    /// travel as one capability. Use [`with_strict_field_id`](Self::with_strict_field_id)
    /// afterwards to split them.
    pub fn with_services(mut self, enabled: bool) -> Self {
        self.services_enabled = enabled;
        self.strict_field_id = enabled;
        self
    }

    pub fn with_strict_field_id(mut self, strict: bool) -> Self {
        self.strict_field_id = strict;
        self
    }
}
