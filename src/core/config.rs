/// Layout settings shared by all renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Character repeated to draw banner rules
    pub banner_char: char,
    /// Banner width for responses (default: 60)
    pub response_banner: usize,
    /// Banner width for JSON, mappings and sequences (default: 40)
    pub data_banner: usize,
    /// Banner width for message lists (default: 50)
    pub messages_banner: usize,
    /// Banner width for token usage (default: 30)
    pub usage_banner: usize,
    /// Spaces per nesting level for `render_json_default` (default: 2)
    pub json_indent: usize,
    /// Display width for `render_mapping_default` (default: 80)
    pub mapping_width: usize,
    /// Display width debug dumps are wrapped to (default: 100)
    pub debug_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            banner_char: '=',
            response_banner: 60,
            data_banner: 40,
            messages_banner: 50,
            usage_banner: 30,
            json_indent: 2,
            mapping_width: 80,
            debug_width: 100,
        }
    }
}

impl RenderConfig {
    pub fn with_banner_char(mut self, banner_char: char) -> Self {
        self.banner_char = banner_char;
        self
    }

    pub fn with_json_indent(mut self, indent: usize) -> Self {
        self.json_indent = indent;
        self
    }

    pub fn with_mapping_width(mut self, width: usize) -> Self {
        self.mapping_width = width;
        self
    }

    pub fn with_debug_width(mut self, width: usize) -> Self {
        self.debug_width = width;
        self
    }

    /// Scale every banner rule to the same width.
    pub fn with_banner_width(mut self, width: usize) -> Self {
        self.response_banner = width;
        self.data_banner = width;
        self.messages_banner = width;
        self.usage_banner = width;
        self
    }
}
