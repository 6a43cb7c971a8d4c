//! Decoding and encoding options.

/// Default maximum element nesting accepted by the decoder.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options for decoding markup into records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum element nesting depth before decoding fails
    pub max_depth: usize,

    /// Reject end tags whose name does not match the open element
    pub check_end_names: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            check_end_names: true,
        }
    }
}

impl DecodeOptions {
    /// Create new decode options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth (at least 1).
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.max(1);
        self
    }

    /// Enable or disable end tag name checking.
    pub fn with_check_end_names(mut self, check: bool) -> Self {
        self.check_end_names = check;
        self
    }
}

/// Options for encoding records back into markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Indentation as (character, width); None writes compact output
    pub indent: Option<(u8, usize)>,
}

impl EncodeOptions {
    /// Create new encode options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent nested elements with `width` spaces.
    pub fn with_indent(mut self, width: usize) -> Self {
        self.indent = Some((b' ', width));
        self
    }
}
