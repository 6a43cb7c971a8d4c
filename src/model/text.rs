//! Hyperlink and run models.

use serde::{Deserialize, Serialize};

use super::drawing::Drawing;
use super::graphic::RawXml;

/// A hyperlink (`w:hyperlink`) wrapping one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hyperlink {
    /// Relationship id of the link target (`r:id`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Bookmark name for links inside the document (`w:anchor`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,

    /// The linked run
    pub run: Run,
}

/// A run of content with shared formatting (`w:r`).
///
/// Formatting is not interpreted; `w:rPr` is kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Run properties (`w:rPr`), kept verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<RawXml>,

    /// Content items in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<RunContent>,
}

impl Run {
    /// Create a run holding one text item.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            properties: None,
            content: vec![RunContent::Text(text.into())],
        }
    }

    /// Plain text of the run; tabs become `\t`, breaks and carriage returns `\n`.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for item in &self.content {
            match item {
                RunContent::Text(t) => text.push_str(t),
                RunContent::Tab => text.push('\t'),
                RunContent::Break | RunContent::CarriageReturn => text.push('\n'),
                RunContent::Drawing(_) => {}
            }
        }
        text
    }

    /// Drawings embedded in the run.
    pub fn drawings(&self) -> impl Iterator<Item = &Drawing> {
        self.content.iter().filter_map(|item| match item {
            RunContent::Drawing(drawing) => Some(drawing),
            _ => None,
        })
    }
}

/// One content item of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunContent {
    /// `w:t`
    Text(String),
    /// `w:tab`
    Tab,
    /// `w:br`
    Break,
    /// `w:cr`
    CarriageReturn,
    /// `w:drawing`
    Drawing(Drawing),
}
