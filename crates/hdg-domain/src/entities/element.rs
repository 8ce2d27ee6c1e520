//! Structural element entity

use serde::{Deserialize, Serialize};

/// Block-level element kinds recognized by the structural graph builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    /// ATX or setext heading
    Heading,
    /// Paragraph of prose
    Paragraph,
    /// Fenced or indented code block
    CodeBlock,
    /// Block quote
    Blockquote,
    /// Ordered or unordered list
    List,
    /// Table
    Table,
    /// Thematic break (`---`)
    ThematicBreak,
    /// Raw HTML block
    HtmlBlock,
    /// Footnote definition
    FootnoteDefinition,
    /// Any other block-level construct
    Other,
}

impl ElementType {
    /// Stable lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::CodeBlock => "code_block",
            Self::Blockquote => "blockquote",
            Self::List => "list",
            Self::Table => "table",
            Self::ThematicBreak => "thematic_break",
            Self::HtmlBlock => "html_block",
            Self::FootnoteDefinition => "footnote_definition",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity: one block-level unit of the source document
///
/// Offsets are byte offsets into the source text. Across a document the
/// ranges never overlap and start offsets strictly increase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralElement {
    /// Unique identifier
    pub id: String,
    /// Block kind
    pub element_type: ElementType,
    /// Heading level, `None` for non-heading elements
    pub level: Option<usize>,
    /// Plain text content
    pub content: String,
    /// Verbatim source slice
    pub original_markdown: String,
    /// Start byte offset (inclusive)
    pub start_offset: usize,
    /// End byte offset (exclusive)
    pub end_offset: usize,
}

impl StructuralElement {
    /// Whether this element is a heading
    pub fn is_heading(&self) -> bool {
        self.element_type == ElementType::Heading
    }
}
