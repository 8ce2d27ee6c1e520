//! Structural graph builder
//!
//! Parses every top-level block of a CommonMark document (headings,
//! paragraphs, code blocks, quotes, lists, tables, ...) into offset-ordered
//! [`StructuralElement`]s and derives typed edges between them:
//!
//! | Edge | Rule |
//! |------|------|
//! | `HAS_SUBSECTION` | nearest open heading with a lower level -> heading |
//! | `CONTAINS` | nearest open heading -> non-heading element |
//! | `SIBLING` | consecutive same-level headings under one parent |
//! | `PRECEDES` / `FOLLOWS` | every pair of adjacent elements, both directions |
//!
//! Nesting follows the same stack discipline as the hierarchy builder.
//! Headings are recognized from markdown syntax only.

use std::collections::HashMap;
use std::ops::Range;

use hdg_domain::entities::{ElementType, GraphEdge, RelationshipKind, StructuralElement, new_id};
use hdg_domain::error::Result;
use hdg_domain::navigation::GraphNavigator;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use tracing::debug;

/// Elements and edges of one document
#[derive(Debug, Clone, Default)]
pub struct StructuralGraph {
    /// Block-level elements in document order
    pub elements: Vec<StructuralElement>,
    /// Hierarchical edges in document order, then sequential edges
    pub edges: Vec<GraphEdge>,
}

/// Builds the block-level structural graph of a markdown document
#[derive(Debug, Clone, Copy)]
pub struct StructuralGraphBuilder {
    options: Options,
}

impl Default for StructuralGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StructuralGraphBuilder {
    /// Builder with tables, footnotes, strikethrough and task lists enabled
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        Self { options }
    }

    /// Parse `text` and derive the edge set
    ///
    /// The result is validated (forest invariant, offset ordering) before it
    /// is returned.
    pub fn build(&self, text: &str) -> Result<StructuralGraph> {
        let elements = self.parse_elements(text);
        let edges = derive_edges(&elements);

        GraphNavigator::new(&elements, &edges).validate()?;

        debug!(
            elements = elements.len(),
            edges = edges.len(),
            "Structural graph built"
        );
        Ok(StructuralGraph { elements, edges })
    }

    /// Top-level blocks of `text` in document order
    pub fn parse_elements(&self, text: &str) -> Vec<StructuralElement> {
        let mut elements = Vec::new();
        let mut depth = 0usize;
        let mut open: Option<OpenBlock> = None;

        for (event, range) in Parser::new_ext(text, self.options).into_offset_iter() {
            match event {
                Event::Start(tag) => {
                    if depth == 0 {
                        open = Some(OpenBlock::new(&tag, range));
                    }
                    depth += 1;
                }
                Event::End(tag_end) => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        if let Some(block) = open.take() {
                            elements.push(block.finish(text));
                        }
                    } else if let Some(block) = open.as_mut() {
                        block.end_inner(tag_end);
                    }
                }
                Event::Rule if depth == 0 => {
                    elements.push(
                        OpenBlock::standalone(ElementType::ThematicBreak, range).finish(text),
                    );
                }
                Event::Html(html) if depth == 0 => {
                    let mut block = OpenBlock::standalone(ElementType::HtmlBlock, range);
                    block.content.push_str(&html);
                    elements.push(block.finish(text));
                }
                Event::Text(t)
                | Event::Code(t)
                | Event::Html(t)
                | Event::InlineHtml(t)
                | Event::InlineMath(t)
                | Event::DisplayMath(t) => {
                    if let Some(block) = open.as_mut() {
                        block.content.push_str(&t);
                    }
                }
                Event::SoftBreak | Event::HardBreak => {
                    if let Some(block) = open.as_mut() {
                        block.content.push('\n');
                    }
                }
                _ => {}
            }
        }

        elements
    }
}

/// A top-level block being accumulated
struct OpenBlock {
    element_type: ElementType,
    level: Option<usize>,
    range: Range<usize>,
    content: String,
}

impl OpenBlock {
    fn new(tag: &Tag<'_>, range: Range<usize>) -> Self {
        let (element_type, level) = match tag {
            Tag::Heading { level, .. } => (ElementType::Heading, Some(*level as usize)),
            Tag::Paragraph => (ElementType::Paragraph, None),
            Tag::CodeBlock(_) => (ElementType::CodeBlock, None),
            Tag::BlockQuote(_) => (ElementType::Blockquote, None),
            Tag::List(_) => (ElementType::List, None),
            Tag::Table(_) => (ElementType::Table, None),
            Tag::HtmlBlock => (ElementType::HtmlBlock, None),
            Tag::FootnoteDefinition(_) => (ElementType::FootnoteDefinition, None),
            _ => (ElementType::Other, None),
        };
        Self {
            element_type,
            level,
            range,
            content: String::new(),
        }
    }

    fn standalone(element_type: ElementType, range: Range<usize>) -> Self {
        Self {
            element_type,
            level: None,
            range,
            content: String::new(),
        }
    }

    // Nested block ends become line breaks, table cells become separators
    fn end_inner(&mut self, tag_end: TagEnd) {
        match tag_end {
            TagEnd::TableCell => self.content.push_str(" | "),
            TagEnd::Paragraph
            | TagEnd::Item
            | TagEnd::Heading(_)
            | TagEnd::CodeBlock
            | TagEnd::TableHead
            | TagEnd::TableRow
            | TagEnd::BlockQuote(_)
            | TagEnd::List(_) => {
                if !self.content.is_empty() && !self.content.ends_with('\n') {
                    self.content.push('\n');
                }
            }
            _ => {}
        }
    }

    fn finish(self, text: &str) -> StructuralElement {
        let source = text.get(self.range.clone()).unwrap_or_default();
        let original_markdown = source.trim_end();
        let start_offset = self.range.start;

        StructuralElement {
            id: new_id(),
            element_type: self.element_type,
            level: self.level,
            content: self.content.trim().to_string(),
            original_markdown: original_markdown.to_string(),
            start_offset,
            end_offset: start_offset + original_markdown.len(),
        }
    }
}

/// Hierarchical edges via a heading stack, then adjacency edges
pub fn derive_edges(elements: &[StructuralElement]) -> Vec<GraphEdge> {
    let mut edges = Vec::new();
    let mut open: Vec<(usize, usize)> = Vec::new();
    let mut last_child: HashMap<Option<usize>, (usize, usize)> = HashMap::new();

    for (index, element) in elements.iter().enumerate() {
        if element.is_heading() {
            let level = element.level.unwrap_or(1);
            while open.last().is_some_and(|&(_, l)| l >= level) {
                open.pop();
            }
            let parent = open.last().map(|&(p, _)| p);

            if let Some(p) = parent {
                edges.push(GraphEdge::new(
                    &elements[p].id,
                    &element.id,
                    RelationshipKind::HasSubsection,
                ));
            }
            if let Some(&(previous, previous_level)) = last_child.get(&parent) {
                if previous_level == level {
                    edges.push(GraphEdge::new(
                        &elements[previous].id,
                        &element.id,
                        RelationshipKind::Sibling,
                    ));
                }
            }
            last_child.insert(parent, (index, level));
            open.push((index, level));
        } else if let Some(&(owner, _)) = open.last() {
            edges.push(GraphEdge::new(
                &elements[owner].id,
                &element.id,
                RelationshipKind::Contains,
            ));
        }
    }

    for pair in elements.windows(2) {
        edges.push(GraphEdge::new(
            &pair[0].id,
            &pair[1].id,
            RelationshipKind::Precedes,
        ));
        edges.push(GraphEdge::new(
            &pair[1].id,
            &pair[0].id,
            RelationshipKind::Follows,
        ));
    }

    edges
}
