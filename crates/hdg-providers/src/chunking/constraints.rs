//! Constraint processor
//!
//! Post-pass over the chunk list that bounds content size and applies
//! inter-chunk overlap. Oversized chunks are split along sentence or word
//! boundaries into ordered fragments; a unit that alone exceeds the budget
//! becomes its own oversized fragment rather than being cut.
//!
//! Sizes are measured in characters. Undersized chunks are never merged.

use hdg_domain::entities::ChunkNode;
use hdg_domain::error::Result;
use hdg_domain::value_objects::ConstraintOptions;
use tracing::{debug, trace};

/// Byte span of a split unit inside the chunk content
type Span = (usize, usize);

/// Enforces size and overlap constraints on a chunk list
#[derive(Debug, Clone)]
pub struct ConstraintProcessor {
    options: ConstraintOptions,
}

impl ConstraintProcessor {
    /// Create a processor; invalid options are rejected here
    pub fn new(options: ConstraintOptions) -> Result<Self> {
        options.ensure_valid()?;
        Ok(Self { options })
    }

    /// Options in effect
    pub fn options(&self) -> &ConstraintOptions {
        &self.options
    }

    /// Size every chunk, then apply overlap
    pub fn process(&self, chunks: Vec<ChunkNode>) -> Vec<ChunkNode> {
        let input = chunks.len();
        let sized: Vec<ChunkNode> = chunks
            .into_iter()
            .flat_map(|chunk| self.enforce_size(chunk))
            .collect();

        let output = if self.options.chunk_overlap > 0 {
            self.apply_overlap(sized)
        } else {
            sized
        };

        debug!(
            input,
            output = output.len(),
            max_chunk_size = self.options.max_chunk_size,
            chunk_overlap = self.options.chunk_overlap,
            "Constraints applied"
        );
        output
    }

    fn enforce_size(&self, chunk: ChunkNode) -> Vec<ChunkNode> {
        let len = chunk.content_len();

        if len > self.options.max_chunk_size {
            let fragments = self.split_content(chunk.content());
            if fragments.len() < 2 {
                return vec![chunk];
            }
            trace!(
                id = chunk.id(),
                len,
                fragments = fragments.len(),
                "Splitting oversized chunk"
            );
            return fragments
                .into_iter()
                .enumerate()
                .map(|(i, content)| {
                    if i == 0 {
                        chunk.with_content(content)
                    } else {
                        chunk.fragment(i + 1, content)
                    }
                })
                .collect();
        }

        if len < self.options.min_chunk_size && self.options.preserve_structure {
            trace!(id = chunk.id(), len, "Undersized chunk left in place");
        }
        vec![chunk]
    }

    /// Split content into ordered fragments no larger than the budget,
    /// except for single units that exceed it on their own
    pub fn split_content(&self, content: &str) -> Vec<String> {
        let max = self.options.max_chunk_size;
        let units: Vec<Span> = if self.options.split_on_sentences {
            sentence_spans(content)
                .into_iter()
                .flat_map(|span| {
                    if char_len(content, span) > max {
                        word_spans(&content[span.0..span.1])
                            .into_iter()
                            .map(|(s, e)| (span.0 + s, span.0 + e))
                            .collect::<Vec<_>>()
                    } else {
                        vec![span]
                    }
                })
                .collect()
        } else {
            word_spans(content)
        };

        pack(content, &units, max)
    }

    /// Prepend the tail of each predecessor's pre-overlap content
    fn apply_overlap(&self, chunks: Vec<ChunkNode>) -> Vec<ChunkNode> {
        let overlap = self.options.chunk_overlap;
        let originals: Vec<String> = chunks.iter().map(|c| c.content().to_string()).collect();

        chunks
            .into_iter()
            .enumerate()
            .map(|(i, chunk)| {
                let Some(previous) = i.checked_sub(1).map(|p| originals[p].as_str()) else {
                    return chunk;
                };
                match tail_chars(previous, overlap) {
                    Some(tail) => chunk.with_prefix(tail),
                    None => chunk,
                }
            })
            .collect()
    }
}

// Greedy packing: extend the current fragment while the slice from its
// first unit to the next unit's end stays within `max` characters
fn pack(content: &str, units: &[Span], max: usize) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut current: Option<Span> = None;

    for &(start, end) in units {
        current = match current {
            None => Some((start, end)),
            Some((cs, ce)) if char_len(content, (cs, end)) > max => {
                fragments.push(content[cs..ce].to_string());
                Some((start, end))
            }
            Some((cs, _)) => Some((cs, end)),
        };
    }
    if let Some((cs, ce)) = current {
        fragments.push(content[cs..ce].to_string());
    }
    fragments
}

/// Sentences end at `.`, `!` or `?` followed by whitespace or end of text
fn sentence_spans(content: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    let mut chars = content.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        let begin = *start.get_or_insert(i);
        if matches!(c, '.' | '!' | '?') {
            let at_boundary = chars.peek().is_none_or(|(_, next)| next.is_whitespace());
            if at_boundary {
                spans.push((begin, i + c.len_utf8()));
                start = None;
            }
        }
    }
    if let Some(begin) = start {
        let end = content.trim_end().len();
        if end > begin {
            spans.push((begin, end));
        }
    }
    spans
}

/// Maximal runs of non-whitespace characters
fn word_spans(content: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in content.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                spans.push((s, i));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, content.len()));
    }
    spans
}

fn char_len(content: &str, (start, end): Span) -> usize {
    content[start..end].chars().count()
}

/// Last `n` characters, or `None` when the text is shorter than `n`
fn tail_chars(text: &str, n: usize) -> Option<&str> {
    let len = text.chars().count();
    if n == 0 || len < n {
        return None;
    }
    let start = text
        .char_indices()
        .nth(len - n)
        .map_or(0, |(index, _)| index);
    Some(&text[start..])
}
