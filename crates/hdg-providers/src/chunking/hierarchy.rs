//! Hierarchy builder
//!
//! Single left-to-right pass over the document lines that assembles the
//! chunk tree with an explicit context stack seeded by a synthetic root.
//!
//! Chunks live in an arena (`Vec<ChunkNode>`) addressed through an
//! identifier-to-index map. The stack holds `(id, level)` pairs, never
//! references, and every content flush replaces the arena slot with a new
//! chunk value.

use std::collections::HashMap;

use hdg_domain::entities::ChunkNode;
use tracing::{debug, trace};

use super::rules::RuleEngine;

/// Builds the heading-derived chunk tree for one document at a time
#[derive(Debug, Clone, Copy)]
pub struct HierarchyBuilder<'a> {
    engine: &'a RuleEngine,
}

impl<'a> HierarchyBuilder<'a> {
    /// Create a builder over a rule engine
    pub fn new(engine: &'a RuleEngine) -> Self {
        Self { engine }
    }

    /// Build the chunk list for `text`, in document order, root discarded
    ///
    /// Text before the first heading belongs to the synthetic root and is
    /// dropped along with it. Lines inside fenced code blocks are body text.
    pub fn build(&self, text: &str) -> Vec<ChunkNode> {
        let mut state = BuildState::new();
        let mut fence: Option<Fence> = None;

        for line in text.split_inclusive('\n') {
            let bare = line.trim_end_matches(['\n', '\r']);

            if let Some(open) = fence {
                if open.is_closed_by(bare) {
                    fence = None;
                }
                state.buffer.push_str(line);
                continue;
            }
            if let Some(open) = Fence::open(bare) {
                fence = Some(open);
                state.buffer.push_str(line);
                continue;
            }

            match self.engine.try_match(bare) {
                Some(heading) => {
                    state.flush();
                    state.close_to(heading.level);
                    let parent_id = state.open_parent_id();
                    trace!(
                        level = heading.level,
                        rule = %heading.rule_name,
                        title = %heading.clean_title,
                        "Heading matched"
                    );
                    state.open(ChunkNode::from_heading(&heading, parent_id));
                }
                None => state.buffer.push_str(line),
            }
        }
        state.flush();

        let chunks = state.into_chunks();
        debug!(chunks = chunks.len(), "Hierarchy built");
        chunks
    }
}

struct BuildState {
    arena: Vec<ChunkNode>,
    index: HashMap<String, usize>,
    stack: Vec<(String, usize)>,
    buffer: String,
}

impl BuildState {
    fn new() -> Self {
        let root = ChunkNode::root();
        let root_entry = (root.id().to_string(), root.level());
        let mut index = HashMap::new();
        index.insert(root_entry.0.clone(), 0);
        Self {
            arena: vec![root],
            index,
            stack: vec![root_entry],
            buffer: String::new(),
        }
    }

    /// Move pending body text into the chunk on top of the stack
    fn flush(&mut self) {
        let text = self.buffer.trim_matches(['\n', '\r']);
        if !text.trim().is_empty() {
            if let Some(slot) = self
                .stack
                .last()
                .and_then(|(id, _)| self.index.get(id).copied())
            {
                self.arena[slot] = self.arena[slot].with_appended_content(text);
            }
        }
        self.buffer.clear();
    }

    /// Pop every open chunk whose level is >= `level`; the root never pops
    fn close_to(&mut self, level: usize) {
        while self.stack.len() > 1 && self.stack.last().is_some_and(|(_, l)| *l >= level) {
            self.stack.pop();
        }
    }

    /// Parent for a new chunk; `None` when the root is on top
    fn open_parent_id(&self) -> Option<String> {
        if self.stack.len() > 1 {
            self.stack.last().map(|(id, _)| id.clone())
        } else {
            None
        }
    }

    fn open(&mut self, chunk: ChunkNode) {
        let entry = (chunk.id().to_string(), chunk.level());
        self.index.insert(entry.0.clone(), self.arena.len());
        self.arena.push(chunk);
        self.stack.push(entry);
    }

    fn into_chunks(self) -> Vec<ChunkNode> {
        self.arena.into_iter().skip(1).collect()
    }
}

/// An open fenced code block: marker character and run length
#[derive(Debug, Clone, Copy)]
struct Fence {
    marker: char,
    len: usize,
}

impl Fence {
    fn open(line: &str) -> Option<Self> {
        let (marker, len) = Self::marker_run(line)?;
        // Backtick fences cannot carry backticks in their info string
        let info = &line.trim_start()[len..];
        if marker == '`' && info.contains('`') {
            return None;
        }
        Some(Self { marker, len })
    }

    fn is_closed_by(self, line: &str) -> bool {
        Self::marker_run(line).is_some_and(|(marker, len)| {
            marker == self.marker
                && len >= self.len
                && line.trim_start()[len..].trim().is_empty()
        })
    }

    fn marker_run(line: &str) -> Option<(char, usize)> {
        let indent = line.len() - line.trim_start_matches(' ').len();
        if indent > 3 {
            return None;
        }
        let rest = &line[indent..];
        let marker = rest.chars().next().filter(|c| *c == '`' || *c == '~')?;
        let len = rest.chars().take_while(|c| *c == marker).count();
        (len >= 3).then_some((marker, len))
    }
}
