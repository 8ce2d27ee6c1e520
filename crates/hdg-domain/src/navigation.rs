//! Read-only navigation over the structural graph
//!
//! Pure lookups over the element and edge lists. The navigator indexes the
//! hierarchical edges once at construction and never mutates the graph.

use std::collections::HashMap;

use crate::entities::{GraphEdge, StructuralElement};
use crate::error::{Error, Result};

/// Query layer over a borrowed element/edge list
#[derive(Debug)]
pub struct GraphNavigator<'a> {
    elements: &'a [StructuralElement],
    edges: &'a [GraphEdge],
    by_id: HashMap<&'a str, &'a StructuralElement>,
    parents: HashMap<&'a str, Vec<&'a str>>,
    children: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> GraphNavigator<'a> {
    /// Index the hierarchical edges of a graph
    pub fn new(elements: &'a [StructuralElement], edges: &'a [GraphEdge]) -> Self {
        let by_id = elements.iter().map(|e| (e.id.as_str(), e)).collect();
        let mut parents: HashMap<&str, Vec<&str>> = HashMap::new();
        let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
        for edge in edges.iter().filter(|e| e.kind.is_hierarchical()) {
            parents
                .entry(edge.target_id.as_str())
                .or_default()
                .push(edge.source_id.as_str());
            children
                .entry(edge.source_id.as_str())
                .or_default()
                .push(edge.target_id.as_str());
        }
        Self {
            elements,
            edges,
            by_id,
            parents,
            children,
        }
    }

    /// Look up an element by id
    pub fn element(&self, id: &str) -> Option<&'a StructuralElement> {
        self.by_id.get(id).copied()
    }

    /// Elements with no inbound hierarchical edge, in document order
    pub fn root_elements(&self) -> Vec<&'a StructuralElement> {
        self.elements
            .iter()
            .filter(|e| !self.parents.contains_key(e.id.as_str()))
            .collect()
    }

    /// Targets of hierarchical edges sourced at `id`, in edge order
    pub fn child_elements(&self, id: &str) -> Vec<&'a StructuralElement> {
        self.children
            .get(id)
            .map(|targets| targets.iter().filter_map(|t| self.element(t)).collect())
            .unwrap_or_default()
    }

    /// The source of the hierarchical edge targeting `id`, if any
    pub fn parent_element(&self, id: &str) -> Option<&'a StructuralElement> {
        self.parents
            .get(id)
            .and_then(|sources| sources.first())
            .and_then(|source| self.element(source))
    }

    /// Check the forest invariant, edge endpoints and offset ordering
    pub fn validate(&self) -> Result<()> {
        for edge in self.edges {
            for endpoint in [&edge.source_id, &edge.target_id] {
                if !self.by_id.contains_key(endpoint.as_str()) {
                    return Err(Error::internal(format!(
                        "{} edge references unknown element {endpoint}",
                        edge.kind
                    )));
                }
            }
        }

        if let Some((target, sources)) = self.parents.iter().find(|(_, s)| s.len() > 1) {
            return Err(Error::internal(format!(
                "Element {target} has {} hierarchical parents",
                sources.len()
            )));
        }

        for element in self.elements {
            let mut current = element.id.as_str();
            for _ in 0..=self.elements.len() {
                match self.parents.get(current).and_then(|s| s.first()) {
                    Some(parent) if *parent == element.id => {
                        return Err(Error::internal(format!(
                            "Hierarchical cycle through element {}",
                            element.id
                        )));
                    }
                    Some(parent) => current = *parent,
                    None => break,
                }
            }
        }

        for pair in self.elements.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if prev.start_offset > prev.end_offset
                || prev.end_offset > next.start_offset
                || prev.start_offset >= next.start_offset
            {
                return Err(Error::internal(format!(
                    "Element offsets out of order: {}..{} then {}..{}",
                    prev.start_offset, prev.end_offset, next.start_offset, next.end_offset
                )));
            }
        }

        Ok(())
    }
}
