//! Graph edge entity

use serde::{Deserialize, Serialize};

/// Relationship kinds between structural elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipKind {
    /// Heading to a nested heading
    HasSubsection,
    /// Generic parent to child relationship
    ParentOf,
    /// Heading to the non-heading content it owns
    Contains,
    /// Same-level headings sharing a parent
    Sibling,
    /// Later element to the element just before it
    Follows,
    /// Earlier element to the element just after it
    Precedes,
}

impl RelationshipKind {
    /// Nesting relationships; restricted to these the graph is a forest
    pub fn is_hierarchical(self) -> bool {
        matches!(self, Self::HasSubsection | Self::ParentOf | Self::Contains)
    }

    /// Pure document-order relationships
    pub fn is_sequential(self) -> bool {
        matches!(self, Self::Follows | Self::Precedes)
    }

    /// Stable upper-case name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HasSubsection => "HAS_SUBSECTION",
            Self::ParentOf => "PARENT_OF",
            Self::Contains => "CONTAINS",
            Self::Sibling => "SIBLING",
            Self::Follows => "FOLLOWS",
            Self::Precedes => "PRECEDES",
        }
    }
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity: directed, typed relationship between two elements
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Source element identifier
    pub source_id: String,
    /// Target element identifier
    pub target_id: String,
    /// Relationship kind
    pub kind: RelationshipKind,
}

impl GraphEdge {
    /// Create a new edge
    pub fn new(
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        kind: RelationshipKind,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            kind,
        }
    }
}
