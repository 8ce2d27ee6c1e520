//! Unit tests for the graph navigator

use hdg_domain::{ElementType, GraphEdge, GraphNavigator, RelationshipKind, StructuralElement};

fn element(id: &str, element_type: ElementType, level: Option<usize>, start: usize) -> StructuralElement {
    StructuralElement {
        id: id.to_string(),
        element_type,
        level,
        content: id.to_string(),
        original_markdown: id.to_string(),
        start_offset: start,
        end_offset: start + 5,
    }
}

/// intro paragraph, then `# A` containing a paragraph and `## B`
fn sample() -> (Vec<StructuralElement>, Vec<GraphEdge>) {
    let elements = vec![
        element("intro", ElementType::Paragraph, None, 0),
        element("a", ElementType::Heading, Some(1), 10),
        element("p", ElementType::Paragraph, None, 20),
        element("b", ElementType::Heading, Some(2), 30),
    ];
    let edges = vec![
        GraphEdge::new("a", "p", RelationshipKind::Contains),
        GraphEdge::new("a", "b", RelationshipKind::HasSubsection),
        GraphEdge::new("intro", "a", RelationshipKind::Precedes),
        GraphEdge::new("a", "intro", RelationshipKind::Follows),
    ];
    (elements, edges)
}

#[test]
fn test_root_elements_ignore_sequential_edges() {
    let (elements, edges) = sample();
    let nav = GraphNavigator::new(&elements, &edges);
    let roots: Vec<&str> = nav.root_elements().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(roots, vec!["intro", "a"]);
}

#[test]
fn test_child_elements_follow_hierarchical_edges() {
    let (elements, edges) = sample();
    let nav = GraphNavigator::new(&elements, &edges);
    let children: Vec<&str> = nav.child_elements("a").iter().map(|e| e.id.as_str()).collect();
    assert_eq!(children, vec!["p", "b"]);
    assert!(nav.child_elements("intro").is_empty());
    assert!(nav.child_elements("missing").is_empty());
}

#[test]
fn test_parent_element() {
    let (elements, edges) = sample();
    let nav = GraphNavigator::new(&elements, &edges);
    assert_eq!(nav.parent_element("b").map(|e| e.id.as_str()), Some("a"));
    assert_eq!(nav.parent_element("p").map(|e| e.id.as_str()), Some("a"));
    assert!(nav.parent_element("a").is_none());
    assert!(nav.parent_element("intro").is_none());
}

#[test]
fn test_validate_accepts_forest() {
    let (elements, edges) = sample();
    assert!(GraphNavigator::new(&elements, &edges).validate().is_ok());
}

#[test]
fn test_validate_rejects_two_parents() {
    let (elements, mut edges) = sample();
    edges.push(GraphEdge::new("intro", "p", RelationshipKind::ParentOf));
    assert!(GraphNavigator::new(&elements, &edges).validate().is_err());
}

#[test]
fn test_validate_rejects_cycle() {
    let elements = vec![
        element("x", ElementType::Heading, Some(1), 0),
        element("y", ElementType::Heading, Some(2), 10),
    ];
    let edges = vec![
        GraphEdge::new("x", "y", RelationshipKind::HasSubsection),
        GraphEdge::new("y", "x", RelationshipKind::HasSubsection),
    ];
    assert!(GraphNavigator::new(&elements, &edges).validate().is_err());
}

#[test]
fn test_validate_rejects_unknown_endpoint() {
    let (elements, mut edges) = sample();
    edges.push(GraphEdge::new("a", "ghost", RelationshipKind::Contains));
    assert!(GraphNavigator::new(&elements, &edges).validate().is_err());
}

#[test]
fn test_validate_rejects_overlapping_offsets() {
    let mut elements = sample().0;
    elements[2].start_offset = 12;
    assert!(GraphNavigator::new(&elements, &[]).validate().is_err());
}
