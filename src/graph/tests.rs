use super::*;
use crate::error::GraphError;

fn pages(entries: &[(PageId, &str)]) -> Vec<(PageId, String)> {
    entries.iter().map(|(id, t)| (*id, t.to_string())).collect()
}

// tests for `Graph::build` start here
#[test]
fn test_build_abc() -> Result<(), Box<dyn std::error::Error>> {
    let graph = Graph::build(pages(&[(1, "A"), (2, "B"), (3, "C")]), vec![(1, 2), (2, 3)])?;

    assert_eq!(graph.page_count(), 3);
    assert_eq!(graph.link_count(), 2);
    assert_eq!(graph.title(2)?, "B");
    assert_eq!(graph.neighbors(1)?.collect::<Vec<_>>(), vec![2]);
    assert_eq!(graph.neighbors(3)?.count(), 0);
    assert_eq!(graph.all_ids().collect::<Vec<_>>(), vec![1, 2, 3]);
    Ok(())
}

#[test]
fn test_duplicate_id_rejected() {
    let result = Graph::build(pages(&[(1, "A"), (2, "B"), (1, "C")]), vec![]);
    assert_eq!(result.unwrap_err(), GraphError::DuplicateId(1));
}

#[test]
fn test_unknown_destination_rejected() {
    let result = Graph::build(pages(&[(1, "A")]), vec![(1, 7)]);
    assert_eq!(
        result.unwrap_err(),
        GraphError::UnknownPage { src: 1, dst: 7, missing: 7 }
    );
}

#[test]
fn test_unknown_source_rejected() {
    let result = Graph::build(pages(&[(1, "A")]), vec![(9, 1)]);
    assert_eq!(
        result.unwrap_err(),
        GraphError::UnknownPage { src: 9, dst: 1, missing: 9 }
    );
}

/// Link order survives, duplicates and self-loops included
#[test]
fn test_neighbor_order_preserved() -> Result<(), Box<dyn std::error::Error>> {
    let graph = Graph::build(
        pages(&[(10, "A"), (20, "B"), (30, "C")]),
        vec![(10, 30), (10, 20), (10, 10), (10, 30)],
    )?;
    assert_eq!(graph.neighbors(10)?.collect::<Vec<_>>(), vec![30, 20, 10, 30]);
    assert_eq!(graph.link_count(), 4);
    Ok(())
}

#[test]
fn test_every_destination_is_a_page() -> Result<(), Box<dyn std::error::Error>> {
    let graph = Graph::build(
        pages(&[(5, "A"), (3, "B"), (8, "C"), (1, "D")]),
        vec![(5, 3), (3, 8), (8, 5), (1, 1), (5, 1), (3, 5)],
    )?;
    for id in graph.all_ids() {
        for dst in graph.neighbors(id)? {
            assert!(graph.contains(dst), "dangling destination {}", dst);
        }
    }
    Ok(())
}

#[test]
fn test_missing_page_lookups() -> Result<(), Box<dyn std::error::Error>> {
    let graph = Graph::build(pages(&[(1, "A")]), vec![])?;
    assert_eq!(graph.title(2).unwrap_err(), GraphError::NoSuchPage(2));
    assert!(graph.neighbors(2).is_err());
    Ok(())
}

#[test]
fn test_empty_graph() -> Result<(), Box<dyn std::error::Error>> {
    let graph = Graph::build(Vec::new(), Vec::new())?;
    assert!(graph.is_empty());
    assert_eq!(graph.all_ids().count(), 0);
    Ok(())
}
// tests for `Graph::build` end here

// tests for `TitleIndex` start here
#[test]
fn test_title_index_resolves() -> Result<(), Box<dyn std::error::Error>> {
    let graph = Graph::build(pages(&[(1, "A"), (2, "Two words")]), vec![])?;
    let index = TitleIndex::new(&graph);
    assert_eq!(index.resolve("Two words")?, 2);
    assert_eq!(
        index.resolve("missing").unwrap_err(),
        GraphError::UnknownTitle("missing".to_string())
    );
    Ok(())
}

/// First page declared with a title wins
#[test]
fn test_title_index_duplicate_titles() -> Result<(), Box<dyn std::error::Error>> {
    let graph = Graph::build(pages(&[(4, "Same"), (2, "Same"), (9, "Other")]), vec![])?;
    let index = TitleIndex::new(&graph);
    assert_eq!(index.resolve("Same")?, 4);
    assert_eq!(index.len(), 2);
    Ok(())
}
// tests for `TitleIndex` end here
