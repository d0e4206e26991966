//! Readers for the pages file (`<id> <title>`) and links file (`<src> <dst>`).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log2::*;

use crate::error::IngestError;
use crate::graph::{Graph, PageId};

/// Parse page records. The title is everything after the first space.
pub fn parse_pages<R: BufRead>(reader: R, path: &Path) -> Result<Vec<(PageId, String)>, IngestError> {
    let mut pages = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| IngestError::io(path, e))?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        let malformed = |reason: &str| IngestError::Malformed {
            path: path.to_path_buf(),
            line: number + 1,
            reason: reason.to_string(),
        };

        let (id, title) = line
            .split_once(' ')
            .ok_or_else(|| malformed("expected '<id> <title>'"))?;
        let id = parse_id(id).ok_or_else(|| malformed("page id is not a non-negative integer"))?;
        if title.is_empty() {
            return Err(malformed("empty title"));
        }
        pages.push((id, title.to_string()));
    }
    info!("Finished reading {} ({} pages)", path.display(), pages.len());
    Ok(pages)
}

/// Parse link records, exactly two ids per line.
pub fn parse_links<R: BufRead>(reader: R, path: &Path) -> Result<Vec<(PageId, PageId)>, IngestError> {
    let mut links = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| IngestError::io(path, e))?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        let malformed = || IngestError::Malformed {
            path: path.to_path_buf(),
            line: number + 1,
            reason: "expected '<src> <dst>'".to_string(),
        };

        let mut fields = line.split(' ');
        let (Some(src), Some(dst), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(malformed());
        };
        let src = parse_id(src).ok_or_else(malformed)?;
        let dst = parse_id(dst).ok_or_else(malformed)?;
        links.push((src, dst));
    }
    info!("Finished reading {} ({} links)", path.display(), links.len());
    Ok(links)
}

fn parse_id(field: &str) -> Option<PageId> {
    field.parse().ok()
}

fn open(path: &Path) -> Result<BufReader<File>, IngestError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| IngestError::io(path, e))
}

/// Read both files and build the graph
pub fn load_graph(pages_path: &Path, links_path: &Path) -> Result<Graph, IngestError> {
    let pages = parse_pages(open(pages_path)?, pages_path)?;
    let links = parse_links(open(links_path)?, links_path)?;
    let graph = Graph::build(pages, links)?;
    info!("Graph ready: {} pages, {} links", graph.page_count(), graph.link_count());
    Ok(graph)
}
