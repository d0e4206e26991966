use std::collections::HashMap;

use super::store::{Graph, PageId};
use crate::error::GraphError;

/// Lookup from title to page id.
///
/// Titles are not guaranteed unique. When several pages share a title the
/// one declared first in the pages file is the one returned.
#[derive(Debug, Default)]
pub struct TitleIndex {
    ids: HashMap<String, PageId>,
}

impl TitleIndex {
    pub fn new(graph: &Graph) -> Self {
        let mut ids = HashMap::with_capacity(graph.page_count());
        for (id, title) in graph.pages() {
            ids.entry(title.to_string()).or_insert(id);
        }
        Self { ids }
    }

    pub fn resolve(&self, title: &str) -> Result<PageId, GraphError> {
        self.ids
            .get(title)
            .copied()
            .ok_or_else(|| GraphError::UnknownTitle(title.to_string()))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
