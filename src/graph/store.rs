use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log2::*;

use crate::error::GraphError;

/// Page identifier as it appears in the pages and links files
pub type PageId = u64;

/// Frozen page/link graph.
///
/// Pages are kept in declaration order and addressed internally by a dense
/// index, so every analysis iterates pages in the order of the pages file
/// and neighbors in the order of the links file.
#[derive(Debug)]
pub struct Graph {
    /// Dense index -> page id
    ids: Vec<PageId>,
    /// Dense index -> title
    titles: Vec<String>,
    /// Page id -> dense index
    index_of: HashMap<PageId, usize>,
    /// Dense index -> outgoing links as dense indices, in link order
    links: Vec<Vec<usize>>,
    link_count: usize,
}

impl Graph {
    /// Builds the graph from page records `(id, title)` and link records `(src, dst)`.
    ///
    /// Fails on the first repeated page id or on the first link that names a page
    /// which was not declared.
    pub fn build<P, L>(pages: P, links: L) -> Result<Self, GraphError>
    where
        P: IntoIterator<Item = (PageId, String)>,
        L: IntoIterator<Item = (PageId, PageId)>,
    {
        let mut ids = Vec::new();
        let mut titles = Vec::new();
        let mut index_of = HashMap::new();

        for (id, title) in pages {
            match index_of.entry(id) {
                Entry::Occupied(_) => return Err(GraphError::DuplicateId(id)),
                Entry::Vacant(slot) => {
                    slot.insert(ids.len());
                }
            }
            ids.push(id);
            titles.push(title);
        }

        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); ids.len()];
        let mut link_count = 0;
        for (src, dst) in links {
            let lookup = |missing: PageId| GraphError::UnknownPage { src, dst, missing };
            let src_idx = *index_of.get(&src).ok_or_else(|| lookup(src))?;
            let dst_idx = *index_of.get(&dst).ok_or_else(|| lookup(dst))?;
            adjacency[src_idx].push(dst_idx);
            link_count += 1;
        }

        debug!("Built graph with {} pages and {} links", ids.len(), link_count);

        Ok(Self {
            ids,
            titles,
            index_of,
            links: adjacency,
            link_count,
        })
    }

    pub fn page_count(&self) -> usize {
        self.ids.len()
    }

    pub fn link_count(&self) -> usize {
        self.link_count
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: PageId) -> bool {
        self.index_of.contains_key(&id)
    }

    /// Title of page `id`
    pub fn title(&self, id: PageId) -> Result<&str, GraphError> {
        self.index(id).map(|idx| self.titles[idx].as_str())
    }

    /// Outgoing links of page `id`, duplicates and self-loops included, in link order
    pub fn neighbors(&self, id: PageId) -> Result<impl Iterator<Item = PageId> + '_, GraphError> {
        let idx = self.index(id)?;
        Ok(self.links[idx].iter().map(|&n| self.ids[n]))
    }

    /// Every page id, in declaration order
    pub fn all_ids(&self) -> impl Iterator<Item = PageId> + '_ {
        self.ids.iter().copied()
    }

    /// `(id, title)` for every page, in declaration order
    pub fn pages(&self) -> impl Iterator<Item = (PageId, &str)> + '_ {
        self.ids.iter().copied().zip(self.titles.iter().map(String::as_str))
    }

    fn index(&self, id: PageId) -> Result<usize, GraphError> {
        self.index_of
            .get(&id)
            .copied()
            .ok_or(GraphError::NoSuchPage(id))
    }

    // Dense-index accessors used by the traversal algorithms.

    pub(crate) fn index_of(&self, id: PageId) -> Option<usize> {
        self.index_of.get(&id).copied()
    }

    pub(crate) fn id_at(&self, idx: usize) -> PageId {
        self.ids[idx]
    }

    pub(crate) fn title_at(&self, idx: usize) -> &str {
        &self.titles[idx]
    }

    pub(crate) fn successors(&self, idx: usize) -> &[usize] {
        &self.links[idx]
    }

    pub(crate) fn titles(&self) -> &[String] {
        &self.titles
    }
}
