use crate::graph::Graph;

/// Default number of titles reported by [`longest_titles`]
pub const DEFAULT_TITLE_COUNT: usize = 15;

/// Pages reaching the highest in-degree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MostLinked<'g> {
    pub in_degree: usize,
    /// Every page with `in_degree` incoming links, in declaration order
    pub titles: Vec<&'g str>,
}

/// Titles containing an underscore are slug-like multi-word pages and are skipped by default
pub fn is_slug_title(title: &str) -> bool {
    title.contains('_')
}

/// The `count` longest titles by character length, longest first.
///
/// Ties keep declaration order. Titles matched by `exclude` are skipped and
/// do not count toward `count`.
pub fn longest_titles<'g, F>(graph: &'g Graph, count: usize, exclude: F) -> Vec<&'g str>
where
    F: Fn(&str) -> bool,
{
    let mut titles: Vec<(usize, &str)> = graph
        .titles()
        .iter()
        .map(|t| (t.chars().count(), t.as_str()))
        .collect();
    // sort_by is stable
    titles.sort_by(|a, b| b.0.cmp(&a.0));

    titles
        .into_iter()
        .map(|(_, t)| t)
        .filter(|t| !exclude(*t))
        .take(count)
        .collect()
}

/// Incoming link count per page, indexed like [`Graph::all_ids`]
pub fn in_degrees(graph: &Graph) -> Vec<usize> {
    let mut counts = vec![0; graph.page_count()];
    for idx in 0..graph.page_count() {
        for &dst in graph.successors(idx) {
            counts[dst] += 1;
        }
    }
    counts
}

/// Pages with the maximum in-degree; `None` for a graph without pages
pub fn most_linked_pages(graph: &Graph) -> Option<MostLinked<'_>> {
    let counts = in_degrees(graph);
    let max = counts.iter().copied().max()?;
    let titles = counts
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c == max)
        .map(|(idx, _)| graph.title_at(idx))
        .collect();
    Some(MostLinked { in_degree: max, titles })
}
