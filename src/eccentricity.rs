use std::collections::VecDeque;

use log2::*;
use rayon::prelude::*;

use crate::graph::{Graph, PageId};

/// The two pages found farthest apart along outgoing links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FarthestPair<'g> {
    pub from: PageId,
    pub to: PageId,
    pub from_title: &'g str,
    pub to_title: &'g str,
    /// Number of links on the shortest path from `from` to `to`
    pub distance: usize,
}

const UNSEEN: usize = usize::MAX;

/// Reusable BFS buffers for one worker
struct Sweep {
    distance: Vec<usize>,
    touched: Vec<usize>,
    queue: VecDeque<usize>,
}

impl Sweep {
    fn new(page_count: usize) -> Self {
        Self {
            distance: vec![UNSEEN; page_count],
            touched: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    /// BFS from `source`; returns the first page discovered at the greatest
    /// distance, with that distance, or `None` if nothing is reachable.
    fn farthest_from(&mut self, graph: &Graph, source: usize) -> Option<(usize, usize)> {
        for &idx in &self.touched {
            self.distance[idx] = UNSEEN;
        }
        self.touched.clear();
        self.queue.clear();

        self.distance[source] = 0;
        self.touched.push(source);
        self.queue.push_back(source);

        let mut best: Option<(usize, usize)> = None;
        while let Some(current) = self.queue.pop_front() {
            let next_distance = self.distance[current] + 1;
            for &neighbor in graph.successors(current) {
                if self.distance[neighbor] != UNSEEN {
                    continue;
                }
                self.distance[neighbor] = next_distance;
                self.touched.push(neighbor);
                self.queue.push_back(neighbor);
                if best.is_none_or(|(_, d)| next_distance > d) {
                    best = Some((neighbor, next_distance));
                }
            }
        }
        best
    }
}

/// Runs a BFS from every page and returns the pair with the greatest distance.
///
/// Sources are swept in parallel on the current rayon pool. Candidates are then
/// reduced in page order keeping the first strictly greater distance, which
/// gives the same answer as sweeping sources one after another: on ties the
/// earliest source wins, and within a source the page discovered first.
/// Returns `None` when the graph has no pages or no links.
pub fn find_farthest_pair(graph: &Graph) -> Option<FarthestPair<'_>> {
    let n = graph.page_count();
    debug!("Sweeping BFS from {} sources", n);

    let candidates: Vec<Option<(usize, usize)>> = (0..n)
        .into_par_iter()
        .map_init(|| Sweep::new(n), |sweep, source| sweep.farthest_from(graph, source))
        .collect();

    let mut best: Option<(usize, usize, usize)> = None;
    for (source, candidate) in candidates.into_iter().enumerate() {
        if let Some((target, distance)) = candidate {
            if best.is_none_or(|(_, _, d)| distance > d) {
                best = Some((source, target, distance));
            }
        }
    }

    best.map(|(source, target, distance)| FarthestPair {
        from: graph.id_at(source),
        to: graph.id_at(target),
        from_title: graph.title_at(source),
        to_title: graph.title_at(target),
        distance,
    })
}
