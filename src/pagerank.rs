//! Power-iteration PageRank.
//!
//! Every iteration builds a fresh score vector from the previous one and then
//! replaces it, so no update of the current pass is visible to itself.
//! Dangling pages (no outgoing links) pass their mass to nobody, so the total
//! drifts below 1 when they exist; nothing renormalizes it.

use log2::*;

use crate::graph::{Graph, PageId};

pub const DEFAULT_ITERATIONS: usize = 100;
pub const DEFAULT_DAMPING: f64 = 0.85;
/// How many entries the report shows
pub const DEFAULT_TOP: usize = 10;

#[derive(Debug, Clone, Copy)]
pub struct PageRankConfig {
    /// Number of passes; always run in full, there is no convergence test
    pub iterations: usize,
    pub damping: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            damping: DEFAULT_DAMPING,
        }
    }
}

impl PageRankConfig {
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }
}

/// A single ranked page
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPage<'g> {
    pub id: PageId,
    pub title: &'g str,
    pub score: f64,
}

/// Final scores, one per page
#[derive(Debug)]
pub struct PageRanks<'g> {
    graph: &'g Graph,
    scores: Vec<f64>,
}

impl<'g> PageRanks<'g> {
    pub fn score(&self, id: PageId) -> Option<f64> {
        self.graph.index_of(id).map(|idx| self.scores[idx])
    }

    /// Sum of all scores
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Every page with its score, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = RankedPage<'g>> + '_ {
        self.scores.iter().enumerate().map(move |(idx, &score)| RankedPage {
            id: self.graph.id_at(idx),
            title: self.graph.title_at(idx),
            score,
        })
    }

    /// The `count` highest scores, highest first; equal scores by ascending page id
    pub fn top(&self, count: usize) -> Vec<RankedPage<'g>> {
        let mut ranked: Vec<RankedPage<'g>> = self.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.id.cmp(&b.id)));
        ranked.truncate(count);
        ranked
    }
}

/// Runs exactly `config.iterations` passes starting from the uniform prior `1/N`.
pub fn page_rank(graph: &Graph, config: PageRankConfig) -> PageRanks<'_> {
    let n = graph.page_count();
    if n == 0 {
        return PageRanks { graph, scores: Vec::new() };
    }

    let n_f64 = n as f64;
    let teleport = (1.0 - config.damping) / n_f64;
    let mut scores = vec![1.0 / n_f64; n];

    for iteration in 0..config.iterations {
        let mut next = vec![teleport; n];
        for (page, &score) in scores.iter().enumerate() {
            let targets = graph.successors(page);
            if targets.is_empty() {
                continue;
            }
            let share = config.damping * score / targets.len() as f64;
            for &dst in targets {
                next[dst] += share;
            }
        }
        scores = next;
        trace!("Iteration {}: total mass {}", iteration + 1, scores.iter().sum::<f64>());
    }

    debug!("PageRank finished {} iterations over {} pages", config.iterations, n);
    PageRanks { graph, scores }
}
