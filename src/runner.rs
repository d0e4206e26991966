use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use log2::*;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::graph::{Graph, TitleIndex};
use crate::{eccentricity, pagerank, pathfinder, ranked, report, START_TIME};

pub type GraphRef = Arc<Graph>;
pub type ConfigRef = Arc<Config>;

/// Runs `analysis` on a blocking worker and logs how long it took
fn spawn_analysis<F>(name: &'static str, analysis: F) -> JoinHandle<String>
where
    F: FnOnce() -> String + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let started = Instant::now();
        info!("Analysis '{}' started", name);
        let section = analysis();
        info!(
            "Analysis '{}' finished in {:?} ({:?} since start)",
            name,
            started.elapsed(),
            START_TIME.elapsed()
        );
        section
    })
}

/// Runs every analysis concurrently over the shared graph and returns the
/// report sections in fixed order: longest titles, most linked pages,
/// shortest path, PageRank, farthest pair.
///
/// A failed query is reported in its own section and never stops the others.
pub async fn run(graph: GraphRef, cfg: ConfigRef) -> Result<Vec<String>> {
    let index = Arc::new(TitleIndex::new(&graph));
    let mut handles: Vec<JoinHandle<String>> = Vec::new();

    {
        let graph = Arc::clone(&graph);
        let count = cfg.title_count;
        handles.push(spawn_analysis("longest titles", move || {
            let titles = ranked::longest_titles(&graph, count, ranked::is_slug_title);
            report::format_longest_titles(&titles)
        }));
    }

    {
        let graph = Arc::clone(&graph);
        handles.push(spawn_analysis("most linked", move || {
            report::format_most_linked(ranked::most_linked_pages(&graph).as_ref())
        }));
    }

    {
        let graph = Arc::clone(&graph);
        let index = Arc::clone(&index);
        let cfg = Arc::clone(&cfg);
        handles.push(spawn_analysis("shortest path", move || {
            let outcome = pathfinder::find_shortest_path(&graph, &index, &cfg.start, &cfg.goal);
            if let Err(e) = &outcome {
                warn!("Shortest path query failed: {}", e);
            }
            report::format_path(&cfg.start, &cfg.goal, &outcome)
        }));
    }

    {
        let graph = Arc::clone(&graph);
        let rank_cfg = cfg.page_rank();
        let top = cfg.top_ranks;
        handles.push(spawn_analysis("pagerank", move || {
            let ranks = pagerank::page_rank(&graph, rank_cfg);
            report::format_page_ranks(&ranks, top)
        }));
    }

    if cfg.skip_farthest {
        info!("Skipping farthest pair sweep");
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(cfg.thread_count)
            .build()
            .context("Failed to build farthest pair thread pool")?;
        let graph = Arc::clone(&graph);
        handles.push(spawn_analysis("farthest pair", move || {
            let pair = pool.install(|| eccentricity::find_farthest_pair(&graph));
            report::format_farthest_pair(pair.as_ref())
        }));
    }

    let mut sections = Vec::with_capacity(handles.len());
    for handle in handles {
        sections.push(handle.await?);
    }
    Ok(sections)
}
