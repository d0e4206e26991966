use std::collections::VecDeque;

use crate::error::GraphError;
use crate::graph::{Graph, TitleIndex};

/// One queued visit: the page reached and the queue entry it was reached from
struct Step {
    page: usize,
    parent: Option<usize>,
}

/// Find shortest path between two titled pages using BFS over outgoing links.
///
/// Returns `Err(UnknownTitle)` when either title has no page, `Ok(None)` when
/// the goal is unreachable, and otherwise the titles from `start` to `goal`
/// inclusive. A page is marked visited when it is dequeued, so it may sit in
/// the queue more than once; the first path to dequeue the goal wins.
pub fn find_shortest_path<'g>(
    graph: &'g Graph,
    index: &TitleIndex,
    start: &str,
    goal: &str,
) -> Result<Option<Vec<&'g str>>, GraphError> {
    use log2::debug;

    let start_idx = resolve(graph, index, start)?;
    let goal_idx = resolve(graph, index, goal)?;

    debug!("Searching for path from {} to {}", start, goal);

    let mut visited = vec![false; graph.page_count()];
    // Every enqueued step is kept so the winning path can be walked back
    let mut steps: Vec<Step> = vec![Step { page: start_idx, parent: None }];
    let mut queue: VecDeque<(usize, usize)> = VecDeque::from([(0, 0)]);
    let mut depth = 0;

    while let Some((step_idx, step_depth)) = queue.pop_front() {
        let current = steps[step_idx].page;

        if step_depth > depth {
            depth = step_depth;
            debug!("Searching at depth {}, {} entries in queue", depth, queue.len() + 1);
        }

        if current == goal_idx {
            debug!("Found goal at depth {}", step_depth);
            return Ok(Some(reconstruct(graph, &steps, step_idx)));
        }

        if visited[current] {
            continue;
        }
        visited[current] = true;

        for &neighbor in graph.successors(current) {
            if !visited[neighbor] {
                steps.push(Step { page: neighbor, parent: Some(step_idx) });
                queue.push_back((steps.len() - 1, step_depth + 1));
            }
        }
    }

    debug!(
        "No path found after visiting {} pages",
        visited.iter().filter(|&&v| v).count()
    );
    Ok(None)
}

fn resolve(graph: &Graph, index: &TitleIndex, title: &str) -> Result<usize, GraphError> {
    let id = index.resolve(title)?;
    graph.index_of(id).ok_or(GraphError::NoSuchPage(id))
}

fn reconstruct<'g>(graph: &'g Graph, steps: &[Step], last: usize) -> Vec<&'g str> {
    let mut path = Vec::new();
    let mut cursor = Some(last);
    while let Some(idx) = cursor {
        path.push(graph.title_at(steps[idx].page));
        cursor = steps[idx].parent;
    }
    path.reverse();
    path
}
