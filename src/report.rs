//! Text sections printed for each analysis.

use std::fmt::Write;

use crate::eccentricity::FarthestPair;
use crate::error::GraphError;
use crate::pagerank::PageRanks;
use crate::ranked::MostLinked;

pub fn format_longest_titles(titles: &[&str]) -> String {
    let mut out = String::from("The longest titles are:\n");
    for title in titles {
        let _ = writeln!(out, "{}", title);
    }
    out
}

pub fn format_most_linked(most: Option<&MostLinked>) -> String {
    let mut out = String::from("The most linked pages are:\n");
    match most {
        Some(most) => {
            for title in &most.titles {
                let _ = writeln!(out, "{} {}", title, most.in_degree);
            }
        }
        None => out.push_str("(no pages)\n"),
    }
    out
}

/// Shortest path section for every outcome of a path query
pub fn format_path(start: &str, goal: &str, outcome: &Result<Option<Vec<&str>>, GraphError>) -> String {
    match outcome {
        Ok(Some(path)) => format!(
            "Shortest path ({} steps): {}\n",
            path.len() - 1,
            path.join(" -> ")
        ),
        Ok(None) => format!("No path found from '{}' to '{}'\n", start, goal),
        Err(GraphError::UnknownTitle(_)) => {
            format!("Either start '{}' or goal '{}' page does not exist.\n", start, goal)
        }
        Err(e) => format!("Shortest path from '{}' to '{}' failed: {}\n", start, goal, e),
    }
}

pub fn format_page_ranks(ranks: &PageRanks, top: usize) -> String {
    let mut out = String::from("The most popular pages are:\n");
    for page in ranks.top(top) {
        let _ = writeln!(out, "{}: {}", page.title, page.score);
    }
    let _ = writeln!(out, "Total PageRank: {}", ranks.total());
    out
}

pub fn format_farthest_pair(pair: Option<&FarthestPair>) -> String {
    match pair {
        Some(pair) => format!(
            "The farthest pages are '{}' and '{}' with a distance of {}\n",
            pair.from_title, pair.to_title, pair.distance
        ),
        None => "Could not determine the farthest pages\n".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_path_outcomes() {
        let found: Result<Option<Vec<&str>>, GraphError> = Ok(Some(vec!["A", "B", "C"]));
        assert_eq!(format_path("A", "C", &found), "Shortest path (2 steps): A -> B -> C\n");

        let missing = Ok(None);
        assert_eq!(format_path("C", "A", &missing), "No path found from 'C' to 'A'\n");

        let unknown = Err(GraphError::UnknownTitle("Z".to_string()));
        assert!(format_path("Z", "A", &unknown).contains("does not exist"));
    }

    #[test]
    fn test_format_most_linked() {
        let most = MostLinked { in_degree: 1, titles: vec!["B", "C"] };
        assert_eq!(format_most_linked(Some(&most)), "The most linked pages are:\nB 1\nC 1\n");
        assert!(format_most_linked(None).contains("no pages"));
    }

    #[test]
    fn test_format_farthest_none() {
        assert_eq!(format_farthest_pair(None), "Could not determine the farthest pages\n");
    }
}
