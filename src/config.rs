use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::pagerank::{DEFAULT_DAMPING, DEFAULT_ITERATIONS, DEFAULT_TOP, PageRankConfig};
use crate::ranked::DEFAULT_TITLE_COUNT;

/// Log levels as defined in log2 crate
#[derive(Debug, Serialize, Deserialize, Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Every program argument. The graph files are required, the rest tune the analyses.
#[derive(Parser, Debug, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Pages file, one `<id> <title>` per line
    pub pages_file: PathBuf,
    /// Links file, one `<src> <dst>` per line
    pub links_file: PathBuf,
    /// Title of the shortest path start page
    #[arg(long, default_value = "渋谷")]
    pub start: String,
    /// Title of the shortest path goal page
    #[arg(long, default_value = "小野妹子")]
    pub goal: String,
    /// Number of longest titles to report
    #[arg(long, default_value_t = DEFAULT_TITLE_COUNT)]
    pub title_count: usize,
    /// PageRank iterations
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,
    /// PageRank damping factor
    #[arg(long, default_value_t = DEFAULT_DAMPING)]
    pub damping: f64,
    /// Number of top PageRank pages to report
    #[arg(long, default_value_t = DEFAULT_TOP)]
    pub top_ranks: usize,
    /// Number of threads for the farthest pair sweep
    #[arg(long, default_value = "8")]
    pub thread_count: usize,
    /// Skip the farthest pair sweep (a BFS from every page)
    #[arg(long)]
    pub skip_farthest: bool,
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", value_enum)]
    pub log_level: LogLevel,
}

impl Config {
    pub fn new() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            anyhow::bail!("damping must be between 0 and 1, got {}", self.damping);
        }
        if self.thread_count == 0 {
            anyhow::bail!("thread_count must be greater than 0");
        }
        if self.title_count == 0 {
            anyhow::bail!("title_count must be greater than 0");
        }
        Ok(())
    }

    pub fn page_rank(&self) -> PageRankConfig {
        PageRankConfig::default()
            .with_iterations(self.iterations)
            .with_damping(self.damping)
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::parse_from(std::iter::once("wiki-graph").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let cfg = parse(&["pages.txt", "links.txt"]);
        assert_eq!(cfg.pages_file, PathBuf::from("pages.txt"));
        assert_eq!(cfg.start, "渋谷");
        assert_eq!(cfg.goal, "小野妹子");
        assert_eq!(cfg.title_count, 15);
        assert_eq!(cfg.iterations, 100);
        assert_eq!(cfg.top_ranks, 10);
        assert!(!cfg.skip_farthest);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let cfg = parse(&["p", "l", "--start", "A", "--goal", "C", "--damping", "0.5", "--skip-farthest"]);
        assert_eq!(cfg.start, "A");
        assert_eq!(cfg.page_rank().damping, 0.5);
        assert!(cfg.skip_farthest);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(parse(&["p", "l", "--damping", "1.5"]).validate().is_err());
        assert!(parse(&["p", "l", "--thread-count", "0"]).validate().is_err());
        assert!(parse(&["p", "l", "--title-count", "0"]).validate().is_err());
    }
}
