pub mod config;
pub mod eccentricity;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod pagerank;
pub mod pathfinder;
pub mod ranked;
pub mod report;
pub mod runner;

use std::time::Instant;

pub use error::{GraphError, IngestError};
pub use graph::{Graph, PageId, TitleIndex};

/// Indicates start time of a run, lazily initialized
pub static START_TIME: once_cell::sync::Lazy<Instant> = once_cell::sync::Lazy::new(Instant::now);
