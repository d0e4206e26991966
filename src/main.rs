use anyhow::Result;
use log2::*;
use std::sync::Arc;

use wiki_graph::config::Config;
use wiki_graph::{ingest, runner, START_TIME};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = *START_TIME;
    let cfg = Config::new();
    cfg.validate()?;
    let _log2 = stdout()
        .module(true) // include module name
        .module_with_line(true) // include line number from module
        .module_filter(|module| module.starts_with("wiki_graph")) // include only this crate
        .compress(false)
        .level(cfg.log_level.to_string())
        .start();

    // The graph is unusable if either file is inconsistent, so this aborts the run
    let graph = {
        let pages = cfg.pages_file.clone();
        let links = cfg.links_file.clone();
        tokio::task::spawn_blocking(move || ingest::load_graph(&pages, &links)).await?
    };
    let graph = match graph {
        Ok(graph) => Arc::new(graph),
        Err(e) => {
            error!("Loading the graph failed: {}", e);
            return Err(e.into());
        }
    };
    debug!("Graph loaded after {:?}", START_TIME.elapsed());

    let sections = runner::run(graph, Arc::new(cfg)).await?;
    for section in sections {
        println!("{}", section);
    }

    info!("Done in {:?}", START_TIME.elapsed());
    Ok(())
}
