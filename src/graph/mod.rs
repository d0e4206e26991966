pub mod store;
pub mod title_index;

#[cfg(test)]
mod tests;

pub use store::{Graph, PageId};
pub use title_index::TitleIndex;
