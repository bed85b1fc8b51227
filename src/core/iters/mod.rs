mod indexer;

pub use indexer::Indexer;
