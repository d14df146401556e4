pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod lookup;
pub mod matcher;
pub mod normalizer;

pub use catalog::Catalog;
pub use matcher::{match_batch, Matcher, TopK};
pub use normalizer::normalize;
