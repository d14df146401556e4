//! Company Matcher Common Library
//!
//! 照合コアとCLIで共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod catalog;

pub use types::{
    MatchCandidate, MatchQuery, MatchResponse, MatchResult, NOT_FOUND,
};
pub use error::{Error, Result};
pub use catalog::{parse_catalog_csv, CatalogColumns, CatalogEntry};
