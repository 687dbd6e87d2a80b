//! Query answering, in two steps
//! - Engine (resolve the list, compile the pattern, scan the key column)
//! - Projector (turn matched rows into header keyed records)
//!

mod engine;
mod projector;

pub use engine::{DEFAULT_PATTERN_SIZE_LIMIT, QueryEngine, compile_pattern, query};
pub use projector::{MatchRecord, QueryResult, project};
