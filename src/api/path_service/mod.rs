pub mod client;
pub mod types;

pub use client::{Client, FETCH_PATH_FAILED, LOAD_GRAPH_FAILED, TRUNCATE_FAILED};
pub use types::*;
