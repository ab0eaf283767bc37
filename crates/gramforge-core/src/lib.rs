// Re-export types from the protocol crate so they are accessible via gramforge_core::*
pub use gramforge_protocol::config;
pub use gramforge_protocol::report;
pub use gramforge_protocol::table;

// Internal Modules
pub mod aggregator;
pub mod api;
pub mod consts;
pub mod corpus;
pub mod error;
pub mod export;
pub mod locator;
pub mod scanner;
pub mod util;
pub mod view;

pub use api::{calculate_filtered_ngrams, compute, AnalysisSession};
