//! Output module for the harvested dataset
//!
//! This module handles:
//! - Aggregating commander records into the sorted dataset
//! - Writing the dataset and the slug cache
//! - Computing the end-of-run statistics

mod aggregate;
pub mod cache;
mod document;
pub mod stats;

pub use aggregate::{aggregate, HarvestOutcome};
pub use cache::{load_slugs, save_slugs};
pub use document::OutputDocument;
pub use stats::{format_count, log_summary, summarize, RunSummary};
