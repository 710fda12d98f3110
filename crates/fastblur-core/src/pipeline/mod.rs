pub mod config;
mod helpers;

pub use config::{FilterChain, FilterStep};
pub use helpers::{apply_filter_step, apply_filters};
