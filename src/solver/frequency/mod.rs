//! Letter and n-gram frequency analysis
//!
//! Histograms over a word collection and the priority order derived from them.

mod histogram;
mod queue;

pub use histogram::{Histogram, build_letter_histogram, build_ngram_histogram};
pub use queue::build_priority_queue;
