//! Contact extraction module
//!
//! This module contains the pattern tables and the per-page extraction
//! pipeline that turns raw markup into deduplicated fact sets.

mod extractor;
mod patterns;

pub use extractor::{extract_page_facts, PageFacts};
pub use patterns::{Platform, ANCHOR_SELECTOR};
