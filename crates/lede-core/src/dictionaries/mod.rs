//! Dictionaries for text processing.
//!
//! Curated word sets used by sentence segmentation.

pub mod abbreviations;
