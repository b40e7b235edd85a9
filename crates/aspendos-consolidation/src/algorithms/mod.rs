//! Similarity and decay arithmetic used by the pipeline phases.

pub mod decay_formula;
pub mod similarity;
