/// Categorical datasets
pub mod dataset;
