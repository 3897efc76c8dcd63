/// Decision tree classifier
pub mod classifier;
/// Criterion selection
pub mod criterion;
/// Impurity measures
pub mod impurity;
/// Tree configuration
pub mod params;
