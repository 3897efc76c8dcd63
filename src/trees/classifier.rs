//! Decision Tree Classifier
use super::criterion::{Criterion, LossFunction};
use super::impurity::Impurity;
use super::params::TreeClassifierParams;
use crate::data::dataset::{CategoricalDataset, Category};
use crate::error::{Result, TreeError};
use std::marker::PhantomData;
use tracing::info;

/// Decision tree classifier over categorical features.
///
/// Holds the tree configuration and the loss function selected by the
/// criterion. Tree growth is not implemented: [`fit`](Self::fit) leaves the
/// classifier untrained and there is no prediction.
#[derive(Clone, Debug)]
pub struct DecisionTreeClassifier<XT: Category, YT: Category> {
    tree_params: TreeClassifierParams,
    loss_function: LossFunction,

    _marker: PhantomData<(XT, YT)>,
}

impl<XT: Category, YT: Category> Default for DecisionTreeClassifier<XT, YT> {
    /// Creates a new instance of the decision tree classifier with default parameters.
    fn default() -> Self {
        Self::new()
    }
}

impl<XT: Category, YT: Category> DecisionTreeClassifier<XT, YT> {
    /// Creates a new instance of the decision tree classifier with default parameters.
    pub fn new() -> Self {
        Self {
            tree_params: TreeClassifierParams::new(),
            loss_function: LossFunction::Gini(Default::default()),
            _marker: PhantomData,
        }
    }

    /// Creates a new instance of the decision tree classifier with custom parameters.
    ///
    /// # Arguments
    ///
    /// * `criterion` - Name of the impurity criterion, `"gini"` by default.
    /// * `max_depth` - The maximum depth of the tree, 3 by default.
    /// * `min_samples_split` - The minimum number of samples required to split an internal node, 2 by default.
    /// * `min_samples_leaf` - The minimum number of samples required in a leaf, 1 by default.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnsupportedCriterion`] unless the criterion is
    /// `"gini"`, and [`TreeError::InvalidParameter`] if any size limit is out
    /// of range.
    pub fn with_params(
        criterion: Option<&str>,
        max_depth: Option<u16>,
        min_samples_split: Option<u16>,
        min_samples_leaf: Option<u16>,
    ) -> Result<Self> {
        let mut tree = Self::new();

        tree.set_criterion(criterion.unwrap_or("gini"))?;
        tree.set_max_depth(max_depth.unwrap_or(3))?;
        tree.set_min_samples_split(min_samples_split.unwrap_or(2))?;
        tree.set_min_samples_leaf(min_samples_leaf.unwrap_or(1))?;
        Ok(tree)
    }

    /// Sets the impurity criterion and builds its loss function.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnsupportedCriterion`] if the criterion is unknown
    /// or its loss function cannot be built. The previous criterion is kept.
    pub fn set_criterion(&mut self, criterion: &str) -> Result<()> {
        let parsed: Criterion = criterion.parse()?;
        let loss_function = parsed
            .loss_function()
            .map_err(|_| TreeError::UnsupportedCriterion(criterion.to_string()))?;

        self.tree_params.criterion = parsed;
        self.loss_function = loss_function;
        Ok(())
    }

    pub fn set_max_depth(&mut self, max_depth: u16) -> Result<()> {
        self.tree_params.set_max_depth(max_depth)
    }

    pub fn set_min_samples_split(&mut self, min_samples_split: u16) -> Result<()> {
        self.tree_params.set_min_samples_split(min_samples_split)
    }

    pub fn set_min_samples_leaf(&mut self, min_samples_leaf: u16) -> Result<()> {
        self.tree_params.set_min_samples_leaf(min_samples_leaf)
    }

    pub fn max_depth(&self) -> u16 {
        self.tree_params.max_depth()
    }

    pub fn min_samples_split(&self) -> u16 {
        self.tree_params.min_samples_split()
    }

    pub fn min_samples_leaf(&self) -> u16 {
        self.tree_params.min_samples_leaf()
    }

    pub fn criterion(&self) -> Criterion {
        self.tree_params.criterion()
    }

    pub fn loss_function(&self) -> &LossFunction {
        &self.loss_function
    }

    /// Accepts a training set. No tree is built and the classifier stays
    /// untrained.
    pub fn fit(&mut self, dataset: &CategoricalDataset<XT, YT>) -> Result<()> {
        info!(
            samples = dataset.nrows(),
            features = dataset.ncols(),
            criterion = %self.criterion(),
            max_depth = self.max_depth(),
            "tree growth is not implemented, classifier left untrained"
        );
        Ok(())
    }

    /// Scores every feature of `dataset` with the configured loss function,
    /// one score per feature column.
    pub fn feature_impurities(&self, dataset: &CategoricalDataset<XT, YT>) -> Result<Vec<f64>> {
        let (x, y) = dataset.into_parts();
        self.loss_function.score_feature(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn demo_dataset() -> CategoricalDataset<i32, i32> {
        CategoricalDataset::from_columns(
            &[vec![1, 1, 1, 1, 2, 2, 2, 2], vec![1, 1, 1, 0, 1, 0, 0, 0]],
            vec![1, 1, 0, 0, 1, 0, 0, 1],
        )
        .unwrap()
    }

    #[test]
    fn test_new() {
        let classifier = DecisionTreeClassifier::<i32, i32>::new();
        assert_eq!(classifier.max_depth(), 3);
        assert_eq!(classifier.min_samples_split(), 2);
        assert_eq!(classifier.min_samples_leaf(), 1);
        assert_eq!(classifier.criterion(), Criterion::Gini);
        assert_eq!(classifier.loss_function().criterion(), Criterion::Gini);
    }

    #[test]
    fn test_with_params() {
        let classifier =
            DecisionTreeClassifier::<i32, i32>::with_params(Some("gini"), Some(5), Some(4), Some(2))
                .unwrap();
        assert_eq!(classifier.max_depth(), 5);
        assert_eq!(classifier.min_samples_split(), 4);
        assert_eq!(classifier.min_samples_leaf(), 2);
    }

    #[test]
    fn test_with_params_nothing_provided() {
        let classifier =
            DecisionTreeClassifier::<i32, i32>::with_params(None, None, None, None).unwrap();
        assert_eq!(classifier.max_depth(), 3);
        assert_eq!(classifier.criterion(), Criterion::Gini);
    }

    #[test]
    fn test_with_params_unknown_criterion() {
        let result = DecisionTreeClassifier::<i32, i32>::with_params(Some("gain"), None, None, None);
        assert_eq!(
            result.unwrap_err(),
            TreeError::UnsupportedCriterion("gain".to_string())
        );
    }

    #[test]
    fn test_with_params_entropy_criterion() {
        let result =
            DecisionTreeClassifier::<i32, i32>::with_params(Some("entropy"), None, None, None);
        assert_eq!(
            result.unwrap_err(),
            TreeError::UnsupportedCriterion("entropy".to_string())
        );
    }

    #[test]
    fn test_with_params_invalid_sizes() {
        for (max_depth, min_samples_split, min_samples_leaf) in
            [(Some(0), None, None), (None, Some(1), None), (None, None, Some(0))]
        {
            let result = DecisionTreeClassifier::<i32, i32>::with_params(
                None,
                max_depth,
                min_samples_split,
                min_samples_leaf,
            );
            assert!(matches!(result, Err(TreeError::InvalidParameter(_))));
        }
    }

    #[test]
    fn test_set_criterion_keeps_previous_on_error() {
        let mut classifier = DecisionTreeClassifier::<i32, i32>::new();
        assert!(classifier.set_criterion("entropy").is_err());
        assert_eq!(classifier.criterion(), Criterion::Gini);
        assert_eq!(classifier.loss_function().criterion(), Criterion::Gini);
    }

    #[test]
    fn test_fit() {
        let mut classifier = DecisionTreeClassifier::new();
        let result = classifier.fit(&demo_dataset());
        assert!(result.is_ok());
    }

    #[test]
    fn test_feature_impurities() {
        let classifier = DecisionTreeClassifier::new();
        let scores = classifier.feature_impurities(&demo_dataset()).unwrap();
        assert_eq!(scores.len(), 2);
        assert_relative_eq!(scores[0], 0.5);
        assert_relative_eq!(scores[1], 0.375);
    }
}
