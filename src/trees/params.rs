use super::criterion::Criterion;
use crate::error::{Result, TreeError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeParams {
    pub max_depth: u16,
    pub min_samples_split: u16,
    pub min_samples_leaf: u16,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeParams {
    pub fn new() -> Self {
        Self {
            max_depth: 3,
            min_samples_split: 2,
            min_samples_leaf: 1,
        }
    }

    pub fn set_max_depth(&mut self, max_depth: u16) -> Result<()> {
        if max_depth < 1 {
            return Err(TreeError::InvalidParameter(
                "The maximum depth must be greater than 0.".into(),
            ));
        }
        self.max_depth = max_depth;
        Ok(())
    }

    pub fn set_min_samples_split(&mut self, min_samples_split: u16) -> Result<()> {
        if min_samples_split < 2 {
            return Err(TreeError::InvalidParameter(
                "The minimum number of samples to split must be greater than 1.".into(),
            ));
        }
        self.min_samples_split = min_samples_split;
        Ok(())
    }

    pub fn set_min_samples_leaf(&mut self, min_samples_leaf: u16) -> Result<()> {
        if min_samples_leaf < 1 {
            return Err(TreeError::InvalidParameter(
                "The minimum number of samples in a leaf must be greater than 0.".into(),
            ));
        }
        self.min_samples_leaf = min_samples_leaf;
        Ok(())
    }

    pub fn max_depth(&self) -> u16 {
        self.max_depth
    }

    pub fn min_samples_split(&self) -> u16 {
        self.min_samples_split
    }

    pub fn min_samples_leaf(&self) -> u16 {
        self.min_samples_leaf
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeClassifierParams {
    pub base_params: TreeParams,
    pub criterion: Criterion,
}

impl TreeClassifierParams {
    pub fn new() -> Self {
        Self {
            base_params: TreeParams::new(),
            criterion: Criterion::Gini,
        }
    }

    pub fn set_max_depth(&mut self, max_depth: u16) -> Result<()> {
        self.base_params.set_max_depth(max_depth)
    }

    pub fn set_min_samples_split(&mut self, min_samples_split: u16) -> Result<()> {
        self.base_params.set_min_samples_split(min_samples_split)
    }

    pub fn set_min_samples_leaf(&mut self, min_samples_leaf: u16) -> Result<()> {
        self.base_params.set_min_samples_leaf(min_samples_leaf)
    }

    /// Parses and stores the criterion name.
    pub fn set_criterion(&mut self, criterion: &str) -> Result<()> {
        self.criterion = criterion.parse()?;
        Ok(())
    }

    pub fn max_depth(&self) -> u16 {
        self.base_params.max_depth
    }

    pub fn min_samples_split(&self) -> u16 {
        self.base_params.min_samples_split
    }

    pub fn min_samples_leaf(&self) -> u16 {
        self.base_params.min_samples_leaf
    }

    pub fn criterion(&self) -> Criterion {
        self.criterion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = TreeClassifierParams::default();
        assert_eq!(params.max_depth(), 3);
        assert_eq!(params.min_samples_split(), 2);
        assert_eq!(params.min_samples_leaf(), 1);
        assert_eq!(params.criterion(), Criterion::Gini);
        assert_eq!(params, TreeClassifierParams::new());
    }

    #[test]
    fn test_set_max_depth() {
        let mut params = TreeParams::new();
        assert!(params.set_max_depth(0).is_err());
        assert_eq!(params.max_depth(), 3);
        params.set_max_depth(7).unwrap();
        assert_eq!(params.max_depth(), 7);
    }

    #[test]
    fn test_set_min_samples_split() {
        let mut params = TreeParams::new();
        assert!(matches!(
            params.set_min_samples_split(1),
            Err(TreeError::InvalidParameter(_))
        ));
        params.set_min_samples_split(10).unwrap();
        assert_eq!(params.min_samples_split(), 10);
    }

    #[test]
    fn test_set_min_samples_leaf() {
        let mut params = TreeParams::new();
        assert!(params.set_min_samples_leaf(0).is_err());
        params.set_min_samples_leaf(4).unwrap();
        assert_eq!(params.min_samples_leaf(), 4);
    }

    #[test]
    fn test_set_criterion() {
        let mut params = TreeClassifierParams::new();
        params.set_criterion("entropy").unwrap();
        assert_eq!(params.criterion(), Criterion::Entropy);

        assert_eq!(
            params.set_criterion("gain").unwrap_err(),
            TreeError::UnsupportedCriterion("gain".to_string())
        );
        assert_eq!(params.criterion(), Criterion::Entropy);
    }
}
