use super::impurity::{Entropy, GiniImpurity, Impurity};
use crate::data::dataset::Category;
use crate::error::{Result, TreeError};
use std::fmt;
use std::str::FromStr;

/// Splitting criteria known to the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Criterion {
    /// Gini impurity.
    #[default]
    Gini,
    /// Entropy. Recognized but not implemented.
    Entropy,
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gini => "gini",
            Self::Entropy => "entropy",
        };

        write!(f, "{name}")
    }
}

impl FromStr for Criterion {
    type Err = TreeError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "gini" => Ok(Self::Gini),
            "entropy" => Ok(Self::Entropy),
            other => Err(TreeError::UnsupportedCriterion(other.to_string())),
        }
    }
}

impl Criterion {
    /// Builds the loss function for this criterion.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Unimplemented`] for [`Criterion::Entropy`].
    pub fn loss_function(&self) -> Result<LossFunction> {
        match self {
            Self::Gini => Ok(LossFunction::Gini(GiniImpurity::new())),
            Self::Entropy => Entropy::new().map(LossFunction::Entropy),
        }
    }
}

/// A constructed loss function, one variant per criterion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LossFunction {
    Gini(GiniImpurity),
    Entropy(Entropy),
}

impl LossFunction {
    pub fn criterion(&self) -> Criterion {
        match self {
            Self::Gini(_) => Criterion::Gini,
            Self::Entropy(_) => Criterion::Entropy,
        }
    }
}

impl Impurity for LossFunction {
    fn score_column<XT: Category, YT: Category>(
        &self,
        column: &[XT],
        target: &[YT],
    ) -> Result<f64> {
        match self {
            Self::Gini(gini) => gini.score_column(column, target),
            Self::Entropy(entropy) => entropy.score_column(column, target),
        }
    }
}
