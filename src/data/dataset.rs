use crate::error::{Result, TreeError};
use nalgebra::{DMatrix, DVector};
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;

/// A discrete value usable as a partition key.
///
/// Integers, strings and booleans qualify directly. Floating point labels need
/// a hashable wrapper such as `ordered_float::OrderedFloat`.
pub trait Category: Debug + Clone + Eq + Hash + Send + Sync + 'static {}
impl<T> Category for T where T: Debug + Clone + Eq + Hash + Send + Sync + 'static {}

/// Feature matrix with one row per sample and an aligned target vector.
pub struct CategoricalDataset<XT: Category, YT: Category> {
    pub x: DMatrix<XT>,
    pub y: DVector<YT>,
}

impl<XT: Category, YT: Category> Debug for CategoricalDataset<XT, YT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "CategoricalDataset {{\n    x: [\n")?;

        for i in 0..self.x.nrows() {
            write!(f, "        [")?;
            for j in 0..self.x.ncols() {
                write!(f, "{:?}, ", self.x[(i, j)])?;
            }
            writeln!(f, "],")?;
        }

        write!(f, "    ],\n    y: [")?;
        for i in 0..self.y.len() {
            write!(f, "{:?}, ", self.y[i])?;
        }
        write!(f, "]\n}}")
    }
}

impl<XT: Category, YT: Category> CategoricalDataset<XT, YT> {
    /// Creates a dataset, checking that it has samples and features and that
    /// every row of `x` has a target.
    pub fn new(x: DMatrix<XT>, y: DVector<YT>) -> Result<Self> {
        if x.nrows() == 0 || x.ncols() == 0 {
            return Err(TreeError::EmptyInput);
        }
        if x.nrows() != y.len() {
            return Err(TreeError::LengthMismatch {
                expected: y.len(),
                found: x.nrows(),
            });
        }
        Ok(Self { x, y })
    }

    /// Creates a dataset from column-major feature vectors.
    pub fn from_columns(columns: &[Vec<XT>], y: Vec<YT>) -> Result<Self> {
        let nrows = columns.first().map_or(0, Vec::len);
        if columns.iter().any(|column| column.len() != nrows) {
            return Err(TreeError::RaggedColumns);
        }

        let x = DMatrix::from_fn(nrows, columns.len(), |row, col| {
            columns[col][row].clone()
        });
        Self::new(x, DVector::from_vec(y))
    }

    pub fn into_parts(&self) -> (&DMatrix<XT>, &DVector<YT>) {
        (&self.x, &self.y)
    }

    pub fn nrows(&self) -> usize {
        self.x.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.x.ncols()
    }

    /// Returns an owned copy of the feature column at `index`.
    pub fn column(&self, index: usize) -> Option<Vec<XT>> {
        if index >= self.x.ncols() {
            return None;
        }
        Some(self.x.column(index).iter().cloned().collect())
    }

    pub fn target(&self) -> &[YT] {
        self.y.as_slice()
    }
}
