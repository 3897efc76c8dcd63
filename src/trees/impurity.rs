//! Impurity measures used to score candidate splits.
//!
//! A feature is scored by partitioning the samples on each distinct value of
//! that feature and summing the impurity of every partition's target labels,
//! weighted by the partition's share of the samples.
use crate::data::dataset::Category;
use crate::error::{Result, TreeError};
use nalgebra::{DMatrix, DVector};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

/// A splitting criterion that scores feature columns against a target.
pub trait Impurity: Send + Sync {
    /// Computes the weighted impurity of `target` when the samples are
    /// partitioned by the distinct values of `column`.
    ///
    /// # Errors
    ///
    /// Returns an error if `column` and `target` differ in length or are empty.
    fn score_column<XT: Category, YT: Category>(
        &self,
        column: &[XT],
        target: &[YT],
    ) -> Result<f64>;

    /// Scores every column of `features`, one score per column in column order.
    ///
    /// # Arguments
    ///
    /// * `features` - Matrix with one row per sample and one column per feature.
    /// * `target` - The target label of every sample.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix has no rows or if its row count differs
    /// from the target length.
    fn score_feature<XT: Category, YT: Category>(
        &self,
        features: &DMatrix<XT>,
        target: &DVector<YT>,
    ) -> Result<Vec<f64>> {
        if features.nrows() != target.len() {
            return Err(TreeError::LengthMismatch {
                expected: target.len(),
                found: features.nrows(),
            });
        }
        if target.is_empty() {
            return Err(TreeError::EmptyInput);
        }

        debug!(
            samples = features.nrows(),
            features = features.ncols(),
            "scoring feature matrix"
        );

        let target = target.as_slice();
        (0..features.ncols())
            .into_par_iter()
            .map(|feature_index| {
                let column: Vec<XT> = features.column(feature_index).iter().cloned().collect();
                self.score_column(&column, target)
            })
            .collect()
    }

    /// Scores column-major feature vectors, one score per column in input order.
    ///
    /// # Errors
    ///
    /// Returns an error if any column's length differs from the target length
    /// or if the target is empty.
    fn score_columns<XT: Category, YT: Category>(
        &self,
        columns: &[Vec<XT>],
        target: &[YT],
    ) -> Result<Vec<f64>> {
        if let Some(column) = columns.iter().find(|column| column.len() != target.len()) {
            return Err(TreeError::LengthMismatch {
                expected: target.len(),
                found: column.len(),
            });
        }
        if target.is_empty() {
            return Err(TreeError::EmptyInput);
        }

        debug!(
            samples = target.len(),
            features = columns.len(),
            "scoring feature columns"
        );

        columns
            .into_par_iter()
            .map(|column| self.score_column(column, target))
            .collect()
    }
}

/// Gini impurity, `1 - Σ p²` over the class probabilities of each partition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GiniImpurity;

impl GiniImpurity {
    pub fn new() -> Self {
        Self
    }
}

impl Impurity for GiniImpurity {
    fn score_column<XT: Category, YT: Category>(
        &self,
        column: &[XT],
        target: &[YT],
    ) -> Result<f64> {
        check_aligned(column, target)?;

        // Both are in first-seen category order.
        let weights = category_weights(column);
        let groups = partition_targets(column, target);
        weights
            .iter()
            .zip(groups.iter())
            .try_fold(0.0, |score, ((_, weight), labels)| -> Result<f64> {
                let probabilities = label_distribution(labels)?;
                Ok(score + weight * gini_index(&probabilities))
            })
    }
}

/// Entropy criterion. Not implemented: construction and scoring always fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entropy {
    _private: (),
}

impl Entropy {
    /// # Errors
    ///
    /// Always returns [`TreeError::Unimplemented`].
    pub fn new() -> Result<Self> {
        Err(TreeError::Unimplemented("entropy loss function"))
    }
}

impl Impurity for Entropy {
    fn score_column<XT: Category, YT: Category>(
        &self,
        _column: &[XT],
        _target: &[YT],
    ) -> Result<f64> {
        Err(TreeError::Unimplemented("entropy loss function"))
    }
}

/// Returns `1 - Σ p²` for a class-probability distribution.
pub fn gini_index(probabilities: &[f64]) -> f64 {
    1.0 - probabilities.iter().map(|p| p * p).sum::<f64>()
}

/// Computes the distribution of target labels among the samples whose feature
/// value equals `category`. Labels appear in the order they are first seen.
///
/// # Errors
///
/// Returns [`TreeError::EmptyCategory`] if no sample has the given category,
/// and a length error if `column` and `target` are not aligned.
pub fn class_probabilities<XT: Category, YT: Category>(
    column: &[XT],
    target: &[YT],
    category: &XT,
) -> Result<Vec<f64>> {
    check_aligned(column, target)?;

    let labels: Vec<&YT> = column
        .iter()
        .zip(target)
        .filter(|(value, _)| *value == category)
        .map(|(_, label)| label)
        .collect();
    label_distribution(&labels)
}

/// Returns every distinct category of `column` with its relative frequency,
/// in first-seen order.
pub fn category_weights<XT: Category>(column: &[XT]) -> Vec<(XT, f64)> {
    let (categories, slots) = first_seen_slots(column.iter());
    let counts = slot_counts(&slots, categories.len());

    let num_samples = column.len() as f64;
    categories
        .into_iter()
        .zip(counts)
        .map(|(category, count)| (category.clone(), count as f64 / num_samples))
        .collect()
}

fn check_aligned<XT, YT>(column: &[XT], target: &[YT]) -> Result<()> {
    if column.len() != target.len() {
        return Err(TreeError::LengthMismatch {
            expected: target.len(),
            found: column.len(),
        });
    }
    if column.is_empty() {
        return Err(TreeError::EmptyInput);
    }
    Ok(())
}

// Distinct keys in first-seen order, and the slot of every key in that order.
fn first_seen_slots<K: Copy + Eq + Hash>(
    keys: impl ExactSizeIterator<Item = K>,
) -> (Vec<K>, Vec<usize>) {
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut distinct: Vec<K> = Vec::new();
    let mut slots: Vec<usize> = Vec::with_capacity(keys.len());
    for key in keys {
        let slot = *index.entry(key).or_insert_with(|| {
            distinct.push(key);
            distinct.len() - 1
        });
        slots.push(slot);
    }
    (distinct, slots)
}

fn slot_counts(slots: &[usize], num_slots: usize) -> Vec<usize> {
    slots.iter().fold(vec![0; num_slots], |mut counts, &slot| {
        counts[slot] += 1;
        counts
    })
}

// Groups target labels by feature category, categories in first-seen order.
fn partition_targets<'a, XT: Category, YT: Category>(
    column: &[XT],
    target: &'a [YT],
) -> Vec<Vec<&'a YT>> {
    let (categories, slots) = first_seen_slots(column.iter());
    let counts = slot_counts(&slots, categories.len());

    let mut groups: Vec<Vec<&YT>> = counts.into_iter().map(Vec::with_capacity).collect();
    for (&slot, label) in slots.iter().zip(target) {
        groups[slot].push(label);
    }
    groups
}

fn label_distribution<YT: Category>(labels: &[&YT]) -> Result<Vec<f64>> {
    if labels.is_empty() {
        return Err(TreeError::EmptyCategory);
    }

    let (distinct, slots) = first_seen_slots(labels.iter().copied());
    let total = labels.len() as f64;
    Ok(slot_counts(&slots, distinct.len())
        .into_iter()
        .map(|count| count as f64 / total)
        .collect())
}
