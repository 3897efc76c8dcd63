//! # Rusty-trees
//!
//! `rusty-trees` provides a decision tree classifier shell and the impurity
//! measures used to score candidate splits on categorical features.
//!
//! ## Getting Started
//!
//! To use `rusty-trees`, add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! rusty-trees = "*"
//! ```
//!
//! ## Example Usage
//!
//! Scoring two categorical features against a binary target with Gini impurity:
//!
//! ```rust
//! use rusty_trees::trees::impurity::{GiniImpurity, Impurity};
//! use nalgebra::{DMatrix, DVector};
//!
//! let x = DMatrix::from_row_slice(8, 2, &[1, 1, 1, 1, 1, 1, 1, 0, 2, 1, 2, 0, 2, 0, 2, 0]);
//! let y = DVector::from_vec(vec![1, 1, 0, 0, 1, 0, 0, 1]);
//!
//! let scores = GiniImpurity::new().score_feature(&x, &y).unwrap();
//!
//! assert_eq!(scores, vec![0.5, 0.375]);
//! ```

/// Dataset and data manipulation utilities
pub mod data;
/// Error types
pub mod error;
/// Decision trees
pub mod trees;

pub use error::TreeError;
