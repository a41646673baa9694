//! crossval Core
//!
//! Core types and error handling shared across crossval components.
//!
//! This crate provides:
//! - The corpus data model (labeled items and their classifications)
//! - Confusion-matrix accuracy records and sweep points
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Accuracy, Classification, LabeledItem, ModelScore, SweepPoint};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{Accuracy, Classification, LabeledItem, ModelScore, SweepPoint};
}
