//! crossval Harness
//!
//! Reproducible accuracy measurement for an opaque text classifier:
//! deterministic partitioning into folds, train/classify orchestration per
//! fold (including train-on-error gating), two-class threshold rebinding,
//! confusion-matrix accuracy, and threshold sweeps producing
//! precision/recall curves.
//!
//! The classifier itself lives behind the `Oracle` trait from
//! `crossval-oracle`; this crate only drives and measures it. Execution is
//! strictly sequential, oracle state is explicitly reset at every fold
//! boundary, and any oracle failure aborts the whole experiment.

pub mod accuracy;
pub mod evaluator;
pub mod folds;
pub mod partition;
pub mod runner;
pub mod sweep;
pub mod threshold;

pub use accuracy::compute_accuracy;
pub use evaluator::{learn_classify, TrainStats};
pub use folds::{FoldSplit, FoldSplits};
pub use partition::partition;
pub use runner::{CrossValidation, Holdout};
pub use sweep::{score_range, sweep};
pub use threshold::rebind;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::accuracy::compute_accuracy;
    pub use crate::evaluator::{learn_classify, TrainStats};
    pub use crate::folds::{FoldSplit, FoldSplits};
    pub use crate::partition::partition;
    pub use crate::runner::{CrossValidation, Holdout};
    pub use crate::sweep::{score_range, sweep};
    pub use crate::threshold::rebind;
    pub use crossval_core::prelude::*;
    pub use crossval_oracle::prelude::*;
}
