//! crossval Oracle
//!
//! The oracle seam between the evaluation harness and the classifier under
//! test. The harness only ever sees the `Oracle` trait: reset, learn, and
//! classify over opaque string payloads and stable string labels.
//!
//! This crate provides:
//! - The `Oracle` trait
//! - `PreprocessedOracle`, a wrapper applying an injected normalization
//!   transform before learn/classify
//! - Deterministic mock oracles for tests and harness experiments

pub mod mock;
pub mod oracle;
pub mod preprocess;

pub use mock::{FailingOracle, MockOracle};
pub use oracle::Oracle;
pub use preprocess::{
    lowercase, mark_boundaries, normalize_full, strip_punctuation, PreprocessedOracle,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::mock::{FailingOracle, MockOracle};
    pub use crate::oracle::Oracle;
    pub use crate::preprocess::PreprocessedOracle;
}
