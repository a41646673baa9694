//! Text normalization applied in front of an oracle
//!
//! A preprocessing variant of an oracle is a wrapper around it, not a
//! subclass: an injected `&str -> String` transform is applied uniformly to
//! the payload of every `learn` and `classify` call. `reset` and the label
//! set pass through untouched.

use async_trait::async_trait;
use crossval_core::{Classification, Result};

use crate::oracle::Oracle;

/// An oracle whose inputs are normalized by a caller-supplied transform
pub struct PreprocessedOracle<O> {
    inner: O,
    transform: Box<dyn Fn(&str) -> String + Send + Sync>,
}

impl<O: Oracle> PreprocessedOracle<O> {
    /// Wrap `inner` so that `transform` runs on every payload before it
    /// reaches the oracle
    pub fn new(inner: O, transform: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self {
            inner,
            transform: Box::new(transform),
        }
    }
}

#[async_trait]
impl<O: Oracle> Oracle for PreprocessedOracle<O> {
    async fn reset(&self, labels: &[String]) -> Result<()> {
        self.inner.reset(labels).await
    }

    async fn learn(&self, data: &str, label: &str) -> Result<bool> {
        self.inner.learn(&(self.transform)(data), label).await
    }

    async fn classify(&self, data: &str) -> Result<Classification> {
        self.inner.classify(&(self.transform)(data)).await
    }

    fn labels(&self) -> &[String] {
        self.inner.labels()
    }
}

/// Lowercase the whole payload
pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Drop every ASCII punctuation character
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Frame the payload with START/END markers so the oracle can learn
/// features anchored at message boundaries
pub fn mark_boundaries(text: &str) -> String {
    format!("START {text} END")
}

/// Lowercase, strip punctuation, then mark boundaries
pub fn normalize_full(text: &str) -> String {
    mark_boundaries(&strip_punctuation(&lowercase(text)))
}
