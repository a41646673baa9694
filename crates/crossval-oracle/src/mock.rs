//! Deterministic in-memory oracles for tests and experiments
//!
//! `MockOracle` is a trivial token-overlap scorer with real learn/reset
//! state, good enough to drive the harness end-to-end without an external
//! classifier binary. `FailingOracle` exercises error paths.

use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;
use crossval_core::{Classification, Error, ModelScore, Result};

use crate::oracle::Oracle;

/// A deterministic oracle scoring by token overlap with learned examples.
///
/// Each label accumulates the token sets of its learned payloads; a label's
/// score for an input is the summed overlap between the input's tokens and
/// every learned set. Ties go to the earliest configured label, so an
/// untrained oracle always "matches" the first label.
pub struct MockOracle {
    labels: Vec<String>,
    train_on_error: bool,
    store: Mutex<HashMap<String, Vec<BTreeSet<String>>>>,
}

impl MockOracle {
    /// Create a mock oracle over the given labels, in order
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            train_on_error: false,
            store: Mutex::new(HashMap::new()),
        }
    }

    /// Enable train-on-error gating: `learn` first classifies the payload
    /// and becomes a no-op when the current model is already correct
    pub fn with_train_on_error(mut self) -> Self {
        self.train_on_error = true;
        self
    }

    /// Number of examples currently learned under `label`
    pub fn learned_count(&self, label: &str) -> usize {
        self.store
            .lock()
            .expect("mock store poisoned")
            .get(label)
            .map_or(0, Vec::len)
    }

    fn tokens(data: &str) -> BTreeSet<String> {
        data.split_whitespace().map(str::to_string).collect()
    }

    fn is_known(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    fn score(&self, data: &str) -> Classification {
        let input = Self::tokens(data);
        let store = self.store.lock().expect("mock store poisoned");

        let mut scores = Vec::with_capacity(self.labels.len());
        for label in &self.labels {
            let learned = store.get(label.as_str());
            let hits: u64 = learned
                .map(|docs| {
                    docs.iter()
                        .map(|doc| doc.intersection(&input).count() as u64)
                        .sum()
                })
                .unwrap_or(0);
            let feature_count: u64 = learned
                .map(|docs| docs.iter().map(|doc| doc.len() as u64).sum())
                .unwrap_or(0);
            let mut score = ModelScore::new(label.clone(), hits as f64);
            score.feature_count = Some(feature_count);
            score.hit_count = Some(hits);
            scores.push(score);
        }

        let total_hits: u64 = scores.iter().filter_map(|s| s.hit_count).sum();
        if total_hits > 0 {
            for score in &mut scores {
                score.probability =
                    score.hit_count.map(|h| h as f64 / total_hits as f64);
            }
        }

        Classification::new(scores, input.len() as u64)
    }
}

#[async_trait]
impl Oracle for MockOracle {
    async fn reset(&self, labels: &[String]) -> Result<()> {
        for label in labels {
            if !self.is_known(label) {
                return Err(Error::oracle(format!("cannot reset unknown label: {label}")));
            }
        }
        let mut store = self.store.lock().expect("mock store poisoned");
        for label in labels {
            store.remove(label.as_str());
        }
        Ok(())
    }

    async fn learn(&self, data: &str, label: &str) -> Result<bool> {
        if !self.is_known(label) {
            return Err(Error::oracle(format!("cannot learn unknown label: {label}")));
        }
        if self.train_on_error && self.score(data).best_label() == Some(label) {
            // Already classified correctly; gating skips the example.
            tracing::debug!(label, "train-on-error gate skipped example");
            return Ok(false);
        }
        self.store
            .lock()
            .expect("mock store poisoned")
            .entry(label.to_string())
            .or_default()
            .push(Self::tokens(data));
        Ok(true)
    }

    async fn classify(&self, data: &str) -> Result<Classification> {
        Ok(self.score(data))
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// An oracle that always fails, for testing error propagation.
///
/// `reset` succeeds by default so that failures can be observed in the
/// learn phase; call `with_failing_reset` to fail at the fold boundary
/// instead.
pub struct FailingOracle {
    labels: Vec<String>,
    message: String,
    fail_reset: bool,
}

impl FailingOracle {
    /// Create a failing oracle over the given labels
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            message: "simulated oracle failure".to_string(),
            fail_reset: false,
        }
    }

    /// Set a custom failure message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Make `reset` fail as well
    pub fn with_failing_reset(mut self) -> Self {
        self.fail_reset = true;
        self
    }
}

#[async_trait]
impl Oracle for FailingOracle {
    async fn reset(&self, _labels: &[String]) -> Result<()> {
        if self.fail_reset {
            return Err(Error::oracle(self.message.clone()));
        }
        Ok(())
    }

    async fn learn(&self, _data: &str, _label: &str) -> Result<bool> {
        Err(Error::oracle(self.message.clone()))
    }

    async fn classify(&self, _data: &str) -> Result<Classification> {
        Err(Error::oracle(self.message.clone()))
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn untrained_oracle_matches_first_label() {
        let oracle = MockOracle::new(["ham", "spam"]);
        let classification = oracle.classify("anything at all").await.unwrap();
        assert_eq!(classification.best_label(), Some("ham"));
        assert_eq!(classification.score("spam"), Some(0.0));
    }

    #[tokio::test]
    async fn learning_shifts_the_best_match() {
        let oracle = MockOracle::new(["ham", "spam"]);
        oracle.learn("buy cheap pills", "spam").await.unwrap();
        let classification = oracle.classify("cheap pills here").await.unwrap();
        assert_eq!(classification.best_label(), Some("spam"));
        assert_eq!(classification.score("spam"), Some(2.0));
    }

    #[tokio::test]
    async fn reset_clears_learned_state() {
        let oracle = MockOracle::new(["ham", "spam"]);
        oracle.learn("buy cheap pills", "spam").await.unwrap();
        assert_eq!(oracle.learned_count("spam"), 1);

        oracle.reset(&["spam".to_string()]).await.unwrap();
        assert_eq!(oracle.learned_count("spam"), 0);
        let classification = oracle.classify("cheap pills here").await.unwrap();
        assert_eq!(classification.best_label(), Some("ham"));
    }

    #[tokio::test]
    async fn reset_rejects_unknown_labels() {
        let oracle = MockOracle::new(["ham", "spam"]);
        let err = oracle.reset(&["eggs".to_string()]).await.unwrap_err();
        assert!(err.to_string().contains("unknown label"));
    }

    #[tokio::test]
    async fn learn_rejects_unknown_labels() {
        let oracle = MockOracle::new(["ham", "spam"]);
        let err = oracle.learn("data", "eggs").await.unwrap_err();
        assert!(err.to_string().contains("unknown label"));
    }

    #[tokio::test]
    async fn train_on_error_skips_already_correct_items() {
        let oracle = MockOracle::new(["ham", "spam"]).with_train_on_error();

        // Untrained, everything matches "ham", so the first ham example is
        // already "correct" and gets skipped.
        assert!(!oracle.learn("hello there friend", "ham").await.unwrap());
        assert_eq!(oracle.learned_count("ham"), 0);

        // A spam example is misclassified as ham, so it is learned.
        assert!(oracle.learn("buy cheap pills", "spam").await.unwrap());
        assert_eq!(oracle.learned_count("spam"), 1);
    }

    #[tokio::test]
    async fn classify_reports_per_label_evidence() {
        let oracle = MockOracle::new(["ham", "spam"]);
        oracle.learn("one two three", "ham").await.unwrap();
        let classification = oracle.classify("two three four").await.unwrap();

        let ham = &classification.scores["ham"];
        assert_eq!(ham.hit_count, Some(2));
        assert_eq!(ham.feature_count, Some(3));
        assert_eq!(ham.probability, Some(1.0));
        assert_eq!(classification.total_features, 3);
    }

    #[tokio::test]
    async fn failing_oracle_fails_learn_and_classify() {
        let oracle = FailingOracle::new(["ham", "spam"]).with_message("backend exploded");
        assert!(oracle.reset(&["ham".to_string()]).await.is_ok());
        let err = oracle.learn("data", "ham").await.unwrap_err();
        assert!(err.to_string().contains("backend exploded"));
        assert!(oracle.classify("data").await.is_err());
    }
}
