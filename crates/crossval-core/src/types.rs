//! Core data model for the evaluation harness

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single corpus item: opaque payload, ground-truth label, and the
/// classification assigned to it by an evaluation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledItem {
    /// Opaque payload handed to the oracle (e.g. one line of text)
    pub data: String,

    /// Ground-truth label for this item
    pub actual_label: String,

    /// Set by the test phase of exactly one split; unset before any run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
}

impl LabeledItem {
    /// Create an unclassified item
    pub fn new(data: impl Into<String>, actual_label: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            actual_label: actual_label.into(),
            classification: None,
        }
    }

    /// Create an item with a classification already attached.
    ///
    /// Useful for accuracy computation over pre-classified corpora and for
    /// test fixtures.
    pub fn classified(
        data: impl Into<String>,
        actual_label: impl Into<String>,
        classification: Classification,
    ) -> Self {
        Self {
            data: data.into(),
            actual_label: actual_label.into(),
            classification: Some(classification),
        }
    }

    /// The label of the best match, if this item has been classified and the
    /// oracle (or a threshold rebinding) produced a confident match.
    pub fn best_label(&self) -> Option<&str> {
        self.classification.as_ref().and_then(Classification::best_label)
    }
}

/// Per-label evidence from a single classify call. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelScore {
    /// Label this score is for
    pub label: String,

    /// Confidence score; higher means a stronger match. Typically, but not
    /// strictly, within [-320, 320].
    pub score: f64,

    /// Probability estimate in [0, 1], when the oracle reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,

    /// Number of features learned into this label's model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_count: Option<u64>,

    /// Number of input features that hit this label's model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hit_count: Option<u64>,
}

impl ModelScore {
    /// Create a score with no optional evidence attached
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
            probability: None,
            feature_count: None,
            hit_count: None,
        }
    }
}

/// The result of one classify call: a score for every configured label and
/// an optional best match.
///
/// `best_match` may be rebound in place by the threshold policy. The
/// per-label scores are never modified after construction, so a rebinding
/// can always be recomputed from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// The winning label's score, or `None` when no label reached the
    /// required confidence
    pub best_match: Option<ModelScore>,

    /// One entry per configured label
    pub scores: BTreeMap<String, ModelScore>,

    /// Number of features extracted from the input
    pub total_features: u64,
}

impl Classification {
    /// Build a classification from per-label scores, electing the highest
    /// score as the best match. Ties keep the earliest entry in `scores`
    /// order.
    pub fn new(scores: Vec<ModelScore>, total_features: u64) -> Self {
        let mut best: Option<ModelScore> = None;
        for score in &scores {
            match &best {
                Some(current) if score.score <= current.score => {}
                _ => best = Some(score.clone()),
            }
        }
        Self {
            best_match: best,
            scores: scores.into_iter().map(|s| (s.label.clone(), s)).collect(),
            total_features,
        }
    }

    /// The score recorded for `label`, if any
    pub fn score(&self, label: &str) -> Option<f64> {
        self.scores.get(label).map(|s| s.score)
    }

    /// The label of the best match, if any
    pub fn best_label(&self) -> Option<&str> {
        self.best_match.as_ref().map(|m| m.label.as_str())
    }
}

/// Confusion-matrix counts and derived precision/recall for one label.
///
/// Serializes with the conventional short field names (`tp`, `fp`, `tn`,
/// `fn`) for downstream consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accuracy {
    /// Label these counts are for
    pub label: String,

    #[serde(rename = "tp")]
    pub true_positives: u64,

    #[serde(rename = "fp")]
    pub false_positives: u64,

    #[serde(rename = "tn")]
    pub true_negatives: u64,

    #[serde(rename = "fn")]
    pub false_negatives: u64,

    /// `tp / (tp + fp)`, or 0 when no item was predicted as this label
    pub precision: f64,

    /// `tp / (tp + fn)`, or 0 when no item actually carries this label
    pub recall: f64,
}

impl Accuracy {
    /// Build an accuracy record from raw confusion counts.
    ///
    /// Zero-denominator precision and recall are defined as 0, not raised
    /// as errors.
    pub fn from_counts(
        label: impl Into<String>,
        true_positives: u64,
        false_positives: u64,
        true_negatives: u64,
        false_negatives: u64,
    ) -> Self {
        let predicted_positive = true_positives + false_positives;
        let actual_positive = true_positives + false_negatives;
        let precision = if predicted_positive > 0 {
            true_positives as f64 / predicted_positive as f64
        } else {
            0.0
        };
        let recall = if actual_positive > 0 {
            true_positives as f64 / actual_positive as f64
        } else {
            0.0
        };
        Self {
            label: label.into(),
            true_positives,
            false_positives,
            true_negatives,
            false_negatives,
            precision,
            recall,
        }
    }

    /// Total number of items these counts cover
    pub fn total(&self) -> u64 {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }
}

/// One point on a precision/recall curve produced by a threshold sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub threshold: f64,
    pub precision: f64,
    pub recall: f64,
}
