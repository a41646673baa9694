//! Threshold sweeps producing precision/recall curves

use crossval_core::{Error, LabeledItem, Result, SweepPoint};
use std::collections::BTreeMap;
use tracing::debug;

use crate::accuracy::compute_accuracy;
use crate::threshold::rebind;

/// Global (min, max) over every per-label score of every classified item.
///
/// The range covers all scores, not just best-match scores; it defines the
/// endpoints of a sweep. `None` when no item carries a classification.
pub fn score_range(items: &[LabeledItem]) -> Option<(f64, f64)> {
    let mut range: Option<(f64, f64)> = None;
    for item in items {
        let Some(classification) = &item.classification else {
            continue;
        };
        for score in classification.scores.values() {
            range = Some(match range {
                None => (score.score, score.score),
                Some((low, high)) => (low.min(score.score), high.max(score.score)),
            });
        }
    }
    range
}

/// Scan `num_points` evenly spaced thresholds across the items' score range
/// and compute precision/recall at each point, per label. Two-class only.
///
/// With `increment = (high - low) / (num_points + 1)`, the thresholds are
/// `low + i * increment` for `i` in `1..=num_points`, in ascending order.
/// Every point rebinds each item's best match from its per-label scores,
/// never from an earlier rebinding, so points do not contaminate one
/// another. The caller's items are left untouched.
pub fn sweep(
    items: &[LabeledItem],
    label_a: &str,
    label_b: &str,
    num_points: usize,
) -> Result<BTreeMap<String, Vec<SweepPoint>>> {
    if label_a == label_b {
        return Err(Error::invalid_argument(format!(
            "threshold sweep requires two distinct labels, got {label_a:?} twice"
        )));
    }
    let (low, high) = score_range(items).ok_or_else(|| {
        Error::invalid_argument("threshold sweep requires at least one classified item")
    })?;

    let labels = vec![label_a.to_string(), label_b.to_string()];
    let mut curves: BTreeMap<String, Vec<SweepPoint>> = labels
        .iter()
        .map(|label| (label.clone(), Vec::with_capacity(num_points)))
        .collect();

    // Scratch copy: rebinding mutates best matches, and the caller may still
    // need the oracle's original verdicts.
    let mut scratch = items.to_vec();

    let increment = (high - low) / (num_points as f64 + 1.0);
    debug!(low, high, increment, num_points, "sweeping thresholds");

    for point in 1..=num_points {
        let threshold = low + point as f64 * increment;
        for item in &mut scratch {
            if let Some(classification) = item.classification.as_mut() {
                rebind(classification, Some(threshold), label_a, label_b)?;
            }
        }
        for (label, accuracy) in compute_accuracy(&scratch, &labels) {
            let curve = curves.get_mut(&label).expect("curve exists for every label");
            curve.push(SweepPoint {
                threshold,
                precision: accuracy.precision,
                recall: accuracy.recall,
            });
        }
    }

    Ok(curves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossval_core::{Classification, ModelScore};

    fn item(actual: &str, ham: f64, spam: f64) -> LabeledItem {
        LabeledItem::classified(
            "",
            actual,
            Classification::new(
                vec![ModelScore::new("ham", ham), ModelScore::new("spam", spam)],
                17,
            ),
        )
    }

    #[test]
    fn range_spans_every_per_label_score() {
        let items = vec![
            item("ham", 30.2, -18.0),
            item("ham", 16.2, -21.0),
            item("ham", 57.2, -16.0),
        ];
        assert_eq!(score_range(&items), Some((-21.0, 57.2)));
    }

    #[test]
    fn range_ignores_unclassified_items() {
        let items = vec![LabeledItem::new("", "ham")];
        assert_eq!(score_range(&items), None);
    }

    #[test]
    fn sweep_matches_reference_curve() {
        let items = vec![
            item("ham", 100.0, -100.0),
            item("ham", 20.0, -20.0),
            item("spam", -30.0, 30.0),
            item("spam", -100.0, 100.0),
        ];

        let curves = sweep(&items, "ham", "spam", 4).unwrap();

        let expected_ham = vec![
            SweepPoint { threshold: -60.0, precision: 2.0 / 3.0, recall: 1.0 },
            SweepPoint { threshold: -20.0, precision: 1.0, recall: 1.0 },
            SweepPoint { threshold: 20.0, precision: 1.0, recall: 1.0 },
            SweepPoint { threshold: 60.0, precision: 1.0, recall: 0.5 },
        ];
        let expected_spam = vec![
            SweepPoint { threshold: -60.0, precision: 1.0, recall: 0.5 },
            SweepPoint { threshold: -20.0, precision: 1.0, recall: 1.0 },
            SweepPoint { threshold: 20.0, precision: 1.0, recall: 1.0 },
            SweepPoint { threshold: 60.0, precision: 2.0 / 3.0, recall: 1.0 },
        ];

        assert_eq!(curves["ham"], expected_ham);
        assert_eq!(curves["spam"], expected_spam);
    }

    #[test]
    fn sweep_leaves_the_input_untouched() {
        let items = vec![item("ham", 100.0, -100.0), item("spam", -100.0, 100.0)];
        let before = items.clone();
        sweep(&items, "ham", "spam", 3).unwrap();
        assert_eq!(
            items.iter().map(LabeledItem::best_label).collect::<Vec<_>>(),
            before.iter().map(LabeledItem::best_label).collect::<Vec<_>>()
        );
    }

    #[test]
    fn sweep_thresholds_ascend() {
        let items = vec![item("ham", 50.0, -50.0), item("spam", -50.0, 50.0)];
        let curves = sweep(&items, "ham", "spam", 7).unwrap();
        let thresholds: Vec<f64> = curves["ham"].iter().map(|p| p.threshold).collect();
        assert!(thresholds.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(thresholds.len(), 7);
    }

    #[test]
    fn sweep_requires_classified_items() {
        let items = vec![LabeledItem::new("", "ham")];
        assert!(sweep(&items, "ham", "spam", 3).is_err());
    }

    #[test]
    fn sweep_requires_distinct_labels() {
        let items = vec![item("ham", 1.0, 2.0)];
        assert!(sweep(&items, "ham", "ham", 3).is_err());
    }
}
