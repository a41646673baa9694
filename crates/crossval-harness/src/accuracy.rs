//! Confusion-matrix accuracy over classified items

use crossval_core::{Accuracy, LabeledItem};
use std::collections::BTreeMap;

/// Compute per-label confusion counts and precision/recall over `items`.
///
/// For each label, an item counts as a positive prediction only when its
/// best match is exactly that label; an item with no classification, or a
/// classification with no best match, counts as a negative prediction for
/// every label. Read-only over the items, so it can be invoked repeatedly.
pub fn compute_accuracy(items: &[LabeledItem], labels: &[String]) -> BTreeMap<String, Accuracy> {
    let mut result = BTreeMap::new();
    for label in labels {
        let mut true_positives = 0;
        let mut false_positives = 0;
        let mut true_negatives = 0;
        let mut false_negatives = 0;

        for item in items {
            let actual = item.actual_label == *label;
            let predicted = item.best_label() == Some(label.as_str());
            match (actual, predicted) {
                (true, true) => true_positives += 1,
                (true, false) => false_negatives += 1,
                (false, true) => false_positives += 1,
                (false, false) => true_negatives += 1,
            }
        }

        result.insert(
            label.clone(),
            Accuracy::from_counts(
                label.clone(),
                true_positives,
                false_positives,
                true_negatives,
                false_negatives,
            ),
        );
    }
    result
}
