//! Train/classify orchestration for a single split

use crossval_core::{Error, LabeledItem, Result};
use crossval_oracle::Oracle;
use tracing::debug;

/// Outcome counts from the training phase of one split
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrainStats {
    /// Items the oracle actually trained on
    pub learned: usize,

    /// Items skipped by train-on-error gating
    pub skipped: usize,
}

/// Drive the oracle through one train/classify cycle.
///
/// The oracle's persisted state is reset first, so earlier splits cannot
/// leak into this one. Every train item is then learned in order, and every
/// test item is classified, with the result stored on the item. The phases
/// are strictly sequential: no learn call starts before reset completes,
/// and no classify call starts before the last learn completes.
///
/// Any oracle failure aborts the run with the failing call and item index
/// attached; there is no partial-results mode.
pub async fn learn_classify(
    oracle: &dyn Oracle,
    items: &mut [LabeledItem],
    train: &[usize],
    test: &[usize],
) -> Result<TrainStats> {
    if let Some(&bad) = train.iter().chain(test).find(|&&i| i >= items.len()) {
        return Err(Error::invalid_argument(format!(
            "item index {bad} out of range for {} items",
            items.len()
        )));
    }

    oracle
        .reset(oracle.labels())
        .await
        .map_err(|e| Error::oracle(format!("reset before training failed: {e}")))?;

    let mut stats = TrainStats::default();
    for &index in train {
        let item = &items[index];
        let learned = oracle
            .learn(&item.data, &item.actual_label)
            .await
            .map_err(|e| Error::oracle(format!("learn failed for item {index}: {e}")))?;
        if learned {
            stats.learned += 1;
        } else {
            stats.skipped += 1;
        }
    }

    for &index in test {
        let classification = oracle
            .classify(&items[index].data)
            .await
            .map_err(|e| Error::oracle(format!("classify failed for item {index}: {e}")))?;
        items[index].classification = Some(classification);
    }

    debug!(
        learned = stats.learned,
        skipped = stats.skipped,
        classified = test.len(),
        "split evaluated"
    );

    Ok(stats)
}
