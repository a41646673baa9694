//! Two-class decision rebinding by score threshold

use crossval_core::{Classification, Error, Result};

/// Rebind `best_match` using a score threshold. Two-class only.
///
/// With no threshold the oracle's own verdict stands. Otherwise `label_a`
/// wins whenever its score is at least `threshold` (the exact tie included)
/// and `label_b` wins otherwise. The tie boundary always favors `label_a`;
/// published numbers depend on this exact rule.
///
/// The rebinding reads only the per-label scores, never a previously
/// rebound best match, so it can be applied repeatedly to the same
/// classification with different thresholds.
pub fn rebind(
    classification: &mut Classification,
    threshold: Option<f64>,
    label_a: &str,
    label_b: &str,
) -> Result<()> {
    let Some(threshold) = threshold else {
        return Ok(());
    };

    if label_a == label_b {
        return Err(Error::invalid_argument(format!(
            "threshold rebinding requires two distinct labels, got {label_a:?} twice"
        )));
    }
    if classification.scores.len() != 2 {
        return Err(Error::invalid_argument(format!(
            "threshold rebinding requires exactly two labels, classification has {}",
            classification.scores.len()
        )));
    }

    let score_a = classification
        .scores
        .get(label_a)
        .ok_or_else(|| Error::invalid_argument(format!("classification has no score for {label_a:?}")))?;
    let score_b = classification
        .scores
        .get(label_b)
        .ok_or_else(|| Error::invalid_argument(format!("classification has no score for {label_b:?}")))?;

    let winner = if score_a.score >= threshold { score_a } else { score_b };
    classification.best_match = Some(winner.clone());
    Ok(())
}
