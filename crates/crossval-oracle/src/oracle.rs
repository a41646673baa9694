//! Oracle trait: the opaque classifier collaborator

use async_trait::async_trait;
use crossval_core::{Classification, Result};

/// The classifier under evaluation.
///
/// Implementations are opaque to the harness: the reference backend shells
/// out to an external binary for every call, so all three operations are
/// treated as potentially slow, blocking I/O. Trained state persists across
/// calls until `reset` is invoked; the harness resets at every fold
/// boundary and never assumes statelessness.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Clear persisted training state for the given labels.
    ///
    /// Fails if any label is not among the oracle's configured labels.
    async fn reset(&self, labels: &[String]) -> Result<()>;

    /// Train on `data` under `label`.
    ///
    /// Returns whether training was actually performed: `false` only under
    /// train-on-error gating, when the current model already classifies
    /// `data` as `label`. The gating pre-check is a real classify call, so
    /// training outcome depends on item order.
    async fn learn(&self, data: &str, label: &str) -> Result<bool>;

    /// Score `data` against every configured label.
    async fn classify(&self, data: &str) -> Result<Classification>;

    /// The configured label set, in a stable order.
    fn labels(&self) -> &[String];
}
