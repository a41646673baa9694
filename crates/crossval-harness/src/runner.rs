//! Experiment orchestration: cross-validation and holdout runs

use crossval_core::{Error, LabeledItem, Result};
use crossval_oracle::Oracle;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::info;

use crate::evaluator::learn_classify;
use crate::folds::FoldSplits;

/// k-fold cross-validation over a labeled corpus.
///
/// Items are shuffled, split into `folds` rounds, and every item ends up
/// classified exactly once, by the round in which it lands in the test
/// fold. Under train-on-error oracles the results depend on item order, so
/// pass a seed whenever runs must be reproducible.
#[derive(Debug, Clone)]
pub struct CrossValidation {
    folds: usize,
    seed: Option<u64>,
}

impl CrossValidation {
    /// Configure a run with the given number of folds
    pub fn new(folds: usize) -> Self {
        Self { folds, seed: None }
    }

    /// Seed the shuffle for a deterministic run
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Classify every item via cross-validation and return the full,
    /// classified item set
    pub async fn run(
        &self,
        oracle: &dyn Oracle,
        mut items: Vec<LabeledItem>,
    ) -> Result<Vec<LabeledItem>> {
        if self.folds == 0 {
            return Err(Error::invalid_argument("folds must be at least 1"));
        }

        shuffle(&mut items, self.seed);
        let splits = FoldSplits::new(items.len(), self.folds)?;
        for split in splits.iter() {
            let stats = learn_classify(oracle, &mut items, &split.train, &split.test).await?;
            info!(
                fold = split.fold,
                trained = split.train.len(),
                learned = stats.learned,
                skipped = stats.skipped,
                classified = split.test.len(),
                "fold complete"
            );
        }
        Ok(items)
    }
}

/// Single train/test split by proportion.
///
/// The shuffled corpus is split into a classify-set of
/// `round(len * fraction)` items and a learn-set of the remainder, then
/// evaluated in one train/classify cycle. On very small corpora the
/// rounding can leave either set empty: an empty classify-set returns no
/// items, and an empty learn-set classifies the holdout with an untrained
/// (freshly reset) oracle. Neither case is an error.
#[derive(Debug, Clone)]
pub struct Holdout {
    fraction: f64,
    seed: Option<u64>,
}

impl Holdout {
    /// Configure a run holding out `fraction` of the items for
    /// classification. Must be strictly between 0 and 1.
    pub fn new(fraction: f64) -> Self {
        Self { fraction, seed: None }
    }

    /// Seed the shuffle for a deterministic run
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Train on the learn-set, classify the holdout, and return the
    /// classified holdout items
    pub async fn run(
        &self,
        oracle: &dyn Oracle,
        mut items: Vec<LabeledItem>,
    ) -> Result<Vec<LabeledItem>> {
        if !(self.fraction > 0.0 && self.fraction < 1.0) {
            return Err(Error::invalid_argument(format!(
                "holdout fraction must be strictly between 0 and 1, got {}",
                self.fraction
            )));
        }

        shuffle(&mut items, self.seed);
        let holdout_len = (items.len() as f64 * self.fraction).round() as usize;
        let test: Vec<usize> = (0..holdout_len).collect();
        let train: Vec<usize> = (holdout_len..items.len()).collect();

        let stats = learn_classify(oracle, &mut items, &train, &test).await?;
        info!(
            trained = train.len(),
            learned = stats.learned,
            skipped = stats.skipped,
            classified = test.len(),
            "holdout complete"
        );

        items.truncate(holdout_len);
        Ok(items)
    }
}

fn shuffle(items: &mut [LabeledItem], seed: Option<u64>) {
    match seed {
        Some(seed) => items.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => items.shuffle(&mut rand::thread_rng()),
    }
}
