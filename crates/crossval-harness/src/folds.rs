//! (train, test) splits for k-fold cross-validation

use crossval_core::Result;

use crate::partition::partition;

/// One round of cross-validation, as indices into the caller's item slice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldSplit {
    /// Index of the fold held out as the test set
    pub fold: usize,

    /// Indices of every item outside the test fold, in original order
    pub train: Vec<usize>,

    /// Indices of the test fold's items
    pub test: Vec<usize>,
}

/// Restartable generator of `(train, test)` splits over `len` items.
///
/// Each fold serves as the test set exactly once; the train set is every
/// other fold concatenated in original partition order. For every split,
/// train and test are disjoint and together cover all items.
#[derive(Debug, Clone)]
pub struct FoldSplits {
    parts: Vec<Vec<usize>>,
}

impl FoldSplits {
    /// Plan `folds` splits over `len` items
    pub fn new(len: usize, folds: usize) -> Result<Self> {
        Ok(Self {
            parts: partition((0..len).collect(), folds)?,
        })
    }

    /// Number of splits this plan yields
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Iterate the splits lazily. Each call starts over from fold 0.
    pub fn iter(&self) -> impl Iterator<Item = FoldSplit> + '_ {
        (0..self.parts.len()).map(move |fold| FoldSplit {
            fold,
            train: self
                .parts
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != fold)
                .flat_map(|(_, part)| part.iter().copied())
                .collect(),
            test: self.parts[fold].clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_items_three_folds() {
        let splits: Vec<FoldSplit> = FoldSplits::new(10, 3).unwrap().iter().collect();

        assert_eq!(
            splits,
            vec![
                FoldSplit {
                    fold: 0,
                    train: vec![4, 5, 6, 7, 8, 9],
                    test: vec![0, 1, 2, 3],
                },
                FoldSplit {
                    fold: 1,
                    train: vec![0, 1, 2, 3, 7, 8, 9],
                    test: vec![4, 5, 6],
                },
                FoldSplit {
                    fold: 2,
                    train: vec![0, 1, 2, 3, 4, 5, 6],
                    test: vec![7, 8, 9],
                },
            ]
        );
    }

    #[test]
    fn splits_are_disjoint_and_cover_everything() {
        let splits = FoldSplits::new(17, 5).unwrap();
        for split in splits.iter() {
            let mut seen: Vec<usize> = split.train.iter().chain(&split.test).copied().collect();
            seen.sort_unstable();
            assert_eq!(seen, (0..17).collect::<Vec<_>>());
            assert!(split.train.iter().all(|i| !split.test.contains(i)));
        }
    }

    #[test]
    fn test_sets_partition_the_items() {
        let splits = FoldSplits::new(17, 5).unwrap();
        let mut tested: Vec<usize> = splits.iter().flat_map(|s| s.test).collect();
        tested.sort_unstable();
        assert_eq!(tested, (0..17).collect::<Vec<_>>());
    }

    #[test]
    fn iteration_restarts_from_the_beginning() {
        let splits = FoldSplits::new(6, 2).unwrap();
        let first: Vec<FoldSplit> = splits.iter().collect();
        let second: Vec<FoldSplit> = splits.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_folds_is_invalid() {
        assert!(FoldSplits::new(10, 0).is_err());
    }
}
