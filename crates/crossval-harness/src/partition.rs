//! Order-preserving partition of a dataset into near-equal folds

use crossval_core::{Error, Result};

/// Split `items` into `folds` near-equal chunks, preserving order.
///
/// With `n = items.len()`, exactly `n % folds` chunks get the larger size
/// `n / folds + 1` and come first; the rest get `n / folds`. `folds` may
/// exceed `n`, in which case the trailing chunks are empty. Fails when
/// `folds` is zero.
pub fn partition<T>(items: Vec<T>, folds: usize) -> Result<Vec<Vec<T>>> {
    if folds == 0 {
        return Err(Error::invalid_argument("folds must be at least 1"));
    }

    let small_size = items.len() / folds;
    let num_big = items.len() % folds;

    let mut result = Vec::with_capacity(folds);
    let mut rest = items;
    for fold in 0..folds {
        let take = if fold < num_big { small_size + 1 } else { small_size };
        let tail = rest.split_off(take);
        result.push(rest);
        rest = tail;
    }
    debug_assert!(rest.is_empty());

    Ok(result)
}
