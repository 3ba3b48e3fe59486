//! Extra operations for the standard optional-value container.
//!
//! The engine leans on `Option` and `Result` as its control-flow channels;
//! the standard library already covers almost everything it needs
//! (`map`, `and_then`, `filter`, `unwrap_or`, `unwrap_or_else`, `or`,
//! `or_else`, and `ok_or` as the one sanctioned conversion of an absent
//! value into a hard failure). This module adds the combining and folding
//! operations the standard library leaves out.

/// F#-style combining and folding operations on `Option`
pub trait OptionExt<T> {
    /// Combine two optionals; `Some` only when both inputs are `Some`
    fn map2<U, V, F>(self, mapping: F, other: Option<U>) -> Option<V>
    where
        F: FnOnce(T, U) -> V;

    /// Combine three optionals; `Some` only when all inputs are `Some`
    fn map3<U, V, W, F>(self, mapping: F, other1: Option<U>, other2: Option<V>) -> Option<W>
    where
        F: FnOnce(T, U, V) -> W;

    /// Reduce to a plain value: `None` yields the seed, `Some(v)` yields
    /// `folder(seed, v)`
    fn fold<S, F>(self, seed: S, folder: F) -> S
    where
        F: FnOnce(S, T) -> S;

    /// `fold` with the value argument first, matching right-to-left folds
    fn fold_back<S, F>(self, folder: F, seed: S) -> S
    where
        F: FnOnce(T, S) -> S;
}

impl<T> OptionExt<T> for Option<T> {
    fn map2<U, V, F>(self, mapping: F, other: Option<U>) -> Option<V>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(mapping(a, b)),
            _ => None,
        }
    }

    fn map3<U, V, W, F>(self, mapping: F, other1: Option<U>, other2: Option<V>) -> Option<W>
    where
        F: FnOnce(T, U, V) -> W,
    {
        match (self, other1, other2) {
            (Some(a), Some(b), Some(c)) => Some(mapping(a, b, c)),
            _ => None,
        }
    }

    fn fold<S, F>(self, seed: S, folder: F) -> S
    where
        F: FnOnce(S, T) -> S,
    {
        match self {
            Some(value) => folder(seed, value),
            None => seed,
        }
    }

    fn fold_back<S, F>(self, folder: F, seed: S) -> S
    where
        F: FnOnce(T, S) -> S,
    {
        match self {
            Some(value) => folder(value, seed),
            None => seed,
        }
    }
}
