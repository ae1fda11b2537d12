//! Pure matching over typed listing records.
//!
//! Each listing domain declares a criteria type implementing [`Matches`] for its
//! record type. Criteria are built from [`Exact`], [`Range`], and [`TextSearch`]
//! constraints, every one of which carries an explicit "no constraint" variant.
//! A record passes when every active constraint passes.

mod constraint;
mod text;

pub use constraint::{Exact, Range};
pub use text::TextSearch;

/// Predicate implemented by a criteria type over the records it filters.
pub trait Matches<R: ?Sized> {
    /// Returns `true` when the record satisfies every active constraint.
    fn matches(&self, record: &R) -> bool;

    /// Returns `true` when no constraint is active, i.e. every record matches.
    fn is_unconstrained(&self) -> bool;
}

/// Evaluate a single record against criteria.
pub fn matches<R, C>(record: &R, criteria: &C) -> bool
where
    R: ?Sized,
    C: Matches<R> + ?Sized,
{
    criteria.matches(record)
}

/// Return the records satisfying `criteria`, in their original order.
///
/// The input is never reordered, deduplicated, or truncated; the surviving
/// entries are borrowed from `records`.
pub fn filter<'a, R, C>(records: &'a [R], criteria: &C) -> Vec<&'a R>
where
    C: Matches<R> + ?Sized,
{
    if criteria.is_unconstrained() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| criteria.matches(record))
        .collect()
}

/// Owned variant of [`filter`] for callers that hand the result to a serializer.
pub fn filter_cloned<R, C>(records: &[R], criteria: &C) -> Vec<R>
where
    R: Clone,
    C: Matches<R> + ?Sized,
{
    filter(records, criteria).into_iter().cloned().collect()
}
