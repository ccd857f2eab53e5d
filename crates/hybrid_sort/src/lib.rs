mod algorithms;
mod compare;
mod error;
pub mod select;

use std::cmp::Ordering;

pub use algorithms::min_run::min_run_length;
pub use compare::{
    Comparator, FnOrder, KeyOrder, NaturalOrder, PartialOrder, Reversed, TryFnOrder,
};
pub use error::SortError;

use error::into_ok;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    InsertionSort,
    MergeSortTopDown,
    HybridSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 3] = [
    SortAlgorithm::InsertionSort,
    SortAlgorithm::MergeSortTopDown,
    SortAlgorithm::HybridSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::MergeSortTopDown => "merge_sort_top_down",
        SortAlgorithm::HybridSort => "hybrid_sort",
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SortParams {
    /// Inputs shorter than this are a single run. Longer inputs get runs of
    /// `threshold / 2 ..= threshold` elements. Values below 2 act as 2.
    pub min_run_threshold: usize,
}

pub const DEFAULT_PARAMS: SortParams = SortParams {
    min_run_threshold: 32,
};

impl Default for SortParams {
    fn default() -> Self {
        DEFAULT_PARAMS
    }
}

/// Merge buffers reused across passes and across calls.
#[derive(Clone, Debug)]
pub struct SortContext<T> {
    pub(crate) scratch: Vec<T>,
    pub(crate) pending: Vec<T>,
}

impl<T> Default for SortContext<T> {
    fn default() -> Self {
        Self {
            scratch: Vec::new(),
            pending: Vec::new(),
        }
    }
}

impl<T> SortContext<T> {
    pub fn with_capacity(len: usize) -> Self {
        Self {
            scratch: Vec::with_capacity(len),
            pending: Vec::with_capacity(len / 2 + 1),
        }
    }
}

/// Sorts `data` stably in place by natural order.
pub fn sort_in_place<T: Ord>(data: &mut Vec<T>) {
    into_ok(sort_in_place_with(data, NaturalOrder));
}

pub fn sort_in_place_by<T, F>(data: &mut Vec<T>, compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    into_ok(sort_in_place_with(data, FnOrder(compare)));
}

pub fn sort_in_place_by_key<T, K, F>(data: &mut Vec<T>, key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    into_ok(sort_in_place_with(data, KeyOrder(key)));
}

/// Sorts by `PartialOrd`, failing on the first incomparable pair (e.g. NaN).
/// On failure `data` holds the same elements in unspecified order.
pub fn try_sort_in_place<T: PartialOrd>(data: &mut Vec<T>) -> Result<(), SortError> {
    sort_in_place_with(data, PartialOrder)
}

pub fn try_sort_in_place_by<T, E, F>(data: &mut Vec<T>, compare: F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    sort_in_place_with(data, TryFnOrder(compare))
}

pub fn sort_in_place_with<T, C: Comparator<T>>(data: &mut Vec<T>, cmp: C) -> Result<(), C::Error> {
    let mut ctx = SortContext::default();
    sort_in_place_with_ctx(data, &DEFAULT_PARAMS, &mut ctx, cmp)
}

pub fn sort_in_place_with_ctx<T, C: Comparator<T>>(
    data: &mut Vec<T>,
    params: &SortParams,
    ctx: &mut SortContext<T>,
    mut cmp: C,
) -> Result<(), C::Error> {
    algorithms::hybrid::sort(data, params, ctx, &mut cmp)
}

/// Returns a sorted copy of `data`; `data` itself is untouched.
pub fn sorted_copy<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    into_ok(sorted_copy_with(data, NaturalOrder))
}

pub fn sorted_copy_by<T, F>(data: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    into_ok(sorted_copy_with(data, FnOrder(compare)))
}

pub fn sorted_copy_with<T: Clone, C: Comparator<T>>(
    data: &[T],
    mut cmp: C,
) -> Result<Vec<T>, C::Error> {
    algorithms::merge_sort::sort(data.to_vec(), &mut cmp)
}

/// Stable merge of two sorted vectors; ties take `left` first.
pub fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    into_ok(merge_with(left, right, NaturalOrder))
}

pub fn merge_by<T, F>(left: Vec<T>, right: Vec<T>, compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    into_ok(merge_with(left, right, FnOrder(compare)))
}

pub fn merge_with<T, C: Comparator<T>>(
    left: Vec<T>,
    right: Vec<T>,
    mut cmp: C,
) -> Result<Vec<T>, C::Error> {
    algorithms::merge::merge(left, right, &mut cmp)
}

pub fn sort_using<T: Ord>(algo: SortAlgorithm, data: &mut Vec<T>) {
    let mut ctx = SortContext::default();
    into_ok(sort_using_with_ctx(algo, data, &DEFAULT_PARAMS, &mut ctx, NaturalOrder));
}

pub fn sort_using_with_ctx<T, C: Comparator<T>>(
    algo: SortAlgorithm,
    data: &mut Vec<T>,
    params: &SortParams,
    ctx: &mut SortContext<T>,
    mut cmp: C,
) -> Result<(), C::Error> {
    match algo {
        SortAlgorithm::InsertionSort => algorithms::insertion_sort::sort(data, &mut cmp),
        SortAlgorithm::MergeSortTopDown => {
            let (sorted, failure) =
                algorithms::merge_sort::sort_retaining(std::mem::take(data), &mut cmp);
            *data = sorted;
            failure.map_or(Ok(()), Err)
        }
        SortAlgorithm::HybridSort => algorithms::hybrid::sort(data, params, ctx, &mut cmp),
    }
}
