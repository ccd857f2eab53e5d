//! Convenience wrappers over the sort core: `sorted`, `min`, `max`.
//!
//! Keyed variants compare every element through its key; elements sharing a
//! key are all kept and the earliest one wins ties.

use std::cmp::Ordering;

use crate::compare::{KeyOrder, Reversed};
use crate::error::into_ok;
use crate::{Comparator, DEFAULT_PARAMS, NaturalOrder, SortContext, algorithms};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

/// Collects `items` and sorts them stably. Descending order reverses the
/// comparator, so equal elements still appear in input order.
pub fn sorted<T: Ord, I: IntoIterator<Item = T>>(items: I, direction: Direction) -> Vec<T> {
    into_ok(sorted_with(items, direction, NaturalOrder))
}

/// Like [`sorted`], ordering by `key`. Returns the elements, not the keys.
pub fn sorted_by_key<T, K, I, F>(items: I, key: F, direction: Direction) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    into_ok(sorted_with(items, direction, KeyOrder(key)))
}

pub fn sorted_with<T, I, C>(items: I, direction: Direction, mut cmp: C) -> Result<Vec<T>, C::Error>
where
    I: IntoIterator<Item = T>,
    C: Comparator<T>,
{
    let mut data: Vec<T> = items.into_iter().collect();
    let mut ctx = SortContext::default();
    match direction {
        Direction::Ascending => {
            algorithms::hybrid::sort(&mut data, &DEFAULT_PARAMS, &mut ctx, &mut cmp)?
        }
        Direction::Descending => {
            algorithms::hybrid::sort(&mut data, &DEFAULT_PARAMS, &mut ctx, &mut Reversed(cmp))?
        }
    }
    Ok(data)
}

/// First element that no other element precedes, or `None` when empty.
pub fn min_with<T, I, C>(items: I, mut cmp: C) -> Result<Option<T>, C::Error>
where
    I: IntoIterator<Item = T>,
    C: Comparator<T>,
{
    select(items, |best, item| cmp.compare(item, best).map(|ord| ord == Ordering::Less))
}

/// First element that no other element follows, or `None` when empty.
pub fn max_with<T, I, C>(items: I, mut cmp: C) -> Result<Option<T>, C::Error>
where
    I: IntoIterator<Item = T>,
    C: Comparator<T>,
{
    select(items, |best, item| {
        cmp.compare(item, best).map(|ord| ord == Ordering::Greater)
    })
}

pub fn min_by_key<T, K, I, F>(items: I, key: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    into_ok(min_with(items, KeyOrder(key)))
}

pub fn max_by_key<T, K, I, F>(items: I, key: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    into_ok(max_with(items, KeyOrder(key)))
}

fn select<T, E, I, F>(items: I, mut replaces: F) -> Result<Option<T>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    let mut items = items.into_iter();
    let Some(mut best) = items.next() else {
        return Ok(None);
    };
    for item in items {
        if replaces(&best, &item)? {
            best = item;
        }
    }
    Ok(Some(best))
}
