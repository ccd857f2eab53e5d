use crate::Comparator;

use super::merge;

/// Top-down stable merge sort. Consumes `data` and returns a freshly
/// allocated sorted buffer; each half owns its own storage.
pub fn sort<T, C: Comparator<T>>(data: Vec<T>, cmp: &mut C) -> Result<Vec<T>, C::Error> {
    match sort_retaining(data, cmp) {
        (sorted, None) => Ok(sorted),
        (_, Some(err)) => Err(err),
    }
}

/// Like [`sort`], but hands back every element even when the comparator
/// fails. The order is unspecified in that case.
pub(crate) fn sort_retaining<T, C: Comparator<T>>(
    mut data: Vec<T>,
    cmp: &mut C,
) -> (Vec<T>, Option<C::Error>) {
    if data.len() < 2 {
        return (data, None);
    }

    let right = data.split_off(data.len() / 2);
    let (mut left, failure) = sort_retaining(data, cmp);
    if failure.is_some() {
        left.extend(right);
        return (left, failure);
    }
    let (right, failure) = sort_retaining(right, cmp);
    if failure.is_some() {
        left.extend(right);
        return (left, failure);
    }

    let mut out = Vec::with_capacity(left.len() + right.len());
    let failure = merge::merge_into(left, right, &mut out, cmp).err();
    (out, failure)
}
