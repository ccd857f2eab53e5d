use crate::Comparator;

/// Appends the stable merge of two sorted sequences to `out`.
///
/// Ties take the left element first. Once either side runs dry the rest of
/// the other is appended in order. If the comparator fails, every element not
/// yet emitted is still appended (left remainder, then right remainder)
/// before the error is returned, so `out` always receives all elements.
pub fn merge_into<T, L, R, C>(
    left: L,
    right: R,
    out: &mut Vec<T>,
    cmp: &mut C,
) -> Result<(), C::Error>
where
    L: IntoIterator<Item = T>,
    R: IntoIterator<Item = T>,
    C: Comparator<T>,
{
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    let mut failure = None;

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let take_left = match cmp.precedes_or_equal(l, r) {
            Ok(take_left) => take_left,
            Err(err) => {
                failure = Some(err);
                break;
            }
        };
        let next = if take_left { left.next() } else { right.next() };
        out.extend(next);
    }

    out.extend(left);
    out.extend(right);

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Merges two sorted vectors into a new one. An empty side returns the
/// other vector as is.
pub fn merge<T, C: Comparator<T>>(
    left: Vec<T>,
    right: Vec<T>,
    cmp: &mut C,
) -> Result<Vec<T>, C::Error> {
    if left.is_empty() {
        return Ok(right);
    }
    if right.is_empty() {
        return Ok(left);
    }

    let mut out = Vec::with_capacity(left.len() + right.len());
    merge_into(left, right, &mut out, cmp)?;
    Ok(out)
}
