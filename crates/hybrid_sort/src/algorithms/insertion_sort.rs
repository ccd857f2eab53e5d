use crate::Comparator;

#[inline]
pub fn sort<T, C: Comparator<T>>(data: &mut [T], cmp: &mut C) -> Result<(), C::Error> {
    match data.len() {
        0 | 1 => Ok(()),
        len => sort_range(data, 0, len - 1, cmp),
    }
}

/// Sorts `data[left..=right]` in place. `right <= left` is a no-op.
pub fn sort_range<T, C: Comparator<T>>(
    data: &mut [T],
    left: usize,
    right: usize,
    cmp: &mut C,
) -> Result<(), C::Error> {
    debug_assert!(right < data.len() || right <= left);

    if right <= left {
        return Ok(());
    }

    for pos in (left + 1)..=right {
        let mut dest = pos;
        // Stop at the first predecessor that is <= the item; equal keys never pass each other.
        while dest > left && !cmp.precedes_or_equal(&data[dest - 1], &data[pos])? {
            dest -= 1;
        }
        if dest < pos {
            data[dest..=pos].rotate_right(1);
        }
    }

    Ok(())
}
