/// Run length for `n` elements so that `n / run` is at or just below a power
/// of two. Returns `n` itself when `n < threshold`; otherwise the result lies
/// in `[threshold / 2, threshold]`. Thresholds below 2 are treated as 2.
pub fn min_run_length(mut n: usize, threshold: usize) -> usize {
    let threshold = threshold.max(2);
    let mut r = 0usize;
    while n >= threshold {
        r |= n & 1;
        n >>= 1;
    }
    n + r
}
