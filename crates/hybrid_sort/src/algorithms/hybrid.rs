use tracing::{debug, trace};

use crate::{Comparator, SortContext, SortParams};

use super::{insertion_sort, merge, min_run};

/// Contiguous index range `[start, start + len)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Run {
    start: usize,
    len: usize,
}

impl Run {
    #[inline]
    fn end(self) -> usize {
        self.start + self.len
    }
}

/// Sorts `data` in place: insertion-sorts `min_run`-sized blocks, then merges
/// neighbouring blocks with doubling width until one block remains.
///
/// On comparator failure the sort stops and `data` holds a permutation of its
/// input in unspecified order.
pub fn sort<T, C: Comparator<T>>(
    data: &mut Vec<T>,
    params: &SortParams,
    ctx: &mut SortContext<T>,
    cmp: &mut C,
) -> Result<(), C::Error> {
    let n = data.len();
    if n < 2 {
        return Ok(());
    }

    let min_run = min_run::min_run_length(n, params.min_run_threshold);
    for run in blocks(n, min_run) {
        insertion_sort::sort_range(data, run.start, run.end() - 1, cmp).inspect_err(|_| {
            debug!(len = n, block_start = run.start, "comparison failed while sorting block");
        })?;
    }

    let mut width = min_run;
    let mut passes = 0usize;
    while width < n {
        trace!(len = n, width, "merge pass");
        merge_pass(data, ctx, width, cmp).inspect_err(|_| {
            debug!(len = n, width, "comparison failed while merging");
        })?;
        width = width.saturating_mul(2);
        passes += 1;
    }

    debug!(len = n, min_run, passes, "hybrid sort finished");
    Ok(())
}

fn blocks(n: usize, width: usize) -> impl Iterator<Item = Run> {
    (0..n).step_by(width).map(move |start| Run {
        start,
        len: width.min(n - start),
    })
}

/// Merges each window `[left, left + 2 * width)` of `data`. All windows are
/// written to the context buffer, which is swapped in once the pass is done.
fn merge_pass<T, C: Comparator<T>>(
    data: &mut Vec<T>,
    ctx: &mut SortContext<T>,
    width: usize,
    cmp: &mut C,
) -> Result<(), C::Error> {
    let n = data.len();
    let SortContext { scratch, pending } = ctx;
    scratch.clear();
    scratch.reserve(n);

    let mut failure = None;
    let mut source = data.drain(..);
    for window in blocks(n, width.saturating_mul(2)) {
        if failure.is_some() {
            scratch.extend(source.by_ref());
            break;
        }

        let mid = width.min(window.len);
        pending.clear();
        pending.extend(source.by_ref().take(mid));
        let right = source.by_ref().take(window.len - mid);
        if let Err(err) = merge::merge_into(pending.drain(..), right, scratch, cmp) {
            failure = Some(err);
        }
    }
    drop(source);

    std::mem::swap(data, scratch);
    debug_assert_eq!(data.len(), n);

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    use crate::compare::{KeyOrder, PartialOrder, TryFnOrder};
    use crate::{DEFAULT_PARAMS, NaturalOrder};

    use super::*;

    fn hybrid<T: Ord>(data: &mut Vec<T>) {
        let mut ctx = SortContext::default();
        sort(data, &DEFAULT_PARAMS, &mut ctx, &mut NaturalOrder).unwrap();
    }

    #[test]
    fn blocks_cover_input_once() {
        let runs: Vec<Run> = blocks(70, 32).collect();
        assert_eq!(
            runs,
            [
                Run { start: 0, len: 32 },
                Run { start: 32, len: 32 },
                Run { start: 64, len: 6 },
            ]
        );
        assert_eq!(blocks(0, 16).count(), 0);
    }

    #[test]
    fn trivial_lengths() {
        let mut empty: Vec<i32> = Vec::new();
        hybrid(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![5];
        hybrid(&mut single);
        assert_eq!(single, [5]);

        let mut three = vec![3, 1, 2];
        hybrid(&mut three);
        assert_eq!(three, [1, 2, 3]);
    }

    #[test]
    fn shuffled_ranges_come_back_ordered() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[10_usize, 31, 32, 33, 63, 64, 65, 100, 127, 1000, 4099] {
            let mut data: Vec<usize> = (0..size).collect();
            data.shuffle(&mut rng);
            hybrid(&mut data);
            assert!(data.iter().copied().eq(0..size), "input_len={size}");
        }
    }

    #[test]
    fn merge_pass_handles_short_tail_window() {
        let mut data = vec![1, 4, 2, 3, 0];
        let mut ctx = SortContext::default();
        merge_pass(&mut data, &mut ctx, 2, &mut NaturalOrder).unwrap();
        assert_eq!(data, [1, 2, 3, 4, 0]);
        merge_pass(&mut data, &mut ctx, 4, &mut NaturalOrder).unwrap();
        assert_eq!(data, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn small_threshold_exercises_many_passes() {
        let params = SortParams { min_run_threshold: 4 };
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        let data: Vec<(u8, usize)> = (0..513).map(|i| (rng.random_range(0..10), i)).collect();

        let mut expected = data.clone();
        expected.sort_by_key(|p| p.0);

        let mut actual = data;
        let mut ctx = SortContext::default();
        sort(&mut actual, &params, &mut ctx, &mut KeyOrder(|p: &(u8, usize)| p.0)).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn context_is_reusable_across_calls() {
        let mut ctx = SortContext::default();
        for size in [200_usize, 50, 300] {
            let mut data: Vec<usize> = (0..size).rev().collect();
            sort(&mut data, &DEFAULT_PARAMS, &mut ctx, &mut NaturalOrder).unwrap();
            assert!(data.iter().copied().eq(0..size));
        }
    }

    #[test]
    fn failure_keeps_a_permutation() {
        let mut data: Vec<f64> = (0..100).rev().map(f64::from).collect();
        data[70] = f64::NAN;
        let mut ctx = SortContext::default();
        assert!(sort(&mut data, &DEFAULT_PARAMS, &mut ctx, &mut PartialOrder).is_err());
        assert_eq!(data.len(), 100);
        assert_eq!(data.iter().filter(|x| x.is_nan()).count(), 1);
    }

    #[test]
    fn caller_error_mid_sort_keeps_a_permutation() {
        let mut calls = 0usize;
        let mut cmp = TryFnOrder(|a: &u32, b: &u32| {
            calls += 1;
            if calls == 500 { Err(()) } else { Ok(a.cmp(b)) }
        });
        let mut data: Vec<u32> = (0..256).rev().collect();
        let mut ctx = SortContext::default();
        assert_eq!(sort(&mut data, &DEFAULT_PARAMS, &mut ctx, &mut cmp), Err(()));
        let mut seen = data.clone();
        seen.sort_unstable();
        assert!(seen.iter().copied().eq(0..256));
    }

    #[test]
    fn stable_for_every_length_and_threshold() {
        let mut rng = StdRng::seed_from_u64(0x57AB_1E01);
        let mut ctx = SortContext::default();
        for threshold in [0_usize, 1, 2, 3, 5, 32, 1000] {
            let params = SortParams {
                min_run_threshold: threshold,
            };
            for size in 0..700 {
                let data: Vec<(u8, usize)> =
                    (0..size).map(|i| (rng.random_range(0..7), i)).collect();

                let mut expected = data.clone();
                expected.sort_by_key(|p| p.0);

                let mut actual = data;
                sort(&mut actual, &params, &mut ctx, &mut KeyOrder(|p: &(u8, usize)| p.0)).unwrap();
                assert_eq!(actual, expected, "threshold={threshold} input_len={size}");
            }
        }
    }
}
