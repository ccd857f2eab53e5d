use std::cmp::Ordering;
use std::convert::Infallible;

use crate::SortError;

/// A total order over `T`, injected into every sort and merge.
///
/// Implementations must be consistent for the duration of one call: the same
/// pair always compares the same way and no comparison has observable side
/// effects. This is not checked. An inconsistent order still terminates but
/// leaves the output order unspecified.
pub trait Comparator<T: ?Sized> {
    type Error;

    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, Self::Error>;

    /// `a` precedes or equals `b`.
    #[inline]
    fn precedes_or_equal(&mut self, a: &T, b: &T) -> Result<bool, Self::Error> {
        Ok(self.compare(a, b)? != Ordering::Greater)
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for &mut C {
    type Error = C::Error;

    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, Self::Error> {
        (**self).compare(a, b)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    type Error = Infallible;

    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, Infallible> {
        Ok(a.cmp(b))
    }
}

/// `PartialOrd` comparison that fails on incomparable pairs.
#[derive(Clone, Copy, Debug, Default)]
pub struct PartialOrder;

impl<T: PartialOrd + ?Sized> Comparator<T> for PartialOrder {
    type Error = SortError;

    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, SortError> {
        a.partial_cmp(b).ok_or(SortError::Incomparable)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FnOrder<F>(pub F);

impl<T: ?Sized, F> Comparator<T> for FnOrder<F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    type Error = Infallible;

    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, Infallible> {
        Ok((self.0)(a, b))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TryFnOrder<F>(pub F);

impl<T: ?Sized, E, F> Comparator<T> for TryFnOrder<F>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    type Error = E;

    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, E> {
        (self.0)(a, b)
    }
}

/// Orders elements by an extracted key.
#[derive(Clone, Copy, Debug)]
pub struct KeyOrder<F>(pub F);

impl<T: ?Sized, K: Ord, F> Comparator<T> for KeyOrder<F>
where
    F: FnMut(&T) -> K,
{
    type Error = Infallible;

    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, Infallible> {
        Ok((self.0)(a).cmp(&(self.0)(b)))
    }
}

/// Inverts the wrapped order. Equal elements stay equal, so stable sorts
/// keep their input order under it.
#[derive(Clone, Copy, Debug)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    type Error = C::Error;

    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, C::Error> {
        self.0.compare(b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_order_matches_ord() {
        let mut cmp = NaturalOrder;
        assert_eq!(cmp.compare(&1, &2), Ok(Ordering::Less));
        assert_eq!(cmp.compare(&2, &2), Ok(Ordering::Equal));
        assert_eq!(cmp.precedes_or_equal(&2, &2), Ok(true));
        assert_eq!(cmp.precedes_or_equal(&3, &2), Ok(false));
    }

    #[test]
    fn partial_order_rejects_nan() {
        let mut cmp = PartialOrder;
        assert_eq!(cmp.compare(&1.0_f64, &2.0), Ok(Ordering::Less));
        assert_eq!(cmp.compare(&f64::NAN, &2.0), Err(SortError::Incomparable));
    }

    #[test]
    fn reversed_swaps_operands() {
        let mut cmp = Reversed(NaturalOrder);
        assert_eq!(cmp.compare(&1, &2), Ok(Ordering::Greater));
        assert_eq!(cmp.compare(&2, &2), Ok(Ordering::Equal));
    }

    #[test]
    fn key_order_compares_keys() {
        let mut cmp = KeyOrder(|s: &&str| s.len());
        assert_eq!(cmp.compare(&"abc", &"xy"), Ok(Ordering::Greater));
        assert_eq!(cmp.compare(&"ab", &"xy"), Ok(Ordering::Equal));
    }

    #[test]
    fn fn_orders_forward_results() {
        let mut plain = FnOrder(|a: &i32, b: &i32| b.cmp(a));
        assert_eq!(plain.compare(&1, &2), Ok(Ordering::Greater));

        let mut fallible = TryFnOrder(|a: &i32, b: &i32| {
            if *a < 0 || *b < 0 {
                Err("negative")
            } else {
                Ok(a.cmp(b))
            }
        });
        assert_eq!(fallible.compare(&1, &2), Ok(Ordering::Less));
        assert_eq!(fallible.compare(&-1, &2), Err("negative"));
    }
}
