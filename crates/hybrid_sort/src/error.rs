use std::convert::Infallible;

use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum SortError {
    /// A comparison had no answer, e.g. a NaN under `PartialOrd`.
    #[error("elements are not comparable under the supplied ordering")]
    Incomparable,
}

#[inline]
pub(crate) fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
