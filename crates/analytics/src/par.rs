//! Order-preserving per-item mapping.
//!
//! With the `parallel` feature the map fans out over rayon's pool; without it
//! the map runs on the calling thread. Output order always matches input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "parallel")]
pub(crate) fn map_items<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    items.par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn map_items<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    items.iter().map(f).collect()
}

#[cfg(feature = "parallel")]
pub(crate) fn map_pairs<A, B, U, F>(left: &[A], right: &[B], f: F) -> Vec<U>
where
    A: Sync,
    B: Sync,
    U: Send,
    F: Fn(&A, &B) -> U + Sync + Send,
{
    left.par_iter()
        .zip(right.par_iter())
        .map(|(a, b)| f(a, b))
        .collect()
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn map_pairs<A, B, U, F>(left: &[A], right: &[B], f: F) -> Vec<U>
where
    F: Fn(&A, &B) -> U,
{
    left.iter().zip(right.iter()).map(|(a, b)| f(a, b)).collect()
}
