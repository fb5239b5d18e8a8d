//! Parallel sorting on the rayon thread pool.

pub mod merge_sort;
