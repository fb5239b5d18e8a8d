//! Stable, in-place, index-tracking sorting ([argsort]) and small numeric helpers for
//! one-dimensional [`ndarray`] arrays and (sub)views with arbitrary memory layout (e.g.,
//! non-contiguous).
//!
//! # Example
//!
//! ```
//! use ndarray_argsort::{ndarray::{arr1, arr2}, Order, Sequence1Ext};
//!
//! // Scores in column 0, labels in column 1.
//! let mut v = arr2(&[[3, 30],
//!                    [1, 10],
//!                    [2, 20],
//!                    [1, 11]]);
//!
//! // Sort the non-contiguous column 0 in place and get the sorting permutation.
//! let permutation = v.column_mut(0).argsort(Order::Ascending);
//! assert_eq!(permutation, arr1(&[1, 3, 2, 0]));
//!
//! // Reorder column 1 by the same permutation.
//! assert_eq!(v.column(1).sort_by_index(&permutation), arr1(&[10, 11, 20, 30]));
//! ```
//!
//! # Current Implementation
//!
//! The sort is a recursive merge sort that does not allocate a buffer for the data. Ranges of up
//! to [`SORT_THRESHOLD`] elements are sorted by insertion sort, longer ones are split in halves,
//! sorted, and merged in place by rotating blocks with pairwise swaps. Every swap is applied to the
//! index array at the same positions, so the index array ends up holding the sorting permutation.
//! Equal elements are never swapped past each other, hence the sort is stable.
//!
//! | Resource | Complexity | Sorting (stable)     |
//! |----------|------------|----------------------|
//! | Time     | Best       | *O*(*n*)             |
//! | Time     | Worst      | *O*(*n*^2)           |
//! | Space    | Worst      | *O*(log *n*)         |
//!
//! The ordering is the natural one of the element type (see [`PartialOrd`]), reversed by
//! [`Order::Descending`]. Incomparable elements (e.g., `NaN`) never compare less, so they are not
//! moved by a comparison and the order of a sequence containing them is unspecified.
//!
//! [argsort]: https://numpy.org/doc/stable/reference/generated/numpy.argsort.html
//!
//! # Features
//!
//!   * `alloc` for the allocating `argsort`/`sort_by_index`/`counts_of`/`widen`/`sequence`.
//!     Enabled by `std`.
//!   * `std` for `round_to`. Enabled by `default` or `rayon`.
//!   * `stacker` to grow the stack on demand while recursing. Enabled by `default`.
//!   * `rayon` for parallel `par_argsort`/`par_sort_with_index`.
//!   * `rand` for `pick_random_index`.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod count;
mod error;
mod extrema;
mod indirect_sort;
mod insertion_sort;
mod merge_sort;
mod numeric;
mod order;
mod permutation;
mod random;

#[cfg(feature = "rayon")]
mod par;
#[cfg(feature = "rayon")]
use crate::{indirect_sort::par_indirect_sort, par::merge_sort::par_merge_sort};

#[cfg(feature = "alloc")]
use crate::{count::counts_of, indirect_sort::indirect_sort, permutation::sort_by_index};

use crate::{
	count::{count_of, max_count_of},
	extrema::{find_max, find_min},
	insertion_sort::insertion_sort,
	merge_sort::merge_sort,
	permutation::{Tracked, swap},
};
use core::ops::Range;
use ndarray::{ArrayBase, Data, DataMut, Ix1};

#[cfg(feature = "alloc")]
use ndarray::Array1;

pub use crate::{error::CountError, order::Order};
pub use ndarray;

#[cfg(feature = "alloc")]
pub use crate::numeric::sequence;
#[cfg(feature = "rand")]
pub use crate::random::pick_random_index;
#[cfg(feature = "std")]
pub use crate::numeric::round_to;

/// Ranges of up to this length are sorted by insertion sort instead of being split further.
pub const SORT_THRESHOLD: usize = 7;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing index-tracking sorting, permutation,
/// extrema, and counting methods.
pub trait Sequence1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Sorts the array in place and returns the sorting permutation.
	///
	/// Element `i` of the returned permutation is the original position of the element now at
	/// position `i`. This sort is stable (i.e., does not reorder equal elements) and does not
	/// allocate auxiliary memory for the array itself, only the permutation is allocated.
	///
	/// # Current Implementation
	///
	/// See [`sort_with_index`](Sequence1Ext::sort_with_index), applied to the full range with an
	/// identity permutation.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::arr1, Order, Sequence1Ext};
	///
	/// let mut v = arr1(&[0.5, 0.6, 0.7, 0.8, 0.9, 0.0, 0.1, 0.2, 0.3, 0.4]);
	///
	/// let permutation = v.argsort(Order::Descending);
	/// assert_eq!(v, arr1(&[0.9, 0.8, 0.7, 0.6, 0.5, 0.4, 0.3, 0.2, 0.1, 0.0]));
	/// assert_eq!(permutation, arr1(&[4, 3, 2, 1, 0, 9, 8, 7, 6, 5]));
	///
	/// // Equal elements keep their order.
	/// let mut v = arr1(&[3, 1, 2, 1]);
	/// assert_eq!(v.argsort(Order::Ascending), arr1(&[1, 3, 2, 0]));
	/// let mut v = arr1(&[3, 1, 2, 1]);
	/// assert_eq!(v.argsort(Order::Descending), arr1(&[0, 2, 1, 3]));
	/// ```
	#[cfg(feature = "alloc")]
	fn argsort(&mut self, order: Order) -> Array1<usize>
	where
		A: PartialOrd,
		S: DataMut;
	/// Sorts the array in parallel and returns the sorting permutation.
	///
	/// Same result as [`argsort`](Sequence1Ext::argsort), but both halves of long ranges are
	/// sorted in parallel before they are merged.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::Array1, Order, Sequence1Ext};
	///
	/// let mut v = (0..10_000u32).map(|x| x % 7).collect::<Array1<_>>();
	/// let mut w = v.clone();
	///
	/// assert_eq!(v.par_argsort(Order::Ascending), w.argsort(Order::Ascending));
	/// assert_eq!(v, w);
	/// ```
	#[cfg(feature = "rayon")]
	fn par_argsort(&mut self, order: Order) -> Array1<usize>
	where
		A: PartialOrd + Send,
		S: DataMut;

	/// Sorts `range` of the array in place, applying every movement to `index` as well.
	///
	/// Only positions within `range` of both arrays are touched. Starting from an identity
	/// `index`, it ends up holding the sorting permutation, see `argsort`. This sort is stable
	/// (i.e., does not reorder equal elements) and in-place (i.e., does not allocate).
	///
	/// # Current Implementation
	///
	/// Ranges of up to [`SORT_THRESHOLD`] elements are sorted by
	/// [`insertion_sort_with_index`](Sequence1Ext::insertion_sort_with_index). Longer ranges are
	/// divided at the midpoint (the left half getting the extra element of odd lengths), both
	/// halves are sorted recursively, and merged in place. The merge returns immediately if the
	/// halves are already in order, otherwise it rotates each run of right elements that belong
	/// in front of the current left element into place by pairwise swaps.
	///
	/// # Panics
	///
	/// Panics if `index` and the array differ in length or if `range` is out of bounds.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::arr1, Order, Sequence1Ext};
	///
	/// let mut v = arr1(&[9, 4, 7, 1, 0]);
	/// let mut index = arr1(&[0, 1, 2, 3, 4]);
	///
	/// v.sort_with_index(&mut index, 1..4, Order::Ascending);
	/// assert_eq!(v, arr1(&[9, 1, 4, 7, 0]));
	/// assert_eq!(index, arr1(&[0, 3, 1, 2, 4]));
	/// ```
	fn sort_with_index<S2>(
		&mut self,
		index: &mut ArrayBase<S2, Ix1>,
		range: Range<usize>,
		order: Order,
	) where
		A: PartialOrd,
		S: DataMut,
		S2: DataMut<Elem = usize>;
	/// Sorts `range` of the array in parallel, applying every movement to `index` as well.
	///
	/// Same result as [`sort_with_index`](Sequence1Ext::sort_with_index).
	///
	/// # Panics
	///
	/// Panics if `index` and the array differ in length or if `range` is out of bounds.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::arr1, Order, Sequence1Ext};
	///
	/// let mut v = arr1(&[2.5, 0.5, 1.5]);
	/// let mut index = arr1(&[0, 1, 2]);
	///
	/// v.par_sort_with_index(&mut index, 0..3, Order::Descending);
	/// assert_eq!(v, arr1(&[2.5, 1.5, 0.5]));
	/// assert_eq!(index, arr1(&[0, 2, 1]));
	/// ```
	#[cfg(feature = "rayon")]
	fn par_sort_with_index<S2>(
		&mut self,
		index: &mut ArrayBase<S2, Ix1>,
		range: Range<usize>,
		order: Order,
	) where
		A: PartialOrd + Send,
		S: DataMut,
		S2: DataMut<Elem = usize>;
	/// Sorts `range` of the array using insertion sort, applying every movement to `index` as
	/// well.
	///
	/// This sort is stable (i.e., does not reorder equal elements), in-place (i.e., does not
	/// allocate), and *O*(*n*^2) worst-case, so it is meant for short ranges.
	///
	/// # Panics
	///
	/// Panics if `index` and the array differ in length or if `range` is out of bounds.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::arr1, Order, Sequence1Ext};
	///
	/// let mut v = arr1(&[1.0, 1.0, 2.0, 2.0, 3.0, 1.0, 2.0]);
	/// let mut index = arr1(&[0, 1, 2, 3, 4, 5, 6]);
	///
	/// v.insertion_sort_with_index(&mut index, 0..7, Order::Ascending);
	/// assert_eq!(v, arr1(&[1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0]));
	/// assert_eq!(index, arr1(&[0, 1, 5, 2, 3, 6, 4]));
	/// ```
	fn insertion_sort_with_index<S2>(
		&mut self,
		index: &mut ArrayBase<S2, Ix1>,
		range: Range<usize>,
		order: Order,
	) where
		A: PartialOrd,
		S: DataMut,
		S2: DataMut<Elem = usize>;

	/// Returns a new array with element `self[permutation[i]]` at position `i`.
	///
	/// The length of the result is the length of `permutation`. Together with
	/// [`argsort`](Sequence1Ext::argsort), this reorders a parallel array by the order of
	/// another one.
	///
	/// # Panics
	///
	/// Panics if an entry of `permutation` is out of bounds.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::arr1, Order, Sequence1Ext};
	///
	/// let mut scores = arr1(&[9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 0.0]);
	/// let original = scores.clone();
	/// let permutation = scores.argsort(Order::Ascending);
	///
	/// let labels = arr1(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
	/// assert_eq!(labels.sort_by_index(&permutation), original);
	/// ```
	#[cfg(feature = "alloc")]
	#[must_use]
	fn sort_by_index<S2>(&self, permutation: &ArrayBase<S2, Ix1>) -> Array1<A>
	where
		A: Clone,
		S2: Data<Elem = usize>;
	/// Swaps two elements in the array, doing nothing if `a == b` or if either position is out
	/// of bounds.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::arr1, Sequence1Ext};
	///
	/// let mut v = arr1(&[1, 2, 3]);
	///
	/// v.checked_swap(0, 2);
	/// v.checked_swap(1, 3);
	/// assert_eq!(v, arr1(&[3, 2, 1]));
	/// ```
	fn checked_swap(&mut self, a: usize, b: usize)
	where
		S: DataMut;

	/// Returns the position and a reference of the first maximum, or `None` if the array is
	/// empty.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::{arr1, s}, Sequence1Ext};
	///
	/// let v = arr1(&[5, 6, 9, 8, 9, 0]);
	///
	/// assert_eq!(v.find_max(), Some((2, &9)));
	/// assert_eq!(v.slice(s![3..3]).find_max(), None);
	/// ```
	#[must_use]
	fn find_max(&self) -> Option<(usize, &A)>
	where
		A: PartialOrd;
	/// Returns the position and a reference of the first minimum, or `None` if the array is
	/// empty.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::arr1, Sequence1Ext};
	///
	/// let v = arr1(&[0.5, 0.6, 0.0, 0.1, 0.0]);
	///
	/// assert_eq!(v.find_min(), Some((2, &0.0)));
	/// ```
	#[must_use]
	fn find_min(&self) -> Option<(usize, &A)>
	where
		A: PartialOrd;

	/// Returns how often `class` occurs in the array.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::arr1, Sequence1Ext};
	///
	/// let v = arr1(&[1, 1, 2, 2, 3, 1, 2]);
	///
	/// assert_eq!(v.count_of(&1), 3);
	/// assert_eq!(v.count_of(&4), 0);
	/// ```
	#[must_use]
	fn count_of(&self, class: &A) -> usize
	where
		A: PartialEq;
	/// Returns how often each of `classes` occurs in the array, in the order of `classes`.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::arr1, Sequence1Ext};
	///
	/// let v = arr1(&[1.0, 1.0, 2.0, 2.0, 3.0, 1.0, 2.0]);
	///
	/// assert_eq!(v.counts_of(&arr1(&[1.0, 2.0, 3.0])), arr1(&[3, 3, 1]));
	/// ```
	#[cfg(feature = "alloc")]
	#[must_use]
	fn counts_of<S2>(&self, classes: &ArrayBase<S2, Ix1>) -> Array1<usize>
	where
		A: PartialEq,
		S2: Data<Elem = A>;
	/// Returns the class of `classes` occurring most often in the array.
	///
	/// On ties, the class listed first in `classes` is returned.
	///
	/// # Errors
	///
	/// Returns [`CountError::NoClasses`] if `classes` is empty and [`CountError::NoData`] if the
	/// array is empty.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::arr1, CountError, Sequence1Ext};
	///
	/// let v = arr1(&[0, 1, 0, 1, 0]);
	///
	/// assert_eq!(v.max_count_of(&arr1(&[1, 0])), Ok(&0));
	/// assert_eq!(v.max_count_of(&arr1(&[])), Err(CountError::NoClasses));
	/// ```
	fn max_count_of<'a, S2>(&self, classes: &'a ArrayBase<S2, Ix1>) -> Result<&'a A, CountError>
	where
		A: PartialEq,
		S2: Data<Elem = A>;
	/// Returns `true` if the array contains an element with the given value.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::arr1, Sequence1Ext};
	///
	/// let v = arr1(&[10, 40, 30]);
	/// assert!(v.contains(&30));
	/// assert!(!v.contains(&50));
	/// ```
	#[must_use]
	fn contains(&self, x: &A) -> bool
	where
		A: PartialEq;

	/// Returns a new array with every element converted losslessly into `B`.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::arr1, Sequence1Ext};
	///
	/// let v = arr1(&[1i32, -2, 3]);
	///
	/// assert_eq!(v.widen::<i64>(), arr1(&[1i64, -2, 3]));
	/// assert_eq!(arr1(&[0.5f32]).widen::<f64>(), arr1(&[0.5f64]));
	/// ```
	#[cfg(feature = "alloc")]
	#[must_use]
	fn widen<B>(&self) -> Array1<B>
	where
		A: Clone,
		B: From<A>;
}

impl<A, S> Sequence1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[cfg(feature = "alloc")]
	#[inline]
	fn argsort(&mut self, order: Order) -> Array1<usize>
	where
		A: PartialOrd,
		S: DataMut,
	{
		indirect_sort(self.view_mut(), |a: &A, b: &A| order.is_less(a, b))
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_argsort(&mut self, order: Order) -> Array1<usize>
	where
		A: PartialOrd + Send,
		S: DataMut,
	{
		par_indirect_sort(self.view_mut(), move |a: &A, b: &A| order.is_less(a, b))
	}

	#[inline]
	fn sort_with_index<S2>(
		&mut self,
		index: &mut ArrayBase<S2, Ix1>,
		range: Range<usize>,
		order: Order,
	) where
		A: PartialOrd,
		S: DataMut,
		S2: DataMut<Elem = usize>,
	{
		merge_sort(
			Tracked::new(self.view_mut(), index.view_mut(), range),
			&mut |a: &A, b: &A| order.is_less(a, b),
		);
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_sort_with_index<S2>(
		&mut self,
		index: &mut ArrayBase<S2, Ix1>,
		range: Range<usize>,
		order: Order,
	) where
		A: PartialOrd + Send,
		S: DataMut,
		S2: DataMut<Elem = usize>,
	{
		par_merge_sort(
			Tracked::new(self.view_mut(), index.view_mut(), range),
			&move |a: &A, b: &A| order.is_less(a, b),
		);
	}
	#[inline]
	fn insertion_sort_with_index<S2>(
		&mut self,
		index: &mut ArrayBase<S2, Ix1>,
		range: Range<usize>,
		order: Order,
	) where
		A: PartialOrd,
		S: DataMut,
		S2: DataMut<Elem = usize>,
	{
		insertion_sort(
			Tracked::new(self.view_mut(), index.view_mut(), range),
			&mut |a: &A, b: &A| order.is_less(a, b),
		);
	}

	#[cfg(feature = "alloc")]
	#[inline]
	fn sort_by_index<S2>(&self, permutation: &ArrayBase<S2, Ix1>) -> Array1<A>
	where
		A: Clone,
		S2: Data<Elem = usize>,
	{
		sort_by_index(self.view(), permutation.view())
	}
	#[inline]
	fn checked_swap(&mut self, a: usize, b: usize)
	where
		S: DataMut,
	{
		swap(&mut self.view_mut(), a, b);
	}

	#[inline]
	fn find_max(&self) -> Option<(usize, &A)>
	where
		A: PartialOrd,
	{
		find_max(self.view())
	}
	#[inline]
	fn find_min(&self) -> Option<(usize, &A)>
	where
		A: PartialOrd,
	{
		find_min(self.view())
	}

	#[inline]
	fn count_of(&self, class: &A) -> usize
	where
		A: PartialEq,
	{
		count_of(self.view(), class)
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn counts_of<S2>(&self, classes: &ArrayBase<S2, Ix1>) -> Array1<usize>
	where
		A: PartialEq,
		S2: Data<Elem = A>,
	{
		counts_of(self.view(), classes.view())
	}
	#[inline]
	fn max_count_of<'a, S2>(&self, classes: &'a ArrayBase<S2, Ix1>) -> Result<&'a A, CountError>
	where
		A: PartialEq,
		S2: Data<Elem = A>,
	{
		max_count_of(self.view(), classes.view())
	}
	#[inline]
	fn contains(&self, x: &A) -> bool
	where
		A: PartialEq,
	{
		self.iter().any(|a| a == x)
	}

	#[cfg(feature = "alloc")]
	#[inline]
	fn widen<B>(&self) -> Array1<B>
	where
		A: Clone,
		B: From<A>,
	{
		self.iter().cloned().map(B::from).collect()
	}
}
