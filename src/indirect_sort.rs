//! Sorting that reports the permutation it applied.

#![cfg(feature = "alloc")]

use crate::{
	merge_sort::merge_sort,
	permutation::{Tracked, identity},
};
use ndarray::{Array1, ArrayViewMut1};

#[cfg(feature = "rayon")]
use crate::par::merge_sort::par_merge_sort;

/// Sorts `v` in place and returns the original position of each element in its new order.
#[inline]
pub fn indirect_sort<T, F>(mut v: ArrayViewMut1<'_, T>, mut is_less: F) -> Array1<usize>
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	let mut index = identity(len);
	merge_sort(Tracked::new(v.view_mut(), index.view_mut(), 0..len), &mut is_less);
	index
}

/// Parallel variant of [`indirect_sort`].
#[cfg(feature = "rayon")]
#[inline]
pub fn par_indirect_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: F) -> Array1<usize>
where
	T: Send,
	F: Fn(&T, &T) -> bool + Sync,
{
	let len = v.len();
	let mut index = identity(len);
	par_merge_sort(Tracked::new(v.view_mut(), index.view_mut(), 0..len), &is_less);
	index
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::indirect_sort;
	use crate::{Order, permutation::sort_by_index};
	use ndarray::{Array1, arr1, s};
	use quickcheck_macros::quickcheck;

	#[test]
	fn empty() {
		let mut array = Array1::<f64>::zeros(0);
		assert_eq!(indirect_sort(array.view_mut(), f64::lt).len(), 0);
	}

	#[test]
	fn reversed_by_permutation() {
		let mut sorted = arr1(&[9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 0.0]);
		let original = sorted.clone();
		let permutation = indirect_sort(sorted.view_mut(), f64::lt);
		assert_eq!(permutation, arr1(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0]));

		let other = arr1(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
		assert_eq!(sort_by_index(other.view(), permutation.view()), original);
	}

	#[test]
	fn borrowed_subview() {
		let mut array = arr1(&[5, 50, 4, 40, 3, 30, 3, 20, 1, 10]);
		let permutation = indirect_sort(array.slice_mut(s![..;2]), |a: &i32, b: &i32| a < b);
		assert_eq!(permutation, arr1(&[4, 2, 3, 1, 0]));
		assert_eq!(array, arr1(&[1, 50, 3, 40, 3, 30, 4, 20, 5, 10]));
	}

	#[test]
	fn nan_keeps_valid_permutation() {
		let mut array = arr1(&[2.0, f64::NAN, 1.0, 0.0, f64::NAN, 3.0, 0.5, 2.5, f64::NAN, 1.5]);
		let original = array.clone();
		let permutation = indirect_sort(array.view_mut(), f64::lt);
		let mut seen = vec![false; original.len()];
		for &i in &permutation {
			assert!(!seen[i]);
			seen[i] = true;
		}
		for (i, &j) in permutation.iter().enumerate() {
			assert_eq!(array[i].to_bits(), original[j].to_bits());
		}
	}

	#[test]
	fn descending() {
		let mut array = arr1(&[0.5, 0.6, 0.7, 0.8, 0.9, 0.0, 0.1, 0.2, 0.3, 0.4]);
		let permutation = indirect_sort(array.view_mut(), |a: &f64, b: &f64| {
			Order::Descending.is_less(a, b)
		});
		assert_eq!(
			array,
			arr1(&[0.9, 0.8, 0.7, 0.6, 0.5, 0.4, 0.3, 0.2, 0.1, 0.0])
		);
		assert_eq!(permutation, arr1(&[4, 3, 2, 1, 0, 9, 8, 7, 6, 5]));
	}

	#[quickcheck]
	fn valid_permutation(xs: Vec<i16>, ascending: bool) {
		let order = Order::from(ascending);
		let original = Array1::from_vec(xs);
		let mut sorted = original.clone();
		let permutation = indirect_sort(sorted.view_mut(), |a: &i16, b: &i16| order.is_less(a, b));

		let mut seen = vec![false; original.len()];
		for &i in &permutation {
			assert!(!seen[i]);
			seen[i] = true;
		}
		assert_eq!(sort_by_index(original.view(), permutation.view()), sorted);

		// Sorting again is idempotent.
		let again = indirect_sort(sorted.view_mut(), |a: &i16, b: &i16| order.is_less(a, b));
		assert_eq!(again, (0..original.len()).collect::<Array1<usize>>());
	}
}
