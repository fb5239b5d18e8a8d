//! Parallel variant of the in-place, index-tracking merge sort.

use crate::{
	merge_sort::{maybe_grow, merge, merge_sort},
	permutation::Tracked,
};

/// Sorts `v` like [`merge_sort`] but sorts both halves of long ranges in parallel.
///
/// The merge of two halves waits for both of them, so the result equals the sequential one.
pub fn par_merge_sort<T, F>(v: Tracked<'_, T>, is_less: &F)
where
	T: Send,
	F: Fn(&T, &T) -> bool + Sync,
{
	recurse(v, is_less);
}

fn recurse<T, F>(mut v: Tracked<'_, T>, is_less: &F)
where
	T: Send,
	F: Fn(&T, &T) -> bool + Sync,
{
	// Ranges up to this length are sorted sequentially. This number is as small as possible but so
	// that the overhead of Rayon's task scheduling is still negligible.
	const MAX_SEQUENTIAL: usize = 2000;

	let len = v.len();
	if len <= MAX_SEQUENTIAL {
		merge_sort(v, &mut |a: &T, b: &T| is_less(a, b));
		return;
	}

	let mid = len.div_ceil(2);
	let (left, right) = v.reborrow().split_at(mid);
	rayon::join(
		|| maybe_grow(|| recurse(left, is_less)),
		|| maybe_grow(|| recurse(right, is_less)),
	);

	merge(v, mid, &mut |a: &T, b: &T| is_less(a, b));
}

#[cfg(test)]
mod test {
	use super::par_merge_sort;
	use crate::{Order, merge_sort::merge_sort, permutation::Tracked};
	use ndarray::Array1;
	use quickcheck_macros::quickcheck;
	use rand::Rng;

	fn sort(array: &mut Array1<u32>, order: Order, parallel: bool) -> Array1<usize> {
		let len = array.len();
		let mut index = (0..len).collect::<Array1<usize>>();
		let v = Tracked::new(array.view_mut(), index.view_mut(), 0..len);
		if parallel {
			par_merge_sort(v, &|a: &u32, b: &u32| order.is_less(a, b));
		} else {
			merge_sort(v, &mut |a: &u32, b: &u32| order.is_less(a, b));
		}
		index
	}

	#[cfg_attr(miri, ignore)]
	#[quickcheck]
	fn same_as_sequential(xs: Vec<u32>, ascending: bool) {
		let order = Order::from(ascending);
		let mut sequential = Array1::from_vec(xs.clone());
		let mut parallel = Array1::from_vec(xs);
		assert_eq!(
			sort(&mut sequential, order, false),
			sort(&mut parallel, order, true)
		);
		assert_eq!(sequential, parallel);
	}

	#[cfg_attr(miri, ignore)]
	#[test]
	fn long_random() {
		let rng = &mut rand::rng();

		for len in [2001, 4096, 10_000] {
			let limit: u32 = rng.random_range(1..1000);
			let xs = (0..len)
				.map(|_| rng.random_range(0..limit))
				.collect::<Vec<u32>>();
			for order in [Order::Ascending, Order::Descending] {
				let mut sequential = Array1::from_vec(xs.clone());
				let mut parallel = Array1::from_vec(xs.clone());
				let index = sort(&mut parallel, order, true);
				assert_eq!(sort(&mut sequential, order, false), index);
				for i in 1..len {
					assert!(!order.is_less(&parallel[i], &parallel[i - 1]));
					if parallel[i] == parallel[i - 1] {
						assert!(index[i - 1] < index[i]);
					}
				}
			}
		}
	}
}
