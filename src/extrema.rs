//! Linear scans for extreme values.

use ndarray::ArrayView1;

/// Returns the position and value of the first element that no other element is strictly greater
/// than, or `None` if `v` is empty.
pub fn find_max<'a, T>(v: ArrayView1<'a, T>) -> Option<(usize, &'a T)>
where
	T: PartialOrd,
{
	find_by(v, |a, b| a > b)
}

/// Returns the position and value of the first element that no other element is strictly less
/// than, or `None` if `v` is empty.
pub fn find_min<'a, T>(v: ArrayView1<'a, T>) -> Option<(usize, &'a T)>
where
	T: PartialOrd,
{
	find_by(v, |a, b| a < b)
}

/// Keeps the first element and replaces it only if `replaces(candidate, current)` holds.
fn find_by<'a, T, F>(v: ArrayView1<'a, T>, mut replaces: F) -> Option<(usize, &'a T)>
where
	F: FnMut(&T, &T) -> bool,
{
	let mut iter = v.into_iter().enumerate();
	let first = iter.next()?;
	Some(iter.fold(first, |best, next| {
		if replaces(next.1, best.1) { next } else { best }
	}))
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{find_max, find_min};
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	#[test]
	fn empty() {
		let array = Array1::<i32>::zeros(0);
		assert_eq!(find_max(array.view()), None);
		assert_eq!(find_min(array.view()), None);
	}

	#[test]
	fn ints() {
		let array = arr1(&[5, 6, 7, 8, 9, 0, 1, 2, 3, 4]);
		assert_eq!(find_max(array.view()), Some((4, &9)));
		assert_eq!(find_min(array.view()), Some((5, &0)));
	}

	#[test]
	fn floats() {
		let array = arr1(&[0.5, 0.6, 0.7, 0.8, 0.9, 0.0, 0.1, 0.2, 0.3, 0.4]);
		assert_eq!(find_max(array.view()), Some((4, &0.9)));
		assert_eq!(find_min(array.view()), Some((5, &0.0)));
	}

	#[test]
	fn first_occurrence() {
		let array = arr1(&[1, 3, 0, 3, 0]);
		assert_eq!(find_max(array.view()), Some((1, &3)));
		assert_eq!(find_min(array.view()), Some((2, &0)));
	}

	#[quickcheck]
	fn matches_iterator(xs: Vec<i32>) {
		let array = Array1::from_vec(xs.clone());
		let max = xs.iter().copied().max();
		let min = xs.iter().copied().min();
		assert_eq!(find_max(array.view()).map(|(_, &x)| x), max);
		assert_eq!(find_min(array.view()).map(|(_, &x)| x), min);
		if let Some((i, &x)) = find_max(array.view()) {
			assert_eq!(xs.iter().position(|&y| y == x), Some(i));
		}
		if let Some((i, &x)) = find_min(array.view()) {
			assert_eq!(xs.iter().position(|&y| y == x), Some(i));
		}
	}
}
