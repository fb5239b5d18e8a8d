//! Random index sampling.

#![cfg(feature = "rand")]

use rand::Rng;

/// Picks a uniformly random index in `0..max`.
///
/// Indices listed in `excluded` are never picked. Unless `allow_duplicate` is set, indices listed
/// in `picked` are not picked again either. Returns `None` if no index is left to pick from.
///
/// ```
/// use ndarray_argsort::pick_random_index;
///
/// let rng = &mut rand::rng();
/// let picked = [0, 1, 2, 3, 4, 5, 7];
///
/// assert_eq!(pick_random_index(rng, 7, false, &picked, &[]), Some(6));
/// assert_eq!(pick_random_index(rng, 9, false, &picked, &[8]), Some(6));
/// assert_eq!(pick_random_index(rng, 6, false, &picked, &[]), None);
/// ```
pub fn pick_random_index<R>(
	rng: &mut R,
	max: usize,
	allow_duplicate: bool,
	picked: &[usize],
	excluded: &[usize],
) -> Option<usize>
where
	R: Rng,
{
	let admissible =
		|index: &usize| !excluded.contains(index) && (allow_duplicate || !picked.contains(index));

	let count = (0..max).filter(admissible).count();
	if count == 0 {
		return None;
	}
	let nth = rng.random_range(0..count);
	(0..max).filter(admissible).nth(nth)
}
