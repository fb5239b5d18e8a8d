/// Direction of the natural order of the element type.
///
/// Every sorting method takes an `Order` and derives its single comparison from
/// [`is_less`](Order::is_less), so ascending and descending sorts share one code path.
///
/// ```
/// use ndarray_argsort::Order;
///
/// assert!(Order::Ascending.is_less(&1, &2));
/// assert!(Order::Descending.is_less(&2, &1));
/// assert_eq!(Order::from(false), Order::Descending);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
	/// Smallest element first.
	#[default]
	Ascending,
	/// Largest element first.
	Descending,
}

impl Order {
	/// Returns `true` if `a` has to be placed strictly before `b`.
	///
	/// Equal or incomparable elements (e.g., `NaN`) are never strictly before each other.
	#[inline]
	#[must_use]
	pub fn is_less<T>(self, a: &T, b: &T) -> bool
	where
		T: PartialOrd + ?Sized,
	{
		match self {
			Self::Ascending => a < b,
			Self::Descending => b < a,
		}
	}

	/// Returns the opposite direction.
	#[inline]
	#[must_use]
	pub fn reverse(self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}
}

impl From<bool> for Order {
	/// Maps `true` to [`Ascending`](Order::Ascending) and `false` to
	/// [`Descending`](Order::Descending).
	#[inline]
	fn from(ascending: bool) -> Self {
		if ascending {
			Self::Ascending
		} else {
			Self::Descending
		}
	}
}
