//! Error types.

use core::fmt;

/// Errors of [`max_count_of`](crate::Sequence1Ext::max_count_of).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountError {
	/// No classes were given to count.
	NoClasses,
	/// The array to count in is empty.
	NoData,
}

impl fmt::Display for CountError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CountError::NoClasses => write!(f, "no classes to count"),
			CountError::NoData => write!(f, "no data to count classes in"),
		}
	}
}

impl core::error::Error for CountError {}
