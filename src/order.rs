//! Orders deciding which element sits closer to the root of a heap.

/// Total order parameterizing all heap operations.
///
/// The order must be total: irreflexive, transitive and with ties forming an equivalence. If it is
/// not, the resulting arrangement is unspecified but memory-safe.
///
/// Any closure `FnMut(&T, &T) -> bool` implementing the [`outranks`](Order::outranks) contract is
/// an order.
///
/// ```
/// use ndarray_heap::Heap;
///
/// // Shortest word first.
/// let mut heap = Heap::with_order(|a: &&str, b: &&str| a.len() < b.len());
/// heap.extend(["heap", "a", "sift"]);
/// assert_eq!(heap.remove(), Some("a"));
/// ```
pub trait Order<T: ?Sized> {
	/// Returns `true` if `a` strictly outranks `b`, i.e., `a` must sit closer to the root than `b`.
	///
	/// Returns `false` otherwise, including ties.
	fn outranks(&mut self, a: &T, b: &T) -> bool;
}

impl<T, F> Order<T> for F
where
	T: ?Sized,
	F: FnMut(&T, &T) -> bool,
{
	#[inline]
	fn outranks(&mut self, a: &T, b: &T) -> bool {
		self(a, b)
	}
}

/// Natural ascending order, the minimum outranks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ascending;

impl<T: PartialOrd + ?Sized> Order<T> for Ascending {
	#[inline]
	fn outranks(&mut self, a: &T, b: &T) -> bool {
		a < b
	}
}

/// Natural descending order, the maximum outranks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Descending;

impl<T: PartialOrd + ?Sized> Order<T> for Descending {
	#[inline]
	fn outranks(&mut self, a: &T, b: &T) -> bool {
		a > b
	}
}

/// Natural order whose direction is selected at runtime.
///
/// Converts from `bool` where `true` selects [`Ascending`] and `false` selects [`Descending`].
///
/// ```
/// use ndarray_heap::{Heap, Natural};
///
/// let mut heap = Heap::from_items([2, 7, 4], Natural::from(false));
/// assert_eq!(heap.remove(), Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Natural {
	ascending: bool,
}

impl Natural {
	/// Whether the minimum outranks.
	#[must_use]
	#[inline]
	pub const fn is_ascending(self) -> bool {
		self.ascending
	}
}

impl Default for Natural {
	#[inline]
	fn default() -> Self {
		Self { ascending: true }
	}
}

impl From<bool> for Natural {
	#[inline]
	fn from(ascending: bool) -> Self {
		Self { ascending }
	}
}

impl From<Ascending> for Natural {
	#[inline]
	fn from(_: Ascending) -> Self {
		Self { ascending: true }
	}
}

impl From<Descending> for Natural {
	#[inline]
	fn from(_: Descending) -> Self {
		Self { ascending: false }
	}
}

impl<T: PartialOrd + ?Sized> Order<T> for Natural {
	#[inline]
	fn outranks(&mut self, a: &T, b: &T) -> bool {
		if self.ascending { a < b } else { a > b }
	}
}

#[cfg(test)]
mod test {
	use super::{Ascending, Descending, Natural, Order};

	#[test]
	fn ties_never_outrank() {
		assert!(!Ascending.outranks(&3, &3));
		assert!(!Descending.outranks(&3, &3));
		assert!(!Natural::default().outranks(&3, &3));
	}

	#[test]
	fn directions() {
		assert!(Ascending.outranks(&1, &2));
		assert!(!Ascending.outranks(&2, &1));
		assert!(Descending.outranks(&2, &1));
		assert!(!Descending.outranks(&1, &2));
		assert!(Natural::from(true).outranks(&1, &2));
		assert!(Natural::from(false).outranks(&2, &1));
		assert_eq!(Natural::from(Descending), Natural::from(false));
		assert!(Natural::from(Ascending).is_ascending());
	}

	#[test]
	fn unsized_strings() {
		assert!(Ascending.outranks("abc", "abd"));
		assert!(Descending.outranks("b", "abc"));
	}

	#[test]
	fn closure() {
		let mut calls = 0;
		let mut by_len = |a: &&str, b: &&str| {
			calls += 1;
			a.len() < b.len()
		};
		assert!(by_len.outranks(&"a", &"bb"));
		assert!(!by_len.outranks(&"aa", &"bb"));
		assert_eq!(calls, 2);
	}
}
