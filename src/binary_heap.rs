//! Owning priority queue on top of the array-heap primitives.

#![cfg(feature = "alloc")]

use crate::{
	heap::{insert, remove_root},
	order::{Ascending, Order},
};
use core::fmt::{self, Debug, Formatter};
use ndarray::{ArrayView1, aview1};

#[cfg(not(feature = "std"))]
extern crate alloc as no_std_alloc;
#[cfg(not(feature = "std"))]
use no_std_alloc::vec::Vec;

/// Priority queue implemented as a binary heap with a fixed [`Order`].
///
/// The root, i.e., the element outranking all others, is accessible in *O*(1) via
/// [`peek`](Heap::peek) and removable in *O*(log *n*) via [`remove`](Heap::remove). Elements of
/// equal rank come out in unspecified relative order.
///
/// # Examples
///
/// ```
/// use ndarray_heap::Heap;
///
/// let mut heap = Heap::new();
/// for item in [5, 3, 8, 1, 9, 2] {
///     heap.add(item);
/// }
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.remove(), Some(1));
/// assert_eq!(heap.size(), 5);
/// ```
#[derive(Clone)]
pub struct Heap<T, O = Ascending> {
	data: Vec<T>,
	order: O,
}

impl<T> Heap<T> {
	/// Creates an empty heap in [`Ascending`] order.
	#[must_use]
	#[inline]
	pub fn new() -> Self {
		Self::with_order(Ascending)
	}
}

impl<T, O> Heap<T, O> {
	/// Creates an empty heap in the given order.
	#[must_use]
	#[inline]
	pub fn with_order(order: O) -> Self {
		Self {
			data: Vec::new(),
			order,
		}
	}
	/// Creates an empty heap in the given order with space for at least `capacity` elements.
	///
	/// ```
	/// use ndarray_heap::{Descending, Heap};
	///
	/// let heap = Heap::<u8, _>::with_capacity_and_order(16, Descending);
	/// assert!(heap.is_empty());
	/// assert!(heap.into_vec().capacity() >= 16);
	/// ```
	#[must_use]
	#[inline]
	pub fn with_capacity_and_order(capacity: usize, order: O) -> Self {
		Self {
			data: Vec::with_capacity(capacity),
			order,
		}
	}

	/// Returns the root, or `None` if the heap is empty.
	#[must_use]
	#[inline]
	pub fn peek(&self) -> Option<&T> {
		self.data.first()
	}
	/// Number of elements in the heap.
	#[must_use]
	#[inline]
	pub fn size(&self) -> usize {
		self.data.len()
	}
	/// Whether the heap is empty.
	#[must_use]
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}
	/// Drops all elements.
	#[inline]
	pub fn clear(&mut self) {
		self.data.clear();
	}
	/// The order of this heap.
	///
	/// ```
	/// use ndarray_heap::{Heap, Natural};
	///
	/// let heap = Heap::<i32, _>::with_order(Natural::from(false));
	/// assert!(!heap.order().is_ascending());
	/// ```
	#[must_use]
	#[inline]
	pub fn order(&self) -> &O {
		&self.order
	}
	/// Views the elements in heap order, i.e., the root first.
	#[must_use]
	#[inline]
	pub fn view(&self) -> ArrayView1<'_, T> {
		aview1(&self.data)
	}
	/// Returns the elements in heap order.
	///
	/// ```
	/// use ndarray_heap::Heap;
	///
	/// let heap: Heap<_> = [3, 1, 2].into_iter().collect();
	/// assert_eq!(heap.into_vec(), [1, 3, 2]);
	/// ```
	#[must_use]
	#[inline]
	pub fn into_vec(self) -> Vec<T> {
		self.data
	}
}

impl<T, O> Heap<T, O>
where
	O: Order<T>,
{
	/// Builds a heap by adding `items` one at a time.
	///
	/// ```
	/// use ndarray_heap::{Descending, Heap};
	///
	/// let heap = Heap::from_items([5, 3, 8], Descending);
	/// assert_eq!(heap.peek(), Some(&8));
	/// ```
	pub fn from_items<I>(items: I, order: O) -> Self
	where
		I: IntoIterator<Item = T>,
	{
		let mut heap = Self::with_order(order);
		heap.extend(items);
		heap
	}

	/// Adds `item` to the heap in *O*(log *n*).
	#[inline]
	pub fn add(&mut self, item: T) {
		insert(&mut self.data, item, &mut self.order);
	}
	/// Removes the root in *O*(log *n*), or returns `None` if the heap is empty.
	#[inline]
	pub fn remove(&mut self) -> Option<T> {
		remove_root(&mut self.data, &mut self.order)
	}

	/// Drains the heap in extraction order.
	///
	/// ```
	/// use ndarray_heap::Heap;
	///
	/// let heap: Heap<_> = [5, 3, 8, 1].into_iter().collect();
	/// assert_eq!(heap.into_sorted_vec(), [1, 3, 5, 8]);
	/// ```
	#[must_use]
	pub fn into_sorted_vec(mut self) -> Vec<T> {
		let mut sorted = Vec::with_capacity(self.size());
		while let Some(item) = self.remove() {
			sorted.push(item);
		}
		sorted
	}
}

impl<T, O: Default> Default for Heap<T, O> {
	#[inline]
	fn default() -> Self {
		Self::with_order(O::default())
	}
}

impl<T, O> Extend<T> for Heap<T, O>
where
	O: Order<T>,
{
	fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
		let items = items.into_iter();
		self.data.reserve(items.size_hint().0);
		for item in items {
			self.add(item);
		}
	}
}

impl<T, O> FromIterator<T> for Heap<T, O>
where
	O: Order<T> + Default,
{
	#[inline]
	fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
		Self::from_items(items, O::default())
	}
}

impl<T: Debug, O> Debug for Heap<T, O> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Heap").field(&self.data).finish()
	}
}
