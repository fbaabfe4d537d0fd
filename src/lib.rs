//! Binary heaps (i.e., [priority queues]) and [heapsort] for contiguous and non-contiguous
//! (sub)views into *n*-dimensional arrays, parameterized by a pluggable total [`Order`].
//!
//! # Example
//!
//! ```
//! use ndarray_heap::{Descending, Heap, Heap1Ext, ndarray::arr2};
//!
//! // Priority queue returning the minimum first.
//! let mut heap = Heap::new();
//! heap.extend([5, 3, 8, 1, 9, 2]);
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.remove(), Some(1));
//! assert_eq!(heap.remove(), Some(2));
//!
//! // 2-dimensional array of 3 rows and 2 columns.
//! let mut v = arr2(&[[5, 4],    // row 0, axis 0
//!                    [3, 9],    // row 1, axis 0
//!                    [8, 0]]);  // row 2, axis 0
//!
//! // Mutable subview into the first column.
//! let mut column = v.column_mut(0);
//!
//! // Due to row-major memory layout, columns are non-contiguous.
//! assert_eq!(column.as_slice_mut(), None);
//!
//! // The maximum outranks and hence ends up last.
//! column.heap_sort_by(Descending);
//!
//! assert!(v == arr2(&[[3, 4],
//!                     [5, 9],
//!                     [8, 0]]));
//! ```
//!
//! # Orders
//!
//! Every operation is parameterized by an [`Order`] deciding whether one element *outranks*
//! another, i.e., must sit closer to the root. [`Ascending`] lets the minimum outrank and is the
//! default, [`Descending`] lets the maximum outrank, [`Natural`] selects either at runtime, and any
//! closure `FnMut(&T, &T) -> bool` serves as a custom order.
//!
//! # Current Implementation
//!
//! | Operation                        | Time             | Space |
//! |----------------------------------|------------------|-------|
//! | [`Heap::add`]                    | *O*(log *n*)     | *O*(1) amortized |
//! | [`Heap::peek`]                   | *O*(1)           | *O*(1) |
//! | [`Heap::remove`]                 | *O*(log *n*)     | *O*(1) |
//! | [`heapify`](Heap1Ext::heapify)   | *O*(*n* log *n*) | *O*(1) |
//! | [`heap_sort`](Heap1Ext::heap_sort) | *O*(*n* log *n*) | *O*(1) |
//!
//! The array-heap primitives the above are built on are public in [`heap`] for callers managing
//! their own buffers.
//!
//! # Features
//!
//!   * `alloc` for the [`Heap`] container and the `Vec`-backed [`heap::insert`] and
//!     [`heap::remove_root`]. Enabled by `std`.
//!   * `std` enabled by `default`.
//!
//! [priority queues]: https://en.wikipedia.org/wiki/Priority_queue
//! [heapsort]: https://en.wikipedia.org/wiki/Heapsort

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod binary_heap;
pub mod heap;
mod order;

#[cfg(feature = "alloc")]
pub use crate::binary_heap::Heap;
pub use crate::order::{Ascending, Descending, Natural, Order};

use crate::heap::{heap_sort, heapify, is_heap};
use ndarray::{ArrayBase, Data, DataMut, Ix1};

pub use ndarray;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing in-place [heap] operations.
///
/// [heap]: https://en.wikipedia.org/wiki/Binary_heap
pub trait Heap1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Rearranges the array into a binary heap in [`Ascending`] order, i.e., the minimum first.
	///
	/// This is in-place (i.e., does not allocate) and *O*(*n* log *n*) worst-case.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::{ndarray::arr1, Heap1Ext};
	///
	/// let mut v = arr1(&[5, 3, 8, 1, 9, 2]);
	///
	/// v.heapify();
	/// assert_eq!(v[0], 1);
	/// assert!(v.is_heap());
	/// ```
	fn heapify(&mut self)
	where
		A: PartialOrd,
		S: DataMut;
	/// Rearranges the array into a binary heap in the given order.
	///
	/// This is in-place (i.e., does not allocate) and *O*(*n* log *n*) worst-case.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::{ndarray::arr1, Heap1Ext};
	///
	/// let mut v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// // Largest magnitude first.
	/// v.heapify_by(|a: &i32, b: &i32| a.abs() > b.abs());
	/// assert_eq!(v[0], -5);
	/// ```
	fn heapify_by<O>(&mut self, order: O)
	where
		O: Order<A>,
		S: DataMut;

	/// Sorts the array with heapsort in [`Ascending`] order.
	///
	/// The outranking minimum is moved behind the shrinking heap first, so the array ends up in
	/// non-increasing order. Use [`heap_sort_by`](Heap1Ext::heap_sort_by) with [`Descending`] for
	/// non-decreasing order.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place
	/// (i.e., does not allocate), and *O*(*n* log *n*) worst-case.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::{ndarray::arr1, Heap1Ext};
	///
	/// let mut v = arr1(&[5, 3, 8, 1, 9, 2]);
	///
	/// v.heap_sort();
	/// assert!(v == arr1(&[9, 8, 5, 3, 2, 1]));
	/// ```
	fn heap_sort(&mut self)
	where
		A: PartialOrd,
		S: DataMut;
	/// Sorts the array with heapsort in the given order, the outranking elements last.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place
	/// (i.e., does not allocate), and *O*(*n* log *n*) worst-case.
	///
	/// The order must define a total ordering for the elements in the array. If the ordering is
	/// not total, the order of the elements is unspecified.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::{ndarray::arr1, Descending, Heap1Ext};
	///
	/// let mut floats = arr1(&[5f64, 4.0, 1.0, 3.0, 2.0]);
	/// floats.heap_sort_by(Descending);
	/// assert_eq!(floats, arr1(&[1.0, 2.0, 3.0, 4.0, 5.0]));
	/// ```
	fn heap_sort_by<O>(&mut self, order: O)
	where
		O: Order<A>,
		S: DataMut;

	/// Checks if the array is a binary heap in [`Ascending`] order.
	///
	/// That is, no element is less than its parent. Empty and single-element arrays are heaps.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heap::{ndarray::arr1, Heap1Ext};
	///
	/// let empty: [i32; 0] = [];
	///
	/// assert!(arr1(&[1, 3, 2, 5]).is_heap());
	/// assert!(!arr1(&[3, 1, 2]).is_heap());
	/// assert!(arr1(&empty).is_heap());
	/// ```
	#[must_use]
	fn is_heap(&self) -> bool
	where
		A: PartialOrd;
	/// Checks if the array is a binary heap in the given order.
	#[must_use]
	fn is_heap_by<O>(&self, order: O) -> bool
	where
		O: Order<A>;
}

impl<A, S> Heap1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn heapify(&mut self)
	where
		A: PartialOrd,
		S: DataMut,
	{
		heapify(self.view_mut(), &mut Ascending);
	}
	#[inline]
	fn heapify_by<O>(&mut self, mut order: O)
	where
		O: Order<A>,
		S: DataMut,
	{
		heapify(self.view_mut(), &mut order);
	}

	#[inline]
	fn heap_sort(&mut self)
	where
		A: PartialOrd,
		S: DataMut,
	{
		heap_sort(self.view_mut(), &mut Ascending);
	}
	#[inline]
	fn heap_sort_by<O>(&mut self, mut order: O)
	where
		O: Order<A>,
		S: DataMut,
	{
		heap_sort(self.view_mut(), &mut order);
	}

	#[inline]
	fn is_heap(&self) -> bool
	where
		A: PartialOrd,
	{
		is_heap(self.view(), &mut Ascending)
	}
	#[inline]
	fn is_heap_by<O>(&self, mut order: O) -> bool
	where
		O: Order<A>,
	{
		is_heap(self.view(), &mut order)
	}
}
