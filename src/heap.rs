//! Derivative work of [`alloc::collections::binary_heap`] and [`core::slice::sort`] licensed under
//! `MIT OR Apache-2.0`.
//!
//! [`alloc::collections::binary_heap`]: https://doc.rust-lang.org/src/alloc/collections/binary_heap/mod.rs.html
//! [`core::slice::sort`]: https://doc.rust-lang.org/src/core/slice/sort.rs.html
//!
//! Array-heap primitives on caller-owned buffers.
//!
//! The element at index `i > 0` has its parent at `(i - 1) / 2`. A buffer satisfies the heap
//! property if no element strictly outranks its parent, so the root at index 0 outranks or ties
//! all others.

use crate::order::Order;
use core::{mem::ManuallyDrop, ptr};
use ndarray::{ArrayView1, ArrayViewMut1};

#[cfg(feature = "alloc")]
use core::mem;
#[cfg(feature = "alloc")]
use ndarray::aview_mut1;

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc as no_std_alloc;
#[cfg(all(feature = "alloc", not(feature = "std")))]
use no_std_alloc::vec::Vec;

/// Element read out of a view, leaving a hole which moves while sifting.
///
/// When dropped, the element is written into the hole. If the hole never moved, the slot still
/// holds the element and nothing is written.
struct Hole<'a, T> {
	v: ArrayViewMut1<'a, T>,
	elt: ManuallyDrop<T>,
	start: usize,
	pos: usize,
}

impl<'a, T> Hole<'a, T> {
	/// # Safety
	///
	/// `pos` must be within bounds of `v`.
	#[inline]
	unsafe fn new(v: ArrayViewMut1<'a, T>, pos: usize) -> Self {
		debug_assert!(pos < v.len());
		// SAFETY: `pos` is within bounds.
		let elt = unsafe { ptr::read(v.uget(pos)) };
		Hole {
			v,
			elt: ManuallyDrop::new(elt),
			start: pos,
			pos,
		}
	}

	#[inline]
	fn pos(&self) -> usize {
		self.pos
	}

	#[inline]
	fn element(&self) -> &T {
		&self.elt
	}

	/// # Safety
	///
	/// `index` must be within bounds and unequal to `pos`.
	#[inline]
	unsafe fn get(&self, index: usize) -> &T {
		debug_assert!(index != self.pos);
		debug_assert!(index < self.v.len());
		// SAFETY: The caller guarantees the bounds.
		unsafe { self.v.uget(index) }
	}

	/// Moves the element at `index` into the hole, leaving the hole at `index`.
	///
	/// # Safety
	///
	/// `index` must be within bounds and unequal to `pos`.
	#[inline]
	unsafe fn move_to(&mut self, index: usize) {
		debug_assert!(index != self.pos);
		debug_assert!(index < self.v.len());
		// SAFETY: Both indices are within bounds and unequal, hence the pointers are valid and do
		// not overlap.
		unsafe {
			let src = self.v.uget(index) as *const T;
			let dst = self.v.uget_mut(self.pos) as *mut T;
			ptr::copy_nonoverlapping(src, dst, 1);
		}
		self.pos = index;
	}
}

impl<T> Drop for Hole<'_, T> {
	#[inline]
	fn drop(&mut self) {
		if self.pos != self.start {
			// SAFETY: `pos` is within bounds and its element has been moved into another slot.
			unsafe {
				let dst = self.v.uget_mut(self.pos) as *mut T;
				ptr::copy_nonoverlapping(&*self.elt as *const T, dst, 1);
			}
		}
	}
}

/// Moves the element at `start` toward the root until it no longer outranks its parent.
///
/// Returns the index the element came to rest at.
///
/// # Panics
///
/// Panics if `start` is out of bounds.
pub fn sift_up<T, O>(v: ArrayViewMut1<'_, T>, start: usize, order: &mut O) -> usize
where
	O: Order<T> + ?Sized,
{
	assert!(
		start < v.len(),
		"sift start {start} out of bounds for length {}",
		v.len()
	);
	// SAFETY: `start` is within bounds. If `order` panics, `hole` gets dropped and writes the
	// element back into the view.
	let mut hole = unsafe { Hole::new(v, start) };
	while hole.pos() > 0 {
		let parent = (hole.pos() - 1) / 2;
		// SAFETY: `parent < hole.pos()`, so it is within bounds and not the hole.
		if !order.outranks(hole.element(), unsafe { hole.get(parent) }) {
			break;
		}
		// SAFETY: Same as above.
		unsafe { hole.move_to(parent) };
	}
	hole.pos()
}

/// Moves the element at `start` away from the root until it outranks its children.
///
/// Only the elements in `..end` take part, the ones in `end..` are left untouched. Returns the
/// index the element came to rest at.
///
/// # Panics
///
/// Panics if `end` is greater than the length of `v`.
pub fn sift_down<T, O>(v: ArrayViewMut1<'_, T>, start: usize, end: usize, order: &mut O) -> usize
where
	O: Order<T> + ?Sized,
{
	assert!(
		end <= v.len(),
		"sift end {end} out of bounds for length {}",
		v.len()
	);
	if start >= end {
		return start;
	}
	// SAFETY: `start < end <= v.len()`. If `order` panics, `hole` gets dropped and writes the
	// element back into the view.
	let mut hole = unsafe { Hole::new(v, start) };
	loop {
		// Left child of the hole.
		let mut child = 2 * hole.pos() + 1;
		if child >= end {
			break;
		}

		// Choose the outranking child, the right one on ties.
		// SAFETY: `hole.pos() < child < child + 1 < end`.
		if child + 1 < end
			&& !order.outranks(unsafe { hole.get(child) }, unsafe { hole.get(child + 1) })
		{
			child += 1;
		}

		// Stop if the invariant holds at the hole.
		// SAFETY: `hole.pos() < child < end`.
		if order.outranks(hole.element(), unsafe { hole.get(child) }) {
			break;
		}

		// SAFETY: Same as above.
		unsafe { hole.move_to(child) };
	}
	hole.pos()
}

/// Establishes the heap property over `v` by sifting up every element from the root onward.
pub fn heapify<T, O>(mut v: ArrayViewMut1<'_, T>, order: &mut O)
where
	O: Order<T> + ?Sized,
{
	for i in 0..v.len() {
		sift_up(v.view_mut(), i, order);
	}
}

/// Sorts `v` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
///
/// The outranking element ends up last, i.e., [`Ascending`](crate::Ascending) sorts in
/// non-increasing order and [`Descending`](crate::Descending) in non-decreasing order.
pub fn heap_sort<T, O>(mut v: ArrayViewMut1<'_, T>, order: &mut O)
where
	O: Order<T> + ?Sized,
{
	heapify(v.view_mut(), order);

	// Move the root behind the shrinking heap.
	for i in (1..v.len()).rev() {
		v.swap(0, i);
		sift_down(v.view_mut(), 0, i, order);
	}
}

/// Checks whether no element of `v` strictly outranks its parent.
#[must_use]
pub fn is_heap<T, O>(v: ArrayView1<'_, T>, order: &mut O) -> bool
where
	O: Order<T> + ?Sized,
{
	(1..v.len()).all(|i| !order.outranks(&v[i], &v[(i - 1) / 2]))
}

/// Pushes `item` onto the heap in `v`.
#[cfg(feature = "alloc")]
pub fn insert<T, O>(v: &mut Vec<T>, item: T, order: &mut O)
where
	O: Order<T> + ?Sized,
{
	v.push(item);
	let last = v.len() - 1;
	sift_up(aview_mut1(v.as_mut_slice()), last, order);
}

/// Pops the root off the heap in `v`, or returns `None` if it is empty.
///
/// The last element takes the place of the root and is sifted down.
#[cfg(feature = "alloc")]
pub fn remove_root<T, O>(v: &mut Vec<T>, order: &mut O) -> Option<T>
where
	O: Order<T> + ?Sized,
{
	let mut item = v.pop()?;
	if !v.is_empty() {
		mem::swap(&mut item, &mut v[0]);
		let len = v.len();
		sift_down(aview_mut1(v.as_mut_slice()), 0, len, order);
	}
	Some(item)
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{heap_sort, heapify, insert, is_heap, remove_root, sift_down, sift_up};
	use crate::{Ascending, Descending};
	use ndarray::{Array1, arr1, arr2, aview1};
	use quickcheck_macros::quickcheck;
	use std::{
		panic::{AssertUnwindSafe, catch_unwind},
		rc::Rc,
	};

	#[test]
	fn heapify_sifts_up_in_index_order() {
		let mut array = arr1(&[5, 3, 8, 1, 9, 2]);
		heapify(array.view_mut(), &mut Ascending);
		assert_eq!(array, arr1(&[1, 3, 2, 5, 9, 8]));
	}

	#[test]
	fn sorted_outranking_last() {
		let mut array = arr1(&[5, 3, 8, 1, 9, 2]);
		heap_sort(array.view_mut(), &mut Ascending);
		assert_eq!(array, arr1(&[9, 8, 5, 3, 2, 1]));
		heap_sort(array.view_mut(), &mut Descending);
		assert_eq!(array, arr1(&[1, 2, 3, 5, 8, 9]));
	}

	#[test]
	fn non_contiguous_column() {
		let mut array = arr2(&[[5, 0], [3, 1], [8, 2], [1, 3]]);
		let mut column = array.column_mut(0);
		assert_eq!(column.as_slice_mut(), None);
		heap_sort(column, &mut Descending);
		assert_eq!(array, arr2(&[[1, 0], [3, 1], [5, 2], [8, 3]]));
	}

	#[test]
	fn sift_down_respects_end() {
		let mut array = arr1(&[9, 1, 2, 0]);
		assert_eq!(sift_down(array.view_mut(), 0, 3, &mut Ascending), 1);
		assert_eq!(array, arr1(&[1, 9, 2, 0]));
		assert_eq!(sift_down(array.view_mut(), 3, 3, &mut Ascending), 3);
		assert_eq!(array, arr1(&[1, 9, 2, 0]));
	}

	#[test]
	fn sift_up_returns_resting_index() {
		let mut array = arr1(&[1, 3, 2, 5, 0]);
		assert_eq!(sift_up(array.view_mut(), 4, &mut Ascending), 0);
		assert_eq!(array, arr1(&[0, 1, 2, 5, 3]));
		assert_eq!(sift_up(array.view_mut(), 2, &mut Ascending), 2);
	}

	#[test]
	#[should_panic(expected = "out of bounds")]
	fn sift_up_out_of_bounds() {
		let mut array = arr1(&[1, 2]);
		sift_up(array.view_mut(), 2, &mut Ascending);
	}

	#[test]
	#[should_panic(expected = "out of bounds")]
	fn sift_down_out_of_bounds() {
		let mut array = arr1(&[1, 2]);
		sift_down(array.view_mut(), 0, 3, &mut Ascending);
	}

	#[test]
	fn remove_root_until_empty() {
		let mut v = vec![4];
		assert_eq!(remove_root(&mut v, &mut Ascending), Some(4));
		assert!(v.is_empty());
		assert_eq!(remove_root(&mut v, &mut Ascending), None);
	}

	#[test]
	fn panicking_order_keeps_elements() {
		let items = [5, 3, 8, 1, 9, 2].map(Rc::new);
		let mut array = Array1::from_iter(items.iter().cloned());
		let mut calls = 0;
		let mut order = |a: &Rc<i32>, b: &Rc<i32>| {
			calls += 1;
			assert!(calls < 5, "order gave up");
			a < b
		};
		let result = catch_unwind(AssertUnwindSafe(|| heap_sort(array.view_mut(), &mut order)));
		assert!(result.is_err());
		for item in &items {
			assert_eq!(Rc::strong_count(item), 2);
		}
		drop(array);
		for item in &items {
			assert_eq!(Rc::strong_count(item), 1);
		}
	}

	#[quickcheck]
	fn heapified(xs: Vec<u32>) {
		let mut array = Array1::from_vec(xs.clone());
		heapify(array.view_mut(), &mut Ascending);
		assert!(is_heap(array.view(), &mut Ascending));
		let mut array = Array1::from_vec(xs);
		heapify(array.view_mut(), &mut Descending);
		assert!(is_heap(array.view(), &mut Descending));
	}

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let mut array = Array1::from_vec(xs.clone());
		heap_sort(array.view_mut(), &mut Descending);
		assert_eq!(array, Array1::from_vec(sorted.clone()));
		// Sorting a sorted array changes nothing.
		heap_sort(array.view_mut(), &mut Descending);
		assert_eq!(array, Array1::from_vec(sorted.clone()));
		sorted.reverse();
		let mut array = Array1::from_vec(xs);
		heap_sort(array.view_mut(), &mut Ascending);
		assert_eq!(array, Array1::from_vec(sorted));
	}

	#[quickcheck]
	fn drained(xs: Vec<u32>) {
		let mut v = Vec::new();
		for &x in &xs {
			insert(&mut v, x, &mut Ascending);
			assert!(is_heap(aview1(&v), &mut Ascending));
		}
		let mut drained = Vec::new();
		while let Some(x) = remove_root(&mut v, &mut Ascending) {
			assert!(is_heap(aview1(&v), &mut Ascending));
			drained.push(x);
		}
		let mut sorted = xs;
		sorted.sort_unstable();
		assert_eq!(drained, sorted);
	}
}
