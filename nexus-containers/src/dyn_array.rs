//! Growable indexed array with geometric growth.
//!
//! [`DynArray`] keeps its elements in a single boxed slice of `capacity`
//! slots. The first `len` slots are live; the rest are unoccupied (`None`).
//! Appending to a full array doubles the capacity, so a run of appends costs
//! amortized O(1) each and never wastes more than half the allocation.
//!
//! # Example
//!
//! ```
//! use nexus_containers::DynArray;
//!
//! let mut names = DynArray::new();
//! names.add("Peubes");
//! names.add("Marley");
//!
//! assert_eq!(names.to_string(), "[Peubes, Marley]");
//! assert_eq!(names.len(), 2);
//!
//! assert_eq!(names.remove(0), Ok("Peubes"));
//! assert_eq!(names.iter().copied().collect::<Vec<_>>(), ["Marley"]);
//! assert_eq!(names.capacity(), 10);
//! ```
//!
//! # Cursors
//!
//! [`DynArray::iter`] borrows the array, so it cannot observe a mutation.
//! [`DynArray::cursor`] instead holds the array mutably and lets the caller
//! remove the element just visited, or reach the whole array through
//! [`Cursor::array_mut`]. If such a mutation shrinks the backing slice below
//! the cursor position, the next advance reports
//! [`Error::ConcurrentModification`].

use core::fmt;
use core::iter::FusedIterator;

use crate::{Error, Result};

/// Capacity of an array created with [`DynArray::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Contiguous growable array.
pub struct DynArray<E> {
    elements: Box<[Option<E>]>,
    len: usize,
}

impl<E> DynArray<E> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with `capacity` slots.
    ///
    /// A capacity of zero is raised to one so that doubling always grows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: empty_slots(capacity.max(1)),
            len: 0,
        }
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no live elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    /// Appends an element, doubling the capacity first if the array is full.
    pub fn add(&mut self, element: E) {
        if self.len == self.elements.len() {
            self.grow();
        }
        self.elements[self.len] = Some(element);
        self.len += 1;
    }

    /// Overwrites slot `index` without changing [`len`](DynArray::len).
    ///
    /// Any slot below the capacity may be written. A value put past `len` is
    /// not visited by iteration and is overwritten by the next append that
    /// reaches it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= capacity`.
    pub fn put(&mut self, index: usize, element: E) -> Result<()> {
        Error::check_index(index, self.capacity())?;
        self.elements[index] = Some(element);
        Ok(())
    }

    /// Returns the value in slot `index`.
    ///
    /// Live slots (`index < len`) always hold `Some`; unoccupied slots
    /// return `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= capacity`.
    pub fn get(&self, index: usize) -> Result<Option<&E>> {
        Error::check_index(index, self.capacity())?;
        Ok(self.elements[index].as_ref())
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// one slot to the left. The capacity is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<E> {
        Error::check_index(index, self.len)?;

        let removed = self.elements[index].take();
        // The vacated slot travels to the end of the live region.
        self.elements[index..self.len].rotate_left(1);
        self.len -= 1;

        match removed {
            Some(element) => Ok(element),
            None => unreachable!("live slot {index} was unoccupied"),
        }
    }

    /// Drops every element, keeping the capacity.
    pub fn clear(&mut self) {
        for slot in self.elements.iter_mut() {
            *slot = None;
        }
        self.len = 0;
    }

    /// Shrinks the capacity to the live length (at least one slot).
    ///
    /// Values put past `len` are dropped.
    pub fn shrink_to_fit(&mut self) {
        let target = self.len.max(1);
        if target == self.elements.len() {
            return;
        }

        let old_capacity = self.elements.len();
        let mut slots = core::mem::take(&mut self.elements).into_vec();
        slots.truncate(target);
        self.elements = slots.into_boxed_slice();

        tracing::trace!(old_capacity, new_capacity = target, "dyn array shrunk");
    }

    /// Returns an iterator over the live elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            inner: self.elements[..self.len].iter(),
        }
    }

    /// Returns a cursor positioned before the first element.
    #[inline]
    pub fn cursor(&mut self) -> Cursor<'_, E> {
        Cursor {
            array: self,
            position: 0,
            last_returned: None,
        }
    }

    fn grow(&mut self) {
        let old_capacity = self.elements.len();
        let new_capacity = old_capacity * 2;

        let mut slots = core::mem::take(&mut self.elements).into_vec();
        slots.resize_with(new_capacity, || None);
        self.elements = slots.into_boxed_slice();

        tracing::trace!(old_capacity, new_capacity, "dyn array grown");
    }
}

fn empty_slots<E>(capacity: usize) -> Box<[Option<E>]> {
    core::iter::repeat_with(|| None).take(capacity).collect()
}

impl<E> Default for DynArray<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Clone for DynArray<E> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            len: self.len,
        }
    }
}

/// Renders every occupied slot as `[a, b, c]`.
impl<E: fmt::Display> fmt::Display for DynArray<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut first = true;
        for element in self.elements.iter().flatten() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

impl<E: fmt::Debug> fmt::Debug for DynArray<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("elements", &DebugLive(self))
            .field("capacity", &self.capacity())
            .finish()
    }
}

struct DebugLive<'a, E>(&'a DynArray<E>);

impl<E: fmt::Debug> fmt::Debug for DebugLive<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<E> Extend<E> for DynArray<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<E> FromIterator<E> for DynArray<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<'a, E> IntoIterator for &'a DynArray<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Borrowing iterator over the live elements of a [`DynArray`].
pub struct Iter<'a, E> {
    inner: core::slice::Iter<'a, Option<E>>,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().and_then(Option::as_ref)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> DoubleEndedIterator for Iter<'_, E> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<E> FusedIterator for Iter<'_, E> {}

// =============================================================================
// Cursor
// =============================================================================

/// Forward cursor with removal and best-effort modification detection.
///
/// # Example
///
/// ```
/// use nexus_containers::DynArray;
///
/// let mut array: DynArray<u32> = (1..=6).collect();
/// let mut cursor = array.cursor();
///
/// // Drop the odd values while walking.
/// while cursor.has_next() {
///     if cursor.try_next()? % 2 == 1 {
///         cursor.remove()?;
///     }
/// }
///
/// assert_eq!(array.iter().copied().collect::<Vec<_>>(), [2, 4, 6]);
/// # Ok::<(), nexus_containers::Error>(())
/// ```
pub struct Cursor<'a, E> {
    array: &'a mut DynArray<E>,
    position: usize,
    last_returned: Option<usize>,
}

impl<E> Cursor<'_, E> {
    /// Returns `true` if another live element follows the cursor.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.position < self.array.len
    }

    /// Returns the index of the element the next advance will visit.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Advances the cursor and returns the element passed over.
    ///
    /// # Errors
    ///
    /// - [`Error::ConcurrentModification`] if the backing slice is now
    ///   shorter than the cursor position
    /// - [`Error::NoSuchElement`] if no live element remains
    pub fn try_next(&mut self) -> Result<&E> {
        if self.position > self.array.elements.len() {
            return Err(Error::ConcurrentModification);
        }
        if self.position >= self.array.len {
            return Err(Error::NoSuchElement);
        }

        let index = self.position;
        self.position += 1;
        self.last_returned = Some(index);

        match &self.array.elements[index] {
            Some(element) => Ok(element),
            None => unreachable!("live slot {index} was unoccupied"),
        }
    }

    /// Removes the element most recently returned by
    /// [`try_next`](Cursor::try_next) and steps the cursor back by one.
    ///
    /// # Errors
    ///
    /// - [`Error::NoSuchElement`] if nothing was returned since the last
    ///   removal
    /// - [`Error::ConcurrentModification`] if that element is no longer live
    pub fn remove(&mut self) -> Result<E> {
        let index = self.last_returned.take().ok_or(Error::NoSuchElement)?;
        if index >= self.array.len {
            return Err(Error::ConcurrentModification);
        }

        let removed = self.array.remove(index)?;
        self.position = index;
        Ok(removed)
    }

    /// Visits every element not yet returned, consuming the cursor.
    pub fn for_each_remaining<F: FnMut(&E)>(self, mut f: F) {
        let start = self.position.min(self.array.len);
        for element in self.array.iter().skip(start) {
            f(element);
        }
    }

    /// Returns the array being walked.
    #[inline]
    pub fn array(&self) -> &DynArray<E> {
        &*self.array
    }

    /// Returns the array being walked, for arbitrary mutation.
    ///
    /// Mutations made here are not tracked; a shrink below the cursor
    /// position surfaces as [`Error::ConcurrentModification`] on the next
    /// advance.
    #[inline]
    pub fn array_mut(&mut self) -> &mut DynArray<E> {
        &mut *self.array
    }
}
