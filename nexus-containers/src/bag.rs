//! Add-only multiset.
//!
//! A [`Bag`] accepts elements and lets you walk them, nothing more. There is
//! no removal. Internally it is a singly linked chain that only ever grows at
//! the front, so iteration yields the most recently added element first.
//!
//! # Example
//!
//! ```
//! use nexus_containers::Bag;
//!
//! let mut bag = Bag::new();
//! bag.add("1");
//! bag.add("1");
//! bag.add("2");
//!
//! assert_eq!(bag.len(), 3);
//! assert!(bag.contains(&"1"));
//! assert!(!bag.contains(&"3"));
//!
//! let seen: Vec<_> = bag.iter().copied().collect();
//! assert_eq!(seen, ["2", "1", "1"]);
//! ```

use core::fmt;
use core::iter::FusedIterator;

use crate::{Error, Result};

type Link<E> = Option<Box<Node<E>>>;

struct Node<E> {
    element: E,
    next: Link<E>,
}

/// Add-only multiset with reverse-insertion traversal.
///
/// The chain reachable from the first node always holds exactly
/// [`len`](Bag::len) nodes.
pub struct Bag<E> {
    first: Link<E>,
    len: usize,
}

impl<E> Bag<E> {
    /// Creates an empty bag.
    #[inline]
    pub const fn new() -> Self {
        Self {
            first: None,
            len: 0,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been added.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Adds an element. It becomes the first one visited by [`iter`](Bag::iter).
    #[inline]
    pub fn add(&mut self, element: E) {
        let next = self.first.take();
        self.first = Some(Box::new(Node { element, next }));
        self.len += 1;
    }

    /// Returns `true` if an element equal to `element` has been added.
    pub fn contains(&self, element: &E) -> bool
    where
        E: PartialEq,
    {
        self.iter().any(|e| e == element)
    }

    /// Like [`contains`](Bag::contains), but accepts an absent probe.
    ///
    /// `None` never matches: a `Bag<E>` cannot hold an absent element. To
    /// store absent values, use `Bag<Option<T>>` and probe with
    /// `contains(&None)`.
    ///
    /// ```
    /// use nexus_containers::Bag;
    ///
    /// let mut bag = Bag::new();
    /// bag.add(1);
    /// assert!(!bag.contains_probe(None));
    /// assert!(bag.contains_probe(Some(&1)));
    /// ```
    pub fn contains_probe(&self, probe: Option<&E>) -> bool
    where
        E: PartialEq,
    {
        probe.is_some_and(|element| self.contains(element))
    }

    /// Returns an iterator from the most recently added element to the first.
    #[inline]
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            next: self.first.as_deref(),
            remaining: self.len,
        }
    }
}

impl<E> Default for Bag<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for Bag<E> {
    fn drop(&mut self) {
        // Unlink one node at a time so long chains don't recurse.
        let mut link = self.first.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for Bag<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E> Extend<E> for Bag<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<E> FromIterator<E> for Bag<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

impl<'a, E> IntoIterator for &'a Bag<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Iterator over a [`Bag`], most recent element first.
///
/// Besides [`Iterator`], it offers an explicit protocol where running off the
/// end and removal are errors instead of `None`.
pub struct Iter<'a, E> {
    next: Option<&'a Node<E>>,
    remaining: usize,
}

impl<'a, E> Iter<'a, E> {
    /// Returns `true` if another element remains.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Advances the iterator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] once the chain is exhausted.
    #[inline]
    pub fn try_next(&mut self) -> Result<&'a E> {
        self.next().ok_or(Error::NoSuchElement)
    }

    /// Bags do not support removal.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::UnsupportedOperation`].
    #[inline]
    pub fn remove(&mut self) -> Result<()> {
        Err(Error::UnsupportedOperation)
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<E> FusedIterator for Iter<'_, E> {}

impl<E> Clone for Iter<'_, E> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
        }
    }
}
