//! Singly linked list of integers with positional operations.
//!
//! [`SList`] anchors its chain at the head only. Positional operations walk
//! from the head, so inserting, reading or deleting at position `p` costs
//! O(p).
//!
//! Bounds follow one rule: insertion accepts `[0, len]`, reads and deletes
//! accept `[0, len)`.
//!
//! # Example
//!
//! ```
//! use nexus_containers::SList;
//!
//! let mut list = SList::new();
//! list.insert_head(5);
//! list.insert_head(7);
//! list.insert_head(10);
//! list.insert(3);
//! list.insert_nth(1, 4)?;
//! assert_eq!(list.to_string(), "10->7->5->3->1");
//!
//! list.delete_head()?;
//! list.delete_nth(1)?;
//! list.delete()?;
//! assert_eq!(list.to_string(), "7->3");
//! # Ok::<(), nexus_containers::Error>(())
//! ```

use core::fmt;
use core::iter::FusedIterator;

use crate::{Error, Result};

type Link = Option<Box<Node>>;

struct Node {
    value: i32,
    next: Link,
}

/// Singly linked list of `i32` values.
#[derive(Default)]
pub struct SList {
    head: Link,
    len: usize,
}

impl SList {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the tracked number of nodes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no nodes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value` at the head.
    #[inline]
    pub fn insert_head(&mut self, value: i32) {
        self.link_at(0, value);
    }

    /// Appends `value` at the tail. O(len).
    #[inline]
    pub fn insert(&mut self, value: i32) {
        self.link_at(self.len, value);
    }

    /// Inserts `value` so that it ends up at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `position > len`.
    pub fn insert_nth(&mut self, value: i32, position: usize) -> Result<()> {
        Error::check_position(position, self.len)?;
        self.link_at(position, value);
        Ok(())
    }

    /// Removes and returns the head value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if the list is empty.
    #[inline]
    pub fn delete_head(&mut self) -> Result<i32> {
        self.delete_nth(0)
    }

    /// Removes and returns the tail value. O(len).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if the list is empty.
    pub fn delete(&mut self) -> Result<i32> {
        match self.len.checked_sub(1) {
            Some(last) => self.delete_nth(last),
            None => Err(Error::IndexOutOfRange { index: 0, len: 0 }),
        }
    }

    /// Removes and returns the value at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `position >= len`.
    pub fn delete_nth(&mut self, position: usize) -> Result<i32> {
        Error::check_index(position, self.len)?;

        let slot = self.link_mut(position);
        match slot.take() {
            Some(mut node) => {
                *slot = node.next.take();
                self.len -= 1;
                Ok(node.value)
            }
            None => unreachable!("chain shorter than len"),
        }
    }

    /// Releases every node.
    pub fn clear(&mut self) {
        let released = self.len;
        drop_chain(self.head.take());
        self.len = 0;

        tracing::trace!(released, "singly linked list cleared");
    }

    /// Returns `true` if some node holds `key`.
    pub fn search(&self, key: i32) -> bool {
        self.iter().any(|value| value == key)
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn get_nth(&self, index: usize) -> Result<i32> {
        Error::check_index(index, self.len)?;
        self.iter()
            .nth(index)
            .ok_or(Error::IndexOutOfRange { index, len: self.len })
    }

    /// Counts nodes by walking the chain.
    ///
    /// Always equals [`len`](SList::len); useful as a consistency check.
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut link = &self.head;
        while let Some(node) = link {
            count += 1;
            link = &node.next;
        }
        count
    }

    /// Returns an iterator over the values, head first.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Links a new node at `position`. Caller has checked the bound.
    fn link_at(&mut self, position: usize, value: i32) {
        let slot = self.link_mut(position);
        let next = slot.take();
        *slot = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Returns the link that points at the node in `position`.
    fn link_mut(&mut self, position: usize) -> &mut Link {
        let mut link = &mut self.head;
        for _ in 0..position {
            match link {
                Some(node) => link = &mut node.next,
                None => unreachable!("chain shorter than len"),
            }
        }
        link
    }
}

fn drop_chain(mut link: Link) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

impl Drop for SList {
    fn drop(&mut self) {
        drop_chain(self.head.take());
    }
}

/// Renders values head first, joined by `->`. An empty list renders as "".
impl fmt::Display for SList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("->")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for SList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<i32> for SList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut tail = &mut list.head;
        for value in iter {
            tail = &mut tail.insert(Box::new(Node { value, next: None })).next;
            list.len += 1;
        }
        list
    }
}

impl<'a> IntoIterator for &'a SList {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the values of an [`SList`], head first.
pub struct Iter<'a> {
    next: Option<&'a Node>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<i32> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(list: &SList) -> Vec<i32> {
        list.iter().collect()
    }

    #[test]
    fn new_is_empty() {
        let list = SList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.count(), 0);
        assert_eq!(list.to_string(), "");
    }

    #[test]
    fn insert_head_and_tail() {
        let mut list = SList::new();
        list.insert_head(2);
        list.insert_head(1);
        list.insert(3);

        assert_eq!(values(&list), [1, 2, 3]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.count(), 3);
    }

    #[test]
    fn insert_nth_positions() {
        let mut list: SList = [10, 30].into_iter().collect();

        list.insert_nth(20, 1).unwrap();
        list.insert_nth(0, 0).unwrap();
        list.insert_nth(40, 4).unwrap();

        assert_eq!(values(&list), [0, 10, 20, 30, 40]);
    }

    #[test]
    fn insert_nth_into_empty() {
        let mut list = SList::new();
        list.insert_nth(9, 0).unwrap();
        assert_eq!(values(&list), [9]);
    }

    #[test]
    fn insert_nth_out_of_range_leaves_list_unchanged() {
        let mut list: SList = [1, 2].into_iter().collect();

        assert_eq!(
            list.insert_nth(5, 3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(values(&list), [1, 2]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn delete_variants() {
        let mut list: SList = [10, 7, 5, 3, 1].into_iter().collect();

        assert_eq!(list.delete_head(), Ok(10));
        assert_eq!(list.delete_nth(1), Ok(5));
        assert_eq!(list.delete(), Ok(1));

        assert_eq!(list.to_string(), "7->3");
        assert_eq!(list.len(), 2);
        assert_eq!(list.count(), 2);
    }

    #[test]
    fn delete_on_empty_fails() {
        let mut list = SList::new();
        assert!(matches!(list.delete(), Err(Error::IndexOutOfRange { .. })));
        assert!(matches!(
            list.delete_head(),
            Err(Error::IndexOutOfRange { .. })
        ));
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn delete_nth_out_of_range() {
        let mut list: SList = [1, 2, 3].into_iter().collect();
        assert_eq!(
            list.delete_nth(3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(list.count(), 3);
    }

    #[test]
    fn insert_then_delete_is_identity() {
        let original = [4, 8, 15, 16, 23, 42];
        for p in 0..=original.len() {
            let mut list: SList = original.into_iter().collect();
            list.insert_nth(-1, p).unwrap();
            assert_eq!(list.get_nth(p), Ok(-1));
            assert_eq!(list.delete_nth(p), Ok(-1));
            assert_eq!(values(&list), original);
        }
    }

    #[test]
    fn search_and_get_nth() {
        let list: SList = [10, 7, 5, 3, 1].into_iter().collect();

        assert!(list.search(10) && list.search(5) && list.search(1));
        assert!(!list.search(100));

        assert_eq!(list.get_nth(0), Ok(10));
        assert_eq!(list.get_nth(2), Ok(5));
        assert_eq!(list.get_nth(4), Ok(1));
        assert_eq!(
            list.get_nth(5),
            Err(Error::IndexOutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn clear_then_reuse() {
        let mut list: SList = (0..100).collect();
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.count(), 0);

        list.insert(1);
        assert_eq!(list.to_string(), "1");
    }

    #[test]
    fn display_single() {
        let mut list = SList::new();
        list.insert(-4);
        assert_eq!(list.to_string(), "-4");
        assert_eq!(format!("{list:?}"), "[-4]");
    }

    #[test]
    fn long_chain_drops_without_overflow() {
        let list: SList = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
