//! Doubly linked list of integers over an arena.
//!
//! Nodes live in a [`Storage`] arena owned by the list; `prev`/`next` links
//! and the head/tail anchors are [`Key`]s into it. No node owns another, so
//! there are no reference cycles and unlinking is plain integer rewiring.
//!
//! Inserts return the new node's key, which stays valid until that node is
//! deleted and can be handed back to [`DList::delete_node`] for O(1) removal.
//!
//! # Invariants
//!
//! After every public operation:
//! - walking forward from the head and backward from the tail both visit
//!   exactly `len` nodes, in mirrored order
//! - head and tail are both absent exactly when `len == 0`
//! - `prev` of the head and `next` of the tail are absent
//! - for every linked pair, `a.next == b` iff `b.prev == a`
//!
//! # Example
//!
//! ```
//! use nexus_containers::DList;
//!
//! let mut list = DList::new();
//! list.insert_head(13);
//! list.insert_head(7);
//! list.insert_head(10);
//! assert_eq!(list.to_string(), "10 7 13");
//!
//! list.insert_tail(11);
//! assert_eq!(list.delete_tail(), Ok(11));
//!
//! list.delete(7)?;
//! assert_eq!(list.to_string(), "10 13");
//!
//! list.insert_ordered(23);
//! list.insert_ordered(67);
//! list.insert_ordered(3);
//! assert_eq!(list.to_string(), "3 10 13 23 67");
//!
//! list.insert_element_by_index(5, 1)?;
//! assert_eq!(list.to_string(), "3 5 10 13 23 67");
//! # Ok::<(), nexus_containers::Error>(())
//! ```
//!
//! # Storage Backends
//!
//! [`DList::new`] uses a [`VecStorage`]. Any [`Storage`] of [`DNode`]s
//! works through [`DList::with_storage`]; with the `slab` feature,
//! [`SlabDList`] runs on `slab::Slab`.

use core::fmt;
use core::iter::FusedIterator;
use std::io;

use crate::{Error, Key, Result, Storage, VecStorage};

/// Default arena for [`DList`].
pub type DListStorage<K = u32> = VecStorage<DNode<K>, K>;

/// A [`DList`] whose nodes live in a `slab::Slab`.
#[cfg(feature = "slab")]
pub type SlabDList = DList<slab::Slab<DNode<usize>>, usize>;

/// A node of a [`DList`].
///
/// Only exposed so that storage types can be named; the links are managed
/// by the list.
#[derive(Debug, Clone)]
pub struct DNode<K: Key = u32> {
    value: i32,
    prev: K,
    next: K,
}

impl<K: Key> DNode<K> {
    #[inline]
    fn new(value: i32) -> Self {
        Self {
            value,
            prev: K::NONE,
            next: K::NONE,
        }
    }

    /// Returns the stored value.
    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }
}

/// Doubly linked list of `i32` values with head and tail anchors.
///
/// # Type Parameters
///
/// - `S`: node arena (default [`DListStorage`])
/// - `K`: key type of the arena (default `u32`)
pub struct DList<S = DListStorage, K: Key = u32>
where
    S: Storage<DNode<K>, Key = K>,
{
    storage: S,
    head: K,
    tail: K,
    len: usize,
}

impl DList {
    /// Creates an empty list on a fresh [`VecStorage`].
    #[inline]
    pub fn new() -> Self {
        Self::with_storage(VecStorage::new())
    }

    /// Creates an empty list whose arena has room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_storage(VecStorage::with_capacity(capacity))
    }

    /// Builds a list holding `values` in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullInput`] if `values` is `None`.
    ///
    /// ```
    /// use nexus_containers::{DList, Error};
    ///
    /// let list = DList::from_array(Some(&[1, 2, 3]))?;
    /// assert_eq!(list.len(), 3);
    ///
    /// assert!(matches!(DList::from_array(None), Err(Error::NullInput)));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_array(values: Option<&[i32]>) -> Result<Self> {
        let values = values.ok_or(Error::NullInput)?;
        let mut list = Self::with_capacity(values.len());
        for &value in values {
            list.insert_tail(value);
        }
        Ok(list)
    }
}

impl<S, K: Key> Default for DList<S, K>
where
    S: Storage<DNode<K>, Key = K> + Default,
{
    fn default() -> Self {
        Self::with_storage(S::default())
    }
}

// =============================================================================
// Base impl - any storage
// =============================================================================

impl<S, K: Key> DList<S, K>
where
    S: Storage<DNode<K>, Key = K>,
{
    /// Creates an empty list over `storage`.
    ///
    /// Anything already in `storage` is dropped: the list must own every
    /// node in its arena.
    pub fn with_storage(mut storage: S) -> Self {
        storage.clear();
        Self {
            storage,
            head: K::NONE,
            tail: K::NONE,
            len: 0,
        }
    }

    /// Returns the number of nodes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the head node's key.
    #[inline]
    pub fn head(&self) -> Option<K> {
        self.head.into_option()
    }

    /// Returns the tail node's key.
    #[inline]
    pub fn tail(&self) -> Option<K> {
        self.tail.into_option()
    }

    /// Returns the head value.
    #[inline]
    pub fn front(&self) -> Option<i32> {
        self.head().map(|key| self.node(key).value)
    }

    /// Returns the tail value.
    #[inline]
    pub fn back(&self) -> Option<i32> {
        self.tail().map(|key| self.node(key).value)
    }

    /// Returns the value of the node at `key`, if it is still in the list.
    #[inline]
    pub fn get(&self, key: K) -> Option<i32> {
        self.storage.get(key).map(DNode::value)
    }

    /// Returns the key following `key`, or `None` at the tail or for a stale
    /// key.
    #[inline]
    pub fn next_key(&self, key: K) -> Option<K> {
        self.storage.get(key)?.next.into_option()
    }

    /// Returns the key preceding `key`, or `None` at the head or for a stale
    /// key.
    #[inline]
    pub fn prev_key(&self, key: K) -> Option<K> {
        self.storage.get(key)?.prev.into_option()
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Prepends `value`, returning the new node's key.
    pub fn insert_head(&mut self, value: i32) -> K {
        let key = self.storage.insert(DNode::new(value));
        self.link_front(key);
        key
    }

    /// Appends `value`, returning the new node's key.
    pub fn insert_tail(&mut self, value: i32) -> K {
        let key = self.storage.insert(DNode::new(value));
        self.link_back(key);
        key
    }

    /// Inserts `value` so that it ends up at `index`, returning its key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index > len`.
    pub fn insert_element_by_index(&mut self, value: i32, index: usize) -> Result<K> {
        Error::check_position(index, self.len)?;

        if index == 0 {
            return Ok(self.insert_head(value));
        }
        if index == self.len {
            return Ok(self.insert_tail(value));
        }

        let mut prev = self.head;
        for _ in 1..index {
            prev = self.node(prev).next;
        }

        let key = self.storage.insert(DNode::new(value));
        self.link_after(prev, key);
        Ok(key)
    }

    /// Inserts `value` before the first node holding a value `>= value`,
    /// or at the tail if there is none. Returns the new node's key.
    ///
    /// Keeps a non-decreasing list non-decreasing. Order is not checked.
    pub fn insert_ordered(&mut self, value: i32) -> K {
        let mut current = self.head;
        while current.is_some() && self.node(current).value < value {
            current = self.node(current).next;
        }

        if current == self.head {
            self.insert_head(value)
        } else if current.is_none() {
            self.insert_tail(value)
        } else {
            let key = self.storage.insert(DNode::new(value));
            self.link_before(current, key);
            key
        }
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes the head node and returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyList`] if the list is empty.
    pub fn delete_head(&mut self) -> Result<i32> {
        let key = self.head().ok_or(Error::EmptyList)?;
        Ok(self.remove_linked(key))
    }

    /// Removes the tail node and returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyList`] if the list is empty.
    pub fn delete_tail(&mut self) -> Result<i32> {
        let key = self.tail().ok_or(Error::EmptyList)?;
        Ok(self.remove_linked(key))
    }

    /// Removes the first node, from the head, holding `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no node holds `value`.
    pub fn delete(&mut self, value: i32) -> Result<()> {
        let key = self
            .keys()
            .find(|&key| self.node(key).value == value)
            .ok_or(Error::NotFound(value))?;
        self.remove_linked(key);
        Ok(())
    }

    /// Removes the node at `key` and returns its value.
    ///
    /// Returns `None` if `key` does not name a node of this list.
    pub fn delete_node(&mut self, key: K) -> Option<i32> {
        self.storage.get(key)?;
        Some(self.remove_linked(key))
    }

    /// Removes every node whose value already appeared closer to the head.
    ///
    /// The first occurrence of each value survives. O(n²).
    pub fn remove_duplicates(&mut self) {
        let mut removed = 0usize;
        let mut outer = self.head;

        while outer.is_some() {
            let value = self.node(outer).value;
            let mut inner = self.node(outer).next;

            while inner.is_some() {
                let next = self.node(inner).next;
                if self.node(inner).value == value {
                    self.remove_linked(inner);
                    removed += 1;
                }
                inner = next;
            }

            outer = self.node(outer).next;
        }

        tracing::debug!(removed, remaining = self.len, "duplicates removed");
    }

    /// Releases every node and resets both anchors.
    pub fn clear_list(&mut self) {
        let released = self.len;
        self.storage.clear();
        self.head = K::NONE;
        self.tail = K::NONE;
        self.len = 0;

        tracing::trace!(released, "doubly linked list cleared");
    }

    /// Alias for [`clear_list`](DList::clear_list).
    #[inline]
    pub fn clear(&mut self) {
        self.clear_list();
    }

    // ========================================================================
    // Output and iteration
    // ========================================================================

    /// Prints the values separated by spaces, followed by a newline.
    pub fn display(&self) {
        println!("{self}");
    }

    /// Writes what [`display`](DList::display) prints to `out`.
    pub fn display_to<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    /// Returns an iterator over the values, head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, S, K> {
        Iter {
            keys: self.keys(),
        }
    }

    /// Returns an iterator over node keys, head to tail.
    #[inline]
    pub fn keys(&self) -> Keys<'_, S, K> {
        Keys {
            storage: &self.storage,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Checks every structural invariant by walking the chain both ways.
    ///
    /// Always `true` for a list only mutated through its public API.
    pub fn links_consistent(&self) -> bool {
        if self.head.is_none() || self.tail.is_none() {
            return self.head.is_none() && self.tail.is_none() && self.len == 0;
        }

        let Some(head) = self.storage.get(self.head) else {
            return false;
        };
        let Some(tail) = self.storage.get(self.tail) else {
            return false;
        };
        if head.prev.is_some() || tail.next.is_some() {
            return false;
        }

        let mut forward = Vec::with_capacity(self.len);
        let mut prev = K::NONE;
        let mut key = self.head;
        while key.is_some() {
            let Some(node) = self.storage.get(key) else {
                return false;
            };
            if node.prev != prev || forward.len() > self.len {
                return false;
            }
            forward.push(key);
            prev = key;
            key = node.next;
        }
        if prev != self.tail || forward.len() != self.len {
            return false;
        }

        let mut count = 0;
        let mut key = self.tail;
        while key.is_some() && count < self.len {
            if forward[self.len - 1 - count] != key {
                return false;
            }
            key = self.node(key).prev;
            count += 1;
        }

        key.is_none() && count == self.len && self.storage.len() == self.len
    }

    // ========================================================================
    // Linking
    // ========================================================================

    #[inline]
    fn node(&self, key: K) -> &DNode<K> {
        debug_assert!(self.storage.get(key).is_some(), "dangling key {key:?}");
        // Safety: every key reachable from the anchors names a live node
        unsafe { self.storage.get_unchecked(key) }
    }

    #[inline]
    fn node_mut(&mut self, key: K) -> &mut DNode<K> {
        debug_assert!(self.storage.get(key).is_some(), "dangling key {key:?}");
        // Safety: every key reachable from the anchors names a live node
        unsafe { self.storage.get_unchecked_mut(key) }
    }

    /// Links a fresh node at the front.
    fn link_front(&mut self, key: K) {
        let head = self.head;
        let node = self.node_mut(key);
        node.prev = K::NONE;
        node.next = head;

        if head.is_some() {
            self.node_mut(head).prev = key;
        } else {
            self.tail = key;
        }

        self.head = key;
        self.len += 1;
    }

    /// Links a fresh node at the back.
    fn link_back(&mut self, key: K) {
        let tail = self.tail;
        let node = self.node_mut(key);
        node.prev = tail;
        node.next = K::NONE;

        if tail.is_some() {
            self.node_mut(tail).next = key;
        } else {
            self.head = key;
        }

        self.tail = key;
        self.len += 1;
    }

    /// Splices a fresh node in after `after`.
    fn link_after(&mut self, after: K, key: K) {
        let next = self.node(after).next;
        let node = self.node_mut(key);
        node.prev = after;
        node.next = next;

        self.node_mut(after).next = key;
        if next.is_some() {
            self.node_mut(next).prev = key;
        } else {
            self.tail = key;
        }

        self.len += 1;
    }

    /// Splices a fresh node in before `before`.
    fn link_before(&mut self, before: K, key: K) {
        let prev = self.node(before).prev;
        let node = self.node_mut(key);
        node.next = before;
        node.prev = prev;

        self.node_mut(before).prev = key;
        if prev.is_some() {
            self.node_mut(prev).next = key;
        } else {
            self.head = key;
        }

        self.len += 1;
    }

    /// Unlinks a node of this list and frees its slot.
    fn remove_linked(&mut self, key: K) -> i32 {
        let DNode { prev, next, .. } = *self.node(key);

        if prev.is_some() {
            self.node_mut(prev).next = next;
        } else {
            self.head = next;
        }

        if next.is_some() {
            self.node_mut(next).prev = prev;
        } else {
            self.tail = prev;
        }

        self.len -= 1;

        match self.storage.remove(key) {
            Some(node) => node.value,
            None => unreachable!("linked key {key:?} had no node"),
        }
    }
}

impl<S, K: Key> FromIterator<i32> for DList<S, K>
where
    S: Storage<DNode<K>, Key = K> + Default,
{
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = Self::default();
        for value in iter {
            list.insert_tail(value);
        }
        list
    }
}

impl<S, K: Key> Extend<i32> for DList<S, K>
where
    S: Storage<DNode<K>, Key = K>,
{
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.insert_tail(value);
        }
    }
}

impl<'a, S, K: Key> IntoIterator for &'a DList<S, K>
where
    S: Storage<DNode<K>, Key = K>,
{
    type Item = i32;
    type IntoIter = Iter<'a, S, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the values head to tail, separated by single spaces.
impl<S, K: Key> fmt::Display for DList<S, K>
where
    S: Storage<DNode<K>, Key = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl<S, K: Key> fmt::Debug for DList<S, K>
where
    S: Storage<DNode<K>, Key = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over node keys of a [`DList`].
pub struct Keys<'a, S, K: Key> {
    storage: &'a S,
    front: K,
    back: K,
    remaining: usize,
}

impl<S, K: Key> Iterator for Keys<'_, S, K>
where
    S: Storage<DNode<K>, Key = K>,
{
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<K> {
        if self.front.is_none() {
            return None;
        }

        let key = self.front;
        // Safety: list invariants guarantee front is valid
        let node = unsafe { self.storage.get_unchecked(key) };

        // Met in the middle
        if self.front == self.back {
            self.front = K::NONE;
            self.back = K::NONE;
        } else {
            self.front = node.next;
        }

        self.remaining -= 1;
        Some(key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S, K: Key> DoubleEndedIterator for Keys<'_, S, K>
where
    S: Storage<DNode<K>, Key = K>,
{
    #[inline]
    fn next_back(&mut self) -> Option<K> {
        if self.back.is_none() {
            return None;
        }

        let key = self.back;
        // Safety: list invariants guarantee back is valid
        let node = unsafe { self.storage.get_unchecked(key) };

        if self.front == self.back {
            self.front = K::NONE;
            self.back = K::NONE;
        } else {
            self.back = node.prev;
        }

        self.remaining -= 1;
        Some(key)
    }
}

impl<S, K: Key> ExactSizeIterator for Keys<'_, S, K> where S: Storage<DNode<K>, Key = K> {}

impl<S, K: Key> FusedIterator for Keys<'_, S, K> where S: Storage<DNode<K>, Key = K> {}

/// Iterator over the values of a [`DList`].
pub struct Iter<'a, S, K: Key> {
    keys: Keys<'a, S, K>,
}

impl<S, K: Key> Iterator for Iter<'_, S, K>
where
    S: Storage<DNode<K>, Key = K>,
{
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<i32> {
        let key = self.keys.next()?;
        // Safety: key came from the chain walk
        Some(unsafe { self.keys.storage.get_unchecked(key) }.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<S, K: Key> DoubleEndedIterator for Iter<'_, S, K>
where
    S: Storage<DNode<K>, Key = K>,
{
    #[inline]
    fn next_back(&mut self) -> Option<i32> {
        let key = self.keys.next_back()?;
        // Safety: key came from the chain walk
        Some(unsafe { self.keys.storage.get_unchecked(key) }.value)
    }
}

impl<S, K: Key> ExactSizeIterator for Iter<'_, S, K> where S: Storage<DNode<K>, Key = K> {}

impl<S, K: Key> FusedIterator for Iter<'_, S, K> where S: Storage<DNode<K>, Key = K> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<S, K: Key>(list: &DList<S, K>) -> Vec<i32>
    where
        S: Storage<DNode<K>, Key = K>,
    {
        let forward: Vec<_> = list.iter().collect();
        let mut backward: Vec<_> = list.iter().rev().collect();
        backward.reverse();
        assert_eq!(forward, backward);
        assert!(list.links_consistent());
        forward
    }

    #[test]
    fn new_is_empty() {
        let list = DList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
        assert!(list.links_consistent());
        assert_eq!(list.to_string(), "");
    }

    #[test]
    fn insert_head_sets_both_anchors_when_empty() {
        let mut list = DList::new();
        let key = list.insert_head(1);

        assert_eq!(list.head(), Some(key));
        assert_eq!(list.tail(), Some(key));
        assert_eq!(list.prev_key(key), None);
        assert_eq!(list.next_key(key), None);
        assert_eq!(values(&list), [1]);
    }

    #[test]
    fn insert_head_and_tail() {
        let mut list = DList::new();
        list.insert_head(13);
        list.insert_head(7);
        list.insert_head(10);
        assert_eq!(values(&list), [10, 7, 13]);

        list.insert_tail(11);
        assert_eq!(values(&list), [10, 7, 13, 11]);
        assert_eq!(list.front(), Some(10));
        assert_eq!(list.back(), Some(11));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn insert_tail_into_empty() {
        let mut list = DList::new();
        list.insert_tail(4);
        list.insert_tail(5);
        assert_eq!(values(&list), [4, 5]);
    }

    #[test]
    fn insert_element_by_index_all_branches() {
        let mut list: DList = [1, 3].into_iter().collect();

        list.insert_element_by_index(0, 0).unwrap();
        assert_eq!(list.len(), 3);
        list.insert_element_by_index(4, 3).unwrap();
        assert_eq!(list.len(), 4);
        list.insert_element_by_index(2, 2).unwrap();
        assert_eq!(list.len(), 5);

        assert_eq!(values(&list), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn insert_element_by_index_out_of_range() {
        let mut list: DList = [1, 2].into_iter().collect();

        assert_eq!(
            list.insert_element_by_index(9, 3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(values(&list), [1, 2]);
    }

    #[test]
    fn delete_head_and_tail() {
        let mut list: DList = [1, 2, 3].into_iter().collect();

        assert_eq!(list.delete_head(), Ok(1));
        assert_eq!(list.delete_tail(), Ok(3));
        assert_eq!(values(&list), [2]);

        assert_eq!(list.delete_tail(), Ok(2));
        assert!(list.is_empty());
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
        assert!(list.links_consistent());
    }

    #[test]
    fn delete_ends_of_empty_list() {
        let mut list = DList::new();
        assert_eq!(list.delete_head(), Err(Error::EmptyList));
        assert_eq!(list.delete_tail(), Err(Error::EmptyList));
        assert!(list.links_consistent());
    }

    #[test]
    fn delete_by_value_counts_once() {
        let mut list: DList = [10, 7, 13].into_iter().collect();

        list.delete(10).unwrap();
        assert_eq!(list.len(), 2);
        list.delete(13).unwrap();
        assert_eq!(list.len(), 1);
        list.delete(7).unwrap();
        assert_eq!(list.len(), 0);
        assert!(list.links_consistent());
    }

    #[test]
    fn delete_middle_and_first_occurrence() {
        let mut list: DList = [5, 6, 5, 6].into_iter().collect();

        list.delete(6).unwrap();
        assert_eq!(values(&list), [5, 5, 6]);
    }

    #[test]
    fn delete_missing_value() {
        let mut list: DList = [1, 2].into_iter().collect();
        assert_eq!(list.delete(3), Err(Error::NotFound(3)));
        assert_eq!(values(&list), [1, 2]);

        let mut empty = DList::new();
        assert_eq!(empty.delete(1), Err(Error::NotFound(1)));
    }

    #[test]
    fn insert_ordered_keeps_order() {
        let mut list: DList = [10, 13].into_iter().collect();

        list.insert_ordered(23);
        list.insert_ordered(67);
        list.insert_ordered(3);
        list.insert_ordered(11);
        list.insert_ordered(13);

        assert_eq!(values(&list), [3, 10, 11, 13, 13, 23, 67]);
        assert_eq!(list.len(), 7);
    }

    #[test]
    fn insert_ordered_into_empty() {
        let mut list = DList::new();
        let key = list.insert_ordered(42);
        assert_eq!(list.head(), Some(key));
        assert_eq!(list.tail(), Some(key));
        assert_eq!(values(&list), [42]);
    }

    #[test]
    fn delete_node_by_key() {
        let mut list = DList::new();
        let a = list.insert_tail(1);
        let b = list.insert_tail(2);
        let c = list.insert_tail(3);

        assert_eq!(list.delete_node(b), Some(2));
        assert_eq!(values(&list), [1, 3]);

        assert_eq!(list.delete_node(c), Some(3));
        assert_eq!(list.tail(), Some(a));

        assert_eq!(list.delete_node(a), Some(1));
        assert!(list.is_empty());

        // Stale key
        assert_eq!(list.delete_node(b), None);
        assert!(list.links_consistent());
    }

    #[test]
    fn keys_stay_valid_across_other_removals() {
        let mut list = DList::new();
        let a = list.insert_tail(1);
        let b = list.insert_tail(2);
        list.delete_head().unwrap();

        assert_eq!(list.get(a), None);
        assert_eq!(list.get(b), Some(2));
    }

    #[test]
    fn remove_duplicates_keeps_first_occurrence() {
        let mut list: DList = [1, 2, 1, 3, 2].into_iter().collect();
        list.remove_duplicates();
        assert_eq!(values(&list), [1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn remove_duplicates_adjacent_runs() {
        let mut list: DList = [4, 4, 4, 5, 5, 4, 6, 6].into_iter().collect();
        list.remove_duplicates();
        assert_eq!(values(&list), [4, 5, 6]);
    }

    #[test]
    fn remove_duplicates_trivial() {
        let mut empty = DList::new();
        empty.remove_duplicates();
        assert!(empty.is_empty());

        let mut same: DList = [7, 7].into_iter().collect();
        same.remove_duplicates();
        assert_eq!(values(&same), [7]);
    }

    #[test]
    fn clear_list_then_reuse() {
        let mut list: DList = (0..10).collect();
        list.clear_list();

        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.links_consistent());

        list.insert_head(20);
        assert_eq!(values(&list), [20]);
    }

    #[test]
    fn from_array() {
        let list = DList::from_array(Some(&[3, 1, 2])).unwrap();
        assert_eq!(values(&list), [3, 1, 2]);
        assert_eq!(list.len(), 3);

        assert!(matches!(DList::from_array(None), Err(Error::NullInput)));
        assert!(DList::from_array(Some(&[])).unwrap().is_empty());
    }

    #[test]
    fn display_output() {
        let list: DList = [10, 7, 13].into_iter().collect();

        let mut out = Vec::new();
        list.display_to(&mut out).unwrap();
        assert_eq!(out, b"10 7 13\n");

        let mut out = Vec::new();
        DList::new().display_to(&mut out).unwrap();
        assert_eq!(out, b"\n");

        assert_eq!(format!("{list:?}"), "[10, 7, 13]");
    }

    #[test]
    fn insert_head_then_delete_head_restores() {
        for original in [vec![], vec![8], vec![3, 1, 4, 1, 5]] {
            let mut list: DList = original.iter().copied().collect();
            let len = list.len();

            list.insert_head(-7);
            assert_eq!(list.front(), Some(-7));
            assert_eq!(list.delete_head(), Ok(-7));

            assert_eq!(values(&list), original);
            assert_eq!(list.len(), len);
            assert_eq!(list.front(), original.first().copied());
            assert_eq!(list.back(), original.last().copied());
        }
    }

    #[test]
    fn iter_reports_exact_len() {
        let list: DList = (1..=5).collect();
        let mut iter = list.iter();
        assert_eq!(iter.len(), 5);

        iter.next();
        iter.next_back();
        assert_eq!(iter.len(), 3);

        iter.by_ref().for_each(drop);
        assert_eq!(iter.len(), 0);
        assert_eq!(list.keys().len(), 5);
        assert_eq!(DList::new().iter().len(), 0);
    }

    #[test]
    fn iter_meets_in_the_middle() {
        let list: DList = (1..=5).collect();
        let mut iter = list.iter();

        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(5));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.next(), Some(3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn navigation() {
        let mut list = DList::new();
        let a = list.insert_tail(1);
        let b = list.insert_tail(2);

        assert_eq!(list.next_key(a), Some(b));
        assert_eq!(list.prev_key(b), Some(a));
        assert_eq!(list.prev_key(a), None);
        assert_eq!(list.next_key(b), None);
    }

    #[test]
    fn insert_then_delete_is_identity() {
        let original = [2, 4, 6, 8];
        for index in 0..=original.len() {
            let mut list: DList = original.into_iter().collect();
            let key = list.insert_element_by_index(99, index).unwrap();
            assert_eq!(list.iter().nth(index), Some(99));
            assert_eq!(list.delete_node(key), Some(99));
            assert_eq!(values(&list), original);
        }
    }

    #[test]
    fn with_storage_drops_foreign_nodes() {
        let mut storage: DListStorage = VecStorage::new();
        storage.insert(DNode::new(5));

        let list = DList::with_storage(storage);
        assert!(list.links_consistent());
        assert!(list.is_empty());
    }

    #[cfg(feature = "slab")]
    mod slab_tests {
        use super::*;

        #[test]
        fn slab_backed_list() {
            let mut list = SlabDList::default();
            list.insert_head(2);
            list.insert_head(1);
            list.insert_tail(3);
            list.insert_ordered(0);

            assert_eq!(values(&list), [0, 1, 2, 3]);
            assert_eq!(list.delete_tail(), Ok(3));
            list.delete(1).unwrap();
            assert_eq!(values(&list), [0, 2]);
        }

        #[test]
        fn slab_remove_duplicates() {
            let mut list: SlabDList = [1, 2, 1, 3, 2].into_iter().collect();
            list.remove_duplicates();
            assert_eq!(values(&list), [1, 2, 3]);
        }
    }
}
