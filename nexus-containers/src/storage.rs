//! Node arenas with stable keys.
//!
//! Linked containers keep their nodes in a [`Storage`] and link them by
//! [`Key`]. A key stays valid until its slot is removed, and removed slots are
//! recycled by later inserts. This keeps the doubly linked list free of
//! reference cycles: the arena owns every node, links are plain integers.
//!
//! # Implementations
//!
//! - [`VecStorage`] - growable `Vec`-backed arena with a free list (this crate)
//! - `slab::Slab<T>` - the `slab` crate's arena (feature `slab`)

use crate::Key;

/// Arena of values addressed by stable keys.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Stable keys**: a key remains valid until explicitly removed
/// - **O(1)** insert, remove, get
/// - **Slot reuse**: removed slots can be handed out again
pub trait Storage<T> {
    /// Key type naming a slot.
    type Key: Key;

    /// Inserts a value, returning its key.
    fn insert(&mut self, value: T) -> Self::Key;

    /// Removes and returns the value at `key`, if occupied.
    fn remove(&mut self, key: Self::Key) -> Option<T>;

    /// Returns a reference to the value at `key`, if occupied.
    fn get(&self, key: Self::Key) -> Option<&T>;

    /// Returns a mutable reference to the value at `key`, if occupied.
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T>;

    /// Returns a reference without checking occupancy.
    ///
    /// # Safety
    ///
    /// `key` must name an occupied slot.
    unsafe fn get_unchecked(&self, key: Self::Key) -> &T;

    /// Returns a mutable reference without checking occupancy.
    ///
    /// # Safety
    ///
    /// `key` must name an occupied slot.
    unsafe fn get_unchecked_mut(&mut self, key: Self::Key) -> &mut T;

    /// Drops every value and forgets all keys.
    fn clear(&mut self);

    /// Returns the number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slot is occupied.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// VecStorage - growable arena, intrusive free list
// =============================================================================

#[derive(Debug, Clone)]
enum Entry<T, K> {
    Occupied(T),
    /// Link to the next vacant slot.
    Vacant(K),
}

/// Growable arena backed by a `Vec`.
///
/// Vacant slots form a LIFO free list threaded through the entries, so the
/// most recently removed key is the next one handed out.
///
/// # Example
///
/// ```
/// use nexus_containers::{Storage, VecStorage};
///
/// let mut storage: VecStorage<&str> = VecStorage::with_capacity(4);
/// let a = storage.insert("a");
/// let b = storage.insert("b");
///
/// assert_eq!(storage.remove(a), Some("a"));
/// assert_eq!(storage.get(b), Some(&"b"));
///
/// // Slot reuse
/// assert_eq!(storage.insert("c"), a);
/// ```
#[derive(Debug, Clone)]
pub struct VecStorage<T, K: Key = u32> {
    entries: Vec<Entry<T, K>>,
    free_head: K,
    len: usize,
}

impl<T, K: Key> VecStorage<T, K> {
    /// Creates an empty arena without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            free_head: K::NONE,
            len: 0,
        }
    }

    /// Creates an empty arena with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            free_head: K::NONE,
            len: 0,
        }
    }

    /// Returns the number of slots allocated, occupied or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }
}

impl<T, K: Key> Default for VecStorage<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Key> Storage<T> for VecStorage<T, K> {
    type Key = K;

    fn insert(&mut self, value: T) -> K {
        if self.free_head.is_some() {
            let key = self.free_head;
            let slot = &mut self.entries[key.as_usize()];
            if let Entry::Vacant(next) = *slot {
                self.free_head = next;
            } else {
                debug_assert!(false, "free list points at an occupied slot");
            }
            *slot = Entry::Occupied(value);
            self.len += 1;
            return key;
        }

        assert!(
            self.entries.len() < K::NONE.as_usize(),
            "storage exceeds key type maximum"
        );
        let key = K::from_usize(self.entries.len());
        self.entries.push(Entry::Occupied(value));
        self.len += 1;
        key
    }

    fn remove(&mut self, key: K) -> Option<T> {
        if key.is_none() {
            return None;
        }
        let slot = self.entries.get_mut(key.as_usize())?;
        if let Entry::Vacant(_) = slot {
            return None;
        }

        let old = core::mem::replace(slot, Entry::Vacant(self.free_head));
        self.free_head = key;
        self.len -= 1;

        match old {
            Entry::Occupied(value) => Some(value),
            Entry::Vacant(_) => None,
        }
    }

    #[inline]
    fn get(&self, key: K) -> Option<&T> {
        if key.is_none() {
            return None;
        }
        match self.entries.get(key.as_usize())? {
            Entry::Occupied(value) => Some(value),
            Entry::Vacant(_) => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, key: K) -> Option<&mut T> {
        if key.is_none() {
            return None;
        }
        match self.entries.get_mut(key.as_usize())? {
            Entry::Occupied(value) => Some(value),
            Entry::Vacant(_) => None,
        }
    }

    #[inline]
    unsafe fn get_unchecked(&self, key: K) -> &T {
        // Safety: caller guarantees key is in bounds and occupied
        match unsafe { self.entries.get_unchecked(key.as_usize()) } {
            Entry::Occupied(value) => value,
            Entry::Vacant(_) => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    #[inline]
    unsafe fn get_unchecked_mut(&mut self, key: K) -> &mut T {
        // Safety: caller guarantees key is in bounds and occupied
        match unsafe { self.entries.get_unchecked_mut(key.as_usize()) } {
            Entry::Occupied(value) => value,
            Entry::Vacant(_) => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.free_head = K::NONE;
        self.len = 0;
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

#[cfg(feature = "slab")]
impl<T> Storage<T> for slab::Slab<T> {
    type Key = usize;

    #[inline]
    fn insert(&mut self, value: T) -> usize {
        slab::Slab::insert(self, value)
    }

    #[inline]
    fn remove(&mut self, key: usize) -> Option<T> {
        self.try_remove(key)
    }

    #[inline]
    fn get(&self, key: usize) -> Option<&T> {
        slab::Slab::get(self, key)
    }

    #[inline]
    fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        slab::Slab::get_mut(self, key)
    }

    #[inline]
    unsafe fn get_unchecked(&self, key: usize) -> &T {
        unsafe { slab::Slab::get_unchecked(self, key) }
    }

    #[inline]
    unsafe fn get_unchecked_mut(&mut self, key: usize) -> &mut T {
        unsafe { slab::Slab::get_unchecked_mut(self, key) }
    }

    #[inline]
    fn clear(&mut self) {
        slab::Slab::clear(self);
    }

    #[inline]
    fn len(&self) -> usize {
        slab::Slab::len(self)
    }
}
