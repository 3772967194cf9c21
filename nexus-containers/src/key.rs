//! Node handles for arena-backed containers.
//!
//! A [`Key`] names a slot in a [`Storage`](crate::Storage) arena. Links
//! between nodes are keys rather than pointers, with [`Key::NONE`] standing
//! in for "no node".

/// Integer handle into a node arena.
///
/// # Example
///
/// ```
/// use nexus_containers::Key;
///
/// let key: u32 = 7;
/// assert!(key.is_some());
/// assert!(u32::NONE.is_none());
/// assert_eq!(u32::from_usize(3).as_usize(), 3);
/// ```
pub trait Key: Copy + Eq + core::fmt::Debug {
    /// Sentinel for an absent link.
    const NONE: Self;

    /// Converts an arena slot number into a key.
    fn from_usize(val: usize) -> Self;

    /// Returns the arena slot number.
    fn as_usize(&self) -> usize;

    /// Returns `true` if this is the sentinel.
    #[inline]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if this names a slot.
    #[inline]
    fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Converts to `Option`, mapping the sentinel to `None`.
    #[inline]
    fn into_option(self) -> Option<Self> {
        if self.is_none() { None } else { Some(self) }
    }
}

macro_rules! impl_key {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn from_usize(val: usize) -> Self {
                    debug_assert!(val < <$ty>::MAX as usize, "slot exceeds key range");
                    val as $ty
                }

                #[inline]
                fn as_usize(&self) -> usize {
                    *self as usize
                }
            }
        )*
    };
}

impl_key!(u16, u32, u64, usize);
