//! Small classic containers: a bag, a growable array and two linked lists.
//!
//! # Containers
//!
//! | Container | Elements | Shape | Key Operations |
//! |-----------|----------|-------|----------------|
//! | [`Bag`] | any `E` | singly linked, grows at the front | O(1) add, O(n) contains |
//! | [`DynArray`] | any `E` | slotted buffer, doubling growth | amortized O(1) add, O(n) remove |
//! | [`SList`] | `i32` | singly linked, head anchor | O(p) positional insert/delete |
//! | [`DList`] | `i32` | doubly linked arena, head + tail anchors | O(1) at both ends and by key |
//!
//! # Errors
//!
//! Every fallible operation returns [`Result`] with an [`Error`]. A failed
//! call leaves the container exactly as it was.
//!
//! ```
//! use nexus_containers::{DynArray, Error};
//!
//! let mut array: DynArray<u32> = DynArray::new();
//! array.add(1);
//!
//! assert_eq!(array.remove(3), Err(Error::IndexOutOfRange { index: 3, len: 1 }));
//! assert_eq!(array.len(), 1);
//! ```
//!
//! # Arena-Backed Lists
//!
//! [`DList`] keeps its nodes in a [`Storage`] arena and links them by
//! [`Key`], so there are no reference cycles and unlinking never touches the
//! allocator. Inserts hand back the node's key:
//!
//! ```
//! use nexus_containers::DList;
//!
//! let mut list = DList::new();
//! list.insert_tail(1);
//! let key = list.insert_tail(2);
//! list.insert_tail(3);
//!
//! // O(1) removal from anywhere
//! assert_eq!(list.delete_node(key), Some(2));
//! assert_eq!(list.to_string(), "1 3");
//! ```
//!
//! # Logging
//!
//! Containers emit [`tracing`](https://docs.rs/tracing) events on resizes,
//! bulk clears and duplicate removal. Nothing is logged per element.
//!
//! # Feature Flags
//!
//! - `slab` - Enable [`Storage`] impl for `slab::Slab` and the `SlabDList` alias

#![warn(missing_docs)]

pub mod bag;
pub mod dlist;
pub mod dyn_array;
pub mod error;
pub mod key;
pub mod slist;
pub mod storage;

pub use bag::Bag;
pub use dlist::{DList, DListStorage, DNode};
pub use dyn_array::{DEFAULT_CAPACITY, DynArray};
pub use error::{Error, Result};
pub use key::Key;
pub use slist::SList;
pub use storage::{Storage, VecStorage};

#[cfg(feature = "slab")]
pub use dlist::SlabDList;
