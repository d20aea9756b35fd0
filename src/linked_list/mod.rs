//! A singly linked list that owns its nodes.
//!
//! The list keeps a permanent before-begin sentinel in front of the first
//! element, so inserting or erasing "after" a position works the same way at
//! the head as anywhere else in the chain. Positions are expressed with
//! [`Cursor`] (read-only) and [`CursorMut`] (may insert and erase after
//! itself); plain traversal goes through [`Iter`] and [`IterMut`].
//!
//! # Examples
//!
//! ```
//! use forward_list::linked_list::SingleLinkedList;
//!
//! let mut list = SingleLinkedList::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_front(0);
//! assert_eq!(list.len(), 3);
//!
//! let mut cursor = list.begin_mut();
//! cursor.insert_after(10);
//! assert_eq!(cursor.current(), Some(&mut 10));
//!
//! let values: Vec<_> = list.iter().copied().collect();
//! assert_eq!(values, vec![0, 10, 1, 2]);
//!
//! let copy = list.clone();
//! assert_eq!(copy, list);
//! assert!(SingleLinkedList::from([0, 10, 1]) < copy);
//! ```
//!
//! # Complexity
//!
//! `push_front`, `pop_front`, `swap`, `len` and every cursor operation are
//! O(1). `push_back` walks the whole chain to find the tail and is O(n);
//! there is no cached tail pointer.

mod cursor;
mod iter;
mod list;
mod node;

#[cfg(test)]
mod tests;

pub use cursor::{Cursor, CursorMut};
pub use iter::{IntoIter, Iter, IterMut};
pub use list::{swap, SingleLinkedList};
