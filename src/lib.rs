//! A singly linked list with a permanent before-begin sentinel.
//!
//! See [`linked_list`] for the container, its cursors and iterators.
#![no_std]

extern crate alloc;

pub mod linked_list;

pub use linked_list::SingleLinkedList;
