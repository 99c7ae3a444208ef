//! This crate exposes two takes on the classic unbalanced Binary Search
//! Tree (BST), mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` will typically store some sort of
//! value (the value that was inserted, for example) and will sometimes have
//! child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value. In particular, inserting
//!    a value that is already present always grows the right subtree.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefit of these invariants is that searching for a value takes
//! `O(height)` (where `height` is defined as the longest path from the root
//! `Node` to a leaf `Node`). Neither tree in this crate rebalances itself,
//! so the height, and with it the worst case, is fully determined by
//! insertion order: inserting sorted input degenerates into a linked list.
//! BSTs also naturally support sorted iteration by visiting the left
//! subtree, then the subtree root, then the right subtree.
//!
//! Two implementations are provided:
//!
//! * [`linked`] - nodes wired together with owning child pointers and a
//!   non-owning pointer back to the parent, mutated in place.
//! * [`persistent`] - an immutable recursive enum where `insert` returns a
//!   new tree and every old version remains valid and untouched.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod linked;
pub mod persistent;

#[cfg(test)]
mod test;
