//! # Error Types for the K-ary Tree
//!
//! This module defines the errors surfaced by structural mutation and by
//! view construction on a [`Tree`](crate::Tree).
//!
//! ## Error Handling Strategy
//!
//! Every operation that can fail is synchronous and deterministic, and every
//! failure path leaves the tree unchanged. There is no partial application:
//! an attachment either fully succeeds or the caller gets an error and the
//! structure is exactly as it was before the call. No retry logic exists or
//! is needed.
//!
//! ## Common Patterns
//!
//! Structural mutation propagates errors with `?`:
//!
//! ```
//! use arbor::{Tree, Result};
//!
//! fn build() -> Result<Tree<i32>> {
//! 	let mut tree = Tree::new();
//! 	tree.add_root(1);
//! 	tree.add_sub_node(&1, 2)?;
//! 	tree.add_sub_node(&1, 3)?;
//! 	Ok(tree)
//! }
//! # build().unwrap();
//! ```
//!
//! ## A Note on Type Mismatches
//!
//! A dynamically typed rendition of this container would need a runtime
//! guard against attaching a child with an incompatible payload type. Here
//! the tree is parameterized once over `T`, so a heterogeneous attachment is
//! a compile error and no runtime variant exists for it.

use thiserror::Error;

use crate::NodeId;

/// Errors that can occur during tree mutation or view construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// `add_sub_node` was called before any root was set.
	///
	/// A tree without a root has no nodes to search, so there is no parent
	/// to attach under. Call [`Tree::add_root`](crate::Tree::add_root) first.
	#[error("root not set")]
	RootNotSet,

	/// No node reachable from the root compares equal to the requested
	/// parent value.
	///
	/// The lookup is a pre-order search by value equality; when several
	/// nodes share a value the first one in pre-order is the match, so this
	/// error means not even one equal value exists in the tree.
	#[error("parent node not found")]
	ParentNotFound,

	/// Attaching another child would exceed the tree's branching factor.
	///
	/// Each node accepts at most `k` children, where `k` is fixed when the
	/// tree is constructed. The rejected child is not attached and the
	/// parent's child list is unchanged.
	#[error("maximum of {limit} children exceeded")]
	CapacityExceeded {
		/// The tree's branching factor `k`.
		limit: usize,
	},

	/// A `NodeId` handle does not refer to a node in this tree's arena.
	///
	/// This is the arena analogue of a null child pointer: the handle is
	/// out of range for the arena, typically because it was minted by a
	/// different tree.
	#[error("handle {0:?} does not refer to a node in this tree")]
	NullChild(NodeId),

	/// `set_child` was called with an index past the end of the child list.
	///
	/// Replacement only overwrites an existing slot; it never extends the
	/// list.
	#[error("child index {index} out of range for {len} children")]
	IndexOutOfRange {
		/// The requested slot.
		index: usize,
		/// The current number of children.
		len: usize,
	},

	/// A view was requested on a branching factor it does not support.
	///
	/// The heap view is defined as a binary-heap ordering and by default is
	/// only offered on trees declared binary; see
	/// [`TreeConfig`](crate::TreeConfig) to lift the restriction.
	#[error("operation not supported for arity {arity}")]
	UnsupportedArity {
		/// The tree's branching factor `k`.
		arity: usize,
	},
}

/// A Result type alias using our custom Error type.
pub type Result<T> = std::result::Result<T, Error>;
