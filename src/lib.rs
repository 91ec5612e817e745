//! # Arbor: An Arena-Backed K-ary Tree
//!
//! This crate provides a generic, arity-bounded tree container whose whole
//! point is traversal: every traversal strategy is exposed as a restartable
//! cursor that can be created, advanced and dropped independently of every
//! other cursor over the same tree.
//!
//! ## Design Overview
//!
//! **Arena ownership**: the [`Tree`] owns every node in a flat arena
//! (`Vec<Node<T>>`) and hands out [`NodeId`] handles instead of references.
//! Handles are plain indices, so they are `Copy`, stay valid for the life of
//! the tree, and can never dangle. Structural links (the ordered child lists)
//! are stored as handles as well.
//!
//! **Bounded arity**: the branching factor `k` is fixed when the tree is
//! constructed (default 2) and never changes. Attaching a `(k+1)`-th child to
//! any node fails with [`Error::CapacityExceeded`].
//!
//! **Traversal cursors**: the tree itself is passive; all traversal
//! intelligence lives in the cursors of the [`iter`] module. Each cursor owns
//! a private frontier (a stack, a queue, or a binary heap) and emulates
//! recursive descent without recursion:
//!
//! - [`iter::PreOrderIter`] - parent before children, left to right
//! - [`iter::PostOrderIter`] - children before parent (binary trees)
//! - [`iter::InOrderIter`] - left subtree, node, right subtree (binary trees)
//! - [`iter::BfsIter`] - level by level; the canonical default order
//! - [`iter::DfsIter`] - stack-driven depth-first scan
//! - [`iter::HeapIter`] - values in non-decreasing order, shape discarded
//!
//! **Ordering strategies**: in-order and post-order have a precise meaning
//! only for binary trees. The tree records an [`OrderingStrategy`] at
//! construction time (derived from `k`, overridable through [`TreeConfig`]),
//! and cursors capture it once at creation instead of re-deriving `k == 2`
//! on every step. Above arity 2 both traversals deliberately fall back to a
//! depth-first scan; see the [`iter`] module docs for the exact contract.
//!
//! ## Tree Structure
//!
//! ```text
//!         Tree<T>
//!         ├─ config: k, ordering strategy
//!         ├─ root: Option<NodeId> ──────────┐
//!         └─ arena: Vec<Node<T>>            │
//!              ┌───────────────────────────┘
//!              ▼
//!         ┌─────────┐
//!         │ Node(1) │            children: [NodeId; ..k]
//!         └────┬────┘
//!        ┌─────┴──────┐
//!        ▼            ▼
//!   ┌─────────┐  ┌─────────┐
//!   │ Node(2) │  │ Node(3) │
//!   └────┬────┘  └────┬────┘
//!     ┌──┴──┐         │
//!     ▼     ▼         ▼
//!   Node(4) Node(5) Node(6)
//! ```
//!
//! ## Basic Usage
//!
//! ```
//! use arbor::Tree;
//!
//! let mut tree = Tree::new(); // binary
//! tree.add_root(1);
//! tree.add_sub_node(&1, 2).unwrap();
//! tree.add_sub_node(&1, 3).unwrap();
//! tree.add_sub_node(&2, 4).unwrap();
//! tree.add_sub_node(&2, 5).unwrap();
//! tree.add_sub_node(&3, 6).unwrap();
//!
//! let pre: Vec<i32> = tree.pre_order().map(|(_, v)| *v).collect();
//! assert_eq!(pre, [1, 2, 4, 5, 3, 6]);
//!
//! let bfs: Vec<i32> = tree.iter().map(|(_, v)| *v).collect();
//! assert_eq!(bfs, [1, 2, 3, 4, 5, 6]);
//! ```
//!
//! ## Mutation and Live Cursors
//!
//! Every cursor borrows the tree (`&Tree`) and every mutating operation takes
//! `&mut Tree`, so the classic precondition "do not mutate the structure
//! while a traversal is live" is enforced by the borrow checker at compile
//! time rather than left to runtime discipline. There is no interior
//! mutability and no locking; the container is single-threaded by design
//! (`Tree<T>` is still `Send`/`Sync` when `T` is, since a shared tree is
//! read-only).
//!
//! ## Payload Requirements
//!
//! The core asks very little of `T`: value-based parent lookup
//! ([`Tree::add_sub_node`], [`Tree::find`]) needs `T: PartialEq`, and the
//! heap view needs `T: Ord`. Everything else is available for any `T`.

use smallvec::SmallVec;

use std::fmt;

pub mod error;
pub mod iter;

#[cfg(test)]
mod util;

pub use error::{Error, Result};
pub use iter::{BfsIter, DfsIter, HeapIter, InOrderIter, PostOrderIter, PreOrderIter};

// ---------------------------------------------------------------------------
// Configuration Constants
// ---------------------------------------------------------------------------

/// Default branching factor: a binary tree.
const DEFAULT_ARITY: usize = 2;

/// Inline capacity of a node's child list. Child lists up to this length
/// live inside the node itself; larger arities spill to the heap.
const INLINE_CHILDREN: usize = 4;

// ---------------------------------------------------------------------------
// Handles
// ---------------------------------------------------------------------------

/// A stable handle to a node inside a [`Tree`]'s arena.
///
/// Handles are plain arena indices: cheap to copy, valid for the lifetime of
/// the tree that minted them, and meaningless in any other tree. Node
/// identity is the handle, not the payload - two nodes with equal values are
/// still distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
	/// Returns the underlying arena index.
	#[inline]
	pub fn index(self) -> usize {
		self.0 as usize
	}
}

// ---------------------------------------------------------------------------
// Ordering Strategy and Configuration
// ---------------------------------------------------------------------------

/// How the order-sensitive traversals (in-order, post-order) interpret the
/// tree.
///
/// Selected once at tree construction and captured by cursors at creation;
/// it is never re-derived mid-traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingStrategy {
	/// Classic binary-tree semantics: left subtree / node / right subtree
	/// for in-order, children before parent for post-order.
	Binary,
	/// General k-ary fallback: both traversals degrade to a depth-first
	/// scan, since neither has a canonical meaning above arity 2.
	General,
}

/// Construction-time configuration for a [`Tree`].
///
/// # Example
///
/// ```
/// use arbor::{OrderingStrategy, Tree, TreeConfig};
///
/// let cfg = TreeConfig::with_arity(3);
/// assert_eq!(cfg.ordering, OrderingStrategy::General);
///
/// let tree: Tree<i32> = Tree::with_config(cfg);
/// assert_eq!(tree.arity(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
	/// Maximum number of children per node (`k`). Fixed for the life of the
	/// tree.
	pub max_children: usize,
	/// Strategy for in-order and post-order traversal. Defaults to
	/// [`OrderingStrategy::Binary`] exactly when `max_children == 2`.
	pub ordering: OrderingStrategy,
	/// Permit the heap view on trees of any arity.
	///
	/// The heap view is a binary min-heap over values and is independent of
	/// tree shape, but by convention it is only offered on trees declared
	/// binary; constructing it elsewhere fails with
	/// [`Error::UnsupportedArity`]. Set this to `true` to lift the
	/// restriction.
	pub heap_over_any_arity: bool,
}

impl Default for TreeConfig {
	fn default() -> Self {
		TreeConfig::with_arity(DEFAULT_ARITY)
	}
}

impl TreeConfig {
	/// Configuration for a tree with branching factor `k`, with the ordering
	/// strategy derived from `k`.
	pub fn with_arity(k: usize) -> Self {
		TreeConfig {
			max_children: k,
			ordering: if k == 2 { OrderingStrategy::Binary } else { OrderingStrategy::General },
			heap_over_any_arity: false,
		}
	}
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A single node: an owned value plus an ordered, bounded list of child
/// handles.
///
/// Nodes live inside the tree's arena; they are read through
/// [`Tree::get`] / [`Tree::value`] / [`Tree::children`] and mutated only
/// through the tree's structural operations.
#[derive(Debug, Clone)]
pub struct Node<T> {
	value: T,
	children: SmallVec<[NodeId; INLINE_CHILDREN]>,
}

impl<T> Node<T> {
	fn new(value: T) -> Self {
		Node {
			value,
			children: SmallVec::new(),
		}
	}

	/// Returns the stored value.
	#[inline]
	pub fn value(&self) -> &T {
		&self.value
	}

	/// Returns the children in sibling order (insertion order).
	#[inline]
	pub fn children(&self) -> &[NodeId] {
		&self.children
	}
}

// ---------------------------------------------------------------------------
// Tree
// ---------------------------------------------------------------------------

/// An arity-bounded tree that owns its nodes and hands out traversal
/// cursors.
///
/// The tree is passive after construction: it records structure and arity,
/// while every traversal is driven by a cursor from the [`iter`] module.
/// Cursors are independent - each owns a private frontier, and advancing one
/// never affects another.
///
/// # Example
///
/// ```
/// use arbor::Tree;
///
/// let mut tree = Tree::with_arity(3);
/// tree.add_root("root");
/// tree.add_sub_node(&"root", "a").unwrap();
/// tree.add_sub_node(&"root", "b").unwrap();
/// tree.add_sub_node(&"a", "a1").unwrap();
///
/// let order: Vec<&str> = tree.pre_order().map(|(_, v)| *v).collect();
/// assert_eq!(order, ["root", "a", "a1", "b"]);
/// ```
pub struct Tree<T> {
	/// Arena storage for every node ever created in this tree. Nodes are
	/// never deallocated individually; a detached subtree simply becomes
	/// unreachable.
	nodes: Vec<Node<T>>,
	/// Handle of the current root, unset until [`Tree::add_root`].
	root: Option<NodeId>,
	/// Construction-time configuration; immutable afterwards.
	config: TreeConfig,
}

impl<T> Default for Tree<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Tree<T> {
	// -----------------------------------------------------------------------
	// Construction
	// -----------------------------------------------------------------------

	/// Creates a new, empty binary tree (`k == 2`).
	///
	/// No allocation happens until the first node is added.
	pub fn new() -> Self {
		Self::with_config(TreeConfig::default())
	}

	/// Creates a new, empty tree with branching factor `k`.
	///
	/// The ordering strategy is derived from `k`: binary semantics for
	/// `k == 2`, the general depth-first fallback otherwise.
	pub fn with_arity(k: usize) -> Self {
		Self::with_config(TreeConfig::with_arity(k))
	}

	/// Creates a new, empty tree from an explicit configuration.
	pub fn with_config(config: TreeConfig) -> Self {
		Tree {
			nodes: Vec::new(),
			root: None,
			config,
		}
	}

	// -----------------------------------------------------------------------
	// Metadata
	// -----------------------------------------------------------------------

	/// The branching factor `k` fixed at construction.
	#[inline]
	pub fn arity(&self) -> usize {
		self.config.max_children
	}

	/// The ordering strategy fixed at construction.
	#[inline]
	pub fn ordering(&self) -> OrderingStrategy {
		self.config.ordering
	}

	/// The full construction-time configuration.
	#[inline]
	pub fn config(&self) -> &TreeConfig {
		&self.config
	}

	/// Handle of the root node, or `None` for an empty tree.
	#[inline]
	pub fn root(&self) -> Option<NodeId> {
		self.root
	}

	/// `true` when no root has been set.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.root.is_none()
	}

	/// Number of nodes reachable from the root.
	///
	/// Counted by traversal, so this is O(n). Nodes detached by a root
	/// overwrite or a child replacement remain in the arena but are not
	/// counted.
	pub fn len(&self) -> usize {
		self.bfs().count()
	}

	// -----------------------------------------------------------------------
	// Read Access
	// -----------------------------------------------------------------------

	/// Returns the node behind a handle, or `None` for a handle this tree
	/// never minted.
	#[inline]
	pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
		self.nodes.get(id.index())
	}

	/// Returns the value stored at `id`.
	#[inline]
	pub fn value(&self, id: NodeId) -> Option<&T> {
		self.get(id).map(Node::value)
	}

	/// Returns the children of `id` in sibling order; empty for a leaf or
	/// an unknown handle.
	#[inline]
	pub fn children(&self, id: NodeId) -> &[NodeId] {
		self.get(id).map(Node::children).unwrap_or(&[])
	}

	/// Internal access for cursors: handles held in a frontier were minted
	/// by this tree and are always in range.
	#[inline]
	pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
		&self.nodes[id.index()]
	}

	// -----------------------------------------------------------------------
	// Structural Mutation
	// -----------------------------------------------------------------------

	/// Allocates a detached node holding `value` and returns its handle.
	///
	/// The node is not reachable from the root until it is attached with
	/// [`Tree::attach_child`] or [`Tree::set_child`].
	pub fn new_node(&mut self, value: T) -> NodeId {
		let id = NodeId(self.nodes.len() as u32);
		self.nodes.push(Node::new(value));
		id
	}

	/// Sets the root of the tree, unconditionally.
	///
	/// A previous root and its subtree are not torn down; they stay in the
	/// arena, detached and unreachable. Reusing their handles through
	/// [`Tree::attach_child`] is the caller's responsibility.
	pub fn add_root(&mut self, value: T) -> NodeId {
		let id = self.new_node(value);
		self.root = Some(id);
		id
	}

	/// Allocates a node holding `value` and appends it to `parent`'s child
	/// list.
	///
	/// # Errors
	///
	/// - [`Error::NullChild`] if `parent` is not a handle of this tree.
	/// - [`Error::CapacityExceeded`] if `parent` already has `k` children.
	///   The value is not allocated in that case; a failed attach leaves the
	///   tree exactly as it was.
	pub fn add_child(&mut self, parent: NodeId, value: T) -> Result<NodeId> {
		self.check_capacity(parent)?;
		let id = self.new_node(value);
		self.nodes[parent.index()].children.push(id);
		Ok(id)
	}

	/// Appends an existing (typically detached) node to `parent`'s child
	/// list.
	///
	/// The caller must not attach a node that is already reachable from the
	/// root: the structure is a tree, not a DAG, and a second incoming edge
	/// (or an edge back to an ancestor) makes every traversal visit the
	/// subtree repeatedly or loop.
	///
	/// # Errors
	///
	/// - [`Error::NullChild`] if either handle is not from this tree.
	/// - [`Error::CapacityExceeded`] if `parent` already has `k` children.
	pub fn attach_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
		self.check_handle(child)?;
		self.check_capacity(parent)?;
		self.nodes[parent.index()].children.push(child);
		Ok(())
	}

	/// Replaces the child at `index` in `parent`'s child list.
	///
	/// The list length is unchanged; the displaced subtree becomes
	/// unreachable.
	///
	/// # Errors
	///
	/// - [`Error::NullChild`] if either handle is not from this tree.
	/// - [`Error::IndexOutOfRange`] if `index >= children(parent).len()`.
	pub fn set_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> Result<()> {
		self.check_handle(parent)?;
		self.check_handle(child)?;
		let len = self.nodes[parent.index()].children.len();
		if index >= len {
			return Err(Error::IndexOutOfRange { index, len });
		}
		self.nodes[parent.index()].children[index] = child;
		Ok(())
	}

	fn check_handle(&self, id: NodeId) -> Result<()> {
		if id.index() < self.nodes.len() {
			Ok(())
		} else {
			Err(Error::NullChild(id))
		}
	}

	/// Validates `parent` and its remaining capacity without touching the
	/// arena, so rejected attaches have no side effects.
	fn check_capacity(&self, parent: NodeId) -> Result<()> {
		self.check_handle(parent)?;
		let limit = self.config.max_children;
		if self.nodes[parent.index()].children.len() >= limit {
			return Err(Error::CapacityExceeded { limit });
		}
		Ok(())
	}

	// -----------------------------------------------------------------------
	// Traversal Factories
	// -----------------------------------------------------------------------

	/// Pre-order cursor: parent before children, siblings left to right.
	pub fn pre_order(&self) -> PreOrderIter<'_, T> {
		PreOrderIter::new(self)
	}

	/// Post-order cursor. Binary trees get true post-order; general trees
	/// get the documented depth-first fallback (see [`iter::PostOrderIter`]).
	pub fn post_order(&self) -> PostOrderIter<'_, T> {
		PostOrderIter::new(self)
	}

	/// In-order cursor. Binary trees get classic in-order; general trees
	/// get the documented depth-first fallback (see [`iter::InOrderIter`]).
	pub fn in_order(&self) -> InOrderIter<'_, T> {
		InOrderIter::new(self)
	}

	/// Breadth-first cursor: level by level, siblings left to right.
	pub fn bfs(&self) -> BfsIter<'_, T> {
		BfsIter::new(self)
	}

	/// Depth-first cursor; behaviorally identical to [`Tree::pre_order`]
	/// but a separately named traversal with its own frontier.
	pub fn dfs(&self) -> DfsIter<'_, T> {
		DfsIter::new(self)
	}

	/// The canonical default iteration order: breadth-first.
	pub fn iter(&self) -> BfsIter<'_, T> {
		self.bfs()
	}
}

impl<T: PartialEq> Tree<T> {
	// -----------------------------------------------------------------------
	// Value-Based Lookup
	// -----------------------------------------------------------------------

	/// Finds the first node (in pre-order) whose value equals `value`.
	pub fn find(&self, value: &T) -> Option<NodeId> {
		self.pre_order().find(|(_, v)| *v == value).map(|(id, _)| id)
	}

	/// Attaches a new child under the first node whose value equals
	/// `parent_value`.
	///
	/// The parent is located by a pre-order search comparing values for
	/// equality; with duplicate values the first pre-order match wins.
	///
	/// # Errors
	///
	/// - [`Error::RootNotSet`] if the tree has no root.
	/// - [`Error::ParentNotFound`] if no node holds an equal value.
	/// - [`Error::CapacityExceeded`] if the located parent is full.
	///
	/// # Example
	///
	/// ```
	/// use arbor::{Error, Tree};
	///
	/// let mut tree = Tree::new();
	/// assert_eq!(tree.add_sub_node(&1, 2), Err(Error::RootNotSet));
	///
	/// tree.add_root(1);
	/// tree.add_sub_node(&1, 2).unwrap();
	/// assert_eq!(tree.add_sub_node(&9, 3), Err(Error::ParentNotFound));
	/// ```
	pub fn add_sub_node(&mut self, parent_value: &T, value: T) -> Result<NodeId> {
		if self.root.is_none() {
			return Err(Error::RootNotSet);
		}
		let parent = self.find(parent_value).ok_or(Error::ParentNotFound)?;
		self.add_child(parent, value)
	}
}

impl<T: Ord> Tree<T> {
	/// Heap-ordered view: yields all reachable values in non-decreasing
	/// order, discarding the tree shape.
	///
	/// The view is built from a full depth-first flattening at construction
	/// time; the borrow it holds keeps the tree immutable while it is live.
	///
	/// # Errors
	///
	/// [`Error::UnsupportedArity`] for a non-binary tree, unless
	/// [`TreeConfig::heap_over_any_arity`] was set.
	pub fn heap(&self) -> Result<HeapIter<'_, T>> {
		HeapIter::new(self)
	}
}

impl<'t, T> IntoIterator for &'t Tree<T> {
	type Item = (NodeId, &'t T);
	type IntoIter = BfsIter<'t, T>;

	/// Iterating a tree without choosing a strategy yields breadth-first
	/// order.
	fn into_iter(self) -> Self::IntoIter {
		self.bfs()
	}
}

// ---------------------------------------------------------------------------
// Debug Rendering
// ---------------------------------------------------------------------------

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
	/// Indented structural dump. Graphical rendering is out of scope for
	/// the container; external renderers consume [`Tree::root`],
	/// [`Tree::value`] and [`Tree::children`] instead.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Tree(k={})", self.arity())?;
		if let Some(root) = self.root {
			self.fmt_node(f, root, 1)?;
		}
		Ok(())
	}
}

impl<T: fmt::Debug> Tree<T> {
	fn fmt_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
		let node = self.node(id);
		writeln!(f, "{:indent$}{:?}", "", node.value(), indent = depth * 2)?;
		for &child in node.children() {
			self.fmt_node(f, child, depth + 1)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::util::{sample_tree, Complex};

	// -----------------------------------------------------------------------
	// Structural Mutation Tests
	// -----------------------------------------------------------------------

	#[test]
	fn add_root_and_children() {
		let mut tree = Tree::new();
		let root = tree.add_root(1);

		assert_eq!(tree.root(), Some(root));
		assert_eq!(tree.value(root), Some(&1));
		assert!(tree.children(root).is_empty());

		let a = tree.add_child(root, 2).unwrap();
		let b = tree.add_child(root, 3).unwrap();

		assert_eq!(tree.children(root), [a, b]);
		assert_eq!(tree.len(), 3);
	}

	#[test]
	fn capacity_is_enforced() {
		let mut tree = Tree::new(); // k == 2
		let root = tree.add_root(0);

		tree.add_child(root, 1).unwrap();
		tree.add_child(root, 2).unwrap();

		assert_eq!(tree.add_child(root, 3), Err(Error::CapacityExceeded { limit: 2 }));
		// The rejected value must not linger in the arena.
		assert_eq!(tree.len(), 3);
	}

	#[test]
	fn add_sub_node_errors() {
		let mut tree = Tree::new();
		assert_eq!(tree.add_sub_node(&1, 2), Err(Error::RootNotSet));

		tree.add_root(1);
		assert_eq!(tree.add_sub_node(&42, 2), Err(Error::ParentNotFound));

		tree.add_sub_node(&1, 2).unwrap();
		tree.add_sub_node(&1, 3).unwrap();
		assert_eq!(tree.add_sub_node(&1, 4), Err(Error::CapacityExceeded { limit: 2 }));
	}

	#[test]
	fn add_sub_node_binds_first_preorder_match() {
		// Both children hold the value 7; the attachment must land under
		// the left one, which pre-order visits first.
		let mut tree = Tree::with_arity(3);
		let root = tree.add_root(1);
		let left = tree.add_child(root, 7).unwrap();
		let right = tree.add_child(root, 7).unwrap();

		let id = tree.add_sub_node(&7, 99).unwrap();
		assert_eq!(tree.children(left), [id]);
		assert!(tree.children(right).is_empty());
	}

	#[test]
	fn set_child_replaces_in_place() {
		let mut tree = Tree::new();
		let root = tree.add_root(1);
		let a = tree.add_child(root, 2).unwrap();
		let b = tree.add_child(root, 3).unwrap();

		let replacement = tree.new_node(4);
		tree.set_child(root, 0, replacement).unwrap();

		assert_eq!(tree.children(root), [replacement, b]);
		assert_eq!(tree.children(root).len(), 2);
		// The displaced subtree is unreachable but its handle stays valid.
		assert_eq!(tree.value(a), Some(&2));

		assert_eq!(
			tree.set_child(root, 2, replacement),
			Err(Error::IndexOutOfRange { index: 2, len: 2 })
		);
	}

	#[test]
	fn foreign_handles_are_rejected() {
		let mut tree = Tree::new();
		let root = tree.add_root(1);

		let mut other: Tree<i32> = Tree::new();
		other.add_root(1);
		let foreign = other.add_child(other.root().unwrap(), 2).unwrap();
		let far = other.add_child(foreign, 3).unwrap();

		// `far` indexes past the single-node arena of `tree`.
		assert_eq!(tree.attach_child(root, far), Err(Error::NullChild(far)));
		assert_eq!(tree.set_child(root, 0, far), Err(Error::NullChild(far)));
	}

	#[test]
	fn root_overwrite_detaches_old_subtree() {
		let mut tree = Tree::new();
		let old_root = tree.add_root(1);
		tree.add_child(old_root, 2).unwrap();
		assert_eq!(tree.len(), 2);

		tree.add_root(10);
		assert_eq!(tree.len(), 1);
		// Old handles remain readable.
		assert_eq!(tree.value(old_root), Some(&1));
	}

	#[test]
	fn attach_detached_subtree() {
		let mut tree = Tree::new();
		let root = tree.add_root(1);

		// Build a detached subtree, then hook it in.
		let sub = tree.new_node(2);
		let leaf = tree.new_node(3);
		tree.attach_child(sub, leaf).unwrap();
		assert_eq!(tree.len(), 1);

		tree.attach_child(root, sub).unwrap();
		assert_eq!(tree.len(), 3);
	}

	// -----------------------------------------------------------------------
	// Lookup Tests
	// -----------------------------------------------------------------------

	#[test]
	fn find_first_preorder_match() {
		let mut tree = Tree::new();
		let root = tree.add_root("a");
		let b = tree.add_child(root, "b").unwrap();
		tree.add_child(root, "b").unwrap();

		assert_eq!(tree.find(&"b"), Some(b));
		assert_eq!(tree.find(&"zzz"), None);
	}

	// -----------------------------------------------------------------------
	// Fixture and Payload Tests
	// -----------------------------------------------------------------------

	#[test]
	fn fixture_roundtrip() {
		let tree = sample_tree(
			r#"{
				"arity": 2,
				"root": {
					"value": 1,
					"children": [
						{ "value": 2, "children": [{ "value": 4 }, { "value": 5 }] },
						{ "value": 3, "children": [{ "value": 6 }] }
					]
				}
			}"#,
		);

		assert_eq!(tree.arity(), 2);
		assert_eq!(tree.len(), 6);
		let bfs: Vec<i64> = tree.iter().map(|(_, v)| *v).collect();
		assert_eq!(bfs, [1, 2, 3, 4, 5, 6]);
	}

	#[test]
	fn complex_payload() {
		let mut tree = Tree::new();
		tree.add_root(Complex::new(1.0, 1.0));
		tree.add_sub_node(&Complex::new(1.0, 1.0), Complex::new(0.5, 2.0)).unwrap();
		tree.add_sub_node(&Complex::new(1.0, 1.0), Complex::new(1.0, 0.5)).unwrap();

		// Ordered by real part first, then imaginary.
		let sorted: Vec<String> =
			tree.heap().unwrap().map(|(_, v)| v.to_string()).collect();
		assert_eq!(sorted, ["0.5+2i", "1+0.5i", "1+1i"]);
	}

	// -----------------------------------------------------------------------
	// Rendering Tests
	// -----------------------------------------------------------------------

	#[test]
	fn debug_renders_structure() {
		let mut tree = Tree::new();
		tree.add_root(1);
		tree.add_sub_node(&1, 2).unwrap();
		tree.add_sub_node(&2, 3).unwrap();

		let out = format!("{tree:?}");
		assert_eq!(out, "Tree(k=2)\n  1\n    2\n      3\n");
	}

	#[test]
	fn debug_renders_empty_tree() {
		let tree: Tree<i32> = Tree::new();
		assert_eq!(format!("{tree:?}"), "Tree(k=2)\n");
	}
}
