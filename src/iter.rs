//! Traversal cursors for the [`Tree`] data structure.
//!
//! Every cursor in this module is a small state machine over an explicit
//! frontier - a stack, a queue, or a binary heap of [`NodeId`] handles -
//! that emulates recursive descent without recursion. Cursors are produced
//! by the factory methods on [`Tree`] and are independent of one another:
//! each owns its frontier, so advancing one never moves another, and a
//! traversal can be restarted at any time by requesting a fresh cursor.
//!
//! All cursors yield `(NodeId, &T)` pairs so callers can follow up with
//! [`Tree::children`] for structural context (this is the read-only view an
//! external renderer consumes).
//!
//! ## Termination contract
//!
//! The classic begin/end cursor pair collapses onto [`Iterator::next`]
//! returning `None` once the frontier is empty. A cursor over an empty tree
//! is exhausted from the start. Only "exhausted or not" is observable -
//! there is deliberately no positional comparison between two live cursors,
//! and every cursor is [`FusedIterator`]: once `None`, always `None`.
//!
//! ## Ordering strategies
//!
//! In-order and post-order have a precise meaning only for binary trees.
//! [`InOrderIter`] and [`PostOrderIter`] capture the tree's
//! [`OrderingStrategy`] when they are created:
//!
//! - [`OrderingStrategy::Binary`]: classic left-spine algorithms.
//! - [`OrderingStrategy::General`]: both fall back to a plain depth-first
//!   scan. This is a convention, not a mathematical generalization; "the
//!   left subtree" is not a meaningful notion above arity 2.

use std::cmp::{Ordering as CmpOrdering, Reverse};
use std::collections::{BinaryHeap, VecDeque};
use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::{NodeId, OrderingStrategy, Tree};

// ---------------------------------------------------------------------------
// Pre-Order
// ---------------------------------------------------------------------------

/// Depth-first cursor visiting each parent before its children, siblings
/// left to right.
///
/// Frontier: a stack seeded with the root. Each step pops the top and pushes
/// its children in reverse sibling order, so the next pop yields the first
/// child - the reversal compensates for the stack reversing insertion order.
pub struct PreOrderIter<'t, T> {
	tree: &'t Tree<T>,
	stack: Vec<NodeId>,
}

impl<'t, T> PreOrderIter<'t, T> {
	pub(crate) fn new(tree: &'t Tree<T>) -> Self {
		let mut stack = Vec::new();
		if let Some(root) = tree.root() {
			stack.push(root);
		}
		PreOrderIter { tree, stack }
	}

	/// `true` once the frontier is empty and `next` can only return `None`.
	#[inline]
	pub fn is_exhausted(&self) -> bool {
		self.stack.is_empty()
	}
}

impl<'t, T> Iterator for PreOrderIter<'t, T> {
	type Item = (NodeId, &'t T);

	fn next(&mut self) -> Option<Self::Item> {
		let id = self.stack.pop()?;
		let node = self.tree.node(id);
		for &child in node.children().iter().rev() {
			self.stack.push(child);
		}
		Some((id, node.value()))
	}
}

impl<T> FusedIterator for PreOrderIter<'_, T> {}

// ---------------------------------------------------------------------------
// Post-Order
// ---------------------------------------------------------------------------

/// Cursor visiting children before their parent.
///
/// Two algorithms, selected by the tree's [`OrderingStrategy`]:
///
/// - **Binary**: a stack holding the leftmost spine. After emitting a node,
///   if that node was its parent's left child the cursor descends into the
///   right sibling's leftmost spine before the parent can be emitted. The
///   "came from the left" test is positional (the parent sits directly
///   below on the stack), so no visited flags are needed.
/// - **General**: there is no uniform single-stack discipline that produces
///   post-order for unbounded arity, so the general strategy keeps the
///   pre-order push/pop mechanics and emits on pop. The result is a valid
///   depth-first sequence, not a true post-order; this fallback is part of
///   the documented contract (see the module docs).
pub struct PostOrderIter<'t, T> {
	tree: &'t Tree<T>,
	strategy: OrderingStrategy,
	stack: Vec<NodeId>,
}

impl<'t, T> PostOrderIter<'t, T> {
	pub(crate) fn new(tree: &'t Tree<T>) -> Self {
		let strategy = tree.ordering();
		let mut iter = PostOrderIter {
			tree,
			strategy,
			stack: Vec::new(),
		};
		if let Some(root) = tree.root() {
			match strategy {
				OrderingStrategy::Binary => iter.push_leftmost_spine(root),
				OrderingStrategy::General => iter.stack.push(root),
			}
		}
		iter
	}

	/// `true` once the frontier is empty and `next` can only return `None`.
	#[inline]
	pub fn is_exhausted(&self) -> bool {
		self.stack.is_empty()
	}

	/// Pushes `id` and then every first-child below it, down to a leaf.
	fn push_leftmost_spine(&mut self, mut id: NodeId) {
		loop {
			self.stack.push(id);
			match self.tree.node(id).children().first() {
				Some(&first) => id = first,
				None => break,
			}
		}
	}
}

impl<'t, T> Iterator for PostOrderIter<'t, T> {
	type Item = (NodeId, &'t T);

	fn next(&mut self) -> Option<Self::Item> {
		let id = self.stack.pop()?;
		match self.strategy {
			OrderingStrategy::Binary => {
				// The node below on the stack is the parent. If we just
				// finished its left child, its right subtree comes next;
				// otherwise the parent itself is due.
				if let Some(&parent) = self.stack.last() {
					let siblings = self.tree.node(parent).children();
					if siblings.len() > 1 && siblings[0] == id {
						self.push_leftmost_spine(siblings[1]);
					}
				}
			}
			OrderingStrategy::General => {
				for &child in self.tree.node(id).children().iter().rev() {
					self.stack.push(child);
				}
			}
		}
		Some((id, self.tree.node(id).value()))
	}
}

impl<T> FusedIterator for PostOrderIter<'_, T> {}

// ---------------------------------------------------------------------------
// In-Order
// ---------------------------------------------------------------------------

/// Cursor visiting the left subtree, then the node, then the right subtree.
///
/// Defined only for the binary strategy: a stack holds the left spine, and
/// after emitting a node the cursor descends into the right child's left
/// spine. Under the general strategy this cursor is a plain depth-first
/// scan (see the module docs for why).
pub struct InOrderIter<'t, T> {
	tree: &'t Tree<T>,
	strategy: OrderingStrategy,
	stack: Vec<NodeId>,
}

impl<'t, T> InOrderIter<'t, T> {
	pub(crate) fn new(tree: &'t Tree<T>) -> Self {
		let strategy = tree.ordering();
		let mut iter = InOrderIter {
			tree,
			strategy,
			stack: Vec::new(),
		};
		if let Some(root) = tree.root() {
			match strategy {
				OrderingStrategy::Binary => iter.push_left_spine(root),
				OrderingStrategy::General => iter.stack.push(root),
			}
		}
		iter
	}

	/// `true` once the frontier is empty and `next` can only return `None`.
	#[inline]
	pub fn is_exhausted(&self) -> bool {
		self.stack.is_empty()
	}

	fn push_left_spine(&mut self, mut id: NodeId) {
		loop {
			self.stack.push(id);
			match self.tree.node(id).children().first() {
				Some(&first) => id = first,
				None => break,
			}
		}
	}
}

impl<'t, T> Iterator for InOrderIter<'t, T> {
	type Item = (NodeId, &'t T);

	fn next(&mut self) -> Option<Self::Item> {
		let id = self.stack.pop()?;
		match self.strategy {
			OrderingStrategy::Binary => {
				let children = self.tree.node(id).children();
				if let Some(&right) = children.get(1) {
					self.push_left_spine(right);
				}
			}
			OrderingStrategy::General => {
				for &child in self.tree.node(id).children().iter().rev() {
					self.stack.push(child);
				}
			}
		}
		Some((id, self.tree.node(id).value()))
	}
}

impl<T> FusedIterator for InOrderIter<'_, T> {}

// ---------------------------------------------------------------------------
// Breadth-First
// ---------------------------------------------------------------------------

/// Level-by-level cursor, siblings left to right.
///
/// Frontier: a queue seeded with the root. Each step dequeues the front and
/// enqueues its children in sibling order. This is the canonical default
/// order used when a [`Tree`] is iterated without choosing a strategy.
pub struct BfsIter<'t, T> {
	tree: &'t Tree<T>,
	queue: VecDeque<NodeId>,
}

impl<'t, T> BfsIter<'t, T> {
	pub(crate) fn new(tree: &'t Tree<T>) -> Self {
		let mut queue = VecDeque::new();
		if let Some(root) = tree.root() {
			queue.push_back(root);
		}
		BfsIter { tree, queue }
	}

	/// `true` once the frontier is empty and `next` can only return `None`.
	#[inline]
	pub fn is_exhausted(&self) -> bool {
		self.queue.is_empty()
	}
}

impl<'t, T> Iterator for BfsIter<'t, T> {
	type Item = (NodeId, &'t T);

	fn next(&mut self) -> Option<Self::Item> {
		let id = self.queue.pop_front()?;
		let node = self.tree.node(id);
		for &child in node.children() {
			self.queue.push_back(child);
		}
		Some((id, node.value()))
	}
}

impl<T> FusedIterator for BfsIter<'_, T> {}

// ---------------------------------------------------------------------------
// Depth-First
// ---------------------------------------------------------------------------

/// Stack-driven depth-first scan.
///
/// Mechanically identical to [`PreOrderIter`] - pop, push children in
/// reverse sibling order - but offered as a separately named traversal with
/// its own frontier, so callers can hold one of each without aliasing.
pub struct DfsIter<'t, T> {
	tree: &'t Tree<T>,
	stack: Vec<NodeId>,
}

impl<'t, T> DfsIter<'t, T> {
	pub(crate) fn new(tree: &'t Tree<T>) -> Self {
		let mut stack = Vec::new();
		if let Some(root) = tree.root() {
			stack.push(root);
		}
		DfsIter { tree, stack }
	}

	/// `true` once the frontier is empty and `next` can only return `None`.
	#[inline]
	pub fn is_exhausted(&self) -> bool {
		self.stack.is_empty()
	}
}

impl<'t, T> Iterator for DfsIter<'t, T> {
	type Item = (NodeId, &'t T);

	fn next(&mut self) -> Option<Self::Item> {
		let id = self.stack.pop()?;
		let node = self.tree.node(id);
		for &child in node.children().iter().rev() {
			self.stack.push(child);
		}
		Some((id, node.value()))
	}
}

impl<T> FusedIterator for DfsIter<'_, T> {}

// ---------------------------------------------------------------------------
// Heap View
// ---------------------------------------------------------------------------

/// An entry in the heap frontier. Ordered by value, with the handle as a
/// deterministic tie-breaker for equal values.
struct HeapEntry<'t, T> {
	value: &'t T,
	id: NodeId,
}

impl<T: Ord> PartialEq for HeapEntry<'_, T> {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == CmpOrdering::Equal
	}
}

impl<T: Ord> Eq for HeapEntry<'_, T> {}

impl<T: Ord> PartialOrd for HeapEntry<'_, T> {
	fn partial_cmp(&self, other: &Self) -> Option<CmpOrdering> {
		Some(self.cmp(other))
	}
}

impl<T: Ord> Ord for HeapEntry<'_, T> {
	fn cmp(&self, other: &Self) -> CmpOrdering {
		self.value.cmp(other.value).then_with(|| self.id.cmp(&other.id))
	}
}

/// Cursor yielding all reachable values in non-decreasing order.
///
/// A derived snapshot, not a traversal of the structure: construction
/// flattens the tree through a full depth-first scan and heapifies the
/// result into a binary min-heap keyed on the values alone. Each step pops
/// the minimum and lets the heap restore its invariant. Tree shape plays no
/// role in the output order.
///
/// By convention the view is only offered on trees declared binary;
/// [`TreeConfig::heap_over_any_arity`](crate::TreeConfig) lifts that
/// restriction.
pub struct HeapIter<'t, T> {
	heap: BinaryHeap<Reverse<HeapEntry<'t, T>>>,
}

impl<'t, T: Ord> HeapIter<'t, T> {
	pub(crate) fn new(tree: &'t Tree<T>) -> Result<Self> {
		let arity = tree.arity();
		if arity != 2 && !tree.config().heap_over_any_arity {
			return Err(Error::UnsupportedArity { arity });
		}
		let heap = tree
			.dfs()
			.map(|(id, value)| Reverse(HeapEntry { value, id }))
			.collect();
		Ok(HeapIter { heap })
	}

	/// `true` once every value has been yielded.
	#[inline]
	pub fn is_exhausted(&self) -> bool {
		self.heap.is_empty()
	}
}

impl<'t, T: Ord> Iterator for HeapIter<'t, T> {
	type Item = (NodeId, &'t T);

	fn next(&mut self) -> Option<Self::Item> {
		let Reverse(entry) = self.heap.pop()?;
		Some((entry.id, entry.value))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.heap.len(), Some(self.heap.len()))
	}
}

impl<T: Ord> ExactSizeIterator for HeapIter<'_, T> {}

impl<T: Ord> FusedIterator for HeapIter<'_, T> {}
