//! Test utilities: JSON tree fixtures and an example ordered payload.
use crate::Tree;
use serde::Deserialize;

use std::fmt;

#[derive(Deserialize, Debug)]
struct TreeNode {
	value: i64,
	#[serde(default)]
	children: Vec<TreeNode>,
}

#[derive(Deserialize, Debug)]
struct SampleTree {
	arity: usize,
	root: TreeNode,
}

/// Builds a tree from a JSON description of the form
/// `{"arity": 2, "root": {"value": 1, "children": [..]}}`.
///
/// Panics on malformed fixtures, including fixtures that exceed the
/// declared arity; this is test-only code.
pub(crate) fn sample_tree(json: &str) -> Tree<i64> {
	let sample: SampleTree = serde_json::from_str(json).expect("malformed fixture");
	let mut tree = Tree::with_arity(sample.arity);
	let root = tree.add_root(sample.root.value);
	attach_children(&mut tree, root, &sample.root.children);
	tree
}

fn attach_children(tree: &mut Tree<i64>, parent: crate::NodeId, children: &[TreeNode]) {
	for child in children {
		let id = tree.add_child(parent, child.value).expect("fixture exceeds arity");
		attach_children(tree, id, &child.children);
	}
}

/// Example payload with a non-trivial total order: a complex number
/// compared lexicographically by real part, then imaginary part.
///
/// The comparisons go through `f64::total_cmp` so that `Eq`/`Ord` are
/// consistent; fixtures never contain NaN.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Complex {
	re: f64,
	im: f64,
}

impl Complex {
	pub fn new(re: f64, im: f64) -> Self {
		Complex { re, im }
	}
}

impl fmt::Display for Complex {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}+{}i", self.re, self.im)
	}
}

impl PartialEq for Complex {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == std::cmp::Ordering::Equal
	}
}

impl Eq for Complex {}

impl PartialOrd for Complex {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Complex {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.re.total_cmp(&other.re).then_with(|| self.im.total_cmp(&other.im))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fixture_with_nested_children() {
		let tree = sample_tree(
			r#"{
				"arity": 3,
				"root": {
					"value": 1,
					"children": [
						{ "value": 2, "children": [{ "value": 5 }, { "value": 6 }] },
						{ "value": 3, "children": [{ "value": 7 }] },
						{ "value": 4 }
					]
				}
			}"#,
		);

		let pre: Vec<i64> = tree.pre_order().map(|(_, v)| *v).collect();
		assert_eq!(pre, [1, 2, 5, 6, 3, 7, 4]);
	}

	#[test]
	fn complex_ordering() {
		assert!(Complex::new(1.0, 0.0) < Complex::new(2.0, 0.0));
		assert!(Complex::new(1.0, 1.0) < Complex::new(1.0, 2.0));
		assert!(Complex::new(2.0, -1.0) > Complex::new(1.0, 5.0));
		assert_eq!(Complex::new(1.5, 2.5), Complex::new(1.5, 2.5));
	}

	#[test]
	fn complex_display() {
		assert_eq!(Complex::new(1.0, 2.0).to_string(), "1+2i");
		assert_eq!(Complex::new(0.5, -1.5).to_string(), "0.5+-1.5i");
	}
}
