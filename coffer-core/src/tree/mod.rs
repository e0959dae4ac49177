//! Unbalanced binary search tree.
//!
//! Every node's left subtree holds lesser values and its right subtree
//! greater-or-equal values, per [`DuplicatePolicy`]. No rebalancing is
//! performed; an adversarial insertion order degenerates the tree to a
//! chain with O(n) depth.

mod iter;

pub use iter::{InOrderIter, IntoIter};

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

type SubTree<T> = Option<Box<Node<T>>>;

struct Node<T> {
    data: T,
    left: SubTree<T>,
    right: SubTree<T>,
}

/// What `insert` does with a value that compares equal to a stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Route the duplicate into the right subtree. The default.
    #[default]
    AllowRight,
    /// Leave the tree unchanged and report the value as not inserted.
    Reject,
}

/// Binary search tree over `Ord` values.
pub struct Bst<T> {
    root: SubTree<T>,
    len: usize,
    policy: DuplicatePolicy,
}

impl<T> Bst<T> {
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            root: None,
            len: 0,
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every node iteratively; a degenerate tree is a chain, and a
    /// recursive drop would overflow the call stack.
    pub fn clear(&mut self) {
        let drained = self.len;
        self.drain_nodes();
        self.len = 0;
        debug!("Cleared {} entries from tree", drained);
    }

    fn drain_nodes(&mut self) {
        let mut stack = Vec::new();
        if let Some(root) = self.root.take() {
            stack.push(root);
        }
        while let Some(mut node) = stack.pop() {
            if let Some(left) = node.left.take() {
                stack.push(left);
            }
            if let Some(right) = node.right.take() {
                stack.push(right);
            }
        }
    }
}

impl<T: Ord> Bst<T> {
    /// Descend by comparison and attach the value as a new leaf.
    ///
    /// Returns whether the value was inserted; `false` only under
    /// [`DuplicatePolicy::Reject`] when an equal value is already stored.
    pub fn insert(&mut self, data: T) -> bool {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            match data.cmp(&node.data) {
                Ordering::Less => cur = &mut node.left,
                Ordering::Equal if self.policy == DuplicatePolicy::Reject => {
                    return false;
                }
                Ordering::Equal | Ordering::Greater => cur = &mut node.right,
            }
        }
        *cur = Some(Box::new(Node {
            data,
            left: None,
            right: None,
        }));
        self.len += 1;
        true
    }

    /// Comparison descent; found/not-found.
    pub fn contains(&self, data: &T) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match data.cmp(&node.data) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => cur = node.right.as_deref(),
            }
        }
        false
    }

    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.data)
    }

    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.data)
    }
}

impl<T> Bst<T> {
    /// Lazy in-order iterator (left-root-right), i.e. sorted order.
    pub fn iter(&self) -> InOrderIter<'_, T> {
        InOrderIter::new(self)
    }

    /// Complete left-root-right sequence, eager.
    pub fn in_order(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Complete root-left-right sequence, eager.
    pub fn pre_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push(root);
        }
        while let Some(node) = stack.pop() {
            out.push(&node.data);
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
        }
        out
    }

    /// Complete left-right-root sequence, eager.
    pub fn post_order(&self) -> Vec<&T> {
        // Visit root-right-left, then reverse.
        let mut out = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push(root);
        }
        while let Some(node) = stack.pop() {
            out.push(&node.data);
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
        }
        out.reverse();
        out
    }
}

impl<T> Drop for Bst<T> {
    fn drop(&mut self) {
        self.drain_nodes();
    }
}

impl<T> Default for Bst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Ord> Clone for Bst<T> {
    /// Rebuilds from the pre-order sequence, which reproduces the exact
    /// node shape under the same policy.
    fn clone(&self) -> Self {
        let mut tree = Bst::with_policy(self.policy);
        tree.extend(self.pre_order().into_iter().cloned());
        tree
    }
}

impl<T: fmt::Debug> fmt::Debug for Bst<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for Bst<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Bst<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Bst<T> {
    /// Serializes the pre-order sequence, so deserializing by
    /// re-insertion reproduces the exact tree shape.
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.pre_order())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de> + Ord> serde::Deserialize<'de> for Bst<T> {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}
