// model = "claude-opus-4-5"
// created = "2026-08-07"
// modified = "2026-08-07"
// driver = "Isaac Clayton"

//! Leftmost-cached tree: O(1) minimum retrieval.
//!
//! Wraps [`RbTree`] with one extra index that always names the minimum-key
//! node. The cache is maintained incrementally at well-defined points:
//!
//! - insert: the new node is the minimum iff the tree was empty or the new
//!   key precedes the cached minimum's key (one comparison, O(1));
//! - remove: when the minimum itself goes away, the cache moves to its
//!   in-order successor, computed once before the unlink;
//! - replace: substituting the minimum node moves the cache to the new
//!   handle.
//!
//! Everything else passes through unchanged; [`CachedRbTree::tree`] exposes
//! the full underlying surface.

use super::node::{NONE, NodeIdx};
use super::{Duplicate, InvalidHandle, Iter, NodeId, RbTree, ReplaceError};

/// An [`RbTree`] that additionally answers "minimum?" in O(1).
#[derive(Debug, Clone)]
pub struct CachedRbTree<K, V> {
    tree: RbTree<K, V>,
    /// Arena index of the minimum-key node, `NONE` when empty.
    leftmost: NodeIdx,
}

impl<K, V> CachedRbTree<K, V> {
    pub fn new() -> CachedRbTree<K, V> {
        return CachedRbTree {
            tree: RbTree::new(),
            leftmost: NONE,
        };
    }

    /// The underlying tree, for every operation not duplicated here.
    pub fn tree(&self) -> &RbTree<K, V> {
        return &self.tree;
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        return self.tree.len();
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        return self.tree.is_empty();
    }

    pub fn clear(&mut self) {
        self.tree.clear();
        self.leftmost = NONE;
    }

    /// Handle of the minimum-key node without descending the tree.
    ///
    /// Always agrees with [`RbTree::first`], in constant time.
    pub fn first_cached(&self) -> Option<NodeId> {
        if self.leftmost == NONE {
            return None;
        }
        return Some(NodeId(self.leftmost));
    }

    pub fn first(&self) -> Option<NodeId> {
        return self.tree.first();
    }

    pub fn last(&self) -> Option<NodeId> {
        return self.tree.last();
    }

    pub fn next(&self, node: NodeId) -> Option<NodeId> {
        return self.tree.next(node);
    }

    pub fn prev(&self, node: NodeId) -> Option<NodeId> {
        return self.tree.prev(node);
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        return self.tree.iter();
    }

    /// Detach `node`, keeping the cache honest when the minimum goes away.
    pub fn remove(&mut self, node: NodeId) -> Result<(K, V), InvalidHandle> {
        if node.0 == self.leftmost && self.tree.is_live(node.0) {
            // The successor is computed while the node is still linked.
            self.leftmost = match self.tree.next(node) {
                Some(next) => next.0,
                None => NONE,
            };
        }
        return self.tree.remove(node);
    }
}

impl<K: Ord, V> CachedRbTree<K, V> {
    /// Insert, updating the cached minimum in O(1).
    pub fn insert(&mut self, key: K, value: V) -> Result<NodeId, Duplicate<K, V>> {
        let takes_lead = self.leftmost == NONE || key < *self.tree.key_of(self.leftmost);
        let id = self.tree.insert(key, value)?;
        if takes_lead {
            self.leftmost = id.0;
        }
        return Ok(id);
    }

    pub fn find(&self, key: &K) -> Option<NodeId> {
        return self.tree.find(key);
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        return self.tree.get(key);
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        return self.tree.get_mut(key);
    }

    pub fn contains_key(&self, key: &K) -> bool {
        return self.tree.contains_key(key);
    }

    /// Find and remove `key` in one call.
    pub fn remove_key(&mut self, key: &K) -> Option<(K, V)> {
        let id = self.tree.find(key)?;
        return self.remove(id).ok();
    }

    /// [`RbTree::replace`], retargeting the cache when the minimum node is
    /// the one swapped out.
    pub fn replace(
        &mut self,
        old: NodeId,
        key: K,
        value: V,
    ) -> Result<(NodeId, K, V), ReplaceError<K, V>> {
        let was_leftmost = old.0 == self.leftmost;
        let (id, old_key, old_value) = self.tree.replace(old, key, value)?;
        if was_leftmost {
            self.leftmost = id.0;
        }
        return Ok((id, old_key, old_value));
    }

    /// Structural audit plus the cache contract: the cached index must
    /// equal a fresh all-left descent.
    pub fn is_valid(&self) -> bool {
        let computed = match self.tree.first() {
            Some(id) => id.0,
            None => NONE,
        };
        return self.tree.is_valid() && self.leftmost == computed;
    }
}

impl<K, V> Default for CachedRbTree<K, V> {
    fn default() -> Self {
        return Self::new();
    }
}
