//! Insert-only red-black tree, annotated for teaching.
//!
//! Deletion is what makes red-black trees notorious; insertion alone is
//! enough to learn the shape of the algorithm. This tree supports insert
//! and lookup only, so every line here serves one story:
//!
//! 1. Link the new key in as an ordinary BST leaf, colored red.
//! 2. While the new node's parent is also red, the tree briefly breaks the
//!    "no red node has a red child" rule. Repair it locally.
//! 3. Force the root black.
//!
//! Nodes live in a `Vec` arena and point at each other by index; `NIL`
//! stands in for the absent child or parent.

use std::cmp::Ordering;

type NodeId = u32;
const NIL: NodeId = u32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

#[derive(Debug, Clone)]
struct Node<K> {
    key: K,
    color: Color,
    left: NodeId,
    right: NodeId,
    parent: NodeId,
}

/// An insert-only red-black tree over `Ord` keys.
#[derive(Debug, Clone)]
pub struct TeachingTree<K> {
    nodes: Vec<Node<K>>,
    root: Option<NodeId>,
}

impl<K> TeachingTree<K> {
    pub fn new() -> TeachingTree<K> {
        return TeachingTree {
            nodes: Vec::new(),
            root: None,
        };
    }

    pub fn len(&self) -> usize {
        return self.nodes.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.nodes.is_empty();
    }
}

impl<K> Default for TeachingTree<K> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<K: Ord> TeachingTree<K> {

    /// Standard BST lookup: go left when the probe is smaller, right when
    /// larger, stop on equal.
    pub fn contains(&self, key: &K) -> bool {
        let mut current = match self.root {
            Some(root) => root,
            None => return false,
        };
        loop {
            let node = &self.nodes[current as usize];
            current = match key.cmp(&node.key) {
                Ordering::Equal => return true,
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
            if current == NIL {
                return false;
            }
        }
    }

    /// Insert `key`. Duplicates are rejected with the key handed back.
    pub fn insert(&mut self, key: K) -> Result<(), K> {
        // Phase 1: ordinary BST descent, remembering where we fell off.
        let mut parent = NIL;
        let mut current = self.root.unwrap_or(NIL);
        let mut went_left = false;

        while current != NIL {
            parent = current;
            let node = &self.nodes[current as usize];
            match key.cmp(&node.key) {
                Ordering::Equal => return Err(key),
                Ordering::Less => {
                    current = node.left;
                    went_left = true;
                }
                Ordering::Greater => {
                    current = node.right;
                    went_left = false;
                }
            }
        }

        // Phase 2: link the new node as a red leaf. Red is the only safe
        // starting color: it can break "no red child of a red parent",
        // which is repairable locally, but never the black-height rule,
        // which is not.
        let new = self.nodes.len() as NodeId;
        self.nodes.push(Node {
            key,
            color: Color::Red,
            left: NIL,
            right: NIL,
            parent,
        });

        if parent == NIL {
            self.root = Some(new);
        } else if went_left {
            self.nodes[parent as usize].left = new;
        } else {
            self.nodes[parent as usize].right = new;
        }

        // Phase 3: repair.
        self.fix_insert(new);
        return Ok(());
    }

    /// Repair the red-red violation introduced by linking `node`.
    ///
    /// Each loop pass looks at the node's uncle (the parent's sibling) and
    /// lands in one of three cases. The mirror-image branches do the same
    /// three with left and right swapped.
    fn fix_insert(&mut self, mut node: NodeId) {
        loop {
            let parent = self.nodes[node as usize].parent;
            if parent == NIL || self.nodes[parent as usize].color == Color::Black {
                break;
            }
            // The parent is red, so it cannot be the root (the root is
            // always black): a grandparent must exist.
            let grandparent = self.nodes[parent as usize].parent;
            let parent_is_left = parent == self.nodes[grandparent as usize].left;
            let uncle = if parent_is_left {
                self.nodes[grandparent as usize].right
            } else {
                self.nodes[grandparent as usize].left
            };

            if uncle != NIL && self.nodes[uncle as usize].color == Color::Red {
                // Case 1: red uncle. The grandparent has two red
                // children: pull one unit of blackness down from it onto
                // both, making the grandparent the new possible violator.
                // This is the only case that loops.
                self.nodes[parent as usize].color = Color::Black;
                self.nodes[uncle as usize].color = Color::Black;
                self.nodes[grandparent as usize].color = Color::Red;
                node = grandparent;
                continue;
            }

            if parent_is_left {
                if node == self.nodes[parent as usize].right {
                    // Case 2: black uncle, node is an inner grandchild
                    // (a zig-zag: left then right). One rotation at the
                    // parent straightens the zig-zag into Case 3.
                    node = parent;
                    self.rotate_left(node);
                }
                // Case 3: black uncle, node is an outer grandchild.
                // Recolor, then rotate the grandparent toward the uncle:
                // the subtree root is black again and the loop is done.
                let parent = self.nodes[node as usize].parent;
                let grandparent = self.nodes[parent as usize].parent;
                self.nodes[parent as usize].color = Color::Black;
                self.nodes[grandparent as usize].color = Color::Red;
                self.rotate_right(grandparent);
            } else {
                if node == self.nodes[parent as usize].left {
                    node = parent;
                    self.rotate_right(node);
                }
                let parent = self.nodes[node as usize].parent;
                let grandparent = self.nodes[parent as usize].parent;
                self.nodes[parent as usize].color = Color::Black;
                self.nodes[grandparent as usize].color = Color::Red;
                self.rotate_left(grandparent);
            }
            break;
        }

        // The root absorbs any leftover redness.
        if let Some(root) = self.root {
            self.nodes[root as usize].color = Color::Black;
        }
    }

    /// Promote `x`'s right child into `x`'s position:
    ///
    /// ```text
    ///     x                y
    ///    / \              / \
    ///   a   y    ==>     x   c
    ///      / \          / \
    ///     b   c        a   b
    /// ```
    ///
    /// Only links move; colors and the in-order sequence are untouched.
    fn rotate_left(&mut self, x: NodeId) {
        let y = self.nodes[x as usize].right;
        let b = self.nodes[y as usize].left;
        let p = self.nodes[x as usize].parent;

        self.nodes[x as usize].right = b;
        if b != NIL {
            self.nodes[b as usize].parent = x;
        }

        self.nodes[y as usize].parent = p;
        if p == NIL {
            self.root = Some(y);
        } else if self.nodes[p as usize].left == x {
            self.nodes[p as usize].left = y;
        } else {
            self.nodes[p as usize].right = y;
        }

        self.nodes[y as usize].left = x;
        self.nodes[x as usize].parent = y;
    }

    /// Mirror image of [`rotate_left`].
    fn rotate_right(&mut self, x: NodeId) {
        let y = self.nodes[x as usize].left;
        let b = self.nodes[y as usize].right;
        let p = self.nodes[x as usize].parent;

        self.nodes[x as usize].left = b;
        if b != NIL {
            self.nodes[b as usize].parent = x;
        }

        self.nodes[y as usize].parent = p;
        if p == NIL {
            self.root = Some(y);
        } else if self.nodes[p as usize].right == x {
            self.nodes[p as usize].right = y;
        } else {
            self.nodes[p as usize].left = y;
        }

        self.nodes[y as usize].right = x;
        self.nodes[x as usize].parent = y;
    }

    /// Audit the red-black rules; used by tests and worth reading as a
    /// restatement of what the fixup protects.
    pub fn is_valid(&self) -> bool {
        let root = match self.root {
            Some(root) => root,
            None => return true,
        };
        if self.nodes[root as usize].color != Color::Black {
            return false;
        }
        return self.black_height(root).is_some();
    }

    /// Black count down to nil if uniform and free of red-red edges.
    fn black_height(&self, id: NodeId) -> Option<u32> {
        if id == NIL {
            return Some(1);
        }
        let node = &self.nodes[id as usize];
        if node.color == Color::Red {
            let red_child = [node.left, node.right]
                .iter()
                .any(|&child| child != NIL && self.nodes[child as usize].color == Color::Red);
            if red_child {
                return None;
            }
        }
        let left = self.black_height(node.left)?;
        let right = self.black_height(node.right)?;
        if left != right {
            return None;
        }
        return Some(left + (node.color == Color::Black) as u32);
    }
}
