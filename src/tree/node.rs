//! Arena slot storage for tree nodes.

/// Index of a slot in the node arena.
pub(crate) type NodeIdx = u32;

/// Sentinel for the absence of a node: a nil leaf or a missing parent.
pub(crate) const NONE: NodeIdx = u32::MAX;

/// Node color. Nil leaves count as black.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// A stable handle to a live node in one tree.
///
/// Handles survive unrelated inserts and removals; removing a node
/// invalidates its handle. Handles are only meaningful for the tree that
/// issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) NodeIdx);

/// One arena slot: structural links, color, and the stored entry.
///
/// A vacant slot (waiting on the free list for reuse) has `entry == None`;
/// its links are meaningless and must never be followed.
#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) left: NodeIdx,
    pub(crate) right: NodeIdx,
    pub(crate) parent: NodeIdx,
    pub(crate) color: Color,
    pub(crate) entry: Option<(K, V)>,
}

impl<K, V> Node<K, V> {
    /// A fresh unlinked node. New nodes start red so that linking them in
    /// can only ever violate the red-red rule, never the black-height rule.
    pub(crate) fn new(key: K, value: V) -> Node<K, V> {
        return Node {
            left: NONE,
            right: NONE,
            parent: NONE,
            color: Color::Red,
            entry: Some((key, value)),
        };
    }
}
