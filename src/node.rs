/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
Nodes are numbered `1` to `n`: the vertex range of a graph is always contiguous and only
ever grows. Per-node containers store node `v` in slot `v - 1`.
*/

use std::ops::Range;

/// Nodes can be any unsigned integer from `1` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 2` nodes in a graph!
pub type NumNodes = Node;

/// The smallest valid node of a non-empty graph
pub const FIRST_NODE: Node = 1;

/// Returns the vertex range `1..=n` of a graph with `n` nodes
#[inline]
pub fn node_range(n: NumNodes) -> Range<Node> {
    FIRST_NODE..FIRST_NODE + n
}

/// Returns *true* if `u` is a valid node of a graph with `n` nodes
#[inline]
pub fn is_valid_node(u: Node, n: NumNodes) -> bool {
    (FIRST_NODE..=n).contains(&u)
}

/// Slot of node `u` in per-node containers.
/// ** Underflows (and thus panics in debug builds) if `u == 0` **
#[inline(always)]
pub(crate) fn slot(u: Node) -> usize {
    (u - FIRST_NODE) as usize
}

/// Inverse of [`slot`]
#[inline(always)]
pub(crate) fn node_at(slot: usize) -> Node {
    slot as Node + FIRST_NODE
}
