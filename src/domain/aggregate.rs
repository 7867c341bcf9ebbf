//! Leaf aggregation over connection forests
//!
//! Traversal uses an explicit heap-allocated stack, so arbitrarily deep
//! catalogs do not consume call-stack frames.

use tracing::instrument;

use crate::domain::node::{Node, Protocol};

/// Pre-order iterator over every node of a forest, left to right.
pub struct ForestIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> ForestIter<'a> {
    pub fn new(nodes: &'a [Node]) -> Self {
        // Reverse so the first root is popped first
        Self {
            stack: nodes.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for ForestIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Folders are always descended, whatever a predicate would say about them
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Iterate all nodes of a forest in document order.
pub fn walk(nodes: &[Node]) -> ForestIter<'_> {
    ForestIter::new(nodes)
}

/// Iterate only the leaves (connections) of a forest.
pub fn leaves(nodes: &[Node]) -> impl Iterator<Item = &Node> {
    walk(nodes).filter(|node| node.is_leaf())
}

/// Count leaves satisfying `predicate`, at any depth.
///
/// An absent forest counts as empty; an absent predicate accepts every leaf.
/// The predicate is only ever applied to leaves.
pub fn count(nodes: Option<&[Node]>, predicate: Option<&dyn Fn(&Node) -> bool>) -> usize {
    let nodes = nodes.unwrap_or_default();
    match predicate {
        Some(predicate) => count_matching(nodes, predicate),
        None => count_leaves(nodes),
    }
}

/// Count every leaf of the forest.
pub fn count_leaves(nodes: &[Node]) -> usize {
    leaves(nodes).count()
}

/// Count leaves for which `predicate` holds.
pub fn count_matching<P>(nodes: &[Node], predicate: P) -> usize
where
    P: Fn(&Node) -> bool,
{
    leaves(nodes).filter(|node| predicate(node)).count()
}

/// Count leaves whose protocol equals `protocol` exactly.
pub fn count_protocol(nodes: &[Node], protocol: &str) -> usize {
    count_matching(nodes, |node| node.has_protocol(protocol))
}

/// Connection totals shown on the dashboard overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ConnectionStats {
    pub total: usize,
    pub rdp: usize,
    pub ssh: usize,
    pub vnc: usize,
}

impl ConnectionStats {
    /// One independent pass per figure.
    #[instrument(level = "debug", skip(nodes), fields(roots = nodes.len()))]
    pub fn from_forest(nodes: &[Node]) -> Self {
        Self {
            total: count_leaves(nodes),
            rdp: count_protocol(nodes, Protocol::Rdp.as_str()),
            ssh: count_protocol(nodes, Protocol::Ssh.as_str()),
            vnc: count_protocol(nodes, Protocol::Vnc.as_str()),
        }
    }

    pub fn get(&self, protocol: Protocol) -> usize {
        match protocol {
            Protocol::Rdp => self.rdp,
            Protocol::Ssh => self.ssh,
            Protocol::Vnc => self.vnc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Node> {
        vec![Node::folder(
            "root",
            vec![Node::leaf("a", "ssh"), Node::leaf("b", "rdp")],
        )]
    }

    #[test]
    fn given_absent_forest_when_counting_then_returns_zero() {
        assert_eq!(count(None, None), 0);
        let empty: Vec<Node> = Vec::new();
        assert_eq!(count(Some(empty.as_slice()), None), 0);
    }

    #[test]
    fn given_folder_with_two_leaves_when_counting_then_counts_both() {
        let tree = sample();
        assert_eq!(count(Some(tree.as_slice()), None), 2);
        let is_ssh: &dyn Fn(&Node) -> bool = &|node| node.has_protocol("ssh");
        assert_eq!(count(Some(tree.as_slice()), Some(is_ssh)), 1);
    }

    #[test]
    fn given_nested_folders_when_counting_then_depth_is_irrelevant() {
        let tree = vec![Node::folder(
            "outer",
            vec![Node::folder("inner", vec![Node::leaf("deep", "vnc")])],
        )];
        assert_eq!(count_leaves(&tree), 1);
        assert_eq!(count_protocol(&tree, "vnc"), 1);
    }

    #[test]
    fn given_predicate_accepting_everything_when_counting_then_folders_still_excluded() {
        let tree = vec![Node::folder("empty", vec![]), Node::leaf("x", "ssh")];
        assert_eq!(count_matching(&tree, |_| true), 1);
    }

    #[test]
    fn given_predicate_rejecting_folder_when_counting_then_children_are_still_visited() {
        let tree = sample();
        // Would reject the folder itself if it were asked
        let predicate = |node: &Node| node.protocol.is_some();
        assert_eq!(count_matching(&tree, predicate), 2);
    }

    #[test]
    fn given_forest_when_walking_then_yields_preorder() {
        let tree = vec![
            Node::folder("f", vec![Node::leaf("a", "ssh"), Node::leaf("b", "rdp")]),
            Node::leaf("c", "vnc"),
        ];
        let names: Vec<_> = walk(&tree)
            .map(|n| n.name.clone().unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["f", "a", "b", "c"]);
    }

    #[test]
    fn given_very_deep_chain_when_counting_and_dropping_then_does_not_overflow() {
        let mut node = Node::leaf("bottom", "ssh");
        for i in 0..200_000 {
            node = Node::folder(format!("level{}", i), vec![node]);
        }
        let tree = vec![node];
        assert_eq!(count_leaves(&tree), 1);
        assert_eq!(count_protocol(&tree, "ssh"), 1);

        drop(tree);
    }

    #[test]
    fn given_mixed_forest_when_building_stats_then_counts_each_protocol() {
        let tree = vec![
            Node::folder(
                "dc",
                vec![
                    Node::leaf("a", "rdp"),
                    Node::leaf("b", "rdp"),
                    Node::folder("linux", vec![Node::leaf("c", "ssh")]),
                ],
            ),
            Node::leaf("d", "vnc"),
            Node::leaf("e", "telnet"),
        ];
        let stats = ConnectionStats::from_forest(&tree);
        assert_eq!(
            stats,
            ConnectionStats {
                total: 5,
                rdp: 2,
                ssh: 1,
                vnc: 1
            }
        );
        assert_eq!(stats.get(Protocol::Rdp), 2);
    }
}
