use crate::*;
use cfrd_core::Probability;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// The complete game tree below one root.
///
/// Each vertex stores a game state; edges are labeled with the action
/// and, at chance nodes, its probability (1 for player actions).
/// Children are kept in the order the game declares them.
///
/// # Traversal
///
/// - `children(index)` — Outgoing edges in declared order
/// - `bfs()` — Parents before children, for reach propagation
/// - `partition(seat)` — Decision nodes of one player by information set
#[derive(Debug)]
pub struct Tree<G>
where
    G: CfrGame,
{
    graph: DiGraph<G, (G::E, Probability)>,
}

impl<G> Tree<G>
where
    G: CfrGame,
{
    /// Expand every branch below `root`.
    pub fn build(root: &G) -> CfrResult<Self> {
        let mut graph = DiGraph::default();
        let mut stack = vec![graph.add_node(root.clone())];
        while let Some(parent) = stack.pop() {
            let game = graph[parent].clone();
            let edges = match game.turn() {
                Turn::Terminal => vec![],
                Turn::Chance => game.chances(),
                _ => game.choices().into_iter().map(|e| (e, 1.)).collect(),
            };
            for (edge, p) in edges {
                let child = graph.add_node(game.follow(edge)?);
                graph.add_edge(parent, child, (edge, p));
                stack.push(child);
            }
        }
        Ok(Self { graph })
    }
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
    pub fn root(&self) -> NodeIndex {
        NodeIndex::new(0)
    }
    pub fn game(&self, index: NodeIndex) -> &G {
        &self.graph[index]
    }
    /// Outgoing `(child, edge, probability)` in declared order.
    pub fn children(&self, index: NodeIndex) -> Vec<(NodeIndex, G::E, Probability)> {
        let mut children = self
            .graph
            .edges(index)
            .map(|e| (e.target(), e.weight().0, e.weight().1))
            .collect::<Vec<_>>();
        children.reverse();
        children
    }
    /// Every node, parents before children.
    pub fn bfs(&self) -> Vec<NodeIndex> {
        use petgraph::visit::Walker;
        petgraph::visit::Bfs::new(&self.graph, self.root())
            .iter(&self.graph)
            .collect()
    }
    /// Decision nodes of `seat`, grouped by its information set.
    pub fn partition(&self, seat: Turn) -> HashMap<G::I, Vec<NodeIndex>> {
        let mut infos = HashMap::<G::I, Vec<NodeIndex>>::new();
        for index in self.graph.node_indices() {
            let game = self.game(index);
            if game.turn() == seat {
                infos.entry(game.info(seat)).or_default().push(index);
            }
        }
        infos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kuhn_tree_size() {
        let tree = Tree::build(&Poker::new(KUHN)).unwrap();
        assert_eq!(tree.len(), 1 + 3 + 6 * 9);
        assert_eq!(tree.bfs().len(), tree.len());
        assert_eq!(tree.partition(Turn::P1).len(), 6);
        assert_eq!(tree.partition(Turn::P2).len(), 6);
    }

    #[test]
    fn children_keep_declared_order() {
        let tree = Tree::build(&Poker::new(KUHN)).unwrap();
        let deals = tree.children(tree.root());
        let edges = deals.iter().map(|(_, e, _)| *e).collect::<Vec<_>>();
        assert_eq!(edges, vec![Edge::Draw(0), Edge::Draw(1), Edge::Draw(2)]);
        assert!(deals.iter().all(|(_, _, p)| (p - 1. / 3.).abs() < 1e-12));
    }
}
