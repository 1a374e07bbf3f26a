use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::warn;

/// Parent-to-child graph over a list of items, nodes weighted by input position.
pub struct HierarchyGraph<K> {
    pub graph: DiGraph<usize, ()>,
    pub id_to_index: HashMap<K, NodeIndex>,
}

impl<K: Eq + Hash + Clone> HierarchyGraph<K> {
    pub fn build<T>(
        items: &[T],
        id: impl Fn(&T) -> Option<K>,
        parent: impl Fn(&T) -> Option<K>,
    ) -> Self {
        let mut graph: DiGraph<usize, ()> = DiGraph::new();
        let mut id_to_index: HashMap<K, NodeIndex> = HashMap::new();

        let nodes: Vec<NodeIndex> = (0..items.len()).map(|i| graph.add_node(i)).collect();
        for (item, node) in items.iter().zip(&nodes) {
            if let Some(key) = id(item) {
                id_to_index.entry(key).or_insert(*node);
            }
        }

        // Edges: parent -> child
        for (item, node) in items.iter().zip(&nodes) {
            let Some(parent_id) = parent(item) else {
                continue;
            };
            if let Some(&parent_ix) = id_to_index.get(&parent_id) {
                if parent_ix != *node {
                    graph.add_edge(parent_ix, *node, ());
                }
            }
        }

        Self { graph, id_to_index }
    }

    fn is_root(&self, node: NodeIndex) -> bool {
        self.graph
            .neighbors_directed(node, Direction::Incoming)
            .next()
            .is_none()
    }

    /// Positions of `node`'s children, in input order.
    fn children(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut children: Vec<NodeIndex> = self.graph.neighbors(node).collect();
        children.sort_by_key(|ix| self.graph[*ix]);
        children
    }
}

/// Reorder `items` so every parent precedes its children.
///
/// Roots keep their input order and are each followed by their descendants
/// depth-first. Siblings are ordered by `sibling_order` when given, else by input
/// order. Items caught in a parent cycle are appended in input order.
pub fn sort_hierarchy<T, K>(
    items: Vec<T>,
    id: impl Fn(&T) -> Option<K>,
    parent: impl Fn(&T) -> Option<K>,
    sibling_order: Option<&dyn Fn(&T, &T) -> Ordering>,
) -> Vec<T>
where
    K: Eq + Hash + Clone,
{
    let hierarchy = HierarchyGraph::build(&items, id, parent);
    let graph = &hierarchy.graph;

    let order = |nodes: &mut Vec<NodeIndex>| {
        if let Some(compare) = sibling_order {
            nodes.sort_by(|a, b| compare(&items[graph[*a]], &items[graph[*b]]));
        }
    };

    let mut roots: Vec<NodeIndex> = graph
        .node_indices()
        .filter(|ix| hierarchy.is_root(*ix))
        .collect();
    order(&mut roots);

    let mut visited = vec![false; items.len()];
    let mut sequence = Vec::with_capacity(items.len());
    let mut stack: Vec<NodeIndex> = roots.into_iter().rev().collect();
    while let Some(node) = stack.pop() {
        let position = graph[node];
        if visited[position] {
            continue;
        }
        visited[position] = true;
        sequence.push(position);

        let mut children = hierarchy.children(node);
        order(&mut children);
        stack.extend(children.into_iter().rev());
    }

    let orphaned: Vec<usize> = (0..items.len()).filter(|i| !visited[*i]).collect();
    if !orphaned.is_empty() {
        warn!(count = orphaned.len(), "hierarchy contains a parent cycle");
        sequence.extend(orphaned);
    }

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    sequence
        .into_iter()
        .filter_map(|position| slots[position].take())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_follow_parents_declared_later() {
        let items = vec![(3, Some(1)), (1, None), (2, Some(1)), (4, Some(3))];
        let sorted = sort_hierarchy(items, |i| Some(i.0), |i| i.1, None);
        let ids: Vec<i32> = sorted.iter().map(|i| i.0).collect();
        assert_eq!(ids, vec![1, 3, 4, 2]);
    }

    #[test]
    fn cycles_are_appended() {
        let items = vec![(1, Some(2)), (2, Some(1)), (3, None)];
        let sorted = sort_hierarchy(items, |i| Some(i.0), |i| i.1, None);
        let ids: Vec<i32> = sorted.iter().map(|i| i.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
