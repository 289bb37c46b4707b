//! Connected-component grouping
//!
//! Partitions a set of (already resolved) member ids into family groups
//! using iterative BFS over the relationship edges. Only edges with both
//! endpoints in the set are followed; an id with no such edge is a group of
//! its own.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use family_shared::types::{Edge, FamilyGroup, MemberId};

/// Undirected adjacency restricted to a fixed vertex set.
struct Adjacency {
    neighbours: HashMap<MemberId, Vec<MemberId>>,
}

impl Adjacency {
    fn build(vertices: &BTreeSet<MemberId>, edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut neighbours: HashMap<MemberId, Vec<MemberId>> = HashMap::new();

        for edge in edges {
            if edge.is_self_loop() {
                continue;
            }
            let (a, b) = edge.endpoints();
            if !vertices.contains(&a) || !vertices.contains(&b) {
                continue;
            }
            neighbours.entry(a).or_default().push(b);
            neighbours.entry(b).or_default().push(a);
        }

        // Sort for deterministic traversal regardless of edge order
        for list in neighbours.values_mut() {
            list.sort_unstable();
            list.dedup();
        }

        Self { neighbours }
    }

    fn of(&self, id: &MemberId) -> &[MemberId] {
        self.neighbours.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Groups `ids` into connected components of `edges`.
///
/// Groups are returned in ascending order of their smallest member. The
/// result does not depend on the order of either input.
pub fn group_members(
    ids: impl IntoIterator<Item = MemberId>,
    edges: impl IntoIterator<Item = Edge>,
) -> Vec<FamilyGroup> {
    let vertices: BTreeSet<MemberId> = ids.into_iter().collect();
    let adjacency = Adjacency::build(&vertices, edges);

    let mut visited: HashSet<MemberId> = HashSet::with_capacity(vertices.len());
    let mut queue: VecDeque<MemberId> = VecDeque::new();
    let mut groups = Vec::new();

    for &start in &vertices {
        if !visited.insert(start) {
            continue;
        }

        let mut component = Vec::new();
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            component.push(current);
            for &next in adjacency.of(&current) {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        groups.push(FamilyGroup::new(component));
    }

    groups
}

/// Number of family groups among `ids`.
pub fn count_groups(
    ids: impl IntoIterator<Item = MemberId>,
    edges: impl IntoIterator<Item = Edge>,
) -> usize {
    group_members(ids, edges).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(raw: &[u64]) -> Vec<MemberId> {
        raw.iter().map(|id| MemberId(*id)).collect()
    }

    fn edge(a: u64, b: u64) -> Edge {
        Edge::new(MemberId(a), MemberId(b))
    }

    #[test]
    fn test_empty_input() {
        assert!(group_members(Vec::new(), Vec::new()).is_empty());
    }

    #[test]
    fn test_isolated_members_are_singletons() {
        let groups = group_members(ids(&[3, 1, 2]), Vec::new());
        assert_eq!(groups.len(), 3);
        assert!(groups.iter().all(|g| g.len() == 1));
        assert_eq!(groups[0].anchor(), Some(MemberId(1)));
    }

    #[test]
    fn test_linear_chain() {
        // 1 - 2 - 3, and 4 alone
        let groups = group_members(ids(&[1, 2, 3, 4]), [edge(1, 2), edge(3, 2)]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], FamilyGroup::new(ids(&[1, 2, 3])));
        assert_eq!(groups[1], FamilyGroup::new(ids(&[4])));
    }

    #[test]
    fn test_cycle_handling() {
        let groups = group_members(ids(&[1, 2, 3]), [edge(1, 2), edge(2, 3), edge(3, 1)]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 3);
    }

    #[test]
    fn test_paths_through_outsiders_are_not_followed() {
        // 1 and 2 are only linked through 9, who is not in the set
        let groups = group_members(ids(&[1, 2]), [edge(1, 9), edge(9, 2)]);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_self_loops_and_duplicate_edges_are_ignored() {
        let groups = group_members(
            ids(&[1, 2]),
            [edge(1, 1), edge(1, 2), edge(2, 1), edge(1, 2)],
        );
        assert_eq!(groups, vec![FamilyGroup::new(ids(&[1, 2]))]);
    }

    #[test]
    fn test_duplicate_ids_counted_once() {
        assert_eq!(count_groups(ids(&[5, 5, 5]), Vec::new()), 1);
    }

    #[test]
    fn test_fully_connected_roster_is_one_group() {
        let roster: Vec<u64> = (1..=8).collect();
        let mut edges = Vec::new();
        for a in &roster {
            for b in &roster {
                if a < b {
                    edges.push(edge(*a, *b));
                }
            }
        }
        assert_eq!(count_groups(ids(&roster), edges), 1);
    }

    fn arb_graph() -> impl Strategy<Value = (Vec<u64>, Vec<(u64, u64)>)> {
        (
            prop::collection::vec(0u64..40, 0..30),
            prop::collection::vec((0u64..40, 0u64..40), 0..60),
        )
    }

    proptest! {
        /// Property: the partition does not depend on edge order or direction
        #[test]
        fn test_partition_independent_of_edge_order(
            (members, raw_edges) in arb_graph(),
            seed in any::<u64>(),
        ) {
            let forward: Vec<Edge> = raw_edges.iter().map(|(a, b)| edge(*a, *b)).collect();

            let mut shuffled: Vec<Edge> = raw_edges.iter().map(|(a, b)| edge(*b, *a)).collect();
            let len = shuffled.len();
            if len > 1 {
                let mut state = seed;
                for i in (1..len).rev() {
                    state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                    let j = (state >> 33) as usize % (i + 1);
                    shuffled.swap(i, j);
                }
            }

            let mut reversed_members = ids(&members);
            reversed_members.reverse();

            prop_assert_eq!(
                group_members(ids(&members), forward),
                group_members(reversed_members, shuffled)
            );
        }

        /// Property: groups partition the distinct input ids
        #[test]
        fn test_groups_partition_members((members, raw_edges) in arb_graph()) {
            let groups = group_members(ids(&members), raw_edges.iter().map(|(a, b)| edge(*a, *b)));

            let distinct: BTreeSet<MemberId> = ids(&members).into_iter().collect();
            let total: usize = groups.iter().map(FamilyGroup::len).sum();
            prop_assert_eq!(total, distinct.len());

            let union: BTreeSet<MemberId> = groups.iter().flat_map(|g| g.members().iter().copied()).collect();
            prop_assert_eq!(union, distinct);
        }
    }
}
