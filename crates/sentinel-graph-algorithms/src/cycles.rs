//! Bounded simple-cycle enumeration through a start node
//!
//! Counts directed simple cycles of at most `max_length` hops that start and
//! end at a given node and visit at least one flagged node (the start node
//! included). Every edge is a separate step, so parallel edges yield separate
//! cycles; collapse the view first for node-sequence counting.

use super::common::GraphView;

/// Search limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleSearchConfig {
    /// Maximum cycle length in hops. 0 disables the search.
    pub max_length: usize,
    /// Maximum number of path extensions per start node (None = unbounded)
    pub budget: Option<usize>,
}

impl Default for CycleSearchConfig {
    fn default() -> Self {
        Self {
            max_length: 4,
            budget: None,
        }
    }
}

/// Outcome of one start node's search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleCount {
    /// Number of closing edges that completed a flagged cycle
    pub cycles: u64,
    /// Number of times the path was extended by one node
    pub expansions: usize,
    /// The budget ran out before the search space was exhausted
    pub truncated: bool,
}

/// One level of the explicit DFS stack
#[derive(Clone, Copy)]
struct Frame {
    node: usize,
    /// Some node on the path up to and including `node` is flagged
    flagged: bool,
    /// Next position in `node`'s successor slice
    cursor: usize,
}

/// Count flagged simple cycles of length `<= max_length` through `start`.
///
/// The path is simple: a node already on it is never re-entered, except for
/// the edge back to `start`, which closes a cycle instead of extending the path.
/// `flagged` is indexed by dense node index.
pub fn count_flagged_cycles(
    view: &GraphView,
    start: usize,
    flagged: &[bool],
    config: &CycleSearchConfig,
) -> CycleCount {
    let mut result = CycleCount::default();
    if config.max_length == 0 {
        return result;
    }

    let mut stack = vec![Frame {
        node: start,
        flagged: flagged[start],
        cursor: 0,
    }];

    while let Some(top) = stack.len().checked_sub(1) {
        // Stack height minus one is the number of hops from `start`
        let depth = top;
        let Frame { node, flagged: path_flagged, cursor } = stack[top];
        let successors = view.successors(node);

        if depth >= config.max_length || cursor >= successors.len() {
            stack.pop();
            continue;
        }
        stack[top].cursor += 1;
        let next = successors[cursor];

        if next == start {
            if path_flagged {
                result.cycles += 1;
            }
            continue;
        }
        if stack.iter().any(|frame| frame.node == next) {
            continue;
        }
        if config.budget.is_some_and(|budget| result.expansions >= budget) {
            result.truncated = true;
            break;
        }

        result.expansions += 1;
        stack.push(Frame {
            node: next,
            flagged: path_flagged || flagged[next],
            cursor: 0,
        });
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(max_length: usize) -> CycleSearchConfig {
        CycleSearchConfig {
            max_length,
            budget: None,
        }
    }

    #[test]
    fn test_flagged_triangle() {
        // 0 -> 1 -> 2 -> 0, node 1 flagged
        let view = GraphView::from_edges(4, &[(0, 1), (1, 2), (2, 0), (3, 0)]);
        let flagged = [false, true, false, false];

        for start in 0..3 {
            assert_eq!(count_flagged_cycles(&view, start, &flagged, &config(3)).cycles, 1);
        }
        // Node 3 only feeds into the cycle
        assert_eq!(count_flagged_cycles(&view, 3, &flagged, &config(4)).cycles, 0);
    }

    #[test]
    fn test_unflagged_cycle_is_ignored() {
        let view = GraphView::from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        let flagged = [false; 3];

        assert_eq!(count_flagged_cycles(&view, 0, &flagged, &config(4)).cycles, 0);
    }

    #[test]
    fn test_zero_length_and_sink() {
        let view = GraphView::from_edges(3, &[(0, 1), (1, 0), (0, 2)]);
        let flagged = [true; 3];

        assert_eq!(count_flagged_cycles(&view, 0, &flagged, &config(0)), CycleCount::default());
        // Node 2 has no outgoing edges
        assert_eq!(count_flagged_cycles(&view, 2, &flagged, &config(4)).cycles, 0);
    }

    #[test]
    fn test_length_bound() {
        // 4-cycle 0->1->2->3->0
        let view = GraphView::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let flagged = [true, false, false, false];

        assert_eq!(count_flagged_cycles(&view, 0, &flagged, &config(3)).cycles, 0);
        assert_eq!(count_flagged_cycles(&view, 0, &flagged, &config(4)).cycles, 1);
        assert_eq!(count_flagged_cycles(&view, 2, &flagged, &config(4)).cycles, 1);
    }

    #[test]
    fn test_parallel_edges_count_separately() {
        // Two parallel closing edges 1->0, and two parallel interior edges 0->1
        let view = GraphView::from_edges(2, &[(0, 1), (0, 1), (1, 0), (1, 0)]);
        let flagged = [false, true];

        assert_eq!(count_flagged_cycles(&view, 0, &flagged, &config(2)).cycles, 4);

        let collapsed = view.collapse_parallel_edges();
        assert_eq!(count_flagged_cycles(&collapsed, 0, &flagged, &config(2)).cycles, 1);
    }

    #[test]
    fn test_self_loop_closes_immediately() {
        let view = GraphView::from_edges(1, &[(0, 0)]);

        assert_eq!(count_flagged_cycles(&view, 0, &[true], &config(1)).cycles, 1);
        assert_eq!(count_flagged_cycles(&view, 0, &[false], &config(1)).cycles, 0);
    }

    #[test]
    fn test_paths_do_not_revisit_nodes() {
        // 0->1->2->1 inner loop must not be walked around: only 0->1->2->0 and 0->1->0
        let view = GraphView::from_edges(3, &[(0, 1), (1, 2), (2, 1), (2, 0), (1, 0)]);
        let flagged = [true, false, false];

        assert_eq!(count_flagged_cycles(&view, 0, &flagged, &config(6)).cycles, 2);
    }

    #[test]
    fn test_budget_truncates() {
        // Complete digraph on 5 nodes
        let mut edges = Vec::new();
        for u in 0..5 {
            for v in 0..5 {
                if u != v {
                    edges.push((u, v));
                }
            }
        }
        let view = GraphView::from_edges(5, &edges);
        let flagged = [true; 5];

        let full = count_flagged_cycles(&view, 0, &flagged, &config(4));
        assert!(!full.truncated);
        // Cycles through 0 of length 2..=4: 4 + 4*3 + 4*3*2
        assert_eq!(full.cycles, 40);

        let limited = CycleSearchConfig {
            max_length: 4,
            budget: Some(3),
        };
        let partial = count_flagged_cycles(&view, 0, &flagged, &limited);
        assert!(partial.truncated);
        assert_eq!(partial.expansions, 3);
        assert!(partial.cycles < full.cycles);
    }
}
