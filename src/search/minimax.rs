//! Plain minimax

use super::{initial, root_leaf, update, SearchError, SearchResult};
use crate::board::Player;
use crate::heuristic::Evaluator;
use crate::tree::{GameTreeNode, NodeKind};

/// Searches every node of `tree`
pub fn select(
    tree: &GameTreeNode,
    perspective: Player,
    evaluator: &Evaluator,
) -> Result<SearchResult, SearchError> {
    match root_leaf(tree, perspective, evaluator) {
        Some(result) => result,
        None => minimax(tree, perspective, perspective, 0, evaluator),
    }
}

fn minimax(
    node: &GameTreeNode,
    perspective: Player,
    acting: Player,
    depth: usize,
    evaluator: &Evaluator,
) -> Result<SearchResult, SearchError> {
    let children = match &node.kind {
        NodeKind::Leaf(_) => {
            return Ok(SearchResult {
                best_move: None,
                value: evaluator.evaluate(perspective, &node.state),
            })
        }
        NodeKind::Branch(children) => children,
    };
    if children.is_empty() {
        return Err(SearchError::EmptyBranch { depth });
    }

    let maximizing = acting == perspective;
    let mut best = initial(maximizing);
    for (&column, child) in children {
        let value = minimax(child, perspective, acting.other(), depth + 1, evaluator)?.value;
        update(&mut best, column, value, maximizing);
    }
    Ok(best)
}
