//! Minimax with alpha-beta pruning
//!
//! `alpha` is the value the maximising player is already assured of and `beta`
//! the value the minimising player is already assured of. Once `alpha >= beta`
//! the remaining children of a node cannot change the result at the root, so
//! they are skipped. The returned move and value always match [`minimax`].
//!
//! [`minimax`]: super::minimax

use super::{initial, root_leaf, update, SearchError, SearchResult};
use crate::board::Player;
use crate::heuristic::Evaluator;
use crate::tree::{GameTreeNode, NodeKind};

/// Searches `tree`, skipping branches that cannot affect the result
pub fn select(
    tree: &GameTreeNode,
    perspective: Player,
    evaluator: &Evaluator,
) -> Result<SearchResult, SearchError> {
    match root_leaf(tree, perspective, evaluator) {
        Some(result) => result,
        None => alpha_beta(
            tree,
            perspective,
            perspective,
            f64::NEG_INFINITY,
            f64::INFINITY,
            0,
            evaluator,
        ),
    }
}

fn alpha_beta(
    node: &GameTreeNode,
    perspective: Player,
    acting: Player,
    mut alpha: f64,
    mut beta: f64,
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
        // the bounds are copied into the child, its narrowing never leaks back here
        let value = alpha_beta(
            child,
            perspective,
            acting.other(),
            alpha,
            beta,
            depth + 1,
            evaluator,
        )?
        .value;
        update(&mut best, column, value, maximizing);

        if maximizing {
            alpha = alpha.max(best.value);
        } else {
            beta = beta.min(best.value);
        }
        if alpha >= beta {
            break;
        }
    }
    Ok(best)
}
