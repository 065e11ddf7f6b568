//! Adversarial search over a [`GameTreeNode`]
//!
//! Both algorithms score every position from the point of view of a fixed
//! perspective player. The player to act alternates on every level of the
//! tree, starting with the perspective player at the root: levels where the
//! perspective player acts maximise, the others minimise.

use log::debug;
use thiserror::Error;

use std::fmt;

use crate::board::Player;
use crate::heuristic::Evaluator;
use crate::tree::{GameTreeNode, LeafKind, NodeKind};

pub mod alphabeta;

pub mod minimax;

/// The move chosen at the root of a search and its backed-up value
///
/// `best_move` is only `None` when the root itself is a leaf of the tree.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub best_move: Option<usize>,
    pub value: f64,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("no legal moves in the searched position")]
    NoLegalMoves,

    #[error("branch node at depth {depth} has no children")]
    EmptyBranch { depth: usize },
}

/// The available search algorithms
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

impl Algorithm {
    /// Finds the best move at the root of `tree` for `perspective`, who acts at the root
    pub fn select(
        self,
        tree: &GameTreeNode,
        perspective: Player,
        evaluator: &Evaluator,
    ) -> Result<SearchResult, SearchError> {
        let evals_before = evaluator.eval_count();
        let result = match self {
            Algorithm::Minimax => minimax::select(tree, perspective, evaluator),
            Algorithm::AlphaBeta => alphabeta::select(tree, perspective, evaluator),
        }?;
        debug!(
            "{} search for player {} chose {:?} with value {} ({} evaluations)",
            self,
            perspective,
            result.best_move.map(|column| column + 1),
            result.value,
            evaluator.eval_count() - evals_before
        );
        Ok(result)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => write!(f, "minimax"),
            Algorithm::AlphaBeta => write!(f, "alpha-beta"),
        }
    }
}

/// Handles a root that is already a leaf: a terminal root cannot be searched,
/// a horizon root is scored directly
fn root_leaf(
    tree: &GameTreeNode,
    perspective: Player,
    evaluator: &Evaluator,
) -> Option<Result<SearchResult, SearchError>> {
    match tree.kind {
        NodeKind::Leaf(LeafKind::Terminal) => Some(Err(SearchError::NoLegalMoves)),
        NodeKind::Leaf(LeafKind::Horizon) => Some(Ok(SearchResult {
            best_move: None,
            value: evaluator.evaluate(perspective, &tree.state),
        })),
        NodeKind::Branch(_) => None,
    }
}

/// Running best of a node, starting out worse than any value
fn initial(maximizing: bool) -> SearchResult {
    SearchResult {
        best_move: None,
        value: if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        },
    }
}

/// Records `value` for `column` if it strictly improves on `best`, so the
/// first child seen wins ties
fn update(best: &mut SearchResult, column: usize, value: f64, maximizing: bool) {
    let improves = match best.best_move {
        None => true,
        Some(_) if maximizing => value > best.value,
        Some(_) => value < best.value,
    };
    if improves {
        best.best_move = Some(column);
        best.value = value;
    }
}
