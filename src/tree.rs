//! Depth-bounded game trees built from a [`Board`]

use log::trace;

use std::collections::BTreeMap;

use crate::board::{Board, BoardError, GameState, Player};

/// Why a node has no children
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum LeafKind {
    /// The depth bound was reached
    Horizon,
    /// The position is won or has no legal moves
    Terminal,
}

#[derive(Clone, Debug)]
pub enum NodeKind {
    Leaf(LeafKind),
    /// Children keyed by column, iterated in ascending order
    Branch(BTreeMap<usize, GameTreeNode>),
}

/// A position together with every position reachable from it within the tree
#[derive(Clone, Debug)]
pub struct GameTreeNode {
    pub state: Board,
    pub kind: NodeKind,
}

impl GameTreeNode {
    pub fn leaf(state: Board, kind: LeafKind) -> Self {
        Self {
            state,
            kind: NodeKind::Leaf(kind),
        }
    }

    pub fn branch(state: Board, children: BTreeMap<usize, GameTreeNode>) -> Self {
        Self {
            state,
            kind: NodeKind::Branch(children),
        }
    }

    pub fn children(&self) -> Option<&BTreeMap<usize, GameTreeNode>> {
        match &self.kind {
            NodeKind::Branch(children) => Some(children),
            NodeKind::Leaf(_) => None,
        }
    }

    /// Total number of nodes, including this one
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .map(|children| children.values().map(GameTreeNode::node_count).sum())
            .unwrap_or(0)
    }

    /// Length in plies of the longest path to a leaf
    pub fn depth(&self) -> usize {
        self.children()
            .and_then(|children| children.values().map(GameTreeNode::depth).max())
            .map(|depth| depth + 1)
            .unwrap_or(0)
    }
}

/// Builds the tree of positions reachable from `root` in at most `depth` plies,
/// `acting` moving first and the players alternating on every level after that
pub fn build_tree(
    root: &Board,
    depth: usize,
    acting: Player,
    n: usize,
) -> Result<GameTreeNode, BoardError> {
    let node = build_node(root.clone(), depth, acting, n)?;
    trace!(
        "built tree of {} nodes, depth {} for player {}",
        node.node_count(),
        depth,
        acting
    );
    Ok(node)
}

fn build_node(
    state: Board,
    depth: usize,
    acting: Player,
    n: usize,
) -> Result<GameTreeNode, BoardError> {
    if state.outcome(n) != GameState::Playing {
        return Ok(GameTreeNode::leaf(state, LeafKind::Terminal));
    }
    if depth == 0 {
        return Ok(GameTreeNode::leaf(state, LeafKind::Horizon));
    }

    let mut children = BTreeMap::new();
    for column in state.legal_moves() {
        let child = state.with_move(column, acting)?;
        children.insert(column, build_node(child, depth - 1, acting.other(), n)?);
    }
    Ok(GameTreeNode::branch(state, children))
}

/// Upper bound on the number of nodes in a tree of the given branching factor
/// and depth, saturating at `usize::MAX`
pub fn estimated_tree_size(width: usize, depth: usize) -> usize {
    let mut total: usize = 1;
    let mut level: usize = 1;
    for _ in 0..depth {
        level = level.saturating_mul(width);
        total = total.saturating_add(level);
    }
    total
}
