//! A game tree search agent for playing the board game 'Connect N'
//!
//! Players look a fixed number of moves ahead, score the positions at the
//! end of every line of play with a heuristic, and pick the move that is best
//! against an opponent who always replies with their own best move. The
//! search is available as plain minimax or with alpha-beta pruning; both
//! always choose the same move.
//!
//! # Basic Usage
//!
//! ```
//! use connectn_ai::{board::*, heuristic::*, search::Algorithm, tree::build_tree};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // player one has three in a row and can win in column 4
//! let board = Board::from_moves(7, 6, "152535")?;
//! let tree = build_tree(&board, 2, Player::One, 4)?;
//! let evaluator = Evaluator::new(SimpleHeuristic::new(4));
//!
//! let result = Algorithm::AlphaBeta.select(&tree, Player::One, &evaluator)?;
//!
//! assert_eq!(result.best_move, Some(3));
//! assert_eq!(result.value, WIN_SCORE);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod tree;

pub mod heuristic;

pub mod search;

pub mod player;

pub mod config;

pub mod arena;


/// The default width of the game board in tiles
pub const DEFAULT_WIDTH: usize = 7;

/// The default height of the game board in tiles
pub const DEFAULT_HEIGHT: usize = 6;

/// The default number of tiles in a row needed to win
pub const DEFAULT_N: usize = 4;

/// The default search depth in plies
pub const DEFAULT_DEPTH: usize = 4;

/// The largest game tree a player may be configured to search
pub const MAX_TREE_NODES: usize = 20_000_000;

// the default line must fit on the default board
const_assert!(DEFAULT_N >= 2 && (DEFAULT_N <= DEFAULT_WIDTH || DEFAULT_N <= DEFAULT_HEIGHT));
// ensure a default-depth search stays well below the tree size limit
const_assert!(DEFAULT_DEPTH >= 1 && DEFAULT_WIDTH.pow(DEFAULT_DEPTH as u32 + 1) < MAX_TREE_NODES);
