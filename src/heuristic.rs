//! Static evaluation of board positions

use std::cell::Cell as CountCell;
use std::fmt;

use crate::board::{Board, Cell, Player};

/// Score given to a won position, negated for a lost one
pub const WIN_SCORE: f64 = 1_000_000.0;

/// A deterministic scoring function for positions
///
/// Higher scores must always mean a better position for `perspective`.
pub trait Heuristic {
    fn score(&self, perspective: Player, board: &Board) -> f64;

    fn name(&self) -> &str;
}

/// Scores positions by counting open lines
///
/// Every line of `n` cells holding pieces of only one player is worth the square
/// of that player's piece count, to them.
#[derive(Copy, Clone, Debug)]
pub struct SimpleHeuristic {
    n: usize,
}

impl SimpleHeuristic {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl Heuristic for SimpleHeuristic {
    fn score(&self, perspective: Player, board: &Board) -> f64 {
        match board.winner(self.n) {
            Some(winner) if winner == perspective => return WIN_SCORE,
            Some(_) => return -WIN_SCORE,
            None => {}
        }

        let mut score = 0.0;
        for window in board.windows(self.n) {
            let own = window.iter().filter(|&&c| c == Cell::Occupied(perspective)).count();
            let theirs = window
                .iter()
                .filter(|&&c| c == Cell::Occupied(perspective.other()))
                .count();
            match (own, theirs) {
                (own, 0) => score += (own * own) as f64,
                (0, theirs) => score -= (theirs * theirs) as f64,
                _ => {}
            }
        }
        score
    }

    fn name(&self) -> &str {
        "simple"
    }
}

/// Wraps a [`Heuristic`] and counts how often it has been consulted
pub struct Evaluator {
    heuristic: Box<dyn Heuristic>,
    eval_count: CountCell<usize>,
}

impl Evaluator {
    pub fn new<H: Heuristic + 'static>(heuristic: H) -> Self {
        Self {
            heuristic: Box::new(heuristic),
            eval_count: CountCell::new(0),
        }
    }

    pub fn evaluate(&self, perspective: Player, board: &Board) -> f64 {
        self.eval_count.set(self.eval_count.get() + 1);
        self.heuristic.score(perspective, board)
    }

    /// Number of positions evaluated so far
    pub fn eval_count(&self) -> usize {
        self.eval_count.get()
    }

    /// The legal column whose resulting position scores highest for `player`,
    /// lowest column on ties
    pub fn best_action(&self, player: Player, board: &Board) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for column in board.legal_moves() {
            let next = match board.with_move(column, player) {
                Ok(next) => next,
                Err(_) => continue,
            };
            let value = self.evaluate(player, &next);
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((column, value));
            }
        }
        best.map(|(column, _)| column)
    }
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.heuristic.name())
    }
}
