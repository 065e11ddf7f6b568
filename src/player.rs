//! Participants of a game: search-backed AI players and a human at the keyboard

use anyhow::{anyhow, Result};
use log::{debug, warn};

use std::fmt;
use std::io::{stdin, stdout, BufRead, BufReader, Write};

use crate::board::{Board, Player};
use crate::config::ConfigError;
use crate::heuristic::Evaluator;
use crate::search::Algorithm;
use crate::tree::build_tree;

/// A player choosing moves with a fixed-depth game tree search
pub struct SearchPlayer {
    id: Player,
    n: usize,
    depth: usize,
    algorithm: Algorithm,
    evaluator: Evaluator,
}

impl SearchPlayer {
    pub fn new(
        id: Player,
        n: usize,
        depth: usize,
        algorithm: Algorithm,
        evaluator: Evaluator,
    ) -> Result<Self, ConfigError> {
        if depth == 0 {
            return Err(ConfigError::InvalidDepth(depth));
        }
        Ok(Self {
            id,
            n,
            depth,
            algorithm,
            evaluator,
        })
    }

    pub fn make_move(&self, board: &Board) -> Result<usize> {
        let tree = build_tree(board, self.depth, self.id, self.n)?;
        let result = self.algorithm.select(&tree, self.id, &self.evaluator)?;
        result
            .best_move
            .ok_or_else(|| anyhow!("{} search returned no move", self.algorithm))
    }
}

/// A player typing 1-indexed column numbers
///
/// When given an evaluator, the best single-move reply is offered as a hint.
pub struct HumanPlayer {
    id: Player,
    n: usize,
    evaluator: Option<Evaluator>,
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl HumanPlayer {
    pub fn new(
        id: Player,
        n: usize,
        evaluator: Option<Evaluator>,
        input: Box<dyn BufRead>,
        output: Box<dyn Write>,
    ) -> Self {
        Self {
            id,
            n,
            evaluator,
            input,
            output,
        }
    }

    pub fn stdio(id: Player, n: usize, evaluator: Option<Evaluator>) -> Self {
        Self::new(
            id,
            n,
            evaluator,
            Box::new(BufReader::new(stdin())),
            Box::new(stdout()),
        )
    }

    pub fn make_move(&mut self, board: &Board) -> Result<usize> {
        write!(self.output, "{}", board)?;

        if let Some(evaluator) = &self.evaluator {
            if let Some(hint) = evaluator.best_action(self.id, board) {
                writeln!(
                    self.output,
                    "Heuristic {} calculated the best move is: {}\n",
                    evaluator,
                    hint + 1
                )?;
            }
        }

        let column = self.ask_input(board)?;
        writeln!(self.output, "Selected column: {}", column)?;
        Ok(column - 1)
    }

    /// Prompts until a legal 1-indexed column is entered
    fn ask_input(&mut self, board: &Board) -> Result<usize> {
        loop {
            write!(
                self.output,
                "Player {}\nWhich column would you like to play in?\n",
                self.id
            )?;
            self.output.flush()?;

            let mut buffer = String::new();
            if self.input.read_line(&mut buffer)? == 0 {
                return Err(anyhow!("input closed before player {} chose a move", self.id));
            }

            match buffer.trim().parse::<usize>() {
                Err(_) => {
                    warn!("player {} entered '{}'", self.id, buffer.trim());
                    writeln!(
                        self.output,
                        "Please enter a number that corresponds to a column.\n"
                    )?;
                }
                Ok(column) if column == 0 || !board.is_legal(column - 1) => {
                    warn!("player {} chose unplayable column {}", self.id, column);
                    writeln!(
                        self.output,
                        "Please enter a valid column.\nThis column is either full or doesn't exist!\n"
                    )?;
                }
                Ok(column) => return Ok(column),
            }
        }
    }
}

/// Any participant that can be asked for a move
pub enum PlayerController {
    Search(SearchPlayer),
    Human(HumanPlayer),
}

impl PlayerController {
    pub fn id(&self) -> Player {
        match self {
            PlayerController::Search(player) => player.id,
            PlayerController::Human(player) => player.id,
        }
    }

    /// Length of a winning line in the game this player was set up for
    pub fn n(&self) -> usize {
        match self {
            PlayerController::Search(player) => player.n,
            PlayerController::Human(player) => player.n,
        }
    }

    /// Chooses a 0-indexed column to play in
    pub fn make_move(&mut self, board: &Board) -> Result<usize> {
        let column = match self {
            PlayerController::Search(player) => player.make_move(board)?,
            PlayerController::Human(player) => player.make_move(board)?,
        };
        debug!("player {} plays column {}", self.id(), column + 1);
        Ok(column)
    }

    /// Number of times this player's evaluator has scored a position
    pub fn eval_count(&self) -> usize {
        match self {
            PlayerController::Search(player) => player.evaluator.eval_count(),
            PlayerController::Human(player) => player
                .evaluator
                .as_ref()
                .map_or(0, |evaluator| evaluator.eval_count()),
        }
    }
}

impl fmt::Display for PlayerController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
