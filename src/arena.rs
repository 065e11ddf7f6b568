//! Playing whole games, one at a time or as a parallel series between AI players

use anyhow::{anyhow, Result};
use indicatif::*;
use log::info;
use rayon::prelude::*;

use crate::board::{Board, GameState, Player};
use crate::config::{ConfigError, MatchConfig, PlayerKind};
use crate::player::PlayerController;

/// The result of a finished game
#[derive(Clone, Debug, PartialEq)]
pub struct GameRecord {
    pub outcome: GameState,
    /// Every column played, including any opening the game started from
    pub moves: Vec<usize>,
    /// Evaluator calls made by player one and player two
    pub eval_counts: [usize; 2],
}

/// Plays `board` out to the end, `players[0]` moving for player one
///
/// With `verbose` set the board is drawn to the terminal after every move.
pub fn play_game(
    mut board: Board,
    players: &mut [PlayerController; 2],
    verbose: bool,
) -> Result<GameRecord> {
    if players[0].id() != Player::One || players[1].id() != Player::Two {
        return Err(anyhow!("players must be given in id order"));
    }
    let n = players[0].n();

    loop {
        match board.outcome(n) {
            GameState::Playing => {
                let index = board.num_moves() % 2;
                let player = &mut players[index];

                if verbose {
                    if let PlayerController::Search(_) = player {
                        println!("Player {} is thinking...", player);
                    }
                }
                let column = player.make_move(&board)?;
                board.play(column, player.id())?;

                if verbose {
                    board.display()?;
                }
            }
            outcome => {
                info!("game over after {} moves: {:?}", board.num_moves(), outcome);
                return Ok(GameRecord {
                    outcome,
                    moves: board.history().to_vec(),
                    eval_counts: [players[0].eval_count(), players[1].eval_count()],
                });
            }
        }
    }
}

/// Tally of an arena series
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArenaSummary {
    pub games: usize,
    /// Wins for player one and player two
    pub wins: [usize; 2],
    pub draws: usize,
    /// Total evaluator calls for player one and player two
    pub eval_counts: [usize; 2],
}

impl ArenaSummary {
    fn record(&mut self, game: &GameRecord) {
        self.games += 1;
        match game.outcome {
            GameState::Won(Player::One) => self.wins[0] += 1,
            GameState::Won(Player::Two) => self.wins[1] += 1,
            _ => self.draws += 1,
        }
        self.eval_counts[0] += game.eval_counts[0];
        self.eval_counts[1] += game.eval_counts[1];
    }
}

/// The two-ply opening game `index` of a series starts from
///
/// Openings that are illegal or already decide the game fall back to the empty board,
/// as does every opening on a board without columns.
pub fn opening(index: usize, width: usize, height: usize, n: usize) -> Board {
    let empty = Board::new(width, height);
    if width == 0 {
        return empty;
    }
    let first = index % width;
    let second = (index / width) % width;

    let board = empty
        .with_move(first, Player::One)
        .and_then(|board| board.with_move(second, Player::Two));
    match board {
        Ok(board) if board.outcome(n) == GameState::Playing => board,
        _ => empty,
    }
}

/// Plays `games` AI-vs-AI games in parallel, each from its own [`opening`]
///
/// Every game builds its own players, so no evaluator is shared between threads.
pub fn run_arena(config: &MatchConfig, games: usize) -> Result<ArenaSummary> {
    for player in config.players.iter() {
        if player.kind == PlayerKind::Human {
            return Err(ConfigError::HumanInArena(player.id).into());
        }
    }
    let game = config.game;

    let progress = ProgressBar::new(games as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let records = (0..games)
        .into_par_iter()
        .map(|index| -> Result<GameRecord> {
            let mut players = config.build_players()?;
            let board = opening(index, game.width, game.height, game.n);
            let record = play_game(board, &mut players, false);
            progress.inc(1);
            record
        })
        .collect::<Result<Vec<_>>>()?;
    progress.finish();

    let mut summary = ArenaSummary::default();
    for record in records.iter() {
        summary.record(record);
    }
    info!(
        "arena finished: {} games, player 1 won {}, player 2 won {}, {} draws",
        summary.games, summary.wins[0], summary.wins[1], summary.draws
    );
    Ok(summary)
}
