use anyhow::Result;
use log::info;

use std::io::{stdin, stdout, Stdin, Write};
use std::str::FromStr;

use connectn_ai::arena::{play_game, run_arena};
use connectn_ai::board::{Board, GameState};
use connectn_ai::config::{GameConfig, MatchConfig, PlayerConfig, PlayerKind};
use connectn_ai::*;

/// Asks a y/n question until one of the two is given
fn ask_yes_no(stdin: &Stdin, question: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{} y/n: ", question);
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

/// Asks for a number, an empty answer picks `default`
fn ask_number<T: FromStr + Copy + std::fmt::Display>(
    stdin: &Stdin,
    question: &str,
    default: T,
) -> Result<T> {
    loop {
        let mut buffer = String::new();
        print!("{} [{}]: ", question, default);
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;

        let answer = buffer.trim();
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse::<T>() {
            Ok(number) => return Ok(number),
            Err(_) => println!("Invalid number: {}", answer),
        }
    }
}

fn ask_player(stdin: &Stdin, id: u8, game: &GameConfig) -> Result<PlayerConfig> {
    loop {
        let config = if ask_yes_no(stdin, &format!("Is player {} AI controlled?", id))? {
            let kind = if ask_yes_no(stdin, "Use alpha-beta pruning?")? {
                PlayerKind::AlphaBeta
            } else {
                PlayerKind::Minimax
            };
            let depth = ask_number(stdin, "Search depth", DEFAULT_DEPTH)?;
            PlayerConfig::new(id, kind).with_depth(depth)
        } else {
            PlayerConfig::new(id, PlayerKind::Human)
        };

        match config.validate(game) {
            Ok(_) => return Ok(config),
            Err(err) => println!("{}", err),
        }
    }
}

fn ask_game(stdin: &Stdin) -> Result<GameConfig> {
    loop {
        let width = ask_number(stdin, "Board width", DEFAULT_WIDTH)?;
        let height = ask_number(stdin, "Board height", DEFAULT_HEIGHT)?;
        let n = ask_number(stdin, "Tiles in a row to win", DEFAULT_N)?;
        match GameConfig::new(width, height, n) {
            Ok(game) => return Ok(game),
            Err(err) => println!("{}", err),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let stdin = stdin();

    println!("Welcome to Connect N\n");

    let game = ask_game(&stdin)?;
    let config = MatchConfig::new(
        game,
        ask_player(&stdin, 1, &game)?,
        ask_player(&stdin, 2, &game)?,
    )?;
    info!("starting with {:?}", config);

    let all_ai = config.players.iter().all(|player| player.kind != PlayerKind::Human);
    if all_ai && ask_yes_no(&stdin, "Run a series of games instead of a single game?")? {
        let games = ask_number(&stdin, "Number of games", game.width * game.width)?;
        let summary = run_arena(&config, games)?;

        println!(
            "Player 1 won {}, player 2 won {}, {} draws",
            summary.wins[0], summary.wins[1], summary.draws
        );
        println!(
            "Positions evaluated: player 1 {}, player 2 {}",
            summary.eval_counts[0], summary.eval_counts[1]
        );
        return Ok(());
    }

    let board = Board::new(game.width, game.height);
    board.display()?;

    let mut players = config.build_players()?;
    let record = play_game(board, &mut players, true)?;

    match record.outcome {
        GameState::Won(player) => println!("Player {} wins!", player.id()),
        _ => println!("Draw!"),
    }
    println!(
        "Positions evaluated: player 1 {}, player 2 {}",
        record.eval_counts[0], record.eval_counts[1]
    );
    Ok(())
}
