//! Validated game and player settings
//!
//! Everything that could make a search misbehave is rejected here, before a
//! game starts, rather than discovered halfway through a search.

use thiserror::Error;

use std::convert::TryFrom;

use crate::board::Player;
use crate::heuristic::{Evaluator, SimpleHeuristic};
use crate::player::{HumanPlayer, PlayerController, SearchPlayer};
use crate::search::Algorithm;
use crate::tree::estimated_tree_size;
use crate::{DEFAULT_DEPTH, DEFAULT_HEIGHT, DEFAULT_N, DEFAULT_WIDTH, MAX_TREE_NODES};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid board size {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("cannot play {n} in a row on a {width}x{height} board")]
    InvalidN { n: usize, width: usize, height: usize },

    #[error("search depth must be at least 1, got {0}")]
    InvalidDepth(usize),

    #[error("player id must be 1 or 2, got {0}")]
    InvalidPlayerId(u8),

    #[error("both players have id {0}")]
    DuplicatePlayer(u8),

    #[error("a depth {depth} search on a board {width} columns wide could visit {nodes} nodes, the limit is {limit}")]
    TreeTooLarge {
        width: usize,
        depth: usize,
        nodes: usize,
        limit: usize,
    },

    #[error("player {0} is human, only AI players can take part in an arena")]
    HumanInArena(u8),
}

/// Board dimensions and the length of a winning line
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub n: usize,
}

impl GameConfig {
    pub fn new(width: usize, height: usize, n: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        if n < 2 || (n > width && n > height) {
            return Err(ConfigError::InvalidN { n, width, height });
        }
        Ok(Self { width, height, n })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            n: DEFAULT_N,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PlayerKind {
    Minimax,
    AlphaBeta,
    Human,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct PlayerConfig {
    pub id: u8,
    pub kind: PlayerKind,
    /// Search depth in plies, ignored for human players
    pub depth: usize,
}

impl PlayerConfig {
    pub fn new(id: u8, kind: PlayerKind) -> Self {
        Self {
            id,
            kind,
            depth: DEFAULT_DEPTH,
        }
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn player(&self) -> Result<Player, ConfigError> {
        Player::try_from(self.id).map_err(ConfigError::InvalidPlayerId)
    }

    fn algorithm(&self) -> Option<Algorithm> {
        match self.kind {
            PlayerKind::Minimax => Some(Algorithm::Minimax),
            PlayerKind::AlphaBeta => Some(Algorithm::AlphaBeta),
            PlayerKind::Human => None,
        }
    }

    /// Checks the id, and for search players the depth and the size of the trees
    /// it would search
    pub fn validate(&self, game: &GameConfig) -> Result<Player, ConfigError> {
        let player = self.player()?;
        if self.kind != PlayerKind::Human {
            check_depth(game.width, self.depth)?;
        }
        Ok(player)
    }

    /// Creates the player, with a fresh evaluator, reading human input from stdin
    pub fn build(&self, game: &GameConfig) -> Result<PlayerController, ConfigError> {
        let player = self.validate(game)?;
        let evaluator = Evaluator::new(SimpleHeuristic::new(game.n));
        Ok(match self.algorithm() {
            Some(algorithm) => PlayerController::Search(SearchPlayer::new(
                player, game.n, self.depth, algorithm, evaluator,
            )?),
            None => PlayerController::Human(HumanPlayer::stdio(player, game.n, Some(evaluator))),
        })
    }
}

/// Rejects depths of zero and depths whose trees would be unreasonably large
pub fn check_depth(width: usize, depth: usize) -> Result<(), ConfigError> {
    if depth == 0 {
        return Err(ConfigError::InvalidDepth(depth));
    }
    let nodes = estimated_tree_size(width, depth);
    if nodes > MAX_TREE_NODES {
        return Err(ConfigError::TreeTooLarge {
            width,
            depth,
            nodes,
            limit: MAX_TREE_NODES,
        });
    }
    Ok(())
}

/// A game together with its two players, ordered by id
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct MatchConfig {
    pub game: GameConfig,
    pub players: [PlayerConfig; 2],
}

impl MatchConfig {
    pub fn new(
        game: GameConfig,
        first: PlayerConfig,
        second: PlayerConfig,
    ) -> Result<Self, ConfigError> {
        let a = first.validate(&game)?;
        let b = second.validate(&game)?;
        if a == b {
            return Err(ConfigError::DuplicatePlayer(first.id));
        }
        let players = if a == Player::One {
            [first, second]
        } else {
            [second, first]
        };
        Ok(Self { game, players })
    }

    pub fn build_players(&self) -> Result<[PlayerController; 2], ConfigError> {
        Ok([
            self.players[0].build(&self.game)?,
            self.players[1].build(&self.game)?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_dimensions() {
        assert!(GameConfig::new(7, 6, 4).is_ok());
        assert!(GameConfig::new(3, 3, 3).is_ok());
        assert_eq!(
            GameConfig::new(0, 6, 4),
            Err(ConfigError::InvalidDimensions { width: 0, height: 6 })
        );
        assert_eq!(
            GameConfig::new(3, 3, 4),
            Err(ConfigError::InvalidN { n: 4, width: 3, height: 3 })
        );
        assert_eq!(
            GameConfig::new(7, 6, 1),
            Err(ConfigError::InvalidN { n: 1, width: 7, height: 6 })
        );
    }

    #[test]
    fn rejects_bad_players_at_construction() {
        let game = GameConfig::default();
        assert_eq!(
            PlayerConfig::new(1, PlayerKind::Minimax).with_depth(0).build(&game).err(),
            Some(ConfigError::InvalidDepth(0))
        );
        assert_eq!(
            PlayerConfig::new(3, PlayerKind::AlphaBeta).build(&game).err(),
            Some(ConfigError::InvalidPlayerId(3))
        );
        assert_eq!(
            PlayerConfig::new(0, PlayerKind::Human).build(&game).err(),
            Some(ConfigError::InvalidPlayerId(0))
        );
        assert!(matches!(
            PlayerConfig::new(1, PlayerKind::Minimax).with_depth(12).build(&game),
            Err(ConfigError::TreeTooLarge { depth: 12, .. })
        ));
        // human players have no search depth to check
        assert!(PlayerConfig::new(2, PlayerKind::Human).with_depth(0).validate(&game).is_ok());
    }

    #[test]
    fn match_orders_players_by_id() -> Result<(), ConfigError> {
        let game = GameConfig::default();
        let config = MatchConfig::new(
            game,
            PlayerConfig::new(2, PlayerKind::Minimax),
            PlayerConfig::new(1, PlayerKind::AlphaBeta),
        )?;
        assert_eq!(config.players[0].id, 1);
        assert_eq!(config.players[1].kind, PlayerKind::Minimax);

        assert_eq!(
            MatchConfig::new(
                game,
                PlayerConfig::new(1, PlayerKind::Minimax),
                PlayerConfig::new(1, PlayerKind::AlphaBeta),
            ),
            Err(ConfigError::DuplicatePlayer(1))
        );
        Ok(())
    }
}
