use anyhow::anyhow;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};
use thiserror::Error;

use std::convert::TryFrom;
use std::fmt;
use std::io::{stdout, Write};

/// One of the two participants of a game
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The player who moves after `self`
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Numeric id of the player, 1 or 2 (0 is reserved for empty cells)
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = u8;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(other),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    Won(Player),
    Draw,
}

/// Columns in errors are 1-indexed, as shown to players
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    #[error("column {column} out of range, columns must be between 1 and {width}")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("could not parse '{0}' as a valid move")]
    Parse(char),
}

/// A Connect-N grid
///
/// Cells are stored left-to-right, bottom-to-top. Columns are 0-indexed
/// everywhere except in move strings and on screen, where they count from 1.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    heights: Vec<usize>,
    history: Vec<usize>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
            heights: vec![0; width],
            history: Vec::new(),
        }
    }

    /// Builds a board from a string of 1-indexed column digits, players alternating
    /// from player one
    pub fn from_moves<S: AsRef<str>>(
        width: usize,
        height: usize,
        moves: S,
    ) -> Result<Self, BoardError> {
        let mut board = Self::new(width, height);
        let mut player = Player::One;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) if column >= 1 => {
                    board.play(column - 1, player)?;
                    player = player.other();
                }
                _ => return Err(BoardError::Parse(column_char)),
            }
        }
        Ok(board)
    }

    /// Columns played so far, in order
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn num_moves(&self) -> usize {
        self.history.len()
    }

    /// `(column, row)` with row 0 at the bottom
    pub fn cell(&self, column: usize, row: usize) -> Cell {
        self.cells[column + self.width * row]
    }

    pub fn is_legal(&self, column: usize) -> bool {
        column < self.width && self.heights[column] < self.height
    }

    pub fn legal_moves(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.width).filter(move |&column| self.is_legal(column))
    }

    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_empty())
    }

    fn check_move(&self, column: usize) -> Result<(), BoardError> {
        if column >= self.width {
            return Err(BoardError::ColumnOutOfRange {
                column: column + 1,
                width: self.width,
            });
        }
        if self.heights[column] >= self.height {
            return Err(BoardError::ColumnFull { column: column + 1 });
        }
        Ok(())
    }

    /// Drops a piece for `player` into `column`
    pub fn play(&mut self, column: usize, player: Player) -> Result<(), BoardError> {
        self.check_move(column)?;
        self.cells[column + self.width * self.heights[column]] = Cell::Occupied(player);
        self.heights[column] += 1;
        self.history.push(column);
        Ok(())
    }

    /// Returns a copy of the board with the move applied, leaving `self` untouched
    pub fn with_move(&self, column: usize, player: Player) -> Result<Self, BoardError> {
        let mut next = self.clone();
        next.play(column, player)?;
        Ok(next)
    }

    /// Returns the player owning a run of at least `n` pieces, if any
    pub fn winner(&self, n: usize) -> Option<Player> {
        if n == 0 {
            return None;
        }
        // right, up, up-right, down-right
        const DIRECTIONS: [(i64, i64); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

        for row in 0..self.height {
            for column in 0..self.width {
                let player = match self.cell(column, row) {
                    Cell::Occupied(player) => player,
                    Cell::Empty => continue,
                };
                for &(dx, dy) in DIRECTIONS.iter() {
                    if self.run_length(column, row, dx, dy, player, n) >= n {
                        return Some(player);
                    }
                }
            }
        }
        None
    }

    fn run_length(
        &self,
        column: usize,
        row: usize,
        dx: i64,
        dy: i64,
        player: Player,
        limit: usize,
    ) -> usize {
        let (mut x, mut y) = (column as i64, row as i64);
        let mut run = 0;
        while run < limit
            && x >= 0
            && y >= 0
            && x < self.width as i64
            && y < self.height as i64
            && self.cell(x as usize, y as usize) == Cell::Occupied(player)
        {
            run += 1;
            x += dx;
            y += dy;
        }
        run
    }

    pub fn outcome(&self, n: usize) -> GameState {
        match self.winner(n) {
            Some(player) => GameState::Won(player),
            None if self.is_full() => GameState::Draw,
            None => GameState::Playing,
        }
    }

    /// Every straight line of `n` cells on the board
    pub fn windows(&self, n: usize) -> Vec<Vec<Cell>> {
        let mut windows = Vec::new();
        if n == 0 {
            return windows;
        }
        let (width, height, n) = (self.width as i64, self.height as i64, n as i64);
        for row in 0..height {
            for column in 0..width {
                for &(dx, dy) in [(1i64, 0i64), (0, 1), (1, 1), (1, -1)].iter() {
                    let (end_x, end_y) = (column + dx * (n - 1), row + dy * (n - 1));
                    if end_x < 0 || end_x >= width || end_y < 0 || end_y >= height {
                        continue;
                    }
                    windows.push(
                        (0..n)
                            .map(|i| self.cell((column + dx * i) as usize, (row + dy * i) as usize))
                            .collect(),
                    );
                }
            }
        }
        windows
    }

    /// Checks that a terminal of `columns` by `rows` can hold the drawn board
    pub fn fits_terminal(&self, (columns, rows): (u16, u16)) -> anyhow::Result<()> {
        // column header, grid, and the line left below it
        if self.height + 2 > rows as usize || self.width > columns as usize {
            return Err(anyhow!(
                "a {}x{} board does not fit in a {}x{} terminal",
                self.width,
                self.height,
                columns,
                rows
            ));
        }
        Ok(())
    }

    /// Draws the board to the terminal in colour
    pub fn display(&self) -> anyhow::Result<()> {
        self.fits_terminal(crossterm::terminal::size()?)?;
        let mut stdout = stdout();

        let cols: String = (1..=self.width).map(|x| (x % 10).to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;
        for _ in 0..self.height {
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;

        let (origin_x, origin_y) = crossterm::cursor::position()?;

        for (idx, cell) in self.cells.iter().enumerate() {
            let pos_x = origin_x + (idx % self.width) as u16;
            let pos_y = origin_y
                .checked_sub((idx / self.width) as u16)
                .ok_or_else(|| anyhow!("terminal too short to draw the board"))?;

            stdout
                .queue(MoveTo(pos_x, pos_y))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match cell {
                            Cell::Occupied(Player::One) => Color::Red,
                            Cell::Occupied(Player::Two) => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
        }
        stdout
            .queue(MoveTo(origin_x + self.width as u16, origin_y))?
            .queue(PrintStyledContent(style("\n")))?;
        stdout.flush()?;
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.height).rev() {
            for column in 0..self.width {
                let symbol = match self.cell(column, row) {
                    Cell::Occupied(player) => player.symbol(),
                    Cell::Empty => '.',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        let cols: String = (1..=self.width).map(|x| (x % 10).to_string()).collect();
        writeln!(f, "{}", cols)
    }
}
