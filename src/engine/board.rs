use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MIN_SIZE: usize = 3;
pub const MAX_SIZE: usize = 10;
const MAX_CELLS: usize = MAX_SIZE * MAX_SIZE;

/// Largest board size whose base-3 ordinal fits a u128 (3^64 < 2^128).
pub const ORDINAL_SIZE_LIMIT: usize = 8;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Player {
    X,
    O,
}

#[derive(Error, Debug)]
#[error("invalid board size: {0} (supported sizes are 3 to 10)")]
pub struct InvalidSizeError(pub usize);

#[derive(Error, Debug)]
#[error("board parse error")]
pub struct BoardParseError;

#[derive(Error, Debug)]
#[error("invalid player (expected X or O)")]
pub struct PlayerParseError;

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    fn to_char(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Player {
    type Err = PlayerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            _ => Err(PlayerParseError),
        }
    }
}

/// N×N grid with cells in row-major order. Cells beyond `size * size` stay
/// `None` so equality and hashing see only the playable area.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    cells: [Option<Player>; MAX_CELLS],
    size: usize,
}

impl Board {
    pub fn new(size: usize) -> Result<Board, InvalidSizeError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(InvalidSizeError(size));
        }
        Ok(Board {
            cells: [None; MAX_CELLS],
            size,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({}, {}) is outside the {}x{} board",
            row,
            col,
            self.size,
            self.size
        );
        row * self.size + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[self.index(row, col)]
    }

    pub fn put(&mut self, row: usize, col: usize, player: Player) {
        let index = self.index(row, col);
        assert!(
            self.cells[index].is_none(),
            "cell ({}, {}) is already occupied",
            row,
            col
        );
        self.cells[index] = Some(player);
    }

    pub fn clear(&mut self, row: usize, col: usize) {
        let index = self.index(row, col);
        self.cells[index] = None;
    }

    pub fn is_full(&self) -> bool {
        self.cells[..self.size * self.size].iter().all(|c| c.is_some())
    }

    fn row_filled(&self, row: usize, player: Player) -> bool {
        (0..self.size).all(|col| self.get(row, col) == Some(player))
    }

    fn col_filled(&self, col: usize, player: Player) -> bool {
        (0..self.size).all(|row| self.get(row, col) == Some(player))
    }

    fn diag_filled(&self, player: Player) -> bool {
        (0..self.size).all(|i| self.get(i, i) == Some(player))
    }

    fn anti_diag_filled(&self, player: Player) -> bool {
        (0..self.size).all(|i| self.get(i, self.size - 1 - i) == Some(player))
    }

    pub fn has_won(&self, player: Player) -> bool {
        (0..self.size).any(|row| self.row_filled(row, player))
            || (0..self.size).any(|col| self.col_filled(col, player))
            || self.diag_filled(player)
            || self.anti_diag_filled(player)
    }

    /// Base-3 positional encoding of the cell contents (Empty=0, X=1, O=2,
    /// weight 3^index in row-major order). A pure function of the contents,
    /// so positions reached by different move orders encode identically.
    /// `None` for boards larger than [`ORDINAL_SIZE_LIMIT`].
    pub fn ordinal(&self) -> Option<u128> {
        if self.size > ORDINAL_SIZE_LIMIT {
            return None;
        }
        let mut ordinal = 0u128;
        let mut weight = 1u128;
        for cell in &self.cells[..self.size * self.size] {
            let digit = match cell {
                None => 0,
                Some(Player::X) => 1,
                Some(Player::O) => 2,
            };
            ordinal += digit * weight;
            weight *= 3;
        }
        Some(ordinal)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get(row, col) {
                    Some(player) => write!(f, "{}", player)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        let size = (MIN_SIZE..=MAX_SIZE)
            .find(|n| n * n == marks.len())
            .ok_or(BoardParseError)?;
        let mut board = Board::new(size).map_err(|_| BoardParseError)?;
        for (pos, mark) in marks.iter().enumerate() {
            let (row, col) = (pos / size, pos % size);
            match mark {
                'X' | 'x' => board.put(row, col, Player::X),
                'O' | 'o' => board.put(row, col, Player::O),
                '.' => (),
                _ => return Err(BoardParseError),
            }
        }
        Ok(board)
    }
}
