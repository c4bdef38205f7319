use crate::engine::board::*;
use fnv::FnvHashMap;
use std::fmt;

/// Largest board size backed by a dense table; 3^9 entries at size 3.
/// Beyond this the ordinal space is too large to allocate densely, so the
/// table falls back to a hash map keyed by ordinal.
pub const DENSE_SIZE_LIMIT: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Loss,
    Draw,
    Win,
}

impl Outcome {
    pub fn score(self) -> i8 {
        match self {
            Outcome::Loss => -1,
            Outcome::Draw => 0,
            Outcome::Win => 1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Loss => write!(f, "loss"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Win => write!(f, "win"),
        }
    }
}

/// A cell to move into and the outcome it guarantees for the mover.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub outcome: Outcome,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col_char = b'a' + self.col as u8;
        write!(f, "{}{}", col_char as char, self.row + 1)
    }
}

const WIN_BIT: u16 = 1 << 4;
const DRAW_BIT: u16 = 1 << 5;
const LOSS_BIT: u16 = 1 << 6;

// Row in bits 0-3, the 1-of-3 outcome flag in bits 4-6, column in bits 8-11.
// Exactly one outcome bit is always set, so no packed move encodes to zero
// and the zero entry stays reserved as the "not yet computed" sentinel.
fn encode(mv: Move) -> u16 {
    debug_assert!(mv.row < MAX_SIZE && mv.col < MAX_SIZE);
    let outcome_bit = match mv.outcome {
        Outcome::Win => WIN_BIT,
        Outcome::Draw => DRAW_BIT,
        Outcome::Loss => LOSS_BIT,
    };
    mv.row as u16 | outcome_bit | (mv.col as u16) << 8
}

fn decode(bits: u16) -> Move {
    let row = (bits & 0xF) as usize;
    let col = (bits >> 8 & 0xF) as usize;
    let outcome = if bits & WIN_BIT != 0 {
        Outcome::Win
    } else if bits & DRAW_BIT != 0 {
        Outcome::Draw
    } else {
        Outcome::Loss
    };
    Move { row, col, outcome }
}

enum Entries {
    Dense(Vec<u16>),
    Sparse(FnvHashMap<u128, u16>),
    Disabled,
}

/// Memo cache from position ordinal to the best response found there.
/// Entries accumulate for the lifetime of the table and are never evicted.
pub struct MoveTable {
    entries: Entries,
}

impl MoveTable {
    pub fn new(size: usize) -> MoveTable {
        let entries = if size <= DENSE_SIZE_LIMIT {
            Entries::Dense(vec![0; 3usize.pow((size * size) as u32)])
        } else if size <= ORDINAL_SIZE_LIMIT {
            Entries::Sparse(FnvHashMap::default())
        } else {
            // No primitive integer holds 3^(size^2); search runs uncached.
            Entries::Disabled
        };
        MoveTable { entries }
    }

    pub fn lookup(&self, ordinal: u128) -> Option<Move> {
        let bits = match &self.entries {
            Entries::Dense(table) => table[ordinal as usize],
            Entries::Sparse(map) => map.get(&ordinal).copied().unwrap_or(0),
            Entries::Disabled => 0,
        };
        if bits == 0 { None } else { Some(decode(bits)) }
    }

    pub fn store(&mut self, ordinal: u128, mv: Move) {
        let bits = encode(mv);
        debug_assert_ne!(bits, 0);
        match &mut self.entries {
            Entries::Dense(table) => table[ordinal as usize] = bits,
            Entries::Sparse(map) => {
                map.insert(ordinal, bits);
            }
            Entries::Disabled => (),
        }
    }

    pub fn len(&self) -> usize {
        match &self.entries {
            Entries::Dense(table) => table.iter().filter(|&&bits| bits != 0).count(),
            Entries::Sparse(map) => map.len(),
            Entries::Disabled => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
