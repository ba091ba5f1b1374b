use crate::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two sides in a game. The wire code is the discriminant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Code", into = "i64")]
pub enum Side {
    #[default]
    Human = 0,
    Computer = 1,
}

impl Side {
    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Human => "Human Player",
            Side::Computer => "Computer",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Side> for i64 {
    fn from(side: Side) -> i64 {
        side.code()
    }
}

impl TryFrom<i64> for Side {
    type Error = ModelError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Side::Human),
            1 => Ok(Side::Computer),
            _ => Err(ModelError::UnknownSide(code.to_string())),
        }
    }
}

impl TryFrom<Code> for Side {
    type Error = ModelError;

    fn try_from(code: Code) -> Result<Self, Self::Error> {
        match code.as_int() {
            Some(code) => Side::try_from(code),
            None => Err(ModelError::UnknownSide(code.to_string())),
        }
    }
}

/// A small integer the server sends either as a JSON number or as a numeric
/// string, depending on which branch of its handler produced the reply.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Code {
    Int(i64),
    Text(String),
}

impl Code {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Code::Int(code) => Some(*code),
            Code::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Code::Int(code) => write!(f, "{code}"),
            Code::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Cell {
    #[default]
    Empty,
    Taken(Side),
}

impl Cell {
    const EMPTY_CODE: i64 = 2;

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Taken(side) => Some(side),
        }
    }
}

impl From<Cell> for i64 {
    fn from(cell: Cell) -> i64 {
        match cell {
            Cell::Empty => Cell::EMPTY_CODE,
            Cell::Taken(side) => side.code(),
        }
    }
}

impl TryFrom<i64> for Cell {
    type Error = ModelError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            Cell::EMPTY_CODE => Ok(Cell::Empty),
            _ => Side::try_from(code)
                .map(Cell::Taken)
                .map_err(|_| ModelError::UnknownCell(code)),
        }
    }
}

/// Row-major grid as the server sends it. Rows are guaranteed to share one
/// length.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Board {
    rows: Vec<Vec<Cell>>,
}

impl Board {
    pub fn empty(rows: usize, cols: usize) -> Self {
        Board {
            rows: vec![vec![Cell::Empty; cols]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn is_clear(&self) -> bool {
        self.rows.iter().flatten().all(|cell| cell.is_empty())
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = ModelError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        let expected = rows.first().map_or(0, Vec::len);
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != expected)
        {
            return Err(ModelError::RaggedBoard {
                row,
                len: cells.len(),
                expected,
            });
        }
        Ok(Board { rows })
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.rows
    }
}
