// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements a small, easy-to-understand engine for generating
//! complete, valid, random 9x9 Sudoku solution boards. It supports the
//! following key features:
//!
//! * Generating full solution boards using randomized backtracking, where
//! every row, column, and 3x3 block contains each digit 1 to 9 exactly once
//! * Two peer policies controlling which cells are consulted while filling
//! * Serializing boards to a compact 81-character code as well as the
//! pipe-delimited wire form, and parsing both back
//! * Pretty-printing boards as a terminal grid
//!
//! # Generating boards
//!
//! A [Generator](generator::Generator) owns the random number generator that
//! drives the search. Every invocation yields a different solution, since
//! the candidate digits of each cell are shuffled before they are tried.
//!
//! ```
//! use sudoku_gen::PeerPolicy;
//! use sudoku_gen::generator::Generator;
//!
//! let mut generator = Generator::new_default();
//! let board = generator.generate(PeerPolicy::ForwardScan).unwrap();
//!
//! assert!(board.is_solved());
//! ```
//!
//! # Serializing and parsing boards
//!
//! [Board::serialize] flattens a board into 81 digit characters in
//! left-to-right, top-to-bottom order. The code can be parsed back with
//! [Board::parse], which also accepts the pipe-delimited form produced by
//! [Board::to_delimited_string].
//!
//! ```
//! use sudoku_gen::Board;
//!
//! let board = Board::new();
//! let code = board.serialize();
//!
//! assert_eq!(81, code.len());
//! assert_eq!(board, Board::parse(&code).unwrap());
//! ```
//!
//! # Peer policies
//!
//! The cells a given cell must differ from are called its *peers*. They are
//! computed once, at board construction, under one of two policies: the
//! full-constraint policy registers all 20 cells sharing a row, column, or
//! block, while the default forward-scan policy registers only those that
//! precede the cell in scan order and therefore already carry a value when
//! the fill reaches it. Both produce equally valid boards; see [PeerPolicy]
//! for the trade-off.

pub mod error;
pub mod generator;
pub mod util;

#[cfg(test)]
mod random_tests;

use crate::error::{ParseError, ParseResult};
use crate::util::DigitSet;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of rows and columns of a board.
pub const SIZE: usize = 9;

/// The number of rows and columns of one 3x3 block.
pub const BLOCK_SIZE: usize = SIZE / 3;

/// The total number of cells of a board.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// The coordinate of one cell on a board, that is, a pair of a row and a
/// column index, both in the range `[0, 9[`. Positions are ordered in
/// left-to-right, top-to-bottom scan order ("row-major"), which is also the
/// order in which the fill algorithm visits the cells.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Position {
    row: usize,
    col: usize
}

impl Position {

    /// Creates a new position from the given row and column indices.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is 9 or greater. An out-of-range coordinate is a
    /// geometry bug in the caller, so this fails fast instead of wrapping or
    /// clamping.
    pub fn new(row: usize, col: usize) -> Position {
        assert!(row < SIZE && col < SIZE,
            "position ({}, {}) outside the 9x9 grid", row, col);

        Position {
            row,
            col
        }
    }

    /// Creates the position at the given row-major index, the inverse of
    /// [Position::index].
    ///
    /// # Panics
    ///
    /// If `index` is 81 or greater.
    pub fn from_index(index: usize) -> Position {
        assert!(index < CELL_COUNT,
            "cell index {} outside the 81-cell grid", index);

        Position {
            row: index / SIZE,
            col: index % SIZE
        }
    }

    /// Gets the row (y-coordinate) of this position.
    pub fn row(self) -> usize {
        self.row
    }

    /// Gets the column (x-coordinate) of this position.
    pub fn col(self) -> usize {
        self.col
    }

    /// Gets the row-major index of this position, i.e. `row * 9 + col`.
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Gets the index of the 3x3 block containing this position, counted in
    /// row-major order of blocks, i.e. the top-center block has index 1.
    pub fn block(self) -> usize {
        (self.row / BLOCK_SIZE) * BLOCK_SIZE + self.col / BLOCK_SIZE
    }

    /// Indicates whether this position and `other` share a row, column, or
    /// 3x3 block, i.e. whether the Sudoku rules forbid their cells to hold
    /// the same digit. A position does not constrain itself, but this method
    /// returns `true` for two equal positions, as they trivially share all
    /// three groups.
    pub fn shares_group(self, other: Position) -> bool {
        self.row == other.row
            || self.col == other.col
            || self.block() == other.block()
    }

    /// Returns an iterator over all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(Position::from_index)
    }
}

/// The policy under which the peer set of each cell is computed at board
/// construction. Peers are the cells whose values a cell's own value must
/// differ from; they are computed once and never recomputed.
///
/// Both policies produce equally valid completed boards. They only differ in
/// how many already-assigned neighbors are consulted per step of the fill.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum PeerPolicy {

    /// Every other cell sharing the row, column, or containing 3x3 block is
    /// a peer. This yields exactly 20 peers per cell, independent of scan
    /// order.
    FullConstraint,

    /// Only those same row/column/block cells that precede the cell in
    /// row-major scan order are peers. Cells visited later cannot yet hold a
    /// conflicting value during a single forward pass, so this halves the
    /// redundant neighbor lookups. A board filled under this policy must be
    /// [reset](Board::reset) before it is filled again.
    ForwardScan
}

impl PeerPolicy {
    fn peers(self, position: Position) -> Vec<Position> {
        Position::all()
            .filter(|&other| other != position)
            .filter(|&other| position.shares_group(other))
            .filter(|&other| match self {
                PeerPolicy::FullConstraint => true,
                PeerPolicy::ForwardScan => other.index() < position.index()
            })
            .collect()
    }
}

impl Default for PeerPolicy {
    fn default() -> PeerPolicy {
        PeerPolicy::ForwardScan
    }
}

/// One cell of a [Board]: its fixed position, its current value, and its
/// precomputed peer set. 0 represents an unassigned cell; the fill algorithm
/// only ever assigns values from 1 to 9.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cell {
    position: Position,
    value: u8,
    peers: Vec<Position>
}

impl Cell {

    /// Gets the position of this cell, fixed at board construction.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Gets the value of this cell. 0 indicates the cell is unassigned.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Gets the positions of all cells whose values this cell's value must
    /// differ from, per the board's [PeerPolicy]. The slice is sorted in
    /// row-major order and free of duplicates.
    pub fn peers(&self) -> &[Position] {
        &self.peers
    }
}

fn row_positions(row: usize) -> impl Iterator<Item = Position> {
    (0..SIZE).map(move |col| Position::new(row, col))
}

fn column_positions(col: usize) -> impl Iterator<Item = Position> {
    (0..SIZE).map(move |row| Position::new(row, col))
}

fn block_positions(block: usize) -> impl Iterator<Item = Position> {
    let row_floor = (block / BLOCK_SIZE) * BLOCK_SIZE;
    let col_floor = (block % BLOCK_SIZE) * BLOCK_SIZE;

    (0..SIZE).map(move |i|
        Position::new(row_floor + i / BLOCK_SIZE, col_floor + i % BLOCK_SIZE))
}

/// A 9x9 Sudoku board, stored as a flat sequence of 81 [Cell]s in row-major
/// order. A board is created empty (all values 0) with the peer set of every
/// cell computed up front, filled in place by a
/// [Generator](crate::generator::Generator), and read out via
/// [Board::serialize].
///
/// The peer structure depends only on the grid geometry, never on the
/// values, so a board can be [reset](Board::reset) and filled again without
/// recomputing it.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct Board {
    cells: Vec<Cell>,
    policy: PeerPolicy
}

fn to_char(value: u8) -> char {
    if value == 0 {
        ' '
    }
    else {
        (b'0' + value) as char
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for col in 0..SIZE {
        if col == 0 {
            result.push(start);
        }
        else if col % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(col));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(board: &Board, row: usize) -> String {
    line('║', '║', '│',
        |col| to_char(board.value(Position::new(row, col))), ' ', '║', true)
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let top_row = top_row();
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();
        let bottom_row = bottom_row();

        for row in 0..SIZE {
            if row == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if row % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, row).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

impl Board {

    /// Creates a new, empty board with the default [PeerPolicy::ForwardScan]
    /// peer policy. All 81 cells are allocated at positions (0, 0) to
    /// (8, 8) in row-major order, each with its peer set computed, and all
    /// values initialized to 0. Construction cannot fail.
    pub fn new() -> Board {
        Board::with_policy(PeerPolicy::ForwardScan)
    }

    /// Creates a new, empty board whose peer sets are computed under the
    /// given policy. See [Board::new] for the remaining construction
    /// contract.
    pub fn with_policy(policy: PeerPolicy) -> Board {
        let cells = Position::all()
            .map(|position| Cell {
                position,
                value: 0,
                peers: policy.peers(position)
            })
            .collect();

        Board {
            cells,
            policy
        }
    }

    /// Parses a board code as produced by [Board::serialize] or
    /// [Board::to_delimited_string]. The compact form consists of exactly 81
    /// digit characters; the delimited form of 81 `'|'`-terminated numbers.
    /// In both cases the entries are assigned in row-major order and 0
    /// denotes an unassigned cell. The returned board uses the default peer
    /// policy.
    ///
    /// Parsing is the inverse of serialization, as illustrated below.
    ///
    /// ```
    /// use sudoku_gen::Board;
    /// use sudoku_gen::generator::Generator;
    ///
    /// let board = Generator::new_default().generate(Default::default())
    ///     .unwrap();
    /// let code = board.serialize();
    ///
    /// assert_eq!(code, Board::parse(&code).unwrap().serialize());
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of [ParseError] (see that documentation).
    pub fn parse(code: &str) -> ParseResult<Board> {
        let code = code.trim();
        let values = if code.contains('|') {
            code.split_terminator('|')
                .map(|entry| Ok(entry.trim().parse::<u8>()?))
                .collect::<ParseResult<Vec<u8>>>()?
        }
        else {
            code.chars()
                .map(|c| c.to_digit(10)
                    .map(|digit| digit as u8)
                    .ok_or(ParseError::InvalidDigit))
                .collect::<ParseResult<Vec<u8>>>()?
        };

        if values.len() != CELL_COUNT {
            return Err(ParseError::WrongNumberOfCells);
        }

        if values.iter().any(|&value| value > 9) {
            return Err(ParseError::InvalidDigit);
        }

        let mut board = Board::new();

        for (cell, value) in board.cells.iter_mut().zip(values) {
            cell.value = value;
        }

        Ok(board)
    }

    /// Gets the peer policy under which this board's peer sets were
    /// computed.
    pub fn policy(&self) -> PeerPolicy {
        self.policy
    }

    /// Gets a reference to the cell at the given position.
    pub fn cell(&self, position: Position) -> &Cell {
        &self.cells[position.index()]
    }

    /// Gets the value of the cell at the given position. 0 indicates the
    /// cell is unassigned.
    pub fn value(&self, position: Position) -> u8 {
        self.cells[position.index()].value
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Resets the value of every cell to 0, keeping the peer structure,
    /// which depends only on the geometry. A board must be reset before it
    /// is filled a second time.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.value = 0;
        }
    }

    fn group_is_solved(&self, positions: impl Iterator<Item = Position>)
            -> bool {
        let mut seen = DigitSet::new();

        for position in positions {
            let value = self.value(position);

            if value == 0 || !seen.insert(value) {
                return false;
            }
        }

        seen.len() == SIZE
    }

    /// Indicates whether this board is a complete, valid Sudoku solution,
    /// that is, every row, every column, and every 3x3 block contains each
    /// digit from 1 to 9 exactly once. Boards with unassigned cells are
    /// never solved.
    pub fn is_solved(&self) -> bool {
        (0..SIZE).all(|row| self.group_is_solved(row_positions(row)))
            && (0..SIZE).all(|col| self.group_is_solved(column_positions(col)))
            && (0..SIZE)
                .all(|block| self.group_is_solved(block_positions(block)))
    }

    /// Converts this board into a compact code of exactly 81 digit
    /// characters in row-major order, with no separators. Serialization
    /// never fails; unassigned cells are written as `'0'`, so only a board
    /// serialized after a successful fill consists purely of `'1'` to
    /// `'9'`.
    ///
    /// ```
    /// use sudoku_gen::Board;
    ///
    /// assert_eq!("0".repeat(81), Board::new().serialize());
    /// ```
    pub fn serialize(&self) -> String {
        self.cells.iter()
            .map(|cell| (b'0' + cell.value) as char)
            .collect()
    }

    /// Converts this board into the pipe-delimited wire form, i.e. every
    /// cell value in row-major order followed by a `'|'`. Like
    /// [Board::serialize], this never fails and writes unassigned cells as
    /// 0.
    pub fn to_delimited_string(&self) -> String {
        let mut result = String::new();

        for cell in self.cells.iter() {
            result.push((b'0' + cell.value) as char);
            result.push('|');
        }

        result
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> String {
        board.serialize()
    }
}

impl TryFrom<String> for Board {
    type Error = ParseError;

    fn try_from(code: String) -> ParseResult<Board> {
        Board::parse(&code)
    }
}
