//! Crossword grid model
//!
//! The grid owns every cell and the list of placed words for one generation attempt.
//! Each `place` pushes an undo record of exactly the cells it changed, so `unplace`
//! is the exact inverse of the most recent `place`.

use super::{Cell, Direction, Position, WordPlacement};
use std::fmt;

/// Why a word cannot go at a given position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Part of the span lies outside the grid
    OutOfBounds,
    /// The span covers a black square
    Blocked(Position),
    /// A cell in the span already holds a different letter
    Conflict {
        at: Position,
        found: char,
        wanted: char,
    },
    /// A cell in the span already belongs to a word in the same direction
    Overlap { at: Position, word: String },
    /// A letter sits directly before or after the span
    Touching(Position),
    /// A non-first word must cross at least one existing word
    NoIntersection,
    /// A newly written letter forms an unacceptable perpendicular run
    InvalidCrossRun { at: Position, run: String },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => write!(f, "word does not fit inside the grid"),
            Self::Blocked(at) => write!(f, "cell {at} is blocked"),
            Self::Conflict { at, found, wanted } => {
                write!(f, "cell {at} holds {found}, word needs {wanted}")
            }
            Self::Overlap { at, word } => write!(f, "cell {at} already belongs to {word}"),
            Self::Touching(at) => write!(f, "letter at {at} touches the end of the word"),
            Self::NoIntersection => write!(f, "word does not cross any placed word"),
            Self::InvalidCrossRun { at, run } => {
                write!(f, "letter at {at} would form invalid run {run}")
            }
        }
    }
}

impl std::error::Error for Rejection {}

/// Which directions already own a cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Claims {
    across: bool,
    down: bool,
}

impl Claims {
    const fn get(self, direction: Direction) -> bool {
        match direction {
            Direction::Across => self.across,
            Direction::Down => self.down,
        }
    }

    fn set(&mut self, direction: Direction, value: bool) {
        match direction {
            Direction::Across => self.across = value,
            Direction::Down => self.down = value,
        }
    }
}

/// Cells changed by one `place`, as indices into the cell vector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct UndoRecord {
    letters: Vec<usize>,
    blocks: Vec<usize>,
}

/// Rows x columns cell matrix plus the words placed on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    claims: Vec<Claims>,
    placements: Vec<WordPlacement>,
    undo: Vec<UndoRecord>,
}

impl Grid {
    /// Create an empty grid
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
            claims: vec![Claims::default(); rows * cols],
            placements: Vec::new(),
            undo: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// The cell closest to the middle of the grid
    #[must_use]
    pub const fn center(&self) -> Position {
        Position::new(self.rows / 2, self.cols / 2)
    }

    #[inline]
    fn index(&self, position: Position) -> Option<usize> {
        (position.row < self.rows && position.col < self.cols)
            .then(|| position.row * self.cols + position.col)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.index(position).is_some()
    }

    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index(position).map(|i| &self.cells[i])
    }

    /// Letter at `position`; `None` for empty, blocked or off-grid cells
    #[must_use]
    pub fn letter(&self, position: Position) -> Option<char> {
        self.cell(position).and_then(|cell| cell.letter)
    }

    #[must_use]
    pub fn is_blocked(&self, position: Position) -> bool {
        self.cell(position).is_some_and(|cell| cell.blocked)
    }

    /// True for an in-grid cell with neither letter nor block
    #[must_use]
    pub fn is_empty(&self, position: Position) -> bool {
        self.cell(position).is_some_and(Cell::is_empty)
    }

    /// One row of cells
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Every in-grid position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let cols = self.cols;
        (0..self.rows * cols).map(move |i| Position::new(i / cols, i % cols))
    }

    #[inline]
    #[must_use]
    pub fn placements(&self) -> &[WordPlacement] {
        &self.placements
    }

    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.placements.len()
    }

    /// Number of placed words running in `direction`
    #[must_use]
    pub fn count(&self, direction: Direction) -> usize {
        self.placements
            .iter()
            .filter(|p| p.direction == direction)
            .count()
    }

    #[must_use]
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.blocked).count()
    }

    /// Whether a word running in `direction` already covers `position`
    #[must_use]
    pub fn is_claimed(&self, position: Position, direction: Direction) -> bool {
        self.index(position)
            .is_some_and(|i| self.claims[i].get(direction))
    }

    /// Check whether `word` fits at `origin` running in `direction`
    ///
    /// Returns the cells where the word would cross letters already on the grid.
    ///
    /// # Errors
    /// Returns the first rule the placement breaks.
    pub fn can_place(
        &self,
        word: &str,
        origin: Position,
        direction: Direction,
    ) -> Result<Vec<Position>, Rejection> {
        self.check_bounds(word.len(), origin, direction)?;
        let intersections = self.check_span(word, origin, direction)?;
        self.check_ends(word.len(), origin, direction)?;
        self.check_intersections(&intersections)?;
        Ok(intersections)
    }

    fn check_bounds(
        &self,
        len: usize,
        origin: Position,
        direction: Direction,
    ) -> Result<(), Rejection> {
        if len == 0 || !self.contains(origin) || !self.contains(origin.step(direction, len - 1)) {
            return Err(Rejection::OutOfBounds);
        }
        Ok(())
    }

    fn check_span(
        &self,
        word: &str,
        origin: Position,
        direction: Direction,
    ) -> Result<Vec<Position>, Rejection> {
        let mut intersections = Vec::new();

        for (i, byte) in word.bytes().enumerate() {
            let at = origin.step(direction, i);
            let index = self.index(at).ok_or(Rejection::OutOfBounds)?;
            let cell = &self.cells[index];
            let wanted = char::from(byte);

            if cell.blocked {
                return Err(Rejection::Blocked(at));
            }
            if self.claims[index].get(direction) {
                let word = self
                    .find_word_at(at, direction)
                    .map(|p| p.word.clone())
                    .unwrap_or_default();
                return Err(Rejection::Overlap { at, word });
            }
            match cell.letter {
                Some(found) if found != wanted => {
                    return Err(Rejection::Conflict { at, found, wanted });
                }
                Some(_) => intersections.push(at),
                None => {}
            }
        }

        Ok(intersections)
    }

    fn check_ends(
        &self,
        len: usize,
        origin: Position,
        direction: Direction,
    ) -> Result<(), Rejection> {
        let before = origin.step_back(direction, 1);
        let after = origin.step(direction, len);

        for end in before.into_iter().chain(Some(after)) {
            if self.letter(end).is_some() {
                return Err(Rejection::Touching(end));
            }
        }

        Ok(())
    }

    fn check_intersections(&self, intersections: &[Position]) -> Result<(), Rejection> {
        if !self.placements.is_empty() && intersections.is_empty() {
            return Err(Rejection::NoIntersection);
        }
        Ok(())
    }

    /// Commit a word that passed `can_place`
    ///
    /// Letters are only written into empty cells, and the empty cells directly before
    /// and after the span become black squares.
    pub fn place(
        &mut self,
        word: &str,
        origin: Position,
        direction: Direction,
        intersections: Vec<Position>,
    ) {
        let mut record = UndoRecord::default();

        for (i, byte) in word.bytes().enumerate() {
            let Some(index) = self.index(origin.step(direction, i)) else {
                continue;
            };
            let cell = &mut self.cells[index];
            if cell.letter.is_none() {
                cell.letter = Some(char::from(byte));
                record.letters.push(index);
            } else {
                debug_assert_eq!(cell.letter, Some(char::from(byte)), "letter overwritten");
            }
            self.claims[index].set(direction, true);
        }

        let before = origin.step_back(direction, 1);
        let after = origin.step(direction, word.len());
        for end in before.into_iter().chain(Some(after)) {
            if let Some(index) = self.index(end) {
                if self.cells[index].is_empty() {
                    self.cells[index].blocked = true;
                    record.blocks.push(index);
                }
            }
        }

        self.placements.push(WordPlacement {
            word: word.to_string(),
            origin,
            direction,
            intersections,
        });
        self.undo.push(record);
    }

    /// Remove the most recently placed word, restoring the grid to its prior state
    pub fn unplace(&mut self) -> Option<WordPlacement> {
        let placement = self.placements.pop()?;
        let record = self.undo.pop().unwrap_or_default();

        for index in record.blocks {
            self.cells[index].blocked = false;
        }
        for index in record.letters {
            self.cells[index].letter = None;
        }
        for at in placement.cells() {
            if let Some(index) = self.index(at) {
                self.claims[index].set(placement.direction, false);
            }
        }

        Some(placement)
    }

    /// The placed word running in `direction` that covers `position`
    ///
    /// Per-cell claims detect same-direction overlap; this names the word involved.
    #[must_use]
    pub fn find_word_at(&self, position: Position, direction: Direction) -> Option<&WordPlacement> {
        self.placements
            .iter()
            .find(|p| p.direction == direction && p.letter_at(position).is_some())
    }

    /// The maximal letter run through `position` in `direction`, as if `position` held `letter`
    ///
    /// Returns the run's first cell and its text.
    #[must_use]
    pub fn run_through(
        &self,
        position: Position,
        direction: Direction,
        letter: char,
    ) -> (Position, String) {
        let mut start = position;
        while let Some(previous) = start.step_back(direction, 1) {
            if self.letter(previous).is_none() {
                break;
            }
            start = previous;
        }

        let mut run = String::new();
        let mut at = start;
        loop {
            let current = if at == position {
                Some(letter)
            } else {
                self.letter(at)
            };
            let Some(ch) = current else {
                break;
            };
            run.push(ch);
            at = at.step(direction, 1);
        }

        (start, run)
    }

    /// Lettered cells not yet covered by a word running in `direction`
    #[must_use]
    pub fn connection_points(&self, direction: Direction) -> Vec<Position> {
        self.positions()
            .filter(|&at| self.letter(at).is_some() && !self.is_claimed(at, direction))
            .collect()
    }

    /// Turn an empty cell into a black square outside the undo history
    ///
    /// Only meant for block patterns laid down before the search and for
    /// finalization after it. Returns whether the cell changed.
    pub fn block(&mut self, position: Position) -> bool {
        match self.index(position) {
            Some(index) if self.cells[index].is_empty() => {
                self.cells[index].blocked = true;
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = self
                .row(row)
                .iter()
                .map(|cell| match (cell.blocked, cell.letter) {
                    (true, _) => '#',
                    (false, Some(letter)) => letter,
                    (false, None) => '.',
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
