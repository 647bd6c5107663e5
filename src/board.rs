use std::collections::HashSet;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::definitions::{Cell, Figure};
use crate::pieces::{Color, Piece, PieceKind};
use crate::rules::{is_valid_move, jump_midpoint};

/** Zero-based (row, column); row 0 is the top rank as displayed. */
pub type Position = (usize, usize);

/** 8×8 field; a square holds at most one piece. */
pub type Grid = [[Option<Piece>; 8]; 8];

/** One applied move, as needed to take it back. `captured` is whatever
 * stood on `end` when the move was made; a checker removed from a jump's
 * midpoint is not recorded and stays lost to undo. */
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub start: Position,
    pub end: Position,
    pub captured: Option<Piece>,
    pub promoted: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
    history: Vec<MoveRecord>,
}

/** Back-rank order of the chess variant, before the fantasy overrides. */
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub fn empty() -> Board {
        Board {
            grid: [[None; 8]; 8],
            history: Vec::new(),
        }
    }

    /** Starting layout of the chess variant. Spiders take over the c-file
     * bishop squares, Wizards the f-file ones, and the Minotaurs begin
     * mid-board. */
    pub fn fantasy() -> Board {
        use PieceKind::*;
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.grid[0][col] = Some(Piece::new(Color::Dark, kind));
            board.grid[7][col] = Some(Piece::new(Color::Light, kind));
        }
        for col in 0..8 {
            board.grid[1][col] = Some(Piece::new(Color::Dark, Pawn));
            board.grid[6][col] = Some(Piece::new(Color::Light, Pawn));
        }
        board.grid[0][2] = Some(Piece::new(Color::Dark, Spider));
        board.grid[7][2] = Some(Piece::new(Color::Light, Spider));
        board.grid[0][5] = Some(Piece::new(Color::Dark, Wizard));
        board.grid[7][5] = Some(Piece::new(Color::Light, Wizard));
        board.grid[3][3] = Some(Piece::new(Color::Dark, Minotaur));
        board.grid[4][4] = Some(Piece::new(Color::Light, Minotaur));
        board
    }

    /** Starting layout of draughts: men on every odd-parity square of the
     * first and last three rows. */
    pub fn draughts() -> Board {
        let mut board = Board::empty();
        for row in 0..3 {
            for col in 0..8 {
                if (row + col) % 2 == 1 {
                    board.grid[row][col] = Some(Piece::new(Color::Dark, PieceKind::Man));
                }
            }
        }
        for row in 5..8 {
            for col in 0..8 {
                if (row + col) % 2 == 1 {
                    board.grid[row][col] = Some(Piece::new(Color::Light, PieceKind::Man));
                }
            }
        }
        board
    }

    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.grid[pos.0][pos.1]
    }

    /** Places (or clears) a square directly, bypassing the rules. Setup and
     * test hook; does not touch the history. */
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        self.grid[pos.0][pos.1] = piece;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /** Applies the move if the piece's rule set accepts it. On success the
     * record lands on the history stack, a jumped checker is lifted off the
     * midpoint and a Man reaching the far rank is crowned. Turn order is
     * not this board's business. */
    pub fn move_piece(&mut self, start: Position, end: Position) -> bool {
        let Some(piece) = self.grid[start.0][start.1] else {
            trace!("no piece to move at {start:?}");
            return false;
        };
        if !is_valid_move(piece, start, end, &self.grid) {
            trace!("rejected {:?} {start:?} -> {end:?}", piece.kind);
            return false;
        }
        let mut record = MoveRecord {
            start,
            end,
            captured: self.grid[end.0][end.1],
            promoted: false,
        };
        if piece.kind.is_checker() && start.0.abs_diff(end.0) == 2 {
            let (mid_row, mid_col) = jump_midpoint(start, end);
            self.grid[mid_row][mid_col] = None;
        }
        let mut landed = piece;
        if piece.kind == PieceKind::Man && end.0 == piece.color.crowning_row() {
            landed.kind = PieceKind::Dame;
            record.promoted = true;
        }
        self.grid[end.0][end.1] = Some(landed);
        self.grid[start.0][start.1] = None;
        self.history.push(record);
        debug!("{} {:?} {start:?} -> {end:?}", piece.color, piece.kind);
        true
    }

    /** Takes back the most recent move: the piece returns to `start` and
     * whatever it displaced returns to `end`. A crowning is reverted; a
     * jump-midpoint capture is not (the record never held it). */
    pub fn undo_move(&mut self) -> bool {
        let Some(record) = self.history.pop() else {
            trace!("undo requested with empty history");
            return false;
        };
        let mut piece = self.grid[record.end.0][record.end.1];
        if record.promoted {
            if let Some(moved) = piece.as_mut() {
                moved.kind = PieceKind::Man;
            }
        }
        self.grid[record.start.0][record.start.1] = piece;
        self.grid[record.end.0][record.end.1] = record.captured;
        debug!("undo {:?} -> {:?}", record.end, record.start);
        true
    }

    /** Every square the piece at `position` may legally reach; empty when
     * the square is empty. One rule evaluation per board square. */
    pub fn get_valid_moves(&self, position: Position) -> HashSet<Position> {
        let mut moves = HashSet::new();
        let Some(piece) = self.grid[position.0][position.1] else {
            return moves;
        };
        for row in 0..8 {
            for col in 0..8 {
                if is_valid_move(piece, position, (row, col), &self.grid) {
                    moves.insert((row, col));
                }
            }
        }
        moves
    }

    /** Read-only snapshot for display layers. */
    pub fn render(&self) -> Vec<Vec<Cell>> {
        self.grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|square| match square {
                        Some(piece) => Cell::Figure(Figure {
                            kind: piece.kind,
                            color: piece.color,
                        }),
                        None => Cell::Empty,
                    })
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::fantasy()
    }
}
