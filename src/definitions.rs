use serde::{Deserialize, Serialize};

use crate::pieces::{Color, Piece, PieceKind};

/** What a front end sees in one square of a board snapshot. */
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Figure(Figure),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub kind: PieceKind,
    pub color: Color,
}

impl Figure {
    pub fn symbol(&self) -> char {
        Piece::new(self.color, self.kind).symbol()
    }
}
