use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[default]
    Light,
    Dark,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /** Row delta of forward movement: Light marches toward row 0. */
    pub fn forward(self) -> isize {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /** The rank a pawn of this color double-steps from. */
    pub fn pawn_rank(self) -> usize {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    /** The far back rank that crowns a checker of this color. */
    pub fn crowning_row(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(if self == &Self::Light { "Light" } else { "Dark" })
    }
}

/** Every kind of unit both games know about. The chess variant fields the
 * six standard pieces plus Spider, Wizard and Minotaur; draughts fields
 * Man and its crowned form Dame. Kept closed so a new kind is a compile
 * error until every dispatch site handles it. */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
    Spider,
    Wizard,
    Minotaur,
    Man,
    Dame,
}

impl PieceKind {
    /** Kinds that play draughts: jump capture and crowning apply to them. */
    pub fn is_checker(self) -> bool {
        matches!(self, PieceKind::Man | PieceKind::Dame)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }

    /** Display glyph, fixed per (kind, color). Standard chess and checker
     * kinds use the figurine pair; the fantasy kinds keep their letters,
     * lowercased for Dark. */
    pub fn symbol(self) -> char {
        let (light, dark) = match self.kind {
            PieceKind::Pawn => ('♙', '♟'),
            PieceKind::Rook => ('♖', '♜'),
            PieceKind::Knight => ('♘', '♞'),
            PieceKind::Bishop => ('♗', '♝'),
            PieceKind::Queen => ('♕', '♛'),
            PieceKind::King => ('♔', '♚'),
            PieceKind::Spider => ('S', 's'),
            PieceKind::Wizard => ('W', 'w'),
            PieceKind::Minotaur => ('M', 'm'),
            PieceKind::Man => ('⛀', '⛂'),
            PieceKind::Dame => ('⛁', '⛃'),
        };
        match self.color {
            Color::Light => light,
            Color::Dark => dark,
        }
    }
}
