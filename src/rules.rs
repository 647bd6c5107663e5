use crate::board::{Grid, Position};
use crate::pieces::{Color, Piece, PieceKind};
use crate::utils::{
    chebyshev_distance, is_diagonal_line, is_straight_line, path_clear, square_parity,
};

/** Decides whether moving `piece` from `start` to `end` on `grid` is legal.
 * Pure: nothing is mutated and failures are a plain `false`. Null moves
 * (`start == end`) are illegal for every kind. Both positions must be in
 * bounds; bounds checking is the caller's job. */
pub fn is_valid_move(piece: Piece, start: Position, end: Position, grid: &Grid) -> bool {
    if start == end {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => pawn_move(piece.color, start, end, grid),
        PieceKind::Rook => {
            is_straight_line(start, end)
                && path_clear(start, end, grid)
                && landing_ok(piece.color, end, grid)
        }
        PieceKind::Bishop => {
            is_diagonal_line(start, end)
                && path_clear(start, end, grid)
                && landing_ok(piece.color, end, grid)
        }
        PieceKind::Queen => {
            (is_straight_line(start, end) || is_diagonal_line(start, end))
                && path_clear(start, end, grid)
                && landing_ok(piece.color, end, grid)
        }
        PieceKind::Knight => {
            let offset = (start.0.abs_diff(end.0), start.1.abs_diff(end.1));
            matches!(offset, (2, 1) | (1, 2)) && landing_ok(piece.color, end, grid)
        }
        PieceKind::King => {
            chebyshev_distance(start, end) == 1 && landing_ok(piece.color, end, grid)
        }
        // Roams anywhere within two squares. No occupancy filter: a Spider
        // may land on (and thereby capture) a friendly piece.
        PieceKind::Spider => chebyshev_distance(start, end) <= 2,
        // Teleports between squares of its own checkerboard color.
        PieceKind::Wizard => square_parity(start) == square_parity(end),
        // Queen geometry, but phases through anything in the way.
        PieceKind::Minotaur => is_straight_line(start, end) || is_diagonal_line(start, end),
        PieceKind::Man => man_move(piece.color, start, end, grid),
        PieceKind::Dame => dame_move(piece.color, start, end, grid),
    }
}

/** Destination square is empty or holds an enemy piece. */
fn landing_ok(color: Color, end: Position, grid: &Grid) -> bool {
    match grid[end.0][end.1] {
        Some(target) => target.color != color,
        None => true,
    }
}

fn pawn_move(color: Color, start: Position, end: Position, grid: &Grid) -> bool {
    let dir = color.forward();
    let (start_row, start_col) = start;
    let (end_row, end_col) = end;
    let single_step = end_row as isize == start_row as isize + dir;
    // forward push onto a free square
    if start_col == end_col && single_step && grid[end_row][end_col].is_none() {
        return true;
    }
    // double push from the starting rank, both squares free
    if start_col == end_col
        && start_row == color.pawn_rank()
        && end_row as isize == start_row as isize + 2 * dir
        && grid[end_row][end_col].is_none()
        && grid[(start_row as isize + dir) as usize][end_col].is_none()
    {
        return true;
    }
    // diagonal step captures only
    if start_col.abs_diff(end_col) == 1 && single_step {
        return matches!(grid[end_row][end_col], Some(target) if target.color != color);
    }
    false
}

fn man_move(color: Color, start: Position, end: Position, grid: &Grid) -> bool {
    // plain step: one square diagonally forward onto a free square
    if start.1.abs_diff(end.1) == 1
        && end.0 as isize == start.0 as isize + color.forward()
        && grid[end.0][end.1].is_none()
    {
        return true;
    }
    jump_over_enemy(color, start, end, grid)
}

/** A Dame keeps the Man's step and jump but in all four diagonal
 * directions. */
fn dame_move(color: Color, start: Position, end: Position, grid: &Grid) -> bool {
    if start.0.abs_diff(end.0) == 1
        && start.1.abs_diff(end.1) == 1
        && grid[end.0][end.1].is_none()
    {
        return true;
    }
    jump_over_enemy(color, start, end, grid)
}

/** Two-square diagonal leap, legal whenever the midpoint holds an enemy
 * piece. Any of the four directions qualifies. */
fn jump_over_enemy(color: Color, start: Position, end: Position, grid: &Grid) -> bool {
    if start.0.abs_diff(end.0) != 2 || start.1.abs_diff(end.1) != 2 {
        return false;
    }
    let (mid_row, mid_col) = jump_midpoint(start, end);
    matches!(grid[mid_row][mid_col], Some(target) if target.color != color)
}

/** Square leapt over by a checkers jump. */
pub fn jump_midpoint(start: Position, end: Position) -> Position {
    ((start.0 + end.0) / 2, (start.1 + end.1) / 2)
}
