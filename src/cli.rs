//! Text helpers for driving a board from a terminal.

use std::fmt::Write;
use std::string::String;

use crate::{board::Board, common::Cell, config::BOARD_SIZE};

/// Parse an attack coordinate typed as `x y` or `x,y`.
///
/// Off-board values still parse; the board decides whether they are valid.
pub fn parse_coord(input: &str) -> Option<(i32, i32)> {
    let mut parts = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, y))
}

/// Render the board as a grid of characters: `X` hit, `o` miss, `S` an unhit
/// ship segment when `reveal` is set, `.` otherwise.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::from("  ");
    for x in 0..BOARD_SIZE {
        let _ = write!(out, " {}", x);
    }
    out.push('\n');
    for (y, row) in board.board().iter().enumerate() {
        let _ = write!(out, "{:2}", y);
        for (x, cell) in row.iter().enumerate() {
            let missed = board
                .missed_hits()
                .iter()
                .any(|m| m.x_coord == x as i32 && m.y_coord == y as i32);
            let ch = match cell {
                Cell::Occupied { hit: true, .. } => 'X',
                Cell::Occupied { .. } if reveal => 'S',
                _ if missed => 'o',
                _ => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Print the board to stdout.
pub fn print_board(board: &Board, reveal: bool) {
    std::print!("{}", render_board(board, reveal));
}
