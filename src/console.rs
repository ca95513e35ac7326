#![cfg(feature = "std")]
//! Console turn controller: board rendering, coordinate parsing, and the
//! interactive prompt loop.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::board::Board;
use crate::config::BOARD_SIZE;

/// Parse a move entered as `x,y` (two small signed integers, spaces
/// allowed around the comma).
pub fn parse_coord(input: &str) -> Option<(i8, i8)> {
    let (x, y) = input.split_once(',')?;
    let x: i8 = x.trim().parse().ok()?;
    let y: i8 = y.trim().parse().ok()?;
    Some((x, y))
}

/// Print the grid with numeric column headers and row indices on both
/// sides, the way the board reads in play.
pub fn print_board(board: &Board) {
    print!("   ");
    for c in 0..BOARD_SIZE {
        print!("{}", c);
    }
    println!();
    for r in 0..BOARD_SIZE as i8 {
        print!(" {} ", r);
        for c in 0..BOARD_SIZE as i8 {
            let ch = board.cell(c, r).map(|cell| cell.symbol()).unwrap_or(' ');
            print!("{}", ch);
        }
        println!(" {}", r);
    }
    print!("   ");
    for c in 0..BOARD_SIZE {
        print!("{}", c);
    }
    println!();
}

/// Run the interactive game loop on stdin/stdout until EOF or a quit
/// command. Each turn shows the board and counts, prompts the current
/// mover for `x,y`, and re-prompts on malformed input or an illegal
/// placement. The mover only changes on an accepted placement.
pub fn run(board: &mut Board) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        board.recompute_counts();
        print_board(board);
        let (a, b) = board.counts();
        println!("Player A = {}  Player B = {}", a, b);

        print!("{} x,y = ", board.current_mover());
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break, // EOF
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        let Some((x, y)) = parse_coord(line) else {
            println!("Invalid input, expected x,y");
            continue;
        };

        let mover = board.current_mover();
        if board.play(x, y) {
            info!("{} placed at x={} y={}", mover, x, y);
        } else {
            debug!("{} rejected at x={} y={}", mover, x, y);
            println!("x={} y={} is not a legal move", x, y);
        }
    }
    Ok(())
}
