#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use reversi::{init_logging, run, Board};

#[derive(ValueEnum, Clone, Debug)]
#[cfg(feature = "std")]
enum FirstMover {
    A,
    B,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Which player takes the opening move.
    #[arg(long, value_enum, default_value_t = FirstMover::A)]
    first: FirstMover,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut board = Board::new();
    if matches!(cli.first, FirstMover::B) {
        board.swap_movers();
    }

    println!("Reversi: enter moves as x,y (0-7). Enter q to quit.");
    run(&mut board)
}
