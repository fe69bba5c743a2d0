use clap::Parser;

/// Tic-tac-toe against a random opponent, played in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Seed for the opponent's random number generator
    #[arg(short, long)]
    pub seed: Option<u64>,
}

pub fn parse() -> Args {
    Args::parse()
}
