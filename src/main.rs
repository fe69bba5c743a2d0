use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tictactoe::cli::args;
use tictactoe::io::TerminalIO;
use tictactoe::Game;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = args::parse();
    let rng = match args.seed {
        Some(seed) => {
            info!(seed, "seeding opponent");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut game = Game::new(rng, TerminalIO, TerminalIO);
    match game.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "session aborted");
            eprintln!();
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
