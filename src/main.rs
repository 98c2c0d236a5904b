//! CLI entry point for the domino chain game

use clap::Parser;
use dominochain::io::cli::{Cli, DominoGame};
use dominochain::io::logging::setup_logging;

fn main() -> dominochain::Result<()> {
    let cli = Cli::parse();
    let _logger = setup_logging(cli.log_spec())?;

    let game = DominoGame::new(cli);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    game.run(&mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
