mod commands;
mod terminal;

use commands::{CommandLine, wake};
use lanwake_common::config::Config;
use terminal::logging;

/// Exit status when any per-item error occurred during the run.
const EXIT_ERRORS: i32 = 8;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        port: commands.port,
        verbose: commands.verbose,
    };

    logging::init(cfg.verbose);

    let errors = wake::wake(&commands, &cfg)?;
    if errors > 0 {
        std::process::exit(EXIT_ERRORS);
    }
    Ok(())
}
