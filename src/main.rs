//! Главный исполняемый файл sqllexer

use clap::Parser;
use sqllexer::cli::{init_logging, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    init_logging(&config.logging.level);
    log::debug!("sqllexer {} with {:?}", sqllexer::VERSION, config);

    cli.execute(config)
}
