use clap::Parser;

use restock_cli::cli::Cli;

fn main() {
    let cli = Cli::parse();
    restock_observability::init_with(cli.log_format);

    if let Err(err) = restock_cli::run(&cli) {
        tracing::error!("{err:#}");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
