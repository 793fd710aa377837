use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        services::output::print_err(cli.json, &err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let catalog = catalog::load_catalog(cli.catalog.as_deref())?;
    let icons = services::display::load_icons()?;
    commands::handle_command(cli, &catalog, &icons)
}
