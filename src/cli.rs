use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "estaghni",
    version,
    about = "Ethical product lookup: boycott status, local products, alternatives"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Catalog source (catalog.json file or a directory containing one); bundled dataset when omitted"
    )]
    pub catalog: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Search {
        query: Option<String>,
    },
    Show {
        product: String,
    },
    Stats,
    Categories,
    Validate,
}
