use crate::prelude::*;
use clap::Parser;

mod cli;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Query a paginated records API and summarize a page"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Records endpoint URL
    #[clap(long, env = "RECORDS_API_URL", global = true)]
    base_url: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "RECORDS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Retrieve one page of records
    Retrieve(crate::cli::RetrieveArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Retrieve(args) => crate::cli::run(args, app.global).await,
    }
}
