use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "turku-districts fetcher")]
pub struct Cli {
    /// Command (defaults to fetch)
    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Fetch every district feature and write the aggregate file
    Fetch,
}
