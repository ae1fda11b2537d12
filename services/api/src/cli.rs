use crate::demo::{run_demo, run_invest, run_search, DemoArgs, InvestArgs, SearchArgs};
use crate::server;
use aqar_catalog::error::AppError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "aqar-api",
    about = "Serve and query the real-estate listing catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Filter property listings from the command line
    Search(SearchArgs),
    /// Project the return on an investment
    Invest(InvestArgs),
    /// Walk through the catalog filters on the built-in data
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured catalog snapshot (JSON)
    #[arg(long)]
    pub(crate) seed: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Search(args) => run_search(args),
        Command::Invest(args) => run_invest(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_flags_parse_into_arguments() {
        let cli = Cli::try_parse_from([
            "aqar-api", "search", "--city", "الرياض", "--rooms", "5+", "-q", "villa",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Search(args)) => {
                assert_eq!(args.city.as_deref(), Some("الرياض"));
                assert_eq!(args.rooms.as_deref(), Some("5+"));
                assert_eq!(args.query.as_deref(), Some("villa"));
            }
            other => panic!("expected search command, got {other:?}"),
        }
    }

    #[test]
    fn search_rejects_csv_and_seed_together() {
        let result = Cli::try_parse_from([
            "aqar-api", "search", "--csv", "a.csv", "--seed", "b.json",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn missing_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["aqar-api"]).expect("arguments parse");

        assert!(cli.command.is_none());
    }
}
