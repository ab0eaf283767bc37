use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use gramforge_core::config::Config;
use gramforge_core::error::{GfResult, GramForgeError};
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Character and word n-gram frequency analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with filter and view settings; command-line flags override it
    #[arg(global = true, short, long)]
    config: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Analyze(cmd::analyze::AnalyzeArgs),
    Export(cmd::export::ExportArgs),
    Link(cmd::link::LinkArgs),
}

fn resolve_config(path: Option<&str>, cli_config: &Config, matches: &ArgMatches) -> GfResult<Config> {
    match path {
        Some(path) => {
            info!("⚙️  Loading config from: {}", path);
            let mut config = Config::load_from_file(path).map_err(GramForgeError::Config)?;
            config.merge_from_cli(cli_config, matches);
            Ok(config)
        }
        None => Ok(cli_config.clone()),
    }
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let (cli_config, sub_name) = match &cli.command {
        Commands::Analyze(args) => (&args.config, "analyze"),
        Commands::Export(args) => (&args.config, "export"),
        Commands::Link(args) => (&args.config, "link"),
    };
    let Some(sub_matches) = matches.subcommand_matches(sub_name) else {
        error!("Missing matches for subcommand '{}'", sub_name);
        process::exit(2);
    };

    let config = resolve_config(cli.config.as_deref(), cli_config, sub_matches).unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });

    let result = match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args, &config),
        Commands::Export(args) => cmd::export::run(args, &config),
        Commands::Link(args) => cmd::link::run(args, &config),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
