use clap::Args;
use gramforge_core::config::Config;
use gramforge_core::error::GfResult;
use gramforge_core::locator::LocatorState;

#[derive(Args, Debug, Clone)]
pub struct LinkArgs {
    #[command(flatten)]
    pub config: Config,

    /// Decode a locator string and print it as JSON instead of encoding
    #[arg(long)]
    pub decode: Option<String>,
}

pub fn run(args: LinkArgs, config: &Config) -> GfResult<()> {
    match args.decode {
        Some(raw) => {
            let state = LocatorState::decode(&raw)?;
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        None => println!("{}", LocatorState::from_config(config).encode()),
    }
    Ok(())
}
