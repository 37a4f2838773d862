use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "calcterm")]
#[command(about = "Terminal front-end for a remote calculate service")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Backend base URL; wins over CALCTERM_API_BASE and the config file
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
