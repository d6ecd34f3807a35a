use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mx",
    version,
    about = "Drives external JS/CSS minifiers (closure compiler, yui, terser, …) and reports size savings"
)]
pub struct Cli {
    /// Increase stderr log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Minify one file with an engine, or `all` to try every engine
    Run {
        /// Engine: gcc, gcc-legacy, yui, yui-css, terser, uglifyjs, cleancss, all
        engine: String,

        /// Source file to minify
        #[arg(short, long)]
        input: PathBuf,

        /// Where the minified result goes (per-engine suffix in `all` mode)
        #[arg(short, long)]
        output: PathBuf,

        /// Extra engine options as a JSON object, e.g. '{"compilation_level": "ADVANCED"}'
        #[arg(long)]
        option: Option<String>,
    },

    /// Report raw and gzip sizes of a file
    Size {
        /// File to measure
        file: PathBuf,
    },

    /// Show version, detected runtimes and current config
    Info,

    /// Generate a default .mx.toml config file
    Init {
        /// Generate in ~/.config/mx/ instead of current directory
        #[arg(long)]
        global: bool,
    },
}
