mod args;
mod cli;
mod config;
mod engines;
mod error;
mod report;
mod runner;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::info;

use args::ArgList;
use cli::{Cli, Commands};
use config::Config;
use engines::Job;
use error::MinifyError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    stderrlog::new()
        .verbosity(1 + cli.verbose as usize)
        .init()
        .unwrap();
    let cfg = Config::load();

    let result = match cli.command {
        Commands::Run {
            engine,
            input,
            output,
            option,
        } => run(&cfg, &engine, input, output, option.as_deref()),
        Commands::Size { file } => print_sizes(&file),
        Commands::Info => {
            print_info(&cfg);
            Ok(())
        }
        Commands::Init { global } => create_config(global),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[mx] error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    cfg: &Config,
    engine: &str,
    input: PathBuf,
    output: PathBuf,
    option: Option<&str>,
) -> Result<(), MinifyError> {
    let options = match option {
        Some(json) => ArgList::from_options(&args::parse_options(json)?),
        None => ArgList::default(),
    };

    if cfg.show_sizes {
        let before = report::size_report(&input)?;
        println!("[mx] {} {} (gzip {})", input.display(), before.raw, before.gzip);
    }

    if engine == "all" {
        run_batch(cfg, &input, &output, &options);
        return Ok(());
    }

    let engine = engines::by_name(engine)?;
    info!("minifying {} with {}", input.display(), engine.name());

    let job = Job {
        input,
        output,
        options,
    };
    let elapsed = engines::minify(engine.as_ref(), &job, cfg)?;

    if cfg.show_sizes {
        let after = report::size_report(&job.output)?;
        println!(
            "[mx] {} ok ({elapsed}ms) → {} {} (gzip {})",
            engine.name(),
            job.output.display(),
            after.raw,
            after.gzip
        );
    } else {
        println!("[mx] {} ok ({elapsed}ms)", engine.name());
    }
    Ok(())
}

/// Every engine against the same input; one status line each. A failing
/// engine never aborts its siblings.
fn run_batch(cfg: &Config, input: &Path, output: &Path, options: &ArgList) {
    for outcome in engines::run_all(input, output, options, cfg) {
        match outcome.result {
            Ok(elapsed) => {
                let sizes = if cfg.show_sizes {
                    report::size_report(&outcome.output)
                        .map(|r| format!(" {} (gzip {})", r.raw, r.gzip))
                        .unwrap_or_default()
                } else {
                    String::new()
                };
                println!(
                    "[mx] {} ok ({elapsed}ms) → {}{sizes}",
                    outcome.engine,
                    outcome.output.display()
                );
            }
            Err(e) => println!("[mx] {} FAIL: {e}", outcome.engine),
        }
    }
}

fn print_sizes(file: &Path) -> Result<(), MinifyError> {
    let sizes = report::size_report(file)?;
    println!("[mx] {} {} (gzip {})", file.display(), sizes.raw, sizes.gzip);
    Ok(())
}

fn print_info(cfg: &Config) {
    let runtimes = config::detect_runtimes(cfg);
    let engine_names: Vec<&str> = engines::registry().iter().map(|e| e.name()).collect();
    println!("[mx info]");
    println!("  version: {}", env!("CARGO_PKG_VERSION"));
    if runtimes.is_empty() {
        println!("  runtimes: (none detected)");
    } else {
        let names: Vec<String> = runtimes.iter().map(|r| r.to_string()).collect();
        println!("  runtimes: {}", names.join(", "));
    }
    println!("  engines: {}", engine_names.join(", "));
    println!("  java_bin: {}", cfg.java_bin);
    println!("  gcc_jar: {}", cfg.gcc_jar);
    println!("  gcc_legacy_jar: {}", cfg.gcc_legacy_jar);
    println!("  yui_jar: {}", cfg.yui_jar);
    println!("  terser_bin: {}", cfg.terser_bin);
    println!("  uglify_bin: {}", cfg.uglify_bin);
    println!("  cleancss_bin: {}", cfg.cleancss_bin);
    println!("  show_sizes: {}", cfg.show_sizes);
}

fn create_config(global: bool) -> Result<(), MinifyError> {
    let path = if global {
        let dir = dirs::config_dir()
            .expect("could not determine config directory")
            .join("mx");
        std::fs::create_dir_all(&dir)?;
        dir.join("config.toml")
    } else {
        PathBuf::from(".mx.toml")
    };

    if path.exists() {
        println!("[mx] config already exists: {}", path.display());
        return Ok(());
    }

    std::fs::write(&path, Config::default_toml())?;
    println!("[mx] created {}", path.display());
    Ok(())
}
