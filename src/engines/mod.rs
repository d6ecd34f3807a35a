pub mod cleancss;
pub mod gcc;
pub mod terser;
pub mod uglify;
pub mod yui;

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::args::ArgList;
use crate::config::Config;
use crate::error::MinifyError;
use crate::runner;

/// One minification request: input file, output path, user options.
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: ArgList,
}

/// An engine knows how to assemble the external command for a job.
pub trait Engine: std::fmt::Debug {
    fn name(&self) -> &'static str;

    /// Program + full argument list for this job.
    fn command(&self, job: &Job, cfg: &Config) -> (String, Vec<String>);

    /// Map a failed run's stderr to a structured error. Engines override
    /// this to recognize runtime-incompatibility banners.
    fn classify(&self, stderr: String) -> MinifyError {
        MinifyError::EngineFailed {
            engine: self.name(),
            stderr,
        }
    }
}

/// Every supported engine, in the order `all` runs them.
pub fn registry() -> Vec<Box<dyn Engine>> {
    vec![
        Box::new(gcc::ClosureCompiler { legacy: false }),
        Box::new(gcc::ClosureCompiler { legacy: true }),
        Box::new(yui::Yui { css: false }),
        Box::new(yui::Yui { css: true }),
        Box::new(terser::Terser),
        Box::new(uglify::UglifyJs),
        Box::new(cleancss::CleanCss),
    ]
}

pub fn by_name(name: &str) -> Result<Box<dyn Engine>, MinifyError> {
    registry()
        .into_iter()
        .find(|e| e.name() == name)
        .ok_or_else(|| MinifyError::UnknownEngine(name.to_string()))
}

/// Run one engine to completion. Success requires exit 0 and a non-empty
/// output file. Returns the elapsed milliseconds of the subprocess.
pub fn minify(engine: &dyn Engine, job: &Job, cfg: &Config) -> Result<u128, MinifyError> {
    let (program, args) = engine.command(job, cfg);
    debug!("[{}] {program} {}", engine.name(), args.join(" "));

    let result = runner::exec(&program, &args)?;
    if !result.success() {
        return Err(engine.classify(result.stderr));
    }
    ensure_output(engine.name(), &job.output)?;
    Ok(result.elapsed_ms)
}

fn ensure_output(engine: &'static str, path: &Path) -> Result<(), MinifyError> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.len() > 0 => Ok(()),
        _ => Err(MinifyError::EmptyOutput {
            engine,
            path: path.to_path_buf(),
        }),
    }
}

/// What one engine of a batch run produced.
pub struct EngineOutcome {
    pub engine: &'static str,
    pub output: PathBuf,
    pub result: Result<u128, MinifyError>,
}

/// Run every engine against the same input. Each engine writes to its own
/// suffixed output path so siblings do not clobber each other. Individual
/// failures are recorded, not propagated; the batch always completes.
pub fn run_all(input: &Path, output: &Path, options: &ArgList, cfg: &Config) -> Vec<EngineOutcome> {
    registry()
        .iter()
        .map(|engine| {
            let out = suffixed(output, engine.name());
            let job = Job {
                input: input.to_path_buf(),
                output: out.clone(),
                options: options.clone(),
            };
            let result = minify(engine.as_ref(), &job, cfg);
            if let Err(e) = &result {
                warn!("[{}] {e}", engine.name());
            }
            EngineOutcome {
                engine: engine.name(),
                output: out,
                result,
            }
        })
        .collect()
}

/// `dist/out.js` + `gcc` → `dist/out.gcc.js`; extension-less paths get the
/// engine name appended.
fn suffixed(path: &Path, engine: &str) -> PathBuf {
    match (path.file_stem(), path.extension()) {
        (Some(stem), Some(ext)) => path.with_file_name(format!(
            "{}.{engine}.{}",
            stem.to_string_lossy(),
            ext.to_string_lossy()
        )),
        _ => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            path.with_file_name(format!("{name}.{engine}"))
        }
    }
}

pub(crate) fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
