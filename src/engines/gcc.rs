use super::{Engine, Job, path_arg};
use crate::config::Config;
use crate::error::MinifyError;

/// Stable hint callers match on when the installed Java cannot load the
/// current Closure Compiler jar.
pub const JAVA_TOO_OLD: &str =
    "Latest Google Closure Compiler requires Java >= 1.7, please update Java or use gcc-legacy";

/// Google Closure Compiler via `java -jar`. The legacy build is the last
/// release that still runs on pre-1.7 Java runtimes.
#[derive(Debug)]
pub struct ClosureCompiler {
    pub legacy: bool,
}

impl Engine for ClosureCompiler {
    fn name(&self) -> &'static str {
        if self.legacy { "gcc-legacy" } else { "gcc" }
    }

    fn command(&self, job: &Job, cfg: &Config) -> (String, Vec<String>) {
        let jar = if self.legacy {
            &cfg.gcc_legacy_jar
        } else {
            &cfg.gcc_jar
        };
        let mut args = vec![
            "-jar".to_string(),
            jar.clone(),
            "--js".to_string(),
            path_arg(&job.input),
            "--js_output_file".to_string(),
            path_arg(&job.output),
        ];
        args.extend(job.options.to_tokens());
        (cfg.java_bin.clone(), args)
    }

    fn classify(&self, stderr: String) -> MinifyError {
        if !self.legacy && stderr.contains("UnsupportedClassVersionError") {
            return MinifyError::IncompatibleRuntime {
                engine: self.name(),
                hint: JAVA_TOO_OLD,
                diagnostic: stderr,
            };
        }
        MinifyError::EngineFailed {
            engine: self.name(),
            stderr,
        }
    }
}
